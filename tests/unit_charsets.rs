// tests/unit_charsets.rs
use std::time::Duration;

use twirl::charsets::{char_set, generate_number_sequence, CHAR_SETS};
use twirl::spinner::visible_width;
use twirl::Spinner;

#[test]
fn test_catalog_size() {
    assert_eq!(CHAR_SETS.len(), 37);
}

#[test]
fn test_char_set_returns_owned_copy() {
    let mut set = char_set(0).unwrap();
    set[0] = "changed".to_string();
    assert_eq!(CHAR_SETS[0][0], "←");
    assert_eq!(char_set(0).unwrap()[0], "←");
}

#[test]
fn test_frames_are_single_line() {
    for (i, set) in CHAR_SETS.iter().enumerate() {
        assert!(
            set.iter().all(|f| !f.contains('\n') && visible_width(f) > 0),
            "set {i} has a blank or multi-line frame"
        );
    }
}

#[test]
fn test_number_sequence_drives_spinner() {
    let frames = generate_number_sequence(10);
    let s = Spinner::new(&frames, Duration::from_millis(50), []).unwrap();
    assert_eq!(s.frames(), frames);
}
