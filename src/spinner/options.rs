// src/spinner/options.rs
//! Construction-time options for `Spinner::new`.

use std::fmt;
use std::io::Write;
use std::time::Duration;

/// One optional setting applied while a spinner is being built.
///
/// Options are applied in order, so a later option overrides an earlier one.
pub enum SpinnerOption {
    /// Output destination (default: stdout).
    Writer(Box<dyn Write + Send>),
    /// Initial color, by name.
    Color(String),
    /// Replaces the frames passed to `new`.
    Frames(Vec<String>),
    Prefix(String),
    Suffix(String),
    /// Printed once when the spinner stops.
    FinalMessage(String),
    HideCursor(bool),
    /// Upper bound on how long `stop` waits for the render thread.
    StopTimeout(Duration),
}

impl SpinnerOption {
    pub fn writer(w: impl Write + Send + 'static) -> Self {
        SpinnerOption::Writer(Box::new(w))
    }

    pub fn color(name: impl Into<String>) -> Self {
        SpinnerOption::Color(name.into())
    }

    pub fn frames<S: AsRef<str>>(frames: &[S]) -> Self {
        SpinnerOption::Frames(frames.iter().map(|f| f.as_ref().to_string()).collect())
    }

    pub fn prefix(text: impl Into<String>) -> Self {
        SpinnerOption::Prefix(text.into())
    }

    pub fn suffix(text: impl Into<String>) -> Self {
        SpinnerOption::Suffix(text.into())
    }

    pub fn final_message(text: impl Into<String>) -> Self {
        SpinnerOption::FinalMessage(text.into())
    }
}

impl fmt::Debug for SpinnerOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpinnerOption::Writer(_) => f.write_str("Writer(..)"),
            SpinnerOption::Color(c) => f.debug_tuple("Color").field(c).finish(),
            SpinnerOption::Frames(fr) => f.debug_tuple("Frames").field(fr).finish(),
            SpinnerOption::Prefix(p) => f.debug_tuple("Prefix").field(p).finish(),
            SpinnerOption::Suffix(s) => f.debug_tuple("Suffix").field(s).finish(),
            SpinnerOption::FinalMessage(m) => f.debug_tuple("FinalMessage").field(m).finish(),
            SpinnerOption::HideCursor(h) => f.debug_tuple("HideCursor").field(h).finish(),
            SpinnerOption::StopTimeout(t) => f.debug_tuple("StopTimeout").field(t).finish(),
        }
    }
}
