// src/charsets.rs
//! Catalog of frame sequences.
//!
//! Indices are stable; scripts and config files refer to sets by number.

pub const CHAR_SETS: &[&[&str]] = &[
    &["←", "↖", "↑", "↗", "→", "↘", "↓", "↙"],
    &["▁", "▃", "▄", "▅", "▆", "▇", "█", "▇", "▆", "▅", "▄", "▃"],
    &["▖", "▘", "▝", "▗"],
    &["┤", "┘", "┴", "└", "├", "┌", "┬", "┐"],
    &["◢", "◣", "◤", "◥"],
    &["◰", "◳", "◲", "◱"],
    &["◴", "◷", "◶", "◵"],
    &["◐", "◓", "◑", "◒"],
    &[".", "o", "O", "@", "*"],
    &["|", "/", "-", "\\"],
    &["◡◡", "⊙⊙", "◠◠"],
    &["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"],
    &[
        ">))'>", " >))'>", "  >))'>", "   >))'>", "    >))'>", "   <'((<", "  <'((<", " <'((<",
    ],
    &["⠁", "⠂", "⠄", "⡀", "⢀", "⠠", "⠐", "⠈"],
    &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"],
    &[
        "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p", "q", "r",
        "s", "t", "u", "v", "w", "x", "y", "z",
    ],
    &["▉", "▊", "▋", "▌", "▍", "▎", "▏", "▎", "▍", "▌", "▋", "▊", "▉"],
    &["■", "□", "▪", "▫"],
    &["←", "↑", "→", "↓"],
    &["╫", "╪"],
    &["⇐", "⇖", "⇑", "⇗", "⇒", "⇘", "⇓", "⇙"],
    &[
        "⠁", "⠁", "⠉", "⠙", "⠚", "⠒", "⠂", "⠂", "⠒", "⠲", "⠴", "⠤", "⠄", "⠄", "⠤", "⠠", "⠠",
        "⠤", "⠦", "⠖", "⠒", "⠐", "⠐", "⠒", "⠓", "⠋", "⠉", "⠈", "⠈",
    ],
    &[
        "⠈", "⠉", "⠋", "⠓", "⠒", "⠐", "⠐", "⠒", "⠖", "⠦", "⠤", "⠠", "⠠", "⠤", "⠦", "⠖", "⠒",
        "⠐", "⠐", "⠒", "⠓", "⠋", "⠉", "⠈",
    ],
    &[
        "⠁", "⠉", "⠙", "⠚", "⠒", "⠂", "⠂", "⠒", "⠲", "⠴", "⠤", "⠄", "⠄", "⠤", "⠴", "⠲", "⠒",
        "⠂", "⠂", "⠒", "⠚", "⠙", "⠉", "⠁",
    ],
    &[
        "⠋", "⠙", "⠚", "⠒", "⠂", "⠂", "⠒", "⠲", "⠴", "⠦", "⠖", "⠒", "⠐", "⠐", "⠒", "⠓", "⠋",
    ],
    &[
        "ｦ", "ｧ", "ｨ", "ｩ", "ｪ", "ｫ", "ｬ", "ｭ", "ｮ", "ｯ", "ｱ", "ｲ", "ｳ", "ｴ", "ｵ", "ｶ", "ｷ",
        "ｸ", "ｹ", "ｺ", "ｻ", "ｼ", "ｽ", "ｾ", "ｿ", "ﾀ", "ﾁ", "ﾂ", "ﾃ", "ﾄ", "ﾅ", "ﾆ", "ﾇ", "ﾈ",
        "ﾉ", "ﾊ", "ﾋ", "ﾌ", "ﾍ", "ﾎ", "ﾏ", "ﾐ", "ﾑ", "ﾒ", "ﾓ", "ﾔ", "ﾕ", "ﾖ", "ﾗ", "ﾘ", "ﾙ",
        "ﾚ", "ﾛ", "ﾜ", "ﾝ",
    ],
    &[".", "..", "..."],
    &[
        "▁", "▂", "▃", "▄", "▅", "▆", "▇", "█", "▉", "▊", "▋", "▌", "▍", "▎", "▏", "▏", "▎", "▍",
        "▌", "▋", "▊", "▉", "█", "▇", "▆", "▅", "▄", "▃", "▂", "▁",
    ],
    &[".", "o", "O", "°", "O", "o", "."],
    &["+", "x"],
    &["v", "<", "^", ">"],
    &[
        ">>--->", " >>--->", "  >>--->", "   >>--->", "    >>--->", "    <---<<", "   <---<<",
        "  <---<<", " <---<<", "<---<<",
    ],
    &[
        "|", "||", "|||", "||||", "|||||", "|||||||", "||||||||", "|||||||", "||||||", "|||||",
        "||||", "|||", "||", "|",
    ],
    &[
        "[          ]",
        "[=         ]",
        "[==        ]",
        "[===       ]",
        "[====      ]",
        "[=====     ]",
        "[======    ]",
        "[=======   ]",
        "[========  ]",
        "[========= ]",
        "[==========]",
    ],
    &[
        "(*---------)",
        "(-*--------)",
        "(--*-------)",
        "(---*------)",
        "(----*-----)",
        "(-----*----)",
        "(------*---)",
        "(-------*--)",
        "(--------*-)",
        "(---------*)",
    ],
    &["█▒▒▒▒▒▒▒▒▒", "███▒▒▒▒▒▒▒", "█████▒▒▒▒▒", "███████▒▒▒", "██████████"],
];

/// Returns an owned copy of the catalog entry at `index`.
#[must_use]
pub fn char_set(index: usize) -> Option<Vec<String>> {
    CHAR_SETS
        .get(index)
        .map(|set| set.iter().map(|s| (*s).to_string()).collect())
}

/// Frames `"0"` through `len - 1`, for counter-style spinners.
#[must_use]
pub fn generate_number_sequence(len: usize) -> Vec<String> {
    (0..len).map(|i| i.to_string()).collect()
}
