use serde::{Deserialize, Serialize};

/// Spinner settings as read from `twirl.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpinnerConfig {
    /// Index into `CHAR_SETS`; ignored when `frames` is set.
    #[serde(default = "default_charset")]
    pub charset: usize,
    #[serde(default)]
    pub frames: Option<Vec<String>>,
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub suffix: String,
    #[serde(default)]
    pub final_message: Option<String>,
    #[serde(default)]
    pub hide_cursor: bool,
    #[serde(default)]
    pub stop_timeout_ms: Option<u64>,
}

impl Default for SpinnerConfig {
    fn default() -> Self {
        Self {
            charset: default_charset(),
            frames: None,
            delay_ms: default_delay_ms(),
            color: None,
            prefix: String::new(),
            suffix: String::new(),
            final_message: None,
            hide_cursor: false,
            stop_timeout_ms: None,
        }
    }
}

fn default_charset() -> usize {
    9
}

fn default_delay_ms() -> u64 {
    100
}
