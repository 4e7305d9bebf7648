// src/config/mod.rs
pub mod types;

pub use self::types::SpinnerConfig;

use std::fs;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use crate::charsets;
use crate::error::{Result, SpinnerError};
use crate::spinner::{Spinner, SpinnerOption};

pub const CONFIG_FILE: &str = "twirl.toml";

impl SpinnerConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads and parses a TOML config file.
    ///
    /// # Errors
    /// `Io` if the file cannot be read, `InvalidConfiguration` if it does not parse
    /// or names an unknown key.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| SpinnerError::Io {
            source,
            path: path.to_path_buf(),
        })?;
        Self::from_toml_str(&content)
    }

    /// Loads `twirl.toml` from `dir` if present, defaults otherwise.
    ///
    /// # Errors
    /// Same as [`SpinnerConfig::load`] when the file exists.
    pub fn load_local(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// # Errors
    /// `InvalidConfiguration` on malformed TOML or unknown keys.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// The frames this config selects: explicit `frames`, else the catalog entry.
    ///
    /// # Errors
    /// `InvalidConfiguration` for an unknown catalog index or an empty list.
    pub fn resolve_frames(&self) -> Result<Vec<String>> {
        let frames = match &self.frames {
            Some(frames) => frames.clone(),
            None => charsets::char_set(self.charset).ok_or_else(|| {
                SpinnerError::config(format!(
                    "charset {} does not exist (0..{})",
                    self.charset,
                    charsets::CHAR_SETS.len()
                ))
            })?,
        };
        if frames.is_empty() {
            return Err(SpinnerError::config("frames must not be empty"));
        }
        Ok(frames)
    }

    /// Builds a stopped spinner writing to `writer`.
    ///
    /// # Errors
    /// `InvalidConfiguration` for any invalid value.
    pub fn into_spinner(self, writer: impl Write + Send + 'static) -> Result<Spinner> {
        let frames = self.resolve_frames()?;
        let mut options = vec![
            SpinnerOption::writer(writer),
            SpinnerOption::Prefix(self.prefix),
            SpinnerOption::Suffix(self.suffix),
            SpinnerOption::HideCursor(self.hide_cursor),
        ];
        if let Some(color) = self.color {
            options.push(SpinnerOption::Color(color));
        }
        if let Some(msg) = self.final_message {
            options.push(SpinnerOption::FinalMessage(msg));
        }
        if let Some(ms) = self.stop_timeout_ms {
            options.push(SpinnerOption::StopTimeout(Duration::from_millis(ms)));
        }
        Spinner::new(&frames, Duration::from_millis(self.delay_ms), options)
    }
}
