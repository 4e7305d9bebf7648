// src/color.rs
//! Foreground colors a spinner may be drawn in.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use colored::Colorize;

use crate::error::SpinnerError;

/// Decorates a frame before it is written. Must be shareable with the render thread.
pub type ColorFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    #[default]
    White,
}

impl Color {
    pub const ALL: [Color; 7] = [
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
        }
    }

    /// Applies this color to `text`.
    #[must_use]
    pub fn paint(self, text: &str) -> String {
        let painted = match self {
            Color::Red => text.red(),
            Color::Green => text.green(),
            Color::Yellow => text.yellow(),
            Color::Blue => text.blue(),
            Color::Magenta => text.magenta(),
            Color::Cyan => text.cyan(),
            Color::White => text.white(),
        };
        painted.to_string()
    }

    #[must_use]
    pub fn formatter(self) -> ColorFn {
        Arc::new(move |text: &str| self.paint(text))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = SpinnerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| SpinnerError::InvalidColor(s.to_string()))
    }
}
