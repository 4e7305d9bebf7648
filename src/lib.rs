//! Thread-safe animated terminal spinner.
//!
//! ```no_run
//! use std::time::Duration;
//! use twirl::{charsets::CHAR_SETS, Spinner, SpinnerOption};
//!
//! let s = Spinner::new(CHAR_SETS[9], Duration::from_millis(100), [SpinnerOption::color("cyan")])?;
//! s.set_suffix(" fetching");
//! s.start()?;
//! // ... work ...
//! s.stop();
//! # Ok::<(), twirl::SpinnerError>(())
//! ```

pub mod charsets;
pub mod color;
pub mod config;
pub mod error;
pub mod spinner;

pub use color::{Color, ColorFn};
pub use error::{Result, SpinnerError};
pub use spinner::{compute_lines, RunState, Spinner, SpinnerOption};
