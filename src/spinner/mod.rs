// src/spinner/mod.rs
//! Animated terminal spinner driven by a background render thread.
//!
//! A `Spinner` is `Send + Sync` and every method takes `&self`, so one
//! instance can be started on one thread and stopped from another. Each
//! instance owns its own locks and stop channel; independent spinners never
//! wait on each other.

pub mod lines;
pub mod options;
mod controller;
mod handle;
mod render;
mod safe_state;
mod sink;
mod state;

pub use controller::RunState;
pub use lines::{compute_lines, strip_ansi, visible_width};
pub use options::SpinnerOption;
pub use state::UpdateHook;

use std::io::Write;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::color::{Color, ColorFn};
use crate::error::{Result, SpinnerError};
use controller::SpinnerController;
use safe_state::SafeState;
use sink::SharedSink;
use state::{check_delay, copy_frames, SpinnerState};

pub struct Spinner {
    state: SafeState,
    sink: SharedSink,
    controller: Mutex<SpinnerController>,
}

impl Spinner {
    /// Builds a stopped spinner cycling through `frames` every `delay`.
    ///
    /// `frames` is copied; later changes to the caller's sequence have no effect.
    ///
    /// # Errors
    /// `InvalidConfiguration` for empty frames, a zero delay, or an invalid option value.
    pub fn new<S, I>(frames: &[S], delay: Duration, options: I) -> Result<Self>
    where
        S: AsRef<str>,
        I: IntoIterator<Item = SpinnerOption>,
    {
        let mut state = SpinnerState::new(copy_frames(frames)?, check_delay(delay)?);
        let mut controller = SpinnerController::new();
        let mut writer: Option<Box<dyn Write + Send>> = None;

        for option in options {
            match option {
                SpinnerOption::Writer(w) => writer = Some(w),
                SpinnerOption::Color(name) => {
                    let color: Color = name.parse().map_err(|_| {
                        SpinnerError::config(format!("unknown color option {name:?}"))
                    })?;
                    state.set_color_fn(color.formatter());
                }
                SpinnerOption::Frames(f) => state.set_frames(copy_frames(&f)?),
                SpinnerOption::Prefix(p) => state.set_prefix(p),
                SpinnerOption::Suffix(s) => state.set_suffix(s),
                SpinnerOption::FinalMessage(m) => state.set_final_message(Some(m)),
                SpinnerOption::HideCursor(h) => state.set_hide_cursor(h),
                SpinnerOption::StopTimeout(t) => {
                    if t.is_zero() {
                        return Err(SpinnerError::config("stop timeout must be greater than zero"));
                    }
                    controller.set_stop_timeout(Some(t));
                }
            }
        }

        Ok(Self {
            state: SafeState::new(state),
            sink: writer.map_or_else(SharedSink::stdout, SharedSink::new),
            controller: Mutex::new(controller),
        })
    }

    fn controller(&self) -> MutexGuard<'_, SpinnerController> {
        self.controller
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Starts the render thread.
    ///
    /// # Errors
    /// `AlreadyRunning` if the spinner is active.
    pub fn start(&self) -> Result<()> {
        self.controller().start(&self.state, &self.sink)
    }

    /// Like `start`, but an already running spinner is not an error.
    ///
    /// # Errors
    /// Only if the render thread cannot be spawned.
    pub fn ensure_running(&self) -> Result<()> {
        match self.start() {
            Err(SpinnerError::AlreadyRunning) => Ok(()),
            other => other,
        }
    }

    /// Stops the render thread, waits for the last frame to be erased, then
    /// prints the final message if one is set. No-op when stopped.
    ///
    /// With a stop timeout, a thread that overruns it is left to finish on its
    /// own. It still erases before printing the final message, and the next
    /// `start` waits for it.
    pub fn stop(&self) {
        self.controller().stop(&self.state);
    }

    /// Stops and starts again without letting another caller in between.
    /// The final message is kept for the eventual `stop`.
    ///
    /// # Errors
    /// Only if the new render thread cannot be spawned.
    pub fn restart(&self) -> Result<()> {
        self.controller().restart(&self.state, &self.sink)
    }

    #[must_use]
    pub fn active(&self) -> bool {
        self.controller().run_state() == RunState::Running
    }

    #[must_use]
    pub fn run_state(&self) -> RunState {
        self.controller().run_state()
    }

    pub fn reverse(&self) {
        self.state.modify(SpinnerState::reverse);
    }

    /// # Errors
    /// `InvalidConfiguration` if `frames` is empty; the current frames are kept.
    pub fn update_char_set<S: AsRef<str>>(&self, frames: &[S]) -> Result<()> {
        let frames = copy_frames(frames)?;
        self.state.modify(|s| s.set_frames(frames));
        Ok(())
    }

    /// # Errors
    /// `InvalidConfiguration` for a zero delay.
    pub fn update_speed(&self, delay: Duration) -> Result<()> {
        let delay = check_delay(delay)?;
        self.state.modify(|s| s.set_delay(delay));
        Ok(())
    }

    /// Switches to the named color and restarts a running spinner so it shows at once.
    ///
    /// # Errors
    /// `InvalidColor` if `name` is not one of red, green, yellow, blue, magenta, cyan, white.
    pub fn color(&self, name: &str) -> Result<()> {
        let color: Color = name.parse()?;
        let mut controller = self.controller();
        self.state.modify(|s| s.set_color_fn(color.formatter()));
        if controller.run_state() == RunState::Running {
            controller.restart(&self.state, &self.sink)?;
        }
        Ok(())
    }

    /// Installs an arbitrary frame formatter. Takes effect on the next tick.
    pub fn set_color_fn(&self, f: impl Fn(&str) -> String + Send + Sync + 'static) {
        let f: ColorFn = Arc::new(f);
        self.state.modify(|s| s.set_color_fn(f));
    }

    pub fn enable(&self) {
        self.state.modify(|s| s.set_enabled(true));
    }

    pub fn disable(&self) {
        self.state.modify(|s| s.set_enabled(false));
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.state.read(SpinnerState::enabled)
    }

    pub fn set_prefix(&self, prefix: impl Into<String>) {
        let p = prefix.into();
        self.state.modify(|s| s.set_prefix(p));
    }

    pub fn set_suffix(&self, suffix: impl Into<String>) {
        let sfx = suffix.into();
        self.state.modify(|s| s.set_suffix(sfx));
    }

    pub fn set_final_message(&self, msg: impl Into<String>) {
        let m = msg.into();
        self.state.modify(|s| s.set_final_message(Some(m)));
    }

    /// Applies from the next start.
    pub fn set_hide_cursor(&self, hide: bool) {
        self.state.modify(|s| s.set_hide_cursor(hide));
    }

    pub fn set_stop_timeout(&self, timeout: Option<Duration>) {
        self.controller().set_stop_timeout(timeout);
    }

    /// Redirects output. A frame already on screen is erased on the old sink
    /// first; the new one only ever sees whole frames.
    pub fn set_writer(&self, w: impl Write + Send + 'static) {
        self.sink.replace(Box::new(w));
    }

    /// Runs before every frame write with the sink locked.
    ///
    /// The hook must not call `set_writer`, `stop`, `restart` or `color` on
    /// this spinner: those wait for the render thread, which is waiting for the
    /// hook. Read-only accessors and the other setters are fine.
    pub fn set_pre_update(&self, hook: impl Fn(&mut dyn Write) + Send + Sync + 'static) {
        let h: UpdateHook = Arc::new(hook);
        self.state.modify(|s| s.set_pre_update(Some(h)));
    }

    /// Runs after every frame write, under the same constraints as `set_pre_update`.
    pub fn set_post_update(&self, hook: impl Fn(&mut dyn Write) + Send + Sync + 'static) {
        let h: UpdateHook = Arc::new(hook);
        self.state.modify(|s| s.set_post_update(Some(h)));
    }

    #[must_use]
    pub fn frames(&self) -> Vec<String> {
        self.state.read(|s| s.frames().to_vec())
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.state.read(SpinnerState::delay)
    }

    #[must_use]
    pub fn prefix(&self) -> String {
        self.state.read(|s| s.prefix().to_string())
    }

    #[must_use]
    pub fn suffix(&self) -> String {
        self.state.read(|s| s.suffix().to_string())
    }

    /// The last line written by the render thread, escape codes included.
    #[must_use]
    pub fn last_output(&self) -> String {
        self.state.read(|s| s.last_output().to_string())
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.controller().stop(&self.state);
    }
}
