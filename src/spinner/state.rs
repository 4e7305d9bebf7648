// src/spinner/state.rs
//! Live spinner configuration shared between the caller and the render thread.

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use crate::color::{Color, ColorFn};
use crate::error::{Result, SpinnerError};

/// Callback run around every frame write, given the spinner's sink.
pub type UpdateHook = Arc<dyn Fn(&mut dyn Write) + Send + Sync>;

pub struct SpinnerState {
    frames: Arc<[String]>,
    delay: Duration,
    prefix: String,
    suffix: String,
    color_fn: ColorFn,
    enabled: bool,
    hide_cursor: bool,
    final_message: Option<String>,
    last_output: String,
    pre_update: Option<UpdateHook>,
    post_update: Option<UpdateHook>,
}

/// Everything one tick of the render loop needs, read under a single lock.
#[derive(Clone)]
pub struct TickSnapshot {
    pub frames: Arc<[String]>,
    pub delay: Duration,
    pub prefix: String,
    pub suffix: String,
    pub color_fn: ColorFn,
    pub enabled: bool,
    pub pre_update: Option<UpdateHook>,
    pub post_update: Option<UpdateHook>,
}

impl TickSnapshot {
    /// `prefix + color(frame) + suffix`, followed by the separator space.
    #[must_use]
    pub fn compose(&self, index: usize) -> String {
        let frame = self
            .frames
            .get(index % self.frames.len().max(1))
            .map_or("", String::as_str);
        format!("{}{}{} ", self.prefix, (self.color_fn)(frame), self.suffix)
    }
}

/// Copies `frames` into an owned, immutable sequence.
///
/// # Errors
/// Returns `InvalidConfiguration` if `frames` is empty.
pub fn copy_frames<S: AsRef<str>>(frames: &[S]) -> Result<Arc<[String]>> {
    if frames.is_empty() {
        return Err(SpinnerError::config("frame sequence must not be empty"));
    }
    Ok(frames.iter().map(|f| f.as_ref().to_string()).collect())
}

/// # Errors
/// Returns `InvalidConfiguration` for a zero delay.
pub fn check_delay(delay: Duration) -> Result<Duration> {
    if delay.is_zero() {
        return Err(SpinnerError::config("delay must be greater than zero"));
    }
    Ok(delay)
}

impl SpinnerState {
    pub fn new(frames: Arc<[String]>, delay: Duration) -> Self {
        Self {
            frames,
            delay,
            prefix: String::new(),
            suffix: String::new(),
            color_fn: Color::default().formatter(),
            enabled: true,
            hide_cursor: false,
            final_message: None,
            last_output: String::new(),
            pre_update: None,
            post_update: None,
        }
    }

    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    pub fn set_frames(&mut self, frames: Arc<[String]>) {
        self.frames = frames;
    }

    /// Installs a reversed copy; snapshots already taken keep the old order.
    pub fn reverse(&mut self) {
        self.frames = self.frames.iter().rev().cloned().collect();
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn set_prefix(&mut self, prefix: String) {
        self.prefix = prefix;
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn set_suffix(&mut self, suffix: String) {
        self.suffix = suffix;
    }

    pub fn set_color_fn(&mut self, color_fn: ColorFn) {
        self.color_fn = color_fn;
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn hide_cursor(&self) -> bool {
        self.hide_cursor
    }

    pub fn set_hide_cursor(&mut self, hide: bool) {
        self.hide_cursor = hide;
    }

    pub fn set_final_message(&mut self, msg: Option<String>) {
        self.final_message = msg;
    }

    /// Hands out the final message once; later calls see `None`.
    pub fn take_final_message(&mut self) -> Option<String> {
        self.final_message.take()
    }

    pub fn last_output(&self) -> &str {
        &self.last_output
    }

    pub fn record_output(&mut self, line: String) {
        self.last_output = line;
    }

    pub fn set_pre_update(&mut self, hook: Option<UpdateHook>) {
        self.pre_update = hook;
    }

    pub fn set_post_update(&mut self, hook: Option<UpdateHook>) {
        self.post_update = hook;
    }

    pub fn snapshot(&self) -> TickSnapshot {
        TickSnapshot {
            frames: Arc::clone(&self.frames),
            delay: self.delay,
            prefix: self.prefix.clone(),
            suffix: self.suffix.clone(),
            color_fn: Arc::clone(&self.color_fn),
            enabled: self.enabled,
            pre_update: self.pre_update.clone(),
            post_update: self.post_update.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_state(frames: &[&str]) -> SpinnerState {
        let mut state = SpinnerState::new(copy_frames(frames).unwrap(), Duration::from_millis(10));
        state.set_color_fn(Arc::new(|s: &str| s.to_string()));
        state
    }

    #[test]
    fn compose_wraps_frame() {
        let mut state = plain_state(&["a", "b"]);
        state.set_prefix("[".into());
        state.set_suffix("] loading".into());
        let snap = state.snapshot();
        assert_eq!(snap.compose(0), "[a] loading ");
        assert_eq!(snap.compose(3), "[b] loading ");
    }

    #[test]
    fn reverse_leaves_snapshot_untouched() {
        let mut state = plain_state(&["1", "2", "3"]);
        let before = state.snapshot();
        state.reverse();
        assert_eq!(&*before.frames, &["1", "2", "3"]);
        assert_eq!(state.frames(), &["3", "2", "1"]);
    }

    #[test]
    fn final_message_taken_once() {
        let mut state = plain_state(&["x"]);
        state.set_final_message(Some("done".into()));
        assert_eq!(state.take_final_message().as_deref(), Some("done"));
        assert!(state.take_final_message().is_none());
    }

    #[test]
    fn rejects_empty_and_zero() {
        let empty: [&str; 0] = [];
        assert!(copy_frames(&empty).is_err());
        assert!(check_delay(Duration::ZERO).is_err());
        assert!(check_delay(Duration::from_nanos(1)).is_ok());
    }
}
