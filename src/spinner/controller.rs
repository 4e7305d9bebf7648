// src/spinner/controller.rs
//! Start/stop state machine for the render thread.

use std::time::Duration;

use tracing::{debug, warn};

use super::handle::RenderHandle;
use super::safe_state::SafeState;
use super::sink::SharedSink;
use super::state::SpinnerState;
use crate::error::{Result, SpinnerError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Stopped,
    Running,
}

/// Holds the run state together with the thread it describes, so the two never disagree.
pub struct SpinnerController {
    run_state: RunState,
    handle: Option<RenderHandle>,
    /// A thread that outlived its stop timeout; joined before the next start.
    lingering: Option<RenderHandle>,
    stop_timeout: Option<Duration>,
}

impl SpinnerController {
    #[must_use]
    pub fn new() -> Self {
        Self {
            run_state: RunState::Stopped,
            handle: None,
            lingering: None,
            stop_timeout: None,
        }
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn set_stop_timeout(&mut self, timeout: Option<Duration>) {
        self.stop_timeout = timeout;
    }

    /// # Errors
    /// `AlreadyRunning` if a render thread is active; `Spawn` if the thread cannot start.
    pub fn start(&mut self, state: &SafeState, sink: &SharedSink) -> Result<()> {
        if self.run_state == RunState::Running {
            return Err(SpinnerError::AlreadyRunning);
        }

        // Two generations must never write at once.
        if let Some(old) = self.lingering.take() {
            debug!("waiting for detached render thread");
            old.join();
        }

        let handle = RenderHandle::spawn(state.clone(), sink.clone()).map_err(SpinnerError::Spawn)?;
        self.handle = Some(handle);
        self.run_state = RunState::Running;

        let (frames, delay) = state.read(|s| (s.frames().len(), s.delay()));
        debug!(frames, ?delay, "spinner started");
        Ok(())
    }

    /// Stops the render thread, which writes `farewell` after its final erase.
    /// Returns `false` if already stopped.
    fn halt_with(&mut self, farewell: Option<String>) -> bool {
        if self.run_state == RunState::Stopped {
            return false;
        }

        if let Some(handle) = self.handle.take() {
            handle.signal(farewell);
            if handle.wait(self.stop_timeout) {
                handle.join();
            } else {
                warn!(timeout = ?self.stop_timeout, "render thread did not stop in time; detached");
                self.lingering = Some(handle);
            }
        }
        self.run_state = RunState::Stopped;
        debug!("spinner stopped");
        true
    }

    /// Stops the render thread and has it print the final message (once) if one is set.
    pub fn stop(&mut self, state: &SafeState) {
        if self.run_state == RunState::Stopped {
            return;
        }
        let farewell = state.modify(SpinnerState::take_final_message);
        self.halt_with(farewell);
    }

    /// # Errors
    /// Propagates errors from `start`.
    pub fn restart(&mut self, state: &SafeState, sink: &SharedSink) -> Result<()> {
        self.halt_with(None);
        debug!("spinner restarting");
        self.start(state, sink)
    }
}

impl Default for SpinnerController {
    fn default() -> Self {
        Self::new()
    }
}
