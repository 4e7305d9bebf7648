// src/spinner/safe_state.rs
//! Thread-safe wrapper for spinner state.

use super::state::{SpinnerState, TickSnapshot};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Per-instance lock around `SpinnerState`.
/// The caller and the render thread both go through here; there is no shared global lock.
#[derive(Clone)]
pub struct SafeState {
    inner: Arc<Mutex<SpinnerState>>,
}

impl SafeState {
    #[must_use]
    pub fn new(state: SpinnerState) -> Self {
        Self {
            inner: Arc::new(Mutex::new(state)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SpinnerState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Access the state with a closure for modification.
    pub fn modify<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut SpinnerState) -> R,
    {
        f(&mut self.lock())
    }

    /// Read-only access under the lock.
    pub fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&SpinnerState) -> R,
    {
        f(&self.lock())
    }

    #[must_use]
    pub fn snapshot(&self) -> TickSnapshot {
        self.lock().snapshot()
    }
}
