// src/spinner/handle.rs
//! Thread management for the render loop.

use std::io;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use super::render::{self, StopRequest};
use super::safe_state::SafeState;
use super::sink::SharedSink;

/// Owns one render thread and the stop channel that belongs to it alone.
pub struct RenderHandle {
    handle: thread::JoinHandle<()>,
    stop_tx: mpsc::Sender<StopRequest>,
    done_rx: mpsc::Receiver<()>,
}

impl RenderHandle {
    /// # Errors
    /// Returns an error if the OS refuses to spawn the thread.
    pub fn spawn(state: SafeState, sink: SharedSink) -> io::Result<Self> {
        let (stop_tx, stop_rx) = mpsc::channel();
        let (done_tx, done_rx) = mpsc::channel();

        let handle = thread::Builder::new()
            .name("twirl-render".to_string())
            .spawn(move || {
                render::run_render_loop(&state, &sink, &stop_rx);
                let _ = done_tx.send(());
            })?;

        Ok(Self {
            handle,
            stop_tx,
            done_rx,
        })
    }

    /// Asks the thread to finish. `farewell` is written by the thread itself
    /// after its last erase.
    pub fn signal(&self, farewell: Option<String>) {
        let _ = self.stop_tx.send(StopRequest { farewell });
    }

    /// Waits for the thread to finish its last erase. `false` means `timeout`
    /// expired first and the thread is still writing.
    pub fn wait(&self, timeout: Option<Duration>) -> bool {
        match timeout {
            Some(limit) => !matches!(
                self.done_rx.recv_timeout(limit),
                Err(RecvTimeoutError::Timeout)
            ),
            None => true,
        }
    }

    pub fn join(self) {
        let _ = self.handle.join();
    }
}
