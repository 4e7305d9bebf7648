// src/spinner/sink.rs
//! Output destination shared between the caller and the render thread.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// The current writer plus what the render thread has left on it.
///
/// While a frame is on screen, a replacement writer waits in `pending` so the
/// frame is erased on the sink it was drawn on.
pub struct SinkSlot {
    writer: Box<dyn Write + Send>,
    pending: Option<Box<dyn Write + Send>>,
    frame_shown: bool,
}

impl SinkSlot {
    pub fn frame_drawn(&mut self) {
        self.frame_shown = true;
    }

    /// Marks the on-screen frame as gone and installs any pending writer.
    pub fn frame_cleared(&mut self) {
        self.frame_shown = false;
        if let Some(next) = self.pending.take() {
            self.writer = next;
        }
    }
}

impl Write for SinkSlot {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

#[derive(Clone)]
pub struct SharedSink {
    inner: Arc<Mutex<SinkSlot>>,
}

impl SharedSink {
    pub fn new(writer: Box<dyn Write + Send>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(SinkSlot {
                writer,
                pending: None,
                frame_shown: false,
            })),
        }
    }

    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }

    pub fn lock(&self) -> MutexGuard<'_, SinkSlot> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Swaps the writer now, or after the next erase if a frame is on screen.
    pub fn replace(&self, writer: Box<dyn Write + Send>) {
        let mut slot = self.lock();
        if slot.frame_shown {
            slot.pending = Some(writer);
        } else {
            slot.writer = writer;
            slot.pending = None;
        }
    }

    /// Writes `text` and flushes, holding the lock for both.
    pub fn write_str(&self, text: &str) -> io::Result<()> {
        let mut w = self.lock();
        w.write_all(text.as_bytes())?;
        w.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Default)]
    struct Shared(Arc<Mutex<Vec<u8>>>);

    impl Write for Shared {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn replace_waits_for_on_screen_frame() {
        let (old, new) = (Shared::default(), Shared::default());
        let sink = SharedSink::new(Box::new(old.clone()));

        sink.lock().frame_drawn();
        sink.replace(Box::new(new.clone()));
        sink.write_str("erase").unwrap();
        sink.lock().frame_cleared();
        sink.write_str("next").unwrap();

        assert_eq!(&*old.0.lock().unwrap(), b"erase");
        assert_eq!(&*new.0.lock().unwrap(), b"next");
    }

    #[test]
    fn replace_is_immediate_when_clear() {
        let (old, new) = (Shared::default(), Shared::default());
        let sink = SharedSink::new(Box::new(old.clone()));
        sink.replace(Box::new(new.clone()));
        sink.write_str("x").unwrap();
        assert!(old.0.lock().unwrap().is_empty());
        assert_eq!(&*new.0.lock().unwrap(), b"x");
    }
}
