// src/spinner/render.rs
//! Render loop: compose, write, wait, erase.

use std::io::{self, Write};
use std::sync::mpsc::{Receiver, RecvTimeoutError, TryRecvError};
use std::time::Duration;

use crossterm::{
    cursor, queue,
    terminal::{self, Clear, ClearType},
};
use tracing::warn;

use super::lines::{compute_lines, visible_width};
use super::safe_state::SafeState;
use super::sink::SharedSink;
use super::state::{SpinnerState, TickSnapshot};

const FALLBACK_WIDTH: usize = 80;

/// What the owner sends to end the loop.
#[derive(Debug, Default)]
pub struct StopRequest {
    /// Written after the last erase, once the loop has finished with the sink.
    pub farewell: Option<String>,
}

pub fn run_render_loop(state: &SafeState, sink: &SharedSink, stop: &Receiver<StopRequest>) {
    let hide_cursor = state.read(SpinnerState::hide_cursor);
    if hide_cursor {
        set_cursor_visible(sink, false);
    }

    let mut index = 0;
    let request = loop {
        if let Some(request) = poll_stop(stop) {
            break request;
        }

        let snap = state.snapshot();
        let written = if snap.enabled {
            draw_frame(state, sink, &snap, index)
        } else {
            None
        };

        let stopped = wait_for_stop(stop, snap.delay);
        if let Some(line) = written {
            erase_output(sink, &line);
        }
        if let Some(request) = stopped {
            break request;
        }
        index = (index + 1) % snap.frames.len();
    };

    if hide_cursor {
        set_cursor_visible(sink, true);
    }
    if let Some(msg) = request.farewell {
        if let Err(e) = sink.write_str(&msg) {
            warn!(error = %e, "failed to write final message");
        }
    }
}

/// A dropped sender counts as a stop with nothing to print.
fn poll_stop(stop: &Receiver<StopRequest>) -> Option<StopRequest> {
    match stop.try_recv() {
        Ok(request) => Some(request),
        Err(TryRecvError::Disconnected) => Some(StopRequest::default()),
        Err(TryRecvError::Empty) => None,
    }
}

/// Sleeps for `delay` unless a stop arrives first.
fn wait_for_stop(stop: &Receiver<StopRequest>, delay: Duration) -> Option<StopRequest> {
    match stop.recv_timeout(delay) {
        Ok(request) => Some(request),
        Err(RecvTimeoutError::Disconnected) => Some(StopRequest::default()),
        Err(RecvTimeoutError::Timeout) => None,
    }
}

fn draw_frame(
    state: &SafeState,
    sink: &SharedSink,
    snap: &TickSnapshot,
    index: usize,
) -> Option<String> {
    let line = snap.compose(index);

    let mut w = sink.lock();
    if let Some(hook) = &snap.pre_update {
        hook(&mut *w);
    }
    let result = w.write_all(line.as_bytes());
    if let Some(hook) = &snap.post_update {
        hook(&mut *w);
    }
    let result = result.and_then(|()| w.flush());
    if result.is_ok() {
        w.frame_drawn();
    }
    drop(w);

    match result {
        Ok(()) => {
            state.modify(|s| s.record_output(line.clone()));
            Some(line)
        }
        Err(e) => {
            warn!(error = %e, "spinner frame write failed");
            None
        }
    }
}

fn erase_output(sink: &SharedSink, line: &str) {
    let width = terminal_width();
    let mut w = sink.lock();
    if let Err(e) = erase(&mut *w, line, width) {
        warn!(error = %e, "spinner erase failed");
    }
    w.frame_cleared();
}

fn terminal_width() -> usize {
    match terminal::size() {
        Ok((cols, _)) if cols > 0 => usize::from(cols),
        _ => FALLBACK_WIDTH,
    }
}

/// Removes `line` from the screen, assuming the cursor sits right after it.
///
/// Output that fits on one line is backspaced over by its visible width;
/// anything spanning several lines is cleared line by line, bottom up.
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn erase<W: Write>(w: &mut W, line: &str, max_width: usize) -> io::Result<()> {
    let lines = compute_lines(line, max_width);
    if lines <= 1 {
        let n = visible_width(line);
        let back = "\x08".repeat(n);
        write!(w, "{back}{}{back}", " ".repeat(n))?;
    } else {
        queue!(w, cursor::MoveToColumn(0), Clear(ClearType::CurrentLine))?;
        for _ in 1..lines {
            queue!(w, cursor::MoveUp(1), Clear(ClearType::CurrentLine))?;
        }
    }
    w.flush()
}

fn set_cursor_visible(sink: &SharedSink, visible: bool) {
    let mut w = sink.lock();
    let result = if visible {
        queue!(w, cursor::Show)
    } else {
        queue!(w, cursor::Hide)
    };
    if let Err(e) = result.and_then(|()| w.flush()) {
        warn!(error = %e, "spinner cursor toggle failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn erased(line: &str, width: usize) -> String {
        let mut buf = Vec::new();
        erase(&mut buf, line, width).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn single_line_backspaces_visible_width() {
        assert_eq!(erased("ab ", 80), "\x08\x08\x08   \x08\x08\x08");
    }

    #[test]
    fn escapes_not_backspaced() {
        let out = erased("\x1b[32m|\x1b[0m ", 80);
        assert_eq!(out.matches('\x08').count(), 4);
    }

    #[test]
    fn multi_line_clears_each_line() {
        let out = erased("one\ntwo\nthree ", 80);
        assert_eq!(out.matches("\x1b[2K").count(), 3);
        assert_eq!(out.matches("\x1b[1A").count(), 2);
        assert!(!out.contains('\x08'));
    }

    #[test]
    fn wrapped_line_uses_multi_line_strategy() {
        let out = erased(&"x".repeat(25), 10);
        assert_eq!(out.matches("\x1b[2K").count(), 3);
    }
}
