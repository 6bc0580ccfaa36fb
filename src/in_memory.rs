use std::fmt::{Debug, Formatter};
use std::sync::{Arc, Mutex};

use crate::TermLike;

const DEFAULT_ROWS: u16 = 24;
const DEFAULT_COLS: u16 = 80;

/// A terminal that records everything written to it.
///
/// This is just an [`Arc`] around its internal state, so it can be freely cloned: hand one
/// clone to a [`ProgressDrawTarget`](crate::ProgressDrawTarget) and inspect the other.
#[derive(Debug, Clone)]
pub struct InMemoryTerm {
    state: Arc<Mutex<InMemoryTermState>>,
}

impl InMemoryTerm {
    /// Creates a terminal of the given size that reports its width.
    pub fn new(rows: u16, cols: u16) -> InMemoryTerm {
        assert!(rows > 0, "rows must be > 0");
        assert!(cols > 0, "cols must be > 0");
        InMemoryTerm::with_state(InMemoryTermState::new(rows, cols, true))
    }

    /// Creates a sink that behaves like redirected output: writes are recorded
    /// but the width query answers `None`.
    pub fn piped() -> InMemoryTerm {
        InMemoryTerm::with_state(InMemoryTermState::new(DEFAULT_ROWS, DEFAULT_COLS, false))
    }

    fn with_state(state: InMemoryTermState) -> InMemoryTerm {
        InMemoryTerm {
            state: Arc::new(Mutex::new(state)),
        }
    }

    /// Returns the raw output written so far, escape codes included.
    pub fn output(&self) -> String {
        String::from_utf8_lossy(&self.state.lock().unwrap().buffer).into_owned()
    }

    /// Forgets all output written so far.
    pub fn clear(&self) {
        self.state.lock().unwrap().buffer.clear();
    }

    /// Returns the visible screen contents after replaying the output through a
    /// terminal emulator, with trailing empty lines removed.
    #[cfg(feature = "in_memory")]
    pub fn contents(&self) -> String {
        let state = self.state.lock().unwrap();
        let mut parser = vt100::Parser::new(state.rows, state.cols, 0);

        // vt100 needs the full \r\n sequence to jump to the next line and reset the cursor to
        // the beginning of the line.
        let mut bytes = Vec::with_capacity(state.buffer.len());
        for &b in &state.buffer {
            if b == b'\n' {
                bytes.push(b'\r');
            }
            bytes.push(b);
        }
        parser.process(&bytes);

        let mut rows = parser
            .screen()
            .rows(0, state.cols)
            .collect::<Vec<_>>();
        while rows.last().map_or(false, |line| line.is_empty()) {
            rows.pop();
        }
        rows.join("\n")
    }
}

impl TermLike for InMemoryTerm {
    fn width(&self) -> Option<u16> {
        let state = self.state.lock().unwrap();
        state.reports_size.then_some(state.cols)
    }

    fn write_str(&self, s: &str) -> std::io::Result<()> {
        self.state
            .lock()
            .unwrap()
            .buffer
            .extend_from_slice(s.as_bytes());
        Ok(())
    }

    fn flush(&self) -> std::io::Result<()> {
        Ok(())
    }
}

struct InMemoryTermState {
    rows: u16,
    cols: u16,
    reports_size: bool,
    buffer: Vec<u8>,
}

impl InMemoryTermState {
    fn new(rows: u16, cols: u16, reports_size: bool) -> InMemoryTermState {
        InMemoryTermState {
            rows,
            cols,
            reports_size,
            buffer: Vec::new(),
        }
    }
}

impl Debug for InMemoryTermState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryTermState")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .finish_non_exhaustive()
    }
}
