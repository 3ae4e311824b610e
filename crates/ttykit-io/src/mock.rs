//! Mock surface for testing.
//!
//! Records every write in order (so tests can assert byte-exact escape
//! streams), counts buffer-level operations, and serves test-configured
//! rows for the line query. Clones share state: keep one clone for
//! assertions and hand the other to the tty.

use std::sync::{Arc, Mutex, MutexGuard};

use ttykit_core::{TermLine, TermSize, TermSurface, TtyResult};

struct MockState {
    written: Vec<u8>,
    sync_writes: Vec<String>,
    flush_count: usize,
    clear_buffer_count: usize,
    scroll_to_bottom_count: usize,
    lines: Vec<TermLine>,
    size: TermSize,
}

/// A `TermSurface` that records instead of rendering.
#[derive(Clone)]
pub struct MockSurface {
    state: Arc<Mutex<MockState>>,
}

impl Default for MockSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSurface {
    /// Mock with the conventional 80×24 size.
    pub fn new() -> Self {
        Self::with_size(80, 24)
    }

    pub fn with_size(cols: u16, rows: u16) -> Self {
        MockSurface {
            state: Arc::new(Mutex::new(MockState {
                written: Vec::new(),
                sync_writes: Vec::new(),
                flush_count: 0,
                clear_buffer_count: 0,
                scroll_to_bottom_count: 0,
                lines: Vec::new(),
                size: TermSize { cols, rows },
            })),
        }
    }

    /// Everything written so far, batched and sync writes interleaved in
    /// order.
    pub fn output(&self) -> String {
        String::from_utf8_lossy(&self.lock().written).into_owned()
    }

    /// Drain and return the recorded output.
    pub fn take_output(&self) -> String {
        let mut state = self.lock();
        let written = std::mem::take(&mut state.written);
        String::from_utf8_lossy(&written).into_owned()
    }

    /// Only the writes that bypassed batching, in order.
    pub fn sync_writes(&self) -> Vec<String> {
        self.lock().sync_writes.clone()
    }

    pub fn flush_count(&self) -> usize {
        self.lock().flush_count
    }

    pub fn clear_buffer_count(&self) -> usize {
        self.lock().clear_buffer_count
    }

    pub fn scroll_to_bottom_count(&self) -> usize {
        self.lock().scroll_to_bottom_count
    }

    pub fn set_size(&self, cols: u16, rows: u16) {
        self.lock().size = TermSize { cols, rows };
    }

    /// Configure the rows served by the line query; index 0 is the
    /// cursor's row, higher indices are rows above it.
    pub fn set_lines(&self, lines: Vec<TermLine>) {
        self.lock().lines = lines;
    }

    pub fn push_line(&self, text: &str, is_wrapped: bool) {
        self.lock().lines.push(TermLine {
            text: text.to_string(),
            is_wrapped,
        });
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap()
    }
}

impl TermSurface for MockSurface {
    fn write_text(&self, text: &str) -> TtyResult<()> {
        self.lock().written.extend_from_slice(text.as_bytes());
        Ok(())
    }

    fn write_text_sync(&self, text: &str) -> TtyResult<()> {
        let mut state = self.lock();
        state.written.extend_from_slice(text.as_bytes());
        state.sync_writes.push(text.to_string());
        Ok(())
    }

    fn flush(&self) -> TtyResult<()> {
        self.lock().flush_count += 1;
        Ok(())
    }

    fn size(&self) -> TtyResult<TermSize> {
        Ok(self.lock().size)
    }

    fn line_at_cursor(&self, rows_above: usize) -> TtyResult<Option<TermLine>> {
        Ok(self.lock().lines.get(rows_above).cloned())
    }

    fn clear_buffer(&self) -> TtyResult<()> {
        self.lock().clear_buffer_count += 1;
        Ok(())
    }

    fn scroll_to_bottom(&self) -> TtyResult<()> {
        self.lock().scroll_to_bottom_count += 1;
        Ok(())
    }
}
