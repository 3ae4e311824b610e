//! Escape-sequence emission: logical operations down to literal bytes.
//!
//! [`TermWriter`] owns the boxed surface and is the only place control
//! sequences are spelled out. The surface has no addressable-cursor API,
//! so every movement is relative: per-step sequences, carriage return, and
//! next/previous-line walks.

use crate::error::TtyResult;
use crate::surface::{TermLine, TermSize, TermSurface};

/// Thin sink turning print/clear/cursor operations into control-sequence
/// bytes on the backing surface.
pub struct TermWriter {
    surface: Box<dyn TermSurface>,
}

impl TermWriter {
    pub fn new(surface: Box<dyn TermSurface>) -> Self {
        TermWriter { surface }
    }

    /// Write already-normalized text; `sync` bypasses surface batching.
    pub fn write(&self, text: &str, sync: bool) -> TtyResult<()> {
        if sync {
            self.surface.write_text_sync(text)
        } else {
            self.surface.write_text(text)
        }
    }

    fn put(&self, seq: &str) -> TtyResult<()> {
        self.surface.write_text(seq)
    }

    fn repeat(&self, seq: &str, n: usize) -> TtyResult<()> {
        for _ in 0..n {
            self.put(seq)?;
        }
        Ok(())
    }

    /// Move the cursor up `n` rows, one step per sequence.
    pub fn cursor_up(&self, n: usize) -> TtyResult<()> {
        self.repeat("\x1b[A", n)
    }

    /// Move the cursor down `n` rows.
    pub fn cursor_down(&self, n: usize) -> TtyResult<()> {
        self.repeat("\x1b[B", n)
    }

    /// Move the cursor right `n` columns.
    pub fn cursor_forward(&self, n: usize) -> TtyResult<()> {
        self.repeat("\x1b[C", n)
    }

    /// Move the cursor left `n` columns.
    pub fn cursor_back(&self, n: usize) -> TtyResult<()> {
        self.repeat("\x1b[D", n)
    }

    /// Move to the start of the line `n` rows down.
    pub fn cursor_next_line(&self, n: usize) -> TtyResult<()> {
        self.repeat("\x1b[E", n)
    }

    /// Move to the start of the line above, without erasing.
    pub fn cursor_prev_line(&self, n: usize) -> TtyResult<()> {
        self.repeat("\x1b[F", n)
    }

    /// Move to the line above and erase it, `n` times.
    pub fn cursor_prev_line_erase(&self, n: usize) -> TtyResult<()> {
        self.repeat("\x1b[F\x1b[K", n)
    }

    /// Return to column 0 of the current row.
    pub fn carriage_return(&self) -> TtyResult<()> {
        self.put("\r")
    }

    /// Erase from the cursor to the end of the current row.
    pub fn erase_rest_of_line(&self) -> TtyResult<()> {
        self.put("\x1b[K")
    }

    /// Erase the entire current display row.
    pub fn erase_current_line(&self) -> TtyResult<()> {
        // `\x1b[G` homes the column; `\x1b[2K` wipes the row. Emitted
        // separately, matching the way embedded terminals tolerate them.
        self.put("\x1b[G")?;
        self.put("\x1b[2K")
    }

    /// Erase from the cursor to the end of the screen.
    pub fn erase_below(&self, sync: bool) -> TtyResult<()> {
        self.write("\x1b[0J", sync)
    }

    /// Erase the whole screen (viewport only; scroll-back untouched).
    pub fn erase_screen(&self) -> TtyResult<()> {
        self.put("\x1b[2J")
    }

    /// Home the cursor to row 0, column 0.
    pub fn cursor_home(&self) -> TtyResult<()> {
        self.put("\x1b[0;0H")
    }

    /// Move far left: the return-to-column-0 substitute used by the
    /// status path.
    pub fn far_left(&self, sync: bool) -> TtyResult<()> {
        self.write("\x1b[1000D", sync)
    }

    /// Save the cursor position.
    pub fn save_cursor(&self, sync: bool) -> TtyResult<()> {
        self.write("\x1b[s", sync)
    }

    /// Restore the saved cursor position.
    pub fn restore_cursor(&self, sync: bool) -> TtyResult<()> {
        self.write("\x1b[u", sync)
    }

    pub fn flush(&self) -> TtyResult<()> {
        self.surface.flush()
    }

    pub fn size(&self) -> TtyResult<TermSize> {
        self.surface.size()
    }

    pub fn line_at_cursor(&self, rows_above: usize) -> TtyResult<Option<TermLine>> {
        self.surface.line_at_cursor(rows_above)
    }

    pub fn clear_buffer(&self) -> TtyResult<()> {
        self.surface.clear_buffer()
    }

    pub fn scroll_to_bottom(&self) -> TtyResult<()> {
        self.surface.scroll_to_bottom()
    }
}
