//! The display-surface abstraction the tty renders into.
//!
//! A surface is whatever ultimately shows the bytes: a VT-compatible
//! stdout, an embedded terminal widget's screen buffer, or a mock in
//! tests. The tty only needs raw writes, the window size, a narrow
//! row-query capability, and two whole-buffer operations; it never
//! assumes a concrete widget's internals.

use crate::error::TtyResult;

/// Terminal window size in character cells. Always at least 1×1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermSize {
    pub cols: u16,
    pub rows: u16,
}

/// A previously rendered display row, as reported by the surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermLine {
    /// The row's visible text.
    pub text: String,
    /// True when the row is the continuation of a soft-wrapped line rather
    /// than the start of a hard line.
    pub is_wrapped: bool,
}

/// Byte sink plus the few queries the tty needs from its terminal.
///
/// Implementations may batch [`write_text`] for rendering efficiency;
/// [`write_text_sync`] must first make all previously batched output
/// visible, then write immediately. Cursor save/restore sequences depend
/// on that ordering.
///
/// [`write_text`]: TermSurface::write_text
/// [`write_text_sync`]: TermSurface::write_text_sync
pub trait TermSurface: Send + Sync {
    /// Write raw text (possibly containing control sequences). May batch.
    fn write_text(&self, text: &str) -> TtyResult<()>;

    /// Write raw text, bypassing batching. Prior batched writes are
    /// flushed first so ordering is preserved.
    fn write_text_sync(&self, text: &str) -> TtyResult<()>;

    /// Flush any batched output to the terminal.
    fn flush(&self) -> TtyResult<()>;

    /// Current window size.
    fn size(&self) -> TtyResult<TermSize>;

    /// Text of the display row `rows_above` the cursor's row, or `None`
    /// when the surface keeps no readable buffer (plain VT streams).
    fn line_at_cursor(&self, rows_above: usize) -> TtyResult<Option<TermLine>>;

    /// Clear the whole buffer: viewport and scroll-back.
    fn clear_buffer(&self) -> TtyResult<()>;

    /// Scroll the viewport to the bottom of the buffer.
    fn scroll_to_bottom(&self) -> TtyResult<()>;
}
