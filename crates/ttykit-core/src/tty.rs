//! The tty engine: owns the input line and keeps the screen in sync.
//!
//! A [`Tty`] sits between a keystroke dispatcher and a display surface. It
//! owns the current input buffer, the logical cursor (a rune offset into
//! the input, never a screen coordinate), the prompt prefixes, and the
//! terminal size, and after every edit emits the minimal relative cursor
//! movement needed to keep the visible cursor honest. There are no
//! full-screen redraws and no absolute positioning.
//!
//! The engine is single-threaded and cooperative: all mutation happens
//! inside the dispatch path or explicit command calls, and the only
//! asynchrony is the one-shot [`PromptSession`] handed back from
//! [`read`]/[`read_char`], which the dispatcher settles later.
//!
//! [`read`]: Tty::read
//! [`read_char`]: Tty::read_char

use std::sync::{Arc, Mutex};

use log::trace;

use crate::error::TtyResult;
use crate::layout::{count_lines, offset_to_col_row, ColRow};
use crate::prompt::{apply_prompt_offset, apply_prompts, CONTINUATION_PROMPT_PREFIX, DEFAULT_PROMPT};
use crate::session::{ActiveCharPrompt, ActivePrompt, PromptSession};
use crate::surface::{TermSize, TermSurface};
use crate::unicode;
use crate::writer::TermWriter;

/// Prompt prefixes for the read in progress, plus the first-render flag.
///
/// Shared with session resolve hooks: completing a read resets the
/// prefixes to empty.
#[derive(Debug, Clone, Default)]
pub struct PromptState {
    pub prompt_prefix: String,
    pub continuation_prompt_prefix: String,
    pub first_init: bool,
}

/// The line-editing tty state machine.
pub struct Tty {
    writer: TermWriter,
    term_size: TermSize,
    prompt: Arc<Mutex<PromptState>>,
    input: String,
    cursor: usize,
}

impl Tty {
    /// Create a tty over `surface`, taking the initial size from it
    /// (80×24 when the surface cannot report one).
    pub fn new(surface: Box<dyn TermSurface>) -> Self {
        let writer = TermWriter::new(surface);
        let term_size = writer.size().unwrap_or(TermSize { cols: 80, rows: 24 });
        Tty {
            writer,
            term_size,
            prompt: Arc::new(Mutex::new(PromptState {
                first_init: true,
                ..PromptState::default()
            })),
            input: String::new(),
            cursor: 0,
        }
    }

    /// Begin a line read: print the prompt, reset the input buffer and
    /// cursor, and hand back the pending session.
    ///
    /// The dispatcher resolves the session with the completed line (which
    /// also resets the stored prefixes) or rejects it to abandon the
    /// read. Pass [`CONTINUATION_PROMPT_PREFIX`] unless the caller needs
    /// a custom continuation marker. At most one line read may be
    /// outstanding.
    pub fn read(
        &mut self,
        prompt_prefix: &str,
        continuation_prompt_prefix: &str,
    ) -> TtyResult<ActivePrompt> {
        if !prompt_prefix.is_empty() {
            self.print(prompt_prefix, false)?;
        }

        {
            let mut prompt = self.prompt.lock().unwrap();
            prompt.first_init = true;
            prompt.prompt_prefix = prompt_prefix.to_string();
            prompt.continuation_prompt_prefix = continuation_prompt_prefix.to_string();
        }
        self.input.clear();
        self.cursor = 0;

        Ok(ActivePrompt {
            prompt_prefix: prompt_prefix.to_string(),
            continuation_prompt_prefix: continuation_prompt_prefix.to_string(),
            session: self.new_session(),
        })
    }

    /// Begin a single-character read, e.g. a y/n confirmation.
    ///
    /// Unlike [`read`](Tty::read) the input buffer is left alone, so a
    /// char read can be interleaved with an outer line read still
    /// pending; the dispatcher must give a pending char session priority
    /// for the next keystroke.
    pub fn read_char(&mut self, prompt_prefix: &str) -> TtyResult<ActiveCharPrompt> {
        if !prompt_prefix.is_empty() {
            self.print(prompt_prefix, false)?;
        }

        Ok(ActiveCharPrompt {
            prompt_prefix: prompt_prefix.to_string(),
            session: self.new_session(),
        })
    }

    /// Print a message, normalizing every run of `\r`/`\n` to one
    /// canonical `\r\n` so callers never care which line-ending
    /// convention produced the text.
    ///
    /// `sync` bypasses the surface's write batching; required for output
    /// that must be visible before the next keystroke is processed.
    pub fn print(&self, message: &str, sync: bool) -> TtyResult<()> {
        self.writer.write(&normalize_newlines(message), sync)
    }

    /// Print a message followed by a line break.
    pub fn println(&self, message: &str) -> TtyResult<()> {
        self.print(&format!("{message}\n"), false)
    }

    /// Print items in a row-major grid sized to the terminal width.
    ///
    /// Column width is the widest item plus `padding`; at least one
    /// column is always used. Empty `items` prints a single blank line.
    pub fn print_wide<S: AsRef<str>>(&self, items: &[S], padding: usize) -> TtyResult<()> {
        if items.is_empty() {
            return self.println("");
        }

        let item_width = items
            .iter()
            .map(|item| unicode::display_width(item.as_ref()))
            .max()
            .unwrap_or(0)
            + padding;
        let item_width = item_width.max(1);
        let wide_cols = ((self.term_size.cols as usize) / item_width).max(1);
        let wide_rows = items.len().div_ceil(wide_cols);

        let mut i = 0;
        for _ in 0..wide_rows {
            let mut row_str = String::new();
            for _ in 0..wide_cols {
                if i < items.len() {
                    let item = items[i].as_ref();
                    row_str.push_str(item);
                    let fill = item_width - unicode::display_width(item);
                    row_str.push_str(&" ".repeat(fill));
                    i += 1;
                }
            }
            self.println(&row_str)?;
        }
        Ok(())
    }

    /// Print a transient status message, saving the cursor first. Pair
    /// with [`clear_status`](Tty::clear_status).
    pub fn print_status(&self, message: &str, sync: bool) -> TtyResult<()> {
        self.writer.save_cursor(sync)?;
        self.print(message, sync)
    }

    /// Remove the status message: restore the cursor and wipe everything
    /// below it.
    pub fn clear_status(&self, sync: bool) -> TtyResult<()> {
        self.writer.restore_cursor(sync)?;
        self.writer.far_left(sync)?;
        self.writer.erase_below(sync)
    }

    /// Erase every row the rendered input currently occupies, leaving the
    /// cursor at the start of the first of those rows.
    ///
    /// Safe on an empty input: a single line clear, no row movement.
    pub fn clear_input(&self) -> TtyResult<()> {
        let (prefix, cont) = self.prompt_prefixes();
        let rendered = apply_prompts(&prefix, &cont, &self.input);
        let width = self.term_size.cols as usize;

        let all_rows = count_lines(&rendered, width);
        let cursor_offset = apply_prompt_offset(&prefix, &cont, &self.input, self.cursor);
        let ColRow { row, .. } = offset_to_col_row(&rendered, cursor_offset, width);
        trace!("clear_input: {all_rows} rows, cursor on row {row}");

        // Walk down to the last occupied row, then erase upward.
        self.writer.cursor_next_line(all_rows - row - 1)?;
        self.writer.carriage_return()?;
        self.writer.erase_rest_of_line()?;
        self.writer.cursor_prev_line_erase(all_rows - 1)
    }

    /// Replace the displayed input with `new_input`.
    ///
    /// The on-screen input is cleared first unless
    /// `preserve_displayed_input` is set (callers that already cleared, or
    /// that are appending to a just-printed prompt, pass `true`). The
    /// logical cursor is clamped to the new input's length and the
    /// visible cursor is walked back from the end of the freshly written
    /// text with relative movement only.
    pub fn set_input(&mut self, new_input: &str, preserve_displayed_input: bool) -> TtyResult<()> {
        if !preserve_displayed_input {
            self.clear_input()?;
        }

        let (prefix, cont) = self.prompt_prefixes();
        let rendered = apply_prompts(&prefix, &cont, new_input);
        self.print(&rendered, false)?;

        let new_len = unicode::rune_count(new_input);
        if self.cursor > new_len {
            self.cursor = new_len;
        }

        let width = self.term_size.cols as usize;
        let cursor_offset = apply_prompt_offset(&prefix, &cont, new_input, self.cursor);
        let all_rows = count_lines(&rendered, width);
        let ColRow { col, row } = offset_to_col_row(&rendered, cursor_offset, width);
        trace!("set_input: {all_rows} rows, cursor at ({col}, {row})");

        self.writer.carriage_return()?;
        self.writer.cursor_prev_line(all_rows - row - 1)?;
        self.writer.cursor_forward(col)?;

        self.input = new_input.to_string();
        Ok(())
    }

    /// Move the logical cursor to `new_cursor`, clamped into the input.
    pub fn set_cursor(&mut self, new_cursor: usize) -> TtyResult<()> {
        let clamped = new_cursor.min(unicode::rune_count(&self.input));
        self.write_cursor_position(clamped)
    }

    /// Move the cursor without clamping.
    ///
    /// Reserved for keystroke handlers that already validated the offset;
    /// an out-of-range value is a dispatcher bug, not a runtime
    /// condition.
    pub fn set_cursor_directly(&mut self, new_cursor: usize) -> TtyResult<()> {
        debug_assert!(
            new_cursor <= unicode::rune_count(&self.input),
            "cursor offset {new_cursor} outside input"
        );
        self.write_cursor_position(new_cursor)
    }

    /// Clear the surface's whole buffer, scroll-back included.
    pub fn clear(&self) -> TtyResult<()> {
        self.writer.clear_buffer()
    }

    /// Redraw-from-scratch reset: erase the screen, home the cursor, and
    /// scroll the view to the bottom.
    pub fn clear_tty(&self) -> TtyResult<()> {
        self.writer.erase_screen()?;
        self.writer.cursor_home()?;
        self.writer.scroll_to_bottom()
    }

    /// Erase the entire current display row, for out-of-band messages
    /// that must not interleave with a partially drawn prompt.
    pub fn clear_current_line(&self) -> TtyResult<()> {
        self.writer.erase_current_line()
    }

    /// Record a new terminal size (clamped to at least 1×1).
    ///
    /// Does not redraw; callers re-render explicitly (e.g. `set_input`
    /// without preserving) when the new width invalidates old wrapping.
    pub fn set_term_size(&mut self, cols: u16, rows: u16) {
        trace!("set_term_size: {cols}x{rows}");
        self.term_size = TermSize {
            cols: cols.max(1),
            rows: rows.max(1),
        };
    }

    /// Current input line.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Logical cursor, as a rune offset into the input.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Terminal size used for wrapping math.
    pub fn size(&self) -> TermSize {
        self.term_size
    }

    /// Whether the prompt for the current read has yet to be rendered by
    /// the editing path.
    pub fn first_init(&self) -> bool {
        self.prompt.lock().unwrap().first_init
    }

    pub fn set_first_init(&mut self, value: bool) {
        self.prompt.lock().unwrap().first_init = value;
    }

    /// Prompt prefix of the read in progress (empty between reads).
    pub fn prompt_prefix(&self) -> String {
        self.prompt.lock().unwrap().prompt_prefix.clone()
    }

    pub fn set_prompt_prefix(&mut self, value: impl Into<String>) {
        self.prompt.lock().unwrap().prompt_prefix = value.into();
    }

    /// Continuation prefix of the read in progress.
    pub fn continuation_prompt_prefix(&self) -> String {
        self.prompt.lock().unwrap().continuation_prompt_prefix.clone()
    }

    pub fn set_continuation_prompt_prefix(&mut self, value: impl Into<String>) {
        self.prompt.lock().unwrap().continuation_prompt_prefix = value.into();
    }

    /// Text of the display row `rows_above` the cursor, when the surface
    /// can report it.
    pub fn current_line_string(&self, rows_above: usize) -> TtyResult<Option<String>> {
        Ok(self.writer.line_at_cursor(rows_above)?.map(|line| line.text))
    }

    /// Whether the current display line begins with a known prompt
    /// marker.
    ///
    /// Scans up to ten rows above the cursor, skipping soft-wrapped rows,
    /// and checks the first hard row against [`DEFAULT_PROMPT`] and
    /// [`CONTINUATION_PROMPT_PREFIX`]. `None` when the surface keeps no
    /// readable buffer. Used to decide whether a resize-triggered
    /// re-render must reprint the prompt.
    pub fn input_starts_with_prompt(&self) -> TtyResult<Option<bool>> {
        for rows_above in 0..10 {
            let line = match self.writer.line_at_cursor(rows_above)? {
                Some(line) => line,
                None => return Ok(None),
            };
            if !line.is_wrapped {
                return Ok(Some(
                    line.text.starts_with(DEFAULT_PROMPT)
                        || line.text.starts_with(CONTINUATION_PROMPT_PREFIX),
                ));
            }
        }
        Ok(None)
    }

    fn new_session<T>(&self) -> PromptSession<T> {
        let prompt = Arc::clone(&self.prompt);
        PromptSession::with_resolve_hook(move || {
            if let Ok(mut prompt) = prompt.lock() {
                prompt.prompt_prefix.clear();
                prompt.continuation_prompt_prefix.clear();
            }
        })
    }

    /// Diff the old and new rendered cursor positions and emit the
    /// minimal vertical-then-horizontal movement.
    fn write_cursor_position(&mut self, new_cursor: usize) -> TtyResult<()> {
        let (prefix, cont) = self.prompt_prefixes();
        let rendered = apply_prompts(&prefix, &cont, &self.input);
        let width = self.term_size.cols as usize;

        let prev_offset = apply_prompt_offset(&prefix, &cont, &self.input, self.cursor);
        let prev = offset_to_col_row(&rendered, prev_offset, width);

        let next_offset = apply_prompt_offset(&prefix, &cont, &self.input, new_cursor);
        let next = offset_to_col_row(&rendered, next_offset, width);
        trace!(
            "write_cursor_position: ({}, {}) -> ({}, {})",
            prev.col,
            prev.row,
            next.col,
            next.row
        );

        if next.row > prev.row {
            self.writer.cursor_down(next.row - prev.row)?;
        } else {
            self.writer.cursor_up(prev.row - next.row)?;
        }
        if next.col > prev.col {
            self.writer.cursor_forward(next.col - prev.col)?;
        } else {
            self.writer.cursor_back(prev.col - next.col)?;
        }

        self.cursor = new_cursor;
        Ok(())
    }

    fn prompt_prefixes(&self) -> (String, String) {
        let prompt = self.prompt.lock().unwrap();
        (
            prompt.prompt_prefix.clone(),
            prompt.continuation_prompt_prefix.clone(),
        )
    }
}

/// Collapse every run of `\r`/`\n` into a single canonical `\r\n`.
fn normalize_newlines(message: &str) -> String {
    let mut out = String::with_capacity(message.len());
    let mut chars = message.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\r' || ch == '\n' {
            while let Some(&next) = chars.peek() {
                if next != '\r' && next != '\n' {
                    break;
                }
                chars.next();
            }
            out.push_str("\r\n");
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionStatus;
    use crate::surface::TermLine;
    use ttykit_io::mock::MockSurface;

    fn tty_over(cols: u16, rows: u16) -> (Tty, MockSurface) {
        let mock = MockSurface::with_size(cols, rows);
        let tty = Tty::new(Box::new(mock.clone()));
        (tty, mock)
    }

    #[test]
    fn new_takes_size_from_surface() {
        let (tty, _mock) = tty_over(120, 40);
        assert_eq!(tty.size(), TermSize { cols: 120, rows: 40 });
        assert!(tty.first_init());
        assert_eq!(tty.input(), "");
        assert_eq!(tty.cursor(), 0);
    }

    #[test]
    fn normalize_collapses_line_ending_runs() {
        assert_eq!(normalize_newlines("a\nb"), "a\r\nb");
        assert_eq!(normalize_newlines("a\r\nb"), "a\r\nb");
        assert_eq!(normalize_newlines("a\rb"), "a\r\nb");
        assert_eq!(normalize_newlines("a\r\n\r\nb"), "a\r\nb");
        assert_eq!(normalize_newlines("a\n\n\nb"), "a\r\nb");
        assert_eq!(normalize_newlines("\n"), "\r\n");
        assert_eq!(normalize_newlines("plain"), "plain");
    }

    #[test]
    fn print_and_println_normalize() {
        let (tty, mock) = tty_over(80, 24);
        tty.print("one\ntwo", false).unwrap();
        assert_eq!(mock.take_output(), "one\r\ntwo");
        tty.println("done").unwrap();
        assert_eq!(mock.take_output(), "done\r\n");
    }

    #[test]
    fn print_sync_bypasses_batching() {
        let (tty, mock) = tty_over(80, 24);
        tty.print("status", true).unwrap();
        assert_eq!(mock.sync_writes(), vec!["status".to_string()]);
    }

    #[test]
    fn read_primes_prompt_state() {
        let (mut tty, mock) = tty_over(80, 24);
        let active = tty.read("$ ", "> ").unwrap();

        assert_eq!(mock.take_output(), "$ ");
        assert_eq!(tty.prompt_prefix(), "$ ");
        assert_eq!(tty.continuation_prompt_prefix(), "> ");
        assert!(tty.first_init());
        assert_eq!(tty.input(), "");
        assert_eq!(tty.cursor(), 0);
        assert_eq!(active.prompt_prefix, "$ ");
        assert!(active.session.is_pending());
    }

    #[test]
    fn empty_prompt_prints_nothing() {
        let (mut tty, mock) = tty_over(80, 24);
        tty.read("", "> ").unwrap();
        assert_eq!(mock.take_output(), "");
    }

    #[test]
    fn resolving_read_clears_prefixes() {
        let (mut tty, _mock) = tty_over(80, 24);
        let active = tty.read("$ ", "> ").unwrap();
        active.session.resolve("balance".to_string());
        assert_eq!(tty.prompt_prefix(), "");
        assert_eq!(tty.continuation_prompt_prefix(), "");
        assert_eq!(active.session.wait().unwrap(), "balance");
    }

    #[test]
    fn rejecting_read_keeps_prefixes() {
        let (mut tty, _mock) = tty_over(80, 24);
        let active = tty.read("$ ", "> ").unwrap();
        active.session.reject("dispatcher torn down");
        assert_eq!(tty.prompt_prefix(), "$ ");
        assert_eq!(active.session.status(), SessionStatus::Rejected);
    }

    #[test]
    fn read_char_leaves_input_alone() {
        let (mut tty, mock) = tty_over(80, 24);
        tty.read("$ ", "> ").unwrap();
        tty.set_input("rm -rf target", false).unwrap();
        mock.take_output();

        let confirm = tty.read_char("[y/n] ").unwrap();
        assert_eq!(mock.take_output(), "[y/n] ");
        assert_eq!(tty.input(), "rm -rf target");
        confirm.session.resolve('y');
        assert_eq!(confirm.session.wait().unwrap(), 'y');
    }

    #[test]
    fn clear_input_on_empty_input_is_single_line_clear() {
        let (tty, mock) = tty_over(80, 24);
        tty.clear_input().unwrap();
        assert_eq!(mock.take_output(), "\r\x1b[K");
    }

    #[test]
    fn clear_input_erases_every_rendered_row() {
        let (mut tty, mock) = tty_over(80, 24);
        tty.read("$ ", "> ").unwrap();
        tty.set_input("a\nb", false).unwrap();
        tty.set_cursor(3).unwrap();
        mock.take_output();

        // Cursor already on the last of 2 rows: no downward walk.
        tty.clear_input().unwrap();
        assert_eq!(mock.take_output(), "\r\x1b[K\x1b[F\x1b[K");
    }

    #[test]
    fn clear_input_walks_down_from_first_row() {
        let (mut tty, mock) = tty_over(80, 24);
        tty.read("$ ", "> ").unwrap();
        tty.set_input("a\nb", false).unwrap();
        tty.set_cursor(0).unwrap();
        mock.take_output();

        tty.clear_input().unwrap();
        assert_eq!(mock.take_output(), "\x1b[E\r\x1b[K\x1b[F\x1b[K");
    }

    #[test]
    fn set_input_round_trips_and_clamps_cursor() {
        let (mut tty, _mock) = tty_over(80, 24);
        tty.read("$ ", "> ").unwrap();
        tty.set_input("echo hello", false).unwrap();
        tty.set_cursor(10).unwrap();

        tty.set_input("echo", false).unwrap();
        assert_eq!(tty.input(), "echo");
        assert_eq!(tty.cursor(), 4);

        tty.set_input("echo hello world", false).unwrap();
        assert_eq!(tty.input(), "echo hello world");
        assert_eq!(tty.cursor(), 4);
    }

    #[test]
    fn set_input_writes_prompt_and_repositions() {
        let (mut tty, mock) = tty_over(80, 24);
        tty.read("$ ", "> ").unwrap();
        mock.take_output();

        // Cursor is logical offset 0, so after writing "$ hi" the visible
        // cursor walks back to column 2 (just after the prompt).
        tty.set_input("hi", false).unwrap();
        assert_eq!(mock.take_output(), "\r\x1b[K$ hi\r\x1b[C\x1b[C");
    }

    #[test]
    fn set_input_renders_continuation_prompts() {
        let (mut tty, mock) = tty_over(80, 24);
        tty.read("$ ", "> ").unwrap();
        tty.set_cursor_directly(0).unwrap();
        mock.take_output();

        tty.set_input("a\nb", false).unwrap();
        let output = mock.take_output();
        assert!(output.contains("$ a\r\n> b"), "got {output:?}");
    }

    #[test]
    fn set_input_preserving_skips_clear() {
        let (mut tty, mock) = tty_over(80, 24);
        tty.read("$ ", "> ").unwrap();
        mock.take_output();

        tty.set_input("hi", true).unwrap();
        assert_eq!(mock.take_output(), "$ hi\r\x1b[C\x1b[C");
    }

    #[test]
    fn set_cursor_emits_minimal_horizontal_deltas() {
        let (mut tty, mock) = tty_over(80, 24);
        tty.read("$ ", "> ").unwrap();
        tty.set_input("hello", false).unwrap();
        mock.take_output();

        tty.set_cursor(5).unwrap();
        assert_eq!(mock.take_output(), "\x1b[C\x1b[C\x1b[C\x1b[C\x1b[C");
        tty.set_cursor(3).unwrap();
        assert_eq!(mock.take_output(), "\x1b[D\x1b[D");
        // Clamped past the end: moves to offset 5.
        tty.set_cursor(100).unwrap();
        assert_eq!(tty.cursor(), 5);
        assert_eq!(mock.take_output(), "\x1b[C\x1b[C");
    }

    #[test]
    fn set_cursor_crosses_wrapped_rows_vertically() {
        let (mut tty, mock) = tty_over(4, 24);
        tty.read("", "").unwrap();
        tty.set_input("abcdefgh", false).unwrap();
        tty.set_cursor(0).unwrap();
        mock.take_output();

        tty.set_cursor(8).unwrap();
        assert_eq!(mock.take_output(), "\x1b[B\x1b[C\x1b[C\x1b[C\x1b[C");
    }

    #[test]
    fn print_wide_lays_out_grid() {
        let (tty, mock) = tty_over(10, 24);
        tty.print_wide(&["ab", "cde"], 2).unwrap();
        assert_eq!(mock.take_output(), "ab   cde  \r\n");
    }

    #[test]
    fn print_wide_wraps_to_rows() {
        let (tty, mock) = tty_over(10, 24);
        tty.print_wide(&["a", "b", "c"], 2).unwrap();
        assert_eq!(mock.take_output(), "a  b  c  \r\n");

        let (tty, mock) = tty_over(7, 24);
        tty.print_wide(&["a", "b", "c"], 2).unwrap();
        assert_eq!(mock.take_output(), "a  b  \r\nc  \r\n");
    }

    #[test]
    fn print_wide_empty_prints_blank_line() {
        let (tty, mock) = tty_over(10, 24);
        tty.print_wide::<&str>(&[], 2).unwrap();
        assert_eq!(mock.take_output(), "\r\n");
    }

    #[test]
    fn print_wide_never_divides_below_one_column() {
        let (tty, mock) = tty_over(3, 24);
        tty.print_wide(&["abcdef"], 2).unwrap();
        assert_eq!(mock.take_output(), "abcdef  \r\n");
    }

    #[test]
    fn status_saves_then_restores_cursor() {
        let (tty, mock) = tty_over(80, 24);
        tty.print_status("downloading...", false).unwrap();
        assert_eq!(mock.take_output(), "\x1b[sdownloading...");

        tty.clear_status(false).unwrap();
        assert_eq!(mock.take_output(), "\x1b[u\x1b[1000D\x1b[0J");
    }

    #[test]
    fn sync_status_bypasses_batching() {
        let (tty, mock) = tty_over(80, 24);
        tty.print_status("working", true).unwrap();
        tty.clear_status(true).unwrap();
        assert_eq!(
            mock.sync_writes(),
            vec![
                "\x1b[s".to_string(),
                "working".to_string(),
                "\x1b[u".to_string(),
                "\x1b[1000D".to_string(),
                "\x1b[0J".to_string(),
            ]
        );
    }

    #[test]
    fn clear_tty_erases_homes_and_scrolls() {
        let (tty, mock) = tty_over(80, 24);
        tty.clear_tty().unwrap();
        assert_eq!(mock.take_output(), "\x1b[2J\x1b[0;0H");
        assert_eq!(mock.scroll_to_bottom_count(), 1);
    }

    #[test]
    fn clear_clears_surface_buffer() {
        let (tty, mock) = tty_over(80, 24);
        tty.clear().unwrap();
        assert_eq!(mock.clear_buffer_count(), 1);
    }

    #[test]
    fn clear_current_line_erases_whole_row() {
        let (tty, mock) = tty_over(80, 24);
        tty.clear_current_line().unwrap();
        assert_eq!(mock.take_output(), "\x1b[G\x1b[2K");
    }

    #[test]
    fn set_term_size_clamps_to_one_by_one() {
        let (mut tty, _mock) = tty_over(80, 24);
        tty.set_term_size(0, 0);
        assert_eq!(tty.size(), TermSize { cols: 1, rows: 1 });
        tty.set_term_size(132, 50);
        assert_eq!(tty.size(), TermSize { cols: 132, rows: 50 });
    }

    #[test]
    fn prompt_detection_skips_wrapped_rows() {
        let (tty, mock) = tty_over(80, 24);
        mock.set_lines(vec![
            TermLine {
                text: "ld foo".to_string(),
                is_wrapped: true,
            },
            TermLine {
                text: "$ echo hello wor".to_string(),
                is_wrapped: false,
            },
        ]);
        assert_eq!(tty.input_starts_with_prompt().unwrap(), Some(true));
    }

    #[test]
    fn prompt_detection_reports_plain_output() {
        let (tty, mock) = tty_over(80, 24);
        mock.set_lines(vec![TermLine {
            text: "program output".to_string(),
            is_wrapped: false,
        }]);
        assert_eq!(tty.input_starts_with_prompt().unwrap(), Some(false));
    }

    #[test]
    fn prompt_detection_without_buffer_is_none() {
        let (tty, _mock) = tty_over(80, 24);
        assert_eq!(tty.input_starts_with_prompt().unwrap(), None);
    }

    #[test]
    fn current_line_string_reads_surface_rows() {
        let (tty, mock) = tty_over(80, 24);
        mock.set_lines(vec![TermLine {
            text: "$ deploy".to_string(),
            is_wrapped: false,
        }]);
        assert_eq!(
            tty.current_line_string(0).unwrap(),
            Some("$ deploy".to_string())
        );
        assert_eq!(tty.current_line_string(5).unwrap(), None);
    }

    #[test]
    fn prompt_setters_update_state() {
        let (mut tty, _mock) = tty_over(80, 24);
        tty.set_prompt_prefix("? ");
        tty.set_continuation_prompt_prefix(".. ");
        tty.set_first_init(false);
        assert_eq!(tty.prompt_prefix(), "? ");
        assert_eq!(tty.continuation_prompt_prefix(), ".. ");
        assert!(!tty.first_init());
    }
}
