//! Pure position math for hard-wrapped terminal lines.
//!
//! These functions map linear offsets in already-rendered text (prompt
//! prefixes included, see [`crate::prompt`]) to display rows and columns,
//! assuming the terminal hard-wraps at a fixed column width with no word
//! breaking. They are deterministic and need no terminal to test.

use crate::unicode;

/// A display position produced by [`offset_to_col_row`].
///
/// `row` is 0-based from the first rendered row; `col` is 0-based within
/// the row. A `col` equal to the wrap width means the cursor sits at the
/// end of an exactly-full row, pending wrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColRow {
    pub col: usize,
    pub row: usize,
}

/// Walk `rendered` up to `offset` runes and report the display position.
///
/// `\n` forces a row break. A wrap break is taken before placing a
/// character once a row holds `width` characters, so a row of exactly
/// `width` characters does not occupy a phantom extra row on its own; the
/// following character starts the next row.
///
/// Total for any `offset` (offsets past the end of `rendered` walk the
/// whole string), and O(offset).
///
/// # Examples
///
/// ```
/// use ttykit_core::layout::offset_to_col_row;
///
/// let pos = offset_to_col_row("$ pwd", 5, 80);
/// assert_eq!((pos.col, pos.row), (5, 0));
///
/// let pos = offset_to_col_row("$ a\n> b", 7, 80);
/// assert_eq!((pos.col, pos.row), (3, 1));
/// ```
pub fn offset_to_col_row(rendered: &str, offset: usize, width: usize) -> ColRow {
    debug_assert!(width >= 1, "terminal width must be at least 1");

    let mut col = 0;
    let mut row = 0;
    for ch in rendered.chars().take(offset) {
        if ch == '\n' {
            col = 0;
            row += 1;
        } else {
            if col == width {
                col = 0;
                row += 1;
            }
            col += 1;
        }
    }

    ColRow { col, row }
}

/// Total display rows `rendered` occupies when hard-wrapped at `width`.
///
/// Agrees with [`offset_to_col_row`]: the row of the terminal offset is
/// always the last row.
///
/// # Examples
///
/// ```
/// use ttykit_core::layout::count_lines;
///
/// assert_eq!(count_lines("", 80), 1);
/// assert_eq!(count_lines("$ a\n> b", 80), 2);
/// assert_eq!(count_lines("abcde", 4), 2);
/// ```
pub fn count_lines(rendered: &str, width: usize) -> usize {
    offset_to_col_row(rendered, unicode::rune_count(rendered), width).row + 1
}
