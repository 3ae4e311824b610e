//! Line-editing tty engine for screen-buffer terminals.
//!
//! This crate implements the device-file layer that sits between a
//! keystroke-driven shell and a terminal display: it owns the current
//! input line and logical cursor, renders prompts (including continuation
//! prompts for multi-line input), and emits exactly the relative-movement
//! escape sequences needed to keep the visible cursor and text in sync
//! after every edit.
//!
//! The main pieces:
//! - [`layout`]: pure position math against hard wrapping at an
//!   arbitrary width
//! - [`prompt`]: prompt prefix formatting and offset translation
//! - [`session`]: one-shot prompt sessions settled by an external
//!   keystroke dispatcher
//! - [`surface`]: the narrow display-surface trait the engine renders
//!   into (implementations live in `ttykit-io`)
//! - [`writer`]: logical operations down to literal control sequences
//! - [`tty`]: the state machine tying it all together

pub mod error;
pub mod layout;
pub mod prompt;
pub mod session;
pub mod surface;
pub mod tty;
pub mod unicode;
pub mod writer;

pub mod prelude;

// Re-export commonly used types for convenience
pub use error::{SessionError, TtyError, TtyResult};
pub use layout::{count_lines, offset_to_col_row, ColRow};
pub use prompt::{
    apply_prompt_offset, apply_prompts, CONTINUATION_PROMPT_PREFIX, DEFAULT_PROMPT,
};
pub use session::{ActiveCharPrompt, ActivePrompt, PromptSession, SessionStatus};
pub use surface::{TermLine, TermSize, TermSurface};
pub use tty::{PromptState, Tty};
pub use unicode::{byte_index_from_rune_index, display_width, rune_count, rune_slice};
pub use writer::TermWriter;
