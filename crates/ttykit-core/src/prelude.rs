//! Convenient re-exports for common usage patterns.
//!
//! # Examples
//!
//! ```
//! use ttykit_core::prelude::*;
//!
//! let rendered = apply_prompts("$ ", "> ", "a\nb");
//! assert_eq!(count_lines(&rendered, 80), 2);
//! ```

// The engine and its state
pub use crate::tty::{PromptState, Tty};

// Prompt sessions
pub use crate::session::{ActiveCharPrompt, ActivePrompt, PromptSession, SessionStatus};

// Position math and prompt formatting
pub use crate::layout::{count_lines, offset_to_col_row, ColRow};
pub use crate::prompt::{
    apply_prompt_offset, apply_prompts, CONTINUATION_PROMPT_PREFIX, DEFAULT_PROMPT,
};

// Surface abstraction
pub use crate::surface::{TermLine, TermSize, TermSurface};

// Error handling
pub use crate::error::{SessionError, TtyError, TtyResult};

// Unicode utilities
pub use crate::unicode::{display_width, rune_count, rune_slice};

/// Result type for fallible engine operations.
pub type Result<T> = std::result::Result<T, TtyError>;
