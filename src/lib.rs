//! # ttykit: line-editing tty engine
//!
//! ttykit is the layer between a keystroke-driven shell and a
//! screen-buffer terminal: it owns the input line and logical cursor,
//! renders prompts (with continuation prefixes for multi-line input), and
//! keeps the visible cursor in sync using only relative movement
//! sequences: no full-screen redraws, no absolute positioning.
//!
//! ## Quick start
//!
//! ```no_run
//! use ttykit::prelude::*;
//!
//! let surface = ttykit::create_surface().unwrap();
//! let mut tty = Tty::new(surface);
//!
//! // Ask for a line; a keystroke dispatcher settles the session later.
//! let active = tty.read(DEFAULT_PROMPT, CONTINUATION_PROMPT_PREFIX).unwrap();
//! # active.session.resolve("demo".to_string());
//! let line = active.session.wait().unwrap();
//! ```
//!
//! ## Architecture
//!
//! - **`ttykit-core`**: position math, prompt formatting, prompt
//!   sessions, the tty state machine, and the `TermSurface` abstraction
//! - **`ttykit-io`**: concrete surfaces, a Unix/VT stdout backend and a
//!   recording mock for tests
//! - **`ttykit`**: this crate, re-exports plus demos and integration tests

// Re-export the engine from ttykit-core
pub use ttykit_core::{
    apply_prompt_offset, apply_prompts, count_lines, offset_to_col_row, unicode,
    ActiveCharPrompt, ActivePrompt, ColRow, PromptSession, PromptState, SessionError,
    SessionStatus, TermLine, TermSize, TermSurface, TermWriter, Tty, TtyError, TtyResult,
    CONTINUATION_PROMPT_PREFIX, DEFAULT_PROMPT,
};

// Re-export surface backends from ttykit-io
pub use ttykit_io::*;

/// Convenient re-exports for common usage patterns.
///
/// Import everything you need with `use ttykit::prelude::*;`
pub mod prelude {
    pub use ttykit_core::prelude::*;
    pub use ttykit_io::{create_surface, MockSurface};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exports_are_wired() {
        let rendered = apply_prompts(DEFAULT_PROMPT, CONTINUATION_PROMPT_PREFIX, "a\nb");
        assert_eq!(rendered, "$ a\n> b");
        assert_eq!(count_lines(&rendered, 80), 2);

        let mock = MockSurface::new();
        let tty = Tty::new(Box::new(mock.clone()));
        tty.println("hello").unwrap();
        assert_eq!(mock.take_output(), "hello\r\n");
    }
}
