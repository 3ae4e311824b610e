//! Prompt formatting: turning raw input into the rendered on-screen string.
//!
//! All cursor geometry must be computed against the *rendered* string these
//! functions produce, never against raw input alone: the prompt prefix and
//! the continuation prefixes after embedded newlines shift every position.

use crate::unicode;

/// Prompt marker printed at the start of a fresh command line.
pub const DEFAULT_PROMPT: &str = "$ ";

/// Prefix rendered after each embedded newline of a multi-line input.
pub const CONTINUATION_PROMPT_PREFIX: &str = "> ";

/// Render `input` with its prompt prefixes applied.
///
/// Returns `prompt_prefix + input`, with every `\n` in `input` followed by
/// `continuation_prefix`. This is the canonical "what is on screen" string
/// used by the position math in [`crate::layout`].
///
/// # Examples
///
/// ```
/// use ttykit_core::prompt::apply_prompts;
///
/// assert_eq!(apply_prompts("$ ", "> ", ""), "$ ");
/// assert_eq!(apply_prompts("$ ", "> ", "a\nb"), "$ a\n> b");
/// ```
pub fn apply_prompts(prompt_prefix: &str, continuation_prefix: &str, input: &str) -> String {
    let mut rendered = String::with_capacity(prompt_prefix.len() + input.len());
    rendered.push_str(prompt_prefix);
    for ch in input.chars() {
        rendered.push(ch);
        if ch == '\n' {
            rendered.push_str(continuation_prefix);
        }
    }
    rendered
}

/// Translate a logical offset into `input` to an offset in the rendered
/// string.
///
/// Equals the rune length of `apply_prompts` over the first
/// `logical_offset` runes of `input`.
pub fn apply_prompt_offset(
    prompt_prefix: &str,
    continuation_prefix: &str,
    input: &str,
    logical_offset: usize,
) -> usize {
    let head = unicode::rune_slice(input, 0, logical_offset);
    unicode::rune_count(&apply_prompts(prompt_prefix, continuation_prefix, head))
}
