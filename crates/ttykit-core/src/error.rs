//! Error types for tty and surface operations.

use std::fmt;

/// Errors that can occur while driving a terminal surface.
#[derive(Debug, Clone, PartialEq)]
pub enum TtyError {
    /// Underlying I/O failure while writing to the surface.
    Io(String),
    /// The surface is not a usable terminal.
    Terminal(String),
    /// Operation not available on this platform or backend.
    Unsupported { feature: String, platform: String },
}

impl fmt::Display for TtyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TtyError::Io(msg) => write!(f, "I/O error: {msg}"),
            TtyError::Terminal(msg) => write!(f, "Terminal error: {msg}"),
            TtyError::Unsupported { feature, platform } => {
                write!(
                    f,
                    "Feature '{feature}' not supported on platform '{platform}'"
                )
            }
        }
    }
}

impl std::error::Error for TtyError {}

impl TtyError {
    /// Create an I/O error.
    pub fn io(msg: impl Into<String>) -> Self {
        TtyError::Io(msg.into())
    }

    /// Create a terminal setup/teardown error.
    pub fn terminal(msg: impl Into<String>) -> Self {
        TtyError::Terminal(msg.into())
    }

    /// Create an unsupported-feature error.
    pub fn unsupported(feature: impl Into<String>, platform: impl Into<String>) -> Self {
        TtyError::Unsupported {
            feature: feature.into(),
            platform: platform.into(),
        }
    }
}

/// Result type for tty and surface operations.
pub type TtyResult<T> = Result<T, TtyError>;

/// Errors delivered to code awaiting a prompt session.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionError {
    /// The dispatcher abandoned the read before it completed.
    Abandoned(String),
    /// The session's value was already taken by an earlier wait.
    AlreadyTaken,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Abandoned(reason) => write!(f, "Read abandoned: {reason}"),
            SessionError::AlreadyTaken => write!(f, "Session value already taken"),
        }
    }
}

impl std::error::Error for SessionError {}

impl SessionError {
    /// Create an abandoned-read error with the dispatcher's reason.
    pub fn abandoned(reason: impl Into<String>) -> Self {
        SessionError::Abandoned(reason.into())
    }
}
