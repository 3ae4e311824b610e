//! Terminal surface backends for the ttykit engine.
//!
//! Provides the concrete [`TermSurface`] implementations the engine
//! renders into:
//! - `UnixTtySurface`: POSIX/VT stdout with optional write batching
//! - `MockSurface`: recording surface for tests

use std::io;

// Re-export core surface types
pub use ttykit_core::{TermLine, TermSize, TermSurface, TtyError, TtyResult};

/// Convert an `io::Error` into a surface error.
pub fn io_error_to_tty_error(e: io::Error) -> TtyError {
    TtyError::io(e.to_string())
}

/// Create the surface for the current platform.
pub fn create_surface() -> TtyResult<Box<dyn TermSurface>> {
    #[cfg(unix)]
    {
        let surface = unix::UnixTtySurface::new()?;
        Ok(Box::new(surface))
    }

    #[cfg(not(unix))]
    {
        Err(TtyError::unsupported(
            "tty surface",
            std::env::consts::OS.to_string(),
        ))
    }
}

#[cfg(unix)]
mod unix;

#[cfg(unix)]
pub use unix::UnixTtySurface;

// Mock implementation for testing
pub mod mock;

pub use mock::MockSurface;
