//! Unix VT surface: ANSI bytes straight to stdout.
//!
//! Write batching is off by default; renderers that emit many small
//! sequences per edit enable it and flush once per frame. The `sync`
//! write path drains the batch first so ordering is never violated.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use log::debug;
use ttykit_core::{TermLine, TermSize, TermSurface, TtyError, TtyResult};

use crate::io_error_to_tty_error;

/// Terminal surface over the process's stdout.
pub struct UnixTtySurface {
    stdout_fd: i32,
    buffer: Arc<Mutex<Vec<u8>>>,
    buffering_enabled: Arc<AtomicBool>,
}

impl UnixTtySurface {
    /// Create the surface; fails when stdout is not a tty.
    pub fn new() -> TtyResult<Self> {
        if unsafe { libc::isatty(libc::STDOUT_FILENO) } == 0 {
            return Err(TtyError::terminal("stdout is not a tty"));
        }

        Ok(UnixTtySurface {
            stdout_fd: libc::STDOUT_FILENO,
            buffer: Arc::new(Mutex::new(Vec::new())),
            buffering_enabled: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Batch subsequent writes until the next flush.
    pub fn enable_buffering(&self) {
        self.buffering_enabled.store(true, Ordering::Relaxed);
    }

    /// Stop batching and flush anything pending.
    pub fn disable_buffering(&self) -> TtyResult<()> {
        self.buffering_enabled.store(false, Ordering::Relaxed);
        self.flush()
    }

    fn write_bytes(&self, bytes: &[u8]) -> TtyResult<()> {
        if self.buffering_enabled.load(Ordering::Relaxed) {
            let mut buffer = self
                .buffer
                .lock()
                .map_err(|_| TtyError::io("output buffer lock poisoned"))?;
            buffer.extend_from_slice(bytes);
            Ok(())
        } else {
            self.write_bytes_direct(bytes)
        }
    }

    fn write_bytes_direct(&self, bytes: &[u8]) -> TtyResult<()> {
        let mut written = 0;
        while written < bytes.len() {
            let result = unsafe {
                libc::write(
                    self.stdout_fd,
                    bytes[written..].as_ptr() as *const libc::c_void,
                    bytes.len() - written,
                )
            };

            if result == -1 {
                let error = io::Error::last_os_error();
                match error.raw_os_error() {
                    Some(libc::EINTR) => continue,
                    _ => return Err(TtyError::io(format!("write failed: {error}"))),
                }
            } else {
                written += result as usize;
            }
        }
        Ok(())
    }

    fn query_window_size() -> io::Result<(u16, u16)> {
        let mut ws: libc::winsize = unsafe { std::mem::zeroed() };
        if unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, &mut ws) } == -1 {
            return Err(io::Error::last_os_error());
        }
        Ok((ws.ws_col, ws.ws_row))
    }
}

impl TermSurface for UnixTtySurface {
    fn write_text(&self, text: &str) -> TtyResult<()> {
        self.write_bytes(text.as_bytes())
    }

    fn write_text_sync(&self, text: &str) -> TtyResult<()> {
        // Pending batched output must land first.
        self.flush()?;
        self.write_bytes_direct(text.as_bytes())
    }

    fn flush(&self) -> TtyResult<()> {
        let pending = {
            let mut buffer = self
                .buffer
                .lock()
                .map_err(|_| TtyError::io("output buffer lock poisoned"))?;
            std::mem::take(&mut *buffer)
        };
        if !pending.is_empty() {
            debug!("flushing {} batched bytes", pending.len());
            self.write_bytes_direct(&pending)?;
        }
        Ok(())
    }

    fn size(&self) -> TtyResult<TermSize> {
        let (cols, rows) = Self::query_window_size().map_err(io_error_to_tty_error)?;
        // Some ptys report 0×0 before the first resize.
        Ok(TermSize {
            cols: cols.max(1),
            rows: rows.max(1),
        })
    }

    fn line_at_cursor(&self, _rows_above: usize) -> TtyResult<Option<TermLine>> {
        // A plain VT stream keeps no readable screen buffer.
        Ok(None)
    }

    fn clear_buffer(&self) -> TtyResult<()> {
        self.write_bytes(b"\x1b[2J\x1b[3J")
    }

    fn scroll_to_bottom(&self) -> TtyResult<()> {
        // The viewport of a real tty already follows output.
        Ok(())
    }
}
