//! Grid layout demo: `print_wide` against the current terminal width.
//!
//! Run with `cargo run --example wide_listing` (requires a tty).

use ttykit::{create_surface, Tty};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let surface = create_surface()?;
    let tty = Tty::new(surface);

    let commands = [
        "airdrop", "balance", "build", "clear", "connect", "deploy", "help", "history", "init",
        "run", "test", "upgrade",
    ];

    tty.println("available commands:")?;
    tty.print_wide(&commands, 2)?;
    tty.println("")?;
    tty.print_wide::<&str>(&[], 2)?;
    Ok(())
}
