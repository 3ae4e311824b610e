//! Scripted walk through the engine on a real terminal.
//!
//! No keyboard needed: this demo plays the role of the keystroke
//! dispatcher itself, echoing edits, moving the cursor, flashing a status
//! line, and finally resolving the prompt session.
//!
//! Run with `cargo run --example scripted_shell` (requires a tty).

use std::thread;
use std::time::Duration;

use ttykit::{create_surface, Tty, CONTINUATION_PROMPT_PREFIX, DEFAULT_PROMPT};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let surface = create_surface()?;
    let mut tty = Tty::new(surface);

    tty.println("ttykit scripted demo")?;
    let active = tty.read(DEFAULT_PROMPT, CONTINUATION_PROMPT_PREFIX)?;

    // "Type" a command one keystroke at a time.
    let command = "echo hello world";
    for i in 1..=command.len() {
        tty.set_input(&command[..i], false)?;
        tty.set_cursor(i)?;
        thread::sleep(Duration::from_millis(50));
    }

    // Jump the cursor around like a line editor would.
    tty.set_cursor(5)?;
    thread::sleep(Duration::from_millis(400));
    tty.set_cursor(command.len())?;
    thread::sleep(Duration::from_millis(400));

    // A transient status line below the input.
    tty.print_status("\n[building...]", true)?;
    thread::sleep(Duration::from_millis(900));
    tty.clear_status(true)?;

    // Enter: the dispatcher resolves the session with the final line.
    let dispatcher = active.session.clone();
    let typed = command.to_string();
    let handle = thread::spawn(move || dispatcher.resolve(typed));
    let line = active.session.wait()?;
    handle.join().expect("dispatcher thread");

    tty.println("")?;
    tty.println(&format!("read line: {line:?}"))?;
    Ok(())
}
