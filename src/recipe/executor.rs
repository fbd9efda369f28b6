//! # Recipe Executor
//!
//! Hands the chosen recipe to the external recipe runner once the picker
//! has left the alternate screen.
//!
//! The runner inherits stdin, stdout, and stderr from the picker so that
//! recipes that prompt for input or print progress behave exactly as they
//! would when run by hand:
//!
//! ```ignore
//! Command::new("ujust")
//!     .arg(recipe)
//!     .stdin(Stdio::inherit())
//!     .stdout(Stdio::inherit())
//!     .stderr(Stdio::inherit())
//! ```
//!
//! A runner that cannot be launched is logged and otherwise ignored, and
//! the runner's exit status never becomes the picker's own.

use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};
use std::process::{Command, Stdio};

/// Clear the screen and print the status line naming `recipe`.
pub fn announce<W: Write>(out: &mut W, recipe: &str) -> io::Result<()> {
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    write!(out, "Running recipe: {}...\n\n", recipe)?;
    out.flush()
}

/// Run `runner <recipe>` attached to the controlling terminal.
///
/// Returns the runner's exit code, or `None` when it could not be launched
/// or was terminated by a signal.
pub fn run_recipe(runner: &str, recipe: &str) -> Option<i32> {
    let status = Command::new(runner)
        .arg(recipe)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status();

    match status {
        Ok(status) => {
            log::info!("'{} {}' finished with {}", runner, recipe, status);
            status.code()
        }
        Err(err) => {
            log::warn!("Failed to launch '{} {}': {}", runner, recipe, err);
            None
        }
    }
}
