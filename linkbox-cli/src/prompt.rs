//! Interactive yes/no confirmation on the terminal.

use std::io::{self, BufRead, Write};

use linkbox_core::ConfirmationGate;

/// Asks on stderr and reads the answer from stdin.
///
/// Anything other than `y`/`yes` (any case) declines, including EOF and
/// read errors.
pub struct TerminalGate;

impl ConfirmationGate for TerminalGate {
    fn confirm(&mut self, prompt: &str) -> bool {
        let mut stderr = io::stderr();
        if write!(stderr, "{prompt} [y/N] ").and_then(|_| stderr.flush()).is_err() {
            return false;
        }
        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(0) | Err(_) => false,
            Ok(_) => is_affirmative(&answer),
        }
    }
}

pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
