use std::io;

use tracing::warn;

use super::{Shell, ShellInput};

/// A non-interactive shell that reads lines from standard input.
///
/// Standard input is only locked while a line is read, so that commands run
/// between lines can read from it as well.
pub struct StdinShell;

impl Shell for StdinShell {
    fn prompt_line(&mut self, _prompt: &str) -> ShellInput {
        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) => ShellInput::None,
            Ok(_) => ShellInput::Line(line),
            Err(err) => {
                warn!("failed to read input: {}", err);
                ShellInput::None
            }
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }

    fn add_history_entry(&mut self, _line: &str) {
        // Intentionally left blank.
    }
}
