use rustyline::{error::ReadlineError, DefaultEditor};
use tracing::warn;

use super::{Shell, ShellInput};

/// An interactive shell backed by a line editor.
///
/// History is kept in memory for the duration of the session.
pub struct RustylineShell {
    editor: DefaultEditor,
}

impl RustylineShell {
    pub fn new() -> rustyline::Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl Shell for RustylineShell {
    fn prompt_line(&mut self, prompt: &str) -> ShellInput {
        match self.editor.readline(prompt) {
            Ok(line) => ShellInput::Line(line),
            Err(ReadlineError::Interrupted) => ShellInput::Interrupt,
            Err(ReadlineError::Eof) => ShellInput::None,
            Err(err) => {
                warn!("failed to read line: {}", err);
                ShellInput::None
            }
        }
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn add_history_entry(&mut self, line: &str) {
        if let Err(err) = self.editor.add_history_entry(line) {
            warn!("failed to add history entry: {}", err);
        }
    }
}
