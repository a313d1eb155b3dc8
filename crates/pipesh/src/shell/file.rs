use std::{
    fs,
    io::{self, BufRead, BufReader},
    path::Path,
};

use tracing::warn;

use super::{Shell, ShellInput};

/// A non-interactive shell that reads lines from a buffered source.
pub struct BufferShell<R> {
    reader: R,
}

/// A shell that reads lines from a script file.
pub type FileBufferShell = BufferShell<BufReader<fs::File>>;

impl FileBufferShell {
    pub fn open(script_file: impl AsRef<Path>) -> io::Result<Self> {
        let reader = BufReader::new(fs::File::open(script_file)?);
        Ok(Self { reader })
    }
}

impl<R: BufRead> BufferShell<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> Shell for BufferShell<R> {
    fn prompt_line(&mut self, _prompt: &str) -> ShellInput {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
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
