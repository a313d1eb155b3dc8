use std::path::PathBuf;

/// Where a stage writes its standard output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OutputSink {
    /// Standard output is inherited from the interpreter.
    #[default]
    Inherit,
    /// Standard output replaces the contents of a file.
    TruncateFile(PathBuf),
    /// Standard output is appended to a file.
    AppendFile(PathBuf),
    /// Standard output is connected to the standard input of the next stage.
    PipeToNext,
}

/// A stage is a single program invocation within a pipeline.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Stage {
    /// Argument vector. The first argument names the program to execute.
    pub argv: Vec<String>,

    /// File to read standard input from.
    ///
    /// When absent, the stage reads from the previous stage, or from the
    /// interpreter's standard input if it is the first stage.
    pub input: Option<PathBuf>,

    /// Destination for standard output.
    pub output: OutputSink,
}

impl Stage {
    /// Constructs a stage with inherited input and output.
    pub fn new<I, S>(argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            argv: argv.into_iter().map(Into::into).collect(),
            input: None,
            output: OutputSink::Inherit,
        }
    }

    /// Reads standard input from a file.
    pub fn with_input(mut self, path: impl Into<PathBuf>) -> Self {
        self.input = Some(path.into());
        self
    }

    /// Sets the destination for standard output.
    pub fn with_output(mut self, output: OutputSink) -> Self {
        self.output = output;
        self
    }

    /// Returns the program name, if any.
    pub fn program(&self) -> Option<&str> {
        self.argv.first().map(String::as_str)
    }

    /// Returns `true` if the stage writes to the next stage in the pipeline.
    pub fn is_piped(&self) -> bool {
        self.output == OutputSink::PipeToNext
    }
}
