use std::{
    fmt::Display,
    fs::{File, OpenOptions},
    io::{self, Read, Write},
    path::{Path, PathBuf},
    process::Stdio,
};

use os_pipe::{PipeReader, PipeWriter};

/// Permissions for newly created output files: read/write for the owner and
/// read-only for group and others.
#[cfg(unix)]
const OUTPUT_FILE_MODE: u32 = 0o644;

/// How an output file is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Replace the file's contents.
    Truncate,
    /// Write after the file's existing contents.
    Append,
}

/// Errors that prevent a stage's standard streams from being wired.
#[derive(Debug)]
pub enum StageIoError {
    /// The input file could not be opened.
    InputFile(PathBuf, io::Error),
    /// The output file could not be opened.
    OutputFile(PathBuf, io::Error),
}

impl StageIoError {
    /// Returns the diagnostic shown to the user.
    pub fn diagnostic(&self) -> &'static str {
        match self {
            StageIoError::InputFile(..) => "error: input file",
            StageIoError::OutputFile(..) => "error: output file",
        }
    }
}

impl Display for StageIoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StageIoError::InputFile(path, err) => {
                write!(f, "file '{}' is not readable: {err}", path.display())
            }
            StageIoError::OutputFile(path, err) => {
                write!(f, "file '{}' is not writable: {err}", path.display())
            }
        }
    }
}

impl std::error::Error for StageIoError {}

/// An opened standard stream of a child process.
///
/// A stream can be duplicated, which allows a program to be started a second
/// time with the same wiring.
#[derive(Debug)]
pub(crate) enum StageStream {
    Inherit,
    Null,
    File(File),
    Reader(PipeReader),
    Writer(PipeWriter),
}

impl StageStream {
    /// Duplicates the underlying descriptor.
    pub(crate) fn try_clone(&self) -> io::Result<Self> {
        Ok(match self {
            StageStream::Inherit => StageStream::Inherit,
            StageStream::Null => StageStream::Null,
            StageStream::File(file) => StageStream::File(file.try_clone()?),
            StageStream::Reader(reader) => StageStream::Reader(reader.try_clone()?),
            StageStream::Writer(writer) => StageStream::Writer(writer.try_clone()?),
        })
    }
}

impl From<StageStream> for Stdio {
    fn from(stream: StageStream) -> Self {
        match stream {
            StageStream::Inherit => Stdio::inherit(),
            StageStream::Null => Stdio::null(),
            StageStream::File(file) => Stdio::from(file),
            StageStream::Reader(reader) => Stdio::from(reader),
            StageStream::Writer(writer) => Stdio::from(writer),
        }
    }
}

/// Source of a stage's standard input.
#[derive(Debug)]
pub enum StdinSource {
    /// The shell's own standard input.
    Inherited,
    /// A file that is opened for reading when the stage starts.
    FromFile(PathBuf),
    /// The read end of a pipe from the previous stage.
    FromPipe(PipeReader),
}

impl StdinSource {
    /// Opens the source for a child process to read from.
    ///
    /// Consumes the source, so that the shell's own handle is released as soon
    /// as the stream is dropped.
    pub(crate) fn open(self) -> Result<StageStream, StageIoError> {
        match self {
            StdinSource::Inherited => Ok(StageStream::Inherit),
            StdinSource::FromFile(path) => open_input(&path).map(StageStream::File),
            StdinSource::FromPipe(reader) => Ok(StageStream::Reader(reader)),
        }
    }

    /// Returns a reader for in-process use.
    pub fn into_reader(self) -> Result<Box<dyn Read + Send>, StageIoError> {
        match self {
            StdinSource::Inherited => Ok(Box::new(io::stdin())),
            StdinSource::FromFile(path) => Ok(Box::new(open_input(&path)?)),
            StdinSource::FromPipe(reader) => Ok(Box::new(reader)),
        }
    }
}

/// Destination of a stage's standard output.
#[derive(Debug)]
pub enum StdoutSink {
    /// The shell's own standard output.
    Inherited,
    /// A file that is opened for writing when the stage starts.
    ToFile(PathBuf, WriteMode),
    /// The write end of a pipe to the next stage.
    ToPipe(PipeWriter),
    /// Output is discarded.
    Discard,
}

impl StdoutSink {
    /// Opens the sink for a child process to write to.
    ///
    /// Consumes the sink, so that the shell's own handle is released as soon
    /// as the stream is dropped. This is what allows the next stage to
    /// observe the end of its input once the writing stage exits.
    pub(crate) fn open(self) -> Result<StageStream, StageIoError> {
        match self {
            StdoutSink::Inherited => Ok(StageStream::Inherit),
            StdoutSink::ToFile(path, mode) => open_output(&path, mode).map(StageStream::File),
            StdoutSink::ToPipe(writer) => Ok(StageStream::Writer(writer)),
            StdoutSink::Discard => Ok(StageStream::Null),
        }
    }

    /// Returns a writer for in-process use.
    pub fn into_writer(self) -> Result<Box<dyn Write + Send>, StageIoError> {
        match self {
            StdoutSink::Inherited => Ok(Box::new(io::stdout())),
            StdoutSink::ToFile(path, mode) => Ok(Box::new(open_output(&path, mode)?)),
            StdoutSink::ToPipe(writer) => Ok(Box::new(writer)),
            StdoutSink::Discard => Ok(Box::new(io::sink())),
        }
    }
}

/// Opens a file for use as standard input.
fn open_input(path: &Path) -> Result<File, StageIoError> {
    File::open(path).map_err(|err| StageIoError::InputFile(path.to_owned(), err))
}

/// Opens a file for use as standard output, creating it if it does not exist.
fn open_output(path: &Path, mode: WriteMode) -> Result<File, StageIoError> {
    let mut options = OpenOptions::new();
    options.write(true).create(true);
    match mode {
        WriteMode::Truncate => options.truncate(true),
        WriteMode::Append => options.append(true),
    };

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(OUTPUT_FILE_MODE);
    }

    options
        .open(path)
        .map_err(|err| StageIoError::OutputFile(path.to_owned(), err))
}
