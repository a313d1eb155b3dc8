use std::{
    ffi::OsStr,
    fmt::Display,
    io,
    process::{Child, Command, Stdio},
};

use pipesh_core::status::{self, ExitStatus};
use tracing::{debug, warn};

use crate::io::{StageIoError, StageStream, StdinSource, StdoutSink};

/// Errors that prevent a single stage from being started.
#[derive(Debug)]
pub enum SpawnError {
    /// The argument vector is empty.
    MissingCommand,
    /// The stage's standard streams could not be wired.
    Io(StageIoError),
    /// The program could not be found in the executable search path.
    ProgramNotFound(io::Error),
    /// The program was found, but could not be executed.
    ProgramNotExecutable(io::Error),
    /// The operating system could not create a new process.
    ProcessCreation(io::Error),
}

impl SpawnError {
    /// Returns the exit status of a stage that failed to start.
    ///
    /// Errors that abort the whole pipeline have no stage status.
    pub fn stage_status(&self) -> Option<ExitStatus> {
        match self {
            SpawnError::Io(_) => Some(status::GENERAL_ERROR),
            SpawnError::ProgramNotFound(_) => Some(status::NOT_FOUND),
            SpawnError::ProgramNotExecutable(_) => Some(status::NOT_EXECUTABLE),
            SpawnError::MissingCommand | SpawnError::ProcessCreation(_) => None,
        }
    }

    /// Returns the diagnostic shown to the user.
    pub fn diagnostic(&self) -> &'static str {
        match self {
            SpawnError::MissingCommand => "No Command.",
            SpawnError::Io(err) => err.diagnostic(),
            SpawnError::ProgramNotFound(_) | SpawnError::ProgramNotExecutable(_) => {
                "error: cannot find command"
            }
            SpawnError::ProcessCreation(_) => "process duplication error",
        }
    }
}

impl Display for SpawnError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpawnError::MissingCommand => write!(f, "missing command"),
            SpawnError::Io(err) => write!(f, "{}", err),
            SpawnError::ProgramNotFound(err) => write!(f, "program not found: {}", err),
            SpawnError::ProgramNotExecutable(err) => write!(f, "program not executable: {}", err),
            SpawnError::ProcessCreation(err) => write!(f, "failed to create process: {}", err),
        }
    }
}

impl std::error::Error for SpawnError {}

impl From<StageIoError> for SpawnError {
    fn from(err: StageIoError) -> Self {
        SpawnError::Io(err)
    }
}

/// Interpreter for executable files without a recognized binary format.
const SCRIPT_INTERPRETER: &str = "/bin/sh";

/// Starts a program as a child process.
///
/// `argv[0]` is resolved through the executable search path and the remaining
/// arguments are passed verbatim. Executable files that the operating system
/// cannot load directly are run by `/bin/sh` instead. The input is wired before
/// the output, so an unreadable input file never creates an output file.
///
/// Both `input` and `output` are consumed. The shell's own copies of any pipe
/// ends are closed once this function returns, regardless of the outcome.
pub fn spawn_stage(
    argv: &[String],
    input: StdinSource,
    output: StdoutSink,
) -> Result<Child, SpawnError> {
    let (program, args) = argv.split_first().ok_or(SpawnError::MissingCommand)?;

    let stdin = input.open()?;
    let stdout = output.open()?;

    let result = match start(program, args, &stdin, &stdout) {
        Err(err) if is_unrecognized_format(&err) => {
            debug!(program = %program, "running program as a shell script");
            start(SCRIPT_INTERPRETER, argv, &stdin, &stdout)
        }
        result => result,
    };

    match result {
        Ok(child) => {
            debug!(program = %program, pid = child.id(), "spawned stage");
            Ok(child)
        }
        Err(err) => Err(classify_spawn_error(err)),
    }
}

/// Spawns a program with duplicates of the given streams.
fn start(
    program: impl AsRef<OsStr>,
    args: &[String],
    stdin: &StageStream,
    stdout: &StageStream,
) -> io::Result<Child> {
    Command::new(program)
        .args(args)
        .stdin(Stdio::from(stdin.try_clone()?))
        .stdout(Stdio::from(stdout.try_clone()?))
        .spawn()
}

#[cfg(unix)]
fn is_unrecognized_format(err: &io::Error) -> bool {
    err.raw_os_error() == Some(libc::ENOEXEC)
}

#[cfg(not(unix))]
fn is_unrecognized_format(_err: &io::Error) -> bool {
    false
}

/// Waits for a child process to exit and returns its exit status.
///
/// Processes that are terminated by a signal have no exit code and yield
/// [`status::UNKNOWN`].
pub fn wait_stage(child: &mut Child) -> ExitStatus {
    match child.wait() {
        Ok(exit_status) => {
            let code = exit_status.code().unwrap_or(status::UNKNOWN);
            debug!(pid = child.id(), status = code, "stage exited");
            code
        }
        Err(err) => {
            warn!(pid = child.id(), "failed to wait for process: {}", err);
            status::UNKNOWN
        }
    }
}

fn classify_spawn_error(err: io::Error) -> SpawnError {
    match err.kind() {
        io::ErrorKind::NotFound => SpawnError::ProgramNotFound(err),
        io::ErrorKind::WouldBlock | io::ErrorKind::OutOfMemory => SpawnError::ProcessCreation(err),
        _ => SpawnError::ProgramNotExecutable(err),
    }
}
