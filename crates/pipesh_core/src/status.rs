/// Exit status of a command or pipeline.
///
/// Non-negative values are exit codes reported by programs. Negative values
/// are reserved for statuses determined by the shell itself.
pub type ExitStatus = i32;

/// Exit code indicating success.
pub const SUCCESS: ExitStatus = 0;

/// Exit code for general errors.
pub const GENERAL_ERROR: ExitStatus = 1;

/// Exit code for misuse of shell built-ins.
pub const BUILTIN_ERROR: ExitStatus = 2;

/// Exit code for programs that were found but could not be executed.
pub const NOT_EXECUTABLE: ExitStatus = 126;

/// Exit code for programs that could not be found.
pub const NOT_FOUND: ExitStatus = 127;

/// Sentinel for when no exit code is available, such as when a process could
/// not be spawned or was terminated by a signal.
pub const UNKNOWN: ExitStatus = -1;
