use thiserror::Error;

/// Errors that abort the execution of a pipeline.
///
/// The display text of each error is the diagnostic shown to the user.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// There are no stages to execute.
    #[error("No command to execute.")]
    NoCommand,

    /// A stage does not name a program.
    #[error("No Command.")]
    MissingCommand,

    /// A pipe between two stages could not be created.
    #[error("pipe creation error")]
    PipeFailed(#[source] std::io::Error),

    /// The operating system could not create a new process.
    #[error("process duplication error")]
    SpawnFailed(#[source] std::io::Error),
}
