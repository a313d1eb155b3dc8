use crate::{ExitStatus, Io};

/// Arguments that are passed to a built-in command.
pub struct Args<'a> {
    /// Argument vector. The first argument is the command's name.
    pub argv: &'a [String],

    /// Exit status of the previously executed pipeline.
    pub prior_status: ExitStatus,

    /// Set to `true` to request that the shell exits.
    pub should_exit: &'a mut bool,

    /// File descriptors that the command can use for input and output.
    pub io: &'a mut Io,
}

impl<'a> Args<'a> {
    pub fn new(
        argv: &'a [String],
        prior_status: ExitStatus,
        should_exit: &'a mut bool,
        io: &'a mut Io,
    ) -> Self {
        Self {
            argv,
            prior_status,
            should_exit,
            io,
        }
    }
}
