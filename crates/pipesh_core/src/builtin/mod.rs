mod args;
mod registry;

pub use args::Args;
pub use registry::BuiltinRegistry;

use crate::ExitStatus;

/// A built-in command is executed within the shell's own process.
pub trait Builtin: Send + Sync {
    /// Returns the command's name.
    fn name(&self) -> &str;

    /// Runs the command.
    fn run(&self, args: &mut Args) -> ExitStatus;
}
