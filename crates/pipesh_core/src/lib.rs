pub mod builtin;
mod host;
mod io;
pub mod status;

pub use builtin::{Args, Builtin, BuiltinRegistry};
pub use host::{Host, SharedHost, StdHost};
pub use io::Io;
pub use status::ExitStatus;
