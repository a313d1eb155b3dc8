mod std_host;

use std::sync::Arc;

use parking_lot::Mutex;

pub use std_host::StdHost;

/// A host is the shell's representation of the terminal it reports to.
///
/// Diagnostics are written through the host rather than directly to the
/// process' standard streams.
pub trait Host: Send {
    /// Prints a line of text to the host's stderr equivalent.
    fn eprintln(&mut self, text: &str);
}

/// A host that can be shared between the components of a shell.
pub type SharedHost = Arc<Mutex<dyn Host>>;
