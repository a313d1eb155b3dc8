use std::io::Write;

use super::Host;

/// A host wrapping the standard error of the current process.
#[derive(Default)]
pub struct StdHost;

impl Host for StdHost {
    fn eprintln(&mut self, text: &str) {
        let _ = writeln!(std::io::stderr(), "{text}"); // Results are safe to ignore.
    }
}
