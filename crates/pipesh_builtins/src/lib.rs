mod exit;
mod fs;
mod logic;
mod utils;

pub use exit::Exit;
pub use fs::{Cd, Pwd};
pub use logic::{False, True};

use pipesh_core::{Builtin, BuiltinRegistry};

/// Returns all built-in commands.
pub fn all_builtins() -> Vec<Box<dyn Builtin>> {
    vec![
        Box::new(Cd),
        Box::new(Exit),
        Box::new(False),
        Box::new(Pwd),
        Box::new(True),
    ]
}

/// Returns a registry containing all built-in commands.
pub fn registry() -> BuiltinRegistry {
    BuiltinRegistry::new(all_builtins())
}
