use pipesh_core::{status, Args, Builtin, ExitStatus};

/// Implementation for the "false" built-in command.
#[derive(Clone)]
pub struct False;
impl Builtin for False {
    fn name(&self) -> &str {
        "false"
    }

    fn run(&self, _: &mut Args) -> ExitStatus {
        status::GENERAL_ERROR
    }
}

/// Implementation for the "true" built-in command.
#[derive(Clone)]
pub struct True;
impl Builtin for True {
    fn name(&self) -> &str {
        "true"
    }

    fn run(&self, _: &mut Args) -> ExitStatus {
        status::SUCCESS
    }
}
