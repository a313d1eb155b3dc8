mod logging;
mod shell;

#[cfg(test)]
mod tests;

use std::{io, path::PathBuf, process, sync::Arc};

use clap::Parser;
use parking_lot::Mutex;
use pipesh_core::{
    status::{self, ExitStatus},
    SharedHost, StdHost,
};
use pipesh_exec::Dispatcher;
use shell::{
    command::SingleCommandShell, file::FileBufferShell, interactive::RustylineShell,
    stdin::StdinShell, Shell, ShellInput,
};
use tracing::{debug, warn};

/// Prompt shown before each line in interactive sessions.
const PROMPT: &str = "$ ";

/// Command line options for the application's CLI.
#[derive(Parser)]
#[command(about = "A small shell for running pipelines of programs.", version)]
struct Opts {
    /// Command to execute
    #[arg(short, long, conflicts_with = "input")]
    command: Option<String>,

    /// Script file to execute line by line
    input: Option<PathBuf>,
}

/// Entrypoint for the application.
pub fn main() {
    logging::init_logging();
    let opts = Opts::parse();
    let host: SharedHost = Arc::new(Mutex::new(StdHost));

    let mut shell = match select_shell(opts) {
        Ok(shell) => shell,
        Err(err) => {
            host.lock().eprintln(&format!("pipesh: {}", err));
            process::exit(1);
        }
    };

    let builtins = pipesh_builtins::registry();
    let dispatcher = Dispatcher::new(&builtins, host);
    let status = run_shell(shell.as_mut(), &dispatcher);

    process::exit(exit_code(status));
}

/// Selects the source of input lines from the command line options.
fn select_shell(opts: Opts) -> io::Result<Box<dyn Shell>> {
    if let Some(command) = opts.command {
        return Ok(Box::new(SingleCommandShell::new(command)));
    }

    if let Some(script_file) = opts.input {
        return Ok(Box::new(FileBufferShell::open(script_file)?));
    }

    if atty::is(atty::Stream::Stdin) {
        match RustylineShell::new() {
            Ok(shell) => return Ok(Box::new(shell)),
            Err(err) => warn!("line editor unavailable, reading plain input: {}", err),
        }
    }

    Ok(Box::new(StdinShell))
}

/// Main loop for running a [`Shell`].
///
/// Runs lines until the input is exhausted or a command requests that the
/// shell exits. Returns the status of the last executed line.
fn run_shell(shell: &mut dyn Shell, dispatcher: &Dispatcher) -> ExitStatus {
    let prompt = if shell.is_interactive() { PROMPT } else { "" };
    let mut last_status = status::SUCCESS;
    let mut should_exit = false;

    while !should_exit {
        let line = match shell.prompt_line(prompt) {
            ShellInput::Line(line) => line,
            ShellInput::Interrupt => continue,
            ShellInput::None => break,
        };

        if shell.is_interactive() && !line.trim().is_empty() {
            shell.add_history_entry(line.trim());
        }

        last_status = dispatcher.run_line(&line, last_status, &mut should_exit);
        debug!(status = last_status, "line finished");
    }

    last_status
}

/// Converts a status into a process exit code.
///
/// Statuses are clamped to the range of exit codes, with the unknown status
/// reported as 255.
fn exit_code(status: ExitStatus) -> i32 {
    if status < 0 {
        255
    } else {
        status.min(255)
    }
}
