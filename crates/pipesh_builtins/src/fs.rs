use std::path::PathBuf;

use clap::Parser;
use pipesh_core::{status, Args, Builtin, ExitStatus};

use crate::utils;

/// Change the shell's working directory.
///
/// This is a built-in shell command.
#[derive(Parser)]
#[command(name = "cd", version)]
struct CdOpts {
    /// Target directory. Defaults to the user's home directory.
    directory: Option<PathBuf>,
}

/// Implementation for the "cd" built-in command.
#[derive(Clone)]
pub struct Cd;
impl Builtin for Cd {
    fn name(&self) -> &str {
        "cd"
    }

    fn run(&self, args: &mut Args) -> ExitStatus {
        let opts = match CdOpts::try_parse_from(args.argv) {
            Ok(opts) => opts,
            Err(error) => return utils::exit_with_parse_error(args.io, error),
        };

        let directory = opts
            .directory
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("/"));

        match std::env::set_current_dir(&directory) {
            Ok(()) => status::SUCCESS,
            Err(error) => {
                let _ = writeln!(args.io.stderr, "cd: {}: {}", directory.display(), error);
                status::GENERAL_ERROR
            }
        }
    }
}

/// Print the shell's working directory.
///
/// This is a built-in shell command.
#[derive(Parser)]
#[command(name = "pwd", version)]
struct PwdOpts {}

/// Implementation for the "pwd" built-in command.
#[derive(Clone)]
pub struct Pwd;
impl Builtin for Pwd {
    fn name(&self) -> &str {
        "pwd"
    }

    fn run(&self, args: &mut Args) -> ExitStatus {
        if let Err(error) = PwdOpts::try_parse_from(args.argv) {
            return utils::exit_with_parse_error(args.io, error);
        }

        let path = match std::env::current_dir() {
            Ok(path) => path,
            Err(error) => {
                let _ = writeln!(args.io.stderr, "pwd: {}", error);
                return status::GENERAL_ERROR;
            }
        };

        match writeln!(args.io.stdout, "{}", path.display()) {
            Ok(_) => status::SUCCESS,
            Err(error) => {
                let _ = writeln!(args.io.stderr, "pwd: could not write path to stdout: {}", error);
                status::GENERAL_ERROR
            }
        }
    }
}
