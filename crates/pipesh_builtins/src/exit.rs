use clap::Parser;
use pipesh_core::{Args, Builtin, ExitStatus};

use crate::utils;

/// Exit the shell.
///
/// If no exit status is supplied, the last command's exit code is used.
///
/// This is a built-in shell command.
#[derive(Parser)]
#[command(name = "exit", version)]
struct ExitOpts {
    /// Exit status for the shell.
    #[arg(allow_negative_numbers = true)]
    status: Option<i32>,
}

/// Implementation for the "exit" built-in command.
#[derive(Clone)]
pub struct Exit;
impl Builtin for Exit {
    fn name(&self) -> &str {
        "exit"
    }

    fn run(&self, args: &mut Args) -> ExitStatus {
        match ExitOpts::try_parse_from(args.argv) {
            Ok(opts) => {
                *args.should_exit = true;
                opts.status.unwrap_or(args.prior_status)
            }
            Err(error) => utils::exit_with_parse_error(args.io, error),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::utils::{argv, empty_io, file_contents, mock_io};

    use super::*;

    #[test]
    fn it_uses_the_last_exit_code_by_default() {
        let argv = argv(&["exit"]);
        let mut io = empty_io();
        let mut should_exit = false;
        let mut args = Args::new(&argv, 17, &mut should_exit, &mut io);

        assert_eq!(Exit.run(&mut args), 17);
        assert!(should_exit);
    }

    #[test]
    fn it_can_use_code_from_argument() {
        let argv = argv(&["exit", "1"]);
        let mut io = empty_io();
        let mut should_exit = false;
        let mut args = Args::new(&argv, 0, &mut should_exit, &mut io);

        assert_eq!(Exit.run(&mut args), 1);
        assert!(should_exit);
    }

    #[test]
    fn it_exits_with_code_2_if_code_argument_is_invalid() {
        let argv = argv(&["exit", "non-integer"]);
        let (mut io, mut stdout, mut stderr) = mock_io();
        let mut should_exit = false;
        let mut args = Args::new(&argv, 0, &mut should_exit, &mut io);

        assert_eq!(Exit.run(&mut args), 2); // Exit 2 = misuse of shell built-in.
        assert!(!should_exit);
        assert_eq!(file_contents(&mut stdout), "");
        assert!(!file_contents(&mut stderr).is_empty());
    }

    #[test]
    fn it_prints_help_without_exiting() {
        let argv = argv(&["exit", "--help"]);
        let (mut io, mut stdout, _stderr) = mock_io();
        let mut should_exit = false;
        let mut args = Args::new(&argv, 5, &mut should_exit, &mut io);

        assert_eq!(Exit.run(&mut args), 0);
        assert!(!should_exit);
        assert!(file_contents(&mut stdout).contains("Usage"));
    }
}
