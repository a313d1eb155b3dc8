use std::{io::Write, sync::Arc};

use pipesh_ast::{CommandGraph, OutputSink, Stage};
use pipesh_core::{
    status::{self, ExitStatus},
    Args, Builtin, BuiltinRegistry, Io, SharedHost,
};
use pipesh_parse::parse;
use tracing::{debug, warn};

use crate::{
    external::ExternalDispatcher,
    io::{StdinSource, StdoutSink, WriteMode},
};

/// Executes lines of input.
///
/// Built-in commands are run in-process. Everything else is handed to an
/// [`ExternalDispatcher`].
pub struct Dispatcher<'r> {
    builtins: &'r BuiltinRegistry,
    external: ExternalDispatcher,
    host: SharedHost,
}

impl<'r> Dispatcher<'r> {
    /// Constructs a dispatcher. Diagnostics are reported to `host`.
    pub fn new(builtins: &'r BuiltinRegistry, host: SharedHost) -> Self {
        Self {
            builtins,
            external: ExternalDispatcher::new(Arc::clone(&host)),
            host,
        }
    }

    /// Parses and executes a single line of input.
    ///
    /// Returns `prior_status` unchanged if the line contains no command, and
    /// [`status::UNKNOWN`] if the line cannot be parsed.
    pub fn run_line(
        &self,
        line: &str,
        prior_status: ExitStatus,
        should_exit: &mut bool,
    ) -> ExitStatus {
        match parse(line) {
            Ok(Some(graph)) => self.dispatch(&graph, prior_status, should_exit),
            Ok(None) => prior_status,
            Err(err) => {
                debug!(?err, "failed to parse line");
                self.eprintln(&format!("Input parse error: {}", err));
                status::UNKNOWN
            }
        }
    }

    /// Executes a [`CommandGraph`].
    ///
    /// If the first stage names a built-in command, only that stage is executed.
    pub fn dispatch(
        &self,
        graph: &CommandGraph,
        prior_status: ExitStatus,
        should_exit: &mut bool,
    ) -> ExitStatus {
        let stage = graph.first();
        if let Some(builtin) = stage.program().and_then(|name| self.builtins.get(name)) {
            if graph.len() > 1 {
                warn!(
                    builtin = builtin.name(),
                    skipped = graph.len() - 1,
                    "built-in commands cannot be piped; skipping the remaining stages"
                );
            }

            return self.run_builtin(builtin, stage, prior_status, should_exit);
        }

        match self.external.execute(graph) {
            Ok(status) => status,
            Err(err) => {
                warn!("pipeline aborted: {:?}", err);
                self.eprintln(&err.to_string());
                status::UNKNOWN
            }
        }
    }

    /// Runs a built-in command with the stage's file redirections applied.
    fn run_builtin(
        &self,
        builtin: &dyn Builtin,
        stage: &Stage,
        prior_status: ExitStatus,
        should_exit: &mut bool,
    ) -> ExitStatus {
        let input = match &stage.input {
            Some(path) => StdinSource::FromFile(path.clone()),
            None => StdinSource::Inherited,
        };
        let output = match &stage.output {
            OutputSink::TruncateFile(path) => StdoutSink::ToFile(path.clone(), WriteMode::Truncate),
            OutputSink::AppendFile(path) => StdoutSink::ToFile(path.clone(), WriteMode::Append),
            OutputSink::Inherit | OutputSink::PipeToNext => StdoutSink::Inherited,
        };

        let stdin = match input.into_reader() {
            Ok(reader) => reader,
            Err(err) => {
                warn!("{}", err);
                self.eprintln(err.diagnostic());
                return status::GENERAL_ERROR;
            }
        };
        let stdout = match output.into_writer() {
            Ok(writer) => writer,
            Err(err) => {
                warn!("{}", err);
                self.eprintln(err.diagnostic());
                return status::GENERAL_ERROR;
            }
        };

        let mut io = Io::new(stdin, stdout, Box::new(std::io::stderr()));
        let mut args = Args::new(&stage.argv, prior_status, should_exit, &mut io);

        debug!(builtin = builtin.name(), argv = ?stage.argv, "running built-in command");
        let builtin_status = builtin.run(&mut args);

        if let Err(err) = io.stdout.flush() {
            warn!(builtin = builtin.name(), "failed to flush output: {}", err);
        }

        builtin_status
    }

    fn eprintln(&self, text: &str) {
        self.host.lock().eprintln(text);
    }
}
