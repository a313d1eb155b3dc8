use std::{mem, process::Child};

use pipesh_ast::{CommandGraph, OutputSink, Stage};
use pipesh_core::{
    status::{self, ExitStatus},
    SharedHost,
};
use tracing::{debug, warn};

use crate::{
    error::DispatchError,
    io::{StdinSource, StdoutSink, WriteMode},
    spawn::{spawn_stage, wait_stage, SpawnError},
};

/// The outcome of starting a single stage.
#[derive(Debug)]
enum StageHandle {
    /// A running child process.
    Process(Child),
    /// A stage that failed to start and completed with a fixed status.
    Finished(ExitStatus),
}

/// Executes pipelines of external programs.
///
/// Each stage is started as a separate child process. Standard streams are
/// connected through anonymous pipes or redirected to files. The dispatcher
/// does not return until every process it has started has exited.
#[derive(Clone)]
pub struct ExternalDispatcher {
    host: SharedHost,
}

impl ExternalDispatcher {
    /// Constructs a dispatcher that reports stage failures to a host.
    pub fn new(host: SharedHost) -> Self {
        Self { host }
    }

    /// Executes every stage in a [`CommandGraph`].
    ///
    /// Returns the exit status of the last stage.
    pub fn execute(&self, graph: &CommandGraph) -> Result<ExitStatus, DispatchError> {
        self.execute_stages(graph.stages())
    }

    /// Executes a chain of stages.
    ///
    /// Every stage except the last is expected to pipe its output to the next
    /// stage. If the last stage pipes its output, the output is discarded.
    ///
    /// # Errors
    ///
    /// Returns an error without starting any process if `stages` is empty or if
    /// any stage lacks a program. Returns an error after terminating all
    /// previously started stages if a pipe or process cannot be created.
    pub fn execute_stages(&self, stages: &[Stage]) -> Result<ExitStatus, DispatchError> {
        if stages.is_empty() {
            return Err(DispatchError::NoCommand);
        }

        if stages.iter().any(|stage| stage.argv.is_empty()) {
            return Err(DispatchError::MissingCommand);
        }

        let mut handles = Vec::with_capacity(stages.len());
        let mut input = StdinSource::Inherited;

        let last = stages.len() - 1;
        for (index, stage) in stages.iter().enumerate() {
            let (output, next_input) = match stage_output(stage, index == last) {
                Ok(wiring) => wiring,
                Err(err) => {
                    abort(&mut handles);
                    return Err(DispatchError::PipeFailed(err));
                }
            };

            // An input file takes precedence over the previous stage's pipe,
            // whose read end is closed here.
            let previous_input = mem::replace(&mut input, StdinSource::Inherited);
            let stage_input = match &stage.input {
                Some(path) => {
                    drop(previous_input);
                    StdinSource::FromFile(path.clone())
                }
                None => previous_input,
            };

            debug!(stage = index, argv = ?stage.argv, "starting stage");
            match spawn_stage(&stage.argv, stage_input, output) {
                Ok(child) => handles.push(StageHandle::Process(child)),
                Err(SpawnError::ProcessCreation(err)) => {
                    abort(&mut handles);
                    return Err(DispatchError::SpawnFailed(err));
                }
                Err(err) => {
                    warn!(stage = index, "stage failed to start: {}", err);
                    self.host.lock().eprintln(err.diagnostic());
                    let stage_status = err.stage_status().unwrap_or(status::UNKNOWN);
                    handles.push(StageHandle::Finished(stage_status));
                }
            }

            if let Some(reader) = next_input {
                input = StdinSource::FromPipe(reader);
            }
        }

        Ok(wait_all(handles))
    }
}

/// Resolves where a stage writes its output.
///
/// Piped stages get a new pipe. The write end is returned as the stage's output
/// and the read end is returned for the next stage. The last stage has no next
/// stage to pipe to.
fn stage_output(
    stage: &Stage,
    is_last: bool,
) -> std::io::Result<(StdoutSink, Option<os_pipe::PipeReader>)> {
    Ok(match &stage.output {
        OutputSink::PipeToNext if is_last => (StdoutSink::Discard, None),
        OutputSink::Inherit => (StdoutSink::Inherited, None),
        OutputSink::TruncateFile(path) => {
            (StdoutSink::ToFile(path.clone(), WriteMode::Truncate), None)
        }
        OutputSink::AppendFile(path) => (StdoutSink::ToFile(path.clone(), WriteMode::Append), None),
        OutputSink::PipeToNext => {
            let (reader, writer) = os_pipe::pipe()?;
            (StdoutSink::ToPipe(writer), Some(reader))
        }
    })
}

/// Waits for every stage in order and returns the last stage's status.
fn wait_all(handles: Vec<StageHandle>) -> ExitStatus {
    let last = handles.len().saturating_sub(1);
    let mut pipeline_status = status::SUCCESS;

    for (index, handle) in handles.into_iter().enumerate() {
        let stage_status = match handle {
            StageHandle::Process(mut child) => wait_stage(&mut child),
            StageHandle::Finished(stage_status) => stage_status,
        };

        if index == last {
            pipeline_status = stage_status;
        } else if stage_status != status::SUCCESS {
            debug!(stage = index, status = stage_status, "non-terminal stage failed");
        }
    }

    pipeline_status
}

/// Terminates and reaps all running stages.
fn abort(handles: &mut Vec<StageHandle>) {
    for handle in handles.drain(..) {
        if let StageHandle::Process(mut child) = handle {
            if let Err(err) = child.kill() {
                debug!(pid = child.id(), "failed to kill process: {}", err);
            }
            let _ = wait_stage(&mut child);
        }
    }
}
