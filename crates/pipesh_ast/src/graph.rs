use std::fmt::Display;

use crate::Stage;

/// Errors returned when a sequence of stages does not form a valid pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A pipeline must contain at least one stage.
    Empty,
    /// A non-terminal stage does not pipe its output to the next stage.
    UnpipedStage(usize),
    /// The terminal stage pipes its output to a stage that does not exist.
    DanglingPipe(usize),
}

impl Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::Empty => write!(f, "pipeline contains no stages"),
            GraphError::UnpipedStage(index) => {
                write!(f, "stage {index} is followed by another stage but is not piped")
            }
            GraphError::DanglingPipe(index) => {
                write!(f, "stage {index} pipes its output but is the last stage")
            }
        }
    }
}

impl std::error::Error for GraphError {}

/// An ordered chain of stages forming one pipeline.
///
/// Every stage except the last pipes its output to the next stage, and the
/// last stage never does. The invariant is checked on construction, which means
/// that a `CommandGraph` value can be executed without further validation of
/// its shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandGraph {
    stages: Vec<Stage>,
}

impl CommandGraph {
    /// Constructs a graph from an ordered sequence of stages.
    ///
    /// # Errors
    ///
    /// Returns an error if `stages` is empty, or if the stages are not linked
    /// by pipes exactly between consecutive stages.
    pub fn new(stages: Vec<Stage>) -> Result<Self, GraphError> {
        let Some(last) = stages.len().checked_sub(1) else {
            return Err(GraphError::Empty);
        };

        for (index, stage) in stages.iter().enumerate() {
            match (index == last, stage.is_piped()) {
                (true, true) => return Err(GraphError::DanglingPipe(index)),
                (false, false) => return Err(GraphError::UnpipedStage(index)),
                _ => (),
            }
        }

        Ok(Self { stages })
    }

    /// Returns the entry point of the pipeline.
    pub fn first(&self) -> &Stage {
        &self.stages[0]
    }

    /// Returns all stages in pipeline order.
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Returns the number of stages.
    pub fn len(&self) -> usize {
        self.stages.len()
    }
}
