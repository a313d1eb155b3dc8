mod graph;
mod stage;

pub use graph::{CommandGraph, GraphError};
pub use stage::{OutputSink, Stage};
