//! Graph-subsystem error type.

use std::fmt;

use thiserror::Error;

use lem_core::NodeId;

/// Which of the two distinguished rooms an error refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => f.write_str("start"),
            Endpoint::End   => f.write_str("end"),
        }
    }
}

/// Errors produced by `lem-graph`.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("tunnel references unknown room {0:?}")]
    UnknownEndpoint(String),

    #[error("missing {0} room")]
    MissingEndpoint(Endpoint),

    #[error("more than one {0} room")]
    AmbiguousEndpoint(Endpoint),

    #[error("start and end are the same room ({0})")]
    SameEndpoint(NodeId),

    #[error("no route from {from} to {to}")]
    NoRouteFound { from: NodeId, to: NodeId },

    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GraphResult<T> = Result<T, GraphError>;
