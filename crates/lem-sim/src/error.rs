use lem_core::{LemError, RouteId};
use lem_graph::GraphError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] LemError),

    #[error("allocation covers {got} routes but {expected} were supplied")]
    RouteCountMismatch {
        expected: usize,
        got:      usize,
    },

    #[error("allocation places {got} tokens but the run is configured for {expected}")]
    TokenCountMismatch {
        expected: u64,
        got:      u64,
    },

    #[error("{0} has fewer than two rooms")]
    DegenerateRoute(RouteId),

    #[error("tokens still in flight after {limit} turns")]
    TurnLimitExceeded { limit: u64 },

    #[error("route discovery failed: {0}")]
    Graph(#[from] GraphError),
}

pub type SimResult<T> = Result<T, SimError>;
