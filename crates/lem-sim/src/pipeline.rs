//! End-to-end routing: discover routes, allocate tokens, simulate.

use tracing::info;

use lem_core::{NodeId, RunConfig};
use lem_graph::{DisjointBfsFinder, Graph, GraphError, Route, RouteFinder};
use lem_schedule::{Allocation, GreedyScheduler, Scheduler};

use crate::trace::TurnTrace;
use crate::{SimBuilder, SimObserver, SimResult};

/// Everything the presentation layer needs from one run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    pub start:       NodeId,
    pub end:         NodeId,
    pub routes:      Vec<Route>,
    pub allocation:  Allocation,
    pub trace:       TurnTrace,
    pub total_turns: u64,
}

/// Run the default pipeline: [`DisjointBfsFinder`], [`GreedyScheduler`],
/// then the turn simulator.
///
/// Start and end are the rooms flagged in `graph`.  Fails before scheduling
/// if no route connects them.
pub fn solve<O: SimObserver>(
    graph:    &Graph,
    config:   &RunConfig,
    observer: &mut O,
) -> SimResult<Solution> {
    solve_with(&DisjointBfsFinder, &GreedyScheduler, graph, config, observer)
}

/// Like [`solve`] with caller-supplied route discovery and scheduling.
pub fn solve_with<F, S, O>(
    finder:    &F,
    scheduler: &S,
    graph:     &Graph,
    config:    &RunConfig,
    observer:  &mut O,
) -> SimResult<Solution>
where
    F: RouteFinder,
    S: Scheduler,
    O: SimObserver,
{
    config.validate()?;
    let start = graph.start()?;
    let end   = graph.end()?;

    let routes = finder.find_routes(graph, start, end)?;
    let Some(shortest) = routes.first() else {
        return Err(GraphError::NoRouteFound { from: start, to: end }.into());
    };
    info!(routes = routes.len(), shortest = shortest.moves(), "route discovery complete");

    let allocation = scheduler.assign(config.token_count, &routes);
    info!(
        tokens = config.token_count,
        predicted_turns = allocation.predicted_turns(&routes),
        "tokens allocated",
    );

    let mut sim = SimBuilder::new(config.clone(), routes.clone())
        .allocation(allocation.clone())
        .build()?;
    sim.run(observer)?;

    let total_turns = sim.total_turns();
    info!(turns = total_turns, "simulation complete");

    Ok(Solution {
        start,
        end,
        routes,
        allocation,
        trace: sim.into_trace(),
        total_turns,
    })
}
