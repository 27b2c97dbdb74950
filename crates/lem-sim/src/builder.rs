//! Fluent builder for constructing a [`Sim`].

use lem_core::{RouteId, RunConfig, TokenId, Turn};
use lem_graph::Route;
use lem_schedule::{Allocation, GreedyScheduler, Scheduler};

use crate::lane::RouteLane;
use crate::trace::TurnTrace;
use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`RunConfig`]: token count, turn limit, trace recording
/// - `Vec<Route>`: from a [`lem_graph::RouteFinder`]
///
/// # Optional inputs (have defaults)
///
/// | Method             | Default                                      |
/// |--------------------|----------------------------------------------|
/// | `.allocation(a)`   | `GreedyScheduler` over the supplied routes   |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(RunConfig::new(10), routes)
///     .allocation(allocation)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:     RunConfig,
    routes:     Vec<Route>,
    allocation: Option<Allocation>,
}

impl SimBuilder {
    /// Create a builder with all required inputs.
    pub fn new(config: RunConfig, routes: Vec<Route>) -> Self {
        Self { config, routes, allocation: None }
    }

    /// Supply a precomputed allocation (one count per route).
    pub fn allocation(mut self, allocation: Allocation) -> Self {
        self.allocation = Some(allocation);
        self
    }

    /// Validate inputs, number the tokens, and return a ready-to-run [`Sim`].
    ///
    /// Tokens are numbered from 1, route by route in route order.
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;

        // ── Validate routes and allocation ────────────────────────────────
        if let Some(i) = self.routes.iter().position(|r| r.len() < 2) {
            return Err(SimError::DegenerateRoute(RouteId(i as u32)));
        }

        let allocation = match self.allocation {
            Some(a) => a,
            None => GreedyScheduler.assign(self.config.token_count, &self.routes),
        };
        if allocation.len() != self.routes.len() {
            return Err(SimError::RouteCountMismatch {
                expected: self.routes.len(),
                got:      allocation.len(),
            });
        }
        if allocation.total() != self.config.token_count as u64 {
            return Err(SimError::TokenCountMismatch {
                expected: self.config.token_count as u64,
                got:      allocation.total(),
            });
        }

        // ── Build lanes ───────────────────────────────────────────────────
        let mut next_token = TokenId::FIRST;
        let lanes: Vec<RouteLane> = self
            .routes
            .into_iter()
            .zip(allocation.counts())
            .enumerate()
            .map(|(i, (route, &count))| {
                let lane = RouteLane::new(RouteId(i as u32), route, next_token, count);
                next_token = TokenId(next_token.0 + count);
                lane
            })
            .collect();

        Ok(Sim {
            config:   self.config,
            lanes,
            turn:     Turn::ZERO,
            trace:    TurnTrace::new(),
            finished: false,
        })
    }
}
