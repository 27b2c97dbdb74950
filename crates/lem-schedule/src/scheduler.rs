//! Scheduler trait and the default greedy implementation.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::debug;

use lem_core::RouteId;
use lem_graph::Route;

use crate::Allocation;

/// Pluggable token distribution.
///
/// # Contract
///
/// - The returned allocation has one entry per route and sums to
///   `token_count`.
/// - `routes` is non-empty whenever `token_count > 0`; the caller checks this.
pub trait Scheduler: Send + Sync {
    fn assign(&self, token_count: u32, routes: &[Route]) -> Allocation;
}

/// Per-token greedy assignment to the route with the lowest arrival cost.
///
/// This approximates minimising the makespan the way list scheduling does on
/// machines of unequal speed; it is not an exact solver.
pub struct GreedyScheduler;

impl Scheduler for GreedyScheduler {
    fn assign(&self, token_count: u32, routes: &[Route]) -> Allocation {
        let mut allocation = Allocation::empty(routes.len());
        if routes.is_empty() {
            debug_assert_eq!(token_count, 0, "tokens with no routes to carry them");
            return allocation;
        }

        // Min-heap on (cost, route index).  Reverse makes BinaryHeap (max)
        // behave as min-heap; the index breaks ties towards earlier routes.
        let mut heap: BinaryHeap<Reverse<(u64, u32)>> = routes
            .iter()
            .enumerate()
            .map(|(i, r)| Reverse((cost(r, 0), i as u32)))
            .collect();

        for _ in 0..token_count {
            let Some(Reverse((cost_now, idx))) = heap.pop() else {
                break;
            };
            let route = RouteId(idx);
            allocation.bump(route);
            heap.push(Reverse((cost_now + 1, idx)));
        }

        debug!(tokens = token_count, counts = ?allocation.counts(), "greedy allocation");
        allocation
    }
}

/// `len(r) + assigned - 1`, with `len` counting rooms.
#[inline]
fn cost(route: &Route, assigned: u32) -> u64 {
    (route.len() as u64 + assigned as u64).saturating_sub(1)
}
