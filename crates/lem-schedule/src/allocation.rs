//! Per-route token counts.

use lem_core::RouteId;
use lem_graph::Route;

/// Number of tokens assigned to each route, indexed by `RouteId`.
///
/// Invariant: `total()` equals the token count the allocation was built for.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Allocation {
    counts: Vec<u32>,
}

impl Allocation {
    /// All-zero allocation over `routes` routes.
    pub fn empty(routes: usize) -> Self {
        Self { counts: vec![0; routes] }
    }

    /// Wrap explicit counts.  Used by custom schedulers and tests.
    pub fn from_counts(counts: Vec<u32>) -> Self {
        Self { counts }
    }

    #[inline]
    pub fn get(&self, route: RouteId) -> u32 {
        self.counts.get(route.index()).copied().unwrap_or(0)
    }

    pub(crate) fn bump(&mut self, route: RouteId) {
        self.counts[route.index()] += 1;
    }

    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    /// Number of routes covered (including routes with zero tokens).
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| c as u64).sum()
    }

    /// `(RouteId, count)` pairs in route order.
    pub fn iter(&self) -> impl Iterator<Item = (RouteId, u32)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(|(i, &c)| (RouteId(i as u32), c))
    }

    /// Turn on which the last token arrives if every route flows without
    /// interference: `max((moves(r)) + count(r) - 1)` over routes in use.
    ///
    /// Returns 0 when no tokens are allocated.
    pub fn predicted_turns(&self, routes: &[Route]) -> u64 {
        self.iter()
            .zip(routes)
            .filter(|((_, count), _)| *count > 0)
            .map(|((_, count), route)| route.moves() as u64 + count as u64 - 1)
            .max()
            .unwrap_or(0)
    }
}
