//! Route discovery trait and the default interior-disjoint BFS finder.
//!
//! # Pluggability
//!
//! The pipeline in `lem-sim` calls route discovery through the
//! [`RouteFinder`] trait, so applications can swap in a different strategy
//! (e.g. an exact max-flow search) without touching the scheduler or the
//! simulator.
//!
//! # Algorithm
//!
//! [`DisjointBfsFinder`] repeats a breadth-first search over a private copy
//! of the adjacency list.  Every accepted route has its interior rooms cut out
//! of the copy (removed from every neighbour list, own list cleared), so no
//! two routes ever share an interior room.  A route with no interior (start
//! and end directly connected) has the direct tunnel cut instead.
//!
//! Each search finds a shortest remaining route, so the result is ordered by
//! non-decreasing length.

use std::collections::VecDeque;

use tracing::debug;

use lem_core::NodeId;

use crate::graph::Graph;
use crate::{Endpoint, GraphError, GraphResult};

// ── Route ─────────────────────────────────────────────────────────────────────

/// A simple path from start to end: first element is the start room, last is
/// the end room, consecutive rooms share a tunnel, no room repeats.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub nodes: Vec<NodeId>,
}

impl Route {
    pub fn new(nodes: Vec<NodeId>) -> Self {
        Self { nodes }
    }

    /// Number of rooms, start and end included.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of tunnels crossed, i.e. turns a lone token needs.
    #[inline]
    pub fn moves(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// `true` when start and end are directly connected.
    #[inline]
    pub fn is_direct(&self) -> bool {
        self.nodes.len() == 2
    }

    /// Index of the end room.
    #[inline]
    pub fn last_index(&self) -> usize {
        self.moves()
    }

    pub fn start(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    pub fn end(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }

    /// Rooms strictly between start and end.
    pub fn interior(&self) -> &[NodeId] {
        if self.nodes.len() <= 2 {
            &[]
        } else {
            &self.nodes[1..self.nodes.len() - 1]
        }
    }

    /// Room names along the route.
    pub fn names<'g>(&self, graph: &'g Graph) -> Vec<&'g str> {
        self.nodes.iter().map(|&n| graph.name(n)).collect()
    }
}

// ── RouteFinder trait ─────────────────────────────────────────────────────────

/// Pluggable route discovery.
///
/// Implementations must return routes whose interiors are pairwise disjoint,
/// and fail with [`GraphError::NoRouteFound`] rather than return an empty
/// list.
pub trait RouteFinder: Send + Sync {
    fn find_routes(&self, graph: &Graph, start: NodeId, end: NodeId) -> GraphResult<Vec<Route>>;
}

// ── DisjointBfsFinder ─────────────────────────────────────────────────────────

/// Repeated shortest-path search with full interior-room removal.
pub struct DisjointBfsFinder;

impl RouteFinder for DisjointBfsFinder {
    fn find_routes(&self, graph: &Graph, start: NodeId, end: NodeId) -> GraphResult<Vec<Route>> {
        if !graph.contains(start) {
            return Err(GraphError::MissingEndpoint(Endpoint::Start));
        }
        if !graph.contains(end) {
            return Err(GraphError::MissingEndpoint(Endpoint::End));
        }
        if start == end {
            return Err(GraphError::SameEndpoint(start));
        }

        let mut working = graph.adjacency().to_vec();
        let mut routes = Vec::new();

        while let Some(route) = bfs(&working, start, end) {
            debug!(
                route = routes.len(),
                rooms = route.len(),
                "accepted route {}",
                route.names(graph).join(" -> "),
            );
            if route.is_direct() {
                cut_tunnel(&mut working, start, end);
            } else {
                for &room in route.interior() {
                    cut_room(&mut working, room);
                }
            }
            routes.push(route);
        }

        if routes.is_empty() {
            return Err(GraphError::NoRouteFound { from: start, to: end });
        }
        Ok(routes)
    }
}

// ── BFS internals ─────────────────────────────────────────────────────────────

/// Shortest path from `start` to `end` over `adjacency`, exploring neighbours
/// in stored order.  The parent of a room is fixed the first time it is
/// reached.
fn bfs(adjacency: &[Vec<NodeId>], start: NodeId, end: NodeId) -> Option<Route> {
    let n = adjacency.len();
    let mut parent  = vec![NodeId::INVALID; n];
    let mut visited = vec![false; n];
    let mut queue   = VecDeque::new();

    visited[start.index()] = true;
    queue.push_back(start);

    while let Some(room) = queue.pop_front() {
        for &next in &adjacency[room.index()] {
            if visited[next.index()] {
                continue;
            }
            visited[next.index()] = true;
            parent[next.index()] = room;
            if next == end {
                return Some(reconstruct(&parent, end));
            }
            queue.push_back(next);
        }
    }
    None
}

fn reconstruct(parent: &[NodeId], end: NodeId) -> Route {
    let mut nodes = vec![end];
    let mut cur = end;
    while parent[cur.index()] != NodeId::INVALID {
        cur = parent[cur.index()];
        nodes.push(cur);
    }
    nodes.reverse();
    Route::new(nodes)
}

/// Remove `room` from every neighbour list and clear its own list.
fn cut_room(adjacency: &mut [Vec<NodeId>], room: NodeId) {
    let neighbours = std::mem::take(&mut adjacency[room.index()]);
    for other in neighbours {
        adjacency[other.index()].retain(|&r| r != room);
    }
}

/// Remove every tunnel between `a` and `b`.
fn cut_tunnel(adjacency: &mut [Vec<NodeId>], a: NodeId, b: NodeId) {
    adjacency[a.index()].retain(|&r| r != b);
    adjacency[b.index()].retain(|&r| r != a);
}
