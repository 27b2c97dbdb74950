//! Colony graph representation and builder.
//!
//! # Data layout
//!
//! Rooms are stored in insertion order and addressed by `NodeId`.  The
//! adjacency list keeps, for every room, its neighbours in the order the
//! tunnels were added: tunnel `a-b` appends `b` to `a`'s list and `a` to
//! `b`'s list.  Route discovery explores neighbours in exactly this order, so
//! the same input always yields the same routes.
//!
//! A `Graph` is immutable once built.  Route discovery works on its own copy
//! of the adjacency list.

use rustc_hash::FxHashMap;

use lem_core::NodeId;

use crate::{Endpoint, GraphError, GraphResult};

// ── Node / Edge ───────────────────────────────────────────────────────────────

/// A room.  Start and end rooms hold any number of tokens; every other room
/// holds at most one.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub name:     String,
    pub x:        i64,
    pub y:        i64,
    pub is_start: bool,
    pub is_end:   bool,
}

impl Node {
    /// An ordinary capacity-1 room.
    pub fn new(name: impl Into<String>, x: i64, y: i64) -> Self {
        Self { name: name.into(), x, y, is_start: false, is_end: false }
    }

    pub fn start(name: impl Into<String>, x: i64, y: i64) -> Self {
        Self { is_start: true, ..Self::new(name, x, y) }
    }

    pub fn end(name: impl Into<String>, x: i64, y: i64) -> Self {
        Self { is_end: true, ..Self::new(name, x, y) }
    }

    /// `true` for the start and end rooms, which have no occupancy limit.
    #[inline]
    pub fn is_unbounded(&self) -> bool {
        self.is_start || self.is_end
    }
}

/// An undirected tunnel between two rooms, by name.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub a: String,
    pub b: String,
}

impl Edge {
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self { a: a.into(), b: b.into() }
    }
}

// ── Graph ─────────────────────────────────────────────────────────────────────

/// Undirected colony graph with insertion-ordered adjacency.
///
/// Built once with [`Graph::build`] or [`GraphBuilder`] and read-only
/// afterwards:
///
/// ```compile_fail
/// # use lem_graph::GraphBuilder;
/// let mut g = GraphBuilder::new().build().unwrap();
/// g.adjacency.clear();
/// ```
#[derive(Debug, Clone)]
pub struct Graph {
    /// Room data, indexed by `NodeId`.
    nodes: Vec<Node>,

    /// Neighbours of each room in tunnel insertion order.  Indexed by `NodeId`.
    adjacency: Vec<Vec<NodeId>>,

    index:      FxHashMap<String, NodeId>,
    edge_count: usize,
}

impl Graph {
    /// Build a graph from rooms and tunnels.
    ///
    /// Fails with [`GraphError::UnknownEndpoint`] if a tunnel names a room
    /// that is not in `nodes`.  Room names are expected to be unique; the
    /// loader enforces this.
    pub fn build(nodes: Vec<Node>, edges: &[Edge]) -> GraphResult<Graph> {
        let mut b = GraphBuilder::with_capacity(nodes.len(), edges.len());
        for node in nodes {
            b.add_node(node);
        }
        for edge in edges {
            b.add_tunnel(edge.a.clone(), edge.b.clone());
        }
        b.build()
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    /// All rooms, indexed by `NodeId`.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Full adjacency table; route discovery clones it as its working copy.
    pub(crate) fn adjacency(&self) -> &[Vec<NodeId>] {
        &self.adjacency
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of tunnels (each counted once).
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Room name for `id`, or `"?"` for an id outside the graph.
    pub fn name(&self, id: NodeId) -> &str {
        self.node(id).map_or("?", |n| n.name.as_str())
    }

    /// Resolve a room name to its id.
    pub fn resolve(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    /// Neighbours of `id` in tunnel insertion order.
    #[inline]
    pub fn neighbors(&self, id: NodeId) -> &[NodeId] {
        self.adjacency.get(id.index()).map_or(&[], Vec::as_slice)
    }

    pub fn has_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.neighbors(a).contains(&b)
    }

    /// `true` if `id` is the start or end room.
    pub fn is_unbounded(&self, id: NodeId) -> bool {
        self.node(id).is_some_and(Node::is_unbounded)
    }

    // ── Endpoints ─────────────────────────────────────────────────────────

    /// The room flagged as start.
    ///
    /// Scans rooms in insertion order.  Fails if no room or more than one
    /// room carries the flag.
    pub fn start(&self) -> GraphResult<NodeId> {
        self.flagged(Endpoint::Start, |n| n.is_start)
    }

    /// The room flagged as end.  Same rules as [`start`](Self::start).
    pub fn end(&self) -> GraphResult<NodeId> {
        self.flagged(Endpoint::End, |n| n.is_end)
    }

    fn flagged(&self, which: Endpoint, pred: impl Fn(&Node) -> bool) -> GraphResult<NodeId> {
        let mut found = None;
        for (i, node) in self.nodes.iter().enumerate() {
            if pred(node) {
                if found.is_some() {
                    return Err(GraphError::AmbiguousEndpoint(which));
                }
                found = Some(NodeId(i as u32));
            }
        }
        found.ok_or(GraphError::MissingEndpoint(which))
    }
}

// ── GraphBuilder ──────────────────────────────────────────────────────────────

/// Construct a [`Graph`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use lem_graph::{GraphBuilder, Node};
///
/// let mut b = GraphBuilder::new();
/// b.add_node(Node::start("s", 0, 0));
/// b.add_node(Node::end("e", 1, 0));
/// b.add_tunnel("s", "e");
/// let g = b.build().unwrap();
/// assert_eq!(g.node_count(), 2);
/// assert_eq!(g.edge_count(), 1);
/// ```
pub struct GraphBuilder {
    nodes:     Vec<Node>,
    raw_edges: Vec<(String, String)>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self { nodes: Vec::new(), raw_edges: Vec::new() }
    }

    /// Pre-allocate for the expected number of rooms and tunnels.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            nodes:     Vec::with_capacity(nodes),
            raw_edges: Vec::with_capacity(edges),
        }
    }

    /// Add a room and return its `NodeId` (sequential from 0).
    pub fn add_node(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Add an undirected tunnel between two rooms, by name.  Endpoints are
    /// resolved in [`build`](Self::build), so rooms may be added later.
    pub fn add_tunnel(&mut self, a: impl Into<String>, b: impl Into<String>) {
        self.raw_edges.push((a.into(), b.into()));
    }

    pub fn node_count(&self) -> usize { self.nodes.len() }
    pub fn edge_count(&self) -> usize { self.raw_edges.len() }

    /// Resolve tunnel endpoints and produce the [`Graph`].
    pub fn build(self) -> GraphResult<Graph> {
        let mut index: FxHashMap<String, NodeId> = FxHashMap::default();
        index.reserve(self.nodes.len());
        for (i, node) in self.nodes.iter().enumerate() {
            // First occurrence wins for duplicated names.
            index.entry(node.name.clone()).or_insert(NodeId(i as u32));
        }

        let mut adjacency: Vec<Vec<NodeId>> = vec![Vec::new(); self.nodes.len()];
        for (a, b) in &self.raw_edges {
            let ia = *index.get(a).ok_or_else(|| GraphError::UnknownEndpoint(a.clone()))?;
            let ib = *index.get(b).ok_or_else(|| GraphError::UnknownEndpoint(b.clone()))?;
            adjacency[ia.index()].push(ib);
            adjacency[ib.index()].push(ia);
        }

        Ok(Graph {
            nodes: self.nodes,
            adjacency,
            index,
            edge_count: self.raw_edges.len(),
        })
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
