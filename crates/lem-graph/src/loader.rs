//! Colony text loader.
//!
//! # Format
//!
//! ```text
//! 3            <- token count, first line
//! ##start      <- flags the next room as start
//! s 0 0        <- room: name x y
//! a 1 0
//! ##end
//! e 2 0
//! s-a          <- tunnel: name-name
//! a-e
//! ```
//!
//! Lines starting with `#` other than `##start` / `##end` are comments.
//! Blank lines and unrecognised lines are skipped.
//!
//! The loader owns input validation: positive token count, integer
//! coordinates, unique room names and coordinates, well-formed tunnels, and
//! exactly one start and one end room.  Tunnel endpoints are resolved later,
//! by [`Graph::build`].

use std::fmt;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use rustc_hash::FxHashSet;

use crate::graph::{Edge, Graph, Node};
use crate::{Endpoint, GraphError, GraphResult};

// ── Colony ────────────────────────────────────────────────────────────────────

/// Parsed, validated input: token count, rooms, and tunnels in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Colony {
    pub token_count: u32,
    pub nodes:       Vec<Node>,
    pub edges:       Vec<Edge>,
}

impl Colony {
    /// Build the graph for this colony.
    pub fn build_graph(&self) -> GraphResult<Graph> {
        Graph::build(self.nodes.clone(), &self.edges)
    }

    pub fn start_name(&self) -> Option<&str> {
        self.nodes.iter().find(|n| n.is_start).map(|n| n.name.as_str())
    }

    pub fn end_name(&self) -> Option<&str> {
        self.nodes.iter().find(|n| n.is_end).map(|n| n.name.as_str())
    }
}

/// Renders the colony back in the input format.
impl fmt::Display for Colony {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.token_count)?;
        for node in &self.nodes {
            if node.is_start {
                writeln!(f, "##start")?;
            }
            if node.is_end {
                writeln!(f, "##end")?;
            }
            writeln!(f, "{} {} {}", node.name, node.x, node.y)?;
        }
        for edge in &self.edges {
            writeln!(f, "{}-{}", edge.a, edge.b)?;
        }
        Ok(())
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a colony from a file.
pub fn load_colony_path(path: &Path) -> GraphResult<Colony> {
    let file = std::fs::File::open(path)?;
    load_colony_reader(file)
}

/// Like [`load_colony_path`] but accepts any `Read` source.
///
/// Useful for testing (pass a `&[u8]` or `std::io::Cursor`).
pub fn load_colony_reader<R: Read>(reader: R) -> GraphResult<Colony> {
    let mut lines = BufReader::new(reader).lines();

    let first = lines.next().transpose()?.unwrap_or_default();
    let token_count = parse_token_count(first.trim())?;

    let mut nodes: Vec<Node> = Vec::new();
    let mut edges: Vec<Edge> = Vec::new();
    let mut names:  FxHashSet<String>     = FxHashSet::default();
    let mut coords: FxHashSet<(i64, i64)> = FxHashSet::default();
    let mut next_is_start = false;
    let mut next_is_end   = false;

    for (i, line) in lines.enumerate() {
        let line_no = i + 2;
        let line = line?;
        let line = line.trim();

        if line.is_empty() {
            continue;
        }
        if line.starts_with('#') {
            if line.starts_with("##start") {
                next_is_start = true;
            } else if line.starts_with("##end") {
                next_is_end = true;
            }
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() == 3 {
            let (x, y) = match (fields[1].parse::<i64>(), fields[2].parse::<i64>()) {
                (Ok(x), Ok(y)) => (x, y),
                _ => return Err(parse_err(line_no, "invalid room coordinates")),
            };
            if !coords.insert((x, y)) {
                return Err(parse_err(line_no, "duplicate room coordinates"));
            }
            if !names.insert(fields[0].to_owned()) {
                return Err(parse_err(line_no, format!("duplicate room name {:?}", fields[0])));
            }
            nodes.push(Node {
                name:     fields[0].to_owned(),
                x,
                y,
                is_start: next_is_start,
                is_end:   next_is_end,
            });
            next_is_start = false;
            next_is_end   = false;
            continue;
        }

        if line.contains('-') {
            let parts: Vec<&str> = line.split('-').collect();
            if parts.len() != 2 || parts.iter().any(|p| p.is_empty()) {
                return Err(parse_err(line_no, "invalid tunnel definition"));
            }
            edges.push(Edge::new(parts[0], parts[1]));
        }
    }

    check_endpoint(&nodes, Endpoint::Start, |n| n.is_start)?;
    check_endpoint(&nodes, Endpoint::End, |n| n.is_end)?;

    Ok(Colony { token_count, nodes, edges })
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_token_count(s: &str) -> GraphResult<u32> {
    match s.parse::<i64>() {
        Ok(n) if n > 0 => u32::try_from(n).map_err(|_| parse_err(1, "too many ants")),
        _ => Err(parse_err(1, "invalid number of ants")),
    }
}

fn check_endpoint(nodes: &[Node], which: Endpoint, pred: impl Fn(&Node) -> bool) -> GraphResult<()> {
    match nodes.iter().filter(|n| pred(n)).count() {
        0 => Err(GraphError::MissingEndpoint(which)),
        1 => Ok(()),
        _ => Err(GraphError::AmbiguousEndpoint(which)),
    }
}

fn parse_err(line: usize, reason: impl Into<String>) -> GraphError {
    GraphError::Parse { line, reason: reason.into() }
}
