//! Full run report: input echo, summary, routes, per-turn lane grids.

use std::fmt;
use std::path::Path;

use lem_core::Turn;
use lem_graph::{Colony, Graph};
use lem_sim::{Move, RouteLane, SimObserver, Solution};

use crate::OutputResult;
use crate::grid::render_lane;

// ── ReportObserver ────────────────────────────────────────────────────────────

/// Collects one grid per turn while the simulation runs.
///
/// Only lanes carrying tokens are drawn.
pub struct ReportObserver<'g> {
    graph: &'g Graph,
    grids: Vec<String>,
}

impl<'g> ReportObserver<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self { graph, grids: Vec::new() }
    }

    /// Grids collected so far; entry `i` is turn `i + 1`.
    pub fn grids(&self) -> &[String] {
        &self.grids
    }

    pub fn into_grids(self) -> Vec<String> {
        self.grids
    }
}

impl SimObserver for ReportObserver<'_> {
    fn on_turn_end(&mut self, _turn: Turn, _moves: &[Move], lanes: &[RouteLane]) {
        let grid: Vec<String> = lanes
            .iter()
            .filter(|l| l.token_count() > 0)
            .map(|l| render_lane(self.graph, l))
            .collect();
        self.grids.push(grid.join("\n"));
    }
}

// ── Report ────────────────────────────────────────────────────────────────────

/// A rendered run report.  `Display` produces the full text.
#[derive(Debug, Clone)]
pub struct Report {
    input:       String,
    token_count: u32,
    rooms:       usize,
    tunnels:     usize,
    start:       String,
    end:         String,
    routes:      Vec<String>,
    /// `(route index, rendered route, tokens assigned)` for routes in use.
    selected:    Vec<(usize, String, u32)>,
    grids:       Vec<String>,
    total_turns: u64,
}

impl Report {
    /// Assemble the report for `solution`, computed from `colony`.
    ///
    /// `grids` come from a [`ReportObserver`] attached to the same run; pass
    /// an empty vector to omit the per-turn section.
    pub fn new(colony: &Colony, graph: &Graph, solution: &Solution, grids: Vec<String>) -> Self {
        let routes: Vec<String> = solution
            .routes
            .iter()
            .map(|r| r.names(graph).join(" -> "))
            .collect();
        let selected = solution
            .allocation
            .iter()
            .filter(|&(_, count)| count > 0)
            .map(|(id, count)| (id.index(), routes[id.index()].clone(), count))
            .collect();

        Self {
            input:       colony.to_string(),
            token_count: colony.token_count,
            rooms:       colony.nodes.len(),
            tunnels:     colony.edges.len(),
            start:       graph.name(solution.start).to_owned(),
            end:         graph.name(solution.end).to_owned(),
            routes,
            selected,
            grids,
            total_turns: solution.total_turns,
        }
    }

    /// Write the rendered report to `path`, replacing any existing file.
    pub fn write_to(&self, path: &Path) -> OutputResult<()> {
        std::fs::write(path, self.to_string())?;
        Ok(())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.input)?;

        writeln!(f, "----------- Summary -----------")?;
        writeln!(f, "Number of ants: {}", self.token_count)?;
        writeln!(f, "Number of rooms: {}", self.rooms)?;
        writeln!(f, "Number of tunnels: {}", self.tunnels)?;
        writeln!(f, "Start room: {}", self.start)?;
        writeln!(f, "End room: {}", self.end)?;
        writeln!(f)?;

        writeln!(f, "---------- All Found Paths ----------")?;
        writeln!(f, "Number of possible paths: {}", self.routes.len())?;
        for (i, route) in self.routes.iter().enumerate() {
            writeln!(f, "{}) {}", i + 1, route)?;
        }
        writeln!(f)?;

        writeln!(f, "---------- Selected Paths ----------")?;
        for (i, route, count) in &self.selected {
            let unit = if *count == 1 { "ant" } else { "ants" };
            writeln!(f, "{}) {} ({} {})", i + 1, route, count, unit)?;
        }
        writeln!(f)?;

        for (i, grid) in self.grids.iter().enumerate() {
            writeln!(f, "TURN {}", i + 1)?;
            writeln!(f, "{grid}")?;
            writeln!(f)?;
        }
        writeln!(f, "Total turns: {}", self.total_turns)
    }
}
