//! Lane strips: `[ start (L3, L4) ] ---> [ a (L2) ] ---> [ end (L1) ]`.

use lem_graph::Graph;
use lem_sim::RouteLane;

/// Render one route and the tokens currently in each of its rooms.
pub fn render_lane(graph: &Graph, lane: &RouteLane) -> String {
    let cells: Vec<String> = lane
        .route
        .nodes
        .iter()
        .enumerate()
        .map(|(i, &node)| {
            let labels: Vec<String> = lane.tokens_at(i).map(|t| t.to_string()).collect();
            if labels.is_empty() {
                format!("[ {} ]", graph.name(node))
            } else {
                format!("[ {} ({}) ]", graph.name(node), labels.join(", "))
            }
        })
        .collect();
    cells.join(" ---> ")
}
