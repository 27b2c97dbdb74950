//! Layered random colony.
//!
//! ```text
//!            layer 0   layer 1        layer L-1
//!          ┌ r0_0 ──── r1_0 ── … ──── rL_0 ┐
//!   start ─┼ r0_1 ──── r1_1 ── … ──── rL_1 ┼─ end
//!          └ r0_2 ─╲── r1_2 ── … ──── rL_2 ┘
//!                   ╲ cross link
//! ```
//!
//! Every layer-0 room hangs off `start` and every last-layer room feeds
//! `end`.  Between consecutive layers, the straight link `r{l}_i - r{l+1}_i`
//! is dropped with probability `cut`, and a cross link to a random room in
//! the next layer is added with probability `cross`.

use rand::Rng;

use lem_graph::{Graph, GraphBuilder, GraphResult, Node};

pub struct Shape {
    pub layers: usize,
    pub width:  usize,
    pub cut:    f64,
    pub cross:  f64,
}

fn room(layer: usize, i: usize) -> String {
    format!("r{layer}_{i}")
}

/// Build the colony; rooms are named `start`, `end`, and `r{layer}_{i}`.
pub fn build_colony<R: Rng>(shape: &Shape, rng: &mut R) -> GraphResult<Graph> {
    let Shape { layers, width, cut, cross } = *shape;
    let mut bldr = GraphBuilder::with_capacity(layers * width + 2, layers * width * 2);

    bldr.add_node(Node::start("start", 0, 0));
    for layer in 0..layers {
        for i in 0..width {
            bldr.add_node(Node::new(room(layer, i), layer as i64 + 1, i as i64));
        }
    }
    bldr.add_node(Node::end("end", layers as i64 + 1, 0));

    for i in 0..width {
        bldr.add_tunnel("start", room(0, i));
    }
    for layer in 0..layers.saturating_sub(1) {
        for i in 0..width {
            if !rng.gen_bool(cut) {
                bldr.add_tunnel(room(layer, i), room(layer + 1, i));
            }
            if rng.gen_bool(cross) {
                let j = rng.gen_range(0..width);
                if j != i {
                    bldr.add_tunnel(room(layer, i), room(layer + 1, j));
                }
            }
        }
    }
    if layers > 0 {
        for i in 0..width {
            bldr.add_tunnel(room(layers - 1, i), "end");
        }
    } else {
        bldr.add_tunnel("start", "end");
    }

    bldr.build()
}
