//! Move lines: one line per turn, `L<token>-<room>` items separated by spaces.

use std::io::{self, Write};

use lem_graph::Graph;
use lem_sim::{Move, TurnMoves, TurnTrace};

/// Render one turn's moves, e.g. `L1-3 L2-2`.
pub fn format_moves(graph: &Graph, moves: &[Move]) -> String {
    let mut line = String::new();
    for (i, m) in moves.iter().enumerate() {
        if i > 0 {
            line.push(' ');
        }
        line.push_str(&format!("{}-{}", m.token, graph.name(m.to)));
    }
    line
}

/// Writes move lines to any `io::Write`.
///
/// By default each line is the bare move list.  [`numbered`][Self::numbered]
/// prefixes every line with `Turn <n>: `.
pub struct TextWriter<W: Write> {
    out:      W,
    numbered: bool,
}

impl<W: Write> TextWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, numbered: false }
    }

    /// Prefix each line with its turn number.
    pub fn numbered(mut self) -> Self {
        self.numbered = true;
        self
    }

    pub fn write_turn(&mut self, graph: &Graph, turn: &TurnMoves) -> io::Result<()> {
        if self.numbered {
            write!(self.out, "Turn {}: ", turn.turn.0)?;
        }
        writeln!(self.out, "{}", format_moves(graph, &turn.moves))
    }

    /// Write every recorded turn, then flush.
    pub fn write_trace(&mut self, graph: &Graph, trace: &TurnTrace) -> io::Result<()> {
        for turn in trace {
            self.write_turn(graph, turn)?;
        }
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
