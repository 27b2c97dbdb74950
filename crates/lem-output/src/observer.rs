//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use lem_core::Turn;
use lem_graph::Graph;
use lem_sim::{Move, RouteLane, SimObserver};

use crate::row::{MoveRow, TurnSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes every move and a per-turn summary to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After the run returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<'g, W: OutputWriter> {
    writer:     W,
    graph:      &'g Graph,
    last_error: Option<OutputError>,
}

impl<'g, W: OutputWriter> SimOutputObserver<'g, W> {
    /// Create an observer backed by `writer`; room names come from `graph`.
    pub fn new(writer: W, graph: &'g Graph) -> Self {
        Self { writer, graph, last_error: None }
    }

    /// Take the stored write error (if any) after the run returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<'_, W> {
    fn on_turn_end(&mut self, turn: Turn, moves: &[Move], lanes: &[RouteLane]) {
        let rows: Vec<MoveRow> = moves
            .iter()
            .map(|m| MoveRow {
                turn:     turn.0,
                token:    m.token.0,
                route:    m.route.0,
                room:     self.graph.name(m.to).to_owned(),
                position: m.position as u32,
                arrived:  m.arrived,
            })
            .collect();
        let result = self.writer.write_moves(&rows);
        self.store_err(result);

        let summary = TurnSummaryRow {
            turn:          turn.0,
            moves:         moves.len() as u64,
            arrived_total: lanes.iter().map(|l| l.arrived() as u64).sum(),
        };
        let result = self.writer.write_turn_summary(&summary);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_turn: Turn) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
