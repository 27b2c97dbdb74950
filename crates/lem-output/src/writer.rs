//! The `OutputWriter` trait implemented by all backend writers.

use crate::{MoveRow, OutputResult, TurnSummaryRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// Errors raised while a simulation is running are stored by
/// [`SimOutputObserver`][crate::SimOutputObserver] and retrieved with
/// `take_error`.
pub trait OutputWriter {
    /// Write one turn's moves.
    fn write_moves(&mut self, rows: &[MoveRow]) -> OutputResult<()>;

    /// Write one turn summary row.
    fn write_turn_summary(&mut self, row: &TurnSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
