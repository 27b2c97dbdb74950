//! CSV output backend.
//!
//! [`CsvWriter::new`] creates `moves.csv` and `turn_summaries.csv` in a
//! directory; [`CsvWriter::from_writers`] targets any pair of sinks.

use std::fs::File;
use std::io;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{MoveRow, OutputResult, TurnSummaryRow};

const MOVE_HEADER:    [&str; 6] = ["turn", "token", "route", "room", "position", "arrived"];
const SUMMARY_HEADER: [&str; 3] = ["turn", "moves", "arrived_total"];

/// Writes moves and turn summaries as two CSV streams.
pub struct CsvWriter<W: io::Write = File> {
    moves:     Writer<W>,
    summaries: Writer<W>,
    finished:  bool,
}

impl CsvWriter<File> {
    /// Create the two CSV files in `dir` and write their headers.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        Self::from_writers(
            File::create(dir.join("moves.csv"))?,
            File::create(dir.join("turn_summaries.csv"))?,
        )
    }
}

impl<W: io::Write> CsvWriter<W> {
    /// Write the headers to `moves` and `summaries` and return the writer.
    pub fn from_writers(moves: W, summaries: W) -> OutputResult<Self> {
        let mut moves = Writer::from_writer(moves);
        moves.write_record(MOVE_HEADER)?;
        let mut summaries = Writer::from_writer(summaries);
        summaries.write_record(SUMMARY_HEADER)?;
        Ok(Self { moves, summaries, finished: false })
    }

    /// Flush and hand back `(moves, summaries)`.
    pub fn into_inner(self) -> OutputResult<(W, W)> {
        let moves = self.moves.into_inner().map_err(|e| e.into_error())?;
        let summaries = self.summaries.into_inner().map_err(|e| e.into_error())?;
        Ok((moves, summaries))
    }
}

impl<W: io::Write> OutputWriter for CsvWriter<W> {
    fn write_moves(&mut self, rows: &[MoveRow]) -> OutputResult<()> {
        for row in rows {
            let turn = row.turn.to_string();
            let token = row.token.to_string();
            let route = row.route.to_string();
            let position = row.position.to_string();
            let arrived = if row.arrived { "1" } else { "0" };
            self.moves
                .write_record([
                    turn.as_str(),
                    token.as_str(),
                    route.as_str(),
                    row.room.as_str(),
                    position.as_str(),
                    arrived,
                ])?;
        }
        Ok(())
    }

    fn write_turn_summary(&mut self, row: &TurnSummaryRow) -> OutputResult<()> {
        self.summaries.write_record([
            row.turn.to_string(),
            row.moves.to_string(),
            row.arrived_total.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if !self.finished {
            self.finished = true;
            self.moves.flush()?;
            self.summaries.flush()?;
        }
        Ok(())
    }
}
