//! `lem-output`: presentation and persistence for routing runs.
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`text`]     | `format_moves`, `TextWriter`: `L1-room L2-room` lines     |
//! | [`grid`]     | `render_lane`: one route's occupancy as a strip           |
//! | [`report`]   | `Report`, `ReportObserver`: full run report file          |
//! | [`csv`]      | `CsvWriter`: `moves.csv`, `turn_summaries.csv`            |
//! | [`sqlite`]   | `SqliteWriter`: `output.db` (feature `sqlite`)            |
//! | [`observer`] | `SimOutputObserver`: drives any `OutputWriter` from a run |
//!
//! # Usage
//!
//! ```rust,ignore
//! use lem_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer, &graph);
//! let solution = lem_sim::solve(&graph, &config, &mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod grid;
pub mod observer;
pub mod report;
pub mod row;
pub mod text;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use grid::render_lane;
pub use observer::SimOutputObserver;
pub use report::{Report, ReportObserver};
pub use row::{MoveRow, TurnSummaryRow};
pub use text::{TextWriter, format_moves};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
