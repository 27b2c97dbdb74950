//! SQLite output backend (feature `sqlite`).
//!
//! Two tables, `moves` and `turn_summaries`, in `output.db` or an in-memory
//! database.  `moves` is indexed by token so one ant's path is a cheap query.

use std::path::Path;

use rusqlite::{Connection, params};

use crate::writer::OutputWriter;
use crate::{MoveRow, OutputResult, TurnSummaryRow};

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS moves (
        turn     INTEGER NOT NULL,
        token    INTEGER NOT NULL,
        route    INTEGER NOT NULL,
        room     TEXT    NOT NULL,
        position INTEGER NOT NULL,
        arrived  INTEGER NOT NULL
    );
    CREATE INDEX IF NOT EXISTS moves_by_token ON moves (token, turn);
    CREATE TABLE IF NOT EXISTS turn_summaries (
        turn          INTEGER PRIMARY KEY,
        moves         INTEGER NOT NULL,
        arrived_total INTEGER NOT NULL
    );";

/// Writes run output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;
        conn.execute_batch("PRAGMA journal_mode = WAL; PRAGMA synchronous = NORMAL;")?;
        Self::with_connection(conn)
    }

    /// A writer backed by a private in-memory database.
    pub fn in_memory() -> OutputResult<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> OutputResult<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn, finished: false })
    }

    /// The underlying connection, for queries after the run.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Rooms entered by `token`, in turn order.
    pub fn token_path(&self, token: u32) -> OutputResult<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT room FROM moves WHERE token = ?1 ORDER BY turn")?;
        let rooms = stmt
            .query_map(params![token], |r| r.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(rooms)
    }
}

impl OutputWriter for SqliteWriter {
    fn write_moves(&mut self, rows: &[MoveRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO moves (turn, token, route, room, position, arrived) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for row in rows {
                stmt.execute(params![
                    row.turn as i64,
                    row.token,
                    row.route,
                    row.room,
                    row.position,
                    row.arrived,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_turn_summary(&mut self, row: &TurnSummaryRow) -> OutputResult<()> {
        let mut stmt = self.conn.prepare_cached(
            "INSERT INTO turn_summaries (turn, moves, arrived_total) VALUES (?1, ?2, ?3)",
        )?;
        stmt.execute(params![row.turn as i64, row.moves as i64, row.arrived_total as i64])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        // No-op for in-memory databases.
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
