//! The `Sim` struct and its turn loop.

use tracing::trace;

use lem_core::{RunConfig, Turn};

use crate::lane::RouteLane;
use crate::trace::{Move, TurnMoves, TurnTrace};
use crate::{SimError, SimObserver, SimResult};

/// The turn-by-turn simulator.
///
/// Holds one [`RouteLane`] per route.  Each turn every lane advances
/// independently; the first turn in which nothing moves ends the run and is
/// not recorded.
///
/// Termination: the sum of all token positions grows on every recorded turn
/// and is bounded by `Σ moves(r) · count(r)`, so the loop always halts.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Token count, turn limit, trace recording.
    pub config: RunConfig,

    /// Per-route token state, in route order.
    pub lanes: Vec<RouteLane>,

    /// Last completed turn.  `Turn::ZERO` before the first step.
    pub turn: Turn,

    pub(crate) trace:    TurnTrace,
    pub(crate) finished: bool,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run until no token can move.
    ///
    /// Fails with [`SimError::TurnLimitExceeded`] if `config.turn_limit`
    /// turns pass with tokens still in flight.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.step(observer).is_some() {
            if let Some(limit) = self.config.turn_limit {
                if self.turn.0 >= limit && !self.all_arrived() {
                    return Err(SimError::TurnLimitExceeded { limit });
                }
            }
        }
        observer.on_sim_end(self.turn);
        Ok(())
    }

    /// Run at most `n` turns from the current position, ignoring the turn
    /// limit.  Returns the number of turns actually recorded; fewer than `n`
    /// means the simulation finished.
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_turns<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> u64 {
        let mut ran = 0;
        while ran < n && self.step(observer).is_some() {
            ran += 1;
        }
        ran
    }

    /// Compute one turn.  Returns the number of tokens that moved, or `None`
    /// once nothing can move.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> Option<usize> {
        if self.finished {
            return None;
        }

        let mut moves: Vec<Move> = Vec::new();
        for lane in &mut self.lanes {
            lane.advance(&mut moves);
        }
        if moves.is_empty() {
            self.finished = true;
            return None;
        }

        let turn = self.turn.next();
        self.turn = turn;
        let moved = moves.len();
        trace!(turn = turn.0, moved, "turn complete");

        observer.on_turn_end(turn, &moves, &self.lanes);
        if self.config.record_trace {
            self.trace.push(TurnMoves { turn, moves });
        }
        Some(moved)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// Turns recorded so far.  After `run` this is the makespan.
    pub fn total_turns(&self) -> u64 {
        self.turn.0
    }

    /// `true` once a turn with no moves has been seen.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// `true` when every token is in the end room.
    pub fn all_arrived(&self) -> bool {
        self.lanes.iter().all(RouteLane::is_finished)
    }

    /// Upper bound on the number of turns: `Σ moves(r) · count(r)`.
    pub fn turn_bound(&self) -> u64 {
        self.lanes
            .iter()
            .map(|l| l.route.moves() as u64 * l.token_count() as u64)
            .sum()
    }

    /// Recorded moves.  Empty when `config.record_trace` is `false`.
    pub fn trace(&self) -> &TurnTrace {
        &self.trace
    }

    pub fn into_trace(self) -> TurnTrace {
        self.trace
    }
}
