//! Simulation observer trait for progress reporting and data collection.

use lem_core::Turn;

use crate::lane::RouteLane;
use crate::trace::Move;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] as turns complete.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: move printer
///
/// ```rust,ignore
/// struct MovePrinter;
///
/// impl SimObserver for MovePrinter {
///     fn on_turn_end(&mut self, turn: Turn, moves: &[Move], _lanes: &[RouteLane]) {
///         println!("{turn}: {} moves", moves.len());
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called after every recorded turn.
    ///
    /// `moves` are this turn's moves; `lanes` is the state after them.
    fn on_turn_end(&mut self, _turn: Turn, _moves: &[Move], _lanes: &[RouteLane]) {}

    /// Called once after the last token has arrived.  `final_turn` is the
    /// makespan.
    fn on_sim_end(&mut self, _final_turn: Turn) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

impl<O: SimObserver + ?Sized> SimObserver for &mut O {
    fn on_turn_end(&mut self, turn: Turn, moves: &[Move], lanes: &[RouteLane]) {
        (**self).on_turn_end(turn, moves, lanes);
    }

    fn on_sim_end(&mut self, final_turn: Turn) {
        (**self).on_sim_end(final_turn);
    }
}

/// Fan out to two observers, first then second.
impl<A: SimObserver, B: SimObserver> SimObserver for (A, B) {
    fn on_turn_end(&mut self, turn: Turn, moves: &[Move], lanes: &[RouteLane]) {
        self.0.on_turn_end(turn, moves, lanes);
        self.1.on_turn_end(turn, moves, lanes);
    }

    fn on_sim_end(&mut self, final_turn: Turn) {
        self.0.on_sim_end(final_turn);
        self.1.on_sim_end(final_turn);
    }
}
