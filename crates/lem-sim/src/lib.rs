//! `lem-sim`: turn loop simulator for the lem-in routing workspace.
//!
//! # Turn loop
//!
//! ```text
//! for turn in 1..:
//!   for each route lane (route order):
//!     direct route  → at most one waiting token enters the end room
//!     longer route  → tokens nearest the end move first; a token steps
//!                     forward if the next room is the end or is free
//!   no token moved → stop (this turn is not recorded)
//! ```
//!
//! # Crate layout
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`lane`]     | `RouteLane`: per-route token positions                |
//! | [`trace`]    | `Move`, `TurnMoves`, `TurnTrace`                       |
//! | [`sim`]      | `Sim` and its turn loop                                |
//! | [`builder`]  | `SimBuilder`: validated construction                  |
//! | [`observer`] | `SimObserver`, `NoopObserver`                          |
//! | [`pipeline`] | `solve`, `solve_with`, `Solution`                      |
//! | [`error`]    | `SimError`, `SimResult<T>`                             |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lem_core::RunConfig;
//! use lem_graph::load_colony_path;
//! use lem_sim::{NoopObserver, solve};
//!
//! let colony = load_colony_path(path)?;
//! let graph = colony.build_graph()?;
//! let solution = solve(&graph, &RunConfig::new(colony.token_count), &mut NoopObserver)?;
//! println!("{} turns", solution.total_turns);
//! ```

pub mod builder;
pub mod error;
pub mod lane;
pub mod observer;
pub mod pipeline;
pub mod sim;
pub mod trace;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use lane::RouteLane;
pub use observer::{NoopObserver, SimObserver};
pub use pipeline::{Solution, solve, solve_with};
pub use sim::Sim;
pub use trace::{Move, TurnMoves, TurnTrace};
