//! `lem-schedule`: distributing tokens across discovered routes.
//!
//! # Crate layout
//!
//! | Module         | Contents                                      |
//! |----------------|-----------------------------------------------|
//! | [`allocation`] | `Allocation`: per-route token counts         |
//! | [`scheduler`]  | `Scheduler` trait, `GreedyScheduler`          |
//!
//! # Cost model (summary)
//!
//! ```text
//! cost(r) = len(r) + assigned(r) - 1
//! ```
//!
//! `len(r)` counts rooms, so `cost(r)` is the turn on which the next token
//! sent down `r` would arrive.  Each token goes to the cheapest route, lowest
//! route index first on ties.

pub mod allocation;
pub mod scheduler;


pub use allocation::Allocation;
pub use scheduler::{GreedyScheduler, Scheduler};
