//! `lem-core`: foundational types for the lem-in routing workspace.
//!
//! Every other `lem-*` crate depends on this one.  It has no `lem-*`
//! dependencies and a single required external one (`thiserror`), plus
//! optional `serde`.
//!
//! # What lives here
//!
//! | Module      | Contents                                   |
//! |-------------|--------------------------------------------|
//! | [`ids`]     | `NodeId`, `RouteId`, `TokenId`             |
//! | [`turn`]    | `Turn` counter                             |
//! | [`config`]  | `RunConfig`                                |
//! | [`error`]   | `LemError`, `LemResult`                    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod turn;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::RunConfig;
pub use error::{LemError, LemResult};
pub use ids::{NodeId, RouteId, TokenId};
pub use turn::Turn;
