//! `lem-graph`: colony graph, route discovery, and input loading.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`graph`]   | `Node`, `Edge`, `Graph`, `GraphBuilder`                     |
//! | [`router`]  | `RouteFinder` trait, `Route`, `DisjointBfsFinder`           |
//! | [`loader`]  | `Colony`, `load_colony_path`, `load_colony_reader`          |
//! | [`error`]   | `GraphError`, `GraphResult<T>`, `Endpoint`                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod graph;
pub mod loader;
pub mod router;


pub use error::{Endpoint, GraphError, GraphResult};
pub use graph::{Edge, Graph, GraphBuilder, Node};
pub use loader::{Colony, load_colony_path, load_colony_reader};
pub use router::{DisjointBfsFinder, Route, RouteFinder};
