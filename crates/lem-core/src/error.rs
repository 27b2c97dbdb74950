//! Shared error type.
//!
//! Sub-crates define their own error enums and wrap `LemError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// Errors raised by `lem-core` and reused by sub-crates.
#[derive(Debug, Error)]
pub enum LemError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `lem-core`.
pub type LemResult<T> = Result<T, LemError>;
