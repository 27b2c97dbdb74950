//! Run configuration.

use crate::{LemError, LemResult};

/// Top-level configuration for one routing run.
///
/// Typically assembled by the application from parsed input and CLI flags,
/// then handed to `lem_sim::solve` or `SimBuilder`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunConfig {
    /// Number of tokens to move from start to end.
    pub token_count: u32,

    /// Stop issuing turns after this many.  `None` runs until every token has
    /// arrived, which always terminates for a valid allocation.
    pub turn_limit: Option<u64>,

    /// Keep every turn's moves in memory.  When `false` the moves are only
    /// streamed to observers and the returned trace is empty.
    pub record_trace: bool,
}

impl RunConfig {
    /// Configuration for `token_count` tokens with no turn limit and a
    /// recorded trace.
    pub fn new(token_count: u32) -> Self {
        Self {
            token_count,
            turn_limit: None,
            record_trace: true,
        }
    }

    pub fn with_turn_limit(mut self, limit: u64) -> Self {
        self.turn_limit = Some(limit);
        self
    }

    pub fn without_trace(mut self) -> Self {
        self.record_trace = false;
        self
    }

    /// Reject settings that can never produce a useful run.
    pub fn validate(&self) -> LemResult<()> {
        if self.turn_limit == Some(0) {
            return Err(LemError::Config("turn_limit must be at least 1".into()));
        }
        Ok(())
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::new(0)
    }
}
