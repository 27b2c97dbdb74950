//! Plain data row types written by output backends.

/// One token stepping into a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRow {
    pub turn:     u64,
    pub token:    u32,
    pub route:    u32,
    /// Name of the room entered.
    pub room:     String,
    /// Index of `room` within the route.
    pub position: u32,
    pub arrived:  bool,
}

/// Summary statistics for one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnSummaryRow {
    pub turn:          u64,
    pub moves:         u64,
    /// Tokens in the end room after this turn, across all routes.
    pub arrived_total: u64,
}
