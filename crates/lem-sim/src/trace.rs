//! Recorded moves.

use lem_core::{NodeId, RouteId, TokenId, Turn};

/// One token stepping one room forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub token:    TokenId,
    pub route:    RouteId,
    /// Room the token moved into.
    pub to:       NodeId,
    /// Index of `to` within the route.
    pub position: usize,
    /// `true` if `to` is the end room.
    pub arrived:  bool,
}

/// All moves made during one turn, in route order then leader-first.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnMoves {
    pub turn:  Turn,
    pub moves: Vec<Move>,
}

/// Every recorded turn, in order.  Turn `n` is at index `n - 1`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnTrace {
    turns: Vec<TurnMoves>,
}

impl TurnTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, turn: TurnMoves) {
        debug_assert_eq!(turn.turn.0, self.turns.len() as u64 + 1);
        self.turns.push(turn);
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Number of recorded turns, i.e. the makespan.
    pub fn total_turns(&self) -> u64 {
        self.turns.len() as u64
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TurnMoves> {
        self.turns.iter()
    }

    pub fn turns(&self) -> &[TurnMoves] {
        &self.turns
    }

    /// Moves of `turn`, or `None` if it was not recorded.
    pub fn get(&self, turn: Turn) -> Option<&TurnMoves> {
        let idx = turn.0.checked_sub(1)?;
        self.turns.get(idx as usize)
    }

    /// Every move made by `token`, in turn order.
    pub fn moves_of(&self, token: TokenId) -> Vec<(Turn, Move)> {
        self.turns
            .iter()
            .flat_map(|t| {
                t.moves
                    .iter()
                    .filter(move |m| m.token == token)
                    .map(move |m| (t.turn, *m))
            })
            .collect()
    }

    /// Turn on which each token reached the end room, in arrival order.
    pub fn arrivals(&self) -> Vec<(Turn, TokenId)> {
        self.turns
            .iter()
            .flat_map(|t| {
                t.moves
                    .iter()
                    .filter(|m| m.arrived)
                    .map(move |m| (t.turn, m.token))
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a TurnTrace {
    type Item = &'a TurnMoves;
    type IntoIter = std::slice::Iter<'a, TurnMoves>;

    fn into_iter(self) -> Self::IntoIter {
        self.turns.iter()
    }
}
