//! Per-route token state.

use lem_core::{RouteId, TokenId};
use lem_graph::Route;

use crate::trace::Move;

/// The tokens assigned to one route and where each of them is.
///
/// Positions index into `route.nodes`.  A token at index 0 is still waiting
/// in the start room; a token at `route.last_index()` has arrived and never
/// moves again.  Interior indices hold at most one token.
///
/// Tokens are stored in id order.  On a route with interior rooms the
/// highest waiting id enters first, so positions are non-decreasing along
/// `tokens` and the last token leads.  A direct route admits the lowest
/// waiting id first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteLane {
    pub route_id:  RouteId,
    pub route:     Route,
    pub tokens:    Vec<TokenId>,
    pub positions: Vec<usize>,

    /// `occupied[i]` for interior index `i`.  Start and end are never marked.
    occupied: Vec<bool>,
}

impl RouteLane {
    /// A lane carrying `count` tokens numbered from `first_token` upward, all
    /// waiting in the start room.
    pub fn new(route_id: RouteId, route: Route, first_token: TokenId, count: u32) -> Self {
        let tokens = (0..count).map(|k| TokenId(first_token.0 + k)).collect();
        let occupied = vec![false; route.len()];
        Self {
            route_id,
            tokens,
            positions: vec![0; count as usize],
            occupied,
            route,
        }
    }

    /// Number of tokens assigned to this lane.
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Tokens still in the start room.
    pub fn waiting(&self) -> usize {
        self.positions.iter().filter(|&&p| p == 0).count()
    }

    /// Tokens that have reached the end room.
    pub fn arrived(&self) -> usize {
        let last = self.route.last_index();
        self.positions.iter().filter(|&&p| p == last).count()
    }

    /// `true` once every token is in the end room.
    pub fn is_finished(&self) -> bool {
        self.arrived() == self.tokens.len()
    }

    /// Current position of `token`, if it belongs to this lane.
    pub fn position_of(&self, token: TokenId) -> Option<usize> {
        let j = self.tokens.iter().position(|&t| t == token)?;
        Some(self.positions[j])
    }

    /// Tokens currently at route index `index`.
    pub fn tokens_at(&self, index: usize) -> impl Iterator<Item = TokenId> + '_ {
        self.tokens
            .iter()
            .zip(&self.positions)
            .filter(move |&(_, &p)| p == index)
            .map(|(&t, _)| t)
    }

    /// Advance every token that can move this turn, appending the moves to
    /// `out`.  Returns the number of tokens that moved.
    pub fn advance(&mut self, out: &mut Vec<Move>) -> usize {
        let before = out.len();
        let last = self.route.last_index();

        if self.route.is_direct() {
            // Start-room throughput: one entrant per turn.
            if let Some(j) = self.positions.iter().position(|&p| p == 0) {
                self.positions[j] = last;
                out.push(self.record(j));
            }
            return out.len() - before;
        }

        // Leaders first: walking ids downward visits tokens nearest the end
        // first, so a follower may step into a room its leader just left.
        for j in (0..self.positions.len()).rev() {
            let from = self.positions[j];
            if from == last {
                continue;
            }
            let to = from + 1;
            if to != last && self.occupied[to] {
                continue;
            }
            self.occupied[from] = false;
            if to != last {
                self.occupied[to] = true;
            }
            self.positions[j] = to;
            out.push(self.record(j));
        }

        out.len() - before
    }

    fn record(&self, j: usize) -> Move {
        let position = self.positions[j];
        Move {
            token:    self.tokens[j],
            route:    self.route_id,
            to:       self.route.nodes[position],
            position,
            arrived:  position == self.route.last_index(),
        }
    }
}
