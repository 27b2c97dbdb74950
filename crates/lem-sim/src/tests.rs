//! Tests for lem-sim.

use std::collections::HashMap;

use lem_core::{NodeId, RouteId, RunConfig, TokenId, Turn};
use lem_graph::{Graph, GraphBuilder, Node, Route};
use lem_schedule::Allocation;

use crate::{Move, NoopObserver, RouteLane, Sim, SimBuilder, SimObserver};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// A route over placeholder rooms `0..rooms`.
fn route(rooms: u32) -> Route {
    Route::new((0..rooms).map(NodeId).collect())
}

fn sim(routes: Vec<Route>, counts: Vec<u32>) -> Sim {
    let tokens = counts.iter().sum();
    SimBuilder::new(RunConfig::new(tokens), routes)
        .allocation(Allocation::from_counts(counts))
        .build()
        .unwrap()
}

/// Colony graph from names and tunnels; first room is start, last is end.
fn colony(rooms: &[&str], tunnels: &[(&str, &str)]) -> Graph {
    let mut b = GraphBuilder::new();
    let last = rooms.len() - 1;
    for (i, &name) in rooms.iter().enumerate() {
        b.add_node(match i {
            0 => Node::start(name, 0, i as i64),
            i if i == last => Node::end(name, 0, i as i64),
            _ => Node::new(name, 0, i as i64),
        });
    }
    for &(a, c) in tunnels {
        b.add_tunnel(a, c);
    }
    b.build().unwrap()
}

/// Compact `(token, position)` view of one turn.
fn moved(moves: &[Move]) -> Vec<(u32, usize)> {
    moves.iter().map(|m| (m.token.0, m.position)).collect()
}

/// Counts callbacks.
#[derive(Default)]
struct Counter {
    turns: u64,
    moves: usize,
    ended: Option<Turn>,
}

impl SimObserver for Counter {
    fn on_turn_end(&mut self, _turn: Turn, moves: &[Move], _lanes: &[RouteLane]) {
        self.turns += 1;
        self.moves += moves.len();
    }

    fn on_sim_end(&mut self, final_turn: Turn) {
        self.ended = Some(final_turn);
    }
}

/// Asserts occupancy and monotonic advancement after every turn.
#[derive(Default)]
struct Checker {
    last_pos: HashMap<TokenId, usize>,
    violations: Vec<String>,
}

impl SimObserver for Checker {
    fn on_turn_end(&mut self, turn: Turn, moves: &[Move], lanes: &[RouteLane]) {
        for m in moves {
            let prev = self.last_pos.get(&m.token).copied().unwrap_or(0);
            if m.position != prev + 1 {
                self.violations.push(format!("{turn}: {} jumped {prev}->{}", m.token, m.position));
            }
            self.last_pos.insert(m.token, m.position);
        }
        for lane in lanes {
            let last = lane.route.last_index();
            let mut interior: Vec<usize> =
                lane.positions.iter().copied().filter(|&p| p > 0 && p < last).collect();
            let n = interior.len();
            interior.sort_unstable();
            interior.dedup();
            if interior.len() != n {
                self.violations.push(format!("{turn}: shared room on {}", lane.route_id));
            }
        }
    }
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;
    use crate::SimError;

    #[test]
    fn tokens_numbered_route_major() {
        let s = sim(vec![route(3), route(4), route(5)], vec![2, 0, 3]);
        assert_eq!(s.lanes[0].tokens, [TokenId(1), TokenId(2)]);
        assert!(s.lanes[1].tokens.is_empty());
        assert_eq!(s.lanes[2].tokens, [TokenId(3), TokenId(4), TokenId(5)]);
        assert!(s.lanes.iter().all(|l| l.waiting() == l.token_count()));
    }

    #[test]
    fn default_allocation_is_greedy() {
        let s = SimBuilder::new(RunConfig::new(4), vec![route(4), route(6)])
            .build()
            .unwrap();
        assert_eq!(s.lanes[0].token_count(), 3);
        assert_eq!(s.lanes[1].token_count(), 1);
    }

    #[test]
    fn route_count_mismatch_errors() {
        let result = SimBuilder::new(RunConfig::new(2), vec![route(3), route(3)])
            .allocation(Allocation::from_counts(vec![2]))
            .build();
        assert!(matches!(result, Err(SimError::RouteCountMismatch { expected: 2, got: 1 })));
    }

    #[test]
    fn token_count_mismatch_errors() {
        let result = SimBuilder::new(RunConfig::new(5), vec![route(3)])
            .allocation(Allocation::from_counts(vec![4]))
            .build();
        assert!(matches!(result, Err(SimError::TokenCountMismatch { expected: 5, got: 4 })));
    }

    #[test]
    fn degenerate_route_errors() {
        let result = SimBuilder::new(RunConfig::new(1), vec![route(3), route(1)])
            .allocation(Allocation::from_counts(vec![1, 0]))
            .build();
        assert!(matches!(result, Err(SimError::DegenerateRoute(RouteId(1)))));
    }

    #[test]
    fn invalid_config_errors() {
        let result = SimBuilder::new(RunConfig::new(1).with_turn_limit(0), vec![route(3)]).build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }
}

// ── Turn loop ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;
    use crate::SimError;

    #[test]
    fn single_route_wave() {
        // start - 2 - 3 - end, four tokens: (L-1)+(N-1) = 6 turns.
        let mut s = sim(vec![route(4)], vec![4]);
        s.run(&mut NoopObserver).unwrap();
        assert_eq!(s.total_turns(), 6);

        let turns: Vec<_> = s.trace().iter().map(|t| moved(&t.moves)).collect();
        assert_eq!(turns, vec![
            vec![(4, 1)],
            vec![(4, 2), (3, 1)],
            vec![(4, 3), (3, 2), (2, 1)],
            vec![(3, 3), (2, 2), (1, 1)],
            vec![(2, 3), (1, 2)],
            vec![(1, 3)],
        ]);
        assert!(s.all_arrived());
        assert!(s.is_finished());
    }

    #[test]
    fn direct_route_admits_one_per_turn() {
        let mut s = sim(vec![route(2)], vec![3]);
        s.run(&mut NoopObserver).unwrap();
        assert_eq!(s.total_turns(), 3);
        for (i, t) in s.trace().iter().enumerate() {
            assert_eq!(moved(&t.moves), [(i as u32 + 1, 1)]);
            assert!(t.moves[0].arrived);
            assert_eq!(t.moves[0].to, NodeId(1));
        }
    }

    #[test]
    fn highest_waiting_token_enters_first() {
        let mut s = sim(vec![route(3)], vec![2]);
        s.run(&mut NoopObserver).unwrap();
        let turns: Vec<_> = s.trace().iter().map(|t| moved(&t.moves)).collect();
        assert_eq!(turns, vec![vec![(2, 1)], vec![(2, 2), (1, 1)], vec![(1, 2)]]);
    }

    #[test]
    fn direct_and_longer_routes_admit_opposite_ends() {
        // Direct lane holds tokens 1-2, the longer lane 3-4.
        let mut s = sim(vec![route(2), route(3)], vec![2, 2]);
        s.step(&mut NoopObserver);
        let first = &s.trace().get(Turn(1)).unwrap().moves;
        assert_eq!(moved(first), [(1, 1), (4, 1)]);
    }

    #[test]
    fn lanes_advance_independently() {
        // Lengths 3 and 4 with [3, 2]: both finish on turn 4.
        let mut s = sim(vec![route(3), route(4)], vec![3, 2]);
        s.run(&mut NoopObserver).unwrap();
        assert_eq!(s.total_turns(), 4);
        let first = &s.trace().get(Turn(1)).unwrap().moves;
        assert_eq!(moved(first), [(3, 1), (5, 1)]);
        assert_eq!(first[1].route, RouteId(1));
    }

    #[test]
    fn tie_break_example_finishes_in_five() {
        let mut s = SimBuilder::new(RunConfig::new(3), vec![route(4), route(6)])
            .build()
            .unwrap();
        s.run(&mut NoopObserver).unwrap();
        assert_eq!(s.total_turns(), 5);
    }

    #[test]
    fn zero_tokens_zero_turns() {
        let mut s = sim(vec![route(4)], vec![0]);
        let mut obs = Counter::default();
        s.run(&mut obs).unwrap();
        assert_eq!(s.total_turns(), 0);
        assert!(s.trace().is_empty());
        assert_eq!(obs.ended, Some(Turn::ZERO));
    }

    #[test]
    fn turn_limit_exceeded() {
        let mut s = SimBuilder::new(RunConfig::new(4).with_turn_limit(3), vec![route(4)])
            .build()
            .unwrap();
        let err = s.run(&mut NoopObserver).unwrap_err();
        assert!(matches!(err, SimError::TurnLimitExceeded { limit: 3 }));
        assert_eq!(s.total_turns(), 3);
    }

    #[test]
    fn turn_limit_equal_to_makespan_succeeds() {
        let mut s = SimBuilder::new(RunConfig::new(4).with_turn_limit(6), vec![route(4)])
            .build()
            .unwrap();
        s.run(&mut NoopObserver).unwrap();
        assert_eq!(s.total_turns(), 6);
    }

    #[test]
    fn incremental_stepping() {
        let mut s = sim(vec![route(4)], vec![4]);
        assert_eq!(s.run_turns(2, &mut NoopObserver), 2);
        assert_eq!(s.lanes[0].positions, [0, 0, 1, 2]);
        assert_eq!(s.lanes[0].position_of(TokenId(3)), Some(1));
        assert_eq!(s.lanes[0].tokens_at(0).collect::<Vec<_>>(), [TokenId(1), TokenId(2)]);
        assert_eq!(s.run_turns(10, &mut NoopObserver), 4);
        assert_eq!(s.step(&mut NoopObserver), None);
        assert_eq!(s.total_turns(), 6);
    }

    #[test]
    fn unrecorded_trace_still_observed() {
        let mut s = SimBuilder::new(RunConfig::new(4).without_trace(), vec![route(4)])
            .build()
            .unwrap();
        let mut obs = Counter::default();
        s.run(&mut obs).unwrap();
        assert!(s.trace().is_empty());
        assert_eq!(s.total_turns(), 6);
        assert_eq!(obs.turns, 6);
        assert_eq!(obs.moves, 12);
        assert_eq!(obs.ended, Some(Turn(6)));
    }

    #[test]
    fn arrivals_and_token_history() {
        let mut s = sim(vec![route(4)], vec![4]);
        s.run(&mut NoopObserver).unwrap();
        let trace = s.into_trace();
        assert_eq!(trace.arrivals(), vec![
            (Turn(3), TokenId(4)),
            (Turn(4), TokenId(3)),
            (Turn(5), TokenId(2)),
            (Turn(6), TokenId(1)),
        ]);
        let history: Vec<_> = trace
            .moves_of(TokenId(2))
            .into_iter()
            .map(|(t, m)| (t.0, m.position))
            .collect();
        assert_eq!(history, [(3, 1), (4, 2), (5, 3)]);
        assert!(trace.get(Turn(0)).is_none());
        assert!(trace.get(Turn(7)).is_none());
    }

    #[test]
    fn observer_pair_fans_out() {
        let mut s = sim(vec![route(3)], vec![2]);
        let mut pair = (Counter::default(), Counter::default());
        s.run(&mut pair).unwrap();
        assert_eq!(pair.0.turns, 3);
        assert_eq!(pair.1.turns, 3);
        assert_eq!(pair.1.ended, Some(Turn(3)));
    }
}

// ── Pipeline ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod pipeline_tests {
    use lem_graph::{Endpoint, GraphError};

    use super::*;
    use crate::{SimError, solve};

    #[test]
    fn chain_colony() {
        let g = colony(
            &["start", "2", "3", "end"],
            &[("start", "2"), ("2", "3"), ("3", "end")],
        );
        let solution = solve(&g, &RunConfig::new(4), &mut NoopObserver).unwrap();
        assert_eq!(solution.routes.len(), 1);
        assert_eq!(solution.allocation.counts(), &[4]);
        assert_eq!(solution.total_turns, 6);
        assert_eq!(solution.trace.total_turns(), 6);
        assert_eq!(g.name(solution.start), "start");
        assert_eq!(g.name(solution.end), "end");
    }

    #[test]
    fn two_branch_colony() {
        let g = colony(
            &["s", "a", "b", "c", "e"],
            &[("s", "a"), ("a", "e"), ("s", "b"), ("b", "c"), ("c", "e")],
        );
        let mut checker = Checker::default();
        let solution = solve(&g, &RunConfig::new(5), &mut checker).unwrap();
        assert_eq!(solution.routes.len(), 2);
        assert_eq!(solution.allocation.counts(), &[3, 2]);
        assert_eq!(solution.total_turns, 4);
        assert!(checker.violations.is_empty(), "{:?}", checker.violations);

        let last_turn = solution.trace.get(Turn(4)).unwrap();
        assert!(last_turn.moves.iter().all(|m| m.to == solution.end));
    }

    #[test]
    fn disconnected_colony_halts_before_scheduling() {
        let g = colony(&["s", "a", "b", "e"], &[("s", "a"), ("b", "e")]);
        let err = solve(&g, &RunConfig::new(3), &mut NoopObserver).unwrap_err();
        assert!(matches!(err, SimError::Graph(GraphError::NoRouteFound { .. })));
    }

    #[test]
    fn missing_start_surfaces() {
        let g = Graph::build(vec![Node::new("a", 0, 0), Node::end("e", 1, 0)], &[]).unwrap();
        let err = solve(&g, &RunConfig::new(1), &mut NoopObserver).unwrap_err();
        assert!(matches!(err, SimError::Graph(GraphError::MissingEndpoint(Endpoint::Start))));
    }
}

// ── Properties ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod props {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn single_route_makespan(rooms in 2u32..12, tokens in 1u32..40) {
            let mut s = sim(vec![route(rooms)], vec![tokens]);
            s.run(&mut NoopObserver).unwrap();
            prop_assert_eq!(s.total_turns(), (rooms as u64 - 1) + (tokens as u64 - 1));
        }

        #[test]
        fn invariants_hold_on_every_turn(
            lanes in prop::collection::vec((2u32..9, 0u32..15), 1..6),
        ) {
            let routes: Vec<_> = lanes.iter().map(|&(r, _)| route(r)).collect();
            let counts: Vec<_> = lanes.iter().map(|&(_, c)| c).collect();
            let allocation = Allocation::from_counts(counts.clone());
            let predicted = allocation.predicted_turns(&routes);

            let mut s = sim(routes, counts);
            let bound = s.turn_bound();
            let mut checker = Checker::default();
            s.run(&mut checker).unwrap();

            prop_assert!(checker.violations.is_empty(), "{:?}", checker.violations);
            prop_assert!(s.total_turns() <= bound);
            prop_assert_eq!(s.total_turns(), predicted);
            prop_assert!(s.all_arrived());
            prop_assert_eq!(s.trace().arrivals().len() as u64, allocation.total());
        }
    }
}
