//! synthetic: route ants across a seeded random layered colony.
//!
//! Useful for eyeballing how route discovery and scheduling scale.  The
//! trace is not kept; turn statistics are collected by an observer instead.
//!
//! ```bash
//! synthetic --layers 40 --width 16 --ants 10000 --seed 7
//! ```

mod colony;

use std::time::Instant;

use anyhow::{Result, ensure};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lem_core::{RunConfig, Turn};
use lem_sim::{Move, RouteLane, SimObserver, solve};

use colony::{Shape, build_colony};

/// Random layered colony benchmark
#[derive(Parser, Debug)]
#[command(name = "synthetic")]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of room layers between start and end
    #[arg(short = 'l', long, default_value = "20")]
    layers: usize,

    /// Rooms per layer
    #[arg(short = 'w', long, default_value = "8")]
    width: usize,

    /// Number of ants
    #[arg(short = 'a', long, default_value = "1000")]
    ants: u32,

    /// Probability of dropping a straight link (0.0-1.0)
    #[arg(long, default_value = "0.2")]
    cut: f64,

    /// Probability of adding a cross link (0.0-1.0)
    #[arg(long, default_value = "0.3")]
    cross: f64,

    /// Random seed.  When omitted, a random seed is used.
    #[arg(long)]
    seed: Option<u64>,
}

// ── Statistics observer ───────────────────────────────────────────────────────

#[derive(Default)]
struct TurnStats {
    moves:       u64,
    peak_moves:  usize,
    peak_flight: usize,
}

impl SimObserver for TurnStats {
    fn on_turn_end(&mut self, _turn: Turn, moves: &[Move], lanes: &[RouteLane]) {
        self.moves += moves.len() as u64;
        self.peak_moves = self.peak_moves.max(moves.len());
        let in_flight: usize = lanes
            .iter()
            .map(|l| l.token_count() - l.waiting() - l.arrived())
            .sum();
        self.peak_flight = self.peak_flight.max(in_flight);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,synthetic=info,lem_sim=info")),
        )
        .init();

    let args = Args::parse();
    ensure!(args.width > 0, "width must be at least 1");
    ensure!((0.0..=1.0).contains(&args.cut), "cut must be within 0.0-1.0");
    ensure!((0.0..=1.0).contains(&args.cross), "cross must be within 0.0-1.0");

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(layers = args.layers, width = args.width, ants = args.ants, seed, "building colony");

    // 1. Colony.
    let mut rng = SmallRng::seed_from_u64(seed);
    let shape = Shape { layers: args.layers, width: args.width, cut: args.cut, cross: args.cross };
    let graph = build_colony(&shape, &mut rng)?;
    println!("Colony: {} rooms, {} tunnels", graph.node_count(), graph.edge_count());

    // 2. Solve.
    let config = RunConfig::new(args.ants).without_trace();
    let mut stats = TurnStats::default();
    let t0 = Instant::now();
    let solution = solve(&graph, &config, &mut stats)?;
    let elapsed = t0.elapsed();

    // 3. Summary.
    let predicted = solution.allocation.predicted_turns(&solution.routes);
    println!("Solved in {:.3} s", elapsed.as_secs_f64());
    println!("  routes          : {}", solution.routes.len());
    println!("  turns           : {} (predicted {predicted})", solution.total_turns);
    println!("  moves           : {}", stats.moves);
    println!("  peak moves/turn : {}", stats.peak_moves);
    println!("  peak in flight  : {}", stats.peak_flight);
    println!();

    println!("{:<6} {:<8} {:<8}", "Route", "Rooms", "Ants");
    println!("{}", "-".repeat(22));
    for (id, count) in solution.allocation.iter() {
        println!("{:<6} {:<8} {:<8}", id.0, solution.routes[id.index()].len(), count);
    }

    Ok(())
}
