//! lem-in: route a colony of ants from `##start` to `##end`.
//!
//! Reads a colony file, prints it back, then prints one line of moves per
//! turn.  Optional flags write a full report, CSV or SQLite move logs, and a
//! JSON dump of the solution.
//!
//! # Example
//!
//! ```bash
//! lem-in maps/example00.txt
//! lem-in maps/example00.txt --numbered --report output/report.txt
//! RUST_LOG=lem_sim=debug lem-in maps/big.txt --quiet --csv output/big
//! ```

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use lem_core::{RunConfig, Turn};
use lem_graph::load_colony_path;
use lem_output::{CsvWriter, Report, ReportObserver, SimOutputObserver, TextWriter};
use lem_sim::{Move, RouteLane, SimObserver, solve};

/// lem-in
///
/// Finds interior-disjoint routes, spreads the ants over them, and prints
/// the moves turn by turn.
#[derive(Parser, Debug)]
#[command(name = "lem-in")]
#[command(version, about, long_about = None)]
struct Args {
    /// Colony file
    input: PathBuf,

    /// Prefix each move line with `Turn <n>: `
    #[arg(long)]
    numbered: bool,

    /// Do not echo the colony before the moves
    #[arg(long)]
    no_echo: bool,

    /// Print nothing to stdout
    #[arg(short, long)]
    quiet: bool,

    /// Fail if the ants need more than this many turns
    #[arg(long)]
    turn_limit: Option<u64>,

    /// Write a full report (routes, per-turn grids) to this file
    #[arg(long)]
    report: Option<PathBuf>,

    /// Write moves.csv and turn_summaries.csv into this directory
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write output.db into this directory
    #[cfg(feature = "sqlite")]
    #[arg(long)]
    sqlite: Option<PathBuf>,

    /// Write the solution as JSON to this file
    #[arg(long)]
    json: Option<PathBuf>,
}

// ── Observer fan-out ──────────────────────────────────────────────────────────

/// Forwards to whichever outputs were requested on the command line.
#[derive(Default)]
struct Outputs<'g> {
    report: Option<ReportObserver<'g>>,
    csv:    Option<SimOutputObserver<'g, CsvWriter>>,
    #[cfg(feature = "sqlite")]
    sqlite: Option<SimOutputObserver<'g, lem_output::SqliteWriter>>,
}

impl Outputs<'_> {
    fn report_errors(&mut self) {
        #[cfg(feature = "sqlite")]
        if let Some(e) = self.sqlite.as_mut().and_then(SimOutputObserver::take_error) {
            warn!(error = %e, "sqlite output failed");
        }
        if let Some(e) = self.csv.as_mut().and_then(SimOutputObserver::take_error) {
            warn!(error = %e, "csv output failed");
        }
    }
}

impl SimObserver for Outputs<'_> {
    fn on_turn_end(&mut self, turn: Turn, moves: &[Move], lanes: &[RouteLane]) {
        #[cfg(feature = "sqlite")]
        if let Some(o) = &mut self.sqlite {
            o.on_turn_end(turn, moves, lanes);
        }
        if let Some(o) = &mut self.report {
            o.on_turn_end(turn, moves, lanes);
        }
        if let Some(o) = &mut self.csv {
            o.on_turn_end(turn, moves, lanes);
        }
    }

    fn on_sim_end(&mut self, final_turn: Turn) {
        #[cfg(feature = "sqlite")]
        if let Some(o) = &mut self.sqlite {
            o.on_sim_end(final_turn);
        }
        if let Some(o) = &mut self.csv {
            o.on_sim_end(final_turn);
        }
    }
}

fn output_dir(dir: &Path) -> Result<&Path> {
    std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    Ok(dir)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the move lines.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,lem_sim=info")),
        )
        .init();

    let args = Args::parse();

    // 1. Load and build the colony.
    let colony = load_colony_path(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let graph = colony.build_graph()?;
    info!(
        ants = colony.token_count,
        rooms = graph.node_count(),
        tunnels = graph.edge_count(),
        "colony loaded"
    );

    let mut config = RunConfig::new(colony.token_count);
    if let Some(limit) = args.turn_limit {
        config = config.with_turn_limit(limit);
    }

    // 2. Attach the requested outputs.
    let mut outputs = Outputs::default();
    if args.report.is_some() {
        outputs.report = Some(ReportObserver::new(&graph));
    }
    if let Some(dir) = &args.csv {
        outputs.csv = Some(SimOutputObserver::new(CsvWriter::new(output_dir(dir)?)?, &graph));
    }
    #[cfg(feature = "sqlite")]
    if let Some(dir) = &args.sqlite {
        let writer = lem_output::SqliteWriter::new(output_dir(dir)?)?;
        outputs.sqlite = Some(SimOutputObserver::new(writer, &graph));
    }

    // 3. Solve.
    let solution = solve(&graph, &config, &mut outputs)?;
    outputs.report_errors();

    // 4. Print.
    if !args.quiet {
        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        if !args.no_echo {
            writeln!(out, "{colony}")?;
        }
        let mut text = TextWriter::new(out);
        if args.numbered {
            text = text.numbered();
        }
        text.write_trace(&graph, &solution.trace)?;
    }

    // 5. Files.
    if let Some(path) = &args.report {
        let grids = outputs.report.take().map(ReportObserver::into_grids).unwrap_or_default();
        Report::new(&colony, &graph, &solution, grids).write_to(path)?;
        info!(path = %path.display(), "report written");
    }
    if let Some(path) = &args.json {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        let mut w = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut w, &solution)?;
        w.flush()?;
        info!(path = %path.display(), "solution written");
    }

    Ok(())
}
