//! symsolve CLI - exact solving and enumeration of small grid games
//!
//! This CLI provides a unified interface for:
//! - Solving positions by memoized negamax
//! - Building canonical state graphs and tallying outcomes
//! - Enumerating every distinct canonical line of play
//! - Inspecting symmetry groups, orbits and move classes

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use symsolve::cli::commands::{graph, solve, struggles, symmetry};

#[derive(Parser)]
#[command(name = "symsolve")]
#[command(version, about = "Symmetry-reduced exact solving of square-grid games", long_about = None)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a position and list the value of each canonical move
    Solve(solve::SolveArgs),

    /// Build the canonical state graph and tally terminal outcomes
    Graph(graph::GraphArgs),

    /// Enumerate every canonical move sequence to a finished game
    Struggles(struggles::StrugglesArgs),

    /// Inspect the symmetry group, orbit and move classes of a position
    Symmetry(symmetry::SymmetryArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Solve(args) => solve::execute(args),
        Commands::Graph(args) => graph::execute(args),
        Commands::Struggles(args) => struggles::execute(args),
        Commands::Symmetry(args) => symmetry::execute(args),
    }
}
