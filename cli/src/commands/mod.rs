pub mod dot;
pub mod scenario;
pub mod solve;

pub use dot::{handle_dot, DotArgs};
pub use solve::{handle_solve, OutputFormat, SolveArgs};

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "triroute")]
#[command(about = "Multi-criteria shortest-route analysis over time/cost/risk weighted graphs")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Logging verbosity (`trace`, `debug`, `info`, `warn`, `error`)
    #[arg(short, long, default_value = "info")]
    pub verbosity: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Solve all-pairs shortest routes for a scenario file
    Solve(SolveArgs),
    /// Render the combined graph as Graphviz DOT
    Dot(DotArgs),
}
