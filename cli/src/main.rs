mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{handle_dot, handle_solve, Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&cli.verbosity).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Solve(args) => handle_solve(args)?,
        Commands::Dot(args) => handle_dot(args)?,
    }

    Ok(())
}
