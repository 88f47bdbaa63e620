use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use triroute_core::{combine, combined_to_dot};

use super::scenario::Scenario;

#[derive(Parser)]
pub struct DotArgs {
    /// Scenario file (.json, .yml or .yaml)
    pub input: PathBuf,

    /// Write the DOT output here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn handle_dot(args: DotArgs) -> Result<()> {
    let scenario = Scenario::load(&args.input)?;
    let (criteria, raw_weights) = scenario.into_criteria()?;
    let weights = raw_weights.normalize()?;

    let combined = combine(&criteria, &weights);
    let dot = combined_to_dot(&combined, criteria.labels());

    match args.output {
        Some(path) => {
            std::fs::write(&path, &dot)
                .with_context(|| format!("failed to write DOT file {}", path.display()))?;
            debug!("graph written to {}", path.display());
        }
        None => print!("{dot}"),
    }

    Ok(())
}
