use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing::info;
use triroute_core::{Analysis, CriterionSet, PairReport, RouteOutcome, Weights};

use super::scenario::Scenario;

#[derive(Parser)]
pub struct SolveArgs {
    /// Scenario file (.json, .yml or .yaml)
    pub input: PathBuf,

    /// Override the scenario's time weight
    #[arg(long)]
    pub time_weight: Option<f64>,

    /// Override the scenario's cost weight
    #[arg(long)]
    pub cost_weight: Option<f64>,

    /// Override the scenario's risk weight
    #[arg(long)]
    pub risk_weight: Option<f64>,

    /// Report a single origin node (label or index) instead of all pairs
    #[arg(long)]
    pub from: Option<String>,

    /// Report a single destination node (label or index) instead of all pairs
    #[arg(long)]
    pub to: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Refuse scenarios with more nodes than this (cubic runtime guard)
    #[arg(long, default_value_t = 40)]
    pub max_nodes: usize,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Full solve report as serialized in JSON mode.
#[derive(Serialize)]
struct SolveReport<'a> {
    weights: &'a Weights,
    labels: Option<&'a [String]>,
    combined: Vec<Vec<Option<f64>>>,
    distances: Vec<Vec<Option<f64>>>,
    pairs: Vec<PairReport>,
}

pub fn handle_solve(args: SolveArgs) -> Result<()> {
    let scenario = Scenario::load(&args.input)?;
    let (criteria, mut weights) = scenario.into_criteria()?;

    if criteria.dim() > args.max_nodes {
        bail!(
            "scenario has {} nodes, above the --max-nodes cap of {}",
            criteria.dim(),
            args.max_nodes
        );
    }

    if let Some(w) = args.time_weight {
        weights.time = w;
    }
    if let Some(w) = args.cost_weight {
        weights.cost = w;
    }
    if let Some(w) = args.risk_weight {
        weights.risk = w;
    }

    info!(nodes = criteria.dim(), "solving scenario {}", args.input.display());
    let analysis = Analysis::run(criteria, weights)?;

    let pairs = match (&args.from, &args.to) {
        (Some(from), Some(to)) => {
            let from = resolve_node(analysis.criteria(), from)?;
            let to = resolve_node(analysis.criteria(), to)?;
            vec![analysis.pair_report(from, to)]
        }
        (None, None) => analysis.pair_reports(),
        _ => bail!("--from and --to must be given together"),
    };

    match args.format {
        OutputFormat::Json => {
            let report = SolveReport {
                weights: analysis.weights(),
                labels: analysis.criteria().labels(),
                combined: analysis.combined().to_rows(),
                distances: analysis.table().distances().to_rows(),
                pairs,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Table => print_table(&analysis, &pairs),
    }

    Ok(())
}

/// Resolves a node reference given as a display label or a zero-based index.
fn resolve_node(criteria: &CriterionSet, reference: &str) -> Result<usize> {
    if let Some(labels) = criteria.labels() {
        if let Some(i) = labels.iter().position(|l| l == reference) {
            return Ok(i);
        }
    }
    let index: usize = reference
        .parse()
        .with_context(|| format!("unknown node '{reference}'"))?;
    if index >= criteria.dim() {
        bail!("node index {index} out of range (graph has {} nodes)", criteria.dim());
    }
    Ok(index)
}

fn print_table(analysis: &Analysis, pairs: &[PairReport]) {
    let weights = analysis.weights();
    println!(
        "weights: time={:.3} cost={:.3} risk={:.3}",
        weights.time(),
        weights.cost(),
        weights.risk()
    );

    let dim = analysis.dim();
    let names: Vec<String> = (0..dim).map(|i| analysis.criteria().node_name(i)).collect();
    let width = names.iter().map(String::len).max().unwrap_or(1).max(8);

    println!("\nshortest distances:");
    print!("{:>width$}", "");
    for name in &names {
        print!(" {name:>width$}");
    }
    println!();
    for (i, name) in names.iter().enumerate() {
        print!("{name:>width$}");
        for j in 0..dim {
            match analysis.table().distance(i, j) {
                Some(d) => print!(" {d:>width$.3}"),
                None => print!(" {:>width$}", "-"),
            }
        }
        println!();
    }

    println!("\nroutes:");
    for pair in pairs {
        match &pair.outcome {
            RouteOutcome::Reachable { distance, path, totals } => {
                let route = path
                    .iter()
                    .map(|&n| analysis.criteria().node_name(n))
                    .collect::<Vec<_>>()
                    .join(" -> ");
                println!(
                    "{} -> {}: score {:.3} (time {:.3}, cost {:.3}, risk {:.3}) via {}",
                    pair.from_name, pair.to_name, distance, totals.time, totals.cost, totals.risk, route
                );
            }
            RouteOutcome::Unreachable => {
                println!("{} -> {}: unreachable", pair.from_name, pair.to_name);
            }
        }
    }
}
