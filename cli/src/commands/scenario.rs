//! Scenario file loading
//!
//! A scenario bundles the three criterion matrices, optional node labels and
//! optional weights. Matrices are nested rows where `null` means "no direct
//! edge". JSON and YAML are both accepted, dispatched on file extension.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use triroute_core::{CriterionSet, RawWeights, SquareMatrix};

#[derive(Debug, Deserialize)]
pub struct Scenario {
    /// Display labels, one per node, unique
    #[serde(default)]
    pub labels: Option<Vec<String>>,

    pub time: Vec<Vec<Option<f64>>>,
    pub cost: Vec<Vec<Option<f64>>>,
    pub risk: Vec<Vec<Option<f64>>>,

    /// Criterion weights; equal thirds when omitted
    #[serde(default)]
    pub weights: RawWeights,
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read scenario file {}", path.display()))?;

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let scenario = match extension {
            "json" => serde_json::from_str(&content)
                .with_context(|| format!("failed to parse JSON scenario {}", path.display()))?,
            "yml" | "yaml" => serde_yaml::from_str(&content)
                .with_context(|| format!("failed to parse YAML scenario {}", path.display()))?,
            other => bail!(
                "unsupported scenario format '{other}' for {} (expected .json, .yml or .yaml)",
                path.display()
            ),
        };

        Ok(scenario)
    }

    /// Validates the matrices and labels into a [`CriterionSet`].
    pub fn into_criteria(self) -> Result<(CriterionSet, RawWeights)> {
        let time = SquareMatrix::from_rows("time", &self.time)?;
        let cost = SquareMatrix::from_rows("cost", &self.cost)?;
        let risk = SquareMatrix::from_rows("risk", &self.risk)?;
        let criteria = CriterionSet::new(time, cost, risk, self.labels)?;
        Ok((criteria, self.weights))
    }
}
