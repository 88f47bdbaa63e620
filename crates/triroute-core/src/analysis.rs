//! One-run orchestration of the full routing pipeline
//!
//! An [`Analysis`] owns private copies of everything a single computation run
//! needs, so independent runs (say, re-running with different weights) can
//! execute in parallel without coordination.

use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

use crate::combine::combine;
use crate::engine::RouteTable;
use crate::error::Result;
use crate::matrix::{CriterionSet, SquareMatrix};
use crate::metrics::PathTotals;
use crate::weights::{RawWeights, Weights};

/// A completed computation run: normalized weights, combined matrix, and the
/// solved route table, ready for per-pair queries.
#[derive(Debug, Clone)]
pub struct Analysis {
    criteria: CriterionSet,
    weights: Weights,
    combined: SquareMatrix,
    table: RouteTable,
}

/// Result for one ordered node pair.
#[derive(Debug, Clone, Serialize)]
pub struct PairReport {
    pub from: usize,
    pub to: usize,
    pub from_name: String,
    pub to_name: String,
    #[serde(flatten)]
    pub outcome: RouteOutcome,
}

/// Either a materialized route with its totals, or an explicit no-route
/// marker. Unreachability is a first-class result, never an error.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RouteOutcome {
    Reachable {
        distance: f64,
        path: Vec<usize>,
        totals: PathTotals,
    },
    Unreachable,
}

impl Analysis {
    /// Runs the whole pipeline: normalize → combine → solve.
    ///
    /// Input errors surface here, once, before any result is produced.
    pub fn run(criteria: CriterionSet, raw_weights: RawWeights) -> Result<Self> {
        let weights = raw_weights.normalize()?;
        let combined = combine(&criteria, &weights);
        let table = RouteTable::solve(combined.clone());

        info!(nodes = criteria.dim(), "route analysis complete");
        Ok(Self { criteria, weights, combined, table })
    }

    pub fn dim(&self) -> usize {
        self.criteria.dim()
    }

    pub fn criteria(&self) -> &CriterionSet {
        &self.criteria
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    pub fn combined(&self) -> &SquareMatrix {
        &self.combined
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Report for a single ordered pair, reconstructed on demand.
    pub fn pair_report(&self, from: usize, to: usize) -> PairReport {
        let outcome = match self.table.path(from, to) {
            Some(path) => RouteOutcome::Reachable {
                // path exists, so the distance does too
                distance: self.table.distance(from, to).unwrap_or(0.0),
                totals: PathTotals::along(&path, &self.criteria, &self.weights),
                path,
            },
            None => RouteOutcome::Unreachable,
        };

        PairReport {
            from,
            to,
            from_name: self.criteria.node_name(from),
            to_name: self.criteria.node_name(to),
            outcome,
        }
    }

    /// Reports for every ordered pair with i ≠ j.
    ///
    /// Reconstruction and aggregation share no mutable state across pairs, so
    /// the fan-out runs on the rayon pool.
    pub fn pair_reports(&self) -> Vec<PairReport> {
        let dim = self.dim();
        (0..dim)
            .into_par_iter()
            .flat_map_iter(|from| {
                (0..dim)
                    .filter(move |&to| to != from)
                    .map(move |to| self.pair_report(from, to))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::SquareMatrix;

    fn matrix(rows: &[&[Option<f64>]]) -> SquareMatrix {
        let rows: Vec<Vec<Option<f64>>> = rows.iter().map(|r| r.to_vec()).collect();
        SquareMatrix::from_rows("test", &rows).unwrap()
    }

    /// Directed ring 0→1→2→0, identical shape on all criteria.
    fn ring() -> CriterionSet {
        let shape = |a: f64| {
            matrix(&[
                &[Some(0.0), Some(a), None],
                &[None, Some(0.0), Some(a)],
                &[Some(a), None, Some(0.0)],
            ])
        };
        CriterionSet::new(
            shape(1.0),
            shape(2.0),
            shape(1.0),
            Some(vec!["a".into(), "b".into(), "c".into()]),
        )
        .unwrap()
    }

    #[test]
    fn test_run_produces_reports_for_all_ordered_pairs() {
        let analysis = Analysis::run(ring(), RawWeights::new(1.0, 0.0, 0.0)).unwrap();
        let reports = analysis.pair_reports();
        assert_eq!(reports.len(), 6);
        assert!(reports
            .iter()
            .all(|r| matches!(r.outcome, RouteOutcome::Reachable { .. })));
    }

    #[test]
    fn test_pair_report_carries_labels() {
        let analysis = Analysis::run(ring(), RawWeights::default()).unwrap();
        let report = analysis.pair_report(0, 2);
        assert_eq!(report.from_name, "a");
        assert_eq!(report.to_name, "c");
    }

    #[test]
    fn test_invalid_weights_abort_before_any_result() {
        let err = Analysis::run(ring(), RawWeights::new(0.0, 0.0, 0.0));
        assert!(err.is_err());
    }

    #[test]
    fn test_weighted_score_matches_engine_distance() {
        let analysis = Analysis::run(ring(), RawWeights::new(2.0, 1.0, 1.0)).unwrap();
        for report in analysis.pair_reports() {
            let RouteOutcome::Reachable { distance, totals, .. } = report.outcome else {
                panic!("ring is fully connected");
            };
            assert!((totals.score - distance).abs() < 1e-9);
        }
    }
}
