//! Per-route totals replayed over the original criterion matrices

use serde::Serialize;

use crate::matrix::CriterionSet;
use crate::weights::Weights;

/// Aggregate metrics for one reconstructed route: the weighted score plus the
/// raw per-criterion totals.
///
/// Recomputed fresh for each requested route; nothing is cached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PathTotals {
    /// Weighted score: Σ w_c · total_c, equal to the combined-matrix distance
    pub score: f64,
    /// Total travel time along the route
    pub time: f64,
    /// Total monetary cost along the route
    pub cost: f64,
    /// Total risk along the route
    pub risk: f64,
}

impl PathTotals {
    /// Replays a route over the original (uncombined) matrices.
    ///
    /// An edge may sit on a criterion with no entry when that criterion's
    /// weight is 0 — the edge was only admitted because the *combined* cost
    /// was finite. Such an entry contributes 0 to its criterion total instead
    /// of inflating it with the sentinel.
    pub fn along(path: &[usize], criteria: &CriterionSet, weights: &Weights) -> Self {
        let mut totals = Self { score: 0.0, time: 0.0, cost: 0.0, risk: 0.0 };

        for hop in path.windows(2) {
            let (from, to) = (hop[0], hop[1]);

            let time = finite_or_zero(criteria.time().get(from, to));
            let cost = finite_or_zero(criteria.cost().get(from, to));
            let risk = finite_or_zero(criteria.risk().get(from, to));

            totals.time += time;
            totals.cost += cost;
            totals.risk += risk;
            totals.score += weights.time() * time + weights.cost() * cost + weights.risk() * risk;
        }

        totals
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::SquareMatrix;
    use crate::weights::RawWeights;

    fn matrix(rows: &[&[Option<f64>]]) -> SquareMatrix {
        let rows: Vec<Vec<Option<f64>>> = rows.iter().map(|r| r.to_vec()).collect();
        SquareMatrix::from_rows("test", &rows).unwrap()
    }

    fn three_node_chain() -> CriterionSet {
        CriterionSet::new(
            matrix(&[
                &[Some(0.0), Some(1.0), None],
                &[None, Some(0.0), Some(2.0)],
                &[None, None, Some(0.0)],
            ]),
            matrix(&[
                &[Some(0.0), Some(4.0), None],
                &[None, Some(0.0), Some(6.0)],
                &[None, None, Some(0.0)],
            ]),
            matrix(&[
                &[Some(0.0), Some(0.5), None],
                &[None, Some(0.0), Some(1.5)],
                &[None, None, Some(0.0)],
            ]),
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_totals_sum_each_criterion() {
        let criteria = three_node_chain();
        let weights = RawWeights::new(0.5, 0.25, 0.25).normalize().unwrap();
        let totals = PathTotals::along(&[0, 1, 2], &criteria, &weights);

        assert_eq!(totals.time, 3.0);
        assert_eq!(totals.cost, 10.0);
        assert_eq!(totals.risk, 2.0);
        assert_eq!(totals.score, 0.5 * 3.0 + 0.25 * 10.0 + 0.25 * 2.0);
    }

    #[test]
    fn test_trivial_path_has_zero_totals() {
        let criteria = three_node_chain();
        let weights = RawWeights::default().normalize().unwrap();
        let totals = PathTotals::along(&[1], &criteria, &weights);
        assert_eq!(totals, PathTotals { score: 0.0, time: 0.0, cost: 0.0, risk: 0.0 });
    }

    #[test]
    fn test_missing_zero_weight_criterion_does_not_inflate() {
        // time has no 0→1 edge, but its weight is 0: the route exists via
        // cost alone and the time total must stay 0, not become the sentinel.
        let criteria = CriterionSet::new(
            matrix(&[&[Some(0.0), None], &[None, Some(0.0)]]),
            matrix(&[&[Some(0.0), Some(5.0)], &[None, Some(0.0)]]),
            matrix(&[&[Some(0.0), Some(1.0)], &[None, Some(0.0)]]),
            None,
        )
        .unwrap();
        let weights = RawWeights::new(0.0, 1.0, 0.0).normalize().unwrap();
        let totals = PathTotals::along(&[0, 1], &criteria, &weights);

        assert_eq!(totals.time, 0.0);
        assert_eq!(totals.cost, 5.0);
        assert_eq!(totals.score, 5.0);
    }
}
