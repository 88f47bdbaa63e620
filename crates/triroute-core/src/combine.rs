//! Scalarization of the three criterion matrices into one combined matrix

use itertools::Itertools;

use crate::matrix::{CriterionSet, SquareMatrix};
use crate::weights::Weights;

/// Merges the three criterion matrices into a single scalar-weighted adjacency
/// matrix.
///
/// For each ordered pair (i, j), i ≠ j:
/// - if any criterion with positive weight has no edge at (i, j), the combined
///   entry has no edge either (the poisoning rule) — a criterion the caller
///   cares about being unreachable cannot be averaged away;
/// - otherwise the entry is the weighted sum of the finite criterion values,
///   where an absent edge on a zero-weighted criterion contributes 0 rather
///   than leaking the sentinel into the sum.
///
/// The diagonal is always 0.
pub fn combine(criteria: &CriterionSet, weights: &Weights) -> SquareMatrix {
    let dim = criteria.dim();
    let mut combined = SquareMatrix::disconnected(dim);

    let terms = [
        (criteria.time(), weights.time()),
        (criteria.cost(), weights.cost()),
        (criteria.risk(), weights.risk()),
    ];

    for (i, j) in (0..dim).cartesian_product(0..dim) {
        if i == j {
            continue;
        }

        let poisoned = terms
            .iter()
            .any(|(matrix, weight)| *weight > 0.0 && !matrix.is_finite_at(i, j));
        if poisoned {
            continue;
        }

        let mut sum = 0.0;
        for (matrix, weight) in &terms {
            // A zero-weighted criterion may be absent here; skip it
            // entirely instead of multiplying 0 by infinity.
            if *weight > 0.0 {
                sum += weight * matrix.get(i, j);
            }
        }
        combined.set(i, j, sum);
    }

    combined
}
