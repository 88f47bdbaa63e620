//! Dense square matrices and the validated three-criterion input set
//!
//! Every table in the pipeline (criterion inputs, combined matrix, distance
//! matrix) is a dense V×V matrix stored as a flat `Vec<f64>` indexed by
//! `i * dim + j`. "No direct edge" is represented by `f64::INFINITY`, never by
//! a finite magic number, so summing along a path can never confuse a missing
//! edge with a real weight.

use crate::error::{Result, RouteError};

/// A dense V×V matrix of non-negative edge weights.
///
/// Absent edges are `f64::INFINITY`; the diagonal is always 0.
#[derive(Debug, Clone, PartialEq)]
pub struct SquareMatrix {
    dim: usize,
    data: Vec<f64>,
}

impl SquareMatrix {
    /// Creates a matrix with no edges (diagonal 0, everything else absent).
    pub fn disconnected(dim: usize) -> Self {
        let mut data = vec![f64::INFINITY; dim * dim];
        for i in 0..dim {
            data[i * dim + i] = 0.0;
        }
        Self { dim, data }
    }

    /// Builds a matrix from nested rows as they appear on the wire, where
    /// `None` means "no direct edge".
    ///
    /// Validates squareness, non-negativity, finiteness and a zero diagonal
    /// (an absent diagonal entry is read as 0).
    pub fn from_rows(criterion: &'static str, rows: &[Vec<Option<f64>>]) -> Result<Self> {
        let dim = rows.len();
        let mut matrix = Self::disconnected(dim);

        for (i, row) in rows.iter().enumerate() {
            if row.len() != dim {
                return Err(RouteError::RaggedMatrix {
                    criterion,
                    row: i,
                    found: row.len(),
                    expected: dim,
                });
            }
            for (j, entry) in row.iter().enumerate() {
                let Some(value) = *entry else {
                    continue; // stays absent (or 0 on the diagonal)
                };
                if !value.is_finite() || value < 0.0 {
                    return Err(RouteError::InvalidEntry {
                        criterion,
                        row: i,
                        col: j,
                        message: format!("edge weights must be finite and non-negative, got {value}"),
                    });
                }
                if i == j && value != 0.0 {
                    return Err(RouteError::InvalidEntry {
                        criterion,
                        row: i,
                        col: j,
                        message: format!("diagonal entries must be 0, got {value}"),
                    });
                }
                matrix.set(i, j, value);
            }
        }

        Ok(matrix)
    }

    /// Number of nodes (rows/columns).
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Entry at (i, j); `f64::INFINITY` when there is no edge.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.dim + j]
    }

    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        self.data[i * self.dim + j] = value;
    }

    /// Whether a finite entry exists at (i, j).
    #[inline]
    pub fn is_finite_at(&self, i: usize, j: usize) -> bool {
        self.get(i, j).is_finite()
    }

    /// Converts back to nested rows with `None` for absent edges, the shape
    /// reports are serialized in.
    pub fn to_rows(&self) -> Vec<Vec<Option<f64>>> {
        (0..self.dim)
            .map(|i| {
                (0..self.dim)
                    .map(|j| {
                        let v = self.get(i, j);
                        v.is_finite().then_some(v)
                    })
                    .collect()
            })
            .collect()
    }
}

/// The three validated criterion matrices plus optional node labels.
///
/// Construction checks everything the combiner relies on, so downstream
/// stages can index freely without re-validating.
#[derive(Debug, Clone)]
pub struct CriterionSet {
    time: SquareMatrix,
    cost: SquareMatrix,
    risk: SquareMatrix,
    labels: Option<Vec<String>>,
}

impl CriterionSet {
    pub fn new(
        time: SquareMatrix,
        cost: SquareMatrix,
        risk: SquareMatrix,
        labels: Option<Vec<String>>,
    ) -> Result<Self> {
        if time.dim() != cost.dim() || time.dim() != risk.dim() {
            return Err(RouteError::DimensionMismatch {
                time: time.dim(),
                cost: cost.dim(),
                risk: risk.dim(),
            });
        }

        if let Some(labels) = &labels {
            if labels.len() != time.dim() {
                return Err(RouteError::LabelMismatch {
                    message: format!("{} labels for {} nodes", labels.len(), time.dim()),
                });
            }
            let mut seen = std::collections::HashSet::new();
            for label in labels {
                if !seen.insert(label.as_str()) {
                    return Err(RouteError::LabelMismatch {
                        message: format!("duplicate label '{label}'"),
                    });
                }
            }
        }

        Ok(Self { time, cost, risk, labels })
    }

    /// Number of nodes shared by all three matrices.
    pub fn dim(&self) -> usize {
        self.time.dim()
    }

    pub fn time(&self) -> &SquareMatrix {
        &self.time
    }

    pub fn cost(&self) -> &SquareMatrix {
        &self.cost
    }

    pub fn risk(&self) -> &SquareMatrix {
        &self.risk
    }

    pub fn labels(&self) -> Option<&[String]> {
        self.labels.as_deref()
    }

    /// Display name for a node: its label when present, its index otherwise.
    pub fn node_name(&self, i: usize) -> String {
        match self.labels() {
            Some(labels) => labels[i].clone(),
            None => i.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(entries: &[&[Option<f64>]]) -> Vec<Vec<Option<f64>>> {
        entries.iter().map(|r| r.to_vec()).collect()
    }

    #[test]
    fn test_from_rows_reads_none_as_no_edge() {
        let m = SquareMatrix::from_rows(
            "time",
            &rows(&[&[Some(0.0), Some(3.0)], &[None, Some(0.0)]]),
        )
        .unwrap();
        assert_eq!(m.get(0, 1), 3.0);
        assert!(!m.is_finite_at(1, 0));
        assert_eq!(m.get(1, 1), 0.0);
    }

    #[test]
    fn test_absent_diagonal_is_zero() {
        let m = SquareMatrix::from_rows("time", &rows(&[&[None, None], &[None, None]])).unwrap();
        assert_eq!(m.get(0, 0), 0.0);
        assert_eq!(m.get(1, 1), 0.0);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = SquareMatrix::from_rows("cost", &rows(&[&[Some(0.0), Some(1.0)], &[Some(1.0)]]));
        assert!(matches!(err, Err(RouteError::RaggedMatrix { row: 1, .. })));
    }

    #[test]
    fn test_negative_entry_rejected() {
        let err = SquareMatrix::from_rows(
            "risk",
            &rows(&[&[Some(0.0), Some(-1.0)], &[Some(1.0), Some(0.0)]]),
        );
        assert!(matches!(err, Err(RouteError::InvalidEntry { .. })));
    }

    #[test]
    fn test_nonzero_diagonal_rejected() {
        let err = SquareMatrix::from_rows(
            "time",
            &rows(&[&[Some(2.0), Some(1.0)], &[Some(1.0), Some(0.0)]]),
        );
        assert!(matches!(err, Err(RouteError::InvalidEntry { row: 0, col: 0, .. })));
    }

    #[test]
    fn test_roundtrip_rows() {
        let input = rows(&[&[Some(0.0), None, Some(2.5)], &[Some(1.0), Some(0.0), None], &[
            None,
            Some(4.0),
            Some(0.0),
        ]]);
        let m = SquareMatrix::from_rows("time", &input).unwrap();
        assert_eq!(m.to_rows(), input);
    }

    #[test]
    fn test_criterion_set_rejects_dimension_mismatch() {
        let two = SquareMatrix::disconnected(2);
        let three = SquareMatrix::disconnected(3);
        let err = CriterionSet::new(two.clone(), two, three, None);
        assert!(matches!(err, Err(RouteError::DimensionMismatch { .. })));
    }

    #[test]
    fn test_criterion_set_rejects_bad_labels() {
        let m = SquareMatrix::disconnected(2);
        let err = CriterionSet::new(
            m.clone(),
            m.clone(),
            m.clone(),
            Some(vec!["a".into(), "a".into()]),
        );
        assert!(matches!(err, Err(RouteError::LabelMismatch { .. })));

        let err = CriterionSet::new(m.clone(), m.clone(), m, Some(vec!["a".into()]));
        assert!(matches!(err, Err(RouteError::LabelMismatch { .. })));
    }
}
