//! Criterion weights and their normalization
//!
//! Callers hand in any non-negative triple; the core rescales it so the three
//! weights sum to 1 while preserving their ratios. A triple that cannot be
//! normalized (negative entry, or all zeros) is rejected before any matrix
//! work happens.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RouteError};

/// Raw, caller-supplied weight triple. Need not sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawWeights {
    /// Relative importance of travel time
    #[serde(default = "default_weight")]
    pub time: f64,

    /// Relative importance of monetary cost
    #[serde(default = "default_weight")]
    pub cost: f64,

    /// Relative importance of risk
    #[serde(default = "default_weight")]
    pub risk: f64,
}

impl Default for RawWeights {
    fn default() -> Self {
        Self {
            time: default_weight(),
            cost: default_weight(),
            risk: default_weight(),
        }
    }
}

fn default_weight() -> f64 {
    1.0 / 3.0 // equal emphasis on all three criteria
}

impl RawWeights {
    pub const fn new(time: f64, cost: f64, risk: f64) -> Self {
        Self { time, cost, risk }
    }

    /// Rescales the triple to sum to 1, preserving ratios.
    pub fn normalize(self) -> Result<Weights> {
        let invalid = |message: String| RouteError::InvalidWeights {
            time: self.time,
            cost: self.cost,
            risk: self.risk,
            message,
        };

        for w in [self.time, self.cost, self.risk] {
            if !w.is_finite() || w < 0.0 {
                return Err(invalid(format!(
                    "weights must be finite and non-negative, got {w}"
                )));
            }
        }

        let sum = self.time + self.cost + self.risk;
        if sum == 0.0 {
            return Err(invalid("at least one weight must be positive".to_string()));
        }

        Ok(Weights {
            time: self.time / sum,
            cost: self.cost / sum,
            risk: self.risk / sum,
        })
    }
}

/// A normalized weight triple: each component in [0, 1], summing to 1.
///
/// Only obtainable through [`RawWeights::normalize`], so every consumer can
/// rely on the invariant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Weights {
    time: f64,
    cost: f64,
    risk: f64,
}

impl Weights {
    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn risk(&self) -> f64 {
        self.risk
    }
}
