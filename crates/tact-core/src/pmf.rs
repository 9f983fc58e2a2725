//! Discrete probability mass functions and the truncated-min kernel.
//!
//! Forecast quantities are modeled as discrete random variables over
//! non-negative integers. A [`Pmf`] is a sparse association from value to
//! probability; absent values carry zero mass. Callers are responsible for
//! well-formed distributions: the kernel tolerates mass defect silently and
//! performs no clamping.
//!
//! The one numeric operation both solvers share is the truncated-min table
//! `y -> E[min(y, X)]`, computed from the survival-function identity
//!
//! ```text
//! E[min(y, X)] = sum_{i=1..y} P(X >= i)
//! ```
//!
//! implemented as an incremental recurrence over the CDF.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Sparse probability mass function over non-negative integer quantities.
///
/// Absent keys are read as zero probability. The distribution is not required
/// to sum to one; see [`Pmf::min_expectation`] for the consequences.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pmf {
    mass: HashMap<usize, f64>,
}

impl Pmf {
    /// Create an empty pmf (no support; all mass lookups return zero).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the probability of seeing exactly `quantity`.
    pub fn set(&mut self, quantity: usize, probability: f64) {
        self.mass.insert(quantity, probability);
    }

    /// Probability of seeing exactly `quantity`; zero if never recorded.
    pub fn mass(&self, quantity: usize) -> f64 {
        self.mass.get(&quantity).copied().unwrap_or(0.0)
    }

    /// True if no value carries recorded mass.
    pub fn is_empty(&self) -> bool {
        self.mass.is_empty()
    }

    /// Truncated-min table: `table[y] = E[min(y, X)]` for `y in [0, q_max)`.
    ///
    /// `table[0]` is always `0.0` and the table is non-decreasing for any
    /// well-formed pmf. If the recorded mass sums to more than one, the
    /// running survival probability goes negative and the table may decrease;
    /// that is the caller's contract to avoid, not this function's to repair.
    ///
    /// Caller contract: `q_max >= 1`.
    pub fn min_expectation(&self, q_max: usize) -> Vec<f64> {
        debug_assert!(q_max >= 1, "truncated-min table needs q_max >= 1");
        let mut table = vec![0.0; q_max];
        let mut survival = 1.0;
        for y in 1..q_max {
            survival -= self.mass(y - 1);
            table[y] = table[y - 1] + survival;
        }
        table
    }
}

impl FromIterator<(usize, f64)> for Pmf {
    fn from_iter<I: IntoIterator<Item = (usize, f64)>>(iter: I) -> Self {
        Self {
            mass: iter.into_iter().collect(),
        }
    }
}
