//! Forecasts and commitment vectors consumed by the business-plan solver.
//!
//! The forecasting subsystem supplies, per time step, a quantity distribution
//! and an expected unit price for each side of the market. Commitments are
//! quantities the agent has already contracted for and must honour; they act
//! as floors (and, for the leading pinned steps, as exact values) on the plan.

use crate::error::{TactError, TactResult};
use crate::pmf::Pmf;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-step market forecast over a finite horizon.
///
/// All four vectors are parallel and indexed by time step; their shared
/// length is the horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    /// Achievable buy-side quantity distribution per step.
    pub q_inn: Vec<Pmf>,
    /// Achievable sell-side quantity distribution per step.
    pub q_out: Vec<Pmf>,
    /// Expected unit price for the input product per step.
    pub p_inn: Vec<f64>,
    /// Expected unit price for the output product per step.
    pub p_out: Vec<f64>,
}

impl Forecast {
    /// Empty forecast over `horizon` steps: no quantity mass, zero prices.
    pub fn new(horizon: usize) -> Self {
        Self {
            q_inn: vec![Pmf::new(); horizon],
            q_out: vec![Pmf::new(); horizon],
            p_inn: vec![0.0; horizon],
            p_out: vec![0.0; horizon],
        }
    }

    /// Number of time steps covered by the forecast.
    pub fn horizon(&self) -> usize {
        self.q_inn.len()
    }

    /// Check that the four per-step vectors are parallel and prices finite.
    pub fn validate(&self) -> TactResult<()> {
        let horizon = self.q_inn.len();
        if self.q_out.len() != horizon || self.p_inn.len() != horizon || self.p_out.len() != horizon
        {
            return Err(TactError::Validation(format!(
                "forecast vectors must share one horizon, got q_inn={}, q_out={}, p_inn={}, p_out={}",
                self.q_inn.len(),
                self.q_out.len(),
                self.p_inn.len(),
                self.p_out.len()
            )));
        }
        for price in self.p_inn.iter().chain(self.p_out.iter()) {
            if !price.is_finite() {
                return Err(TactError::Validation(format!(
                    "forecast prices must be finite, got {price}"
                )));
            }
        }
        Ok(())
    }
}

/// Already-committed quantities per time step, with an explicit zero default.
///
/// Lookups of a step with no recorded commitment return 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Commitments {
    inn: HashMap<usize, usize>,
    out: HashMap<usize, usize>,
}

impl Commitments {
    /// No commitments on either side.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a committed buy quantity at `time`.
    pub fn set_buy(&mut self, time: usize, quantity: usize) {
        self.inn.insert(time, quantity);
    }

    /// Record a committed sell quantity at `time`.
    pub fn set_sell(&mut self, time: usize, quantity: usize) {
        self.out.insert(time, quantity);
    }

    /// Committed buy quantity at `time`, defaulting to 0.
    pub fn buy_at(&self, time: usize) -> usize {
        self.inn.get(&time).copied().unwrap_or(0)
    }

    /// Committed sell quantity at `time`, defaulting to 0.
    pub fn sell_at(&self, time: usize) -> usize {
        self.out.get(&time).copied().unwrap_or(0)
    }

    /// True if no step carries a commitment on either side.
    pub fn is_empty(&self) -> bool {
        self.inn.is_empty() && self.out.is_empty()
    }

    /// Largest committed quantity on either side, 0 when empty.
    pub fn max_quantity(&self) -> usize {
        self.inn
            .values()
            .chain(self.out.values())
            .copied()
            .max()
            .unwrap_or(0)
    }
}
