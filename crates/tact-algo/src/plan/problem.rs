//! Business-plan problem data structures
//!
//! Defines the input data for the business-plan MILP.

use tact_core::{Commitments, Forecast, TactError, TactResult};

/// Business-plan problem: forecast, quantity domain and planning options.
///
/// `q_max` is the exclusive upper bound on any single-step target quantity;
/// targets range over `[0, q_max)`. The solver picks at most one buy target
/// and one sell target per step.
#[derive(Debug, Clone)]
pub struct PlanProblem {
    /// Per-step quantity distributions and expected prices.
    pub forecast: Forecast,
    /// Exclusive upper bound on single-step target quantities.
    pub q_max: usize,
    /// Already-contracted quantities the plan must honour.
    pub commitments: Commitments,
    /// Inventory regime: true evaluates feasibility against the chosen
    /// targets, false against expected realised quantities.
    pub optimistic: bool,
    /// Number of leading time steps pinned to the commitments.
    pub step: usize,
}

impl PlanProblem {
    /// Create a problem with no commitments, optimistic regime, step 0.
    pub fn new(forecast: Forecast, q_max: usize) -> Self {
        Self {
            forecast,
            q_max,
            commitments: Commitments::new(),
            optimistic: true,
            step: 0,
        }
    }

    /// Set the commitment vectors.
    pub fn with_commitments(mut self, commitments: Commitments) -> Self {
        self.commitments = commitments;
        self
    }

    /// Select the inventory regime.
    pub fn with_optimistic(mut self, optimistic: bool) -> Self {
        self.optimistic = optimistic;
        self
    }

    /// Pin the first `step` time steps to the commitments.
    pub fn with_step(mut self, step: usize) -> Self {
        self.step = step;
        self
    }

    /// Number of time steps in the plan.
    pub fn horizon(&self) -> usize {
        self.forecast.horizon()
    }

    /// Number of leading steps whose sell side is pinned. The sell side is
    /// always pinned at t=0: without committed demand there is no sale at
    /// the first step.
    pub fn pinned_steps(&self) -> usize {
        self.step.max(1)
    }

    /// Check the problem before any solver work.
    pub fn validate(&self) -> TactResult<()> {
        self.forecast.validate()?;
        if self.horizon() == 0 {
            return Err(TactError::Validation(
                "plan horizon must be at least 1".into(),
            ));
        }
        if self.q_max == 0 {
            return Err(TactError::Validation("q_max must be at least 1".into()));
        }
        if self.step > self.horizon() {
            return Err(TactError::Validation(format!(
                "step {} exceeds the horizon {}",
                self.step,
                self.horizon()
            )));
        }
        // A committed quantity must be choosable: targets live in [0, q_max).
        if self.commitments.max_quantity() >= self.q_max {
            return Err(TactError::Validation(format!(
                "committed quantity {} is outside the target domain [0, {})",
                self.commitments.max_quantity(),
                self.q_max
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let problem = PlanProblem::new(Forecast::new(5), 4);
        assert!(problem.optimistic);
        assert_eq!(problem.step, 0);
        assert_eq!(problem.horizon(), 5);
        assert_eq!(problem.pinned_steps(), 1);
        assert!(problem.validate().is_ok());
    }

    #[test]
    fn test_step_widens_pinned_range() {
        let problem = PlanProblem::new(Forecast::new(5), 4).with_step(3);
        assert_eq!(problem.pinned_steps(), 3);
    }

    #[test]
    fn test_zero_q_max_rejected() {
        let problem = PlanProblem::new(Forecast::new(3), 0);
        assert!(problem.validate().is_err());
    }

    #[test]
    fn test_empty_horizon_rejected() {
        let problem = PlanProblem::new(Forecast::new(0), 4);
        assert!(problem.validate().is_err());
    }

    #[test]
    fn test_step_beyond_horizon_rejected() {
        let problem = PlanProblem::new(Forecast::new(3), 4).with_step(4);
        assert!(problem.validate().is_err());
    }

    #[test]
    fn test_commitment_outside_domain_rejected() {
        let mut commitments = Commitments::new();
        commitments.set_sell(1, 4);
        let problem = PlanProblem::new(Forecast::new(3), 4).with_commitments(commitments);
        let err = problem.validate().unwrap_err();
        assert!(err.to_string().contains("[0, 4)"));
    }
}
