//! Business-plan solution data structures
//!
//! Defines the output of the business-plan MILP.

use crate::expectation::MinExpectations;
use crate::milp::SolverStatus;
use serde::Serialize;
use std::time::Duration;

/// Wall-clock breakdown of one plan solve.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PlanTimings {
    /// Expectation tables and decision variables.
    pub variables: Duration,
    /// Objective assembly.
    pub objective: Duration,
    /// Constraint assembly.
    pub constraints: Duration,
    /// Backend solve.
    pub solve: Duration,
    /// Plan read-back from the solution.
    pub read_back: Duration,
}

/// Complete result of a business-plan solve.
///
/// The plans are present exactly when the backend proved optimality; on an
/// infeasible or unbounded model they are `None` and [`BusinessPlan::status`]
/// tells the caller why.
#[derive(Debug, Clone, Serialize)]
pub struct BusinessPlan {
    /// Number of time steps planned.
    pub horizon: usize,
    /// Exclusive upper bound on per-step target quantities.
    pub q_max: usize,
    /// Truncated-min tables used by the objective and constraints.
    pub minima: MinExpectations,
    /// Expected input unit price per step.
    pub p_inn: Vec<f64>,
    /// Expected output unit price per step.
    pub p_out: Vec<f64>,
    /// Inventory regime the plan was solved under.
    pub optimistic: bool,
    /// Backend status of the solve.
    pub status: SolverStatus,
    /// Objective value at the optimum.
    pub objective: Option<f64>,
    /// Wall-clock breakdown.
    pub timings: PlanTimings,
    /// Target buy quantity per step.
    pub buy_plan: Option<Vec<usize>>,
    /// Target sell quantity per step.
    pub sell_plan: Option<Vec<usize>>,
}

impl BusinessPlan {
    /// True when the backend proved optimality and the plans are present.
    pub fn is_optimal(&self) -> bool {
        self.status.is_optimal()
    }

    /// Total quantity the plan attempts to buy, 0 without a plan.
    pub fn total_buy(&self) -> usize {
        self.buy_plan.as_ref().map_or(0, |p| p.iter().sum())
    }

    /// Total quantity the plan attempts to sell, 0 without a plan.
    pub fn total_sell(&self) -> usize {
        self.sell_plan.as_ref().map_or(0, |p| p.iter().sum())
    }

    /// Format a human-readable summary.
    pub fn summary(&self) -> String {
        let mut s = String::new();
        s.push_str(&format!("Business Plan Summary\n{}\n", "=".repeat(40)));
        s.push_str(&format!("Status: {}\n", self.status));
        s.push_str(&format!(
            "Horizon: {} steps, targets in [0, {})\n",
            self.horizon, self.q_max
        ));
        s.push_str(&format!(
            "Regime: {}\n",
            if self.optimistic {
                "optimistic"
            } else {
                "expected-value"
            }
        ));
        if let Some(objective) = self.objective {
            s.push_str(&format!("Expected Profit: {objective:.2}\n"));
        }
        if let (Some(buy), Some(sell)) = (&self.buy_plan, &self.sell_plan) {
            s.push_str(&format!("Buy Plan:  {buy:?}\n"));
            s.push_str(&format!("Sell Plan: {sell:?}\n"));
        }
        s.push_str(&format!("Solve Time: {:.2?}\n", self.timings.solve));
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_plan() -> BusinessPlan {
        BusinessPlan {
            horizon: 3,
            q_max: 3,
            minima: MinExpectations {
                inn: vec![vec![0.0, 1.0, 2.0]; 3],
                out: vec![vec![0.0, 1.0, 2.0]; 3],
            },
            p_inn: vec![1.0; 3],
            p_out: vec![10.0; 3],
            optimistic: true,
            status: SolverStatus::Optimal,
            objective: Some(36.0),
            timings: PlanTimings::default(),
            buy_plan: Some(vec![2, 2, 0]),
            sell_plan: Some(vec![0, 2, 2]),
        }
    }

    #[test]
    fn test_totals() {
        let plan = sample_plan();
        assert_eq!(plan.total_buy(), 4);
        assert_eq!(plan.total_sell(), 4);
        assert!(plan.is_optimal());
    }

    #[test]
    fn test_summary_mentions_status_and_plans() {
        let summary = sample_plan().summary();
        assert!(summary.contains("optimal"));
        assert!(summary.contains("Buy Plan"));
        assert!(summary.contains("36.00"));
    }

    #[test]
    fn test_missing_plans_count_zero() {
        let mut plan = sample_plan();
        plan.status = SolverStatus::Infeasible;
        plan.buy_plan = None;
        plan.sell_plan = None;
        plan.objective = None;
        assert_eq!(plan.total_buy(), 0);
        assert_eq!(plan.total_sell(), 0);
        assert!(!plan.is_optimal());
    }

    #[test]
    fn test_serializes() {
        let json = serde_json::to_string(&sample_plan()).unwrap();
        assert!(json.contains("\"buy_plan\""));
        assert!(json.contains("\"Optimal\""));
    }
}
