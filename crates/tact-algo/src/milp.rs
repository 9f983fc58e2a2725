//! Shared MILP backend plumbing.
//!
//! Both solvers model their problems through the generic `good_lp` layer and
//! only ever observe the backend through two things: the per-call
//! [`SolverConfig`] and the [`SolverStatus`] read back from a solve. A
//! non-optimal status is data, not an error: the result types carry it and
//! the caller decides policy.

use good_lp::ResolutionError;
use serde::Serialize;

/// Outcome of a MILP solve as reported by the backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SolverStatus {
    /// Proven optimal solution found.
    Optimal,
    /// The constraint system admits no solution.
    Infeasible,
    /// The objective is unbounded.
    Unbounded,
    /// The backend gave up or failed; the message is backend-specific.
    NotSolved(String),
}

impl SolverStatus {
    /// True when the solve produced a proven optimum.
    pub fn is_optimal(&self) -> bool {
        matches!(self, SolverStatus::Optimal)
    }
}

impl std::fmt::Display for SolverStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverStatus::Optimal => write!(f, "optimal"),
            SolverStatus::Infeasible => write!(f, "infeasible"),
            SolverStatus::Unbounded => write!(f, "unbounded"),
            SolverStatus::NotSolved(msg) => write!(f, "not solved: {msg}"),
        }
    }
}

/// Map a backend resolution failure to the status surfaced to callers.
pub(crate) fn status_from_error(err: ResolutionError) -> SolverStatus {
    match err {
        ResolutionError::Infeasible => SolverStatus::Infeasible,
        ResolutionError::Unbounded => SolverStatus::Unbounded,
        other => SolverStatus::NotSolved(format!("{other:?}")),
    }
}

/// Per-call solver configuration.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Whether to let the backend print its log; suppressed by default.
    pub verbose: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self { verbose: false }
    }
}
