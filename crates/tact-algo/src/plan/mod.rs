//! Business-plan solver
//!
//! Chooses, for every step of a finite horizon, a single target quantity to
//! attempt to buy and a single target quantity to attempt to sell, so that
//! expected profit is maximised under inventory conservation.
//!
//! ## MILP Formulation
//!
//! Binary variables `b[t,k]` / `s[t,k]` mean "attempt to trade exactly `k`
//! units at step `t`" on the buy / sell side. With `E_inn` / `E_out` the
//! truncated-min tables of the forecast distributions:
//!
//! ```text
//! maximise    Σ_{t,k}  s[t,k]·E_out[t][k]·p_out[t] − b[t,k]·E_inn[t][k]·p_inn[t]
//!
//! subject to:
//!   Σ_k b[t,k] ≤ 1,  Σ_k s[t,k] ≤ 1            one target per side per step
//!   sell(t) ≤ inv(t-1)              for t ≥ 1   1-step conversion lag
//!   expected trade ≥ commitment                 floors on free steps
//!   s[i,k] = [k = C_out[i]]         leading pinned steps (buy side too
//!                                   when re-planning from step > 0)
//!   b, s ∈ {0,1}
//! ```
//!
//! `inv(t)` is the running buys-minus-sells balance, measured in chosen
//! targets (*optimistic* regime) or in expected realised quantities
//! (*expected-value* regime).

mod problem;
mod solution;
mod solver;

pub use problem::PlanProblem;
pub use solution::{BusinessPlan, PlanTimings};
pub use solver::compute_business_plan;
