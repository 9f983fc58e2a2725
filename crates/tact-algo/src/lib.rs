//! # tact-algo: Decision Solvers for a Supply-Chain Trading Agent
//!
//! This crate provides the two combinatorial decision procedures of the
//! trading agent, both formulated as mixed-integer linear programs over the
//! generic `good_lp` modelling layer:
//!
//! | Solver | Decides | Structure |
//! |--------|---------|-----------|
//! | [`plan::compute_business_plan`] | One buy and one sell target quantity per time step | `horizon × q_max` binaries per side, inventory sweep |
//! | [`signer::sign`] | Which candidate agreements to sign | One binary per agreement, per-sell-time constraints |
//!
//! Around them:
//!
//! - [`expectation::get_minima`]: truncated-min tables `E[min(k, Q)]` that
//!   price target quantities under forecast uncertainty.
//! - [`signer::greedy_sign`]: revenue-descending baseline whose profit lower
//!   bounds the optimal signer.
//! - [`signer::is_sign_plan_consistent`]: inventory non-negativity check for
//!   any signing decision.
//!
//! Every entry point is a pure function of its inputs; independent solves
//! may run from parallel threads since each call owns its model instance.
//! Invalid input fails the call with [`tact_core::TactError`]; backend
//! statuses (infeasible, unbounded) are reported inside the result types.
//!
//! ## Example
//!
//! ```ignore
//! use tact_algo::milp::SolverConfig;
//! use tact_algo::signer::sign;
//!
//! let outcome = sign(my_id, &agreements, &trust, &SolverConfig::default())?;
//! for (agreement, verdict) in outcome.agreements.iter().zip(&outcome.signatures) {
//!     println!("{agreement:?} -> {verdict:?}");
//! }
//! ```

pub mod expectation;
pub mod milp;
pub mod plan;
pub mod signer;

pub use expectation::{get_minima, MinExpectations};
pub use milp::{SolverConfig, SolverStatus};
pub use plan::{compute_business_plan, BusinessPlan, PlanProblem, PlanTimings};
pub use signer::{
    greedy_sign, is_sign_plan_consistent, plan_quantities, sign, SignerOutcome, Verdict,
};
