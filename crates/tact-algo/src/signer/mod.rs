//! Contract signer
//!
//! Given a batch of candidate bilateral agreements, decides which subset to
//! sign so that risk-adjusted profit is maximised while every signed sell is
//! covered by strictly earlier signed buys.
//!
//! ## MILP Formulation
//!
//! One binary per agreement (`bs[i]` for buys, `ss[j]` for sells), with
//! `q`, `p`, `τ` the quantity, unit price and partner trust:
//!
//! ```text
//! maximise    Σ_j ss[j]·q_j·p_j·τ_j  −  Σ_i bs[i]·q_i·p_i·τ_i
//!
//! subject to, for every distinct sell time T:
//!   Σ_{sells at T} ss·q  ≤  Σ_{buys before T} bs·q − Σ_{sells before T} ss·q
//! ```
//!
//! The constraint sweep walks both sides in time order, accumulating partial
//! buy and sell sums so each agreement contributes exactly to the constraints
//! it should; strict inequality on the buy time encodes the 1-step
//! conversion lag.
//!
//! [`greedy_sign`] is the revenue-descending baseline; its profit is a lower
//! bound on the optimum. [`is_sign_plan_consistent`] verifies any outcome
//! against the inventory invariant.

mod consistency;
mod greedy;
mod problem;
mod solution;
mod solver;

pub use consistency::{is_sign_plan_consistent, plan_quantities};
pub use greedy::greedy_sign;
pub use solution::{SignerOutcome, Verdict};
pub use solver::sign;
