//! Plan-consistency checking for signer outcomes
//!
//! Reconstructs the per-step buy/sell quantities a signing decision implies
//! and verifies the inventory never goes negative under the 1-step
//! conversion lag.

use super::solution::SignerOutcome;

/// Aggregate the signed agreements into per-step quantity plans.
///
/// The horizon is implied by the batch: one past the latest agreement time.
/// Returns `(horizon, buy_plan, sell_plan)`; an empty batch yields
/// `(0, [], [])`.
pub fn plan_quantities(outcome: &SignerOutcome) -> (usize, Vec<usize>, Vec<usize>) {
    let horizon = match outcome.agreements.iter().map(|a| a.time).max() {
        Some(latest) => latest + 1,
        None => return (0, Vec::new(), Vec::new()),
    };
    let mut buy_plan = vec![0; horizon];
    let mut sell_plan = vec![0; horizon];
    for (agreement, verdict) in outcome.agreements.iter().zip(&outcome.signatures) {
        if verdict.is_signed() {
            if agreement.is_buy {
                buy_plan[agreement.time] += agreement.quantity;
            } else {
                sell_plan[agreement.time] += agreement.quantity;
            }
        }
    }
    (horizon, buy_plan, sell_plan)
}

/// Check that a signing decision is physically implementable.
///
/// Assuming every bought input converts to output in one step and every
/// signed sell executes, the output inventory
/// `inv(t) = inv(t-1) + buy(t-1) - sell(t)` must stay non-negative, nothing
/// may be sold at the first step and nothing bought at the last. An empty
/// outcome is trivially consistent.
pub fn is_sign_plan_consistent(outcome: &SignerOutcome) -> bool {
    let (horizon, buy_plan, sell_plan) = plan_quantities(outcome);
    if horizon == 0 {
        return true;
    }
    if sell_plan[0] != 0 || buy_plan[horizon - 1] != 0 {
        return false;
    }
    let mut inventory: i64 = 0;
    for t in 1..horizon {
        inventory += buy_plan[t - 1] as i64 - sell_plan[t] as i64;
        if inventory < 0 {
            return false;
        }
    }
    true
}
