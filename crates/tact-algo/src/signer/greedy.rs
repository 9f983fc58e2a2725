//! Greedy signer baseline
//!
//! Revenue-descending heuristic: serves as a cheap baseline and as a lower
//! bound on the optimal signer in tests. Buys consumed for one sell are
//! spent whole; left-over units are wasted.

use super::problem::partition_agreements;
use super::solution::{SignerOutcome, Verdict};
use log::debug;
use tact_core::{Agreement, TactResult, TrustMap};

/// Greedily decide which agreements of a batch to sign.
///
/// Sells are visited in descending risk-adjusted value, buys accumulated in
/// ascending risk-adjusted value. A sell is signed as soon as strictly
/// earlier buys cover its quantity; those buys are then spent and removed
/// from the pool. A sell that can never be covered is skipped.
///
/// The outcome carries no model status or ILP timings; `profit` is the
/// running `revenue − cost` of the signed sells.
pub fn greedy_sign(
    agent_id: &str,
    agreements: &[Agreement],
    trust_probabilities: &TrustMap,
) -> TactResult<SignerOutcome> {
    let (buys, sells) = partition_agreements(agent_id, agreements, trust_probabilities)?;

    let mut buy_pool = buys;
    buy_pool.sort_by(|a, b| a.risk_adjusted_value().total_cmp(&b.risk_adjusted_value()));
    let mut sell_order = sells;
    sell_order.sort_by(|a, b| b.risk_adjusted_value().total_cmp(&a.risk_adjusted_value()));

    let mut outcome = SignerOutcome::all_skipped(agent_id, agreements, trust_probabilities);
    let mut profit = 0.0;

    for sell in &sell_order {
        let mut covered = 0;
        let mut cost = 0.0;
        let mut chosen = Vec::new();
        for (i, buy) in buy_pool.iter().enumerate() {
            if buy.time >= sell.time {
                continue;
            }
            covered += buy.quantity;
            cost += buy.risk_adjusted_value();
            chosen.push(i);
            if covered >= sell.quantity {
                break;
            }
        }
        if covered < sell.quantity {
            continue;
        }

        outcome.signatures[sell.master_index] = Verdict::Signed(agent_id.to_string());
        for &i in chosen.iter().rev() {
            let buy = buy_pool.remove(i);
            outcome.signatures[buy.master_index] = Verdict::Signed(agent_id.to_string());
        }
        profit += sell.risk_adjusted_value() - cost;
    }

    outcome.profit = Some(profit);
    debug!(
        "greedy signer: {} of {} signed, profit {profit:.4}",
        outcome.signed_count(),
        agreements.len()
    );
    Ok(outcome)
}
