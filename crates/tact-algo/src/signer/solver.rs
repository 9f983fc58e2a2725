//! Contract-signer MILP solver
//!
//! One binary per candidate agreement; a time-ordered sweep emits one
//! inventory constraint per distinct sell time.

use super::problem::partition_agreements;
use super::solution::{SignerOutcome, Verdict};
use crate::milp::{status_from_error, SolverConfig, SolverStatus};
use good_lp::solvers::highs::highs;
use good_lp::{constraint, variable, variables, Expression, Solution, SolverModel, Variable};
use log::debug;
use std::time::Instant;
use tact_core::{Agreement, TactResult, TrustMap};

/// Decide which agreements of a batch to sign.
///
/// Maximises risk-adjusted profit (revenue and cost both discounted by the
/// counterparty's trust probability) subject to inventory feasibility: the
/// outputs sold at any time are bounded by all strictly earlier signed buys
/// minus all earlier signed sells, honouring the 1-step conversion lag.
///
/// Two batches are decided without touching the solver: an empty batch, and
/// a batch missing either side (with no demand there is never value in
/// signing buys, and sells can never be covered without buys).
///
/// Returns `Err` only for invalid input; solver statuses are data in the
/// outcome.
pub fn sign(
    agent_id: &str,
    agreements: &[Agreement],
    trust_probabilities: &TrustMap,
    config: &SolverConfig,
) -> TactResult<SignerOutcome> {
    if agreements.is_empty() {
        return Ok(SignerOutcome::all_skipped(
            agent_id,
            agreements,
            trust_probabilities,
        ));
    }

    let (buys, sells) = partition_agreements(agent_id, agreements, trust_probabilities)?;
    if buys.is_empty() || sells.is_empty() {
        return Ok(SignerOutcome::all_skipped(
            agent_id,
            agreements,
            trust_probabilities,
        ));
    }

    // === Variables and objective ===
    let build_start = Instant::now();
    let mut vars = variables!();
    let buy_sign: Vec<Variable> = buys.iter().map(|_| vars.add(variable().binary())).collect();
    let sell_sign: Vec<Variable> = sells
        .iter()
        .map(|_| vars.add(variable().binary()))
        .collect();

    let mut objective = Expression::from(0.0);
    for (j, sell) in sells.iter().enumerate() {
        objective += sell.risk_adjusted_value() * sell_sign[j];
    }
    for (i, buy) in buys.iter().enumerate() {
        objective -= buy.risk_adjusted_value() * buy_sign[i];
    }

    let mut model = vars.maximise(&objective).using(highs);
    model.set_verbose(config.verbose);

    // === Inventory constraints ===
    // Sweep the sells in time order, one constraint per distinct sell time T:
    // the quantity sold at T is bounded by every signed buy strictly before T
    // minus every signed sell before T.
    let mut partial_buy_sum = Expression::from(0.0);
    let mut partial_sell_sum = Expression::from(0.0);
    let mut buy_cursor = 0;
    let mut j = 0;
    while j < sells.len() {
        let current_sell_time = sells[j].time;
        while buy_cursor < buys.len() && buys[buy_cursor].time < current_sell_time {
            partial_buy_sum += buys[buy_cursor].quantity as f64 * buy_sign[buy_cursor];
            buy_cursor += 1;
        }
        let mut sold_now = Expression::from(0.0);
        while j < sells.len() && sells[j].time == current_sell_time {
            sold_now += sells[j].quantity as f64 * sell_sign[j];
            j += 1;
        }
        model = model.with(constraint!(
            sold_now.clone() <= partial_buy_sum.clone() - partial_sell_sum.clone()
        ));
        partial_sell_sum += sold_now;
    }
    let time_to_generate_ilp = build_start.elapsed();

    debug!(
        "signer MILP: {} buys, {} sells, built in {:.2?}",
        buys.len(),
        sells.len(),
        time_to_generate_ilp
    );

    // === Solve and read back ===
    let solve_start = Instant::now();
    let solved = model.solve();
    let time_to_solve_ilp = solve_start.elapsed();

    let mut outcome = SignerOutcome::all_skipped(agent_id, agreements, trust_probabilities);
    outcome.time_to_generate_ilp = Some(time_to_generate_ilp);
    outcome.time_to_solve_ilp = Some(time_to_solve_ilp);

    let solution = match solved {
        Ok(solution) => solution,
        Err(err) => {
            outcome.model_status = Some(status_from_error(err));
            debug!("signer solve ended without optimum: {:?}", outcome.model_status);
            return Ok(outcome);
        }
    };

    for (i, buy) in buys.iter().enumerate() {
        if solution.value(buy_sign[i]).round() as i64 == 1 {
            outcome.signatures[buy.master_index] = Verdict::Signed(agent_id.to_string());
        }
    }
    for (j, sell) in sells.iter().enumerate() {
        if solution.value(sell_sign[j]).round() as i64 == 1 {
            outcome.signatures[sell.master_index] = Verdict::Signed(agent_id.to_string());
        }
    }
    outcome.model_status = Some(SolverStatus::Optimal);
    outcome.profit = Some(solution.eval(&objective));

    debug!(
        "signer solved in {:.2?}: {} of {} signed, profit {:?}",
        time_to_solve_ilp,
        outcome.signed_count(),
        agreements.len(),
        outcome.profit
    );
    Ok(outcome)
}
