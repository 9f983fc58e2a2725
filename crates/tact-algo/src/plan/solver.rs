//! Business-plan MILP solver
//!
//! Builds and solves the target-selection MILP over `horizon x q_max`
//! binary variables per market side.

use super::{BusinessPlan, PlanProblem, PlanTimings};
use crate::expectation::get_minima;
use crate::milp::{status_from_error, SolverConfig, SolverStatus};
use good_lp::solvers::highs::highs;
use good_lp::{constraint, variable, variables, Expression, Solution, SolverModel, Variable};
use log::debug;
use std::time::Instant;

/// Solve the business-plan problem.
///
/// Decision variables `b[t][k]` / `s[t][k]` select at most one buy target and
/// one sell target per step; choosing target `k` yields the expected realised
/// quantity `E[min(k, Q)]`, which prices the objective. Inventory feasibility
/// is swept across the horizon with a 1-step conversion lag in the regime the
/// problem selects.
///
/// Returns `Err` only for invalid input. A backend status other than optimal
/// is reported in the result with `None` plans; callers decide policy.
///
/// # Example
///
/// ```no_run
/// use tact_algo::milp::SolverConfig;
/// use tact_algo::plan::{compute_business_plan, PlanProblem};
/// use tact_core::Forecast;
///
/// let forecast = Forecast::new(10); // Fill from your forecasting subsystem
/// let problem = PlanProblem::new(forecast, 5);
/// let plan = compute_business_plan(&problem, &SolverConfig::default())?;
/// println!("{}", plan.summary());
/// # Ok::<(), tact_core::TactError>(())
/// ```
pub fn compute_business_plan(
    problem: &PlanProblem,
    config: &SolverConfig,
) -> tact_core::TactResult<BusinessPlan> {
    problem.validate()?;

    let horizon = problem.horizon();
    let q_max = problem.q_max;
    let forecast = &problem.forecast;

    // === Variables ===
    // b[t][k] = 1 iff the plan tries to buy exactly k inputs at time t;
    // s[t][k] likewise for selling outputs.
    let phase_start = Instant::now();
    let minima = get_minima(forecast, q_max);
    let mut vars = variables!();
    let buy_vars: Vec<Vec<Variable>> = (0..horizon)
        .map(|_| (0..q_max).map(|_| vars.add(variable().binary())).collect())
        .collect();
    let sell_vars: Vec<Vec<Variable>> = (0..horizon)
        .map(|_| (0..q_max).map(|_| vars.add(variable().binary())).collect())
        .collect();
    let time_variables = phase_start.elapsed();

    // === Objective ===
    // Expected profit: revenue from sales minus cost of purchases, each side
    // realised as E[min(k, Q)] at the forecast price.
    let phase_start = Instant::now();
    let mut objective = Expression::from(0.0);
    for t in 0..horizon {
        for k in 0..q_max {
            objective += minima.out[t][k] * forecast.p_out[t] * sell_vars[t][k];
            objective -= minima.inn[t][k] * forecast.p_inn[t] * buy_vars[t][k];
        }
    }
    let time_objective = phase_start.elapsed();

    // === Constraints ===
    let phase_start = Instant::now();
    let mut model = vars.maximise(&objective).using(highs);
    model.set_verbose(config.verbose);

    // At most one target per side per step.
    for t in 0..horizon {
        let mut buy_choice = Expression::from(0.0);
        let mut sell_choice = Expression::from(0.0);
        for k in 0..q_max {
            buy_choice += buy_vars[t][k];
            sell_choice += sell_vars[t][k];
        }
        model = model.with(constraint!(buy_choice <= 1.0));
        model = model.with(constraint!(sell_choice <= 1.0));
    }

    // Inventory feasibility with the 1-step conversion lag: outputs sold at
    // t are bounded by the running buys-minus-sells balance through t-1. The
    // optimistic regime measures the balance in chosen targets, the expected
    // regime in expected realised quantities.
    let mut balance = Expression::from(0.0);
    for t in 0..horizon {
        if t >= 1 {
            let mut sold_at_t = Expression::from(0.0);
            for k in 0..q_max {
                if problem.optimistic {
                    sold_at_t += k as f64 * sell_vars[t][k];
                } else {
                    sold_at_t += minima.out[t][k] * sell_vars[t][k];
                }
            }
            model = model.with(constraint!(sold_at_t <= balance.clone()));
        }
        for k in 0..q_max {
            if problem.optimistic {
                balance += k as f64 * buy_vars[t][k];
                balance -= k as f64 * sell_vars[t][k];
            } else {
                balance += minima.inn[t][k] * buy_vars[t][k];
                balance -= minima.out[t][k] * sell_vars[t][k];
            }
        }
    }

    // Pin the leading steps to the commitments. The sell side is always
    // pinned at t=0 (no sale without committed demand); the buy side only
    // when the caller is re-planning from a positive step.
    let pinned = problem.pinned_steps();
    for i in 0..pinned {
        let committed_sell = problem.commitments.sell_at(i);
        for k in 0..q_max {
            let value = if k == committed_sell { 1.0 } else { 0.0 };
            model = model.with(constraint!(sell_vars[i][k] == value));
        }
        if problem.step > 0 {
            let committed_buy = problem.commitments.buy_at(i);
            for k in 0..q_max {
                let value = if k == committed_buy { 1.0 } else { 0.0 };
                model = model.with(constraint!(buy_vars[i][k] == value));
            }
        }
    }

    // Commitment floors on the free steps: the expected realised quantity
    // must cover what is already contracted. Pinned steps meet their
    // commitment exactly by construction.
    for t in pinned..horizon {
        let committed_sell = problem.commitments.sell_at(t);
        if committed_sell > 0 {
            let mut expected_sell = Expression::from(0.0);
            for k in 0..q_max {
                expected_sell += minima.out[t][k] * sell_vars[t][k];
            }
            model = model.with(constraint!(expected_sell >= committed_sell as f64));
        }
    }
    // Buy side is only pinned below `step`; floors apply from there up.
    for t in problem.step..horizon {
        let committed_buy = problem.commitments.buy_at(t);
        if committed_buy > 0 {
            let mut expected_buy = Expression::from(0.0);
            for k in 0..q_max {
                expected_buy += minima.inn[t][k] * buy_vars[t][k];
            }
            model = model.with(constraint!(expected_buy >= committed_buy as f64));
        }
    }
    let time_constraints = phase_start.elapsed();

    debug!(
        "business plan MILP: horizon {horizon}, q_max {q_max}, {} binaries, regime {}",
        2 * horizon * q_max,
        if problem.optimistic {
            "optimistic"
        } else {
            "expected"
        }
    );

    // === Solve ===
    let phase_start = Instant::now();
    let solved = model.solve();
    let time_solve = phase_start.elapsed();

    let mut result = BusinessPlan {
        horizon,
        q_max,
        minima,
        p_inn: forecast.p_inn.clone(),
        p_out: forecast.p_out.clone(),
        optimistic: problem.optimistic,
        status: SolverStatus::Optimal,
        objective: None,
        timings: PlanTimings {
            variables: time_variables,
            objective: time_objective,
            constraints: time_constraints,
            solve: time_solve,
            read_back: std::time::Duration::ZERO,
        },
        buy_plan: None,
        sell_plan: None,
    };

    let solution = match solved {
        Ok(solution) => solution,
        Err(err) => {
            result.status = status_from_error(err);
            debug!("business plan solve ended without optimum: {}", result.status);
            return Ok(result);
        }
    };

    // === Read-back ===
    let phase_start = Instant::now();
    let mut buy_plan = vec![0usize; horizon];
    let mut sell_plan = vec![0usize; horizon];
    for t in 0..horizon {
        for k in 0..q_max {
            if solution.value(buy_vars[t][k]).round() as i64 == 1 {
                buy_plan[t] += k;
            }
            if solution.value(sell_vars[t][k]).round() as i64 == 1 {
                sell_plan[t] += k;
            }
        }
    }
    result.objective = Some(solution.eval(&objective));
    result.timings.read_back = phase_start.elapsed();
    result.buy_plan = Some(buy_plan);
    result.sell_plan = Some(sell_plan);

    debug!(
        "business plan solved in {:.2?}, objective {:?}",
        result.timings.solve, result.objective
    );
    Ok(result)
}
