//! Per-step truncated-min tables for a whole forecast.
//!
//! The plan solver needs `E[min(k, Q)]` for every target `k` and every time
//! step, on both market sides. This is a thin fan-out of
//! [`Pmf::min_expectation`] over the forecast.

use serde::Serialize;
use tact_core::Forecast;

/// Truncated-min tables per time step, one row per step of length `q_max`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MinExpectations {
    /// `inn[t][k] = E[min(k, Q_inn[t])]`.
    pub inn: Vec<Vec<f64>>,
    /// `out[t][k] = E[min(k, Q_out[t])]`.
    pub out: Vec<Vec<f64>>,
}

/// Compute both table families for `forecast` with targets in `[0, q_max)`.
pub fn get_minima(forecast: &Forecast, q_max: usize) -> MinExpectations {
    MinExpectations {
        inn: forecast
            .q_inn
            .iter()
            .map(|pmf| pmf.min_expectation(q_max))
            .collect(),
        out: forecast
            .q_out
            .iter()
            .map(|pmf| pmf.min_expectation(q_max))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tact_core::Pmf;

    fn forecast_with_mass() -> Forecast {
        let mut forecast = Forecast::new(3);
        forecast.q_inn[0].set(2, 1.0);
        forecast.q_inn[1].set(1, 0.5);
        forecast.q_inn[1].set(3, 0.5);
        forecast.q_out[2].set(0, 0.25);
        forecast.q_out[2].set(4, 0.75);
        forecast
    }

    #[test]
    fn test_matches_per_step_kernel() {
        let forecast = forecast_with_mass();
        let q_max = 5;
        let minima = get_minima(&forecast, q_max);
        for t in 0..forecast.horizon() {
            assert_eq!(minima.inn[t], forecast.q_inn[t].min_expectation(q_max));
            assert_eq!(minima.out[t], forecast.q_out[t].min_expectation(q_max));
        }
    }

    #[test]
    fn test_shapes() {
        let minima = get_minima(&forecast_with_mass(), 7);
        assert_eq!(minima.inn.len(), 3);
        assert_eq!(minima.out.len(), 3);
        assert!(minima.inn.iter().all(|row| row.len() == 7));
        assert!(minima.out.iter().all(|row| row.len() == 7));
    }

    #[test]
    fn test_tables_are_non_negative() {
        let mut forecast = Forecast::new(2);
        forecast.q_inn[0] = Pmf::from_iter([(0, 0.9), (1, 0.1)]);
        let minima = get_minima(&forecast, 4);
        for row in minima.inn.iter().chain(minima.out.iter()) {
            assert!(row.iter().all(|e| *e >= 0.0));
        }
    }
}
