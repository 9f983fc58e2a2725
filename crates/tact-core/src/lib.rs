//! # tact-core: Trading Agent Decision Model
//!
//! Provides the domain model shared by the tact solvers: discrete quantity
//! distributions with the truncated-min kernel, market forecasts, commitment
//! vectors, bilateral agreements with partner trust, and the unified error
//! type.
//!
//! ## Design Philosophy
//!
//! Everything here is a plain value type owned by a single solve call. There
//! is no cross-call state, no interior mutability and no I/O: the negotiation
//! runtime, the trust subsystem and the forecasting subsystem live elsewhere
//! and hand their outputs to the solvers through these types.
//!
//! ## Quick Start
//!
//! ```rust
//! use tact_core::{Agreement, Pmf, TrustMap, partner_trust};
//!
//! // An agreement to sell one output unit at time 6 for 110.0 per unit.
//! let agreement = Agreement::sell(1, 6, 110.0, "Monty", "OTHER");
//!
//! let trust = TrustMap::from([("OTHER".to_string(), 0.75)]);
//! assert_eq!(partner_trust("Monty", &agreement, &trust).unwrap(), 0.75);
//!
//! // E[min(y, X)] for a quantity distribution, used by the plan solver.
//! let pmf: Pmf = [(0, 0.5), (2, 0.5)].into_iter().collect();
//! assert_eq!(pmf.min_expectation(3), vec![0.0, 0.5, 1.0]);
//! ```

pub mod agreement;
pub mod error;
pub mod forecast;
pub mod pmf;

pub use agreement::{partner_trust, Agreement, TrustMap};
pub use error::{TactError, TactResult};
pub use forecast::{Commitments, Forecast};
pub use pmf::Pmf;
