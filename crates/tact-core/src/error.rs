//! Unified error types for the tact ecosystem
//!
//! This module provides a common error type [`TactError`] that can represent
//! errors from any part of the system. Invalid input is fatal to a call and
//! surfaces here; solver outcomes (infeasible, unbounded) are *data* and are
//! reported in result types, never as errors.
//!
//! # Example
//!
//! ```ignore
//! use tact_core::{TactError, TactResult};
//!
//! fn plan_cycle(agent_id: &str) -> TactResult<()> {
//!     let outcome = sign_pending_agreements(agent_id)?;
//!     apply(outcome)?;
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Unified error type for all tact operations.
///
/// This enum provides a common error representation across the domain model
/// and the solvers, allowing validation, configuration and solver-interaction
/// failures to be handled uniformly.
#[derive(Error, Debug)]
pub enum TactError {
    /// Input validation errors (malformed agreements, bad probabilities, ...)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Solver interaction errors (backend misuse, not solution statuses)
    #[error("Solver error: {0}")]
    Solver(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic errors (for wrapping external errors)
    #[error("{0}")]
    Other(String),
}

/// Convenience type alias for Results using TactError.
pub type TactResult<T> = Result<T, TactError>;

// Conversion from anyhow::Error
impl From<anyhow::Error> for TactError {
    fn from(err: anyhow::Error) -> Self {
        TactError::Other(err.to_string())
    }
}

// Conversion from string-like types for convenience
impl From<String> for TactError {
    fn from(s: String) -> Self {
        TactError::Other(s)
    }
}

impl From<&str> for TactError {
    fn from(s: &str) -> Self {
        TactError::Other(s.to_string())
    }
}
