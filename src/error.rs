//! Error types for the dealership.
//!
//! Lookups that miss and pops from empty collections are not errors; they
//! come back as `None`. Everything here is a caller error, a broken input
//! file, or a communication failure with the dealership actor.

use thiserror::Error;

/// Errors that can occur during dealership operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DealershipError {
    /// Recommendations need a strictly positive, finite budget.
    #[error("Invalid budget: {0} (must be greater than zero)")]
    InvalidBudget(f64),

    /// Car prices must be finite and non-negative.
    #[error("Invalid price: {0}")]
    InvalidPrice(f64),

    /// The workflow graph has no department at this index.
    #[error("Unknown department index: {0}")]
    UnknownDepartment(usize),

    /// A price token in the catalog could not be parsed.
    #[error("Catalog price #{position} is not a number: {token:?}")]
    Catalog { position: usize, token: String },

    /// An order log line does not have the expected shape.
    #[error("Malformed order log line: {0}")]
    OrderLog(String),

    /// Reading a catalog file failed.
    #[error("I/O error: {0}")]
    Io(String),

    /// The inventory and the price index disagree about which cars exist.
    #[error("Inventory inconsistency: {0}")]
    Inconsistent(String),

    /// An error occurred while communicating with the dealership actor.
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

impl From<std::io::Error> for DealershipError {
    fn from(err: std::io::Error) -> Self {
        DealershipError::Io(err.to_string())
    }
}

impl From<String> for DealershipError {
    fn from(msg: String) -> Self {
        DealershipError::ActorCommunication(msg)
    }
}
