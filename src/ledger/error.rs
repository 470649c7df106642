//! Error types for ledger operations.

use thiserror::Error;

use crate::model::Points;

/// Error during credit processing.
#[derive(Debug, Error)]
pub enum CreditError {
    #[error("credit must be a positive number of points, got {0}")]
    NonPositivePoints(Points),
}

/// Error during spend processing.
#[derive(Debug, Error)]
pub enum SpendError {
    #[error("cannot spend a negative number of points ({0})")]
    NegativePoints(Points),

    #[error("insufficient points: requested {requested}, available {available}")]
    InsufficientPoints { requested: Points, available: Points },
}
