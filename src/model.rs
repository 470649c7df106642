//! Core domain types for the points ledger.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Named source of credited points.
pub type Payer = String;

/// Integer point amount.
pub type Points = i64;

/// A credit recorded in the ledger's log.
///
/// Immutable once appended: a spend adjusts the balance aggregate, never the
/// recorded point value.
#[derive(Debug, Clone)]
pub struct Transaction {
    pub payer: Payer,
    pub points: Points,
    pub timestamp: DateTime<Utc>,
}

/// Total amount one spend deducted from one payer; `points` is negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Deduction {
    pub payer: Payer,
    pub points: Points,
}
