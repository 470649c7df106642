//! Loyalty-points ledger.
//!
//! The ledger owns the append-only transaction log and the per-payer balance
//! aggregate derived from it. Credits append to the log and bump a balance;
//! spends walk the log oldest-first (see [`spend`](Ledger::spend)) and only
//! ever touch the aggregate.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::model::{Payer, Points, Transaction};

mod error;
mod spend;

pub use error::{CreditError, SpendError};

/// Append-only transaction log plus derived per-payer balances.
///
/// Invariants: every payer referenced by the log has a balance entry, and no
/// balance is ever negative. The sum of balances equals credited minus spent
/// points.
#[derive(Debug, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    balances: HashMap<Payer, Points>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit `points` to `payer` at `timestamp`.
    ///
    /// Appends a transaction to the log and increments the payer's balance,
    /// inserting a zero entry on first reference. Zero and negative credits
    /// are rejected and leave the ledger untouched.
    pub fn credit(
        &mut self,
        payer: Payer,
        points: Points,
        timestamp: DateTime<Utc>,
    ) -> Result<(), CreditError> {
        if points <= 0 {
            return Err(CreditError::NonPositivePoints(points));
        }

        info!(payer = %payer, points, timestamp = %timestamp, "credit applied");

        self.transactions.push(Transaction {
            payer: payer.clone(),
            points,
            timestamp,
        });
        *self.balances.entry(payer).or_insert(0) += points;

        Ok(())
    }

    /// Current balance for one payer; payers never credited are at zero.
    pub fn balance_of(&self, payer: &str) -> Points {
        self.balances.get(payer).copied().unwrap_or(0)
    }

    /// Sum of all payer balances.
    pub fn total_balance(&self) -> Points {
        self.balances.values().sum()
    }

    /// Every payer balance, including payers spent down to exactly zero.
    pub fn balances(&self) -> &HashMap<Payer, Points> {
        &self.balances
    }

    /// Transactions in ascending timestamp order; ties keep insertion order.
    pub fn transactions_oldest_first(&self) -> Vec<&Transaction> {
        let mut transactions: Vec<&Transaction> = self.transactions.iter().collect();
        // sort_by_key is stable, so equal timestamps stay in insertion order
        transactions.sort_by_key(|tx| tx.timestamp);
        transactions
    }
}
