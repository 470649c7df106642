//! FIFO spend allocation over the ledger's transaction log.

use std::collections::HashMap;

use tracing::{error, info};

use super::{Ledger, SpendError};
use crate::model::{Deduction, Points};

impl Ledger {
    /// Spend `requested` points, consuming the oldest credits first.
    ///
    /// Walks the log in timestamp order and deducts from each transaction's
    /// payer, bounded by the transaction's credited points, the amount still
    /// requested, and the payer's current balance. The balance is
    /// authoritative: a transaction whose payer was already drawn down
    /// contributes at most what the payer still has, and an exhausted payer's
    /// transactions are skipped without ending the walk.
    ///
    /// Returns one entry per payer touched, holding the (negative) total
    /// deducted from it, in first-touch order. A negative request, or a
    /// request above [`total_balance`](Ledger::total_balance), is rejected
    /// and leaves the ledger untouched.
    pub fn spend(&mut self, requested: Points) -> Result<Vec<Deduction>, SpendError> {
        if requested < 0 {
            return Err(SpendError::NegativePoints(requested));
        }

        let available = self.total_balance();
        if requested > available {
            info!(requested, available, "spend rejected");
            return Err(SpendError::InsufficientPoints {
                requested,
                available,
            });
        }

        let mut order: Vec<usize> = (0..self.transactions.len()).collect();
        // stable sort: equal timestamps consume in insertion order
        order.sort_by_key(|&i| self.transactions[i].timestamp);

        let mut remaining = requested;
        let mut deductions: Vec<Deduction> = Vec::new();
        let mut slots: HashMap<&str, usize> = HashMap::new();

        for i in order {
            if remaining <= 0 {
                break;
            }

            let tx = &self.transactions[i];
            let balance = self
                .balances
                .get_mut(&tx.payer)
                .expect("every logged payer has a balance entry");

            if *balance <= 0 {
                continue;
            }

            let amount = tx.points.min(remaining).min(*balance);
            *balance -= amount;
            remaining -= amount;

            match slots.get(tx.payer.as_str()) {
                Some(&slot) => deductions[slot].points -= amount,
                None => {
                    slots.insert(&tx.payer, deductions.len());
                    deductions.push(Deduction {
                        payer: tx.payer.clone(),
                        points: -amount,
                    });
                }
            }
        }

        if remaining > 0 {
            // the upfront total check makes a short walk impossible
            error!(requested, remaining, "spend walk under-allocated");
            debug_assert_eq!(remaining, 0, "transaction log and balances are inconsistent");
        }

        info!(requested, payers = deductions.len(), "spend applied");
        Ok(deductions)
    }
}
