pub mod http;
pub mod ledger;
pub mod model;

pub use ledger::Ledger;
pub use model::{Deduction, Payer, Points, Transaction};
