//! Report projections over the journal.
//!
//! Four pure, read-only projections (trial balance, profit & loss, balance
//! sheet, general ledger) plus the balance accumulator they derive from.
//! Every function takes an already-materialized `(accounts, entries)`
//! snapshot as arguments, reads no ambient state, and is deterministic:
//! re-running any projection on the same snapshot yields identical output,
//! so the builders may run in any order or concurrently.

pub mod balance_sheet;
pub mod balances;
pub mod general_ledger;
pub mod profit_loss;
pub mod trial_balance;

pub use balance_sheet::{AssetSection, BalanceSheet, LiabilitySection, balance_sheet};
pub use balances::{AccountBalance, ReportItem, account_balances};
pub use general_ledger::{AccountLedger, LedgerLine, general_ledger};
pub use profit_loss::{ProfitLoss, profit_loss};
pub use trial_balance::{TrialBalance, TrialBalanceRow, trial_balance, trial_balance_net};
