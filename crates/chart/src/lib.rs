//! Chart of accounts domain module.
//!
//! This crate contains the typed chart of accounts: account records and their
//! creation invariants, the liquidity classification used by the balance
//! sheet, single-level parent/child grouping for display, and the default
//! seed chart a new company starts from. Pure domain logic (no IO, no HTTP,
//! no storage).

pub mod account;
pub mod classify;
pub mod hierarchy;
pub mod seed;

pub use account::{Account, AccountType, NewAccount, Subcategory, validate_new_account};
pub use classify::{Liquidity, classify};
pub use hierarchy::{AccountNode, hierarchy};
pub use seed::default_chart;
