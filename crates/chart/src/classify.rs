//! Liquidity classification for balance-sheet placement.
//!
//! Assets split into current vs non-current and liabilities into current vs
//! long-term. When an account carries an explicit [`Subcategory`] it is
//! authoritative; otherwise classification falls back to a name-based
//! heuristic inherited from the source system (documented below). Equity,
//! revenue, and expense accounts are single-bucket and never reach this
//! module.

use crate::account::{Account, AccountType, Subcategory};

/// Balance-sheet liquidity bucket.
///
/// For liabilities, `NonCurrent` is presented as "long-term".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Liquidity {
    Current,
    NonCurrent,
}

/// Name substrings marking an asset as current.
const CURRENT_ASSET_MARKERS: [&str; 3] = ["cash", "receivable", "inventory"];

/// Name substrings marking a liability as current.
const CURRENT_LIABILITY_MARKERS: [&str; 2] = ["payable", "accrued"];

/// Classify an account into its liquidity bucket.
///
/// Heuristic, not a stored fact: without a subcategory the decision is a
/// case-insensitive substring match on the account name, with a deterministic
/// non-current else-branch. Checked type-first, substring-second, so ties
/// cannot occur.
pub fn classify(account: &Account) -> Liquidity {
    if let Some(sub) = account.subcategory {
        return match sub {
            Subcategory::CurrentAsset | Subcategory::CurrentLiability => Liquidity::Current,
            Subcategory::NonCurrentAsset | Subcategory::LongTermLiability => Liquidity::NonCurrent,
        };
    }

    let name = account.name.to_lowercase();
    let markers: &[&str] = match account.account_type {
        AccountType::Asset => &CURRENT_ASSET_MARKERS,
        AccountType::Liability => &CURRENT_LIABILITY_MARKERS,
        // Single-bucket types; callers route them without classification.
        AccountType::Equity | AccountType::Revenue | AccountType::Expense => {
            return Liquidity::Current;
        }
    };

    if markers.iter().any(|m| name.contains(m)) {
        Liquidity::Current
    } else {
        Liquidity::NonCurrent
    }
}
