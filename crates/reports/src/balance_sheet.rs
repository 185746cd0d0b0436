//! Balance sheet.
//!
//! Asset and liability balances are routed through the chart's liquidity
//! classifier into current/non-current (assets) and current/long-term
//! (liabilities) sections; equity is a flat list.

use serde::Serialize;

use accountech_chart::{Account, AccountType, Liquidity, classify};
use accountech_core::{Amount, REPORTING_EPSILON};
use accountech_journal::JournalEntry;

use crate::balances::{ReportItem, account_balances};

/// Asset side of the sheet, split by liquidity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AssetSection {
    pub current: Vec<ReportItem>,
    pub non_current: Vec<ReportItem>,
}

/// Liability side of the sheet, split by maturity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LiabilitySection {
    pub current: Vec<ReportItem>,
    pub long_term: Vec<ReportItem>,
}

/// The balance sheet report.
///
/// `is_balanced` checks the accounting equation
/// `assets = liabilities + equity` within the reporting tolerance. It is an
/// emergent property of correct entries: an imbalance signals upstream data
/// corruption (an account type changed after posting, an orphaned line) and
/// is surfaced to the consumer, never corrected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BalanceSheet {
    pub assets: AssetSection,
    pub liabilities: LiabilitySection,
    pub equity: Vec<ReportItem>,
    pub total_assets: Amount,
    pub total_liabilities: Amount,
    pub total_equity: Amount,
    pub is_balanced: bool,
}

/// Build the balance sheet from a books snapshot.
///
/// Restricted to asset, liability, and equity accounts; signed balances under
/// the normal-balance convention; near-zero rows suppressed; rows in chart
/// order within each section. An unbalanced sheet additionally emits a
/// `tracing` warning.
pub fn balance_sheet(accounts: &[Account], entries: &[JournalEntry]) -> BalanceSheet {
    let mut assets = AssetSection::default();
    let mut liabilities = LiabilitySection::default();
    let mut equity = Vec::new();

    for balance in account_balances(accounts, entries) {
        if !balance.is_reportable() {
            continue;
        }
        // Classification needs the full account record (name heuristic or
        // stored subcategory), so resolve it from the chart.
        let Some(account) = accounts.iter().find(|a| a.name == balance.account_name) else {
            continue;
        };
        let item = ReportItem {
            name: balance.account_name,
            amount: balance.balance,
        };
        match account.account_type {
            AccountType::Asset => match classify(account) {
                Liquidity::Current => assets.current.push(item),
                Liquidity::NonCurrent => assets.non_current.push(item),
            },
            AccountType::Liability => match classify(account) {
                Liquidity::Current => liabilities.current.push(item),
                Liquidity::NonCurrent => liabilities.long_term.push(item),
            },
            AccountType::Equity => equity.push(item),
            AccountType::Revenue | AccountType::Expense => {}
        }
    }

    let total_assets: Amount = assets
        .current
        .iter()
        .chain(&assets.non_current)
        .map(|i| i.amount)
        .sum();
    let total_liabilities: Amount = liabilities
        .current
        .iter()
        .chain(&liabilities.long_term)
        .map(|i| i.amount)
        .sum();
    let total_equity: Amount = equity.iter().map(|i| i.amount).sum();

    let difference = total_assets - (total_liabilities + total_equity);
    let is_balanced = difference.abs() <= REPORTING_EPSILON;
    if !is_balanced {
        tracing::warn!(
            %total_assets,
            %total_liabilities,
            %total_equity,
            %difference,
            "balance sheet does not balance; upstream data is inconsistent"
        );
    }

    BalanceSheet {
        assets,
        liabilities,
        equity,
        total_assets,
        total_liabilities,
        total_equity,
        is_balanced,
    }
}
