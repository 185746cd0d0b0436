//! Profit & loss statement.

use serde::Serialize;

use accountech_chart::{Account, AccountType};
use accountech_core::Amount;
use accountech_journal::JournalEntry;

use crate::balances::{ReportItem, account_balances};

/// The profit & loss report: revenue and expense positions plus net income.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfitLoss {
    pub revenue: Vec<ReportItem>,
    pub expenses: Vec<ReportItem>,
    pub total_revenue: Amount,
    pub total_expenses: Amount,
    pub net_income: Amount,
}

/// Build the profit & loss from a books snapshot.
///
/// Restricted to revenue and expense accounts; signed balances under the
/// normal-balance convention; near-zero rows suppressed; rows in chart order.
/// `net_income = total_revenue - total_expenses` and may be negative.
pub fn profit_loss(accounts: &[Account], entries: &[JournalEntry]) -> ProfitLoss {
    let mut revenue = Vec::new();
    let mut expenses = Vec::new();

    for balance in account_balances(accounts, entries) {
        if !balance.is_reportable() {
            continue;
        }
        let item = ReportItem {
            name: balance.account_name,
            amount: balance.balance,
        };
        match balance.account_type {
            AccountType::Revenue => revenue.push(item),
            AccountType::Expense => expenses.push(item),
            _ => {}
        }
    }

    let total_revenue: Amount = revenue.iter().map(|i| i.amount).sum();
    let total_expenses: Amount = expenses.iter().map(|i| i.amount).sum();

    ProfitLoss {
        revenue,
        expenses,
        total_revenue,
        total_expenses,
        net_income: total_revenue - total_expenses,
    }
}
