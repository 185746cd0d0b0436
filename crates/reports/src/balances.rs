//! The balance accumulator: journal lines folded into signed per-account
//! balances.
//!
//! The sign rule here is the single load-bearing algorithm of the engine:
//! debit-normal accounts (asset, expense) accumulate `debit - credit`,
//! credit-normal accounts (liability, equity, revenue) accumulate
//! `credit - debit`. Every report derives from this fold rather than sharing
//! state with the others.

use std::collections::HashMap;

use serde::Serialize;

use accountech_chart::{Account, AccountType};
use accountech_core::{Amount, REPORTING_EPSILON};
use accountech_journal::{JournalEntry, JournalLine};

/// Signed balance of one account, derived on demand (never persisted).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountBalance {
    pub account_name: String,
    pub balance: Amount,
    #[serde(rename = "type")]
    pub account_type: AccountType,
}

impl AccountBalance {
    /// Balance-consuming reports drop rows within [`REPORTING_EPSILON`] of
    /// zero. This suppresses exactly-balanced activity too, not just
    /// inactivity; inherited behavior, pinned by tests.
    pub fn is_reportable(&self) -> bool {
        self.balance.abs() > REPORTING_EPSILON
    }
}

/// A name/amount presentation row shared by the statement reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportItem {
    pub name: String,
    pub amount: Amount,
}

/// Per-line signed contribution under the normal-balance convention.
pub(crate) fn signed_delta(account_type: AccountType, line: &JournalLine) -> Amount {
    if account_type.is_debit_normal() {
        line.debit - line.credit
    } else {
        line.credit - line.debit
    }
}

/// Fold the full journal into one signed balance per posted account.
///
/// Output is in chart order and contains every account with at least one
/// posted line, including near-zero balances (consumers filter with
/// [`AccountBalance::is_reportable`]). Lines whose `account_name` resolves to
/// no chart account are skipped: the validator keeps them out at acceptance
/// time, so only a later rename or deletion can orphan a line.
///
/// Pure and idempotent: same snapshot in, same balances out.
pub fn account_balances(accounts: &[Account], entries: &[JournalEntry]) -> Vec<AccountBalance> {
    let types: HashMap<&str, AccountType> = accounts
        .iter()
        .map(|a| (a.name.as_str(), a.account_type))
        .collect();

    let mut balances: HashMap<&str, Amount> = HashMap::new();
    for entry in entries {
        for line in &entry.lines {
            let Some(&account_type) = types.get(line.account_name.as_str()) else {
                continue;
            };
            *balances.entry(line.account_name.as_str()).or_default() +=
                signed_delta(account_type, line);
        }
    }

    accounts
        .iter()
        .filter_map(|account| {
            balances.get(account.name.as_str()).map(|&balance| AccountBalance {
                account_name: account.name.clone(),
                balance,
                account_type: account.account_type,
            })
        })
        .collect()
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use accountech_core::{CompanyId, UserId};
    use accountech_journal::{EntryDraft, LineDraft};
    use chrono::{DateTime, TimeZone, Utc};

    pub fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, d, 0, 0, 0).unwrap()
    }

    pub fn chart(company_id: CompanyId) -> Vec<Account> {
        vec![
            Account::new(company_id, "1000", "Cash", AccountType::Asset),
            Account::new(company_id, "1100", "Accounts Receivable", AccountType::Asset),
            Account::new(company_id, "1500", "Equipment", AccountType::Asset),
            Account::new(company_id, "2000", "Accounts Payable", AccountType::Liability),
            Account::new(company_id, "2500", "Long-term Debt", AccountType::Liability),
            Account::new(company_id, "3000", "Owner's Equity", AccountType::Equity),
            Account::new(company_id, "4000", "Sales Revenue", AccountType::Revenue),
            Account::new(company_id, "6300", "Office Supplies Expense", AccountType::Expense),
        ]
    }

    pub fn entry(
        company_id: CompanyId,
        date: DateTime<Utc>,
        reference: &str,
        lines: Vec<LineDraft>,
    ) -> JournalEntry {
        EntryDraft {
            date,
            description: format!("entry {reference}"),
            reference: reference.to_string(),
            lines,
        }
        .into_entry(company_id, UserId::new())
    }

    /// Books with an opening investment, a cash sale, and a supplies purchase.
    pub fn sample_books() -> (Vec<Account>, Vec<JournalEntry>) {
        let company_id = CompanyId::new();
        let accounts = chart(company_id);
        let entries = vec![
            entry(
                company_id,
                day(1),
                "JE-001",
                vec![
                    LineDraft::debit("Cash", Amount::from_major(50_000)),
                    LineDraft::credit("Owner's Equity", Amount::from_major(50_000)),
                ],
            ),
            entry(
                company_id,
                day(2),
                "JE-002",
                vec![
                    LineDraft::debit("Cash", Amount::from_major(1_200)),
                    LineDraft::credit("Sales Revenue", Amount::from_major(1_200)),
                ],
            ),
            entry(
                company_id,
                day(3),
                "JE-003",
                vec![
                    LineDraft::debit("Office Supplies Expense", Amount::from_major(250)),
                    LineDraft::credit("Cash", Amount::from_major(250)),
                ],
            ),
        ];
        (accounts, entries)
    }
}
