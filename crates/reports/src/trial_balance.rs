//! Trial balance, in both of its computation modes.
//!
//! Gross-activity mode sums every account's debits and credits independently
//! (no netting); net-position mode presents signed balances on each account's
//! normal side. They answer different questions (total posting volume vs
//! where the books currently stand) and share only the output shape.

use std::collections::BTreeMap;

use serde::Serialize;

use accountech_chart::Account;
use accountech_core::{Amount, REPORTING_EPSILON};
use accountech_journal::JournalEntry;

use crate::balances::account_balances;

/// One account row: independently summed (or presented) debit and credit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrialBalanceRow {
    pub account: String,
    pub debit: Amount,
    pub credit: Amount,
}

/// The trial balance report.
///
/// `is_balanced` is a derived property: when every entry satisfied the
/// per-entry balance invariant at acceptance, the aggregate check holds by
/// construction. It is reported, not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrialBalance {
    pub rows: Vec<TrialBalanceRow>,
    pub total_debit: Amount,
    pub total_credit: Amount,
    pub is_balanced: bool,
}

impl TrialBalance {
    fn from_rows(rows: Vec<TrialBalanceRow>) -> Self {
        let total_debit: Amount = rows.iter().map(|r| r.debit).sum();
        let total_credit: Amount = rows.iter().map(|r| r.credit).sum();
        let is_balanced = (total_debit - total_credit).abs() <= REPORTING_EPSILON;
        Self {
            rows,
            total_debit,
            total_credit,
            is_balanced,
        }
    }
}

/// Gross-activity trial balance: group every journal line by account name and
/// sum the debit and credit columns independently.
///
/// Needs no chart: the grouping key is the line's account name, and no sign
/// convention applies. Rows are sorted by account name for determinism.
pub fn trial_balance(entries: &[JournalEntry]) -> TrialBalance {
    let mut sums: BTreeMap<&str, (Amount, Amount)> = BTreeMap::new();
    for entry in entries {
        for line in &entry.lines {
            let slot = sums.entry(line.account_name.as_str()).or_default();
            slot.0 += line.debit;
            slot.1 += line.credit;
        }
    }

    let rows = sums
        .into_iter()
        .map(|(account, (debit, credit))| TrialBalanceRow {
            account: account.to_string(),
            debit,
            credit,
        })
        .collect();

    TrialBalance::from_rows(rows)
}

/// Net-position trial balance: derive rows from signed balances.
///
/// A positive balance sits on the account's normal side (debit for
/// asset/expense, credit for liability/equity/revenue); a negative balance
/// flips to the opposite side. Near-zero balances are suppressed; rows keep
/// chart order.
pub fn trial_balance_net(accounts: &[Account], entries: &[JournalEntry]) -> TrialBalance {
    let rows = account_balances(accounts, entries)
        .into_iter()
        .filter(|b| b.is_reportable())
        .map(|b| {
            let magnitude = b.balance.abs();
            let on_normal_side = !b.balance.is_negative();
            let debit_side = b.account_type.is_debit_normal() == on_normal_side;
            TrialBalanceRow {
                account: b.account_name,
                debit: if debit_side { magnitude } else { Amount::ZERO },
                credit: if debit_side { Amount::ZERO } else { magnitude },
            }
        })
        .collect();

    TrialBalance::from_rows(rows)
}
