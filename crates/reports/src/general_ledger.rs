//! The general ledger: chronological running-balance view per account.

use chrono::{DateTime, Utc};
use serde::Serialize;

use accountech_chart::Account;
use accountech_core::Amount;
use accountech_journal::{JournalEntry, JournalLine};

use crate::balances::signed_delta;

/// One posting in an account's ledger, with the balance after that posting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerLine {
    pub date: DateTime<Utc>,
    pub description: String,
    pub reference: String,
    pub debit: Amount,
    pub credit: Amount,
    pub running_balance: Amount,
}

/// An account's reconstructed ledger.
///
/// `balance` is the final running balance and equals what the balance
/// accumulator computes for the account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountLedger {
    pub account: Account,
    pub lines: Vec<LedgerLine>,
    pub balance: Amount,
}

/// Reconstruct the general ledger from a books snapshot.
///
/// Per account: replay its lines in ascending date order, folding a running
/// balance under the normal-balance sign rule. Insertion order is the
/// tie-break for equal dates (stable sort; the model has no secondary
/// timestamp).
/// A line without its own description inherits the entry's.
///
/// Accounts with zero lines are omitted entirely. This is a structural rule,
/// not the reporting epsilon: an account whose activity nets to exactly zero
/// still appears here with its full history.
pub fn general_ledger(accounts: &[Account], entries: &[JournalEntry]) -> Vec<AccountLedger> {
    accounts
        .iter()
        .filter_map(|account| {
            let mut postings: Vec<(DateTime<Utc>, &JournalEntry, &JournalLine)> = Vec::new();
            for entry in entries {
                for line in &entry.lines {
                    if line.account_name == account.name {
                        postings.push((entry.date, entry, line));
                    }
                }
            }
            if postings.is_empty() {
                return None;
            }

            postings.sort_by_key(|(date, _, _)| *date);

            let mut balance = Amount::ZERO;
            let lines = postings
                .into_iter()
                .map(|(date, entry, line)| {
                    balance += signed_delta(account.account_type, line);
                    LedgerLine {
                        date,
                        description: if line.description.is_empty() {
                            entry.description.clone()
                        } else {
                            line.description.clone()
                        },
                        reference: entry.reference.clone(),
                        debit: line.debit,
                        credit: line.credit,
                        running_balance: balance,
                    }
                })
                .collect();

            Some(AccountLedger {
                account: account.clone(),
                lines,
                balance,
            })
        })
        .collect()
}
