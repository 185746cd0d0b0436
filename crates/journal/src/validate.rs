//! The entry validator: the acceptance gate in front of the journal.
//!
//! Validation is all-or-nothing and reports the first violated rule, checked
//! in order: structure, per-line shape, account resolution, arithmetic
//! balance. An accepted entry is immutable; there is no line-level rollback.

use accountech_chart::Account;
use accountech_core::{Amount, DomainError, DomainResult};

use crate::entry::EntryDraft;

/// Accepted imbalance between total debits and credits: one cent.
///
/// Amounts are integer minor units internally, so this tolerance only ever
/// absorbs a rounding cent introduced at the decimal boundary; it cannot
/// mask a systematic error.
pub const BALANCE_TOLERANCE: Amount = Amount::from_minor(1);

/// Validate a proposed entry against the company's chart of accounts.
///
/// `accounts` is the company's full chart; lines must resolve to an existing,
/// **active** account by name. Returns `Ok(())` when the draft may be
/// committed.
pub fn validate_entry(draft: &EntryDraft, accounts: &[Account]) -> DomainResult<()> {
    if draft.lines.is_empty() {
        return Err(DomainError::validation("journal entry must have at least one line"));
    }
    if draft.description.trim().is_empty() {
        return Err(DomainError::validation("description is required"));
    }
    if draft.reference.trim().is_empty() {
        return Err(DomainError::validation("reference is required"));
    }

    for line in &draft.lines {
        if line.debit.is_negative() || line.credit.is_negative() {
            return Err(DomainError::validation(format!(
                "amounts must be non-negative on line for '{}'",
                line.account
            )));
        }
        if !line.debit.is_zero() && !line.credit.is_zero() {
            return Err(DomainError::validation(format!(
                "line for '{}' posts both a debit and a credit",
                line.account
            )));
        }
    }

    for line in &draft.lines {
        let known = accounts
            .iter()
            .any(|a| a.is_active && a.name == line.account);
        if !known {
            return Err(DomainError::unknown_account(line.account.clone()));
        }
    }

    let total_debit: Amount = draft.lines.iter().map(|l| l.debit).sum();
    let total_credit: Amount = draft.lines.iter().map(|l| l.credit).sum();
    let difference = total_debit - total_credit;
    if difference.abs() > BALANCE_TOLERANCE {
        return Err(DomainError::validation(format!(
            "journal entry must be balanced (debits {total_debit}, credits {total_credit}, difference {})",
            difference.abs()
        )));
    }

    Ok(())
}
