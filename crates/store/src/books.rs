//! The storage interface the ledger engine consumes.

use thiserror::Error;

use accountech_chart::{Account, NewAccount};
use accountech_core::{AccountId, CompanyId, DomainError, EntryId, UserId};
use accountech_journal::{EntryDraft, JournalEntry};

/// Storage-layer error.
///
/// Domain failures (validation, unknown account, not found) pass through
/// unchanged; the only failure the store adds of its own is a poisoned lock.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("store lock poisoned")]
    LockPoisoned,
}

/// Company-scoped bookkeeping storage.
///
/// Implementations must hand the engine consistent snapshots: a listing never
/// observes a partially committed entry, and `append_journal_entry` runs the
/// entry validator and commits all-or-nothing. Serializing accepts per
/// company (so two simultaneous submissions cannot both validate against a
/// total that only balances once) is the implementation's responsibility.
pub trait BooksStore {
    /// Active accounts of the company, ordered by `(type, code)`.
    fn list_accounts(&self, company_id: CompanyId) -> Result<Vec<Account>, StoreError>;

    /// All journal entries of the company, in acceptance order, lines nested.
    fn list_journal_entries(&self, company_id: CompanyId)
    -> Result<Vec<JournalEntry>, StoreError>;

    /// Validate and commit a proposed entry. All-or-nothing: a rejected draft
    /// leaves the books untouched; an accepted entry is immutable.
    fn append_journal_entry(
        &self,
        company_id: CompanyId,
        user_id: UserId,
        draft: EntryDraft,
    ) -> Result<JournalEntry, StoreError>;

    /// Delete an entry and (by ownership) its lines.
    fn delete_journal_entry(
        &self,
        company_id: CompanyId,
        entry_id: EntryId,
    ) -> Result<(), StoreError>;

    /// Create one account after checking the chart invariants.
    fn create_account(
        &self,
        company_id: CompanyId,
        candidate: NewAccount,
    ) -> Result<Account, StoreError>;

    /// Bulk-seed the default chart for a company with no accounts yet.
    fn seed_default_chart(&self, company_id: CompanyId) -> Result<Vec<Account>, StoreError>;

    /// Logically retire an account (it stops accepting new postings but keeps
    /// its history).
    fn deactivate_account(
        &self,
        company_id: CompanyId,
        account_id: AccountId,
    ) -> Result<(), StoreError>;

    /// Hard-delete an account. Refused while any journal line still
    /// references it by name.
    fn delete_account(
        &self,
        company_id: CompanyId,
        account_id: AccountId,
    ) -> Result<(), StoreError>;
}
