//! In-memory books storage.

use std::collections::HashMap;
use std::sync::RwLock;

use accountech_chart::{Account, NewAccount, default_chart, validate_new_account};
use accountech_core::{AccountId, CompanyId, DomainError, EntryId, UserId};
use accountech_journal::{EntryDraft, JournalEntry, validate_entry};

use crate::books::{BooksStore, StoreError};

#[derive(Debug, Default)]
struct CompanyBooks {
    accounts: Vec<Account>,
    entries: Vec<JournalEntry>,
}

/// In-memory implementation of [`BooksStore`].
///
/// Intended for tests and embedding. The store-wide write lock serializes
/// accepts, which covers the per-company serialization the trait demands;
/// readers always see fully committed books.
#[derive(Debug, Default)]
pub struct InMemoryBooks {
    inner: RwLock<HashMap<CompanyId, CompanyBooks>>,
}

impl InMemoryBooks {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BooksStore for InMemoryBooks {
    fn list_accounts(&self, company_id: CompanyId) -> Result<Vec<Account>, StoreError> {
        let inner = self.inner.read().map_err(|_| StoreError::LockPoisoned)?;
        let mut accounts: Vec<Account> = inner
            .get(&company_id)
            .map(|books| {
                books
                    .accounts
                    .iter()
                    .filter(|a| a.is_active)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        accounts.sort_by(|a, b| {
            (a.account_type, a.code.as_str()).cmp(&(b.account_type, b.code.as_str()))
        });
        Ok(accounts)
    }

    fn list_journal_entries(
        &self,
        company_id: CompanyId,
    ) -> Result<Vec<JournalEntry>, StoreError> {
        let inner = self.inner.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(inner
            .get(&company_id)
            .map(|books| books.entries.clone())
            .unwrap_or_default())
    }

    fn append_journal_entry(
        &self,
        company_id: CompanyId,
        user_id: UserId,
        draft: EntryDraft,
    ) -> Result<JournalEntry, StoreError> {
        // Validation happens under the write lock so the accept is serialized
        // against other accepts and account lifecycle changes.
        let mut inner = self.inner.write().map_err(|_| StoreError::LockPoisoned)?;
        let books = inner.entry(company_id).or_default();

        if let Err(err) = validate_entry(&draft, &books.accounts) {
            tracing::debug!(%company_id, error = %err, "journal entry rejected");
            return Err(err.into());
        }

        let entry = draft.into_entry(company_id, user_id);
        books.entries.push(entry.clone());
        tracing::info!(
            %company_id,
            entry_id = %entry.id,
            lines = entry.lines.len(),
            "journal entry accepted"
        );
        Ok(entry)
    }

    fn delete_journal_entry(
        &self,
        company_id: CompanyId,
        entry_id: EntryId,
    ) -> Result<(), StoreError> {
        let mut inner = self.inner.write().map_err(|_| StoreError::LockPoisoned)?;
        let books = inner
            .get_mut(&company_id)
            .ok_or(DomainError::NotFound)?;
        let position = books
            .entries
            .iter()
            .position(|e| e.id == entry_id)
            .ok_or(DomainError::NotFound)?;
        // Lines are owned by the entry, so removal cascades.
        books.entries.remove(position);
        tracing::info!(%company_id, %entry_id, "journal entry deleted");
        Ok(())
    }

    fn create_account(
        &self,
        company_id: CompanyId,
        candidate: NewAccount,
    ) -> Result<Account, StoreError> {
        let mut inner = self.inner.write().map_err(|_| StoreError::LockPoisoned)?;
        let books = inner.entry(company_id).or_default();
        validate_new_account(&candidate, &books.accounts)?;
        let account = candidate.into_account(company_id);
        books.accounts.push(account.clone());
        tracing::info!(%company_id, account_id = %account.id, code = %account.code, "account created");
        Ok(account)
    }

    fn seed_default_chart(&self, company_id: CompanyId) -> Result<Vec<Account>, StoreError> {
        let mut inner = self.inner.write().map_err(|_| StoreError::LockPoisoned)?;
        let books = inner.entry(company_id).or_default();
        if !books.accounts.is_empty() {
            return Err(DomainError::conflict("company already has accounts").into());
        }
        let chart = default_chart(company_id);
        books.accounts.extend(chart.iter().cloned());
        tracing::info!(%company_id, accounts = chart.len(), "default chart seeded");
        Ok(chart)
    }

    fn deactivate_account(
        &self,
        company_id: CompanyId,
        account_id: AccountId,
    ) -> Result<(), StoreError> {
        let mut inner = self.inner.write().map_err(|_| StoreError::LockPoisoned)?;
        let books = inner
            .get_mut(&company_id)
            .ok_or(DomainError::NotFound)?;
        let account = books
            .accounts
            .iter_mut()
            .find(|a| a.id == account_id)
            .ok_or(DomainError::NotFound)?;
        account.is_active = false;
        tracing::info!(%company_id, %account_id, "account deactivated");
        Ok(())
    }

    fn delete_account(
        &self,
        company_id: CompanyId,
        account_id: AccountId,
    ) -> Result<(), StoreError> {
        let mut inner = self.inner.write().map_err(|_| StoreError::LockPoisoned)?;
        let books = inner
            .get_mut(&company_id)
            .ok_or(DomainError::NotFound)?;
        let position = books
            .accounts
            .iter()
            .position(|a| a.id == account_id)
            .ok_or(DomainError::NotFound)?;

        let name = &books.accounts[position].name;
        let referenced = books
            .entries
            .iter()
            .flat_map(|e| &e.lines)
            .any(|line| &line.account_name == name);
        if referenced {
            return Err(DomainError::conflict(format!(
                "account '{name}' is referenced by journal lines; deactivate it instead"
            ))
            .into());
        }

        let account = books.accounts.remove(position);
        tracing::info!(%company_id, %account_id, code = %account.code, "account deleted");
        Ok(())
    }
}
