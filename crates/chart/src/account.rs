use serde::{Deserialize, Serialize};

use accountech_core::{AccountId, CompanyId, DomainError, DomainResult, Entity};

/// High-level account type (determines normal balance side).
///
/// Declaration order doubles as the display ordering of a chart listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    Asset,
    Liability,
    Equity,
    Revenue,
    Expense,
}

impl AccountType {
    /// Debit-normal accounts accumulate `debit - credit`; credit-normal
    /// accounts accumulate `credit - debit`. This single convention carries
    /// the accounting identity `Assets = Liabilities + Equity` through every
    /// report.
    pub fn is_debit_normal(self) -> bool {
        matches!(self, AccountType::Asset | AccountType::Expense)
    }
}

/// Optional stored refinement of an account's balance-sheet placement.
///
/// Scoped to the account type: an asset can only carry an asset subcategory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Subcategory {
    CurrentAsset,
    NonCurrentAsset,
    CurrentLiability,
    LongTermLiability,
}

impl Subcategory {
    /// Whether this subcategory is valid for the given account type.
    pub fn matches(self, account_type: AccountType) -> bool {
        match self {
            Subcategory::CurrentAsset | Subcategory::NonCurrentAsset => {
                account_type == AccountType::Asset
            }
            Subcategory::CurrentLiability | Subcategory::LongTermLiability => {
                account_type == AccountType::Liability
            }
        }
    }
}

/// A chart-of-accounts entry, scoped to one company.
///
/// `(company_id, code)` and `(company_id, name)` are unique; journal lines
/// reference accounts by name. Accounts are retired by clearing `is_active`
/// rather than deleted while any line still references them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub company_id: CompanyId,
    pub code: String,
    pub name: String,
    #[serde(rename = "type")]
    pub account_type: AccountType,
    pub subcategory: Option<Subcategory>,
    pub parent_id: Option<AccountId>,
    pub is_active: bool,
}

impl Account {
    /// A fresh top-level active account.
    pub fn new(
        company_id: CompanyId,
        code: impl Into<String>,
        name: impl Into<String>,
        account_type: AccountType,
    ) -> Self {
        Self {
            id: AccountId::new(),
            company_id,
            code: code.into(),
            name: name.into(),
            account_type,
            subcategory: None,
            parent_id: None,
            is_active: true,
        }
    }

    pub fn with_subcategory(mut self, subcategory: Subcategory) -> Self {
        self.subcategory = Some(subcategory);
        self
    }

    pub fn with_parent(mut self, parent_id: AccountId) -> Self {
        self.parent_id = Some(parent_id);
        self
    }
}

impl Entity for Account {
    type Id = AccountId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Candidate account, as submitted for creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAccount {
    pub code: String,
    pub name: String,
    #[serde(rename = "type")]
    pub account_type: AccountType,
    pub subcategory: Option<Subcategory>,
    pub parent_id: Option<AccountId>,
}

impl NewAccount {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        account_type: AccountType,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            account_type,
            subcategory: None,
            parent_id: None,
        }
    }

    /// Materialize the candidate into an active account for `company_id`.
    /// Call [`validate_new_account`] first.
    pub fn into_account(self, company_id: CompanyId) -> Account {
        Account {
            id: AccountId::new(),
            company_id,
            code: self.code,
            name: self.name,
            account_type: self.account_type,
            subcategory: self.subcategory,
            parent_id: self.parent_id,
            is_active: true,
        }
    }
}

/// Creation-time invariants for a candidate account, checked against the
/// company's existing chart. First violated rule wins.
///
/// The hierarchy is single-level: a sub-account's parent must be a top-level
/// account of the same type. "Parent has no parent" is validated here rather
/// than left as a convention.
pub fn validate_new_account(candidate: &NewAccount, existing: &[Account]) -> DomainResult<()> {
    if candidate.code.trim().is_empty() {
        return Err(DomainError::validation("account code is required"));
    }
    if candidate.name.trim().is_empty() {
        return Err(DomainError::validation("account name is required"));
    }

    if existing.iter().any(|a| a.code == candidate.code) {
        return Err(DomainError::conflict(format!(
            "account code '{}' already exists",
            candidate.code
        )));
    }
    if existing.iter().any(|a| a.name == candidate.name) {
        return Err(DomainError::conflict(format!(
            "account name '{}' already exists",
            candidate.name
        )));
    }

    if let Some(sub) = candidate.subcategory {
        if !sub.matches(candidate.account_type) {
            return Err(DomainError::validation(format!(
                "subcategory {sub:?} does not apply to {:?} accounts",
                candidate.account_type
            )));
        }
    }

    if let Some(parent_id) = candidate.parent_id {
        let parent = existing
            .iter()
            .find(|a| a.id == parent_id)
            .ok_or_else(|| DomainError::validation("parent account does not exist"))?;
        if parent.account_type != candidate.account_type {
            return Err(DomainError::validation(format!(
                "sub-account type {:?} must match parent type {:?}",
                candidate.account_type, parent.account_type
            )));
        }
        if parent.parent_id.is_some() {
            return Err(DomainError::validation(
                "parent account already has a parent (hierarchy is single-level)",
            ));
        }
    }

    Ok(())
}
