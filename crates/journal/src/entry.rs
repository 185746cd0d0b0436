use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use accountech_core::{Amount, CompanyId, Entity, EntryId, LineId, UserId};

/// One side of a journal entry (immutable once the entry is accepted).
///
/// `account_name` is a denormalized reference into the company's chart; the
/// validator resolves it at acceptance time. Exactly one of `debit`/`credit`
/// may be non-zero, both non-negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalLine {
    pub id: LineId,
    pub account_name: String,
    pub description: String,
    pub debit: Amount,
    pub credit: Amount,
}

/// An accepted, balanced journal entry.
///
/// Exclusively owned by its company; immutable except for whole-entry
/// deletion (which cascades to the lines).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: EntryId,
    pub company_id: CompanyId,
    pub user_id: UserId,
    pub date: DateTime<Utc>,
    pub description: String,
    pub reference: String,
    pub lines: Vec<JournalLine>,
}

impl Entity for JournalEntry {
    type Id = EntryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// A proposed journal line, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineDraft {
    pub account: String,
    #[serde(default)]
    pub description: String,
    pub debit: Amount,
    pub credit: Amount,
}

impl LineDraft {
    pub fn debit(account: impl Into<String>, amount: Amount) -> Self {
        Self {
            account: account.into(),
            description: String::new(),
            debit: amount,
            credit: Amount::ZERO,
        }
    }

    pub fn credit(account: impl Into<String>, amount: Amount) -> Self {
        Self {
            account: account.into(),
            description: String::new(),
            debit: Amount::ZERO,
            credit: amount,
        }
    }
}

/// A proposed journal entry, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryDraft {
    pub date: DateTime<Utc>,
    pub description: String,
    pub reference: String,
    pub lines: Vec<LineDraft>,
}

impl EntryDraft {
    /// Materialize an accepted draft into an immutable entry with fresh ids.
    /// Call [`crate::validate_entry`] first; acceptance is all-or-nothing.
    pub fn into_entry(self, company_id: CompanyId, user_id: UserId) -> JournalEntry {
        JournalEntry {
            id: EntryId::new(),
            company_id,
            user_id,
            date: self.date,
            description: self.description,
            reference: self.reference,
            lines: self
                .lines
                .into_iter()
                .map(|line| JournalLine {
                    id: LineId::new(),
                    account_name: line.account,
                    description: line.description,
                    debit: line.debit,
                    credit: line.credit,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_materializes_with_fresh_line_ids() {
        let draft = EntryDraft {
            date: Utc::now(),
            description: "Initial investment".into(),
            reference: "JE-001".into(),
            lines: vec![
                LineDraft::debit("Cash", Amount::from_major(50_000)),
                LineDraft::credit("Owner's Equity", Amount::from_major(50_000)),
            ],
        };

        let entry = draft.into_entry(CompanyId::new(), UserId::new());
        assert_eq!(entry.lines.len(), 2);
        assert_ne!(entry.lines[0].id, entry.lines[1].id);
        assert_eq!(entry.lines[0].account_name, "Cash");
        assert_eq!(entry.lines[1].credit, Amount::from_major(50_000));
    }

    #[test]
    fn line_serializes_amounts_as_decimals() {
        let line = JournalLine {
            id: LineId::new(),
            account_name: "Cash".into(),
            description: String::new(),
            debit: Amount::from_minor(250_25),
            credit: Amount::ZERO,
        };
        let value = serde_json::to_value(&line).unwrap();
        assert_eq!(value["debit"], serde_json::json!(250.25));
        assert_eq!(value["credit"], serde_json::json!(0.0));
    }
}
