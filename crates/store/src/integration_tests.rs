//! End-to-end tests: accept entries through the store, compute every report.

use chrono::{DateTime, TimeZone, Utc};

use accountech_chart::{AccountType, NewAccount};
use accountech_core::{Amount, CompanyId, DomainError, EntryId, UserId};
use accountech_journal::{EntryDraft, LineDraft};
use accountech_reports::{balance_sheet, general_ledger, profit_loss, trial_balance, trial_balance_net};

use crate::books::{BooksStore, StoreError};
use crate::in_memory::InMemoryBooks;

fn day(d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, d, 0, 0, 0).unwrap()
}

fn draft(date: DateTime<Utc>, reference: &str, lines: Vec<LineDraft>) -> EntryDraft {
    EntryDraft {
        date,
        description: format!("entry {reference}"),
        reference: reference.to_string(),
        lines,
    }
}

fn seeded_store() -> (InMemoryBooks, CompanyId, UserId) {
    accountech_observability::init();
    let store = InMemoryBooks::new();
    let company_id = CompanyId::new();
    store.seed_default_chart(company_id).unwrap();
    (store, company_id, UserId::new())
}

#[test]
fn accept_post_and_report_pipeline() {
    let (store, company_id, user_id) = seeded_store();

    store
        .append_journal_entry(
            company_id,
            user_id,
            draft(
                day(1),
                "JE-001",
                vec![
                    LineDraft::debit("Cash", Amount::from_major(50_000)),
                    LineDraft::credit("Owner's Equity", Amount::from_major(50_000)),
                ],
            ),
        )
        .unwrap();
    store
        .append_journal_entry(
            company_id,
            user_id,
            draft(
                day(2),
                "JE-002",
                vec![
                    LineDraft::debit("Office Supplies Expense", Amount::from_major(250)),
                    LineDraft::credit("Cash", Amount::from_major(250)),
                ],
            ),
        )
        .unwrap();

    let accounts = store.list_accounts(company_id).unwrap();
    let entries = store.list_journal_entries(company_id).unwrap();

    let tb = trial_balance(&entries);
    assert_eq!(tb.total_debit, Amount::from_major(50_250));
    assert_eq!(tb.total_credit, Amount::from_major(50_250));
    assert!(tb.is_balanced);

    let net = trial_balance_net(&accounts, &entries);
    let cash = net.rows.iter().find(|r| r.account == "Cash").unwrap();
    assert_eq!(cash.debit, Amount::from_major(49_750));

    let pl = profit_loss(&accounts, &entries);
    assert_eq!(pl.expenses[0].name, "Office Supplies Expense");
    assert_eq!(pl.expenses[0].amount, Amount::from_major(250));
    assert_eq!(pl.net_income, Amount::from_major(-250));

    let bs = balance_sheet(&accounts, &entries);
    assert_eq!(bs.total_assets, Amount::from_major(49_750));
    assert_eq!(bs.total_equity, Amount::from_major(50_000));
    // Unclosed expense activity: the sheet reports the gap, nothing hides it.
    assert!(!bs.is_balanced);

    let ledgers = general_ledger(&accounts, &entries);
    let cash_ledger = ledgers.iter().find(|l| l.account.name == "Cash").unwrap();
    assert_eq!(cash_ledger.balance, Amount::from_major(49_750));
    assert_eq!(
        cash_ledger.lines.last().unwrap().running_balance,
        cash_ledger.balance
    );
}

#[test]
fn rejected_draft_leaves_the_books_untouched() {
    let (store, company_id, user_id) = seeded_store();

    let err = store
        .append_journal_entry(
            company_id,
            user_id,
            draft(
                day(1),
                "JE-001",
                vec![
                    LineDraft::debit("Cash", Amount::from_major(250)),
                    LineDraft::credit("Owner's Equity", Amount::from_major(200)),
                ],
            ),
        )
        .unwrap_err();
    assert!(matches!(err, StoreError::Domain(DomainError::Validation(_))));
    assert!(store.list_journal_entries(company_id).unwrap().is_empty());
}

#[test]
fn deleting_an_entry_cascades_to_its_lines() {
    let (store, company_id, user_id) = seeded_store();

    let entry = store
        .append_journal_entry(
            company_id,
            user_id,
            draft(
                day(1),
                "JE-001",
                vec![
                    LineDraft::debit("Cash", Amount::from_major(100)),
                    LineDraft::credit("Sales Revenue", Amount::from_major(100)),
                ],
            ),
        )
        .unwrap();

    store.delete_journal_entry(company_id, entry.id).unwrap();
    assert!(store.list_journal_entries(company_id).unwrap().is_empty());

    let accounts = store.list_accounts(company_id).unwrap();
    assert!(trial_balance_net(&accounts, &[]).rows.is_empty());

    let err = store
        .delete_journal_entry(company_id, EntryId::new())
        .unwrap_err();
    assert!(matches!(err, StoreError::Domain(DomainError::NotFound)));
}

#[test]
fn deactivated_accounts_stop_accepting_postings() {
    let (store, company_id, user_id) = seeded_store();

    let cash = store
        .list_accounts(company_id)
        .unwrap()
        .into_iter()
        .find(|a| a.name == "Cash")
        .unwrap();
    store.deactivate_account(company_id, cash.id).unwrap();

    let err = store
        .append_journal_entry(
            company_id,
            user_id,
            draft(
                day(1),
                "JE-001",
                vec![
                    LineDraft::debit("Cash", Amount::from_major(10)),
                    LineDraft::credit("Owner's Equity", Amount::from_major(10)),
                ],
            ),
        )
        .unwrap_err();
    assert!(matches!(
        err,
        StoreError::Domain(DomainError::UnknownAccount(name)) if name == "Cash"
    ));

    // Retired accounts drop out of the active listing too.
    assert!(
        store
            .list_accounts(company_id)
            .unwrap()
            .iter()
            .all(|a| a.name != "Cash")
    );
}

#[test]
fn referenced_accounts_cannot_be_hard_deleted() {
    let (store, company_id, user_id) = seeded_store();

    let cash = store
        .list_accounts(company_id)
        .unwrap()
        .into_iter()
        .find(|a| a.name == "Cash")
        .unwrap();

    let entry = store
        .append_journal_entry(
            company_id,
            user_id,
            draft(
                day(1),
                "JE-001",
                vec![
                    LineDraft::debit("Cash", Amount::from_major(10)),
                    LineDraft::credit("Owner's Equity", Amount::from_major(10)),
                ],
            ),
        )
        .unwrap();

    let err = store.delete_account(company_id, cash.id).unwrap_err();
    assert!(matches!(err, StoreError::Domain(DomainError::Conflict(_))));

    // Once no line references it, deletion goes through.
    store.delete_journal_entry(company_id, entry.id).unwrap();
    store.delete_account(company_id, cash.id).unwrap();
}

#[test]
fn seeding_twice_is_a_conflict() {
    let (store, company_id, _) = seeded_store();
    let err = store.seed_default_chart(company_id).unwrap_err();
    assert!(matches!(err, StoreError::Domain(DomainError::Conflict(_))));
}

#[test]
fn account_creation_enforces_chart_invariants() {
    let (store, company_id, _) = seeded_store();

    let petty = store
        .create_account(
            company_id,
            NewAccount {
                code: "1010".into(),
                name: "Petty Cash".into(),
                account_type: AccountType::Asset,
                subcategory: None,
                parent_id: Some(
                    store
                        .list_accounts(company_id)
                        .unwrap()
                        .into_iter()
                        .find(|a| a.name == "Cash")
                        .unwrap()
                        .id,
                ),
            },
        )
        .unwrap();

    // A grandchild is rejected at creation.
    let err = store
        .create_account(
            company_id,
            NewAccount {
                code: "1011".into(),
                name: "Desk Drawer Cash".into(),
                account_type: AccountType::Asset,
                subcategory: None,
                parent_id: Some(petty.id),
            },
        )
        .unwrap_err();
    assert!(matches!(err, StoreError::Domain(DomainError::Validation(_))));

    let err = store
        .create_account(company_id, NewAccount::new("1000", "Vault Cash", AccountType::Asset))
        .unwrap_err();
    assert!(matches!(err, StoreError::Domain(DomainError::Conflict(_))));
}

#[test]
fn companies_are_isolated() {
    let (store, company_a, user_id) = seeded_store();
    let company_b = CompanyId::new();
    store.seed_default_chart(company_b).unwrap();

    store
        .append_journal_entry(
            company_a,
            user_id,
            draft(
                day(1),
                "JE-001",
                vec![
                    LineDraft::debit("Cash", Amount::from_major(500)),
                    LineDraft::credit("Sales Revenue", Amount::from_major(500)),
                ],
            ),
        )
        .unwrap();

    assert_eq!(store.list_journal_entries(company_a).unwrap().len(), 1);
    assert!(store.list_journal_entries(company_b).unwrap().is_empty());
}

#[test]
fn listings_are_ordered_by_type_then_code() {
    let (store, company_id, _) = seeded_store();
    let accounts = store.list_accounts(company_id).unwrap();
    let pairs: Vec<(AccountType, &str)> = accounts
        .iter()
        .map(|a| (a.account_type, a.code.as_str()))
        .collect();
    let mut sorted = pairs.clone();
    sorted.sort();
    assert_eq!(pairs, sorted);
    assert_eq!(pairs[0], (AccountType::Asset, "1000"));
}
