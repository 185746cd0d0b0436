//! Default chart of accounts seeded for a new company.

use accountech_core::CompanyId;

use crate::account::{Account, AccountType};

/// The default seed chart: 19 top-level accounts covering the five types.
const DEFAULT_CHART: [(&str, &str, AccountType); 19] = [
    // Assets
    ("1000", "Cash", AccountType::Asset),
    ("1100", "Accounts Receivable", AccountType::Asset),
    ("1200", "Inventory", AccountType::Asset),
    ("1500", "Equipment", AccountType::Asset),
    ("1600", "Accumulated Depreciation - Equipment", AccountType::Asset),
    // Liabilities
    ("2000", "Accounts Payable", AccountType::Liability),
    ("2100", "Accrued Expenses", AccountType::Liability),
    ("2500", "Long-term Debt", AccountType::Liability),
    // Equity
    ("3000", "Owner's Equity", AccountType::Equity),
    ("3100", "Retained Earnings", AccountType::Equity),
    // Revenue
    ("4000", "Sales Revenue", AccountType::Revenue),
    ("4100", "Service Revenue", AccountType::Revenue),
    // Expenses
    ("5000", "Cost of Goods Sold", AccountType::Expense),
    ("6000", "Salaries Expense", AccountType::Expense),
    ("6100", "Rent Expense", AccountType::Expense),
    ("6200", "Utilities Expense", AccountType::Expense),
    ("6300", "Office Supplies Expense", AccountType::Expense),
    ("6400", "Insurance Expense", AccountType::Expense),
    ("6500", "Depreciation Expense", AccountType::Expense),
];

/// Build the default chart for a company (fresh ids, all active, no parents).
pub fn default_chart(company_id: CompanyId) -> Vec<Account> {
    DEFAULT_CHART
        .iter()
        .map(|(code, name, account_type)| Account::new(company_id, *code, *name, *account_type))
        .collect()
}
