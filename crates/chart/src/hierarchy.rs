//! Parent/child grouping of the chart for display.

use serde::Serialize;

use crate::account::Account;

/// A top-level account together with its sub-accounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountNode {
    pub account: Account,
    pub children: Vec<Account>,
}

/// Group a flat chart into display nodes: parents first (in input order),
/// children attached to their parent in input order.
///
/// The hierarchy is validated single-level at creation, so one pass suffices.
/// A child whose parent is missing from the slice is surfaced as its own
/// top-level node rather than dropped.
pub fn hierarchy(accounts: &[Account]) -> Vec<AccountNode> {
    let mut nodes: Vec<AccountNode> = accounts
        .iter()
        .filter(|a| a.parent_id.is_none())
        .map(|a| AccountNode {
            account: a.clone(),
            children: Vec::new(),
        })
        .collect();

    for child in accounts.iter().filter(|a| a.parent_id.is_some()) {
        match nodes
            .iter_mut()
            .find(|n| Some(n.account.id) == child.parent_id)
        {
            Some(parent) => parent.children.push(child.clone()),
            None => nodes.push(AccountNode {
                account: child.clone(),
                children: Vec::new(),
            }),
        }
    }

    nodes
}
