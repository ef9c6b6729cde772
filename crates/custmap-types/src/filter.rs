//! Classification filter predicates.
//!
//! Filters never remove nodes from a built tree; they decide which scenarios
//! are selectable and which rendered nodes are dimmed.

use serde::{Deserialize, Serialize};

use crate::record::{AccountRecord, CustomerRecord, Scenario};

/// Three optional scalar predicates supplied by the filter controls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry_sector: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_channel: Option<String>,
}

impl FilterState {
    pub fn is_empty(&self) -> bool {
        self.customer_type.is_none()
            && self.industry_sector.is_none()
            && self.sales_channel.is_none()
    }

    /// Whether a scenario stays selectable: customer type and industry are
    /// checked against the primary customer, the sales channel against any
    /// account.
    pub fn matches_scenario(&self, scenario: &Scenario) -> bool {
        self.matches_customer(&scenario.customer)
            && match self.sales_channel.as_deref() {
                Some(channel) => scenario
                    .accounts
                    .iter()
                    .any(|account| account.sales_channel.as_deref() == Some(channel)),
                None => true,
            }
    }

    /// Customer-type and industry predicates against one customer record.
    pub fn matches_customer(&self, customer: &CustomerRecord) -> bool {
        let type_ok = match self.customer_type.as_deref() {
            Some(wanted) => customer.customer_type.as_deref() == Some(wanted),
            None => true,
        };
        let industry_ok = match self.industry_sector.as_deref() {
            Some(wanted) => customer.industry_sector.as_deref() == Some(wanted),
            None => true,
        };
        type_ok && industry_ok
    }

    /// Channel predicate against one account record.
    pub fn matches_account(&self, account: &AccountRecord) -> bool {
        match self.sales_channel.as_deref() {
            Some(wanted) => account.sales_channel.as_deref() == Some(wanted),
            None => true,
        }
    }
}

/// Most frequent sales channel across a scenario's accounts. Ties resolve to
/// the first channel encountered in account order, which keeps the result
/// stable across rebuilds.
pub fn dominant_channel(scenario: &Scenario) -> Option<&str> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for account in &scenario.accounts {
        let Some(channel) = account.sales_channel.as_deref() else {
            continue;
        };
        match counts.iter_mut().find(|(name, _)| *name == channel) {
            Some((_, count)) => *count += 1,
            None => counts.push((channel, 1)),
        }
    }
    let mut best: Option<(&str, usize)> = None;
    for (name, count) in counts {
        if best.map(|(_, n)| count > n).unwrap_or(true) {
            best = Some((name, count));
        }
    }
    best.map(|(name, _)| name)
}
