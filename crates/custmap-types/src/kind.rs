use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Closed set of object kinds rendered in the hierarchy diagram.
///
/// Every node in a built tree carries exactly one kind; layout partitioning,
/// legend toggles and filter dimming all dispatch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeKind {
    GlobalCustomer,
    Customer,
    Account,
    Contract,
    Billing,
    Address,
    Contact,
    Platform,
}

impl NodeKind {
    /// All kinds in legend order.
    pub const ALL: [NodeKind; 8] = [
        NodeKind::GlobalCustomer,
        NodeKind::Customer,
        NodeKind::Account,
        NodeKind::Contract,
        NodeKind::Billing,
        NodeKind::Address,
        NodeKind::Contact,
        NodeKind::Platform,
    ];

    /// Wire/key form (`GLOBAL_CUSTOMER`, `ACCOUNT`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::GlobalCustomer => "GLOBAL_CUSTOMER",
            NodeKind::Customer => "CUSTOMER",
            NodeKind::Account => "ACCOUNT",
            NodeKind::Contract => "CONTRACT",
            NodeKind::Billing => "BILLING",
            NodeKind::Address => "ADDRESS",
            NodeKind::Contact => "CONTACT",
            NodeKind::Platform => "PLATFORM",
        }
    }

    /// Human-readable legend label.
    pub fn label(&self) -> &'static str {
        match self {
            NodeKind::GlobalCustomer => "Global Customer",
            NodeKind::Customer => "Customer",
            NodeKind::Account => "Account",
            NodeKind::Contract => "Contract",
            NodeKind::Billing => "Billing",
            NodeKind::Address => "Address",
            NodeKind::Contact => "Contact",
            NodeKind::Platform => "Platform",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        NodeKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| format!("unknown node kind: {}", s))
    }
}
