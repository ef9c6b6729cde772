//! Typed hierarchy tree built from one scenario.
//!
//! Nodes borrow their backing records from the scenario; the tree is rebuilt
//! from scratch on every change and never outlives the scenario it was built
//! from.

mod build;
mod collapse;
mod key;

pub use build::build;
pub use collapse::CollapseState;
pub use key::NodeKey;

use custmap_types::{
    AccountRecord, AddressRecord, BillingProfileRecord, ContactPersonRecord, ContractRecord,
    CustomerRecord, NodeKind, PlatformRecord, Scenario,
};
use serde_json::Value;

/// Read-only reference to the source record backing a node.
#[derive(Debug, Clone, Copy)]
pub enum RawRecord<'a> {
    Customer(&'a CustomerRecord),
    Account(&'a AccountRecord),
    Contract(&'a ContractRecord),
    Billing(&'a BillingProfileRecord),
    Address(&'a AddressRecord),
    Contact(&'a ContactPersonRecord),
    Platform(&'a PlatformRecord),
}

impl RawRecord<'_> {
    /// Serialize the backing record for inspector consumers.
    pub fn to_value(&self) -> Value {
        let result = match self {
            RawRecord::Customer(r) => serde_json::to_value(r),
            RawRecord::Account(r) => serde_json::to_value(r),
            RawRecord::Contract(r) => serde_json::to_value(r),
            RawRecord::Billing(r) => serde_json::to_value(r),
            RawRecord::Address(r) => serde_json::to_value(r),
            RawRecord::Contact(r) => serde_json::to_value(r),
            RawRecord::Platform(r) => serde_json::to_value(r),
        };
        result.unwrap_or(Value::Null)
    }
}

/// One rendered box in the diagram.
#[derive(Debug, Clone)]
pub struct Node<'a> {
    pub kind: NodeKind,
    pub key: NodeKey,
    pub title: String,
    pub line1: String,
    pub line2: String,
    pub raw: RawRecord<'a>,
    /// Active children, in build order.
    pub children: Vec<Node<'a>>,
    /// Distance from the root, assigned by the post-build walk.
    pub depth: usize,
    /// Whether the node had children before any collapse was applied.
    pub has_children_original: bool,
    /// Backup slot for collapsed-away children. Exactly one of `children` /
    /// this slot is non-empty for a given collapsed/expanded state.
    pub collapsed_children: Option<Vec<Node<'a>>>,
}

impl<'a> Node<'a> {
    fn new(kind: NodeKind, key: NodeKey, title: String, raw: RawRecord<'a>) -> Self {
        let (line1, line2) = build::display_lines(kind, &raw);
        Node {
            kind,
            key,
            title,
            line1,
            line2,
            raw,
            children: Vec::new(),
            depth: 0,
            has_children_original: false,
            collapsed_children: None,
        }
    }
}

/// Pre-order walk over the active (post-collapse) children.
pub fn walk<'n, 'a>(node: &'n Node<'a>, visit: &mut impl FnMut(&'n Node<'a>)) {
    visit(node);
    for child in &node.children {
        walk(child, visit);
    }
}

/// Resolve a stable key against a fresh, uncollapsed build of the scenario.
///
/// Used by the selection/inspector boundary: the pointer survives collapse,
/// so lookup must see the whole tree.
pub fn find_node_value(scenario: &Scenario, key: &NodeKey) -> Option<(Value, NodeKind)> {
    let root = build(scenario);
    let mut found = None;
    walk(&root, &mut |node| {
        if found.is_none() && node.key == *key {
            found = Some((node.raw.to_value(), node.kind));
        }
    });
    found
}
