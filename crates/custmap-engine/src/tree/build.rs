//! Tree construction from one scenario record.

use std::collections::HashMap;

use custmap_types::{
    AccountRecord, AddressRecord, ContactPersonRecord, ContractRecord, CustomerRecord, NodeKind,
    PlatformRecord, Scenario,
};

use super::key::NodeKey;
use super::{Node, RawRecord};

const PLACEHOLDER: &str = "—";

/// Build the rooted hierarchy tree for a scenario.
///
/// The root is a GLOBAL_CUSTOMER only when the primary customer is flagged
/// strategic and the scenario lists at least two country customers;
/// otherwise the primary customer itself is the root. Depth and
/// `has_children_original` are assigned by one pre-order walk before any
/// collapse is applied.
pub fn build<'a>(scenario: &'a Scenario) -> Node<'a> {
    let customer = &scenario.customer;
    let strategic = customer.customer_type.as_deref() == Some("STRATEGIC_CUSTOMERS")
        || customer.customer_level.as_deref() == Some("STRATEGIC");
    let multi_country = scenario.related_customers.len() >= 2;

    let mut root = if strategic && multi_country {
        Node::new(
            NodeKind::GlobalCustomer,
            NodeKey::entity(
                NodeKind::GlobalCustomer,
                customer.mdm_customer_id.as_deref().unwrap_or("GLOBAL"),
            ),
            customer
                .display_name()
                .unwrap_or("Global Customer")
                .to_string(),
            RawRecord::Customer(customer),
        )
    } else {
        Node::new(
            NodeKind::Customer,
            NodeKey::entity(
                NodeKind::Customer,
                customer.mdm_customer_id.as_deref().unwrap_or("CUSTOMER"),
            ),
            customer.display_name().unwrap_or("Customer").to_string(),
            RawRecord::Customer(customer),
        )
    };

    let forest = AccountForest::new(&scenario.accounts);

    if root.kind == NodeKind::GlobalCustomer {
        for (index, related) in scenario.related_customers.iter().enumerate() {
            let raw = RawRecord::Customer(related);
            let key = match non_blank(related.mdm_customer_id.as_deref()) {
                Some(id) => NodeKey::entity(NodeKind::Customer, id),
                None => NodeKey::child(&root.key, NodeKind::Customer, None, index, &raw),
            };
            let title = related
                .display_name()
                .unwrap_or("Country Customer")
                .to_string();
            let mut country = Node::new(NodeKind::Customer, key, title, raw);
            forest.attach_roots(related, &mut country);
            root.children.push(country);
        }
        forest.attach_roots(customer, &mut root);
    } else {
        forest.attach_roots(customer, &mut root);
    }

    mark(&mut root, 0);
    root
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn mark(node: &mut Node<'_>, depth: usize) {
    node.depth = depth;
    node.has_children_original = !node.children.is_empty();
    for child in &mut node.children {
        mark(child, depth + 1);
    }
}

/// Account records grouped into the implicit forest via `parentAccountId`.
struct AccountForest<'a> {
    accounts: &'a [AccountRecord],
    by_parent: HashMap<&'a str, Vec<&'a AccountRecord>>,
}

impl<'a> AccountForest<'a> {
    fn new(accounts: &'a [AccountRecord]) -> Self {
        let mut by_parent: HashMap<&str, Vec<&AccountRecord>> = HashMap::new();
        for account in accounts {
            if let Some(parent) = non_blank(account.parent_account_id.as_deref()) {
                by_parent.entry(parent).or_default().push(account);
            }
        }
        AccountForest { accounts, by_parent }
    }

    /// Attach the customer's root accounts (matching customer id, no parent
    /// account) under the given node.
    fn attach_roots(&self, customer: &CustomerRecord, parent: &mut Node<'a>) {
        let roots = self.accounts.iter().filter(|account| {
            account.mdm_customer_id.as_deref() == customer.mdm_customer_id.as_deref()
                && non_blank(account.parent_account_id.as_deref()).is_none()
        });
        for (index, account) in roots.enumerate() {
            let subtree = self.account_subtree(account, &parent.key, index);
            parent.children.push(subtree);
        }
    }

    fn account_subtree(
        &self,
        account: &'a AccountRecord,
        parent_key: &NodeKey,
        index: usize,
    ) -> Node<'a> {
        let raw = RawRecord::Account(account);
        let id = non_blank(account.mdm_account_id.as_deref());
        let key = match id {
            Some(id) => NodeKey::entity(NodeKind::Account, id),
            None => NodeKey::child(parent_key, NodeKind::Account, None, index, &raw),
        };
        let title = account
            .trading_name
            .as_deref()
            .or(account.mdm_account_id.as_deref())
            .map(str::to_string)
            .unwrap_or_else(|| key.as_str().to_string());
        let mut node = Node::new(NodeKind::Account, key, title, raw);

        // Side objects first, in a fixed order, so the fan-out index order is
        // deterministic; child accounts go last and drive the skeleton.
        for (idx, contact) in account.contact_persons.iter().enumerate() {
            let child = contact_node(&node.key, contact, idx);
            node.children.push(child);
        }
        for (idx, address) in account.addresses.iter().enumerate() {
            let child = address_node(&node.key, address, idx);
            node.children.push(child);
        }
        if let Some(platform) = &account.platform_object {
            let child = platform_node(&node.key, platform);
            node.children.push(child);
        }
        for (idx, contract) in account.contracts.iter().enumerate() {
            let child = self.contract_subtree(&node.key, contract, idx);
            node.children.push(child);
        }

        if let Some(id) = id
            && let Some(kids) = self.by_parent.get(id)
        {
            for (idx, kid) in kids.iter().enumerate() {
                let child = self.account_subtree(kid, &node.key, idx);
                node.children.push(child);
            }
        }

        node
    }

    fn contract_subtree(
        &self,
        parent_key: &NodeKey,
        contract: &'a ContractRecord,
        index: usize,
    ) -> Node<'a> {
        let raw = RawRecord::Contract(contract);
        let key = NodeKey::child(
            parent_key,
            NodeKind::Contract,
            contract.contract_id.as_deref(),
            index,
            &raw,
        );
        let title = contract
            .contract_name
            .clone()
            .unwrap_or_else(|| "Contract".to_string());
        let mut node = Node::new(NodeKind::Contract, key, title, raw);

        if let Some(billing) = &contract.billing_profile {
            let braw = RawRecord::Billing(billing);
            let bkey = NodeKey::child(
                &node.key,
                NodeKind::Billing,
                billing.billing_profile_id.as_deref(),
                0,
                &braw,
            );
            let btitle = billing
                .billing_account_number
                .clone()
                .unwrap_or_else(|| "Billing Profile".to_string());
            node.children.push(Node::new(NodeKind::Billing, bkey, btitle, braw));
        }
        for (idx, contact) in contract.contact_persons.iter().enumerate() {
            let child = contact_node(&node.key, contact, idx);
            node.children.push(child);
        }
        for (idx, address) in contract.addresses.iter().enumerate() {
            let child = address_node(&node.key, address, idx);
            node.children.push(child);
        }

        node
    }
}

fn contact_node<'a>(
    parent_key: &NodeKey,
    contact: &'a ContactPersonRecord,
    index: usize,
) -> Node<'a> {
    let raw = RawRecord::Contact(contact);
    let key = NodeKey::child(
        parent_key,
        NodeKind::Contact,
        contact.contact_person_id.as_deref(),
        index,
        &raw,
    );
    let title = contact
        .full_name()
        .or_else(|| contact.contact_person_id.clone())
        .unwrap_or_else(|| "Contact".to_string());
    Node::new(NodeKind::Contact, key, title, raw)
}

fn address_node<'a>(parent_key: &NodeKey, address: &'a AddressRecord, index: usize) -> Node<'a> {
    let raw = RawRecord::Address(address);
    let key = NodeKey::child(
        parent_key,
        NodeKind::Address,
        address.address_id.as_deref(),
        index,
        &raw,
    );
    let kind_label = address.address_type.as_deref().unwrap_or("ADDRESS");
    let title = match non_blank(address.city.as_deref()) {
        Some(city) => format!("{} · {}", kind_label, city),
        None => kind_label.to_string(),
    };
    Node::new(NodeKind::Address, key, title, raw)
}

fn platform_node<'a>(parent_key: &NodeKey, platform: &'a PlatformRecord) -> Node<'a> {
    let raw = RawRecord::Platform(platform);
    let key = NodeKey::child(
        parent_key,
        NodeKind::Platform,
        platform.platform_id.as_deref(),
        0,
        &raw,
    );
    let title = platform
        .name
        .clone()
        .unwrap_or_else(|| "Platform".to_string());
    Node::new(NodeKind::Platform, key, title, raw)
}

/// Type-specific display lines for a node card.
pub(super) fn display_lines(kind: NodeKind, raw: &RawRecord<'_>) -> (String, String) {
    match (kind, raw) {
        (NodeKind::GlobalCustomer | NodeKind::Customer, RawRecord::Customer(r)) => (
            format!(
                "mdmCustomerId: {}",
                r.mdm_customer_id.as_deref().unwrap_or(PLACEHOLDER)
            ),
            format!(
                "{} · {}",
                r.customer_type.as_deref().unwrap_or(PLACEHOLDER),
                r.display_country().unwrap_or(PLACEHOLDER)
            ),
        ),
        (NodeKind::Account, RawRecord::Account(r)) => {
            let roles = r.business_roles.join(", ");
            (
                format!(
                    "roles: {}",
                    if roles.is_empty() { PLACEHOLDER } else { roles.as_str() }
                ),
                format!(
                    "channel: {}",
                    r.sales_channel.as_deref().unwrap_or(PLACEHOLDER)
                ),
            )
        }
        (NodeKind::Contract, RawRecord::Contract(r)) => (
            format!(
                "contractId: {}",
                r.contract_id.as_deref().unwrap_or(PLACEHOLDER)
            ),
            format!("start: {}", r.start_date.as_deref().unwrap_or(PLACEHOLDER)),
        ),
        (NodeKind::Billing, RawRecord::Billing(r)) => (
            format!(
                "currency: {}",
                r.billing_currency.as_deref().unwrap_or(PLACEHOLDER)
            ),
            format!(
                "delivery: {}",
                r.invoice_delivery.as_deref().unwrap_or(PLACEHOLDER)
            ),
        ),
        (NodeKind::Address, RawRecord::Address(r)) => (
            format!(
                "{} · {}",
                r.address_type.as_deref().unwrap_or("ADDRESS"),
                r.city.as_deref().unwrap_or(PLACEHOLDER)
            ),
            format!(
                "{} · {}",
                r.country.as_deref().unwrap_or(PLACEHOLDER),
                r.postalcode.as_deref().unwrap_or(PLACEHOLDER)
            ),
        ),
        (NodeKind::Contact, RawRecord::Contact(r)) => (
            r.full_name().unwrap_or_else(|| PLACEHOLDER.to_string()),
            r.job_title.clone().unwrap_or_else(|| PLACEHOLDER.to_string()),
        ),
        (NodeKind::Platform, RawRecord::Platform(r)) => (
            r.platform_type
                .clone()
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            r.provider.clone().unwrap_or_else(|| PLACEHOLDER.to_string()),
        ),
        _ => (String::new(), String::new()),
    }
}
