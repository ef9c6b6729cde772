use std::fmt;

use custmap_types::NodeKind;
use serde::{Deserialize, Serialize};

use super::RawRecord;

/// Longest signature kept when synthesizing a key for an id-less record.
const SIGNATURE_CAP: usize = 120;

/// Deterministic node identifier, unique within one rendered tree and stable
/// across rebuilds of the same data. Collapse and selection state are keyed
/// by it, so it must not depend on anything that changes between renders.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeKey(String);

impl NodeKey {
    pub fn new(value: impl Into<String>) -> Self {
        NodeKey(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Key for root-level entities (the root customer, country customers and
    /// accounts carrying their natural id): `TYPE:id`.
    pub(crate) fn entity(kind: NodeKind, id: &str) -> Self {
        NodeKey(format!("{}:{}", kind.as_str(), id.trim()))
    }

    /// Key for an attached child. With a natural identifier:
    /// `TYPE:id@parent#index`. Without one, a `__NOID__` signature derived
    /// from the record's fields keeps the key deterministic and unlikely to
    /// collide.
    pub(crate) fn child(
        parent: &NodeKey,
        kind: NodeKind,
        natural_id: Option<&str>,
        index: usize,
        raw: &RawRecord<'_>,
    ) -> Self {
        let base = natural_id.map(str::trim).unwrap_or("");
        if !base.is_empty() {
            NodeKey(format!("{}:{}@{}#{}", kind.as_str(), base, parent.0, index))
        } else {
            NodeKey(format!(
                "{}:__NOID__:{}@{}#{}",
                kind.as_str(),
                signature(raw),
                parent.0,
                index
            ))
        }
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Compact record signature: the record's fields in a fixed priority order
/// (identifiers, then names, then address parts, then person and type
/// fields), non-empty values joined by `|`, capped at [`SIGNATURE_CAP`]
/// characters.
fn signature(raw: &RawRecord<'_>) -> String {
    let fields: Vec<Option<&str>> = match raw {
        RawRecord::Customer(r) => vec![
            r.mdm_customer_id.as_deref(),
            r.official_name.as_deref(),
            r.trading_name.as_deref(),
        ],
        RawRecord::Account(r) => vec![
            r.mdm_account_id.as_deref(),
            r.mdm_customer_id.as_deref(),
            r.trading_name.as_deref(),
        ],
        RawRecord::Contract(r) => vec![r.contract_id.as_deref()],
        RawRecord::Billing(r) => vec![r.billing_profile_id.as_deref()],
        RawRecord::Address(r) => vec![
            r.address_id.as_deref(),
            r.city.as_deref(),
            r.postalcode.as_deref(),
            r.street.as_deref(),
            r.house_number.as_deref(),
            r.address_type.as_deref(),
        ],
        RawRecord::Contact(r) => vec![
            r.contact_person_id.as_deref(),
            r.first_name.as_deref(),
            r.last_name.as_deref(),
            r.job_title.as_deref(),
        ],
        RawRecord::Platform(r) => vec![
            r.platform_id.as_deref(),
            r.name.as_deref(),
            r.platform_type.as_deref(),
            r.provider.as_deref(),
        ],
    };

    fields
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .collect::<Vec<_>>()
        .join("|")
        .chars()
        .take(SIGNATURE_CAP)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use custmap_types::ContactPersonRecord;

    #[test]
    fn entity_key_trims_id() {
        let key = NodeKey::entity(NodeKind::Account, " ACC-1 ");
        assert_eq!(key.as_str(), "ACCOUNT:ACC-1");
    }

    #[test]
    fn child_key_uses_natural_id_when_present() {
        let contact = ContactPersonRecord::default();
        let raw = RawRecord::Contact(&contact);
        let parent = NodeKey::entity(NodeKind::Account, "ACC-1");
        let key = NodeKey::child(&parent, NodeKind::Contact, Some("CP-9"), 2, &raw);
        assert_eq!(key.as_str(), "CONTACT:CP-9@ACCOUNT:ACC-1#2");
    }

    #[test]
    fn idless_records_get_signature_keys() {
        let contact = ContactPersonRecord {
            job_title: Some("CFO".into()),
            ..Default::default()
        };
        let raw = RawRecord::Contact(&contact);
        let parent = NodeKey::entity(NodeKind::Account, "ACC-1");
        let key = NodeKey::child(&parent, NodeKind::Contact, None, 0, &raw);
        assert_eq!(key.as_str(), "CONTACT:__NOID__:CFO@ACCOUNT:ACC-1#0");
    }

    #[test]
    fn signature_is_capped() {
        let contact = ContactPersonRecord {
            first_name: Some("x".repeat(200)),
            ..Default::default()
        };
        let raw = RawRecord::Contact(&contact);
        assert_eq!(signature(&raw).chars().count(), SIGNATURE_CAP);
    }
}
