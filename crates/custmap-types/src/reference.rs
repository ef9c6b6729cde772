//! Reference master data and the optional color theme document.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::kind::NodeKind;

/// Enumerated valid values for the classification filters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReferenceData {
    pub domains: Domains,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Domains {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub customer_type: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub industry_sector: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sales_channel: Vec<String>,
}

/// Per-kind display colors.
///
/// The theme document is advisory: it may be absent or malformed, tokens may
/// live under a `tokens` wrapper or at the top level, and each token is
/// accepted under several historic key spellings. Anything unrecognized is
/// ignored and the built-in default stays in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorTheme {
    pub global_customer: String,
    pub customer: String,
    pub account: String,
    pub contract: String,
    pub billing: String,
    pub address: String,
    pub contact: String,
    pub platform: String,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            global_customer: "#fde68a".to_string(),
            customer: "#bfdbfe".to_string(),
            account: "#e9d5ff".to_string(),
            contract: "#bbf7d0".to_string(),
            billing: "#fecaca".to_string(),
            address: "#fed7aa".to_string(),
            contact: "#c7d2fe".to_string(),
            platform: "#e5e7eb".to_string(),
        }
    }
}

impl ColorTheme {
    /// Overlay a parsed theme document onto the defaults.
    pub fn from_document(document: &Value) -> Self {
        let mut theme = Self::default();
        let tokens = document.get("tokens").unwrap_or(document);

        let mut apply = |slot: &mut String, keys: [&str; 3]| {
            for key in keys {
                if let Some(value) = tokens.get(key).and_then(Value::as_str)
                    && !value.trim().is_empty()
                {
                    *slot = value.trim().to_string();
                    return;
                }
            }
        };

        apply(
            &mut theme.global_customer,
            ["globalCustomer", "--c-global", "c_global"],
        );
        apply(&mut theme.customer, ["customer", "--c-customer", "c_customer"]);
        apply(&mut theme.account, ["account", "--c-account", "c_account"]);
        apply(&mut theme.contract, ["contract", "--c-contract", "c_contract"]);
        apply(&mut theme.billing, ["billing", "--c-billing", "c_billing"]);
        apply(&mut theme.address, ["address", "--c-address", "c_address"]);
        apply(&mut theme.contact, ["contact", "--c-contact", "c_contact"]);
        apply(&mut theme.platform, ["platform", "--c-platform", "c_platform"]);
        theme
    }

    pub fn color_for(&self, kind: NodeKind) -> &str {
        match kind {
            NodeKind::GlobalCustomer => &self.global_customer,
            NodeKind::Customer => &self.customer,
            NodeKind::Account => &self.account,
            NodeKind::Contract => &self.contract,
            NodeKind::Billing => &self.billing,
            NodeKind::Address => &self.address,
            NodeKind::Contact => &self.contact,
            NodeKind::Platform => &self.platform,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reference_tolerates_missing_domains() {
        let reference: ReferenceData = serde_json::from_str("{}").unwrap();
        assert!(reference.domains.customer_type.is_empty());
    }

    #[test]
    fn theme_reads_wrapped_tokens() {
        let document = json!({ "tokens": { "account": "#112233" } });
        let theme = ColorTheme::from_document(&document);
        assert_eq!(theme.account, "#112233");
        assert_eq!(theme.customer, ColorTheme::default().customer);
    }

    #[test]
    fn theme_reads_flat_and_alternate_spellings() {
        let document = json!({ "--c-global": "#aa0000", "c_contact": "#00bb00" });
        let theme = ColorTheme::from_document(&document);
        assert_eq!(theme.global_customer, "#aa0000");
        assert_eq!(theme.contact, "#00bb00");
    }

    #[test]
    fn theme_ignores_blank_and_non_string_tokens() {
        let document = json!({ "tokens": { "billing": "  ", "address": 7 } });
        let theme = ColorTheme::from_document(&document);
        assert_eq!(theme.billing, ColorTheme::default().billing);
        assert_eq!(theme.address, ColorTheme::default().address);
    }
}
