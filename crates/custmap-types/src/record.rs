//! Scenario record model.
//!
//! One `Scenario` is a denormalized business situation: a primary customer,
//! optional sibling country customers, and a flat account list whose
//! `parentAccountId` links form an implicit forest. Sub-objects (contracts,
//! billing profiles, addresses, contacts, platforms) hang off accounts and
//! contracts. Everything is optional-by-default: source extracts routinely
//! miss names and identifiers, and the tree builder substitutes placeholders
//! rather than failing.

use serde::{Deserialize, Serialize};

/// One selectable business situation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Scenario {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scenario_name: Option<String>,
    pub customer: CustomerRecord,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub related_customers: Vec<CustomerRecord>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub accounts: Vec<AccountRecord>,
}

impl Scenario {
    /// Display name, falling back to a positional label for unnamed records.
    pub fn display_name(&self, index: usize) -> String {
        match self.scenario_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name.to_string(),
            _ => format!("Scenario {}", index + 1),
        }
    }
}

/// Customer master record (global parent or country-level customer).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomerRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mdm_customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub official_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trading_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry_sector: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_of_registration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_group_code: Option<String>,
}

impl CustomerRecord {
    /// Country shown on customer cards: registration country wins over the
    /// plain country field.
    pub fn display_country(&self) -> Option<&str> {
        self.country_of_registration
            .as_deref()
            .or(self.country.as_deref())
    }

    /// Best display name: trading name wins over official name.
    pub fn display_name(&self) -> Option<&str> {
        self.trading_name.as_deref().or(self.official_name.as_deref())
    }
}

/// Account record. `parent_account_id` links accounts into a forest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AccountRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mdm_account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mdm_customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trading_name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub business_roles: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_channel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_terms: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub contact_persons: Vec<ContactPersonRecord>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<AddressRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_object: Option<PlatformRecord>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub contracts: Vec<ContractRecord>,
}

/// Contract attached to an account.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContractRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_detail: Option<ContractDetail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_profile: Option<BillingProfileRecord>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub contact_persons: Vec<ContactPersonRecord>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<AddressRecord>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContractDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_type: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<String>,
}

/// Billing profile attached to a contract.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BillingProfileRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_profile_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_account_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_delivery: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PaymentMethod {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub method_type: Option<String>,
}

/// Postal or pickup address.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AddressRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub house_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postalcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// Contact person on an account or contract.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactPersonRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_person_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub communication_channels: Vec<CommunicationChannel>,
}

impl ContactPersonRecord {
    /// "First Last", trimmed; `None` when both parts are missing or blank.
    pub fn full_name(&self) -> Option<String> {
        let name = format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or(""),
            self.last_name.as_deref().unwrap_or("")
        );
        let name = name.trim();
        if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CommunicationChannel {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub channel_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Integration platform object attached to an account.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlatformRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub platform_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_sparse_scenario() {
        let json = r#"{
            "scenarioName": "Minimal",
            "customer": { "mdmCustomerId": "CUST-1" }
        }"#;
        let scenario: Scenario = serde_json::from_str(json).unwrap();
        assert_eq!(scenario.customer.mdm_customer_id.as_deref(), Some("CUST-1"));
        assert!(scenario.related_customers.is_empty());
        assert!(scenario.accounts.is_empty());
    }

    #[test]
    fn deserializes_nested_account_graph() {
        let json = r#"{
            "customer": { "mdmCustomerId": "CUST-1" },
            "accounts": [{
                "mdmAccountId": "ACC-1",
                "mdmCustomerId": "CUST-1",
                "businessRoles": ["SHIPPER"],
                "platformObject": { "platformId": "PLT-1", "type": "API" },
                "contracts": [{
                    "contractId": "CON-1",
                    "billingProfile": { "billingProfileId": "BPROF-1" },
                    "contactPersons": [{ "jobTitle": "CFO" }]
                }]
            }]
        }"#;
        let scenario: Scenario = serde_json::from_str(json).unwrap();
        let account = &scenario.accounts[0];
        assert_eq!(account.business_roles, vec!["SHIPPER"]);
        assert_eq!(
            account.platform_object.as_ref().unwrap().platform_type.as_deref(),
            Some("API")
        );
        let contract = &account.contracts[0];
        assert!(contract.billing_profile.is_some());
        assert_eq!(contract.contact_persons[0].job_title.as_deref(), Some("CFO"));
    }

    #[test]
    fn scenario_display_name_falls_back_to_position() {
        let scenario = Scenario::default();
        assert_eq!(scenario.display_name(2), "Scenario 3");
    }

    #[test]
    fn contact_full_name_trims_blank_parts() {
        let contact = ContactPersonRecord {
            first_name: Some("Ada".into()),
            ..Default::default()
        };
        assert_eq!(contact.full_name().as_deref(), Some("Ada"));
        assert!(ContactPersonRecord::default().full_name().is_none());
    }
}
