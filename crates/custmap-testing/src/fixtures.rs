//! Programmatic scenario fixtures shared by engine and CLI tests.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use custmap_types::{
    AccountRecord, AddressRecord, BillingProfileRecord, CommunicationChannel,
    ContactPersonRecord, ContractRecord, CustomerRecord, Domains, PlatformRecord, ReferenceData,
    Scenario,
};

pub fn customer(id: &str, name: &str) -> CustomerRecord {
    CustomerRecord {
        mdm_customer_id: Some(id.to_string()),
        trading_name: Some(name.to_string()),
        ..Default::default()
    }
}

pub fn account(id: &str, customer_id: &str, parent: Option<&str>) -> AccountRecord {
    AccountRecord {
        mdm_account_id: Some(id.to_string()),
        mdm_customer_id: Some(customer_id.to_string()),
        parent_account_id: parent.map(str::to_string),
        trading_name: Some(format!("{} trading", id)),
        ..Default::default()
    }
}

pub fn contact(id: Option<&str>, first: Option<&str>, job: Option<&str>) -> ContactPersonRecord {
    ContactPersonRecord {
        contact_person_id: id.map(str::to_string),
        first_name: first.map(str::to_string),
        job_title: job.map(str::to_string),
        ..Default::default()
    }
}

pub fn address(id: &str, city: &str) -> AddressRecord {
    AddressRecord {
        address_id: Some(id.to_string()),
        address_type: Some("DELIVERY".to_string()),
        city: Some(city.to_string()),
        country: Some("DE".to_string()),
        postalcode: Some("10115".to_string()),
        ..Default::default()
    }
}

pub fn contract(id: &str, with_billing: bool) -> ContractRecord {
    ContractRecord {
        contract_id: Some(id.to_string()),
        contract_name: Some(format!("{} agreement", id)),
        start_date: Some("2024-03-01".to_string()),
        billing_profile: with_billing.then(|| BillingProfileRecord {
            billing_profile_id: Some(format!("BPROF-{}", id)),
            billing_account_number: Some(format!("BAN-{}", id)),
            billing_currency: Some("EUR".to_string()),
            invoice_delivery: Some("EMAIL".to_string()),
            ..Default::default()
        }),
        ..Default::default()
    }
}

/// Strategic customer with two country customers; the primary customer owns
/// a fully loaded account (contacts, addresses, platform, contract chain)
/// plus each country customer owns root accounts, one with a child account.
pub fn strategic_multi_country() -> Scenario {
    let mut primary = customer("CUST-GLOB-1", "Aurora Group");
    primary.customer_type = Some("STRATEGIC_CUSTOMERS".to_string());
    primary.customer_level = Some("STRATEGIC".to_string());
    primary.industry_sector = Some("MANUFACTURING".to_string());
    primary.country_of_registration = Some("DE".to_string());

    let mut germany = customer("CUST-DE-1", "Aurora Germany");
    germany.customer_type = Some("RELATIONSHIP_CUSTOMERS".to_string());
    germany.country = Some("DE".to_string());
    let mut france = customer("CUST-FR-1", "Aurora France");
    france.customer_type = Some("RELATIONSHIP_CUSTOMERS".to_string());
    france.country = Some("FR".to_string());

    let mut global_account = account("ACC-GLOB-1", "CUST-GLOB-1", None);
    global_account.sales_channel = Some("MAJOR_ACCOUNT".to_string());
    global_account.business_roles = vec!["SOLD_TO".to_string(), "SHIP_TO".to_string()];
    global_account.contact_persons = vec![ContactPersonRecord {
        contact_person_id: Some("CP-1".to_string()),
        first_name: Some("Mara".to_string()),
        last_name: Some("Voss".to_string()),
        job_title: Some("Logistics Lead".to_string()),
        communication_channels: vec![CommunicationChannel {
            channel_type: Some("EMAIL".to_string()),
            value: Some("mara.voss@example.com".to_string()),
        }],
    }];
    global_account.addresses = vec![address("AD-1", "Hamburg")];
    global_account.platform_object = Some(PlatformRecord {
        platform_id: Some("PLT-1".to_string()),
        name: Some("Shop Connector".to_string()),
        platform_type: Some("API".to_string()),
        provider: Some("inhouse".to_string()),
    });
    let mut main_contract = contract("CON-1", true);
    main_contract.contact_persons = vec![contact(Some("CP-2"), Some("Jonas"), Some("Billing"))];
    main_contract.addresses = vec![address("AD-2", "Berlin")];
    global_account.contracts = vec![main_contract];

    let mut de_root = account("ACC-DE-1", "CUST-DE-1", None);
    de_root.sales_channel = Some("FIELD_SALES".to_string());
    let de_child = account("ACC-DE-2", "CUST-DE-1", Some("ACC-DE-1"));
    let mut fr_root = account("ACC-FR-1", "CUST-FR-1", None);
    fr_root.sales_channel = Some("FIELD_SALES".to_string());

    Scenario {
        scenario_name: Some("Global manufacturer".to_string()),
        customer: primary,
        related_customers: vec![germany, france],
        accounts: vec![global_account, de_root, de_child, fr_root],
    }
}

/// Relationship customer with a single related customer (stays a CUSTOMER
/// root) and two plain accounts.
pub fn relationship_single() -> Scenario {
    let mut primary = customer("CUST-REL-1", "Borealis Retail");
    primary.customer_type = Some("RELATIONSHIP_CUSTOMERS".to_string());
    primary.industry_sector = Some("RETAIL".to_string());
    primary.country_of_registration = Some("SE".to_string());

    let mut first = account("ACC-REL-1", "CUST-REL-1", None);
    first.sales_channel = Some("TELESALES".to_string());
    first.contracts = vec![contract("CON-REL-1", false)];
    let mut second = account("ACC-REL-2", "CUST-REL-1", None);
    second.sales_channel = Some("TELESALES".to_string());

    Scenario {
        scenario_name: Some("Retail chain".to_string()),
        customer: primary,
        related_customers: vec![customer("CUST-REL-2", "Borealis Norway")],
        accounts: vec![first, second],
    }
}

/// One account with no attachments and no child accounts.
pub fn bare_account() -> Scenario {
    let mut primary = customer("CUST-BARE-1", "Solo Trader");
    primary.customer_type = Some("RELATIONSHIP_CUSTOMERS".to_string());
    Scenario {
        scenario_name: Some("Bare account".to_string()),
        customer: primary,
        accounts: vec![account("ACC-BARE-1", "CUST-BARE-1", None)],
        ..Default::default()
    }
}

/// One account carrying two contacts that have no identifier and no name,
/// differing only in job title.
pub fn anonymous_contacts() -> Scenario {
    let mut primary = customer("CUST-ANON-1", "Nameless Ltd");
    primary.customer_type = Some("RELATIONSHIP_CUSTOMERS".to_string());
    let mut acc = account("ACC-ANON-1", "CUST-ANON-1", None);
    acc.contact_persons = vec![
        contact(None, None, Some("CFO")),
        contact(None, None, Some("COO")),
    ];
    Scenario {
        scenario_name: Some("Anonymous contacts".to_string()),
        customer: primary,
        accounts: vec![acc],
        ..Default::default()
    }
}

/// The standard test dataset.
pub fn dataset() -> Vec<Scenario> {
    vec![
        strategic_multi_country(),
        relationship_single(),
        bare_account(),
        anonymous_contacts(),
    ]
}

/// Reference document matching the values used in the fixtures.
pub fn reference() -> ReferenceData {
    ReferenceData {
        domains: Domains {
            customer_type: vec![
                "STRATEGIC_CUSTOMERS".to_string(),
                "RELATIONSHIP_CUSTOMERS".to_string(),
            ],
            industry_sector: vec!["MANUFACTURING".to_string(), "RETAIL".to_string()],
            sales_channel: vec![
                "MAJOR_ACCOUNT".to_string(),
                "FIELD_SALES".to_string(),
                "TELESALES".to_string(),
            ],
        },
    }
}

/// Paths of the three input documents inside a fixture directory.
pub struct FixturePaths {
    pub dataset: PathBuf,
    pub reference: PathBuf,
    pub colors: PathBuf,
}

/// Write the standard dataset, reference and a color-theme document into
/// `dir` for CLI integration tests.
pub fn write_input_files(dir: &Path) -> Result<FixturePaths> {
    let paths = FixturePaths {
        dataset: dir.join("customerData.json"),
        reference: dir.join("reference_master_data.json"),
        colors: dir.join("reference_colors.json"),
    };
    write_json(&paths.dataset, &dataset())?;
    write_json(&paths.reference, &reference())?;
    fs::write(
        &paths.colors,
        r##"{ "tokens": { "account": "#445566" } }"##,
    )
    .with_context(|| format!("failed to write {}", paths.colors.display()))?;
    Ok(paths)
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let body = serde_json::to_string_pretty(value)
        .with_context(|| format!("failed to serialize {}", path.display()))?;
    fs::write(path, body).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
