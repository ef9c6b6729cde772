//! Pure state → view-model projections.

use custmap_engine::{AppState, Node, build, walk};
use custmap_types::{NodeKind, dominant_channel};
use serde_json::Value;

use super::meaning::channel_definition;
use super::view_models::{
    InspectorViewModel, KeyValue, LegendEntry, LegendViewModel, MeaningViewModel, OutlineRow,
    OutlineViewModel, ScenarioEntry, ScenarioListViewModel, Section,
};

const PLACEHOLDER: &str = "—";

pub fn present_scenario_list(state: &AppState) -> ScenarioListViewModel {
    let entries = state
        .selectable_scenarios()
        .into_iter()
        .map(|(name, scenario)| ScenarioEntry {
            name,
            customer_type: scenario
                .customer
                .customer_type
                .clone()
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            industry_sector: scenario
                .customer
                .industry_sector
                .clone()
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            dominant_channel: dominant_channel(scenario)
                .unwrap_or(PLACEHOLDER)
                .to_string(),
            matches_filters: state.filter().matches_scenario(scenario),
        })
        .collect();
    ScenarioListViewModel {
        entries,
        filtered: !state.filter().is_empty(),
    }
}

pub fn present_outline(state: &AppState) -> OutlineViewModel {
    let Some(scenario) = state.current_scenario() else {
        return OutlineViewModel {
            scenario: None,
            rows: Vec::new(),
        };
    };

    let mut root = build(scenario);
    state.collapse().apply(&mut root);

    let mut rows = Vec::new();
    walk(&root, &mut |node: &Node<'_>| {
        rows.push(OutlineRow {
            depth: node.depth,
            kind: node.kind,
            key: node.key.clone(),
            title: node.title.clone(),
            line1: node.line1.clone(),
            collapsible: node.has_children_original,
            collapsed: node.has_children_original && state.collapse().is_collapsed(&node.key),
        });
    });

    OutlineViewModel {
        scenario: state.current_scenario_label(),
        rows,
    }
}

pub fn present_inspector(state: &AppState) -> InspectorViewModel {
    let classification = state.classification();
    let (raw, kind) = match state.selected_record() {
        Some((value, kind)) => (value, Some(kind)),
        None => (Value::Null, None),
    };

    let meaning = {
        let channel = classification.sales_channel.clone();
        match channel_definition(&channel) {
            Some(def) => MeaningViewModel {
                channel,
                title: Some(def.title.to_string()),
                definition: Some(def.definition.to_string()),
                primary_contact: Some(def.primary_contact.to_string()),
            },
            None => MeaningViewModel {
                channel,
                title: None,
                definition: None,
                primary_contact: None,
            },
        }
    };

    InspectorViewModel {
        scenario: state.current_scenario_label(),
        data_quality_ok: state.data_quality_ok(),
        kind,
        summary: summary_pairs(&raw, kind),
        sections: readable_sections(&raw),
        key_rows: key_rows(&raw, kind),
        raw,
        classification,
        meaning,
    }
}

pub fn present_legend(state: &AppState) -> LegendViewModel {
    let entries = NodeKind::ALL
        .into_iter()
        .map(|kind| LegendEntry {
            kind,
            label: kind.label().to_string(),
            color: state.theme().color_for(kind).to_string(),
            hidden: state.hidden_kinds().contains(&kind),
        })
        .collect();
    LegendViewModel { entries }
}

fn str_field(raw: &Value, key: &str) -> Option<String> {
    match raw.get(key) {
        Some(Value::String(value)) if !value.trim().is_empty() => Some(value.clone()),
        _ => None,
    }
}

fn list_field(raw: &Value, key: &str) -> Option<String> {
    let items = raw.get(key)?.as_array()?;
    let joined = items
        .iter()
        .filter_map(Value::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    if joined.is_empty() { None } else { Some(joined) }
}

fn country_field(raw: &Value) -> Option<String> {
    str_field(raw, "countryOfRegistration").or_else(|| str_field(raw, "country"))
}

/// Leading identifier/name pairs for the summary table, capped at 14 rows.
fn summary_pairs(raw: &Value, kind: Option<NodeKind>) -> Vec<KeyValue> {
    let mut pairs = vec![KeyValue {
        key: "Object type".to_string(),
        value: kind
            .map(|k| k.as_str().to_string())
            .unwrap_or_else(|| PLACEHOLDER.to_string()),
    }];

    let fields = [
        "mdmCustomerId",
        "mdmAccountId",
        "contractId",
        "billingProfileId",
        "addressId",
        "contactPersonId",
        "platformId",
        "officialName",
        "tradingName",
        "customerType",
        "industrySector",
        "salesChannel",
    ];
    for field in fields {
        if let Some(value) = str_field(raw, field) {
            pairs.push(KeyValue {
                key: field.to_string(),
                value,
            });
        }
    }
    if let Some(roles) = list_field(raw, "businessRoles") {
        pairs.push(KeyValue {
            key: "roles".to_string(),
            value: roles,
        });
    }
    if let Some(country) = country_field(raw) {
        pairs.push(KeyValue {
            key: "country".to_string(),
            value: country,
        });
    }
    pairs.truncate(14);
    pairs
}

/// Grouped readable sections, empty values dropped.
fn readable_sections(raw: &Value) -> Vec<Section> {
    let mut sections = vec![
        section(
            "Classification",
            [
                ("customerType", str_field(raw, "customerType")),
                ("customerLevel", str_field(raw, "customerLevel")),
                ("industrySector", str_field(raw, "industrySector")),
                ("salesChannel", str_field(raw, "salesChannel")),
                ("country", country_field(raw)),
            ],
        ),
        section(
            "Identifiers",
            [
                ("mdmCustomerId", str_field(raw, "mdmCustomerId")),
                ("mdmAccountId", str_field(raw, "mdmAccountId")),
                ("contractId", str_field(raw, "contractId")),
                ("billingProfileId", str_field(raw, "billingProfileId")),
                ("addressId", str_field(raw, "addressId")),
                ("contactPersonId", str_field(raw, "contactPersonId")),
                ("platformId", str_field(raw, "platformId")),
            ],
        ),
        section(
            "Names / Labels",
            [
                ("officialName", str_field(raw, "officialName")),
                ("tradingName", str_field(raw, "tradingName")),
                ("contractName", str_field(raw, "contractName")),
                ("billingAccountNumber", str_field(raw, "billingAccountNumber")),
                ("city", str_field(raw, "city")),
                ("jobTitle", str_field(raw, "jobTitle")),
                ("name", str_field(raw, "name")),
            ],
        ),
    ];

    if let Some(channels) = raw.get("communicationChannels").and_then(Value::as_array) {
        let items = channels
            .iter()
            .filter_map(|channel| {
                let key = channel.get("type")?.as_str()?;
                let value = channel.get("value")?.as_str()?;
                Some(KeyValue {
                    key: key.to_string(),
                    value: value.to_string(),
                })
            })
            .collect();
        sections.push(Section {
            title: "Communication channels".to_string(),
            items,
        });
    }

    sections
}

fn section<const N: usize>(title: &str, pairs: [(&str, Option<String>); N]) -> Section {
    Section {
        title: title.to_string(),
        items: pairs
            .into_iter()
            .filter_map(|(key, value)| {
                value.map(|value| KeyValue {
                    key: key.to_string(),
                    value,
                })
            })
            .collect(),
    }
}

/// Compact kind-specific rows (the hover-card content), capped at 18.
fn key_rows(raw: &Value, kind: Option<NodeKind>) -> Vec<KeyValue> {
    let mut rows = Vec::new();
    let mut push = |key: &str, value: Option<String>| {
        if let Some(value) = value {
            rows.push(KeyValue {
                key: key.to_string(),
                value,
            });
        }
    };

    match kind {
        Some(NodeKind::Customer | NodeKind::GlobalCustomer) => {
            push("mdmCustomerId", str_field(raw, "mdmCustomerId"));
            push("officialName", str_field(raw, "officialName"));
            push("tradingName", str_field(raw, "tradingName"));
            push("customerType", str_field(raw, "customerType"));
            push("industrySector", str_field(raw, "industrySector"));
            push("countryOfRegistration", str_field(raw, "countryOfRegistration"));
            push("globalGroupCode", str_field(raw, "globalGroupCode"));
        }
        Some(NodeKind::Account) => {
            push("mdmAccountId", str_field(raw, "mdmAccountId"));
            push("roles", list_field(raw, "businessRoles"));
            push("salesChannel", str_field(raw, "salesChannel"));
            push("currency", str_field(raw, "currency"));
            push("paymentTerms", str_field(raw, "paymentTerms"));
        }
        Some(NodeKind::Contract) => {
            push("contractId", str_field(raw, "contractId"));
            push("contractName", str_field(raw, "contractName"));
            push("startDate", str_field(raw, "startDate"));
            if let Some(detail) = raw.get("contractDetail") {
                push("contractType", str_field(detail, "contractType"));
                push("services", list_field(detail, "services"));
            }
        }
        Some(NodeKind::Billing) => {
            push("billingProfileId", str_field(raw, "billingProfileId"));
            push("billingAccountNumber", str_field(raw, "billingAccountNumber"));
            push("billingCurrency", str_field(raw, "billingCurrency"));
            push("invoiceDelivery", str_field(raw, "invoiceDelivery"));
            if let Some(method) = raw.get("paymentMethod") {
                push("paymentMethod", str_field(method, "type"));
            }
        }
        Some(NodeKind::Address) => {
            push("addressId", str_field(raw, "addressId"));
            push("addressType", str_field(raw, "addressType"));
            let street = [str_field(raw, "street"), str_field(raw, "houseNumber")]
                .into_iter()
                .flatten()
                .collect::<Vec<_>>()
                .join(" ");
            push("street", (!street.is_empty()).then_some(street));
            push("city", str_field(raw, "city"));
            push("postalcode", str_field(raw, "postalcode"));
            push("country", str_field(raw, "country"));
        }
        Some(NodeKind::Contact) => {
            push("contactPersonId", str_field(raw, "contactPersonId"));
            let name = [str_field(raw, "firstName"), str_field(raw, "lastName")]
                .into_iter()
                .flatten()
                .collect::<Vec<_>>()
                .join(" ");
            push("name", (!name.is_empty()).then_some(name));
            push("jobTitle", str_field(raw, "jobTitle"));
            if let Some(channels) = raw.get("communicationChannels").and_then(Value::as_array) {
                for channel in channels {
                    if let (Some(key), Some(value)) = (
                        channel.get("type").and_then(Value::as_str),
                        channel.get("value").and_then(Value::as_str),
                    ) {
                        push(key, Some(value.to_string()));
                    }
                }
            }
        }
        Some(NodeKind::Platform) => {
            push("platformId", str_field(raw, "platformId"));
            push("name", str_field(raw, "name"));
            push("type", str_field(raw, "type"));
            push("provider", str_field(raw, "provider"));
        }
        None => {}
    }

    rows.truncate(18);
    rows
}
