//! Plain serializable view models the renderers consume.

use custmap_engine::{Classification, FitTransform, NodeKey, Scene};
use custmap_types::NodeKind;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioListViewModel {
    pub entries: Vec<ScenarioEntry>,
    pub filtered: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioEntry {
    pub name: String,
    pub customer_type: String,
    pub industry_sector: String,
    pub dominant_channel: String,
    /// Whether the scenario itself passes the active filters.
    pub matches_filters: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutlineViewModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scenario: Option<String>,
    pub rows: Vec<OutlineRow>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutlineRow {
    pub depth: usize,
    pub kind: NodeKind,
    pub key: NodeKey,
    pub title: String,
    pub line1: String,
    pub collapsible: bool,
    pub collapsed: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutViewModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scene: Option<Scene>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fit: Option<FitTransform>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectorViewModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scenario: Option<String>,
    pub classification: Classification,
    pub data_quality_ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<NodeKind>,
    pub meaning: MeaningViewModel,
    pub summary: Vec<KeyValue>,
    pub sections: Vec<Section>,
    pub key_rows: Vec<KeyValue>,
    pub raw: Value,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeaningViewModel {
    pub channel: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_contact: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub title: String,
    pub items: Vec<KeyValue>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyValue {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendViewModel {
    pub entries: Vec<LegendEntry>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendEntry {
    pub kind: NodeKind,
    pub label: String,
    pub color: String,
    pub hidden: bool,
}
