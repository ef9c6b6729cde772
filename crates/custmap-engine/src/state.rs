//! Application state: one owner for everything the event handlers mutate.
//!
//! Renders are pure reads: every action updates a small piece of state and
//! the next `scene()` call recomputes the full build → collapse → layout
//! pass. Collapse and hidden-kind state are scenario-scoped and reset on
//! scenario change; filter and orientation changes preserve them.

use std::collections::BTreeSet;

use custmap_types::{
    ColorTheme, FilterState, NodeKind, ReferenceData, Scenario, dominant_channel,
};
use serde::Serialize;
use serde_json::Value;

use crate::layout::fit::{FitRequest, FitTransform, Viewport, fit};
use crate::layout::{LayoutConfig, Orientation};
use crate::scene::{Scene, compose};
use crate::tree::{CollapseState, NodeKey, find_node_value};

/// Effective scenario classification shown by the inspector: filter values
/// override the primary customer's own fields; the channel falls back to the
/// dominant account channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub customer_type: String,
    pub industry_sector: String,
    pub sales_channel: String,
}

const PLACEHOLDER: &str = "—";

/// Single-owner application state.
#[derive(Debug, Clone)]
pub struct AppState {
    dataset: Vec<Scenario>,
    reference: ReferenceData,
    theme: ColorTheme,
    config: LayoutConfig,

    current: Option<usize>,
    filter: FilterState,
    hidden: BTreeSet<NodeKind>,
    collapse: CollapseState,
    orientation: Orientation,
    selected: Option<NodeKey>,
    fit_request: FitRequest,
}

impl AppState {
    /// The boot selection prefers the first relationship-customer scenario,
    /// falling back to the first entry.
    pub fn new(dataset: Vec<Scenario>, reference: ReferenceData, theme: ColorTheme) -> Self {
        let preferred = dataset
            .iter()
            .position(|scenario| {
                scenario.customer.customer_type.as_deref() == Some("RELATIONSHIP_CUSTOMERS")
            })
            .or(if dataset.is_empty() { None } else { Some(0) });

        let mut state = AppState {
            dataset,
            reference,
            theme,
            config: LayoutConfig::default(),
            current: preferred,
            filter: FilterState::default(),
            hidden: BTreeSet::new(),
            collapse: CollapseState::new(),
            orientation: Orientation::default(),
            selected: None,
            fit_request: FitRequest::default(),
        };
        state.fit_request.request();
        state
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    pub fn theme(&self) -> &ColorTheme {
        &self.theme
    }

    pub fn layout_config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn hidden_kinds(&self) -> &BTreeSet<NodeKind> {
        &self.hidden
    }

    pub fn collapse(&self) -> &CollapseState {
        &self.collapse
    }

    pub fn is_empty(&self) -> bool {
        self.dataset.is_empty()
    }

    pub fn current_scenario(&self) -> Option<&Scenario> {
        self.current.and_then(|index| self.dataset.get(index))
    }

    pub fn current_scenario_label(&self) -> Option<String> {
        let index = self.current?;
        Some(self.dataset.get(index)?.display_name(index))
    }

    /// Scenarios selectable under the current filters, with their display
    /// labels. When the filters match nothing the whole dataset stays
    /// selectable rather than stranding the user.
    pub fn selectable_scenarios(&self) -> Vec<(String, &Scenario)> {
        let matching: Vec<(String, &Scenario)> = self
            .dataset
            .iter()
            .enumerate()
            .filter(|(_, scenario)| self.filter.matches_scenario(scenario))
            .map(|(index, scenario)| (scenario.display_name(index), scenario))
            .collect();
        if matching.is_empty() {
            self.dataset
                .iter()
                .enumerate()
                .map(|(index, scenario)| (scenario.display_name(index), scenario))
                .collect()
        } else {
            matching
        }
    }

    /// Select a scenario by display label. Collapse, hidden kinds and
    /// selection are scenario-scoped and reset here.
    pub fn select_scenario(&mut self, name: &str) -> bool {
        let Some(index) = self
            .dataset
            .iter()
            .enumerate()
            .find_map(|(index, scenario)| (scenario.display_name(index) == name).then_some(index))
        else {
            return false;
        };
        self.current = Some(index);
        self.collapse.clear();
        self.hidden.clear();
        self.selected = None;
        self.fit_request.request();
        true
    }

    /// Update the filters. Collapse state survives; if the current scenario
    /// drops out of the selectable list, selection falls to the first
    /// surviving scenario.
    pub fn set_filter(&mut self, filter: FilterState) {
        self.filter = filter;
        let still_selectable = self
            .current_scenario_label()
            .map(|label| {
                self.selectable_scenarios()
                    .iter()
                    .any(|(name, _)| *name == label)
            })
            .unwrap_or(false);
        if !still_selectable {
            let next = self
                .selectable_scenarios()
                .first()
                .map(|(name, _)| name.clone());
            if let Some(name) = next {
                self.select_scenario(&name);
            }
        }
        self.fit_request.request();
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
        self.fit_request.request();
    }

    /// Legend toggle: hide or re-show a node kind entirely.
    pub fn toggle_kind(&mut self, kind: NodeKind) -> bool {
        let hidden = if self.hidden.remove(&kind) {
            false
        } else {
            self.hidden.insert(kind);
            true
        };
        self.fit_request.request();
        hidden
    }

    pub fn toggle_collapse(&mut self, key: NodeKey) -> bool {
        let collapsed = self.collapse.toggle(key);
        self.fit_request.request();
        collapsed
    }

    pub fn collapse_all(&mut self) {
        if let Some(scenario) = self.current.and_then(|index| self.dataset.get(index)) {
            self.collapse.collapse_all(scenario);
        }
        self.fit_request.request();
    }

    pub fn expand_all(&mut self) {
        self.collapse.clear();
        self.fit_request.request();
    }

    pub fn select_node(&mut self, key: Option<NodeKey>) {
        self.selected = key;
    }

    pub fn selected_key(&self) -> Option<&NodeKey> {
        self.selected.as_ref()
    }

    pub fn request_fit(&mut self) {
        self.fit_request.request();
    }

    /// Consume the pending fit request against a settled viewport. An
    /// unsettled viewport or empty diagram leaves the request pending for
    /// the next pass.
    pub fn take_fit(&mut self, viewport: Viewport) -> Option<FitTransform> {
        if !self.fit_request.is_pending() {
            return None;
        }
        let bounds = self.scene()?.bounds?;
        let transform = fit(bounds, viewport)?;
        self.fit_request.take();
        Some(transform)
    }

    /// Recompute the positioned view model for the current scenario.
    pub fn scene(&self) -> Option<Scene> {
        let scenario = self.current_scenario()?;
        let label = self.current_scenario_label()?;
        Some(compose(
            scenario,
            &label,
            &self.collapse,
            &self.hidden,
            &self.filter,
            self.orientation,
            &self.config,
        ))
    }

    /// Whether the current scenario itself passes the active filters (the
    /// data-quality indicator).
    pub fn data_quality_ok(&self) -> bool {
        match self.current_scenario() {
            Some(scenario) => self.filter.matches_scenario(scenario),
            None => true,
        }
    }

    /// Effective classification for the inspector header.
    pub fn classification(&self) -> Classification {
        let customer = self.current_scenario().map(|s| &s.customer);
        let customer_type = self
            .filter
            .customer_type
            .clone()
            .or_else(|| customer.and_then(|c| c.customer_type.clone()))
            .unwrap_or_else(|| PLACEHOLDER.to_string());
        let industry_sector = self
            .filter
            .industry_sector
            .clone()
            .or_else(|| customer.and_then(|c| c.industry_sector.clone()))
            .unwrap_or_else(|| PLACEHOLDER.to_string());
        let sales_channel = self
            .filter
            .sales_channel
            .clone()
            .or_else(|| {
                self.current_scenario()
                    .and_then(dominant_channel)
                    .map(str::to_string)
            })
            .unwrap_or_else(|| PLACEHOLDER.to_string());
        Classification {
            customer_type,
            industry_sector,
            sales_channel,
        }
    }

    /// Raw record + kind hint for the inspector. Falls back to the primary
    /// customer when nothing is selected or the key no longer resolves.
    pub fn selected_record(&self) -> Option<(Value, NodeKind)> {
        let scenario = self.current_scenario()?;
        if let Some(key) = &self.selected
            && let Some(found) = find_node_value(scenario, key)
        {
            return Some(found);
        }
        let value = serde_json::to_value(&scenario.customer).unwrap_or(Value::Null);
        Some((value, NodeKind::Customer))
    }
}
