use std::collections::BTreeSet;

use custmap_engine::{
    AppState, CollapseState, LayoutConfig, NodeKey, Orientation, Viewport, build, compose, walk,
};
use custmap_testing::fixtures;
use custmap_types::{ColorTheme, FilterState, NodeKind};

fn scene_for(
    scenario: &custmap_types::Scenario,
    collapse: &CollapseState,
    hidden: &BTreeSet<NodeKind>,
    filter: &FilterState,
) -> custmap_engine::Scene {
    compose(
        scenario,
        "test",
        collapse,
        hidden,
        filter,
        Orientation::Vertical,
        &LayoutConfig::default(),
    )
}

fn boot_state() -> AppState {
    AppState::new(
        fixtures::dataset(),
        fixtures::reference(),
        ColorTheme::default(),
    )
}

#[test]
fn scene_covers_every_visible_node_and_edge() {
    let scenario = fixtures::strategic_multi_country();
    let scene = scene_for(
        &scenario,
        &CollapseState::new(),
        &BTreeSet::new(),
        &FilterState::default(),
    );

    let root = build(&scenario);
    let mut total = 0;
    walk(&root, &mut |_| total += 1);

    assert_eq!(scene.nodes.len(), total);
    // A tree has exactly one edge per non-root node.
    assert_eq!(scene.edges.len(), total - 1);
    assert!(scene.bounds.is_some());
}

#[test]
fn hidden_kinds_are_excluded_with_their_edges() {
    let scenario = fixtures::strategic_multi_country();
    let mut hidden = BTreeSet::new();
    hidden.insert(NodeKind::Contact);

    let scene = scene_for(
        &scenario,
        &CollapseState::new(),
        &hidden,
        &FilterState::default(),
    );

    assert!(scene.nodes.iter().all(|node| node.kind != NodeKind::Contact));
    assert!(
        scene
            .edges
            .iter()
            .all(|edge| !edge.target.as_str().starts_with("CONTACT:"))
    );
}

#[test]
fn filters_dim_but_never_remove() {
    let scenario = fixtures::strategic_multi_country();
    let filter = FilterState {
        customer_type: Some("STRATEGIC_CUSTOMERS".to_string()),
        sales_channel: Some("MAJOR_ACCOUNT".to_string()),
        ..Default::default()
    };

    let plain = scene_for(
        &scenario,
        &CollapseState::new(),
        &BTreeSet::new(),
        &FilterState::default(),
    );
    let filtered = scene_for(&scenario, &CollapseState::new(), &BTreeSet::new(), &filter);
    assert_eq!(plain.nodes.len(), filtered.nodes.len());

    let by_key = |key: &str| {
        filtered
            .nodes
            .iter()
            .find(|node| node.key.as_str() == key)
            .unwrap_or_else(|| panic!("missing node: {}", key))
    };

    // Root matches the customer-type predicate; country customers do not.
    assert!(!by_key("GLOBAL_CUSTOMER:CUST-GLOB-1").dimmed);
    assert!(by_key("CUSTOMER:CUST-DE-1").dimmed);
    // Accounts answer only to the channel predicate.
    assert!(!by_key("ACCOUNT:ACC-GLOB-1").dimmed);
    assert!(by_key("ACCOUNT:ACC-DE-1").dimmed);
    // Attachments never dim.
    assert!(!by_key("CONTACT:CP-1@ACCOUNT:ACC-GLOB-1#0").dimmed);
}

#[test]
fn edges_are_orthogonal_elbows() {
    let scenario = fixtures::strategic_multi_country();
    let scene = scene_for(
        &scenario,
        &CollapseState::new(),
        &BTreeSet::new(),
        &FilterState::default(),
    );

    for edge in &scene.edges {
        assert_eq!(edge.points.len(), 4);
        for pair in edge.points.windows(2) {
            let straight =
                (pair[0].x - pair[1].x).abs() < 1e-9 || (pair[0].y - pair[1].y).abs() < 1e-9;
            assert!(straight, "segment is not axis-aligned");
        }
    }
}

#[test]
fn collapsed_nodes_report_their_state() {
    let scenario = fixtures::strategic_multi_country();
    let mut collapse = CollapseState::new();
    collapse.toggle(NodeKey::new("ACCOUNT:ACC-GLOB-1"));

    let scene = scene_for(
        &scenario,
        &collapse,
        &BTreeSet::new(),
        &FilterState::default(),
    );

    let account = scene
        .nodes
        .iter()
        .find(|node| node.key.as_str() == "ACCOUNT:ACC-GLOB-1")
        .expect("account stays visible");
    assert!(account.collapsible);
    assert!(account.collapsed);
    assert!(
        !scene
            .nodes
            .iter()
            .any(|node| node.kind == NodeKind::Platform),
        "collapsed subtree must disappear"
    );

    // A childless node never shows the affix state.
    let bare = scene_for(
        &fixtures::bare_account(),
        &CollapseState::new(),
        &BTreeSet::new(),
        &FilterState::default(),
    );
    let account = bare
        .nodes
        .iter()
        .find(|node| node.kind == NodeKind::Account)
        .expect("account present");
    assert!(!account.collapsible);
    assert!(!account.collapsed);
}

#[test]
fn boot_prefers_the_first_relationship_scenario() {
    let state = boot_state();
    assert_eq!(state.current_scenario_label().as_deref(), Some("Retail chain"));
    let scene = state.scene().expect("scene available at boot");
    assert!(!scene.nodes.is_empty());
}

#[test]
fn scenario_change_resets_scenario_scoped_state() {
    let mut state = boot_state();
    state.toggle_collapse(NodeKey::new("ACCOUNT:ACC-REL-1"));
    state.toggle_kind(NodeKind::Contact);
    assert!(!state.collapse().is_empty());
    assert!(!state.hidden_kinds().is_empty());

    assert!(state.select_scenario("Global manufacturer"));
    assert!(state.collapse().is_empty());
    assert!(state.hidden_kinds().is_empty());
    assert_eq!(
        state.current_scenario_label().as_deref(),
        Some("Global manufacturer")
    );
}

#[test]
fn filter_and_orientation_changes_preserve_collapse_state() {
    let mut state = boot_state();
    state.toggle_collapse(NodeKey::new("ACCOUNT:ACC-REL-1"));

    state.set_filter(FilterState {
        sales_channel: Some("TELESALES".to_string()),
        ..Default::default()
    });
    state.set_orientation(Orientation::Horizontal);

    assert!(state.collapse().is_collapsed(&NodeKey::new("ACCOUNT:ACC-REL-1")));
    assert_eq!(state.orientation(), Orientation::Horizontal);
    assert_eq!(state.current_scenario_label().as_deref(), Some("Retail chain"));
}

#[test]
fn filters_that_exclude_the_current_scenario_move_selection() {
    let mut state = boot_state();
    state.set_filter(FilterState {
        industry_sector: Some("MANUFACTURING".to_string()),
        ..Default::default()
    });
    assert_eq!(
        state.current_scenario_label().as_deref(),
        Some("Global manufacturer")
    );
    assert!(state.data_quality_ok());
}

#[test]
fn unmatched_filters_keep_the_whole_dataset_selectable() {
    let mut state = boot_state();
    state.set_filter(FilterState {
        customer_type: Some("NO_SUCH_TYPE".to_string()),
        ..Default::default()
    });
    assert_eq!(state.selectable_scenarios().len(), fixtures::dataset().len());
    assert!(!state.data_quality_ok());
}

#[test]
fn fit_requests_coalesce_and_defer_on_unsettled_viewports() {
    let mut state = boot_state();
    state.request_fit();
    state.request_fit();

    // Unsettled viewport: the request stays pending.
    assert!(
        state
            .take_fit(Viewport {
                width: 10.0,
                height: 10.0
            })
            .is_none()
    );

    let transform = state
        .take_fit(Viewport {
            width: 1280.0,
            height: 720.0,
        })
        .expect("settled viewport fits");
    assert!(transform.scale > 0.0);

    // Consumed: no second transform without a new request.
    assert!(
        state
            .take_fit(Viewport {
                width: 1280.0,
                height: 720.0
            })
            .is_none()
    );
}

#[test]
fn classification_prefers_filters_then_scenario_data() {
    let mut state = boot_state();
    let classification = state.classification();
    assert_eq!(classification.customer_type, "RELATIONSHIP_CUSTOMERS");
    assert_eq!(classification.industry_sector, "RETAIL");
    assert_eq!(classification.sales_channel, "TELESALES");

    state.set_filter(FilterState {
        sales_channel: Some("FIELD_SALES".to_string()),
        ..Default::default()
    });
    assert_eq!(state.classification().sales_channel, "FIELD_SALES");
}

#[test]
fn selection_resolves_raw_records_with_kind_hints() {
    let mut state = boot_state();
    assert!(state.select_scenario("Global manufacturer"));

    state.select_node(Some(NodeKey::new("CONTACT:CP-1@ACCOUNT:ACC-GLOB-1#0")));
    let (value, kind) = state.selected_record().expect("record resolves");
    assert_eq!(kind, NodeKind::Contact);
    assert_eq!(
        value.get("contactPersonId").and_then(|v| v.as_str()),
        Some("CP-1")
    );

    // Unknown keys fall back to the primary customer.
    state.select_node(Some(NodeKey::new("CONTACT:GONE@NOWHERE#9")));
    let (value, kind) = state.selected_record().expect("fallback resolves");
    assert_eq!(kind, NodeKind::Customer);
    assert_eq!(
        value.get("mdmCustomerId").and_then(|v| v.as_str()),
        Some("CUST-GLOB-1")
    );
}

#[test]
fn empty_dataset_yields_no_scene() {
    let state = AppState::new(Vec::new(), fixtures::reference(), ColorTheme::default());
    assert!(state.is_empty());
    assert!(state.scene().is_none());
    assert!(state.current_scenario_label().is_none());
}
