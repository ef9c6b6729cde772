//! Scene emission: the positioned view model a renderer consumes.
//!
//! One `compose` call performs the full rebuild → collapse → layout pass and
//! projects the result into plain serializable structs. Hidden kinds are
//! excluded entirely (nodes and their edges); filters only flip the dimmed
//! flag.

use std::collections::BTreeSet;

use custmap_types::{FilterState, NodeKind, Scenario};
use serde::Serialize;

use crate::layout::fit::Bounds;
use crate::layout::{LayoutConfig, Orientation, Placement, Point, layout};
use crate::tree::{CollapseState, Node, NodeKey, RawRecord, build};

/// One rendered card.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneNode {
    pub key: NodeKey,
    pub kind: NodeKind,
    pub title: String,
    pub line1: String,
    pub line2: String,
    pub x: f64,
    pub y: f64,
    /// Whether the node had children before collapse; drives the +/− affix.
    pub collapsible: bool,
    pub collapsed: bool,
    pub dimmed: bool,
}

/// One parent→child connector with its orthogonal elbow path.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneEdge {
    pub source: NodeKey,
    pub target: NodeKey,
    pub points: Vec<Point>,
}

/// Positioned view model for one render pass.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    pub scenario: String,
    pub orientation: Orientation,
    pub nodes: Vec<SceneNode>,
    pub edges: Vec<SceneEdge>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounds: Option<Bounds>,
}

/// Build, collapse and lay out a scenario, then project it for rendering.
pub fn compose(
    scenario: &Scenario,
    scenario_label: &str,
    collapse: &CollapseState,
    hidden: &BTreeSet<NodeKind>,
    filter: &FilterState,
    orientation: Orientation,
    config: &LayoutConfig,
) -> Scene {
    let mut root = build(scenario);
    collapse.apply(&mut root);
    let placement = layout(&root, orientation, config);

    let mut nodes = Vec::new();
    let mut edges = Vec::new();
    project(
        &root, &placement, collapse, hidden, filter, &mut nodes, &mut edges,
    );

    let bounds = Bounds::around_cards(
        nodes.iter().map(|node| Point { x: node.x, y: node.y }),
        config,
    );

    Scene {
        scenario: scenario_label.to_string(),
        orientation,
        nodes,
        edges,
        bounds,
    }
}

fn project(
    node: &Node<'_>,
    placement: &Placement,
    collapse: &CollapseState,
    hidden: &BTreeSet<NodeKind>,
    filter: &FilterState,
    nodes: &mut Vec<SceneNode>,
    edges: &mut Vec<SceneEdge>,
) {
    let visible = !hidden.contains(&node.kind);
    let position = placement.get(&node.key);

    if visible && let Some(&point) = position {
        nodes.push(SceneNode {
            key: node.key.clone(),
            kind: node.kind,
            title: node.title.clone(),
            line1: node.line1.clone(),
            line2: node.line2.clone(),
            x: point.x,
            y: point.y,
            collapsible: node.has_children_original,
            collapsed: node.has_children_original && collapse.is_collapsed(&node.key),
            dimmed: dimmed(filter, node),
        });
    }

    for child in &node.children {
        if visible
            && !hidden.contains(&child.kind)
            && let (Some(&source), Some(&target)) =
                (position, placement.get(&child.key))
        {
            edges.push(SceneEdge {
                source: node.key.clone(),
                target: child.key.clone(),
                points: elbow(source, target),
            });
        }
        project(child, placement, collapse, hidden, filter, nodes, edges);
    }
}

/// Filter emphasis: customers dim on customer-type/industry misses, accounts
/// on channel misses; other kinds never dim.
fn dimmed(filter: &FilterState, node: &Node<'_>) -> bool {
    if filter.is_empty() {
        return false;
    }
    match (node.kind, &node.raw) {
        (NodeKind::Customer | NodeKind::GlobalCustomer, RawRecord::Customer(record)) => {
            !filter.matches_customer(record)
        }
        (NodeKind::Account, RawRecord::Account(record)) => !filter.matches_account(record),
        _ => false,
    }
}

/// Orthogonal connector path: route through the midpoint of the dominant
/// axis so the elbow stays clear of both cards.
fn elbow(source: Point, target: Point) -> Vec<Point> {
    let dx = (target.x - source.x).abs();
    let dy = (target.y - source.y).abs();
    if dx > dy {
        let mid = (source.x + target.x) / 2.0;
        vec![
            source,
            Point { x: mid, y: source.y },
            Point { x: mid, y: target.y },
            target,
        ]
    } else {
        let mid = (source.y + target.y) / 2.0;
        vec![
            source,
            Point { x: source.x, y: mid },
            Point { x: target.x, y: mid },
            target,
        ]
    }
}
