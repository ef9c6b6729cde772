//! Diagram layout: tidy hierarchy skeleton plus perpendicular side fan-out.
//!
//! Hierarchy rules by node kind:
//! - ACCOUNT: only child accounts drive the skeleton (the parent-account
//!   chain); every other attachment is a side object.
//! - CUSTOMER / GLOBAL_CUSTOMER: all children are hierarchy children
//!   (country customers and root accounts).
//! - All other kinds: no hierarchy children; their attachments (a
//!   contract's billing, contacts, addresses) fan out as side objects too.

pub mod fit;
mod tidy;

use std::collections::{BTreeMap, VecDeque};
use std::fmt;
use std::str::FromStr;

use custmap_types::NodeKind;
use serde::{Deserialize, Serialize};

use crate::tree::{Node, NodeKey};

/// Direction of the hierarchy axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Orientation {
    /// Hierarchy runs top-down; siblings spread horizontally, side objects
    /// go right and stack vertically.
    #[default]
    Vertical,
    /// Hierarchy runs left-right; siblings spread vertically, side objects
    /// go down and stack horizontally.
    Horizontal,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Vertical => "VERTICAL",
            Orientation::Horizontal => "HORIZONTAL",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "VERTICAL" => Ok(Orientation::Vertical),
            "HORIZONTAL" => Ok(Orientation::Horizontal),
            other => Err(format!("unknown orientation: {}", other)),
        }
    }
}

/// Spacing constants. Defaults are the tuned production values; they are
/// generous enough that side fan-out never needs to deconflict against the
/// skeleton.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    pub card_width: f64,
    pub card_height: f64,
    /// Extra spacing between siblings along the across axis.
    pub sibling_gap: f64,
    /// Extra spacing between levels along the hierarchy axis.
    pub level_gap: f64,
    /// Perpendicular distance from a parent to its side objects.
    pub side_offset: f64,
    /// Extra spacing between stacked side objects in horizontal mode.
    pub side_stack_gap_h: f64,
    /// Extra spacing between stacked side objects in vertical mode.
    pub side_stack_gap_v: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            card_width: 268.0,
            card_height: 92.0,
            sibling_gap: 120.0,
            level_gap: 160.0,
            side_offset: 260.0,
            side_stack_gap_h: 70.0,
            side_stack_gap_v: 60.0,
        }
    }
}

impl LayoutConfig {
    /// Across-axis distance between adjacent siblings.
    pub fn sibling_spacing(&self) -> f64 {
        self.card_width + self.sibling_gap
    }

    /// Hierarchy-axis distance between levels.
    pub fn level_spacing(&self) -> f64 {
        self.card_height + self.level_gap
    }
}

/// Card-center coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Stable key → position, fully recomputed per render.
pub type Placement = BTreeMap<NodeKey, Point>;

/// Children that drive the tidy-tree skeleton.
pub fn hierarchy_children<'n, 'a>(node: &'n Node<'a>) -> Vec<&'n Node<'a>> {
    match node.kind {
        NodeKind::Account => node
            .children
            .iter()
            .filter(|child| child.kind == NodeKind::Account)
            .collect(),
        NodeKind::Customer | NodeKind::GlobalCustomer => node.children.iter().collect(),
        _ => Vec::new(),
    }
}

/// Children fanned out perpendicular to the hierarchy axis: everything that
/// is not a hierarchy child.
pub fn side_children<'n, 'a>(node: &'n Node<'a>) -> Vec<&'n Node<'a>> {
    match node.kind {
        NodeKind::Account => node
            .children
            .iter()
            .filter(|child| child.kind != NodeKind::Account)
            .collect(),
        NodeKind::Customer | NodeKind::GlobalCustomer => Vec::new(),
        _ => node.children.iter().collect(),
    }
}

/// Compute positions for every node reachable through the active
/// (post-collapse) children. Hierarchy nodes are placed by the tidy tree;
/// side objects fan out breadth-first from every placed node, so a side
/// object's own side children (a contract's billing profile) land in the
/// same pass. Already-placed keys are never repositioned.
pub fn layout<'a>(root: &Node<'a>, orientation: Orientation, config: &LayoutConfig) -> Placement {
    let mut arena: Vec<tidy::TidyNode> = Vec::new();
    let mut skeleton: Vec<&Node<'a>> = Vec::new();
    collect_skeleton(root, None, 0, &mut arena, &mut skeleton);

    let units = tidy::solve(&mut arena);

    let mut placement = Placement::new();
    let mut queue: VecDeque<&Node<'a>> = VecDeque::new();

    for (index, node) in skeleton.iter().enumerate() {
        let across = units[index] * config.sibling_spacing();
        let along = arena[index].depth as f64 * config.level_spacing();
        let point = match orientation {
            Orientation::Vertical => Point { x: across, y: along },
            Orientation::Horizontal => Point { x: along, y: across },
        };
        placement.entry(node.key.clone()).or_insert(point);
        queue.push_back(node);
    }

    while let Some(parent) = queue.pop_front() {
        let Some(&anchor) = placement.get(&parent.key) else {
            continue;
        };
        let kids = side_children(parent);
        if kids.is_empty() {
            continue;
        }

        let start = -((kids.len() as f64) - 1.0) / 2.0;
        for (index, kid) in kids.into_iter().enumerate() {
            let offset = start + index as f64;
            let point = match orientation {
                Orientation::Vertical => Point {
                    x: anchor.x + config.side_offset,
                    y: anchor.y + offset * (config.card_height + config.side_stack_gap_v),
                },
                Orientation::Horizontal => Point {
                    x: anchor.x + offset * (config.card_width + config.side_stack_gap_h),
                    y: anchor.y + config.side_offset,
                },
            };
            if !placement.contains_key(&kid.key) {
                placement.insert(kid.key.clone(), point);
                queue.push_back(kid);
            }
        }
    }

    placement
}

fn collect_skeleton<'n, 'a>(
    node: &'n Node<'a>,
    parent: Option<usize>,
    depth: usize,
    arena: &mut Vec<tidy::TidyNode>,
    skeleton: &mut Vec<&'n Node<'a>>,
) {
    let index = arena.len();
    let number = match parent {
        Some(p) => arena[p].children.len(),
        None => 0,
    };
    arena.push(tidy::TidyNode::new(index, parent, depth, number));
    skeleton.push(node);
    if let Some(p) = parent {
        arena[p].children.push(index);
    }

    for child in hierarchy_children(node) {
        collect_skeleton(child, Some(index), depth + 1, arena, skeleton);
    }
}
