//! Collapse state and the collapse transform.

use std::collections::BTreeSet;

use custmap_types::Scenario;

use super::key::NodeKey;
use super::{Node, build, walk};

/// Set of collapsed node keys, scenario-scoped.
///
/// The transform moves a collapsed node's children into the backup slot and
/// restores them verbatim on expand, so re-applying it on every render is
/// safe regardless of the tree's current state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollapseState {
    collapsed: BTreeSet<NodeKey>,
}

impl CollapseState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_collapsed(&self, key: &NodeKey) -> bool {
        self.collapsed.contains(key)
    }

    pub fn is_empty(&self) -> bool {
        self.collapsed.is_empty()
    }

    pub fn len(&self) -> usize {
        self.collapsed.len()
    }

    /// Flip membership of a key; returns whether the key is now collapsed.
    pub fn toggle(&mut self, key: NodeKey) -> bool {
        if self.collapsed.remove(&key) {
            false
        } else {
            self.collapsed.insert(key);
            true
        }
    }

    pub fn insert(&mut self, key: NodeKey) {
        self.collapsed.insert(key);
    }

    /// Collapse every collapsible node below the root: walks a fresh,
    /// uncollapsed build and collects every key with depth ≥ 1 that had
    /// children. The root is never auto-collapsed.
    pub fn collapse_all(&mut self, scenario: &Scenario) {
        let root = build(scenario);
        let mut collapsed = BTreeSet::new();
        walk(&root, &mut |node| {
            if node.depth >= 1 && node.has_children_original {
                collapsed.insert(node.key.clone());
            }
        });
        self.collapsed = collapsed;
    }

    /// Expand everything.
    pub fn clear(&mut self) {
        self.collapsed.clear();
    }

    /// Apply the collapse set to a tree (pre-order, idempotent): restore a
    /// no-longer-collapsed node's backup, then stash a collapsed node's
    /// children, then recurse into whatever is now active.
    pub fn apply(&self, node: &mut Node<'_>) {
        let collapsed = self.is_collapsed(&node.key);

        if !collapsed
            && node.children.is_empty()
            && let Some(saved) = node.collapsed_children.take()
        {
            node.children = saved;
        }

        if collapsed && !node.children.is_empty() {
            node.collapsed_children = Some(std::mem::take(&mut node.children));
        }

        for child in &mut node.children {
            self.apply(child);
        }
    }
}
