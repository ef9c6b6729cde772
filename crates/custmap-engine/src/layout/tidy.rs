//! Tidy-tree placement for the hierarchy skeleton.
//!
//! Buchheim-Junger-Leipert refinement of Walker's algorithm ("Improving
//! Walker's Algorithm to Run in Linear Time", 2002): a bottom-up first walk
//! merges subtree contours via threads and accumulates modifiers, a top-down
//! second walk resolves final positions. Coordinates come out in abstract
//! sibling units with the root at 0; the caller scales them onto the card
//! grid and rotates for the chosen orientation.

/// Separation in sibling units between adjacent siblings.
const SIBLING_SEPARATION: f64 = 1.0;
/// Separation in sibling units between nodes of different subtrees.
const SUBTREE_SEPARATION: f64 = 2.0;

/// Arena node for the skeleton walks. Indices refer into one flat arena in
/// pre-order; `number` is the index among siblings.
pub(super) struct TidyNode {
    pub parent: Option<usize>,
    pub children: Vec<usize>,
    pub depth: usize,
    pub number: usize,
    prelim: f64,
    modifier: f64,
    shift: f64,
    change: f64,
    thread: Option<usize>,
    ancestor: usize,
}

impl TidyNode {
    pub fn new(index: usize, parent: Option<usize>, depth: usize, number: usize) -> Self {
        TidyNode {
            parent,
            children: Vec::new(),
            depth,
            number,
            prelim: 0.0,
            modifier: 0.0,
            shift: 0.0,
            change: 0.0,
            thread: None,
            ancestor: index,
        }
    }
}

/// Compute the across-axis coordinate (in sibling units) for every arena
/// node. Index 0 must be the root.
pub(super) fn solve(nodes: &mut [TidyNode]) -> Vec<f64> {
    let mut out = vec![0.0; nodes.len()];
    if nodes.is_empty() {
        return out;
    }
    first_walk(nodes, 0);
    second_walk(nodes, 0, 0.0, &mut out);
    out
}

fn separation(nodes: &[TidyNode], a: usize, b: usize) -> f64 {
    if nodes[a].parent == nodes[b].parent {
        SIBLING_SEPARATION
    } else {
        SUBTREE_SEPARATION
    }
}

/// Next node down the left contour of the subtree under `v`.
fn next_left(nodes: &[TidyNode], v: usize) -> Option<usize> {
    nodes[v].children.first().copied().or(nodes[v].thread)
}

/// Next node down the right contour of the subtree under `v`.
fn next_right(nodes: &[TidyNode], v: usize) -> Option<usize> {
    nodes[v].children.last().copied().or(nodes[v].thread)
}

fn left_sibling(nodes: &[TidyNode], v: usize) -> Option<usize> {
    let parent = nodes[v].parent?;
    let number = nodes[v].number;
    if number > 0 {
        Some(nodes[parent].children[number - 1])
    } else {
        None
    }
}

fn leftmost_sibling(nodes: &[TidyNode], v: usize) -> Option<usize> {
    let parent = nodes[v].parent?;
    let first = nodes[parent].children[0];
    (first != v).then_some(first)
}

fn first_walk(nodes: &mut [TidyNode], v: usize) {
    let children = nodes[v].children.clone();
    if children.is_empty() {
        nodes[v].prelim = match left_sibling(nodes, v) {
            Some(w) => nodes[w].prelim + separation(nodes, v, w),
            None => 0.0,
        };
        return;
    }

    let mut default_ancestor = children[0];
    for &child in &children {
        first_walk(nodes, child);
        default_ancestor = apportion(nodes, child, default_ancestor);
    }
    execute_shifts(nodes, v);

    let midpoint =
        (nodes[children[0]].prelim + nodes[children[children.len() - 1]].prelim) / 2.0;
    match left_sibling(nodes, v) {
        Some(w) => {
            nodes[v].prelim = nodes[w].prelim + separation(nodes, v, w);
            nodes[v].modifier = nodes[v].prelim - midpoint;
        }
        None => nodes[v].prelim = midpoint,
    }
}

/// Resolve overlap between the subtree under `v` and everything left of it
/// by walking the inner contours of both sides in lockstep.
fn apportion(nodes: &mut [TidyNode], v: usize, mut default_ancestor: usize) -> usize {
    let Some(w) = left_sibling(nodes, v) else {
        return default_ancestor;
    };

    let mut inner_right = v;
    let mut outer_right = v;
    let mut inner_left = w;
    let mut outer_left = leftmost_sibling(nodes, v).unwrap_or(v);

    let mut mod_inner_right = nodes[inner_right].modifier;
    let mut mod_outer_right = nodes[outer_right].modifier;
    let mut mod_inner_left = nodes[inner_left].modifier;
    let mut mod_outer_left = nodes[outer_left].modifier;

    while let (Some(next_il), Some(next_ir)) = (
        next_right(nodes, inner_left),
        next_left(nodes, inner_right),
    ) {
        inner_left = next_il;
        inner_right = next_ir;
        if let Some(next) = next_left(nodes, outer_left) {
            outer_left = next;
        }
        if let Some(next) = next_right(nodes, outer_right) {
            outer_right = next;
        }
        nodes[outer_right].ancestor = v;

        let shift = (nodes[inner_left].prelim + mod_inner_left)
            - (nodes[inner_right].prelim + mod_inner_right)
            + separation(nodes, inner_left, inner_right);
        if shift > 0.0 {
            let moved = ancestor(nodes, inner_left, v, default_ancestor);
            move_subtree(nodes, moved, v, shift);
            mod_inner_right += shift;
            mod_outer_right += shift;
        }

        mod_inner_left += nodes[inner_left].modifier;
        mod_inner_right += nodes[inner_right].modifier;
        mod_outer_left += nodes[outer_left].modifier;
        mod_outer_right += nodes[outer_right].modifier;
    }

    if next_right(nodes, inner_left).is_some() && next_right(nodes, outer_right).is_none() {
        nodes[outer_right].thread = next_right(nodes, inner_left);
        nodes[outer_right].modifier += mod_inner_left - mod_outer_right;
    }
    if next_left(nodes, inner_right).is_some() && next_left(nodes, outer_left).is_none() {
        nodes[outer_left].thread = next_left(nodes, inner_right);
        nodes[outer_left].modifier += mod_inner_right - mod_outer_left;
        default_ancestor = v;
    }

    default_ancestor
}

/// The ancestor of the left contour node that shares `v`'s parent, or the
/// default ancestor when it belongs to an older subtree.
fn ancestor(nodes: &[TidyNode], contour: usize, v: usize, default_ancestor: usize) -> usize {
    let a = nodes[contour].ancestor;
    if nodes[a].parent == nodes[v].parent {
        a
    } else {
        default_ancestor
    }
}

fn move_subtree(nodes: &mut [TidyNode], left: usize, right: usize, shift: f64) {
    // left and right are distinct siblings, so the gap count is >= 1
    let subtrees = (nodes[right].number - nodes[left].number) as f64;
    nodes[right].change -= shift / subtrees;
    nodes[right].shift += shift;
    nodes[left].change += shift / subtrees;
    nodes[right].prelim += shift;
    nodes[right].modifier += shift;
}

/// Distribute accumulated intermediate shifts over the children of `v`,
/// right to left.
fn execute_shifts(nodes: &mut [TidyNode], v: usize) {
    let children = nodes[v].children.clone();
    let mut shift = 0.0;
    let mut change = 0.0;
    for &child in children.iter().rev() {
        nodes[child].prelim += shift;
        nodes[child].modifier += shift;
        change += nodes[child].change;
        shift += nodes[child].shift + change;
    }
}

fn second_walk(nodes: &[TidyNode], v: usize, modifier_sum: f64, out: &mut [f64]) {
    out[v] = nodes[v].prelim + modifier_sum;
    for &child in &nodes[v].children {
        second_walk(nodes, child, modifier_sum + nodes[v].modifier, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena(edges: &[(usize, usize)], count: usize) -> Vec<TidyNode> {
        let mut nodes: Vec<TidyNode> = (0..count)
            .map(|i| TidyNode::new(i, None, 0, 0))
            .collect();
        // Edge lists in these tests are parent-before-child, so one pass
        // settles depths.
        for &(parent, child) in edges {
            let number = nodes[parent].children.len();
            nodes[parent].children.push(child);
            nodes[child].parent = Some(parent);
            nodes[child].number = number;
            nodes[child].depth = nodes[parent].depth + 1;
        }
        nodes
    }

    #[test]
    fn root_is_centered_over_two_children() {
        let mut nodes = arena(&[(0, 1), (0, 2)], 3);
        let xs = solve(&mut nodes);
        assert!((xs[0] - (xs[1] + xs[2]) / 2.0).abs() < 1e-9);
        assert!((xs[2] - xs[1] - SIBLING_SEPARATION).abs() < 1e-9);
    }

    #[test]
    fn single_chain_stays_on_axis() {
        let mut nodes = arena(&[(0, 1), (1, 2)], 3);
        let xs = solve(&mut nodes);
        assert!(xs.iter().all(|x| x.abs() < 1e-9));
    }

    #[test]
    fn sibling_subtrees_do_not_overlap() {
        // Root with two subtrees of three leaves each.
        let mut nodes = arena(
            &[
                (0, 1),
                (0, 2),
                (1, 3),
                (1, 4),
                (1, 5),
                (2, 6),
                (2, 7),
                (2, 8),
            ],
            9,
        );
        let xs = solve(&mut nodes);
        let left_max = xs[3].max(xs[4]).max(xs[5]);
        let right_min = xs[6].min(xs[7]).min(xs[8]);
        assert!(
            right_min - left_max >= SUBTREE_SEPARATION - 1e-9,
            "contours must stay apart: {} vs {}",
            left_max,
            right_min
        );
    }

    #[test]
    fn uneven_depths_still_separate() {
        // Left subtree is deep and thin, right is shallow and wide.
        let mut nodes = arena(&[(0, 1), (0, 2), (1, 3), (3, 4), (2, 5), (2, 6)], 7);
        let xs = solve(&mut nodes);
        assert!(xs[2] > xs[1]);
        assert!(xs[6] > xs[5]);
    }
}
