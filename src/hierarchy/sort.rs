//! Deterministic sibling ordering.
//!
//! Repeated builds from identical input must be byte-identical, so sibling
//! and root order is a strict total order: case-insensitive title first,
//! then raw title bytes, then position id. The id tie-break keeps order
//! reproducible even when two siblings share a title.

use crate::hierarchy::forest::OrgForest;
use crate::hierarchy::node::OrgNode;
use std::cmp::Ordering;

/// Total order on sibling nodes.
pub fn sibling_order(a: &OrgNode, b: &OrgNode) -> Ordering {
    let fold_a = a.title().to_lowercase();
    let fold_b = b.title().to_lowercase();
    fold_a
        .cmp(&fold_b)
        .then_with(|| a.title().cmp(b.title()))
        .then_with(|| a.id().cmp(&b.id()))
}

/// Sorts roots and every node's children in place by [`sibling_order`].
///
/// Each adjacency list is sorted independently, so no recursion takes place
/// and reporting cycles cannot cause trouble here. Sorting is stable but the
/// order is total, so stability never decides the outcome.
pub fn sort_forest(forest: &mut OrgForest) {
    for idx in 0..forest.nodes.len() {
        let mut children = std::mem::take(&mut forest.nodes[idx].children);
        children.sort_by(|&x, &y| sibling_order(&forest.nodes[x], &forest.nodes[y]));
        forest.nodes[idx].children = children;
    }
    let mut roots = std::mem::take(&mut forest.roots);
    roots.sort_by(|&x, &y| sibling_order(&forest.nodes[x], &forest.nodes[y]));
    forest.roots = roots;
    forest.invalidate_stats();
}
