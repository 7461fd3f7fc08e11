//! Serializable expand/collapse view state and pure visibility walks.
//!
//! The rendering layer owns no hidden state: which subtrees are expanded is
//! an explicit value passed into and out of pure functions, so the same
//! forest and state always produce the same visible rows.

use crate::hierarchy::{NodeIdx, OrgForest, OrgNode};
use crate::model::PositionId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The set of expanded position ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpansionState {
    expanded: HashSet<PositionId>,
}

impl ExpansionState {
    /// Empty state: everything collapsed.
    pub fn new() -> Self {
        Self::default()
    }

    /// State with every node that has children expanded.
    pub fn expand_all(forest: &OrgForest) -> Self {
        let expanded = forest
            .iter()
            .filter(|n| !n.children.is_empty())
            .map(OrgNode::id)
            .collect();
        Self { expanded }
    }

    /// Whether the subtree under `id` is expanded.
    #[inline]
    pub fn is_expanded(&self, id: PositionId) -> bool {
        self.expanded.contains(&id)
    }

    /// Expand the subtree under `id`.
    pub fn expand(&mut self, id: PositionId) {
        self.expanded.insert(id);
    }

    /// Collapse the subtree under `id`.
    pub fn collapse(&mut self, id: PositionId) {
        self.expanded.remove(&id);
    }

    /// Flip the state of `id`; returns the new expanded flag.
    pub fn toggle(&mut self, id: PositionId) -> bool {
        if !self.expanded.insert(id) {
            self.expanded.remove(&id);
            return false;
        }
        true
    }

    /// Collapse everything.
    pub fn clear(&mut self) {
        self.expanded.clear();
    }
}

/// Nodes visible under `state`, as `(level, idx)` in display order: roots
/// always show; a node's children show only while the node is expanded.
/// Cycle-safe via a visited set.
pub fn visible_nodes(forest: &OrgForest, state: &ExpansionState) -> Vec<(u32, NodeIdx)> {
    let mut out = Vec::new();
    let mut seen: HashSet<NodeIdx> = HashSet::new();
    let mut stack: Vec<(u32, NodeIdx)> = Vec::new();
    for &root in forest.roots().iter().rev() {
        stack.push((0, root));
    }
    while let Some((level, idx)) = stack.pop() {
        if !seen.insert(idx) {
            continue;
        }
        out.push((level, idx));
        let Some(node) = forest.node(idx) else {
            continue;
        };
        if state.is_expanded(node.id()) {
            for &child in node.children.iter().rev() {
                if !seen.contains(&child) {
                    stack.push((level + 1, child));
                }
            }
        }
    }
    out
}
