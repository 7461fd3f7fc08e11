//! Arena-backed forest of [`OrgNode`]s.
//!
//! Nodes live in a flat vector and reference each other by index, with a
//! side map from position id to index. Keeping children as index lists makes
//! the structure cycle-tolerant: malformed reporting lines (mutual or
//! self-reporting) cannot blow the stack at construction time, and every
//! traversal here carries a visited set so consumers stay safe too.
//!
//! Derived statistics are cached lazily and invalidated on mutation,
//! following the usual invalidate-on-write discipline for derived data.

use crate::hierarchy::node::{NodeIdx, OrgNode};
use crate::model::PositionId;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Derived per-forest statistics, computed lazily.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForestStats {
    /// Total nodes in the forest.
    pub positions: usize,
    /// Total assignments attached across all nodes.
    pub assignments: usize,
    /// Nodes with no active assignment.
    pub vacant: usize,
    /// Deepest level reachable from a root (roots are level 0).
    pub max_depth: u32,
}

/// A reconstructed organizational forest for one reference date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrgForest {
    /// Node arena; indices are stable for the life of the forest.
    pub(crate) nodes: Vec<OrgNode>,
    /// Indices of root nodes, in sibling order once sorted.
    pub(crate) roots: Vec<NodeIdx>,
    /// Position id to arena index.
    pub(crate) by_id: HashMap<PositionId, NodeIdx>,
    #[serde(skip)]
    stats: OnceCell<ForestStats>,
}

impl OrgForest {
    /// An empty forest.
    pub fn empty() -> Self {
        Self {
            nodes: Vec::new(),
            roots: Vec::new(),
            by_id: HashMap::new(),
            stats: OnceCell::new(),
        }
    }

    pub(crate) fn from_parts(
        nodes: Vec<OrgNode>,
        roots: Vec<NodeIdx>,
        by_id: HashMap<PositionId, NodeIdx>,
    ) -> Self {
        Self {
            nodes,
            roots,
            by_id,
            stats: OnceCell::new(),
        }
    }

    /// Number of nodes in the forest.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the forest holds no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The node at `idx`, if in bounds.
    #[inline]
    pub fn node(&self, idx: NodeIdx) -> Option<&OrgNode> {
        self.nodes.get(idx)
    }

    /// The node wrapping position `id`, if present.
    pub fn node_by_id(&self, id: PositionId) -> Option<&OrgNode> {
        self.by_id.get(&id).and_then(|&idx| self.nodes.get(idx))
    }

    /// Arena index of position `id`, if present.
    #[inline]
    pub fn index_of(&self, id: PositionId) -> Option<NodeIdx> {
        self.by_id.get(&id).copied()
    }

    /// Root indices, in sibling order once the forest has been sorted.
    #[inline]
    pub fn roots(&self) -> &[NodeIdx] {
        &self.roots
    }

    /// Child indices of the node at `idx`; empty when out of bounds.
    pub fn children(&self, idx: NodeIdx) -> &[NodeIdx] {
        self.nodes
            .get(idx)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// Iterate all nodes in arena order.
    pub fn iter(&self) -> impl Iterator<Item = &OrgNode> {
        self.nodes.iter()
    }

    /// Iterate the position ids of all nodes in arena order.
    pub fn ids(&self) -> impl Iterator<Item = PositionId> + '_ {
        self.nodes.iter().map(|n| n.id())
    }

    /// Depth-first preorder over the whole forest, yielding `(level, idx)`
    /// with roots at level 0. Cycle-safe: each node is visited at most once.
    pub fn depth_first(&self) -> Vec<(u32, NodeIdx)> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut seen: HashSet<NodeIdx> = HashSet::new();
        let mut stack: Vec<(u32, NodeIdx)> = Vec::new();
        for &root in self.roots.iter().rev() {
            stack.push((0, root));
        }
        while let Some((level, idx)) = stack.pop() {
            if !seen.insert(idx) {
                continue;
            }
            out.push((level, idx));
            for &child in self.children(idx).iter().rev() {
                if !seen.contains(&child) {
                    stack.push((level + 1, child));
                }
            }
        }
        out
    }

    /// Indices of `idx` and all its descendants, preorder, visited-guarded.
    pub fn subtree(&self, idx: NodeIdx) -> Vec<NodeIdx> {
        if idx >= self.nodes.len() {
            return Vec::new();
        }
        let mut out = Vec::new();
        let mut seen: HashSet<NodeIdx> = HashSet::new();
        let mut stack = vec![idx];
        while let Some(i) = stack.pop() {
            if !seen.insert(i) {
                continue;
            }
            out.push(i);
            for &child in self.children(i).iter().rev() {
                if !seen.contains(&child) {
                    stack.push(child);
                }
            }
        }
        out
    }

    /// Total assignments on `idx` and all its descendants.
    pub fn subtree_headcount(&self, idx: NodeIdx) -> usize {
        self.subtree(idx)
            .into_iter()
            .filter_map(|i| self.node(i))
            .map(OrgNode::headcount)
            .sum()
    }

    /// Cached forest statistics, computed on first use.
    pub fn stats(&self) -> &ForestStats {
        self.stats.get_or_init(|| self.compute_stats())
    }

    pub(crate) fn invalidate_stats(&mut self) {
        self.stats.take();
    }

    fn compute_stats(&self) -> ForestStats {
        let assignments = self.nodes.iter().map(OrgNode::headcount).sum();
        let vacant = self.nodes.iter().filter(|n| n.is_vacant()).count();
        let max_depth = self
            .depth_first()
            .into_iter()
            .map(|(level, _)| level)
            .max()
            .unwrap_or(0);
        ForestStats {
            positions: self.nodes.len(),
            assignments,
            vacant,
            max_depth,
        }
    }
}

/// Equality ignores the lazily computed stats cache.
impl PartialEq for OrgForest {
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes && self.roots == other.roots && self.by_id == other.by_id
    }
}

impl Eq for OrgForest {}

impl Default for OrgForest {
    fn default() -> Self {
        Self::empty()
    }
}
