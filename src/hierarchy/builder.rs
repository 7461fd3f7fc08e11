//! Two-pass forest assembly from flat, already-filtered records.
//!
//! Pass one maps every in-scope position to a fresh node with its department
//! resolved and its assignments attached. Pass two walks the `reports_to`
//! pointers and attaches each node to its parent when the parent is present
//! in the same filtered set; otherwise the node is promoted to a root
//! ("orphan promotion" — a position whose declared parent expired or fell
//! outside the department scope is shown at top level, not dropped).
//!
//! Attachment never recurses, so malformed reporting cycles cannot overflow
//! the stack here; nodes trapped in a cycle simply end up unreachable from
//! any root. Overall cost is O(n) in the number of filtered records.

use crate::hierarchy::forest::OrgForest;
use crate::hierarchy::node::{ChangeStatus, NodeIdx, OrgNode};
use crate::index::assignments_by_position;
use crate::model::{Assignment, Department, Position, PositionId};
use crate::snapshot::DepartmentScope;
use std::collections::{HashMap, HashSet};

/// Fluent builder for [`OrgForest`]s.
///
/// # Example
/// ```rust
/// use orgsnap::hierarchy::ForestBuilder;
/// let forest = ForestBuilder::new().build(&[], &[], &[]);
/// assert!(forest.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ForestBuilder {
    scope: DepartmentScope,
    comparison_ids: Option<HashSet<PositionId>>,
}

impl ForestBuilder {
    /// A builder with no department scope and no comparison set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the forest to positions in the given department scope.
    pub fn department_scope(mut self, scope: DepartmentScope) -> Self {
        self.scope = scope;
        self
    }

    /// Supply the position-id set of a comparison snapshot. Every built node
    /// is then marked [`ChangeStatus::Added`] when absent from the set and
    /// [`ChangeStatus::Unchanged`] otherwise.
    pub fn comparison_ids<I: IntoIterator<Item = PositionId>>(mut self, ids: I) -> Self {
        self.comparison_ids = Some(ids.into_iter().collect());
        self
    }

    /// Assemble a forest from filtered record slices.
    ///
    /// Inputs are treated as read-only; every node owns fresh clones, so two
    /// independent snapshot builds can never contaminate each other. The
    /// build has no failure paths: unresolved departments become `None`,
    /// positions without assignments are vacant, and a duplicate position id
    /// keeps its first record (later ones are skipped with a warning).
    pub fn build(
        &self,
        positions: &[&Position],
        assignments: &[&Assignment],
        departments: &[&Department],
    ) -> OrgForest {
        let scoped: Vec<&Position> = positions
            .iter()
            .copied()
            .filter(|p| self.scope.admits(p.department))
            .collect();

        let dept_by_id: HashMap<_, &Department> =
            departments.iter().map(|d| (d.id, *d)).collect();
        let mut asg_by_pos = assignments_by_position(assignments);

        // Pass one: one node per position, in input order.
        let mut nodes: Vec<OrgNode> = Vec::with_capacity(scoped.len());
        let mut by_id: HashMap<PositionId, NodeIdx> = HashMap::with_capacity(scoped.len());
        for position in scoped {
            if by_id.contains_key(&position.id) {
                log::warn!(
                    "duplicate position id {} in filtered set; keeping first record",
                    position.id
                );
                continue;
            }
            let status = self
                .comparison_ids
                .as_ref()
                .map(|ids| {
                    if ids.contains(&position.id) {
                        ChangeStatus::Unchanged
                    } else {
                        ChangeStatus::Added
                    }
                });
            let matched: Vec<Assignment> = asg_by_pos
                .remove(&position.id)
                .map(|refs| refs.into_iter().cloned().collect())
                .unwrap_or_default();
            by_id.insert(position.id, nodes.len());
            nodes.push(OrgNode {
                position: position.clone(),
                department: dept_by_id.get(&position.department).map(|d| (*d).clone()),
                assignments: matched,
                children: Vec::new(),
                status,
            });
        }

        // Pass two: attach children by reporting line; unresolved parents
        // promote the node to a root.
        let mut roots: Vec<NodeIdx> = Vec::new();
        for idx in 0..nodes.len() {
            let parent = nodes[idx]
                .position
                .reports_to
                .and_then(|pid| by_id.get(&pid).copied());
            match parent {
                Some(parent_idx) => nodes[parent_idx].children.push(idx),
                None => roots.push(idx),
            }
        }

        OrgForest::from_parts(nodes, roots, by_id)
    }
}
