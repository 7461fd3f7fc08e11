//! Identity-based snapshot comparison.
//!
//! Classification is by presence or absence of a position id across the two
//! snapshots, never by field content: a position present in both snapshots
//! with a changed title or reporting line is still `unchanged`. Field-level
//! detection is the reserved [`ChangeStatus::Modified`] extension point.
//!
//! [`ChangeStatus::Modified`]: crate::hierarchy::ChangeStatus::Modified

use crate::hierarchy::OrgForest;
use crate::model::{Assignment, Department, Position, PositionId};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A position present only in the comparison snapshot, carried as a full
/// record with its *comparison-snapshot* department and assignments.
///
/// Removed positions are rendered flat (no children); the comparison tree
/// structure is deliberately not reused for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemovedPosition {
    /// The position as it existed in the comparison snapshot.
    pub position: Position,
    /// Department resolved in the comparison snapshot, if any.
    pub department: Option<Department>,
    /// Assignments active on the comparison date.
    pub assignments: Vec<Assignment>,
}

/// Partition of the union of two snapshots' position ids.
///
/// The three buckets are disjoint and total: every id appearing in either
/// snapshot lands in exactly one of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotDiff {
    /// Ids present in the current snapshot only, ascending.
    pub added: Vec<PositionId>,
    /// Full records present in the comparison snapshot only, in deterministic
    /// (title, id) order.
    pub removed: Vec<RemovedPosition>,
    /// Ids present in both snapshots, ascending.
    pub unchanged: Vec<PositionId>,
}

/// Classifies every position id of `current` and `comparison` as added,
/// removed, or unchanged.
pub fn diff_snapshots(current: &OrgForest, comparison: &OrgForest) -> SnapshotDiff {
    let comparison_ids: HashSet<PositionId> = comparison.ids().collect();
    let current_ids: HashSet<PositionId> = current.ids().collect();

    let (unchanged, added): (Vec<_>, Vec<_>) = current
        .ids()
        .sorted()
        .partition(|id| comparison_ids.contains(id));

    let removed: Vec<RemovedPosition> = comparison
        .iter()
        .filter(|node| !current_ids.contains(&node.id()))
        .sorted_by(|a, b| crate::hierarchy::sibling_order(a, b))
        .map(|node| RemovedPosition {
            position: node.position.clone(),
            department: node.department.clone(),
            assignments: node.assignments.clone(),
        })
        .collect();

    SnapshotDiff {
        added,
        removed,
        unchanged,
    }
}
