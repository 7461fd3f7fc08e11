//! Hierarchy nodes: positions resolved against their snapshot context.

use crate::model::{Assignment, Department, Position, PositionId};
use serde::{Deserialize, Serialize};

/// Index of a node inside its [`OrgForest`](crate::hierarchy::OrgForest)
/// arena.
pub type NodeIdx = usize;

/// Classification of a node relative to a comparison snapshot.
///
/// `Modified` is a reserved slot for field-level change detection; the
/// current engine classifies by identity only and never produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeStatus {
    /// Present in the current snapshot but not the comparison snapshot.
    Added,
    /// Present in the comparison snapshot but not the current snapshot.
    Removed,
    /// Present in both snapshots (by id; contents may differ).
    Unchanged,
    /// Reserved; never produced.
    Modified,
}

/// One position in a reconstructed snapshot, with its department resolved,
/// its active assignments attached, and its children stored as arena
/// indices.
///
/// Nodes are built fresh on every snapshot query and discarded after use;
/// nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgNode {
    /// The underlying position record.
    pub position: Position,
    /// Resolved owning department; `None` when the department id does not
    /// resolve in the filtered set (not an error).
    pub department: Option<Department>,
    /// Assignments active on the snapshot date, in input order.
    pub assignments: Vec<Assignment>,
    /// Child nodes, as indices into the owning forest's arena.
    pub children: Vec<NodeIdx>,
    /// Comparison classification; `None` unless a comparison is active.
    pub status: Option<ChangeStatus>,
}

impl OrgNode {
    /// The position id this node wraps.
    #[inline]
    pub fn id(&self) -> PositionId {
        self.position.id
    }

    /// The position title.
    #[inline]
    pub fn title(&self) -> &str {
        &self.position.title
    }

    /// True when no active assignment references this position.
    #[inline]
    pub fn is_vacant(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Number of employees assigned to this position.
    #[inline]
    pub fn headcount(&self) -> usize {
        self.assignments.len()
    }

    /// The primary assignment, if one is marked.
    pub fn primary_assignment(&self) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.primary)
    }
}
