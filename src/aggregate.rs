//! Summary counts rolled up for display.

use crate::diff::SnapshotDiff;
use crate::hierarchy::OrgForest;
use serde::{Deserialize, Serialize};

/// Raw entity counts for one filtered snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSummary {
    /// Positions in the built forest (post scope filter).
    pub positions: usize,
    /// Assignments attached across the forest.
    pub assignments: usize,
    /// Departments active on the reference date and admitted by the scope.
    pub departments: usize,
}

/// Bucket sizes of a snapshot comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSummary {
    /// Positions only in the current snapshot.
    pub added: usize,
    /// Positions only in the comparison snapshot.
    pub removed: usize,
    /// Positions present in both.
    pub unchanged: usize,
}

/// Entity counts for `forest`; the department count is supplied by the
/// snapshot pipeline, which knows the active filter.
pub fn summarize(forest: &OrgForest, departments: usize) -> ChartSummary {
    let stats = forest.stats();
    ChartSummary {
        positions: stats.positions,
        assignments: stats.assignments,
        departments,
    }
}

/// Bucket sizes of `diff`. Empty input yields all zeros.
pub fn summarize_diff(diff: &SnapshotDiff) -> DiffSummary {
    DiffSummary {
        added: diff.added.len(),
        removed: diff.removed.len(),
        unchanged: diff.unchanged.len(),
    }
}
