//! Snapshot orchestration: filter, index, build, sort, summarize.
//!
//! Everything here is a pure function of its inputs. A comparison builds two
//! snapshots independently from their own filtered arrays; nothing is shared
//! or mutated between the builds, so repeated calls from concurrent render
//! passes need no coordination.

use crate::aggregate::{self, ChartSummary, DiffSummary};
use crate::diff::{SnapshotDiff, diff_snapshots};
use crate::hierarchy::{ForestBuilder, OrgForest, sort_forest};
use crate::model::{Assignment, Department, DepartmentId, Position, PositionId};
use crate::temporal::{filter_active, position_in_force};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Borrowed view of the three flat source tables for one tenant.
///
/// Callers pass empty slices rather than omitting a table; the engine never
/// sees a missing collection.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrgDataset<'a> {
    /// Department table.
    pub departments: &'a [Department],
    /// Position table.
    pub positions: &'a [Position],
    /// Employee-position assignment table.
    pub assignments: &'a [Assignment],
}

/// Department filter; the UI's `"all"` sentinel made typed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepartmentScope {
    /// No department filter.
    #[default]
    All,
    /// Only positions belonging to the given department.
    Only(DepartmentId),
}

impl DepartmentScope {
    /// Whether a position in `department` passes the filter.
    #[inline]
    pub fn admits(&self, department: DepartmentId) -> bool {
        match self {
            DepartmentScope::All => true,
            DepartmentScope::Only(id) => *id == department,
        }
    }
}

/// Parameters of one snapshot build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotParams {
    /// Reference date the snapshot reconstructs.
    pub on: NaiveDate,
    /// Department filter.
    pub scope: DepartmentScope,
}

impl SnapshotParams {
    /// Unscoped snapshot on the given date.
    pub fn on(date: NaiveDate) -> Self {
        Self {
            on: date,
            scope: DepartmentScope::All,
        }
    }
}

/// A fully built snapshot: the forest plus its reference date and counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Reference date the snapshot was built for.
    pub on: NaiveDate,
    /// The reconstructed forest, in deterministic sibling order.
    pub forest: OrgForest,
    /// Entity counts for the active filter.
    pub summary: ChartSummary,
}

/// A current snapshot compared against an earlier (or later) one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartComparison {
    /// The current snapshot; its nodes carry `Added`/`Unchanged` statuses.
    pub current: Snapshot,
    /// The comparison reference date.
    pub comparison_on: NaiveDate,
    /// Identity-based partition of the two snapshots' position ids.
    pub diff: SnapshotDiff,
    /// Bucket sizes of `diff`.
    pub diff_summary: DiffSummary,
}

/// Builds the snapshot for `params`: temporal filter on all three tables,
/// relational indexing, two-pass tree assembly, deterministic sort.
///
/// # Example
/// ```rust
/// use chrono::NaiveDate;
/// use orgsnap::snapshot::{OrgDataset, SnapshotParams, build_snapshot};
///
/// let dataset = OrgDataset::default();
/// let on = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let snapshot = build_snapshot(&dataset, &SnapshotParams::on(on));
/// assert!(snapshot.forest.is_empty());
/// assert_eq!(snapshot.summary.positions, 0);
/// ```
pub fn build_snapshot(dataset: &OrgDataset<'_>, params: &SnapshotParams) -> Snapshot {
    snapshot_inner(dataset, params, None)
}

/// Builds the current snapshot for `params` and an independent comparison
/// snapshot for `comparison_on` (same scope), then diffs and aggregates.
///
/// The current forest's nodes are marked `Added`/`Unchanged` against the
/// comparison id set; removed positions are returned flat, with their
/// comparison-snapshot department and assignments attached.
pub fn compare_snapshots(
    dataset: &OrgDataset<'_>,
    params: &SnapshotParams,
    comparison_on: NaiveDate,
) -> ChartComparison {
    let comparison_params = SnapshotParams {
        on: comparison_on,
        scope: params.scope,
    };
    let comparison = snapshot_inner(dataset, &comparison_params, None);
    let comparison_ids: HashSet<PositionId> = comparison.forest.ids().collect();

    let current = snapshot_inner(dataset, params, Some(&comparison_ids));
    let diff = diff_snapshots(&current.forest, &comparison.forest);
    let diff_summary = aggregate::summarize_diff(&diff);

    ChartComparison {
        current,
        comparison_on,
        diff,
        diff_summary,
    }
}

fn snapshot_inner(
    dataset: &OrgDataset<'_>,
    params: &SnapshotParams,
    comparison_ids: Option<&HashSet<PositionId>>,
) -> Snapshot {
    let departments = filter_active(dataset.departments, params.on);
    let assignments = filter_active(dataset.assignments, params.on);
    let positions: Vec<&Position> = dataset
        .positions
        .iter()
        .filter(|p| position_in_force(p, params.on))
        .collect();

    let mut builder = ForestBuilder::new().department_scope(params.scope);
    if let Some(ids) = comparison_ids {
        builder = builder.comparison_ids(ids.iter().copied());
    }
    let mut forest = builder.build(&positions, &assignments, &departments);
    sort_forest(&mut forest);

    let department_count = departments
        .iter()
        .filter(|d| params.scope.admits(d.id))
        .count();
    let summary = aggregate::summarize(&forest, department_count);

    Snapshot {
        on: params.on,
        forest,
        summary,
    }
}
