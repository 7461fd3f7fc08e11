//! Optional pre-flight dataset validation.
//!
//! The snapshot pipeline is deliberately permissive and never calls these
//! checks itself; they exist for callers that want to surface data-quality
//! problems (duplicate ids, dangling assignments, reporting cycles) before
//! building snapshots.

use crate::error::OrgSnapError;
use crate::model::{DepartmentId, PositionId};
use crate::snapshot::OrgDataset;
use std::collections::{HashMap, HashSet};

/// Validation toggles for an [`OrgDataset`].
#[derive(Debug, Clone, Copy)]
pub struct ValidationOptions {
    /// Ensure position and department ids are unique within their tables.
    pub check_duplicate_ids: bool,
    /// Ensure each assignment references a position present in the table.
    pub check_dangling_assignments: bool,
    /// How to handle cycles found in the reporting lines.
    pub cycles: CycleHandling,
}

impl ValidationOptions {
    /// Enable every check with hard-error handling.
    pub fn all() -> Self {
        Self {
            check_duplicate_ids: true,
            check_dangling_assignments: true,
            cycles: CycleHandling::Error,
        }
    }
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            check_duplicate_ids: true,
            check_dangling_assignments: true,
            cycles: CycleHandling::Warn,
        }
    }
}

/// Behavior for reporting-line cycle detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleHandling {
    /// Skip cycle detection.
    Ignore,
    /// Log a warning and record the cycle members in the report.
    Warn,
    /// Return an error naming a position on the first cycle found.
    Error,
}

/// Findings collected by [`validate_dataset`] under `Warn` handling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Positions that participate in a reporting-line cycle.
    pub cycle_members: Vec<PositionId>,
}

impl ValidationReport {
    /// True when nothing was flagged.
    pub fn is_clean(&self) -> bool {
        self.cycle_members.is_empty()
    }
}

/// Validates the raw (unfiltered) dataset against `opts`.
///
/// Enabled hard checks fail with the first offender; cycle findings under
/// `Warn` are logged and collected into the returned report.
pub fn validate_dataset(
    dataset: &OrgDataset<'_>,
    opts: &ValidationOptions,
) -> Result<ValidationReport, OrgSnapError> {
    if opts.check_duplicate_ids {
        let mut seen_positions: HashSet<PositionId> = HashSet::new();
        for p in dataset.positions {
            if !seen_positions.insert(p.id) {
                return Err(OrgSnapError::DuplicatePositionId(p.id));
            }
        }
        let mut seen_departments: HashSet<DepartmentId> = HashSet::new();
        for d in dataset.departments {
            if !seen_departments.insert(d.id) {
                return Err(OrgSnapError::DuplicateDepartmentId(d.id));
            }
        }
    }

    if opts.check_dangling_assignments {
        let known: HashSet<PositionId> = dataset.positions.iter().map(|p| p.id).collect();
        for a in dataset.assignments {
            if !known.contains(&a.position) {
                return Err(OrgSnapError::DanglingAssignment {
                    assignment: a.id,
                    position: a.position,
                });
            }
        }
    }

    let mut report = ValidationReport::default();
    if opts.cycles != CycleHandling::Ignore {
        let members = reporting_cycle_members(dataset);
        if let Some(&first) = members.first() {
            match opts.cycles {
                CycleHandling::Error => return Err(OrgSnapError::ReportingCycle(first)),
                CycleHandling::Warn => {
                    log::warn!(
                        "reporting-line cycle detected through {} position(s), first: {first}",
                        members.len()
                    );
                    report.cycle_members = members;
                }
                CycleHandling::Ignore => unreachable!(),
            }
        }
    }
    Ok(report)
}

/// Positions lying on a `reports_to` cycle, ascending by id.
///
/// Each position has at most one outgoing reporting edge, so the graph is
/// functional: walking the parent chain from every position with a
/// three-color marking finds all cycles in O(n).
fn reporting_cycle_members(dataset: &OrgDataset<'_>) -> Vec<PositionId> {
    const IN_PROGRESS: u8 = 1;
    const DONE: u8 = 2;

    let parent: HashMap<PositionId, Option<PositionId>> = dataset
        .positions
        .iter()
        .map(|p| (p.id, p.reports_to))
        .collect();
    let mut color: HashMap<PositionId, u8> = HashMap::with_capacity(parent.len());
    let mut members: Vec<PositionId> = Vec::new();

    for &start in parent.keys() {
        if color.contains_key(&start) {
            continue;
        }
        let mut path: Vec<PositionId> = Vec::new();
        let mut cursor = Some(start);
        while let Some(id) = cursor {
            match color.get(&id) {
                Some(&DONE) => break,
                Some(&IN_PROGRESS) => {
                    // Everything from the first occurrence of `id` on the
                    // walk path lies on the cycle.
                    let cycle_start = path.iter().position(|&p| p == id).unwrap_or(0);
                    members.extend_from_slice(&path[cycle_start..]);
                    break;
                }
                _ => {
                    color.insert(id, IN_PROGRESS);
                    path.push(id);
                    cursor = parent.get(&id).copied().flatten();
                }
            }
        }
        for id in path {
            color.insert(id, DONE);
        }
    }

    members.sort_unstable();
    members.dedup();
    members
}
