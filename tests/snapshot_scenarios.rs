//! End-to-end snapshot reconstruction and comparison scenarios.

use chrono::NaiveDate;
use orgsnap::prelude::*;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn did(raw: u64) -> DepartmentId {
    DepartmentId::new(raw).unwrap()
}

fn pid(raw: u64) -> PositionId {
    PositionId::new(raw).unwrap()
}

fn dept(id: u64, name: &str, start: NaiveDate) -> Department {
    Department::new(did(id), name, name, Validity::since(start))
}

fn pos(id: u64, dept: u64, title: &str, reports_to: Option<u64>, start: NaiveDate) -> Position {
    Position::new(
        pid(id),
        did(dept),
        title,
        title,
        reports_to.map(pid),
        Validity::since(start),
    )
}

fn asg(id: u64, position: u64, name: &str, start: NaiveDate) -> Assignment {
    Assignment::new(
        AssignmentId::new(id).unwrap(),
        EmployeeId::new(1000 + id).unwrap(),
        pid(position),
        name,
        Validity::since(start),
    )
}

/// CEO with a reporting CTO reconstructs as a single two-level tree.
#[test]
fn two_level_tree_reconstruction() {
    let departments = vec![dept(1, "HQ", day(2023, 1, 1))];
    let positions = vec![
        pos(1, 1, "CEO", None, day(2023, 1, 1)),
        pos(2, 1, "CTO", Some(1), day(2023, 1, 1)),
    ];
    let dataset = OrgDataset {
        departments: &departments,
        positions: &positions,
        assignments: &[],
    };

    let snapshot = build_snapshot(&dataset, &SnapshotParams::on(day(2024, 1, 1)));
    let forest = &snapshot.forest;

    assert_eq!(forest.roots().len(), 1);
    let root = forest.node(forest.roots()[0]).unwrap();
    assert_eq!(root.id(), pid(1));
    assert_eq!(root.department.as_ref().unwrap().id, did(1));
    assert_eq!(forest.children(forest.roots()[0]).len(), 1);

    let child = forest.node(forest.children(forest.roots()[0])[0]).unwrap();
    assert_eq!(child.id(), pid(2));
    assert!(child.children.is_empty());
    // No comparison requested: statuses stay unset.
    assert!(forest.iter().all(|n| n.status.is_none()));
}

/// Comparison against a date before the CTO position existed classifies it
/// as added and marks the current forest accordingly.
#[test]
fn comparison_classifies_new_position_as_added() {
    let departments = vec![dept(1, "HQ", day(2022, 1, 1))];
    let positions = vec![
        pos(1, 1, "CEO", None, day(2022, 1, 1)),
        pos(2, 1, "CTO", Some(1), day(2023, 1, 1)),
    ];
    let dataset = OrgDataset {
        departments: &departments,
        positions: &positions,
        assignments: &[],
    };

    let cmp = compare_snapshots(
        &dataset,
        &SnapshotParams::on(day(2024, 1, 1)),
        day(2022, 6, 1),
    );

    assert_eq!(cmp.diff.added, vec![pid(2)]);
    assert!(cmp.diff.removed.is_empty());
    assert_eq!(cmp.diff.unchanged, vec![pid(1)]);
    assert_eq!(cmp.diff_summary.added, 1);
    assert_eq!(cmp.diff_summary.removed, 0);
    assert_eq!(cmp.diff_summary.unchanged, 1);

    let forest = &cmp.current.forest;
    assert_eq!(
        forest.node_by_id(pid(1)).unwrap().status,
        Some(ChangeStatus::Unchanged)
    );
    assert_eq!(
        forest.node_by_id(pid(2)).unwrap().status,
        Some(ChangeStatus::Added)
    );
}

/// A position end-dated between the comparison and current dates lands in
/// `removed` with its comparison-snapshot department and assignments, and is
/// absent from the current forest.
#[test]
fn ended_position_is_removed_with_comparison_context() {
    let departments = vec![dept(1, "HQ", day(2022, 1, 1))];
    let mut retired = pos(3, 1, "COO", Some(1), day(2022, 1, 1));
    retired.validity = Validity::between(day(2022, 1, 1), day(2023, 6, 30));
    let positions = vec![pos(1, 1, "CEO", None, day(2022, 1, 1)), retired];
    let assignments = vec![asg(1, 3, "Casey Ops", day(2022, 1, 1))];
    let dataset = OrgDataset {
        departments: &departments,
        positions: &positions,
        assignments: &assignments,
    };

    let cmp = compare_snapshots(
        &dataset,
        &SnapshotParams::on(day(2024, 1, 1)),
        day(2023, 6, 1),
    );

    assert!(cmp.current.forest.node_by_id(pid(3)).is_none());
    assert_eq!(cmp.diff.removed.len(), 1);
    let removed = &cmp.diff.removed[0];
    assert_eq!(removed.position.id, pid(3));
    assert_eq!(removed.department.as_ref().unwrap().id, did(1));
    assert_eq!(removed.assignments.len(), 1);
    assert_eq!(removed.assignments[0].employee_name, "Casey Ops");
    assert_eq!(cmp.diff.unchanged, vec![pid(1)]);
    assert!(cmp.diff.added.is_empty());
}

/// The department scope drops out-of-scope positions and promotes their
/// in-scope reports to roots.
#[test]
fn department_scope_promotes_cross_department_reports() {
    let departments = vec![dept(1, "HQ", day(2022, 1, 1)), dept(2, "Lab", day(2022, 1, 1))];
    let positions = vec![
        pos(1, 1, "CEO", None, day(2022, 1, 1)),
        pos(2, 2, "Research Lead", Some(1), day(2022, 1, 1)),
        pos(3, 2, "Scientist", Some(2), day(2022, 1, 1)),
    ];
    let dataset = OrgDataset {
        departments: &departments,
        positions: &positions,
        assignments: &[],
    };

    let params = SnapshotParams {
        on: day(2024, 1, 1),
        scope: DepartmentScope::Only(did(2)),
    };
    let snapshot = build_snapshot(&dataset, &params);
    let forest = &snapshot.forest;

    assert_eq!(forest.len(), 2);
    // The lead's parent (CEO) is out of scope, so the lead becomes a root.
    assert_eq!(forest.roots().len(), 1);
    assert_eq!(forest.node(forest.roots()[0]).unwrap().id(), pid(2));
    assert_eq!(snapshot.summary.departments, 1);
    assert_eq!(snapshot.summary.positions, 2);
}

/// Summary counts reflect the filtered snapshot only.
#[test]
fn summary_counts_filtered_entities() {
    let departments = vec![
        dept(1, "HQ", day(2022, 1, 1)),
        dept(2, "Lab", day(2025, 1, 1)), // not yet active
    ];
    let positions = vec![
        pos(1, 1, "CEO", None, day(2022, 1, 1)),
        pos(2, 1, "CTO", Some(1), day(2022, 1, 1)),
    ];
    let assignments = vec![
        asg(1, 1, "Alex Chief", day(2022, 1, 1)),
        asg(2, 2, "Bo Tech", day(2022, 1, 1)),
        asg(3, 2, "Late Hire", day(2025, 1, 1)), // not yet active
    ];
    let dataset = OrgDataset {
        departments: &departments,
        positions: &positions,
        assignments: &assignments,
    };

    let snapshot = build_snapshot(&dataset, &SnapshotParams::on(day(2024, 1, 1)));
    assert_eq!(
        snapshot.summary,
        ChartSummary {
            positions: 2,
            assignments: 2,
            departments: 1,
        }
    );
    assert_eq!(snapshot.forest.stats().vacant, 0);
}

/// Empty tables produce an empty snapshot, never an error.
#[test]
fn empty_dataset_yields_empty_snapshot() {
    let dataset = OrgDataset::default();
    let cmp = compare_snapshots(
        &dataset,
        &SnapshotParams::on(day(2024, 1, 1)),
        day(2023, 1, 1),
    );
    assert!(cmp.current.forest.is_empty());
    assert_eq!(cmp.diff_summary, DiffSummary::default());
    assert_eq!(cmp.current.summary, ChartSummary::default());
}

/// Snapshots serialize; the status tags use snake_case on the wire.
#[test]
fn snapshot_serializes_to_json() {
    let departments = vec![dept(1, "HQ", day(2022, 1, 1))];
    let positions = vec![
        pos(1, 1, "CEO", None, day(2022, 1, 1)),
        pos(2, 1, "CTO", Some(1), day(2023, 1, 1)),
    ];
    let dataset = OrgDataset {
        departments: &departments,
        positions: &positions,
        assignments: &[],
    };
    let cmp = compare_snapshots(
        &dataset,
        &SnapshotParams::on(day(2024, 1, 1)),
        day(2022, 6, 1),
    );

    let json = serde_json::to_value(&cmp.current.forest).unwrap();
    let statuses: Vec<&str> = json["nodes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["status"].as_str().unwrap())
        .collect();
    assert!(statuses.contains(&"added"));
    assert!(statuses.contains(&"unchanged"));
}
