//! Expansion state and visibility walks.

use chrono::NaiveDate;
use orgsnap::prelude::*;

fn pid(raw: u64) -> PositionId {
    PositionId::new(raw).unwrap()
}

fn pos(id: u64, title: &str, reports_to: Option<u64>) -> Position {
    Position::new(
        pid(id),
        DepartmentId::new(1).unwrap(),
        title,
        title,
        reports_to.map(pid),
        Validity::since(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()),
    )
}

fn forest(positions: &[Position]) -> OrgForest {
    let refs: Vec<&Position> = positions.iter().collect();
    let mut f = ForestBuilder::new().build(&refs, &[], &[]);
    sort_forest(&mut f);
    f
}

#[test]
fn collapsed_forest_shows_only_roots() {
    let f = forest(&[
        pos(1, "CEO", None),
        pos(2, "CTO", Some(1)),
        pos(3, "Engineer", Some(2)),
    ]);
    let visible = visible_nodes(&f, &ExpansionState::new());
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].0, 0);
}

#[test]
fn expansion_reveals_children_level_by_level() {
    let f = forest(&[
        pos(1, "CEO", None),
        pos(2, "CTO", Some(1)),
        pos(3, "Engineer", Some(2)),
    ]);
    let mut state = ExpansionState::new();
    assert!(state.toggle(pid(1)));
    assert_eq!(visible_nodes(&f, &state).len(), 2);

    state.expand(pid(2));
    let visible = visible_nodes(&f, &state);
    assert_eq!(visible.len(), 3);
    assert_eq!(visible.last().unwrap().0, 2);

    assert!(!state.toggle(pid(1)));
    assert_eq!(visible_nodes(&f, &state).len(), 1);
}

#[test]
fn expand_all_covers_every_parent() {
    let f = forest(&[
        pos(1, "CEO", None),
        pos(2, "CTO", Some(1)),
        pos(3, "Engineer", Some(2)),
        pos(4, "Intern", Some(3)),
    ]);
    let state = ExpansionState::expand_all(&f);
    assert_eq!(visible_nodes(&f, &state).len(), 4);
    // Leaves are not in the expanded set.
    assert!(!state.is_expanded(pid(4)));
}

#[test]
fn expansion_state_round_trips_through_json() {
    let mut state = ExpansionState::new();
    state.expand(pid(1));
    state.expand(pid(7));
    let json = serde_json::to_string(&state).unwrap();
    let back: ExpansionState = serde_json::from_str(&json).unwrap();
    assert_eq!(state, back);
}
