//! Relational indexing: parent-key adjacency over filtered record sets.
//!
//! Grouping children by their parent key once up front keeps tree assembly
//! linear; attaching assignments to positions by scanning would be O(n²).
//! Indexes must be built over *filtered* slices only.

use crate::model::{Assignment, DepartmentId, Position, PositionId};
use std::collections::HashMap;
use std::hash::Hash;

/// Groups `records` by the key extracted by `key`, preserving the relative
/// order of records within each group.
pub fn group_by<'a, T, K, F>(records: &[&'a T], key: F) -> HashMap<K, Vec<&'a T>>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut groups: HashMap<K, Vec<&T>> = HashMap::new();
    for &record in records {
        groups.entry(key(record)).or_default().push(record);
    }
    groups
}

/// Adjacency from position id to the assignments referencing it.
pub fn assignments_by_position<'a>(
    assignments: &[&'a Assignment],
) -> HashMap<PositionId, Vec<&'a Assignment>> {
    group_by(assignments, |a| a.position)
}

/// Adjacency from department id to the positions belonging to it.
pub fn positions_by_department<'a>(
    positions: &[&'a Position],
) -> HashMap<DepartmentId, Vec<&'a Position>> {
    group_by(positions, |p| p.department)
}
