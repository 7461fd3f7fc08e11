//! # orgsnap
//!
//! orgsnap is a pure, in-process computation library that reconstructs a
//! consistent point-in-time organizational chart from flat, independently
//! time-sliced entity tables (departments, positions, employee-position
//! assignments), and compares two such snapshots structurally.
//!
//! ## Features
//! - Active-at-date temporal filtering over validity intervals
//! - O(n) two-pass forest assembly from reporting-line pointers, with
//!   orphan promotion for positions whose parent falls outside the
//!   filtered set
//! - Arena-backed forest with cycle-safe traversals
//! - Deterministic sibling ordering (title, then id tie-break)
//! - Identity-based snapshot diffing (added / removed / unchanged) and
//!   summary aggregation
//! - Optional pre-flight dataset validation (duplicate ids, dangling
//!   assignments, reporting cycles)
//!
//! ## Determinism
//!
//! Building twice from identical inputs yields identical forests: sibling
//! and root order is a strict total order, and every diff bucket is sorted.
//! Snapshot reconstruction holds no hidden state; each build receives its
//! own filtered arrays and constructs fresh nodes.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! orgsnap = "0.3"
//! ```
//!
//! The typical entry points are [`snapshot::build_snapshot`] for a single
//! reference date and [`snapshot::compare_snapshots`] for a current vs.
//! comparison date pair.

pub mod aggregate;
pub mod diff;
pub mod error;
pub mod hierarchy;
pub mod index;
pub mod model;
pub mod snapshot;
pub mod temporal;
pub mod validation;
pub mod view;

pub use error::OrgSnapError;

/// A convenient prelude importing the most-used types and entry points.
pub mod prelude {
    pub use crate::aggregate::{ChartSummary, DiffSummary};
    pub use crate::diff::{RemovedPosition, SnapshotDiff, diff_snapshots};
    pub use crate::error::OrgSnapError;
    pub use crate::hierarchy::{
        ChangeStatus, ForestBuilder, NodeIdx, OrgForest, OrgNode, sort_forest,
    };
    pub use crate::model::{
        Assignment, AssignmentId, Department, DepartmentId, EmployeeId, Position, PositionId,
        Validity,
    };
    pub use crate::snapshot::{
        ChartComparison, DepartmentScope, OrgDataset, Snapshot, SnapshotParams, build_snapshot,
        compare_snapshots,
    };
    pub use crate::temporal::{Temporal, filter_active};
    pub use crate::validation::{CycleHandling, ValidationOptions, validate_dataset};
    pub use crate::view::{ExpansionState, visible_nodes};
}
