//! OrgSnapError: unified error type for orgsnap public APIs
//!
//! The snapshot pipeline itself is permissive and never fails; errors exist
//! only for identifier construction and for validation checks that the caller
//! explicitly opted into.

use crate::model::{AssignmentId, DepartmentId, PositionId};
use thiserror::Error;

/// Unified error type for orgsnap operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OrgSnapError {
    /// Attempted to construct an entity id with a zero value (invalid).
    #[error("entity id must be non-zero (0 is reserved as invalid/sentinel)")]
    InvalidId,
    /// The same position id appears more than once in the dataset.
    #[error("duplicate position id `{0}` in dataset")]
    DuplicatePositionId(PositionId),
    /// The same department id appears more than once in the dataset.
    #[error("duplicate department id `{0}` in dataset")]
    DuplicateDepartmentId(DepartmentId),
    /// An assignment references a position id not present in the dataset.
    #[error("assignment `{assignment}` references unknown position `{position}`")]
    DanglingAssignment {
        /// Offending assignment.
        assignment: AssignmentId,
        /// The referenced position id that could not be resolved.
        position: PositionId,
    },
    /// The reporting lines contain a cycle (expected a rooted forest).
    #[error("reporting-line cycle detected through position `{0}`")]
    ReportingCycle(PositionId),
}
