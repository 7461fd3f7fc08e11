//! Position records and the self-referential reporting edge.

use crate::model::{DepartmentId, PositionId, Validity};
use serde::{Deserialize, Serialize};

/// A position (seat) in the organization.
///
/// `reports_to` is the hierarchy edge: a position whose `reports_to` is
/// `None`, or whose referenced parent falls outside the filtered set for a
/// given snapshot, is a root of the reconstructed forest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Unique position id.
    pub id: PositionId,
    /// Owning department.
    pub department: DepartmentId,
    /// Job title; primary sibling sort key.
    pub title: String,
    /// Short administrative code.
    pub code: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Reporting-line parent, if any.
    pub reports_to: Option<PositionId>,
    /// Administrative enable flag; a disabled position is excluded from
    /// snapshots regardless of its validity dates.
    pub active: bool,
    /// Calendar interval over which the position exists.
    pub validity: Validity,
}

impl Position {
    /// Convenience constructor for an active position with no description.
    pub fn new(
        id: PositionId,
        department: DepartmentId,
        title: impl Into<String>,
        code: impl Into<String>,
        reports_to: Option<PositionId>,
        validity: Validity,
    ) -> Self {
        Self {
            id,
            department,
            title: title.into(),
            code: code.into(),
            description: None,
            reports_to,
            active: true,
            validity,
        }
    }
}
