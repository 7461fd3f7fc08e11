//! Employee-to-position assignment records.

use crate::model::{AssignmentId, EmployeeId, PositionId, Validity};
use serde::{Deserialize, Serialize};

/// An employee occupying a position over a calendar interval.
///
/// Many assignments may reference one position (job-sharing); a position with
/// no active assignment is vacant. Employee display fields are denormalized
/// onto the record by the storage layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Unique assignment id.
    pub id: AssignmentId,
    /// The employee holding the position.
    pub employee: EmployeeId,
    /// The position being held.
    pub position: PositionId,
    /// Whether this is the employee's primary assignment.
    pub primary: bool,
    /// Calendar interval over which the assignment is in effect.
    pub validity: Validity,
    /// Denormalized employee display name.
    pub employee_name: String,
    /// Denormalized employee email, if known.
    pub employee_email: Option<String>,
    /// Denormalized avatar URL, if known.
    pub avatar_url: Option<String>,
}

impl Assignment {
    /// Convenience constructor for a primary assignment with no contact
    /// details.
    pub fn new(
        id: AssignmentId,
        employee: EmployeeId,
        position: PositionId,
        employee_name: impl Into<String>,
        validity: Validity,
    ) -> Self {
        Self {
            id,
            employee,
            position,
            primary: true,
            validity,
            employee_name: employee_name.into(),
            employee_email: None,
            avatar_url: None,
        }
    }
}
