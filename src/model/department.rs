//! Department records: the organizational units positions belong to.

use crate::model::{DepartmentId, Validity};
use serde::{Deserialize, Serialize};

/// An organizational unit, valid over a calendar interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// Unique department id.
    pub id: DepartmentId,
    /// Display name.
    pub name: String,
    /// Short administrative code (e.g. "ENG").
    pub code: String,
    /// Calendar interval over which the department exists.
    pub validity: Validity,
}

impl Department {
    /// Convenience constructor.
    pub fn new(
        id: DepartmentId,
        name: impl Into<String>,
        code: impl Into<String>,
        validity: Validity,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            code: code.into(),
            validity,
        }
    }
}
