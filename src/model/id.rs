//! Strong, zero-cost id handles for org-chart entities.
//!
//! Every entity (department, position, assignment, employee) is referenced by
//! an opaque identifier wrapping a nonzero `u64`; 0 is reserved as an invalid
//! or sentinel value. The newtypes are `repr(transparent)`, so they have the
//! same layout and ABI as a bare `u64`.

use crate::error::OrgSnapError;
use std::{fmt, num::NonZeroU64};

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord,
            serde::Serialize, serde::Deserialize,
        )]
        #[repr(transparent)]
        #[serde(transparent)]
        pub struct $name(NonZeroU64);

        impl $name {
            /// Creates a new id from a raw `u64` value.
            ///
            /// Returns [`OrgSnapError::InvalidId`] when `raw == 0`; zero is
            /// reserved as the invalid/sentinel value.
            #[inline]
            pub fn new(raw: u64) -> Result<Self, OrgSnapError> {
                NonZeroU64::new(raw)
                    .map(Self)
                    .ok_or(OrgSnapError::InvalidId)
            }

            /// Returns the inner `u64` value.
            #[inline]
            pub const fn get(self) -> u64 {
                self.0.get()
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.get()).finish()
            }
        }

        /// Prints the numeric id without any wrapper text.
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.get())
            }
        }
    };
}

entity_id!(
    /// Identifier of a [`Department`](crate::model::Department).
    DepartmentId
);
entity_id!(
    /// Identifier of a [`Position`](crate::model::Position).
    PositionId
);
entity_id!(
    /// Identifier of an [`Assignment`](crate::model::Assignment).
    AssignmentId
);
entity_id!(
    /// Identifier of an employee, as carried on assignments.
    EmployeeId
);
