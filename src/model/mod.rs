//! Flat entity records as delivered by the storage layer.
//!
//! The engine consumes three flat, independently time-sliced tables —
//! departments, positions, and employee-position assignments — each carrying
//! a [`Validity`] interval and referencing one another by strong ids.

pub mod assignment;
pub mod department;
pub mod id;
pub mod interval;
pub mod position;

pub use assignment::Assignment;
pub use department::Department;
pub use id::{AssignmentId, DepartmentId, EmployeeId, PositionId};
pub use interval::Validity;
pub use position::Position;
