//! Hierarchy reconstruction: nodes, the arena forest, assembly, ordering.
//!
//! This module owns the structural half of the engine:
//! - [`OrgNode`] wraps a position with its resolved snapshot context
//! - [`OrgForest`] keeps nodes in a flat arena with index-based children,
//!   making every traversal cycle-safe by construction
//! - [`ForestBuilder`] performs the two-pass assembly with orphan promotion
//! - [`sort_forest`] imposes the deterministic sibling order

pub mod builder;
pub mod forest;
pub mod node;
pub mod sort;

pub use builder::ForestBuilder;
pub use forest::{ForestStats, OrgForest};
pub use node::{ChangeStatus, NodeIdx, OrgNode};
pub use sort::{sibling_order, sort_forest};
