//! Temporal filtering: select the records active on a reference date.
//!
//! This is the first stage of every snapshot build. Filtering happens before
//! any indexing or tree assembly; indexing an unfiltered table would leak
//! inactive children into an active parent.

use crate::model::{Assignment, Department, Position, Validity};
use chrono::NaiveDate;

/// Anything carrying a [`Validity`] interval.
pub trait Temporal {
    /// The record's validity interval.
    fn validity(&self) -> &Validity;

    /// True when the record's interval contains `on`.
    #[inline]
    fn active_on(&self, on: NaiveDate) -> bool {
        self.validity().contains(on)
    }
}

impl Temporal for Department {
    fn validity(&self) -> &Validity {
        &self.validity
    }
}

impl Temporal for Position {
    fn validity(&self) -> &Validity {
        &self.validity
    }
}

impl Temporal for Assignment {
    fn validity(&self) -> &Validity {
        &self.validity
    }
}

/// Returns the records active on `on`, preserving input order.
///
/// Never fails; a malformed interval simply matches no date.
pub fn filter_active<T: Temporal>(records: &[T], on: NaiveDate) -> Vec<&T> {
    records.iter().filter(|r| r.active_on(on)).collect()
}

/// Cloning variant of [`filter_active`].
pub fn filter_active_owned<T: Temporal + Clone>(records: &[T], on: NaiveDate) -> Vec<T> {
    records.iter().filter(|r| r.active_on(on)).cloned().collect()
}

/// Whether a position participates in a snapshot taken on `on`: its interval
/// must contain the date and its administrative `active` flag must be set.
#[inline]
pub fn position_in_force(position: &Position, on: NaiveDate) -> bool {
    position.active && position.active_on(on)
}
