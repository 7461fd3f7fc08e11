//! Validity intervals and the active-at-date predicate.
//!
//! Every record in the flat source tables carries a half-open-ended calendar
//! interval: a mandatory start date and an optional end date (`None` means
//! "still in effect"). Time-of-day is out of the model by construction.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Calendar validity interval `[start, end]`, end-inclusive.
///
/// An inverted interval (`end < start`) contains no date at all; it is
/// treated as "never active" rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Validity {
    /// First date on which the record is in effect.
    pub start: NaiveDate,
    /// Last date on which the record is in effect; `None` means open-ended.
    pub end: Option<NaiveDate>,
}

impl Validity {
    /// Open-ended interval starting at `start`.
    #[inline]
    pub fn since(start: NaiveDate) -> Self {
        Self { start, end: None }
    }

    /// Closed interval `[start, end]`.
    #[inline]
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }

    /// Active-at predicate: `start <= on` and `end` absent or `end >= on`.
    #[inline]
    pub fn contains(&self, on: NaiveDate) -> bool {
        self.start <= on && self.end.is_none_or(|end| end >= on)
    }
}
