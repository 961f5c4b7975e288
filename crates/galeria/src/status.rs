//! Exhibition lifecycle derived from a date range.
//!
//! Comparison is by calendar date with both bounds inclusive: an exhibition
//! ending today is still active. Callers choose what "today" is; the gallery
//! uses the UTC date unless configured otherwise.

use chrono::{NaiveDate, Utc};

use crate::model::ExhibitionStatus;

/// Derive the status of an exhibition running from `start` to `end` as seen on `today`.
pub fn derive_status(start: NaiveDate, end: NaiveDate, today: NaiveDate) -> ExhibitionStatus {
    if today < start {
        ExhibitionStatus::Planned
    } else if today > end {
        ExhibitionStatus::Completed
    } else {
        ExhibitionStatus::Active
    }
}

/// The current UTC calendar date.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}
