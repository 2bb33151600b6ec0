//! Calendar date helpers shared by the leave and calendar validators.
//!
//! Leave windows are inclusive day ranges; the per-type windows are composed
//! from the current calendar month and offsets around the reference "today"
//! supplied by the caller.

use chrono::{Datelike, Duration, Months, NaiveDate};

/// An inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a range spanning `start` to `end` inclusive.
    ///
    /// The bounds are swapped when given in reverse order, so the range is
    /// never empty.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// The first day of the range.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// The last day of the range.
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns true if `day` falls within the range (bounds included).
    pub fn contains(&self, day: NaiveDate) -> bool {
        day >= self.start && day <= self.end
    }

    /// Returns the overlap of two ranges, or `None` when they are disjoint.
    pub fn intersect(&self, other: &DateRange) -> Option<DateRange> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        if start <= end {
            Some(DateRange { start, end })
        } else {
            None
        }
    }

    /// The number of days in the range, counting both bounds.
    pub fn day_count(&self) -> i64 {
        inclusive_day_count(self.start, self.end)
    }
}

/// Returns the calendar month containing `day` as an inclusive range.
pub fn month_range(day: NaiveDate) -> DateRange {
    let start = NaiveDate::from_ymd_opt(day.year(), day.month(), 1).unwrap_or(day);
    let end = start
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(day);
    DateRange::new(start, end)
}

/// Returns the range `[anchor - back, anchor + ahead]`.
///
/// Negative values walk the other way, so `offset_range(today, 30, -1)` is
/// the thirty days ending yesterday.
pub fn offset_range(anchor: NaiveDate, back: i64, ahead: i64) -> DateRange {
    let start = anchor
        .checked_sub_signed(Duration::days(back))
        .unwrap_or(anchor);
    let end = anchor
        .checked_add_signed(Duration::days(ahead))
        .unwrap_or(anchor);
    DateRange::new(start, end)
}

/// Counts the days from `start` to `end`, both included.
///
/// A same-day span counts as one day; a reversed span counts negative.
pub fn inclusive_day_count(start: NaiveDate, end: NaiveDate) -> i64 {
    end.signed_duration_since(start).num_days() + 1
}

/// Parses a strict `YYYY-MM-DD` calendar date from form input.
///
/// Returns `None` for anything unparseable, including the empty string, so
/// callers can turn malformed input into a clean rejection instead of
/// comparing against an invalid-date sentinel.
pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}
