//! Linear effort allocator.
//!
//! # Algorithm
//!
//! Walk forward one day at a time from `start`. On each day that still has
//! free capacity and a nonzero declared template, take
//! `min(free, effort_left)` hours from the calendar. Stop when the effort is
//! covered (success) or the cursor passes `end` (failure).
//!
//! The completion date is the last day on which hours were taken, never the
//! first. Hours taken before a failure are not returned to the calendar: a
//! task that does not fit still spends the time it visited.
//!
//! # Complexity
//! O(d) where d = days in `[start, end]`.

use chrono::NaiveDate;

use crate::models::{add_days, Availability, CapacityCalendar};

/// Result of fitting one effort requirement into the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Allocation {
    /// All effort was consumed; the last hour was spent on `on`.
    Completed {
        /// Day of the last consumed hour.
        on: NaiveDate,
    },
    /// Zero effort: nothing was consumed and no day was visited.
    Empty,
    /// The window ended with effort still outstanding.
    Exhausted {
        /// Hours that could not be placed.
        outstanding: u32,
    },
}

impl Allocation {
    /// Completion date, if the allocation consumed hours and succeeded.
    pub fn completed_on(&self) -> Option<NaiveDate> {
        match self {
            Allocation::Completed { on } => Some(*on),
            _ => None,
        }
    }

    /// Whether all effort fit in the window.
    pub fn is_success(&self) -> bool {
        !matches!(self, Allocation::Exhausted { .. })
    }
}

/// Fits `effort` hours into `[start, end]`, consuming from `calendar`.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use study_planner::models::{Availability, CapacityCalendar};
/// use study_planner::scheduler::{allocate_linearly, Allocation};
///
/// let start = NaiveDate::from_ymd_opt(2026, 2, 9).unwrap();
/// let end = NaiveDate::from_ymd_opt(2026, 2, 13).unwrap();
/// let availability = Availability::uniform(2);
/// let mut calendar = CapacityCalendar::build(start, end, &availability);
///
/// let result = allocate_linearly(start, end, 3, &mut calendar, &availability);
/// assert_eq!(result, Allocation::Completed { on: NaiveDate::from_ymd_opt(2026, 2, 10).unwrap() });
/// assert_eq!(calendar.remaining(NaiveDate::from_ymd_opt(2026, 2, 10).unwrap()), 1);
/// ```
pub fn allocate_linearly(
    start: NaiveDate,
    end: NaiveDate,
    effort: u32,
    calendar: &mut CapacityCalendar,
    availability: &Availability,
) -> Allocation {
    if effort == 0 {
        return Allocation::Empty;
    }

    let mut remaining = effort;
    let mut cursor = start;
    let mut last_used = None;

    while remaining > 0 && cursor <= end {
        if calendar.remaining(cursor) > 0 && availability.hours_on(cursor) > 0 {
            remaining -= calendar.consume(cursor, remaining);
            last_used = Some(cursor);
        }
        if cursor == NaiveDate::MAX {
            break;
        }
        cursor = add_days(cursor, 1);
    }

    match (remaining, last_used) {
        (0, Some(on)) => Allocation::Completed { on },
        _ => Allocation::Exhausted {
            outstanding: remaining,
        },
    }
}
