//! Capacity calendar.
//!
//! Maps each calendar day of a planning window to the hours still free on
//! that day. Seeded from the weekly availability template and consumed
//! destructively while one planning run walks through all assignments.
//!
//! # Lifetime
//! A calendar belongs to exactly one planning run. It is built at the start
//! of the run, passed by `&mut` into the allocator, and dropped at the end.
//! Nothing keeps allocation state between runs.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Availability;

/// Remaining hours per calendar day over an inclusive date window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacityCalendar {
    remaining: BTreeMap<NaiveDate, u32>,
}

impl CapacityCalendar {
    /// Builds a calendar over `[start, end]` from the weekly template.
    ///
    /// An inverted range (`end < start`) yields an empty calendar.
    pub fn build(start: NaiveDate, end: NaiveDate, availability: &Availability) -> Self {
        let remaining = start
            .iter_days()
            .take_while(|day| *day <= end)
            .map(|day| (day, availability.hours_on(day)))
            .collect();
        Self { remaining }
    }

    /// Hours still free on `date`. Days outside the window have none.
    #[inline]
    pub fn remaining(&self, date: NaiveDate) -> u32 {
        self.remaining.get(&date).copied().unwrap_or(0)
    }

    /// Takes up to `hours` from `date` and returns how many were taken.
    pub fn consume(&mut self, date: NaiveDate, hours: u32) -> u32 {
        match self.remaining.get_mut(&date) {
            Some(free) => {
                let used = (*free).min(hours);
                *free -= used;
                used
            }
            None => 0,
        }
    }

    /// Total free hours over the whole window.
    pub fn total_remaining(&self) -> u32 {
        self.remaining.values().sum()
    }

    /// Free hours per day, in date order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, u32)> + '_ {
        self.remaining.iter().map(|(d, h)| (*d, *h))
    }

    /// First day of the window.
    pub fn first_day(&self) -> Option<NaiveDate> {
        self.remaining.keys().next().copied()
    }

    /// Last day of the window.
    pub fn last_day(&self) -> Option<NaiveDate> {
        self.remaining.keys().next_back().copied()
    }

    /// Number of days in the window.
    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    /// Whether the window is empty.
    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }
}

/// `date + n` days, saturating at the calendar's upper limit.
#[inline]
pub(crate) fn add_days(date: NaiveDate, n: u64) -> NaiveDate {
    date.checked_add_days(Days::new(n)).unwrap_or(NaiveDate::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Weekday};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_build_inclusive_window() {
        // 2026-02-07 is a Saturday
        let cal = CapacityCalendar::build(d(2026, 2, 7), d(2026, 2, 10), &Availability::default());
        assert_eq!(cal.len(), 4);
        assert_eq!(cal.remaining(d(2026, 2, 7)), 4); // Sat
        assert_eq!(cal.remaining(d(2026, 2, 8)), 2); // Sun
        assert_eq!(cal.remaining(d(2026, 2, 9)), 2); // Mon
        assert_eq!(cal.remaining(d(2026, 2, 10)), 2); // Tue
        assert_eq!(cal.total_remaining(), 10);
        assert_eq!(cal.first_day(), Some(d(2026, 2, 7)));
        assert_eq!(cal.last_day(), Some(d(2026, 2, 10)));
    }

    #[test]
    fn test_single_day_window() {
        let cal = CapacityCalendar::build(d(2026, 2, 9), d(2026, 2, 9), &Availability::uniform(3));
        assert_eq!(cal.len(), 1);
        assert_eq!(cal.remaining(d(2026, 2, 9)), 3);
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let cal = CapacityCalendar::build(d(2026, 2, 10), d(2026, 2, 7), &Availability::default());
        assert!(cal.is_empty());
        assert_eq!(cal.total_remaining(), 0);
    }

    #[test]
    fn test_consume_never_goes_negative() {
        let mut cal = CapacityCalendar::build(d(2026, 2, 9), d(2026, 2, 9), &Availability::uniform(2));
        assert_eq!(cal.consume(d(2026, 2, 9), 5), 2);
        assert_eq!(cal.remaining(d(2026, 2, 9)), 0);
        assert_eq!(cal.consume(d(2026, 2, 9), 1), 0);
        // Outside the window
        assert_eq!(cal.consume(d(2026, 3, 1), 1), 0);
        assert_eq!(cal.remaining(d(2026, 3, 1)), 0);
    }

    #[test]
    fn test_zero_weekday_seeds_zero() {
        let avail = Availability::uniform(4).with_hours(Weekday::Mon, 0);
        let cal = CapacityCalendar::build(d(2026, 2, 9), d(2026, 2, 22), &avail);
        for (day, hours) in cal.iter() {
            if day.weekday() == Weekday::Mon {
                assert_eq!(hours, 0);
            } else {
                assert_eq!(hours, 4);
            }
        }
    }

    #[test]
    fn test_seeded_values_bounded_by_template() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let week: [u32; 7] = std::array::from_fn(|_| rng.random_range(0..=24));
            let avail = Availability::from_week(week);
            let start = add_days(d(2026, 1, 1), rng.random_range(0..60));
            let end = add_days(start, rng.random_range(0..40));

            let mut cal = CapacityCalendar::build(start, end, &avail);
            assert_eq!(cal.len() as i64, (end - start).num_days() + 1);
            for (day, hours) in cal.iter() {
                assert!(hours <= 24);
                assert_eq!(hours, avail.hours_on(day));
            }

            let day = add_days(start, rng.random_range(0..=(end - start).num_days() as u64));
            let before = cal.remaining(day);
            let taken = cal.consume(day, rng.random_range(0..30));
            assert!(taken <= before);
            assert_eq!(cal.remaining(day), before - taken);
        }
    }
}
