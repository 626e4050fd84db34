//! Weekly availability template.
//!
//! Seven non-negative hour values, one per weekday. The template is the
//! only input that says how much work fits on a given calendar day; the
//! capacity calendar is derived from it once per planning run.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Upper bound for any single day's declared hours.
pub const MAX_DAILY_HOURS: u32 = 24;

/// Declared working hours per weekday.
///
/// Defaults to 2h on weekdays, 4h on Saturday and 2h on Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    /// Monday hours.
    pub mon_hours: u32,
    /// Tuesday hours.
    pub tue_hours: u32,
    /// Wednesday hours.
    pub wed_hours: u32,
    /// Thursday hours.
    pub thu_hours: u32,
    /// Friday hours.
    pub fri_hours: u32,
    /// Saturday hours.
    pub sat_hours: u32,
    /// Sunday hours.
    pub sun_hours: u32,
}

impl Availability {
    /// Creates a template with the same hours on every day.
    pub fn uniform(hours: u32) -> Self {
        Self::from_week([hours; 7])
    }

    /// Creates a template from Monday-first hour values.
    pub fn from_week(hours: [u32; 7]) -> Self {
        let [mon_hours, tue_hours, wed_hours, thu_hours, fri_hours, sat_hours, sun_hours] = hours;
        Self {
            mon_hours,
            tue_hours,
            wed_hours,
            thu_hours,
            fri_hours,
            sat_hours,
            sun_hours,
        }
    }

    /// Sets the hours for one weekday.
    pub fn with_hours(mut self, weekday: Weekday, hours: u32) -> Self {
        *self.slot_mut(weekday) = hours;
        self
    }

    /// Declared hours for a weekday.
    #[inline]
    pub fn hours_for(&self, weekday: Weekday) -> u32 {
        match weekday {
            Weekday::Mon => self.mon_hours,
            Weekday::Tue => self.tue_hours,
            Weekday::Wed => self.wed_hours,
            Weekday::Thu => self.thu_hours,
            Weekday::Fri => self.fri_hours,
            Weekday::Sat => self.sat_hours,
            Weekday::Sun => self.sun_hours,
        }
    }

    /// Declared hours for the weekday of a calendar date.
    #[inline]
    pub fn hours_on(&self, date: NaiveDate) -> u32 {
        self.hours_for(date.weekday())
    }

    /// Monday-first hour values.
    pub fn week(&self) -> [u32; 7] {
        [
            self.mon_hours,
            self.tue_hours,
            self.wed_hours,
            self.thu_hours,
            self.fri_hours,
            self.sat_hours,
            self.sun_hours,
        ]
    }

    /// Total declared hours across one week.
    pub fn weekly_total(&self) -> u32 {
        self.week().iter().sum()
    }

    fn slot_mut(&mut self, weekday: Weekday) -> &mut u32 {
        match weekday {
            Weekday::Mon => &mut self.mon_hours,
            Weekday::Tue => &mut self.tue_hours,
            Weekday::Wed => &mut self.wed_hours,
            Weekday::Thu => &mut self.thu_hours,
            Weekday::Fri => &mut self.fri_hours,
            Weekday::Sat => &mut self.sat_hours,
            Weekday::Sun => &mut self.sun_hours,
        }
    }
}

impl Default for Availability {
    fn default() -> Self {
        Self::from_week([2, 2, 2, 2, 2, 4, 2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_template() {
        let a = Availability::default();
        assert_eq!(a.hours_for(Weekday::Mon), 2);
        assert_eq!(a.hours_for(Weekday::Fri), 2);
        assert_eq!(a.hours_for(Weekday::Sat), 4);
        assert_eq!(a.hours_for(Weekday::Sun), 2);
        assert_eq!(a.weekly_total(), 16);
    }

    #[test]
    fn test_hours_on_date() {
        let a = Availability::uniform(1).with_hours(Weekday::Mon, 0);
        let monday = NaiveDate::from_ymd_opt(2026, 2, 9).unwrap();
        let tuesday = NaiveDate::from_ymd_opt(2026, 2, 10).unwrap();
        assert_eq!(a.hours_on(monday), 0);
        assert_eq!(a.hours_on(tuesday), 1);
    }

    #[test]
    fn test_serde_field_names() {
        let json = serde_json::to_value(Availability::default()).unwrap();
        assert_eq!(json["sat_hours"], 4);
        assert_eq!(json["mon_hours"], 2);
    }
}
