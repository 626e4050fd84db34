//! Assignment model.
//!
//! An assignment is a piece of coursework with a hard due date. Work must
//! finish strictly before the due date, so the last plannable day (the
//! "work end") is always one day earlier.

use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uuid::Uuid;

/// An assignment with a due date and a fixed planning-day count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    /// Unique assignment identifier.
    pub id: Uuid,
    /// Human-readable title.
    pub title: String,
    /// Course or subject.
    pub subject: String,
    /// Due date. No work is planned on or after this day.
    pub due_date: NaiveDate,
    /// Planning days computed at creation. Never recomputed.
    pub planning_days: u32,
    /// Creation timestamp. Only used as an ordering tie-break.
    pub created_at: DateTime<Utc>,
}

impl Assignment {
    /// Creates an assignment due on `due_date`.
    ///
    /// `planning_days` starts at 1 and `created_at` at the Unix epoch; use
    /// the builder methods to fill them in.
    pub fn new(id: Uuid, due_date: NaiveDate) -> Self {
        Self {
            id,
            title: String::new(),
            subject: String::new(),
            due_date,
            planning_days: 1,
            created_at: DateTime::<Utc>::default(),
        }
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the subject.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    /// Sets the creation timestamp.
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Fixes the planning-day count relative to `today`.
    pub fn with_planning_days_from(mut self, today: NaiveDate) -> Self {
        self.planning_days = planning_days_at_creation(today, self.due_date);
        self
    }

    /// Last day on which work may be scheduled (`due_date - 1`).
    #[inline]
    pub fn work_end(&self) -> NaiveDate {
        work_end_from_due(self.due_date)
    }

    /// Number of days in `[today, work_end]`, or 0 if `today` is past it.
    pub fn remaining_planning_days(&self, today: NaiveDate) -> u32 {
        let days = (self.work_end() - today).num_days();
        if days >= 0 {
            u32::try_from(days + 1).unwrap_or(u32::MAX)
        } else {
            0
        }
    }
}

/// Work end for a due date: one day earlier.
#[inline]
pub fn work_end_from_due(due_date: NaiveDate) -> NaiveDate {
    due_date
        .checked_sub_days(Days::new(1))
        .unwrap_or(NaiveDate::MIN)
}

/// Planning days fixed at creation: `max(1, (work_end - today) + 1)`.
pub fn planning_days_at_creation(today: NaiveDate, due_date: NaiveDate) -> u32 {
    let days = (work_end_from_due(due_date) - today).num_days() + 1;
    u32::try_from(days.max(1)).unwrap_or(u32::MAX)
}

/// Planning order: due date, then creation time, then id.
///
/// The global plan builder only sorts by due date; callers apply this
/// ordering first so that equal due dates resolve deterministically.
pub fn planning_order(a: &Assignment, b: &Assignment) -> Ordering {
    a.due_date
        .cmp(&b.due_date)
        .then_with(|| a.created_at.cmp(&b.created_at))
        .then_with(|| a.id.cmp(&b.id))
}
