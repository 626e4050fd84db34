//! Milestone task model.
//!
//! A task is one milestone of an assignment. Its identity and order index
//! are fixed at creation; everything else is mutable. The scheduling
//! fields (`target_date`, `unscheduled`, `unscheduled_reason`) are owned by
//! the global plan builder and rewritten on every planning run.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Upper bound for a task's effort requirement.
pub const MAX_EFFORT_HOURS: u32 = 24;

/// Why a task has no target date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnscheduledReason {
    /// The task is scheduled (or done).
    #[default]
    None,
    /// An earlier task of the same assignment failed to fit.
    ChainBroken,
    /// The window has declared hours, but they were already claimed.
    NoCapacity,
    /// No day left in the window has any declared hours.
    WindowExpired,
}

/// A milestone task belonging to one assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier.
    pub id: Uuid,
    /// Owning assignment.
    pub assignment_id: Uuid,
    /// Human-readable title.
    pub title: String,
    /// Effort requirement in whole hours, in `[0, MAX_EFFORT_HOURS]`.
    pub effort_hours: u32,
    /// Completion flag.
    pub done: bool,
    /// Creation position. Allocation iterates tasks in this order.
    pub order_index: u32,
    /// Day on which the last hour of effort is spent. `None` = not scheduled.
    pub target_date: Option<NaiveDate>,
    /// Whether the last planning run failed to place this task.
    pub unscheduled: bool,
    /// Reason for `unscheduled`.
    pub unscheduled_reason: UnscheduledReason,
}

impl Task {
    /// Creates an incomplete one-hour task with no target date.
    pub fn new(id: Uuid, assignment_id: Uuid, order_index: u32) -> Self {
        Self {
            id,
            assignment_id,
            title: String::new(),
            effort_hours: 1,
            done: false,
            order_index,
            target_date: None,
            unscheduled: false,
            unscheduled_reason: UnscheduledReason::None,
        }
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the effort requirement.
    pub fn with_effort(mut self, effort_hours: u32) -> Self {
        self.effort_hours = effort_hours;
        self
    }

    /// Sets the target date.
    pub fn with_target_date(mut self, target_date: Option<NaiveDate>) -> Self {
        self.target_date = target_date;
        self
    }

    /// Marks the task done.
    pub fn with_done(mut self, done: bool) -> Self {
        self.done = done;
        self
    }

    /// Whether the task still needs work.
    #[inline]
    pub fn is_incomplete(&self) -> bool {
        !self.done
    }

    /// Whether the task carries a concrete date and no unscheduled flag.
    #[inline]
    pub fn is_scheduled(&self) -> bool {
        !self.unscheduled && self.target_date.is_some()
    }

    /// Places the task on `date`.
    pub(crate) fn schedule_on(&mut self, date: NaiveDate) {
        self.target_date = Some(date);
        self.unscheduled = false;
        self.unscheduled_reason = UnscheduledReason::None;
    }

    /// Clears the target date and records why.
    pub(crate) fn unschedule(&mut self, reason: UnscheduledReason) {
        self.target_date = None;
        self.unscheduled = true;
        self.unscheduled_reason = reason;
    }

    /// Clears the unscheduled flag without touching the target date.
    pub(crate) fn clear_unscheduled(&mut self) {
        self.unscheduled = false;
        self.unscheduled_reason = UnscheduledReason::None;
    }
}
