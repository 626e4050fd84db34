//! Panic status classifier.
//!
//! Pure function of (assignment, its planned tasks, today):
//!
//! | Condition | Status |
//! |-----------|--------|
//! | today after work end | SCREWED |
//! | no incomplete tasks | ON_TRACK |
//! | incomplete task dated after work end | SCREWED |
//! | unscheduled work, ≤ 3 days left | SCREWED |
//! | unscheduled work, > 3 days left | AT_RISK |
//! | last task lands on work end | AT_RISK |
//! | ≤ 4 days left and ≥ 2 tasks/day | AT_RISK |
//! | otherwise | ON_TRACK |

use chrono::NaiveDate;

use crate::models::{Assignment, PanicStatus, Task};

/// With unscheduled work, this many remaining days or fewer is hopeless.
pub const UNSCHEDULED_SCREWED_MAX_DAYS: u32 = 3;

/// Pace check applies only with this many remaining days or fewer.
pub const PACE_WINDOW_DAYS: u32 = 4;

/// Tasks per remaining day at or above which a feasible plan is at risk.
pub const PACE_AT_RISK_TASKS_PER_DAY: f64 = 2.0;

/// Classifies how likely an assignment is to miss its work end.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use uuid::Uuid;
/// use study_planner::models::{Assignment, PanicStatus, Task};
/// use study_planner::scheduler::compute_panic_status;
///
/// let today = NaiveDate::from_ymd_opt(2026, 2, 7).unwrap();
/// let assignment = Assignment::new(Uuid::new_v4(), NaiveDate::from_ymd_opt(2026, 2, 11).unwrap());
/// let task = Task::new(Uuid::new_v4(), assignment.id, 0)
///     .with_target_date(NaiveDate::from_ymd_opt(2026, 2, 10));
///
/// // Finishing on the work end leaves no buffer
/// assert_eq!(compute_panic_status(&assignment, &[task], today), PanicStatus::AtRisk);
/// ```
pub fn compute_panic_status(assignment: &Assignment, tasks: &[Task], today: NaiveDate) -> PanicStatus {
    let end = assignment.work_end();
    if today > end {
        return PanicStatus::Screwed;
    }

    let remaining_days = assignment.remaining_planning_days(today);

    let incomplete: Vec<&Task> = tasks.iter().filter(|t| t.is_incomplete()).collect();
    if incomplete.is_empty() {
        return PanicStatus::OnTrack;
    }

    let mut has_unscheduled = false;
    let mut latest_scheduled: Option<NaiveDate> = None;

    for task in &incomplete {
        match task.target_date {
            Some(date) if !task.unscheduled => {
                if date > end {
                    return PanicStatus::Screwed;
                }
                latest_scheduled = latest_scheduled.max(Some(date));
            }
            _ => has_unscheduled = true,
        }
    }

    if has_unscheduled {
        return if remaining_days <= UNSCHEDULED_SCREWED_MAX_DAYS {
            PanicStatus::Screwed
        } else {
            PanicStatus::AtRisk
        };
    }

    if latest_scheduled == Some(end) {
        return PanicStatus::AtRisk;
    }

    // remaining_days >= 1 here since today <= end
    let pace = incomplete.len() as f64 / f64::from(remaining_days);
    if remaining_days <= PACE_WINDOW_DAYS && pace >= PACE_AT_RISK_TASKS_PER_DAY {
        return PanicStatus::AtRisk;
    }

    PanicStatus::OnTrack
}
