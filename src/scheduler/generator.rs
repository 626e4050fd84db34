//! Default milestone generation.
//!
//! Every new assignment starts with the same five milestones, one hour of
//! effort each. Their initial target dates are placeholders spread evenly
//! over `[today, work_end]`; the next global planning run replaces them.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::{add_days, work_end_from_due, Task};

/// Number of milestones created for a new assignment.
pub const DEFAULT_TASK_COUNT: usize = 5;

/// Effort given to each generated milestone.
pub const DEFAULT_EFFORT_HOURS: u32 = 1;

/// Milestone titles in creation order. The first embeds the assignment title.
pub fn default_task_titles(assignment_title: &str) -> [String; DEFAULT_TASK_COUNT] {
    [
        format!("Plan: break down \"{assignment_title}\""),
        "Research / gather materials".to_string(),
        "Draft / build first version".to_string(),
        "Review + fix issues".to_string(),
        "Final polish + submit".to_string(),
    ]
}

/// Creates the five default milestones for a new assignment.
///
/// Placeholder dates: `today + floor(i / 5 * total_days)` where
/// `total_days = max(1, (work_end - today) + 1)`.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use uuid::Uuid;
/// use study_planner::scheduler::generate_default_tasks;
///
/// let today = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
/// let due = NaiveDate::from_ymd_opt(2026, 2, 11).unwrap();
/// let tasks = generate_default_tasks("Essay", due, Uuid::new_v4(), today);
///
/// assert_eq!(tasks.len(), 5);
/// assert_eq!(tasks[0].target_date, Some(today));
/// assert_eq!(tasks[4].target_date, NaiveDate::from_ymd_opt(2026, 2, 9));
/// ```
pub fn generate_default_tasks(
    assignment_title: &str,
    due_date: NaiveDate,
    assignment_id: Uuid,
    today: NaiveDate,
) -> Vec<Task> {
    let work_end = work_end_from_due(due_date);
    let total_days = ((work_end - today).num_days() + 1).max(1) as u64;

    default_task_titles(assignment_title)
        .into_iter()
        .enumerate()
        .map(|(index, title)| {
            let offset = index as u64 * total_days / DEFAULT_TASK_COUNT as u64;
            Task::new(Uuid::new_v4(), assignment_id, index as u32)
                .with_title(title)
                .with_effort(DEFAULT_EFFORT_HOURS)
                .with_target_date(Some(add_days(today, offset)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UnscheduledReason;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_five_fixed_milestones() {
        let id = Uuid::new_v4();
        let tasks = generate_default_tasks("Lab Report", d(2026, 2, 20), id, d(2026, 2, 7));

        assert_eq!(tasks.len(), DEFAULT_TASK_COUNT);
        assert_eq!(tasks[0].title, "Plan: break down \"Lab Report\"");
        assert_eq!(tasks[4].title, "Final polish + submit");

        for (i, t) in tasks.iter().enumerate() {
            assert_eq!(t.assignment_id, id);
            assert_eq!(t.order_index, i as u32);
            assert_eq!(t.effort_hours, 1);
            assert!(!t.done);
            assert!(!t.unscheduled);
            assert_eq!(t.unscheduled_reason, UnscheduledReason::None);
        }
    }

    #[test]
    fn test_unique_task_ids() {
        let tasks = generate_default_tasks("X", d(2026, 2, 20), Uuid::new_v4(), d(2026, 2, 7));
        let mut ids: Vec<Uuid> = tasks.iter().map(|t| t.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_even_spread() {
        // work_end = 2026-02-10 → total_days = 10
        let tasks = generate_default_tasks("X", d(2026, 2, 11), Uuid::new_v4(), d(2026, 2, 1));
        let dates: Vec<NaiveDate> = tasks.iter().map(|t| t.target_date.unwrap()).collect();
        assert_eq!(
            dates,
            vec![d(2026, 2, 1), d(2026, 2, 3), d(2026, 2, 5), d(2026, 2, 7), d(2026, 2, 9)]
        );
    }

    #[test]
    fn test_short_window_uneven_offsets() {
        // work_end = 2026-02-10, today = 02-07 → total_days = 4
        // offsets: floor(0), floor(0.8), floor(1.6), floor(2.4), floor(3.2)
        let tasks = generate_default_tasks("X", d(2026, 2, 11), Uuid::new_v4(), d(2026, 2, 7));
        let dates: Vec<NaiveDate> = tasks.iter().map(|t| t.target_date.unwrap()).collect();
        assert_eq!(
            dates,
            vec![d(2026, 2, 7), d(2026, 2, 7), d(2026, 2, 8), d(2026, 2, 9), d(2026, 2, 10)]
        );
    }

    #[test]
    fn test_past_due_collapses_to_today() {
        let today = d(2026, 2, 7);
        let tasks = generate_default_tasks("X", d(2026, 2, 3), Uuid::new_v4(), today);
        assert!(tasks.iter().all(|t| t.target_date == Some(today)));
    }
}
