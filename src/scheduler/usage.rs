//! Capacity usage across assignments.
//!
//! Reports how much of an assignment's window has already been claimed by
//! assignments planned before it. Shown alongside the panic status so a
//! user can see why an assignment is squeezed.

use chrono::NaiveDate;
use std::collections::HashMap;
use uuid::Uuid;

use crate::models::{Assignment, Task};

/// Effort hours of earlier assignments landing inside `current`'s window.
///
/// `sorted` must be in planning order. Sums the effort of incomplete,
/// dated tasks of every assignment before `current` whose target date
/// falls in `[today, current.work_end()]`.
pub fn hours_consumed_by_earlier_assignments(
    sorted: &[Assignment],
    planned: &HashMap<Uuid, Vec<Task>>,
    current: &Assignment,
    today: NaiveDate,
) -> u32 {
    let end = current.work_end();

    sorted
        .iter()
        .take_while(|a| a.id != current.id)
        .filter_map(|a| planned.get(&a.id))
        .flatten()
        .filter(|t| t.is_incomplete())
        .filter(|t| t.target_date.is_some_and(|d| d >= today && d <= end))
        .map(|t| t.effort_hours)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Availability;
    use crate::scheduler::build_global_plan;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn task(assignment_id: Uuid, order: u32, effort: u32) -> Task {
        Task::new(Uuid::new_v4(), assignment_id, order).with_effort(effort)
    }

    #[test]
    fn test_first_assignment_has_nothing_before_it() {
        let a = Assignment::new(Uuid::from_u128(1), d(2026, 2, 12));
        let planned = HashMap::new();
        assert_eq!(
            hours_consumed_by_earlier_assignments(&[a.clone()], &planned, &a, d(2026, 2, 9)),
            0
        );
    }

    #[test]
    fn test_counts_only_incomplete_dated_tasks_in_window() {
        let today = d(2026, 2, 9);
        let a = Assignment::new(Uuid::from_u128(1), d(2026, 2, 11));
        let b = Assignment::new(Uuid::from_u128(2), d(2026, 2, 13)); // workEnd 12th

        let mut planned = HashMap::new();
        planned.insert(
            a.id,
            vec![
                task(a.id, 0, 2).with_target_date(Some(d(2026, 2, 9))),
                task(a.id, 1, 3).with_target_date(Some(d(2026, 2, 12))),
                task(a.id, 2, 5).with_target_date(Some(d(2026, 2, 13))), // outside
                task(a.id, 3, 7).with_target_date(Some(d(2026, 2, 8))),  // before today
                task(a.id, 4, 4).with_target_date(Some(d(2026, 2, 10))).with_done(true),
                task(a.id, 5, 6),
            ],
        );

        let sorted = vec![a.clone(), b.clone()];
        assert_eq!(hours_consumed_by_earlier_assignments(&sorted, &planned, &b, today), 5);
    }

    #[test]
    fn test_drops_to_zero_once_earlier_assignment_removed() {
        let today = d(2026, 2, 9);
        let avail = Availability::uniform(2);
        let a = Assignment::new(Uuid::from_u128(1), d(2026, 2, 11));
        let b = Assignment::new(Uuid::from_u128(2), d(2026, 2, 14));

        let mut tasks = HashMap::new();
        tasks.insert(a.id, vec![task(a.id, 0, 2), task(a.id, 1, 2)]);
        tasks.insert(b.id, vec![task(b.id, 0, 2)]);

        let sorted = vec![a.clone(), b.clone()];
        let planned = build_global_plan(&sorted, &tasks, &avail, today);
        assert_eq!(hours_consumed_by_earlier_assignments(&sorted, &planned, &b, today), 4);

        tasks.remove(&a.id);
        let sorted = vec![b.clone()];
        let planned = build_global_plan(&sorted, &tasks, &avail, today);
        assert_eq!(hours_consumed_by_earlier_assignments(&sorted, &planned, &b, today), 0);
    }
}
