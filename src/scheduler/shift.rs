//! Missed-task shift.
//!
//! When real time has passed the earliest date of an incomplete task, move
//! every dated incomplete task of that assignment forward by the number of
//! days missed. Runs right after a task is toggled, before the next global
//! planning pass.

use chrono::NaiveDate;

use crate::models::{add_days, Task};

/// Shifts stale target dates forward so the earliest lands on `today`.
///
/// No-op when no incomplete task has a date, or when the earliest such date
/// is not before `today`. Done tasks and undated tasks pass through.
pub fn apply_missed_task_shift(tasks: &[Task], today: NaiveDate) -> Vec<Task> {
    let earliest = tasks
        .iter()
        .filter(|t| t.is_incomplete())
        .filter_map(|t| t.target_date)
        .min();

    let missed_days = match earliest {
        Some(earliest) if earliest < today => (today - earliest).num_days() as u64,
        _ => return tasks.to_vec(),
    };

    tasks
        .iter()
        .cloned()
        .map(|mut t| {
            if t.is_incomplete() {
                t.target_date = t.target_date.map(|date| add_days(date, missed_days));
            }
            t
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn task(order: u32, target: Option<NaiveDate>, done: bool) -> Task {
        Task::new(Uuid::new_v4(), Uuid::nil(), order)
            .with_target_date(target)
            .with_done(done)
    }

    #[test]
    fn test_shifts_by_missed_days() {
        let tasks = vec![
            task(0, Some(d(2026, 2, 5)), false),
            task(1, Some(d(2026, 2, 8)), false),
        ];
        let shifted = apply_missed_task_shift(&tasks, d(2026, 2, 7));
        assert_eq!(shifted[0].target_date, Some(d(2026, 2, 7)));
        assert_eq!(shifted[1].target_date, Some(d(2026, 2, 10)));
        assert_eq!(shifted[0].id, tasks[0].id);
    }

    #[test]
    fn test_done_and_undated_pass_through() {
        let tasks = vec![
            task(0, Some(d(2026, 2, 1)), true),
            task(1, Some(d(2026, 2, 4)), false),
            task(2, None, false),
        ];
        let shifted = apply_missed_task_shift(&tasks, d(2026, 2, 7));
        // Earliest incomplete is 02-04 (the done task is ignored) → 3 days
        assert_eq!(shifted[0].target_date, Some(d(2026, 2, 1)));
        assert_eq!(shifted[1].target_date, Some(d(2026, 2, 7)));
        assert_eq!(shifted[2].target_date, None);
    }

    #[test]
    fn test_noop_when_nothing_is_stale() {
        let tasks = vec![
            task(0, Some(d(2026, 2, 7)), false),
            task(1, Some(d(2026, 2, 9)), false),
        ];
        assert_eq!(apply_missed_task_shift(&tasks, d(2026, 2, 7)), tasks);
    }

    #[test]
    fn test_noop_without_dated_incomplete_tasks() {
        let tasks = vec![task(0, Some(d(2026, 1, 1)), true), task(1, None, false)];
        assert_eq!(apply_missed_task_shift(&tasks, d(2026, 2, 7)), tasks);
        assert!(apply_missed_task_shift(&[], d(2026, 2, 7)).is_empty());
    }
}
