//! Global multi-assignment plan builder.
//!
//! # Algorithm
//!
//! 1. Build one capacity calendar over `[today, max(work_end)]`.
//! 2. Sort assignments by due date (stable).
//! 3. For each assignment, walk its tasks in order-index order with a
//!    cursor starting at `today`:
//!    - done tasks keep their date and never move the cursor;
//!    - after a failure every later task is `chain-broken`;
//!    - otherwise the linear allocator places the task and the cursor
//!      moves to its completion day.
//!
//! Assignments due sooner always get first claim on a day's hours. The
//! calendar is rebuilt on every call, so removing an assignment frees its
//! hours for everyone after it on the next run.
//!
//! # Complexity
//! O(a log a + t * d) where a=assignments, t=tasks, d=days in the window.

use chrono::NaiveDate;
use std::collections::HashMap;
use uuid::Uuid;

use super::allocator::{allocate_linearly, Allocation};
use crate::models::{Assignment, Availability, CapacityCalendar, Task, UnscheduledReason};

/// Input container for one planning run.
#[derive(Debug, Clone)]
pub struct PlanRequest {
    /// Assignments to plan. Order matters only among equal due dates.
    pub assignments: Vec<Assignment>,
    /// Current tasks per assignment id.
    pub tasks_by_assignment: HashMap<Uuid, Vec<Task>>,
    /// Weekly availability template.
    pub availability: Availability,
    /// First plannable day.
    pub today: NaiveDate,
}

impl PlanRequest {
    /// Creates a request with the default availability template.
    pub fn new(
        assignments: Vec<Assignment>,
        tasks_by_assignment: HashMap<Uuid, Vec<Task>>,
        today: NaiveDate,
    ) -> Self {
        Self {
            assignments,
            tasks_by_assignment,
            availability: Availability::default(),
            today,
        }
    }

    /// Sets the availability template.
    pub fn with_availability(mut self, availability: Availability) -> Self {
        self.availability = availability;
        self
    }

    /// Runs the global plan builder on this request.
    pub fn build(&self) -> HashMap<Uuid, Vec<Task>> {
        build_global_plan(
            &self.assignments,
            &self.tasks_by_assignment,
            &self.availability,
            self.today,
        )
    }
}

/// Recomputes target dates for every task of every assignment.
///
/// Task lists keyed by ids that are not in `assignments` are returned
/// unchanged. Assignments with no task list get an empty one.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use chrono::NaiveDate;
/// use uuid::Uuid;
/// use study_planner::models::{Assignment, Availability};
/// use study_planner::scheduler::{build_global_plan, generate_default_tasks};
///
/// let today = NaiveDate::from_ymd_opt(2026, 2, 9).unwrap();
/// let due = NaiveDate::from_ymd_opt(2026, 2, 16).unwrap();
/// let assignment = Assignment::new(Uuid::new_v4(), due);
/// let tasks = generate_default_tasks("Essay", due, assignment.id, today);
///
/// let mut by_id = HashMap::new();
/// by_id.insert(assignment.id, tasks);
///
/// let plan = build_global_plan(&[assignment.clone()], &by_id, &Availability::uniform(2), today);
/// let planned = &plan[&assignment.id];
/// assert!(planned.iter().all(|t| t.target_date.unwrap() <= assignment.work_end()));
/// ```
pub fn build_global_plan(
    assignments: &[Assignment],
    tasks_by_assignment: &HashMap<Uuid, Vec<Task>>,
    availability: &Availability,
    today: NaiveDate,
) -> HashMap<Uuid, Vec<Task>> {
    if assignments.is_empty() {
        return tasks_by_assignment.clone();
    }

    let max_end = assignments
        .iter()
        .map(Assignment::work_end)
        .fold(today, NaiveDate::max);

    let mut calendar = CapacityCalendar::build(today, max_end, availability);

    let mut sorted: Vec<&Assignment> = assignments.iter().collect();
    sorted.sort_by_key(|a| a.due_date);

    let mut next = tasks_by_assignment.clone();

    for assignment in sorted {
        let current = next.get(&assignment.id).map(Vec::as_slice).unwrap_or(&[]);
        let updated = plan_assignment(assignment, current, &mut calendar, availability, today);
        next.insert(assignment.id, updated);
    }

    for stray in tasks_by_assignment
        .keys()
        .filter(|id| !assignments.iter().any(|a| a.id == **id))
    {
        tracing::warn!(assignment_id = %stray, "task list has no matching assignment; passed through");
    }

    next
}

/// Plans one assignment's tasks against the shared calendar.
fn plan_assignment(
    assignment: &Assignment,
    tasks: &[Task],
    calendar: &mut CapacityCalendar,
    availability: &Availability,
    today: NaiveDate,
) -> Vec<Task> {
    let end = assignment.work_end();
    let mut cursor = today;
    let mut chain_broken = false;

    let mut ordered: Vec<Task> = tasks.to_vec();
    ordered.sort_by_key(|t| t.order_index);

    for task in &mut ordered {
        if task.done {
            task.clear_unscheduled();
            continue;
        }

        if chain_broken {
            task.unschedule(UnscheduledReason::ChainBroken);
            continue;
        }

        match allocate_linearly(cursor, end, task.effort_hours, calendar, availability) {
            Allocation::Completed { on } => {
                task.schedule_on(on);
                cursor = on;
            }
            Allocation::Empty => task.schedule_on(cursor),
            Allocation::Exhausted { outstanding } => {
                let reason = classify_failure(cursor, end, availability);
                tracing::debug!(
                    assignment_id = %assignment.id,
                    task_id = %task.id,
                    outstanding,
                    ?reason,
                    "task does not fit before work end"
                );
                task.unschedule(reason);
                chain_broken = true;
            }
        }
    }

    ordered
}

/// Explains an allocation failure over `[from, end]`.
///
/// `NoCapacity` if any day in the window has declared hours (they were
/// claimed first), `WindowExpired` if the template is zero everywhere.
pub fn classify_failure(from: NaiveDate, end: NaiveDate, availability: &Availability) -> UnscheduledReason {
    let any_workable_day = from
        .iter_days()
        .take_while(|day| *day <= end)
        // one week covers every weekday
        .take(7)
        .any(|day| availability.hours_on(day) > 0);

    if any_workable_day {
        UnscheduledReason::NoCapacity
    } else {
        UnscheduledReason::WindowExpired
    }
}
