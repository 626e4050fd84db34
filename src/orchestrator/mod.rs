//! Planning orchestrator.
//!
//! Wraps the scheduling engine with the read-modify-write cycle a backend
//! runs on every mutation: load one user's records, apply the change,
//! rebuild the whole plan from scratch, persist the recomputed tasks.
//!
//! Authentication and ownership checks happen before a request reaches
//! this layer; one orchestrator instance serves one user's data. Mutations
//! take `&mut self`, so at most one planning run is in flight per instance.

mod store;

pub use store::{InMemoryPlanStore, PlanStore};

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::config::PlannerConfig;
use crate::error::{PlannerError, PlannerResult};
use crate::models::{planning_order, Assignment, Availability, PanicStatus, Task};
use crate::scheduler::{
    apply_missed_task_shift, build_global_plan, compute_panic_status, generate_default_tasks,
    hours_consumed_by_earlier_assignments,
};
use crate::validation::{clamp_hours, validate_availability, validate_plan_input};

/// Optional changes to an existing assignment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssignmentPatch {
    /// New title.
    pub title: Option<String>,
    /// New subject.
    pub subject: Option<String>,
    /// New due date.
    pub due_date: Option<NaiveDate>,
}

/// One assignment as shown in the plan view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentPlanView {
    /// The assignment record.
    pub assignment: Assignment,
    /// Risk level after planning.
    pub panic_status: PanicStatus,
    /// Planned tasks, sorted by order index.
    pub tasks: Vec<Task>,
    /// Hours of earlier assignments inside this one's window.
    pub hours_consumed_by_earlier_assignments: u32,
}

/// Drives the planner against a `PlanStore`.
#[derive(Debug, Clone)]
pub struct PlanningOrchestrator<S = InMemoryPlanStore> {
    store: S,
    config: PlannerConfig,
}

impl PlanningOrchestrator<InMemoryPlanStore> {
    /// Creates an orchestrator over an empty in-memory store.
    pub fn in_memory(config: PlannerConfig) -> Self {
        Self::new(InMemoryPlanStore::new(), config)
    }
}

impl<S: PlanStore> PlanningOrchestrator<S> {
    /// Creates an orchestrator over `store`.
    pub fn new(store: S, config: PlannerConfig) -> Self {
        Self { store, config }
    }

    /// Underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Active configuration.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Creates an assignment, its default milestones, and replans.
    ///
    /// Title and subject are trimmed and must not be blank. The due date
    /// must not be in the past.
    pub fn create_assignment(
        &mut self,
        title: &str,
        subject: &str,
        due_date: NaiveDate,
        today: NaiveDate,
    ) -> PlannerResult<Assignment> {
        let title = require_text("title", title)?;
        let subject = require_text("subject", subject)?;
        require_not_past(due_date, today)?;

        let assignment = Assignment::new(Uuid::new_v4(), due_date)
            .with_title(title)
            .with_subject(subject)
            .with_created_at(Utc::now())
            .with_planning_days_from(today);

        self.store.save_assignment(assignment.clone());

        let tasks = generate_default_tasks(&assignment.title, due_date, assignment.id, today);
        self.store.save_tasks(tasks);

        tracing::info!(
            assignment_id = %assignment.id,
            %due_date,
            planning_days = assignment.planning_days,
            "assignment created"
        );

        self.recompute_plan(today);
        Ok(assignment)
    }

    /// Applies a patch to an assignment and replans.
    ///
    /// `planning_days` keeps its creation-time value.
    pub fn update_assignment(
        &mut self,
        assignment_id: Uuid,
        patch: AssignmentPatch,
        today: NaiveDate,
    ) -> PlannerResult<Assignment> {
        let mut assignment = self.require_assignment(assignment_id)?;

        if let Some(title) = patch.title {
            assignment.title = require_text("title", &title)?;
        }
        if let Some(subject) = patch.subject {
            assignment.subject = require_text("subject", &subject)?;
        }
        if let Some(due_date) = patch.due_date {
            require_not_past(due_date, today)?;
            assignment.due_date = due_date;
        }

        self.store.save_assignment(assignment.clone());
        self.recompute_plan(today);
        Ok(assignment)
    }

    /// Deletes an assignment with its tasks and replans.
    pub fn remove_assignment(&mut self, assignment_id: Uuid, today: NaiveDate) -> PlannerResult<()> {
        let assignment = self.require_assignment(assignment_id)?;

        self.store.delete_tasks_for(assignment.id);
        self.store.delete_assignment(assignment.id);
        tracing::info!(assignment_id = %assignment.id, "assignment removed");

        self.recompute_plan(today);
        Ok(())
    }

    /// Stored availability, creating it from the configured default on first read.
    pub fn availability(&mut self) -> Availability {
        match self.store.availability() {
            Some(availability) => availability,
            None => {
                let availability = self.config.default_availability;
                self.store.save_availability(availability);
                availability
            }
        }
    }

    /// Replaces the availability template and replans.
    pub fn set_availability(&mut self, availability: Availability, today: NaiveDate) -> PlannerResult<()> {
        validate_availability(&availability)?;
        self.store.save_availability(availability);
        self.recompute_plan(today);
        Ok(())
    }

    /// Sets a task's effort, clamped to `[0, 24]`, and replans.
    pub fn update_task_effort(
        &mut self,
        assignment_id: Uuid,
        task_id: Uuid,
        effort_hours: i64,
        today: NaiveDate,
    ) -> PlannerResult<Task> {
        self.require_assignment(assignment_id)?;
        let mut task = self.require_task_in_assignment(task_id, assignment_id)?;

        task.effort_hours = clamp_hours(effort_hours);
        self.store.save_tasks(vec![task.clone()]);

        self.recompute_plan(today);
        Ok(task)
    }

    /// Renames a task and replans. A blank title is ignored.
    pub fn update_task_title(
        &mut self,
        assignment_id: Uuid,
        task_id: Uuid,
        title: &str,
        today: NaiveDate,
    ) -> PlannerResult<Task> {
        self.require_assignment(assignment_id)?;
        let mut task = self.require_task_in_assignment(task_id, assignment_id)?;

        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Ok(task);
        }

        task.title = trimmed.to_string();
        self.store.save_tasks(vec![task.clone()]);

        self.recompute_plan(today);
        Ok(task)
    }

    /// Flips a task's done flag, shifts missed dates forward, and replans.
    pub fn toggle_task_done(
        &mut self,
        assignment_id: Uuid,
        task_id: Uuid,
        today: NaiveDate,
    ) -> PlannerResult<Task> {
        self.require_assignment(assignment_id)?;
        let mut task = self.require_task_in_assignment(task_id, assignment_id)?;

        task.done = !task.done;
        self.store.save_tasks(vec![task.clone()]);

        let tasks = self.store.tasks_for(assignment_id);
        let shifted = apply_missed_task_shift(&tasks, today);
        self.store.save_tasks(shifted);

        self.recompute_plan(today);
        Ok(task)
    }

    /// Rebuilds the whole plan and persists every task.
    pub fn recompute_plan(&mut self, today: NaiveDate) {
        let (assignments, tasks, availability) = self.planning_inputs();
        let planned = build_global_plan(&assignments, &tasks, &availability, today);

        tracing::info!(
            assignments = assignments.len(),
            tasks = planned.values().map(Vec::len).sum::<usize>(),
            %today,
            "plan recomputed"
        );

        self.store.save_tasks(planned.into_values().flatten().collect());
    }

    /// Plans in memory and returns one view per assignment, in planning order.
    ///
    /// Nothing is persisted except a default availability on first read.
    pub fn plan_view(&mut self, today: NaiveDate) -> Vec<AssignmentPlanView> {
        let (assignments, tasks, availability) = self.planning_inputs();
        let planned = build_global_plan(&assignments, &tasks, &availability, today);

        assignments
            .iter()
            .map(|assignment| {
                let mut tasks = planned.get(&assignment.id).cloned().unwrap_or_default();
                tasks.sort_by_key(|t| t.order_index);

                AssignmentPlanView {
                    assignment: assignment.clone(),
                    panic_status: compute_panic_status(assignment, &tasks, today),
                    hours_consumed_by_earlier_assignments: hours_consumed_by_earlier_assignments(
                        &assignments,
                        &planned,
                        assignment,
                        today,
                    ),
                    tasks,
                }
            })
            .collect()
    }

    /// Loads assignments in planning order, their tasks, and availability.
    fn planning_inputs(&mut self) -> (Vec<Assignment>, HashMap<Uuid, Vec<Task>>, Availability) {
        let mut assignments = self.store.assignments();
        assignments.sort_by(planning_order);

        let tasks: HashMap<Uuid, Vec<Task>> = assignments
            .iter()
            .map(|a| (a.id, self.store.tasks_for(a.id)))
            .collect();

        let availability = self.availability();

        if self.config.validate_inputs {
            if let Err(errors) = validate_plan_input(&assignments, &tasks, &availability) {
                for error in &errors {
                    tracing::warn!(%error, "planning input failed validation");
                }
            }
        }

        (assignments, tasks, availability)
    }

    fn require_assignment(&self, assignment_id: Uuid) -> PlannerResult<Assignment> {
        self.store
            .assignment(assignment_id)
            .ok_or(PlannerError::AssignmentNotFound(assignment_id))
    }

    fn require_task_in_assignment(&self, task_id: Uuid, assignment_id: Uuid) -> PlannerResult<Task> {
        let task = self
            .store
            .task(task_id)
            .ok_or(PlannerError::TaskNotFound(task_id))?;

        if task.assignment_id != assignment_id {
            return Err(PlannerError::TaskNotInAssignment {
                task_id,
                assignment_id,
            });
        }
        Ok(task)
    }
}

fn require_text(field: &str, value: &str) -> PlannerResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(PlannerError::InvalidInput(format!("{field} must not be blank")));
    }
    Ok(trimmed.to_string())
}

fn require_not_past(due_date: NaiveDate, today: NaiveDate) -> PlannerResult<()> {
    if due_date < today {
        return Err(PlannerError::InvalidInput(format!(
            "due date {due_date} is before today ({today})"
        )));
    }
    Ok(())
}
