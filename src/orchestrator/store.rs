//! Record storage seam.
//!
//! The orchestrator reads and writes plain records through `PlanStore`.
//! Real deployments put a database behind it; `InMemoryPlanStore` is the
//! reference implementation used by tests and embedded callers.

use std::collections::HashMap;
use uuid::Uuid;

use crate::models::{Assignment, Availability, Task};

/// Storage for one user's assignments, tasks and availability.
pub trait PlanStore {
    /// All assignments, in no particular order.
    fn assignments(&self) -> Vec<Assignment>;

    /// One assignment by id.
    fn assignment(&self, id: Uuid) -> Option<Assignment>;

    /// Inserts or replaces an assignment.
    fn save_assignment(&mut self, assignment: Assignment);

    /// Removes an assignment. Its tasks are left alone.
    fn delete_assignment(&mut self, id: Uuid) -> Option<Assignment>;

    /// Tasks of one assignment, sorted by order index.
    fn tasks_for(&self, assignment_id: Uuid) -> Vec<Task>;

    /// One task by id.
    fn task(&self, id: Uuid) -> Option<Task>;

    /// Inserts or replaces tasks.
    fn save_tasks(&mut self, tasks: Vec<Task>);

    /// Removes every task of an assignment.
    fn delete_tasks_for(&mut self, assignment_id: Uuid);

    /// Stored availability, if the user ever declared or read one.
    fn availability(&self) -> Option<Availability>;

    /// Inserts or replaces the availability template.
    fn save_availability(&mut self, availability: Availability);
}

/// `PlanStore` backed by hash maps.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPlanStore {
    assignments: HashMap<Uuid, Assignment>,
    tasks: HashMap<Uuid, Task>,
    availability: Option<Availability>,
}

impl InMemoryPlanStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored tasks.
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

impl PlanStore for InMemoryPlanStore {
    fn assignments(&self) -> Vec<Assignment> {
        self.assignments.values().cloned().collect()
    }

    fn assignment(&self, id: Uuid) -> Option<Assignment> {
        self.assignments.get(&id).cloned()
    }

    fn save_assignment(&mut self, assignment: Assignment) {
        self.assignments.insert(assignment.id, assignment);
    }

    fn delete_assignment(&mut self, id: Uuid) -> Option<Assignment> {
        self.assignments.remove(&id)
    }

    fn tasks_for(&self, assignment_id: Uuid) -> Vec<Task> {
        let mut tasks: Vec<Task> = self
            .tasks
            .values()
            .filter(|t| t.assignment_id == assignment_id)
            .cloned()
            .collect();
        tasks.sort_by_key(|t| t.order_index);
        tasks
    }

    fn task(&self, id: Uuid) -> Option<Task> {
        self.tasks.get(&id).cloned()
    }

    fn save_tasks(&mut self, tasks: Vec<Task>) {
        for task in tasks {
            self.tasks.insert(task.id, task);
        }
    }

    fn delete_tasks_for(&mut self, assignment_id: Uuid) {
        self.tasks.retain(|_, t| t.assignment_id != assignment_id);
    }

    fn availability(&self) -> Option<Availability> {
        self.availability
    }

    fn save_availability(&mut self, availability: Availability) {
        self.availability = Some(availability);
    }
}
