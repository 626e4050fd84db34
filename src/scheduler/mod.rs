//! Capacity-constrained planning engine.
//!
//! Turns assignments, their milestone tasks and a weekly availability
//! template into concrete per-day target dates, and classifies how risky
//! each assignment's plan is.
//!
//! # Components
//!
//! | Function | Role |
//! |----------|------|
//! | `generate_default_tasks` | Five placeholder milestones for a new assignment |
//! | `allocate_linearly` | Fit one task's effort into the earliest free days |
//! | `build_global_plan` | Allocate every assignment against one shared calendar |
//! | `apply_missed_task_shift` | Move stale dates forward after a toggle |
//! | `compute_panic_status` | ON_TRACK / AT_RISK / SCREWED |
//!
//! # Algorithm
//!
//! The global builder is a deterministic greedy heuristic, not an optimizer:
//! assignments are served in due-date order and each one takes whatever
//! capacity is left. Every call is synchronous, pure apart from the
//! calendar it owns, and takes `today` from the caller.

mod allocator;
mod generator;
mod global;
mod risk;
mod shift;
mod usage;

pub use allocator::{allocate_linearly, Allocation};
pub use generator::{
    default_task_titles, generate_default_tasks, DEFAULT_EFFORT_HOURS, DEFAULT_TASK_COUNT,
};
pub use global::{build_global_plan, classify_failure, PlanRequest};
pub use risk::{
    compute_panic_status, PACE_AT_RISK_TASKS_PER_DAY, PACE_WINDOW_DAYS,
    UNSCHEDULED_SCREWED_MAX_DAYS,
};
pub use shift::apply_missed_task_shift;
pub use usage::hours_consumed_by_earlier_assignments;
