//! Capacity-constrained assignment planner.
//!
//! Users register assignments with due dates and declare how many hours they
//! can work on each weekday. The planner generates milestone tasks, spreads
//! their effort over a shared daily time budget in due-date priority order,
//! flags what does not fit, and classifies each assignment's risk.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Assignment`, `Task`, `Availability`,
//!   `CapacityCalendar`, `PanicStatus`, `UnscheduledReason`
//! - **`scheduler`**: The planning engine: default milestones, linear
//!   allocation, global plan building, missed-task shift, panic status
//! - **`validation`**: Boundary checks (ID uniqueness, hour ranges, stray task lists)
//! - **`orchestrator`**: Read-modify-write cycle over a `PlanStore`
//!
//! # Determinism
//!
//! The engine never reads the wall clock. Every entry point takes `today`
//! from the caller, and identical inputs always produce identical plans.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use study_planner::config::PlannerConfig;
//! use study_planner::models::PanicStatus;
//! use study_planner::orchestrator::PlanningOrchestrator;
//!
//! let today = NaiveDate::from_ymd_opt(2026, 2, 7).unwrap();
//! let mut planner = PlanningOrchestrator::in_memory(PlannerConfig::default());
//! planner
//!     .create_assignment("Essay", "History", NaiveDate::from_ymd_opt(2026, 2, 20).unwrap(), today)
//!     .unwrap();
//!
//! let views = planner.plan_view(today);
//! assert_eq!(views[0].tasks.len(), 5);
//! assert_eq!(views[0].panic_status, PanicStatus::OnTrack);
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod scheduler;
pub mod telemetry;
pub mod validation;
