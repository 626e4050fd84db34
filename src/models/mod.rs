//! Planning domain models.
//!
//! Plain in-memory types exchanged between the planner and its caller.
//! None of them perform I/O; persistence happens outside this crate.
//!
//! | Type | Role |
//! |------|------|
//! | `Assignment` | Coursework with a due date |
//! | `Task` | One milestone of an assignment |
//! | `Availability` | Weekly hours template |
//! | `CapacityCalendar` | Per-day free hours for one planning run |
//! | `PanicStatus` | Risk level of an assignment |

mod assignment;
mod availability;
mod calendar;
mod status;
mod task;

pub use assignment::{planning_days_at_creation, planning_order, work_end_from_due, Assignment};
pub use availability::{Availability, MAX_DAILY_HOURS};
pub use calendar::CapacityCalendar;
pub(crate) use calendar::add_days;
pub use status::PanicStatus;
pub use task::{Task, UnscheduledReason, MAX_EFFORT_HOURS};
