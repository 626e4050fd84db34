//! Assignment risk levels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-valued risk classification of one assignment's plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PanicStatus {
    /// Every incomplete task fits with buffer to spare.
    OnTrack,
    /// Feasible with no buffer, or some work does not fit yet.
    AtRisk,
    /// The deadline cannot be met.
    Screwed,
}

impl fmt::Display for PanicStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PanicStatus::OnTrack => "ON_TRACK",
            PanicStatus::AtRisk => "AT_RISK",
            PanicStatus::Screwed => "SCREWED",
        };
        f.write_str(s)
    }
}
