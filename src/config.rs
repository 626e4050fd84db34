//! Planner configuration.

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, PlannerResult};
use crate::models::Availability;
use crate::validation::validate_availability;

/// Orchestrator settings.
///
/// All fields have defaults, so `{}` is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Template used when a user has not declared availability yet.
    pub default_availability: Availability,
    /// Run boundary validation before every planning run and log findings.
    pub validate_inputs: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            default_availability: Availability::default(),
            validate_inputs: true,
        }
    }
}

impl PlannerConfig {
    /// Parses a JSON configuration and checks the default template.
    pub fn from_json(json: &str) -> PlannerResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| PlannerError::Config(e.to_string()))?;
        validate_availability(&config.default_availability)
            .map_err(|errors| PlannerError::Config(PlannerError::from(errors).to_string()))?;
        Ok(config)
    }

    /// Sets the default availability template.
    pub fn with_default_availability(mut self, availability: Availability) -> Self {
        self.default_availability = availability;
        self
    }

    /// Enables or disables pre-run validation.
    pub fn with_validation(mut self, enabled: bool) -> Self {
        self.validate_inputs = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = PlannerConfig::from_json("{}").unwrap();
        assert_eq!(config, PlannerConfig::default());
        assert!(config.validate_inputs);
        assert_eq!(config.default_availability.sat_hours, 4);
    }

    #[test]
    fn test_partial_override() {
        let json = r#"{
            "default_availability": {
                "mon_hours": 1, "tue_hours": 1, "wed_hours": 1, "thu_hours": 1,
                "fri_hours": 1, "sat_hours": 0, "sun_hours": 0
            },
            "validate_inputs": false
        }"#;
        let config = PlannerConfig::from_json(json).unwrap();
        assert_eq!(config.default_availability.weekly_total(), 5);
        assert!(!config.validate_inputs);
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            PlannerConfig::from_json("{ not json"),
            Err(PlannerError::Config(_))
        ));
    }

    #[test]
    fn test_out_of_range_default_template() {
        let json = r#"{ "default_availability": {
            "mon_hours": 48, "tue_hours": 1, "wed_hours": 1, "thu_hours": 1,
            "fri_hours": 1, "sat_hours": 1, "sun_hours": 1 } }"#;
        let err = PlannerConfig::from_json(json).unwrap_err();
        assert!(err.to_string().contains("mon_hours"));
    }
}
