//! Tunable rule constants

use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunable rule constants
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RulesConstants {
    #[serde(default)]
    pub difficulty: DifficultyThresholds,
}

impl RulesConstants {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.difficulty.validate()
    }
}

/// Per-party-level XP multipliers for encounter difficulty.
///
/// Average XP per player is compared (strictly below) against
/// `party_level * easy_per_level`, then medium, then hard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyThresholds {
    #[serde(default = "default_easy_per_level")]
    pub easy_per_level: f64,
    #[serde(default = "default_medium_per_level")]
    pub medium_per_level: f64,
    #[serde(default = "default_hard_per_level")]
    pub hard_per_level: f64,
}

impl Default for DifficultyThresholds {
    fn default() -> Self {
        DifficultyThresholds {
            easy_per_level: 50.0,
            medium_per_level: 100.0,
            hard_per_level: 150.0,
        }
    }
}

impl DifficultyThresholds {
    /// Thresholds must be non-negative and ascending
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.easy_per_level < 0.0 {
            return Err(ConfigError::ValidationError(
                "easy_per_level must not be negative".to_string(),
            ));
        }
        if self.easy_per_level > self.medium_per_level
            || self.medium_per_level > self.hard_per_level
        {
            return Err(ConfigError::ValidationError(format!(
                "difficulty thresholds must ascend: {} / {} / {}",
                self.easy_per_level, self.medium_per_level, self.hard_per_level
            )));
        }
        Ok(())
    }
}

fn default_easy_per_level() -> f64 {
    50.0
}
fn default_medium_per_level() -> f64 {
    100.0
}
fn default_hard_per_level() -> f64 {
    150.0
}

/// Load and validate rule constants from a TOML file
pub fn load_rules_constants(path: &Path) -> Result<RulesConstants, ConfigError> {
    let constants: RulesConstants = super::load_toml(path)?;
    constants.validate()?;
    Ok(constants)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constants() {
        let constants = RulesConstants::default();
        assert!((constants.difficulty.easy_per_level - 50.0).abs() < f64::EPSILON);
        assert!((constants.difficulty.medium_per_level - 100.0).abs() < f64::EPSILON);
        assert!((constants.difficulty.hard_per_level - 150.0).abs() < f64::EPSILON);
        assert!(constants.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_constants() {
        let toml = r#"
[difficulty]
hard_per_level = 175
"#;

        let constants: RulesConstants = toml::from_str(toml).unwrap();
        assert!((constants.difficulty.easy_per_level - 50.0).abs() < f64::EPSILON);
        assert!((constants.difficulty.hard_per_level - 175.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let constants: RulesConstants = toml::from_str("").unwrap();
        assert_eq!(constants, RulesConstants::default());
    }

    #[test]
    fn test_descending_thresholds_rejected() {
        let toml = r#"
[difficulty]
easy_per_level = 120
medium_per_level = 100
"#;

        let constants: RulesConstants = toml::from_str(toml).unwrap();
        assert!(matches!(
            constants.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }
}
