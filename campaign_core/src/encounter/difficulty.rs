//! Encounter difficulty classification
//!
//! A simplified linear heuristic: average XP per player against
//! `party_level * {50, 100, 150}`. This intentionally differs from the
//! published per-level threshold tables with monster-count multipliers.

use crate::config::DifficultyThresholds;
use crate::error::RulesError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Difficulty bucket for an encounter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Deadly,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Deadly => "Deadly",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Party composition for difficulty purposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    /// Average character level
    pub level: i32,
    /// Number of player characters
    pub size: i32,
}

impl Party {
    pub fn new(level: i32, size: i32) -> Self {
        Party { level, size }
    }

    /// Build from individual character levels.
    ///
    /// Level is the mean rounded to the nearest integer (halves round up);
    /// an empty slice yields a party of size 0, which fails classification.
    pub fn from_levels(levels: &[i32]) -> Self {
        if levels.is_empty() {
            return Party::new(0, 0);
        }
        let sum: i64 = levels.iter().map(|&l| l as i64).sum();
        let count = levels.len() as i64;
        let level = (2 * sum + count).div_euclid(2 * count);
        Party::new(level as i32, levels.len() as i32)
    }
}

/// Classify an encounter with the default 50 / 100 / 150 multipliers
pub fn encounter_difficulty(
    total_xp: u64,
    party_level: i32,
    party_size: i32,
) -> Result<Difficulty, RulesError> {
    classify_difficulty(&DifficultyThresholds::default(), total_xp, party_level, party_size)
}

/// Classify an encounter against configured per-level multipliers.
///
/// Comparisons are strict: an average exactly on a threshold falls into
/// the next bucket up.
pub fn classify_difficulty(
    thresholds: &DifficultyThresholds,
    total_xp: u64,
    party_level: i32,
    party_size: i32,
) -> Result<Difficulty, RulesError> {
    if party_size <= 0 {
        return Err(RulesError::Validation(format!(
            "party size must be at least 1, got {}",
            party_size
        )));
    }

    let average = total_xp as f64 / party_size as f64;
    let level = party_level as f64;

    let difficulty = if average < level * thresholds.easy_per_level {
        Difficulty::Easy
    } else if average < level * thresholds.medium_per_level {
        Difficulty::Medium
    } else if average < level * thresholds.hard_per_level {
        Difficulty::Hard
    } else {
        Difficulty::Deadly
    };

    tracing::debug!(
        total_xp,
        party_level,
        party_size,
        average,
        difficulty = difficulty.label(),
        "Classified encounter"
    );
    Ok(difficulty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buckets() {
        // Level 5, 4 players: thresholds 250 / 500 / 750 per player
        assert_eq!(encounter_difficulty(400, 5, 4), Ok(Difficulty::Easy));
        assert_eq!(encounter_difficulty(1_200, 5, 4), Ok(Difficulty::Medium));
        assert_eq!(encounter_difficulty(2_400, 5, 4), Ok(Difficulty::Hard));
        assert_eq!(encounter_difficulty(4_000, 5, 4), Ok(Difficulty::Deadly));
    }

    #[test]
    fn test_boundaries_are_strict() {
        // Average exactly 250 at level 5 is not below 250
        assert_eq!(encounter_difficulty(750, 5, 3), Ok(Difficulty::Medium));
        // Exactly 500 → Hard, exactly 750 → Deadly
        assert_eq!(encounter_difficulty(1_500, 5, 3), Ok(Difficulty::Hard));
        assert_eq!(encounter_difficulty(2_250, 5, 3), Ok(Difficulty::Deadly));
        // Just under
        assert_eq!(encounter_difficulty(749, 5, 3), Ok(Difficulty::Easy));
    }

    #[test]
    fn test_fractional_average() {
        // 501 / 2 = 250.5 ≥ 250
        assert_eq!(encounter_difficulty(501, 5, 2), Ok(Difficulty::Medium));
        // 499 / 2 = 249.5 < 250
        assert_eq!(encounter_difficulty(499, 5, 2), Ok(Difficulty::Easy));
    }

    #[test]
    fn test_zero_party_size_fails() {
        assert!(matches!(
            encounter_difficulty(1_000, 3, 0),
            Err(RulesError::Validation(_))
        ));
        assert!(matches!(
            encounter_difficulty(0, 3, -2),
            Err(RulesError::Validation(_))
        ));
    }

    #[test]
    fn test_empty_encounter_is_easy() {
        assert_eq!(encounter_difficulty(0, 1, 4), Ok(Difficulty::Easy));
    }

    #[test]
    fn test_custom_thresholds() {
        let thresholds = DifficultyThresholds {
            easy_per_level: 10.0,
            medium_per_level: 20.0,
            hard_per_level: 30.0,
        };
        assert_eq!(classify_difficulty(&thresholds, 100, 5, 2), Ok(Difficulty::Medium));
        assert_eq!(classify_difficulty(&thresholds, 400, 5, 2), Ok(Difficulty::Deadly));
    }

    #[test]
    fn test_party_from_levels() {
        assert_eq!(Party::from_levels(&[3, 4, 5]), Party::new(4, 3));
        // 4.5 rounds up
        assert_eq!(Party::from_levels(&[4, 5]), Party::new(5, 2));
        // 4.33 rounds down
        assert_eq!(Party::from_levels(&[4, 4, 5]), Party::new(4, 3));
        assert_eq!(Party::from_levels(&[]), Party::new(0, 0));
    }

    #[test]
    fn test_difficulty_ordering_and_labels() {
        assert!(Difficulty::Easy < Difficulty::Deadly);
        assert_eq!(Difficulty::Hard.to_string(), "Hard");
    }
}
