//! Encounter calculator - XP totals and difficulty

mod challenge;
mod difficulty;
mod monsters;

pub use challenge::{
    challenge_ratings, is_known_challenge_rating, xp_for_challenge_rating, CHALLENGE_RATING_XP,
};
pub use difficulty::{classify_difficulty, encounter_difficulty, Difficulty, Party};
pub use monsters::{Encounter, EncounterMonster, MonsterId};

use serde::{Deserialize, Serialize};

/// A challenge rating and how many monsters of it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterEntry {
    /// One of "0", "1/8", "1/4", "1/2", "1".."30"
    pub challenge_rating: String,
    pub quantity: u32,
}

impl MonsterEntry {
    pub fn new(challenge_rating: impl Into<String>, quantity: u32) -> Self {
        MonsterEntry {
            challenge_rating: challenge_rating.into(),
            quantity,
        }
    }

    /// Base XP × quantity; 0 for an unknown challenge rating
    pub fn xp(&self) -> u64 {
        match xp_for_challenge_rating(&self.challenge_rating) {
            Some(base) => base.saturating_mul(self.quantity as u64),
            None => {
                tracing::warn!(
                    "Unknown challenge rating '{}' counted as 0 XP",
                    self.challenge_rating
                );
                0
            }
        }
    }
}

/// Total XP and difficulty for an encounter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterXpResult {
    pub total_xp: u64,
    pub difficulty: Difficulty,
}

/// Sum of base XP × quantity over all entries.
///
/// Unknown challenge ratings contribute 0 rather than failing.
pub fn total_encounter_xp<'a>(entries: impl IntoIterator<Item = &'a MonsterEntry>) -> u64 {
    entries
        .into_iter()
        .fold(0u64, |total, entry| total.saturating_add(entry.xp()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_xp_mixed_entries() {
        let entries = vec![MonsterEntry::new("1", 2), MonsterEntry::new("1/2", 1)];
        assert_eq!(total_encounter_xp(&entries), 500);
    }

    #[test]
    fn test_unknown_cr_contributes_zero() {
        // Deliberate policy: a lookup miss is tolerated, not an error
        assert_eq!(total_encounter_xp(&[MonsterEntry::new("999", 5)]), 0);

        let entries = [MonsterEntry::new("999", 5), MonsterEntry::new("5", 1)];
        assert_eq!(total_encounter_xp(&entries), 1_800);
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(total_encounter_xp(&Vec::<MonsterEntry>::new()), 0);
    }

    #[test]
    fn test_large_encounter_does_not_overflow() {
        let entries = [MonsterEntry::new("30", u32::MAX)];
        assert_eq!(total_encounter_xp(&entries), 155_000 * u32::MAX as u64);
    }
}
