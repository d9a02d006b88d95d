//! Player character record

use super::{Owned, OwnerId};
use crate::config::ClassTable;
use crate::stats::{estimate_hit_points, CharacterSheet, DerivedStats, ProficiencyProfile};
use crate::types::{Ability, AbilityScoreSet};
use serde::{Deserialize, Serialize};

/// A player character as stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRecord {
    pub id: String,
    pub owner: OwnerId,
    #[serde(default)]
    pub campaign_id: Option<String>,
    pub name: String,
    pub class_name: String,
    #[serde(default)]
    pub race: Option<String>,
    pub scores: AbilityScoreSet,
    pub proficiencies: ProficiencyProfile,
    /// Manually entered maximum HP; estimated from class and CON when absent
    #[serde(default)]
    pub max_hit_points: Option<i32>,
    #[serde(default)]
    pub notes: String,
}

impl CharacterRecord {
    pub fn new(
        id: impl Into<String>,
        owner: OwnerId,
        name: impl Into<String>,
        class_name: impl Into<String>,
        level: i32,
    ) -> Self {
        CharacterRecord {
            id: id.into(),
            owner,
            campaign_id: None,
            name: name.into(),
            class_name: class_name.into(),
            race: None,
            scores: AbilityScoreSet::default(),
            proficiencies: ProficiencyProfile::new(level),
            max_hit_points: None,
            notes: String::new(),
        }
    }

    pub fn level(&self) -> i32 {
        self.proficiencies.level
    }

    pub fn sheet(&self) -> CharacterSheet {
        CharacterSheet::new(self.scores, self.proficiencies.clone())
    }

    pub fn derived_stats(&self) -> DerivedStats {
        self.sheet().derive()
    }

    /// Stored maximum HP, or the class hit die plus CON modifier (at least 1)
    pub fn max_hit_points(&self, classes: &ClassTable) -> i32 {
        self.max_hit_points.unwrap_or_else(|| {
            estimate_hit_points(
                classes.hit_die(&self.class_name),
                self.scores.modifier(Ability::Constitution),
            )
        })
    }
}

impl Owned for CharacterRecord {
    fn owner(&self) -> &OwnerId {
        &self.owner
    }
}
