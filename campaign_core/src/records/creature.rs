//! Non-player character and creature records

use super::legacy::migrate_unset_legacy_stats;
use super::{Owned, OwnerId};
use crate::encounter::{xp_for_challenge_rating, MonsterEntry};
use crate::stats::ability_modifier;
use crate::types::{Ability, AbilityScoreSet};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreatureKind {
    Npc,
    Creature,
}

/// An NPC or monster with typed combat fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureRecord {
    pub id: String,
    pub owner: OwnerId,
    pub kind: CreatureKind,
    #[serde(default)]
    pub campaign_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub challenge_rating: Option<String>,
    #[serde(default)]
    pub armor_class: Option<i32>,
    #[serde(default)]
    pub hit_points: Option<i32>,
    #[serde(default)]
    pub scores: Option<AbilityScoreSet>,
    #[serde(default)]
    pub notes: String,
}

impl CreatureRecord {
    pub fn new(
        id: impl Into<String>,
        owner: OwnerId,
        kind: CreatureKind,
        name: impl Into<String>,
    ) -> Self {
        CreatureRecord {
            id: id.into(),
            owner,
            kind,
            campaign_id: None,
            name: name.into(),
            challenge_rating: None,
            armor_class: None,
            hit_points: None,
            scores: None,
            notes: String::new(),
        }
    }

    pub fn modifier(&self, ability: Ability) -> Option<i32> {
        self.scores.map(|s| ability_modifier(s.get(ability)))
    }

    /// Base XP of this creature; `None` without a known challenge rating
    pub fn base_xp(&self) -> Option<u64> {
        self.challenge_rating
            .as_deref()
            .and_then(xp_for_challenge_rating)
    }

    /// Encounter entry for `quantity` of this creature, if it has a rating
    pub fn monster_entry(&self, quantity: u32) -> Option<MonsterEntry> {
        self.challenge_rating
            .as_ref()
            .map(|cr| MonsterEntry::new(cr.clone(), quantity))
    }

    /// Move legacy `CA:` / `Vida/Resistência:` note lines into typed fields.
    ///
    /// Fields that are already set are kept, and so are the note lines that
    /// disagree with them. Returns true if a field was filled.
    pub fn absorb_legacy_notes(&mut self) -> bool {
        let migrated = migrate_unset_legacy_stats(
            &self.notes,
            self.armor_class.is_some(),
            self.hit_points.is_some(),
        );
        if migrated.armor_class.is_none() && migrated.hit_points.is_none() {
            return false;
        }

        self.armor_class = self.armor_class.or(migrated.armor_class);
        self.hit_points = self.hit_points.or(migrated.hit_points);
        self.notes = migrated.remaining_notes;
        true
    }
}

impl Owned for CreatureRecord {
    fn owner(&self) -> &OwnerId {
        &self.owner
    }
}
