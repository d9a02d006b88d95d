//! campaign_core - Rules engine for tabletop campaign management
//!
//! This library provides:
//! - CharacterSheet: Derived character statistics (modifiers, saves, skills, passive perception)
//! - Ability score rolling behind an injectable dice source
//! - Encounter: Monster lists with XP totals and difficulty classification
//! - Typed, owner-scoped records for characters, creatures, encounters and campaigns

pub mod config;
pub mod encounter;
pub mod error;
pub mod prelude;
pub mod records;
pub mod stats;
pub mod types;

// Re-export core types for convenience
pub use config::{default_classes, ClassTable, RulesConstants};
pub use encounter::{
    encounter_difficulty, total_encounter_xp, xp_for_challenge_rating, Difficulty, Encounter,
    EncounterMonster, EncounterXpResult, MonsterEntry, MonsterId, Party,
};
pub use error::RulesError;
pub use records::{
    CampaignRecord, CharacterRecord, CreatureKind, CreatureRecord, EncounterRecord, OwnerId,
};
pub use stats::{
    ability_modifier, estimate_hit_points, format_modifier, passive_skill_value,
    proficiency_bonus_for_level, roll_ability_score, roll_ability_scores, saving_throw_total,
    skill_total, CharacterSheet, DerivedStats, DieRoller, FixedRolls, ProficiencyProfile, RngRoller,
};
pub use types::{Ability, AbilityScoreSet, Skill};
