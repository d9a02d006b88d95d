//! Prelude module for convenient imports
//!
//! ```rust
//! use campaign_core::prelude::*;
//! ```

// Core types
pub use crate::error::RulesError;
pub use crate::types::{Ability, AbilityScoreSet, Skill};

// Character statistics
pub use crate::stats::{
    ability_modifier, estimate_hit_points, format_modifier, proficiency_bonus_for_level,
    CharacterSheet, DerivedStats, ProficiencyProfile,
};

// Dice
pub use crate::stats::{roll_ability_score, roll_ability_scores, DieRoller, RngRoller};

// Encounters
pub use crate::encounter::{
    Difficulty, Encounter, EncounterXpResult, MonsterEntry, MonsterId, Party,
};

// Records
pub use crate::records::{authorize, Owned, OwnerId};

// Config
pub use crate::config::{default_classes, ClassTable, RulesConstants};
