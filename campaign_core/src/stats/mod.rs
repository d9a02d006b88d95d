//! Character statistics - modifiers, proficiency, saves, skills and hit points

mod formulas;
mod hit_points;
mod roller;
mod sheet;

pub use formulas::{
    ability_modifier, format_modifier, passive_skill_value, proficiency_bonus_for_level,
    saving_throw_total, skill_total, PASSIVE_BASE,
};
pub use hit_points::{estimate_hit_points, MIN_HIT_POINTS};
pub use roller::{roll_ability_score, roll_ability_scores, DieRoller, FixedRolls, RngRoller};
pub use sheet::{CharacterSheet, DerivedStats, ProficiencyProfile};
