//! Core stat formulas

/// Base value for passive checks (10 + modifier + proficiency)
pub const PASSIVE_BASE: i32 = 10;

/// Calculate the modifier for an ability score
///
/// `floor((score - 10) / 2)`, rounding toward negative infinity so a
/// score of 9 gives -1. Out-of-range scores are not clamped.
pub fn ability_modifier(score: i32) -> i32 {
    // Same as (score - 10).div_euclid(2) without overflowing near i32::MIN
    score.div_euclid(2) - 5
}

/// Proficiency bonus for a character level
///
/// Steps up every four levels: 1-4 → +2, 5-8 → +3, 9-12 → +4,
/// 13-16 → +5, 17+ → +6. Levels below 1 get +2.
pub fn proficiency_bonus_for_level(level: i32) -> i32 {
    if level >= 17 {
        6
    } else if level >= 13 {
        5
    } else if level >= 9 {
        4
    } else if level >= 5 {
        3
    } else {
        2
    }
}

/// Saving throw total: modifier plus proficiency when proficient
pub fn saving_throw_total(score: i32, proficient: bool, proficiency_bonus: i32) -> i32 {
    ability_modifier(score) + if proficient { proficiency_bonus } else { 0 }
}

/// Skill total, given the score of the skill's governing ability
pub fn skill_total(score: i32, proficient: bool, proficiency_bonus: i32) -> i32 {
    ability_modifier(score) + if proficient { proficiency_bonus } else { 0 }
}

/// Passive perception from the wisdom score
pub fn passive_skill_value(
    wisdom_score: i32,
    perception_proficient: bool,
    proficiency_bonus: i32,
) -> i32 {
    PASSIVE_BASE + skill_total(wisdom_score, perception_proficient, proficiency_bonus)
}

/// Format a modifier or total for display: "+0", "+3", "-1"
pub fn format_modifier(value: i32) -> String {
    if value >= 0 {
        format!("+{}", value)
    } else {
        value.to_string()
    }
}
