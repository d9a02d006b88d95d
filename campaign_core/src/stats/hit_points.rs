//! Hit point estimation

/// Hit points never drop below this
pub const MIN_HIT_POINTS: i32 = 1;

/// Estimate starting hit points
///
/// `max(1, hit_die + constitution_modifier)`. The base hit die usually
/// comes from [`ClassTable::hit_die`](crate::config::ClassTable::hit_die).
pub fn estimate_hit_points(class_base_hit_die: i32, constitution_modifier: i32) -> i32 {
    class_base_hit_die
        .saturating_add(constitution_modifier)
        .max(MIN_HIT_POINTS)
}
