//! One-way migration of stat lines packed into free-text notes.
//!
//! Older creature records stored armor class and hit points as note lines
//! such as `CA: 15` and `Vida/Resistência: 40`. These are lifted into typed
//! fields once; nothing writes the text format back.

/// Typed values recovered from legacy notes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegacyStatLines {
    pub armor_class: Option<i32>,
    pub hit_points: Option<i32>,
    /// Notes with the recognized lines removed
    pub remaining_notes: String,
}

const ARMOR_CLASS_KEYS: &[&str] = &["ca", "ac"];
const HIT_POINT_KEYS: &[&str] = &["vida/resistência", "vida", "hp"];

/// Split recognized stat lines out of free-text notes.
///
/// Lines whose value doesn't start with an integer are left in the notes.
pub fn migrate_legacy_notes(notes: &str) -> LegacyStatLines {
    migrate_unset_legacy_stats(notes, false, false)
}

/// Like [`migrate_legacy_notes`], but only lifts lines for fields that are
/// still unset. Lines for a field that already holds a value stay in the notes.
pub fn migrate_unset_legacy_stats(
    notes: &str,
    armor_class_set: bool,
    hit_points_set: bool,
) -> LegacyStatLines {
    let mut result = LegacyStatLines::default();
    let mut kept: Vec<&str> = Vec::new();

    for line in notes.lines() {
        let parsed = line.split_once(':').and_then(|(key, value)| {
            let key = key.trim().to_lowercase();
            leading_integer(value).map(|number| (key, number))
        });

        match parsed {
            Some((key, number)) if !armor_class_set && ARMOR_CLASS_KEYS.contains(&key.as_str()) => {
                result.armor_class = Some(number);
            }
            Some((key, number)) if !hit_points_set && HIT_POINT_KEYS.contains(&key.as_str()) => {
                result.hit_points = Some(number);
            }
            _ => kept.push(line),
        }
    }

    result.remaining_notes = kept.join("\n").trim().to_string();
    result
}

/// Parse the integer at the start of `value` ("15 (natural armor)" → 15)
fn leading_integer(value: &str) -> Option<i32> {
    let value = value.trim_start();
    let end = value
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && c == '-')))
        .map(|(i, _)| i)
        .unwrap_or(value.len());
    value[..end].parse().ok()
}
