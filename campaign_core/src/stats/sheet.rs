//! CharacterSheet - On-demand derived statistics for a character

use super::formulas::{
    ability_modifier, passive_skill_value, proficiency_bonus_for_level, saving_throw_total,
    skill_total,
};
use crate::error::RulesError;
use crate::types::{Ability, AbilityScoreSet, Skill};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Level and proficiency selections of a character
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProficiencyProfile {
    /// Character level (1-20)
    pub level: i32,
    /// Abilities with saving throw proficiency
    #[serde(default)]
    pub saving_throws: BTreeSet<Ability>,
    /// Proficient skills
    #[serde(default)]
    pub skills: BTreeSet<Skill>,
}

impl Default for ProficiencyProfile {
    fn default() -> Self {
        ProficiencyProfile::new(1)
    }
}

impl ProficiencyProfile {
    pub fn new(level: i32) -> Self {
        ProficiencyProfile {
            level,
            saving_throws: BTreeSet::new(),
            skills: BTreeSet::new(),
        }
    }

    /// Builder-style helper to mark saving throw proficiencies
    pub fn with_saving_throws(mut self, abilities: impl IntoIterator<Item = Ability>) -> Self {
        self.saving_throws.extend(abilities);
        self
    }

    /// Builder-style helper to mark skill proficiencies
    pub fn with_skills(mut self, skills: impl IntoIterator<Item = Skill>) -> Self {
        self.skills.extend(skills);
        self
    }

    /// Mark a skill proficient by catalog name
    pub fn add_skill_by_name(&mut self, name: &str) -> Result<Skill, RulesError> {
        let skill: Skill = name.parse()?;
        self.skills.insert(skill);
        Ok(skill)
    }

    /// Derived from level on every call, so a level change always applies
    pub fn proficiency_bonus(&self) -> i32 {
        proficiency_bonus_for_level(self.level)
    }

    pub fn is_save_proficient(&self, ability: Ability) -> bool {
        self.saving_throws.contains(&ability)
    }

    pub fn is_skill_proficient(&self, skill: Skill) -> bool {
        self.skills.contains(&skill)
    }
}

/// Primary inputs of a character: scores plus proficiencies.
///
/// Nothing derived is cached; every getter recomputes from the inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSheet {
    pub scores: AbilityScoreSet,
    pub profile: ProficiencyProfile,
}

impl CharacterSheet {
    pub fn new(scores: AbilityScoreSet, profile: ProficiencyProfile) -> Self {
        CharacterSheet { scores, profile }
    }

    pub fn level(&self) -> i32 {
        self.profile.level
    }

    pub fn set_level(&mut self, level: i32) {
        self.profile.level = level;
    }

    pub fn modifier(&self, ability: Ability) -> i32 {
        ability_modifier(self.scores.get(ability))
    }

    pub fn proficiency_bonus(&self) -> i32 {
        self.profile.proficiency_bonus()
    }

    pub fn saving_throw(&self, ability: Ability) -> i32 {
        saving_throw_total(
            self.scores.get(ability),
            self.profile.is_save_proficient(ability),
            self.proficiency_bonus(),
        )
    }

    pub fn skill(&self, skill: Skill) -> i32 {
        skill_total(
            self.scores.get(skill.governing_ability()),
            self.profile.is_skill_proficient(skill),
            self.proficiency_bonus(),
        )
    }

    /// Skill total by catalog name; unknown names are a lookup error
    pub fn skill_by_name(&self, name: &str) -> Result<i32, RulesError> {
        let skill: Skill = name.parse()?;
        Ok(self.skill(skill))
    }

    pub fn passive_perception(&self) -> i32 {
        passive_skill_value(
            self.scores.wisdom,
            self.profile.is_skill_proficient(Skill::Perception),
            self.proficiency_bonus(),
        )
    }

    /// Compute every derived value in one snapshot
    pub fn derive(&self) -> DerivedStats {
        let modifiers = Ability::all()
            .iter()
            .map(|&a| (a, self.modifier(a)))
            .collect();
        let saving_throws = Ability::all()
            .iter()
            .map(|&a| (a, self.saving_throw(a)))
            .collect();
        let skills = Skill::all().iter().map(|&s| (s, self.skill(s))).collect();

        DerivedStats {
            level: self.level(),
            proficiency_bonus: self.proficiency_bonus(),
            modifiers,
            saving_throws,
            skills,
            passive_perception: self.passive_perception(),
        }
    }
}

/// Snapshot of all derived statistics, ready for display or storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedStats {
    pub level: i32,
    pub proficiency_bonus: i32,
    pub modifiers: BTreeMap<Ability, i32>,
    pub saving_throws: BTreeMap<Ability, i32>,
    pub skills: BTreeMap<Skill, i32>,
    pub passive_perception: i32,
}

impl DerivedStats {
    /// Snapshots loaded from storage may be partial; a missing entry is a lookup error
    pub fn modifier(&self, ability: Ability) -> Result<i32, RulesError> {
        self.modifiers
            .get(&ability)
            .copied()
            .ok_or_else(|| missing_entry("modifier", ability.name()))
    }

    pub fn saving_throw(&self, ability: Ability) -> Result<i32, RulesError> {
        self.saving_throws
            .get(&ability)
            .copied()
            .ok_or_else(|| missing_entry("saving throw", ability.name()))
    }

    pub fn skill(&self, skill: Skill) -> Result<i32, RulesError> {
        self.skills
            .get(&skill)
            .copied()
            .ok_or_else(|| missing_entry("skill", skill.name()))
    }
}

fn missing_entry(kind: &str, name: &str) -> RulesError {
    RulesError::Lookup(format!("derived stats have no {} for {}", kind, name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_rogue() -> CharacterSheet {
        // STR 8, DEX 16, CON 14, INT 12, WIS 13, CHA 10
        let scores = AbilityScoreSet::new(8, 16, 14, 12, 13, 10);
        let profile = ProficiencyProfile::new(3)
            .with_saving_throws([Ability::Dexterity, Ability::Intelligence])
            .with_skills([Skill::Stealth, Skill::Perception, Skill::SleightOfHand]);
        CharacterSheet::new(scores, profile)
    }

    #[test]
    fn test_modifiers() {
        let sheet = make_rogue();
        assert_eq!(sheet.modifier(Ability::Strength), -1);
        assert_eq!(sheet.modifier(Ability::Dexterity), 3);
        assert_eq!(sheet.modifier(Ability::Wisdom), 1);
        assert_eq!(sheet.modifier(Ability::Charisma), 0);
    }

    #[test]
    fn test_saving_throws() {
        let sheet = make_rogue();
        assert_eq!(sheet.saving_throw(Ability::Dexterity), 5);
        assert_eq!(sheet.saving_throw(Ability::Intelligence), 3);
        assert_eq!(sheet.saving_throw(Ability::Strength), -1);
    }

    #[test]
    fn test_skills() {
        let sheet = make_rogue();
        assert_eq!(sheet.skill(Skill::Stealth), 5);
        assert_eq!(sheet.skill(Skill::Acrobatics), 3);
        assert_eq!(sheet.skill(Skill::Athletics), -1);
        assert_eq!(sheet.skill_by_name("Sleight of Hand"), Ok(5));
        assert!(matches!(
            sheet.skill_by_name("Underwater Basketry"),
            Err(RulesError::Lookup(_))
        ));
    }

    #[test]
    fn test_passive_perception() {
        let sheet = make_rogue();
        // 10 + 1 (WIS 13) + 2 (proficient)
        assert_eq!(sheet.passive_perception(), 13);
    }

    #[test]
    fn test_level_change_updates_proficiency() {
        let mut sheet = make_rogue();
        assert_eq!(sheet.proficiency_bonus(), 2);

        sheet.set_level(5);
        assert_eq!(sheet.proficiency_bonus(), 3);
        assert_eq!(sheet.skill(Skill::Stealth), 6);
        assert_eq!(sheet.passive_perception(), 14);

        sheet.set_level(17);
        assert_eq!(sheet.saving_throw(Ability::Dexterity), 9);
    }

    #[test]
    fn test_derive_snapshot_matches_getters() {
        let sheet = make_rogue();
        let derived = sheet.derive();

        assert_eq!(derived.level, 3);
        assert_eq!(derived.proficiency_bonus, 2);
        assert_eq!(derived.skills.len(), 18);
        assert_eq!(derived.modifiers.len(), 6);
        for &skill in Skill::all() {
            assert_eq!(derived.skill(skill), Ok(sheet.skill(skill)));
        }
        for &ability in Ability::all() {
            assert_eq!(derived.saving_throw(ability), Ok(sheet.saving_throw(ability)));
            assert_eq!(derived.modifier(ability), Ok(sheet.modifier(ability)));
        }
        assert_eq!(derived.passive_perception, 13);
    }

    #[test]
    fn test_partial_snapshot_reports_missing_entries() {
        let mut derived = make_rogue().derive();
        derived.skills.remove(&Skill::Stealth);
        derived.saving_throws.clear();
        derived.modifiers.remove(&Ability::Wisdom);

        assert!(matches!(derived.skill(Skill::Stealth), Err(RulesError::Lookup(_))));
        assert_eq!(derived.skill(Skill::Perception), Ok(3));
        assert!(matches!(
            derived.saving_throw(Ability::Dexterity),
            Err(RulesError::Lookup(_))
        ));
        assert!(matches!(derived.modifier(Ability::Wisdom), Err(RulesError::Lookup(_))));
        assert_eq!(derived.modifier(Ability::Dexterity), Ok(3));
    }

    #[test]
    fn test_add_skill_by_name() {
        let mut profile = ProficiencyProfile::new(1);
        assert_eq!(profile.add_skill_by_name("animal_handling"), Ok(Skill::AnimalHandling));
        assert!(profile.is_skill_proficient(Skill::AnimalHandling));
        assert!(profile.add_skill_by_name("Juggling").is_err());
        assert_eq!(profile.skills.len(), 1);
    }

    #[test]
    fn test_profile_deserializes_without_selections() {
        let profile: ProficiencyProfile = toml::from_str("level = 9").unwrap();
        assert_eq!(profile.proficiency_bonus(), 4);
        assert!(profile.skills.is_empty());
    }
}
