//! Encounter monster list and its mutation operations

use super::difficulty::{classify_difficulty, Party};
use super::{total_encounter_xp, EncounterXpResult, MonsterEntry};
use crate::config::DifficultyThresholds;
use crate::error::RulesError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a monster slot within one encounter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonsterId(pub u64);

impl fmt::Display for MonsterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "monster#{}", self.0)
    }
}

/// A named monster entry inside an encounter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterMonster {
    pub id: MonsterId,
    pub name: String,
    #[serde(flatten)]
    pub entry: MonsterEntry,
}

/// Ordered list of monsters making up an encounter.
///
/// Ids are handed out from a counter and never reused, even after removal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Encounter {
    monsters: Vec<EncounterMonster>,
    #[serde(default)]
    next_id: u64,
}

impl Encounter {
    pub fn new() -> Self {
        Encounter::default()
    }

    pub fn monsters(&self) -> &[EncounterMonster] {
        &self.monsters
    }

    pub fn get(&self, id: MonsterId) -> Option<&EncounterMonster> {
        self.monsters.iter().find(|m| m.id == id)
    }

    pub fn len(&self) -> usize {
        self.monsters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monsters.is_empty()
    }

    /// Append a monster entry with a fresh id
    pub fn add_monster(
        &mut self,
        name: impl Into<String>,
        entry: MonsterEntry,
    ) -> Result<MonsterId, RulesError> {
        validate_quantity(entry.quantity)?;

        let id = self.allocate_id()?;
        self.monsters.push(EncounterMonster {
            id,
            name: name.into(),
            entry,
        });
        Ok(id)
    }

    /// Replace the name and entry of an existing slot, keeping its position
    pub fn update_monster(
        &mut self,
        id: MonsterId,
        name: impl Into<String>,
        entry: MonsterEntry,
    ) -> Result<(), RulesError> {
        validate_quantity(entry.quantity)?;

        let slot = self.slot_mut(id)?;
        slot.name = name.into();
        slot.entry = entry;
        Ok(())
    }

    /// Remove a slot, returning it
    pub fn remove_monster(&mut self, id: MonsterId) -> Result<EncounterMonster, RulesError> {
        let index = self
            .monsters
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| unknown_monster(id))?;
        Ok(self.monsters.remove(index))
    }

    /// Change a slot's quantity by `delta`, never going below 1.
    ///
    /// Returns the new quantity. Decrementing a quantity of 1 is a no-op,
    /// not a removal.
    pub fn adjust_quantity(&mut self, id: MonsterId, delta: i64) -> Result<u32, RulesError> {
        let slot = self.slot_mut(id)?;
        let adjusted = (slot.entry.quantity as i64).saturating_add(delta);
        slot.entry.quantity = adjusted.clamp(1, u32::MAX as i64) as u32;
        Ok(slot.entry.quantity)
    }

    /// Plain entries, in list order
    pub fn entries(&self) -> Vec<MonsterEntry> {
        self.monsters.iter().map(|m| m.entry.clone()).collect()
    }

    /// Total XP of every slot; unknown challenge ratings count as 0
    pub fn total_xp(&self) -> u64 {
        total_encounter_xp(self.monsters.iter().map(|m| &m.entry))
    }

    /// Total XP and difficulty against a party, with default thresholds
    pub fn evaluate(&self, party: &Party) -> Result<EncounterXpResult, RulesError> {
        self.evaluate_with(&DifficultyThresholds::default(), party)
    }

    pub fn evaluate_with(
        &self,
        thresholds: &DifficultyThresholds,
        party: &Party,
    ) -> Result<EncounterXpResult, RulesError> {
        let total_xp = self.total_xp();
        let difficulty = classify_difficulty(thresholds, total_xp, party.level, party.size)?;
        Ok(EncounterXpResult {
            total_xp,
            difficulty,
        })
    }

    /// Every id handed out must leave room for the next counter value
    fn allocate_id(&mut self) -> Result<MonsterId, RulesError> {
        // Lists deserialized from older records may lack a counter
        let floor = match self.monsters.iter().map(|m| m.id.0).max() {
            Some(highest) => highest.checked_add(1).ok_or_else(id_space_exhausted)?,
            None => 0,
        };
        let id = self.next_id.max(floor);
        self.next_id = id.checked_add(1).ok_or_else(id_space_exhausted)?;
        Ok(MonsterId(id))
    }

    fn slot_mut(&mut self, id: MonsterId) -> Result<&mut EncounterMonster, RulesError> {
        self.monsters
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| unknown_monster(id))
    }
}

fn validate_quantity(quantity: u32) -> Result<(), RulesError> {
    if quantity == 0 {
        return Err(RulesError::Validation(
            "monster quantity must be at least 1".to_string(),
        ));
    }
    Ok(())
}

fn id_space_exhausted() -> RulesError {
    RulesError::Validation("monster id space exhausted".to_string())
}

fn unknown_monster(id: MonsterId) -> RulesError {
    RulesError::Lookup(format!("no {} in encounter", id))
}
