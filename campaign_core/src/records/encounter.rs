//! Stored encounter record

use super::{Owned, OwnerId};
use crate::encounter::{Encounter, EncounterXpResult, Party};
use crate::error::RulesError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterRecord {
    pub id: String,
    pub owner: OwnerId,
    #[serde(default)]
    pub campaign_id: Option<String>,
    pub name: String,
    pub party: Party,
    #[serde(default)]
    pub encounter: Encounter,
    #[serde(default)]
    pub notes: String,
}

impl EncounterRecord {
    pub fn new(
        id: impl Into<String>,
        owner: OwnerId,
        name: impl Into<String>,
        party: Party,
    ) -> Self {
        EncounterRecord {
            id: id.into(),
            owner,
            campaign_id: None,
            name: name.into(),
            party,
            encounter: Encounter::new(),
            notes: String::new(),
        }
    }

    pub fn evaluate(&self) -> Result<EncounterXpResult, RulesError> {
        self.encounter.evaluate(&self.party)
    }
}

impl Owned for EncounterRecord {
    fn owner(&self) -> &OwnerId {
        &self.owner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encounter::{Difficulty, MonsterEntry};

    fn make_crypt() -> EncounterRecord {
        EncounterRecord::new("e1", OwnerId::from("alice"), "Crypt", Party::new(3, 4))
    }

    #[test]
    fn test_evaluate_record() {
        let mut record = make_crypt();
        record
            .encounter
            .add_monster("Ghoul", MonsterEntry::new("1", 3))
            .unwrap();

        // 600 / 4 = 150 per player; level 3 thresholds 150 / 300 / 450
        let result = record.evaluate().unwrap();
        assert_eq!(result.total_xp, 600);
        assert_eq!(result.difficulty, Difficulty::Medium);
    }

    #[test]
    fn test_record_with_empty_party() {
        let owner = OwnerId::from("alice");
        let record = EncounterRecord::new("e2", owner, "Nobody home", Party::new(1, 0));
        assert!(matches!(record.evaluate(), Err(RulesError::Validation(_))));
    }

    #[test]
    fn test_json_round_trip_keeps_ids() {
        let mut record = make_crypt();
        let ghoul = record
            .encounter
            .add_monster("Ghoul", MonsterEntry::new("1", 3))
            .unwrap();

        let json = serde_json::to_string(&record).unwrap();
        let mut back: EncounterRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);

        let next = back
            .encounter
            .add_monster("Ghast", MonsterEntry::new("2", 1))
            .unwrap();
        assert_ne!(next, ghoul);
    }
}
