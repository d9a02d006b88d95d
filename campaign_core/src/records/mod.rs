//! Typed, owner-scoped records for campaign entities
//!
//! Storage and HTTP live outside this crate. These records are the shapes
//! they exchange, plus the ownership check every access goes through.

mod character;
mod creature;
mod encounter;
mod legacy;

pub use character::CharacterRecord;
pub use creature::{CreatureKind, CreatureRecord};
pub use encounter::EncounterRecord;
pub use legacy::{migrate_legacy_notes, migrate_unset_legacy_stats, LegacyStatLines};

use crate::error::RulesError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of the user owning a record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnerId(pub String);

impl From<&str> for OwnerId {
    fn from(s: &str) -> Self {
        OwnerId(s.to_string())
    }
}

impl From<String> for OwnerId {
    fn from(s: String) -> Self {
        OwnerId(s)
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Anything that belongs to a single user
pub trait Owned {
    fn owner(&self) -> &OwnerId;

    fn is_owned_by(&self, user: &OwnerId) -> bool {
        self.owner() == user
    }
}

/// Allow access only when the session user owns the record
pub fn authorize<T: Owned + ?Sized>(record: &T, user: &OwnerId) -> Result<(), RulesError> {
    if record.is_owned_by(user) {
        Ok(())
    } else {
        Err(RulesError::AccessDenied {
            owner: record.owner().to_string(),
            user: user.to_string(),
        })
    }
}

/// Keep only the records a user owns
pub fn owned_by<'a, T: Owned>(
    records: &'a [T],
    user: &'a OwnerId,
) -> impl Iterator<Item = &'a T> + 'a {
    records.iter().filter(move |r| r.is_owned_by(user))
}

/// A campaign grouping characters, creatures and encounters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignRecord {
    pub id: String,
    pub owner: OwnerId,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl CampaignRecord {
    pub fn new(id: impl Into<String>, owner: OwnerId, name: impl Into<String>) -> Self {
        CampaignRecord {
            id: id.into(),
            owner,
            name: name.into(),
            description: String::new(),
        }
    }
}

impl Owned for CampaignRecord {
    fn owner(&self) -> &OwnerId {
        &self.owner
    }
}
