//! External content port (spells and monsters from a reference API).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::error::ContentError;

/// A spell available to a class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellSummary {
    pub index: String,
    pub name: String,
    /// Spell level; 0 for cantrips.
    #[serde(default)]
    pub level: u8,
}

/// The headline numbers of a remote monster entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonsterSummary {
    pub index: String,
    pub name: String,
    pub size: String,
    pub creature_type: String,
    pub alignment: String,
    pub armor_class: i32,
    pub hit_points: i32,
    pub challenge_rating: f64,
    pub xp: u64,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentProviderPort: Send + Sync {
    /// Spells on the given class's list, keyed by the provider's class index.
    async fn spells_for_class(&self, class_index: &str) -> Result<Vec<SpellSummary>, ContentError>;

    async fn monster(&self, index: &str) -> Result<Option<MonsterSummary>, ContentError>;
}
