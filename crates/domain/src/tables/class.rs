use serde::{Deserialize, Serialize};

use crate::value_objects::Ability;

/// Ability order used when a class gives no preference.
pub const DEFAULT_STAT_PRIORITY: [Ability; 6] = Ability::ALL;

fn default_stat_priority() -> [Ability; 6] {
    DEFAULT_STAT_PRIORITY
}

/// A character class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassDefinition {
    pub name: String,
    /// Hit die size (6, 8, 10 or 12)
    pub hit_die: u8,
    pub primary_ability: String,
    pub saving_throws: Vec<Ability>,
    pub proficiencies: Vec<String>,
    /// Free-text skill choice rule ("Elige 2: ...")
    pub skill_choices: String,
    pub features: Vec<String>,
    #[serde(default)]
    pub spellcasting: bool,
    #[serde(default)]
    pub description: String,
    /// Abilities from most to least important; rolled and standard-array
    /// scores are assigned in this order.
    #[serde(default = "default_stat_priority")]
    pub stat_priority: [Ability; 6],
}

impl ClassDefinition {
    /// True when `priority` names each ability exactly once.
    pub fn is_valid_priority(priority: &[Ability; 6]) -> bool {
        Ability::ALL.iter().all(|a| priority.contains(a))
    }
}
