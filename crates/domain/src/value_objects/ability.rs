//! Ability value object - the six core character attributes.
//!
//! Provides type safety for ability references instead of magic strings like
//! "STR" or "Fuerza". The reference tables name saving throws in Spanish, so
//! parsing accepts abbreviations, English and Spanish names.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// One of the six ability scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ability {
    /// Strength - physical power
    Strength,
    /// Dexterity - agility and reflexes
    Dexterity,
    /// Constitution - endurance and health
    Constitution,
    /// Intelligence - reasoning and memory
    Intelligence,
    /// Wisdom - perception and insight
    Wisdom,
    /// Charisma - force of personality
    Charisma,
}

impl Ability {
    /// All abilities in canonical sheet order.
    pub const ALL: [Ability; 6] = [
        Self::Strength,
        Self::Dexterity,
        Self::Constitution,
        Self::Intelligence,
        Self::Wisdom,
        Self::Charisma,
    ];

    /// Returns the short uppercase string representation (e.g., "STR", "DEX").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strength => "STR",
            Self::Dexterity => "DEX",
            Self::Constitution => "CON",
            Self::Intelligence => "INT",
            Self::Wisdom => "WIS",
            Self::Charisma => "CHA",
        }
    }

    /// Lowercase key used in serialized score maps (e.g., "strength").
    pub fn key(&self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Dexterity => "dexterity",
            Self::Constitution => "constitution",
            Self::Intelligence => "intelligence",
            Self::Wisdom => "wisdom",
            Self::Charisma => "charisma",
        }
    }

    /// Returns the full English name (e.g., "Strength").
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Dexterity => "Dexterity",
            Self::Constitution => "Constitution",
            Self::Intelligence => "Intelligence",
            Self::Wisdom => "Wisdom",
            Self::Charisma => "Charisma",
        }
    }

    /// Name as written in the reference tables (e.g., "Fuerza").
    pub fn spanish_name(&self) -> &'static str {
        match self {
            Self::Strength => "Fuerza",
            Self::Dexterity => "Destreza",
            Self::Constitution => "Constitución",
            Self::Intelligence => "Inteligencia",
            Self::Wisdom => "Sabiduría",
            Self::Charisma => "Carisma",
        }
    }

    /// Position in [`Ability::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Self::Strength => 0,
            Self::Dexterity => 1,
            Self::Constitution => 2,
            Self::Intelligence => 3,
            Self::Wisdom => 4,
            Self::Charisma => 5,
        }
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Ability {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "str" | "strength" | "fue" | "fuerza" => Ok(Self::Strength),
            "dex" | "dexterity" | "des" | "destreza" => Ok(Self::Dexterity),
            "con" | "constitution" | "constitución" | "constitucion" => Ok(Self::Constitution),
            "int" | "intelligence" | "inteligencia" => Ok(Self::Intelligence),
            "wis" | "wisdom" | "sab" | "sabiduría" | "sabiduria" => Ok(Self::Wisdom),
            "cha" | "charisma" | "car" | "carisma" => Ok(Self::Charisma),
            other => Err(DomainError::parse(format!("Unknown ability: {}", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ability_as_str() {
        assert_eq!(Ability::Strength.as_str(), "STR");
        assert_eq!(Ability::Dexterity.as_str(), "DEX");
        assert_eq!(Ability::Charisma.as_str(), "CHA");
    }

    #[test]
    fn test_ability_from_str() {
        assert_eq!(Ability::from_str("STR"), Ok(Ability::Strength));
        assert_eq!(Ability::from_str("dexterity"), Ok(Ability::Dexterity));
        assert_eq!(Ability::from_str("Constitución"), Ok(Ability::Constitution));
        assert_eq!(Ability::from_str("Sabiduría"), Ok(Ability::Wisdom));
        assert!(Ability::from_str("Suerte").is_err());
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, ability) in Ability::ALL.iter().enumerate() {
            assert_eq!(ability.index(), i);
        }
    }

    #[test]
    fn test_ability_serde_uses_lowercase_key() {
        let json = serde_json::to_string(&Ability::Wisdom).expect("serialize");
        assert_eq!(json, "\"wisdom\"");
        let parsed: Ability = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, Ability::Wisdom);
    }
}
