use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Creature size category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Size {
    #[serde(rename = "Diminuto")]
    Tiny,
    #[serde(rename = "Pequeño")]
    Small,
    #[serde(rename = "Mediano")]
    Medium,
    #[serde(rename = "Grande")]
    Large,
    #[serde(rename = "Enorme")]
    Huge,
    #[serde(rename = "Gargantuesco")]
    Gargantuan,
}

impl Size {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Tiny => "Diminuto",
            Self::Small => "Pequeño",
            Self::Medium => "Mediano",
            Self::Large => "Grande",
            Self::Huge => "Enorme",
            Self::Gargantuan => "Gargantuesco",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Size {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "diminuto" | "tiny" => Ok(Self::Tiny),
            "pequeño" | "pequeno" | "small" => Ok(Self::Small),
            "mediano" | "medium" => Ok(Self::Medium),
            "grande" | "large" => Ok(Self::Large),
            "enorme" | "huge" => Ok(Self::Huge),
            "gargantuesco" | "gargantuan" => Ok(Self::Gargantuan),
            other => Err(DomainError::parse(format!("Unknown size: {}", other))),
        }
    }
}

/// A playable race.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceDefinition {
    pub name: String,
    /// Base walking speed in feet
    pub speed: i32,
    pub size: Size,
    pub typical_alignment: String,
    pub languages: Vec<String>,
    pub traits: Vec<String>,
    #[serde(default)]
    pub subraces: Vec<String>,
    #[serde(default)]
    pub description: String,
}
