//! The nine alignments.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Alignment {
    #[serde(rename = "Legal Bueno")]
    LawfulGood,
    #[serde(rename = "Neutral Bueno")]
    NeutralGood,
    #[serde(rename = "Caótico Bueno")]
    ChaoticGood,
    #[serde(rename = "Legal Neutral")]
    LawfulNeutral,
    #[serde(rename = "Neutral")]
    TrueNeutral,
    #[serde(rename = "Caótico Neutral")]
    ChaoticNeutral,
    #[serde(rename = "Legal Malo")]
    LawfulEvil,
    #[serde(rename = "Neutral Malo")]
    NeutralEvil,
    #[serde(rename = "Caótico Malo")]
    ChaoticEvil,
}

impl Alignment {
    /// Table order: good, neutral, evil; lawful to chaotic within each.
    pub const ALL: [Alignment; 9] = [
        Self::LawfulGood,
        Self::NeutralGood,
        Self::ChaoticGood,
        Self::LawfulNeutral,
        Self::TrueNeutral,
        Self::ChaoticNeutral,
        Self::LawfulEvil,
        Self::NeutralEvil,
        Self::ChaoticEvil,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::LawfulGood => "Legal Bueno",
            Self::NeutralGood => "Neutral Bueno",
            Self::ChaoticGood => "Caótico Bueno",
            Self::LawfulNeutral => "Legal Neutral",
            Self::TrueNeutral => "Neutral",
            Self::ChaoticNeutral => "Caótico Neutral",
            Self::LawfulEvil => "Legal Malo",
            Self::NeutralEvil => "Neutral Malo",
            Self::ChaoticEvil => "Caótico Malo",
        }
    }

    /// Two-letter abbreviation (e.g., "LG", "N").
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Self::LawfulGood => "LG",
            Self::NeutralGood => "NG",
            Self::ChaoticGood => "CG",
            Self::LawfulNeutral => "LN",
            Self::TrueNeutral => "N",
            Self::ChaoticNeutral => "CN",
            Self::LawfulEvil => "LE",
            Self::NeutralEvil => "NE",
            Self::ChaoticEvil => "CE",
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Alignment {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('ó', "o");
        Self::ALL
            .into_iter()
            .find(|a| {
                a.display_name().to_lowercase().replace('ó', "o") == normalized
                    || a.abbreviation().to_lowercase() == normalized
            })
            .ok_or_else(|| DomainError::invalid_key("alignment", s.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_display_names_with_or_without_accents() {
        assert_eq!("Caótico Bueno".parse::<Alignment>(), Ok(Alignment::ChaoticGood));
        assert_eq!("caotico malo".parse::<Alignment>(), Ok(Alignment::ChaoticEvil));
        assert_eq!("Neutral".parse::<Alignment>(), Ok(Alignment::TrueNeutral));
        assert_eq!("lg".parse::<Alignment>(), Ok(Alignment::LawfulGood));
    }

    #[test]
    fn unknown_alignment_is_invalid_key() {
        let err = "Caótico Estúpido".parse::<Alignment>().expect_err("not an alignment");
        assert!(err.is_invalid_key());
    }

    #[test]
    fn serde_uses_display_name() {
        let json = serde_json::to_string(&Alignment::LawfulNeutral).expect("serialize");
        assert_eq!(json, "\"Legal Neutral\"");
    }
}
