//! Encounter difficulty from party size and creature experience.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ChallengeRating;
use crate::error::DomainError;

pub const DEFAULT_XP_PER_CHARACTER: u32 = 500;

/// Experience budget each party member contributes to the difficulty threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncounterBudget {
    pub xp_per_character: u32,
}

impl EncounterBudget {
    pub fn new(xp_per_character: u32) -> Result<Self, DomainError> {
        if xp_per_character == 0 {
            return Err(DomainError::validation(
                "XP per character must be greater than zero",
            ));
        }
        Ok(Self { xp_per_character })
    }

    pub fn threshold(&self, party_size: u32) -> u64 {
        u64::from(party_size) * u64::from(self.xp_per_character)
    }
}

impl Default for EncounterBudget {
    fn default() -> Self {
        Self {
            xp_per_character: DEFAULT_XP_PER_CHARACTER,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyTier {
    Easy,
    Medium,
    Hard,
    Deadly,
}

impl DifficultyTier {
    pub const ALL: [DifficultyTier; 4] = [Self::Easy, Self::Medium, Self::Hard, Self::Deadly];

    /// Easy below half the threshold, Medium below it, Hard below 1.5x, else Deadly.
    pub fn classify(total_xp: u64, threshold: u64) -> Self {
        if total_xp * 2 < threshold {
            Self::Easy
        } else if total_xp < threshold {
            Self::Medium
        } else if total_xp * 2 < threshold * 3 {
            Self::Hard
        } else {
            Self::Deadly
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Deadly => "deadly",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Easy => "Fácil",
            Self::Medium => "Media",
            Self::Hard => "Difícil",
            Self::Deadly => "Mortal",
        }
    }
}

impl fmt::Display for DifficultyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for DifficultyTier {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" | "fácil" | "facil" => Ok(Self::Easy),
            "medium" | "media" => Ok(Self::Medium),
            "hard" | "difícil" | "dificil" => Ok(Self::Hard),
            "deadly" | "mortal" => Ok(Self::Deadly),
            other => Err(DomainError::invalid_key("difficulty", other)),
        }
    }
}

/// Result of evaluating one encounter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncounterDifficulty {
    pub creature_count: usize,
    pub total_xp: u64,
    pub threshold: u64,
    pub tier: DifficultyTier,
}

/// Sum creature experience and classify it against the party's threshold.
///
/// An empty creature list is a valid, trivially Easy encounter.
///
/// # Errors
///
/// [`DomainError::Validation`] when `party_size` is zero.
pub fn evaluate_encounter<I>(
    creatures: I,
    party_size: u32,
    budget: EncounterBudget,
) -> Result<EncounterDifficulty, DomainError>
where
    I: IntoIterator<Item = ChallengeRating>,
{
    if party_size == 0 {
        return Err(DomainError::validation("Party size must be at least 1"));
    }
    if budget.xp_per_character == 0 {
        return Err(DomainError::validation(
            "XP per character must be greater than zero",
        ));
    }

    let (creature_count, total_xp) = creatures
        .into_iter()
        .fold((0usize, 0u64), |(n, xp), cr| (n + 1, xp + cr.xp()));
    let threshold = budget.threshold(party_size);

    Ok(EncounterDifficulty {
        creature_count,
        total_xp,
        threshold,
        tier: DifficultyTier::classify(total_xp, threshold),
    })
}
