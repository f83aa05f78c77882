//! Creatures, challenge ratings and encounter difficulty.

mod challenge_rating;
mod creature;
mod encounter;

pub use challenge_rating::ChallengeRating;
pub use creature::{Bestiary, Creature, CREATURE_TYPES, ENVIRONMENTS};
pub use encounter::{
    evaluate_encounter, DifficultyTier, EncounterBudget, EncounterDifficulty,
    DEFAULT_XP_PER_CHARACTER,
};
