//! Character Forge domain: reference tables, dice, ability score generation,
//! character assembly, the creation wizard and encounter difficulty.
//!
//! The crate performs no I/O. Randomness is passed in as a closure
//! `FnMut(min, max) -> value` returning a value in `min..=max`, so every
//! generator is deterministic under test.

pub mod aggregates;
pub mod bestiary;
pub mod error;
pub mod generation;
pub mod ids;
pub mod rules;
pub mod tables;
pub mod value_objects;
pub mod wizard;

pub use aggregates::{
    AssemblyOptions, Character, CharacterRequest, DerivedStats, PowerLevel, STARTING_EQUIPMENT,
    STARTING_LEVEL,
};

pub use bestiary::{
    evaluate_encounter, Bestiary, ChallengeRating, Creature, DifficultyTier, EncounterBudget,
    EncounterDifficulty, CREATURE_TYPES, DEFAULT_XP_PER_CHARACTER, ENVIRONMENTS,
};

pub use error::DomainError;

pub use generation::{
    chaos_scores, random_name, roll_scores, standard_array, total_cost, validate_point_buy,
    FixedChoices, GenerationMethod, GenerationOptions, PointBuy, RandomCharacterGenerator,
    ScoreGeneration, POINT_BUY_MAX, POINT_BUY_MIN, ROLLED_MAX, ROLLED_MIN,
};

pub use ids::CharacterId;

pub use tables::{
    point_buy_cost, Alignment, BackgroundDefinition, ClassDefinition, RaceDefinition,
    ReferenceTables, Size, POINT_BUY_BUDGET, SKILLS, STANDARD_ARRAY,
};

pub use value_objects::{
    roll_ability_score, roll_die, Ability, AbilityScores, CharacterName, DiceParseError, DicePool,
    DiceRollResult, ABILITY_SCORE_POOL,
};

pub use wizard::{CreationStep, CreationWizard};
