//! Value objects - immutable, validated building blocks

mod ability;
mod ability_scores;
mod dice;
mod names;

pub use ability::Ability;
pub use ability_scores::AbilityScores;
pub use dice::{
    roll_ability_score, roll_die, DiceParseError, DicePool, DiceRollResult, ABILITY_SCORE_POOL,
};
pub use names::CharacterName;

#[cfg(test)]
pub(crate) use dice::testing;
