//! Ability score generation and random characters

mod point_buy;
mod random;
mod scores;

pub use point_buy::{total_cost, validate_point_buy, PointBuy, POINT_BUY_MAX, POINT_BUY_MIN};
pub use random::{
    random_name, FixedChoices, GenerationOptions, RandomCharacterGenerator, CHAOS_EQUIPMENT,
    CHAOS_FEATURES, FIRST_NAMES, LAST_NAMES,
};
pub use scores::{
    chaos_scores, roll_scores, standard_array, GenerationMethod, ScoreGeneration, ROLLED_MAX,
    ROLLED_MIN,
};
