//! Ability score generation methods and the switchable generator state.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::point_buy::{validate_point_buy, PointBuy};
use crate::error::DomainError;
use crate::tables::STANDARD_ARRAY;
use crate::value_objects::{roll_ability_score, Ability, AbilityScores};

pub const ROLLED_MIN: i32 = 3;
pub const ROLLED_MAX: i32 = 18;

/// How a set of ability scores was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GenerationMethod {
    PointBuy,
    StandardArray,
    /// 4d6 drop lowest, six times
    #[serde(rename = "roll")]
    DiceRoll,
    /// Uniform draws in 3..=18
    Chaos,
}

impl GenerationMethod {
    pub const ALL: [GenerationMethod; 4] = [
        Self::PointBuy,
        Self::StandardArray,
        Self::DiceRoll,
        Self::Chaos,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PointBuy => "point-buy",
            Self::StandardArray => "standard-array",
            Self::DiceRoll => "roll",
            Self::Chaos => "chaos",
        }
    }

    /// Check `scores` against this method's validity predicate.
    pub fn validate(&self, scores: &AbilityScores) -> Result<(), DomainError> {
        match self {
            Self::PointBuy => validate_point_buy(scores),
            Self::StandardArray => {
                let mut expected = STANDARD_ARRAY;
                expected.sort_unstable_by(|a, b| b.cmp(a));
                if scores.sorted_desc() == expected {
                    Ok(())
                } else {
                    Err(DomainError::validation(format!(
                        "Scores {:?} are not a permutation of the standard array",
                        scores.to_array()
                    )))
                }
            }
            Self::DiceRoll | Self::Chaos => scores.check_range(ROLLED_MIN, ROLLED_MAX),
        }
    }
}

impl fmt::Display for GenerationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for GenerationMethod {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "point-buy" | "pointbuy" => Ok(Self::PointBuy),
            "standard-array" | "standard" | "array" => Ok(Self::StandardArray),
            "roll" | "dice-roll" | "dice" | "4d6" => Ok(Self::DiceRoll),
            "chaos" => Ok(Self::Chaos),
            other => Err(DomainError::parse(format!(
                "Unknown generation method: {}",
                other
            ))),
        }
    }
}

/// Assign `values` (highest first) to abilities in `priority` order.
fn assign_by_priority(mut values: [i32; 6], priority: &[Ability; 6]) -> AbilityScores {
    values.sort_unstable_by(|a, b| b.cmp(a));
    priority
        .iter()
        .zip(values)
        .fold(AbilityScores::uniform(0), |scores, (ability, value)| {
            scores.with(*ability, value)
        })
}

/// The standard array, in sheet order or assigned by `priority`.
pub fn standard_array(priority: Option<&[Ability; 6]>) -> AbilityScores {
    match priority {
        Some(order) => assign_by_priority(STANDARD_ARRAY, order),
        None => AbilityScores::new(STANDARD_ARRAY),
    }
}

/// Six 4d6-drop-lowest scores; sorted and assigned by `priority` when given.
pub fn roll_scores(
    priority: Option<&[Ability; 6]>,
    rng: &mut impl FnMut(i32, i32) -> i32,
) -> AbilityScores {
    let mut rolled = [0; 6];
    for slot in rolled.iter_mut() {
        *slot = roll_ability_score(rng);
    }
    match priority {
        Some(order) => assign_by_priority(rolled, order),
        None => AbilityScores::new(rolled),
    }
}

/// Six independent uniform scores in 3..=18.
pub fn chaos_scores(rng: &mut impl FnMut(i32, i32) -> i32) -> AbilityScores {
    let mut rolled = [0; 6];
    for slot in rolled.iter_mut() {
        *slot = rng(ROLLED_MIN, ROLLED_MAX);
    }
    AbilityScores::new(rolled)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "kebab-case")]
enum State {
    PointBuy(PointBuy),
    StandardArray { scores: AbilityScores },
    #[serde(rename = "roll")]
    DiceRoll { scores: AbilityScores },
    Chaos { scores: AbilityScores },
}

/// The currently selected generation method and the scores it produced.
///
/// Switching method throws the previous scores away: point-buy resets to all
/// 8s with 27 points, standard array reassigns the fixed values, rolling and
/// chaos roll again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreGeneration {
    state: State,
}

impl ScoreGeneration {
    pub fn new(
        method: GenerationMethod,
        priority: Option<&[Ability; 6]>,
        rng: &mut impl FnMut(i32, i32) -> i32,
    ) -> Self {
        let state = match method {
            GenerationMethod::PointBuy => State::PointBuy(PointBuy::new()),
            GenerationMethod::StandardArray => State::StandardArray {
                scores: standard_array(priority),
            },
            GenerationMethod::DiceRoll => State::DiceRoll {
                scores: roll_scores(priority, rng),
            },
            GenerationMethod::Chaos => State::Chaos {
                scores: chaos_scores(rng),
            },
        };
        Self { state }
    }

    /// Start with a fresh point-buy accumulator.
    pub fn point_buy() -> Self {
        Self {
            state: State::PointBuy(PointBuy::new()),
        }
    }

    pub fn switch_method(
        &mut self,
        method: GenerationMethod,
        priority: Option<&[Ability; 6]>,
        rng: &mut impl FnMut(i32, i32) -> i32,
    ) {
        *self = Self::new(method, priority, rng);
    }

    pub fn method(&self) -> GenerationMethod {
        match self.state {
            State::PointBuy(_) => GenerationMethod::PointBuy,
            State::StandardArray { .. } => GenerationMethod::StandardArray,
            State::DiceRoll { .. } => GenerationMethod::DiceRoll,
            State::Chaos { .. } => GenerationMethod::Chaos,
        }
    }

    pub fn scores(&self) -> AbilityScores {
        match &self.state {
            State::PointBuy(pb) => pb.scores(),
            State::StandardArray { scores }
            | State::DiceRoll { scores }
            | State::Chaos { scores } => *scores,
        }
    }

    /// Remaining point-buy budget, `None` for the other methods.
    pub fn remaining_points(&self) -> Option<i32> {
        match &self.state {
            State::PointBuy(pb) => Some(pb.remaining()),
            _ => None,
        }
    }

    pub fn increase(&mut self, ability: Ability) -> Result<(), DomainError> {
        self.point_buy_mut()?.increase(ability)
    }

    pub fn decrease(&mut self, ability: Ability) -> Result<(), DomainError> {
        self.point_buy_mut()?.decrease(ability)
    }

    /// Exchange two scores. Allowed for every method except point-buy, where
    /// scores are bought individually.
    pub fn swap(&mut self, a: Ability, b: Ability) -> Result<(), DomainError> {
        match &mut self.state {
            State::PointBuy(_) => Err(DomainError::validation(
                "Point-buy scores are adjusted with increase/decrease",
            )),
            State::StandardArray { scores }
            | State::DiceRoll { scores }
            | State::Chaos { scores } => {
                let (sa, sb) = (scores.get(a), scores.get(b));
                *scores = scores.with(a, sb).with(b, sa);
                Ok(())
            }
        }
    }

    fn point_buy_mut(&mut self) -> Result<&mut PointBuy, DomainError> {
        let method = self.method();
        match &mut self.state {
            State::PointBuy(pb) => Ok(pb),
            _ => Err(DomainError::validation(format!(
                "Scores can only be adjusted under point-buy, not {}",
                method
            ))),
        }
    }

    pub fn validate(&self) -> Result<AbilityScores, DomainError> {
        let scores = self.scores();
        self.method().validate(&scores)?;
        Ok(scores)
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

impl Default for ScoreGeneration {
    fn default() -> Self {
        Self::point_buy()
    }
}
