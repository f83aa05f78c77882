//! Point-buy accumulator.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::tables::{point_buy_cost, POINT_BUY_BUDGET};
use crate::value_objects::{Ability, AbilityScores};

pub const POINT_BUY_MIN: i32 = 8;
pub const POINT_BUY_MAX: i32 = 15;

/// Scores start at 8 with the full budget. Every rejected change leaves the
/// accumulator untouched, so `remaining` always stays within `0..=27` and
/// equals the budget minus the cost of the scores. Deserialization checks
/// the same invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawPointBuy")]
pub struct PointBuy {
    scores: AbilityScores,
    remaining: i32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPointBuy {
    scores: AbilityScores,
    remaining: i32,
}

impl TryFrom<RawPointBuy> for PointBuy {
    type Error = DomainError;

    fn try_from(raw: RawPointBuy) -> Result<Self, Self::Error> {
        let rebuilt = Self::from_scores(raw.scores)?;
        if rebuilt.remaining != raw.remaining {
            return Err(DomainError::validation(format!(
                "Point-buy remaining {} does not match the scores ({} expected)",
                raw.remaining, rebuilt.remaining
            )));
        }
        Ok(rebuilt)
    }
}

impl PointBuy {
    pub fn new() -> Self {
        Self {
            scores: AbilityScores::uniform(POINT_BUY_MIN),
            remaining: POINT_BUY_BUDGET,
        }
    }

    /// Rebuild an accumulator from finished or partial scores.
    pub fn from_scores(scores: AbilityScores) -> Result<Self, DomainError> {
        let spent = total_cost(&scores)?;
        if spent > POINT_BUY_BUDGET {
            return Err(DomainError::InsufficientBudget {
                required: spent,
                remaining: POINT_BUY_BUDGET,
            });
        }
        Ok(Self {
            scores,
            remaining: POINT_BUY_BUDGET - spent,
        })
    }

    /// Raise `ability` by one, paying `cost(new) - cost(current)`.
    pub fn increase(&mut self, ability: Ability) -> Result<(), DomainError> {
        let current = self.scores.get(ability);
        let next = current + 1;
        let delta = step_cost(ability, current, next)?;
        if delta > self.remaining {
            return Err(DomainError::InsufficientBudget {
                required: delta,
                remaining: self.remaining,
            });
        }
        self.scores = self.scores.with(ability, next);
        self.remaining -= delta;
        Ok(())
    }

    /// Lower `ability` by one, refunding the same delta an increase would cost.
    pub fn decrease(&mut self, ability: Ability) -> Result<(), DomainError> {
        let current = self.scores.get(ability);
        let next = current - 1;
        let refund = step_cost(ability, next, current).map_err(|_| DomainError::OutOfRangeScore {
            ability: ability.as_str(),
            score: next,
            min: POINT_BUY_MIN,
            max: POINT_BUY_MAX,
        })?;
        self.scores = self.scores.with(ability, next);
        self.remaining += refund;
        Ok(())
    }

    pub fn scores(&self) -> AbilityScores {
        self.scores
    }

    pub fn remaining(&self) -> i32 {
        self.remaining
    }

    pub fn spent(&self) -> i32 {
        POINT_BUY_BUDGET - self.remaining
    }

    /// Budget fully spent and every score within 8..=15.
    pub fn is_complete(&self) -> bool {
        self.remaining == 0 && self.scores.all_within(POINT_BUY_MIN, POINT_BUY_MAX)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        validate_point_buy(&self.scores)
    }

    /// The finished scores; fails while budget is left.
    pub fn into_scores(self) -> Result<AbilityScores, DomainError> {
        self.validate()?;
        Ok(self.scores)
    }
}

impl Default for PointBuy {
    fn default() -> Self {
        Self::new()
    }
}

fn step_cost(ability: Ability, from: i32, to: i32) -> Result<i32, DomainError> {
    match (point_buy_cost(from), point_buy_cost(to)) {
        (Some(a), Some(b)) => Ok(b - a),
        _ => Err(DomainError::OutOfRangeScore {
            ability: ability.as_str(),
            score: to,
            min: POINT_BUY_MIN,
            max: POINT_BUY_MAX,
        }),
    }
}

/// Total point-buy cost of `scores`; fails when any score is outside 8..=15.
pub fn total_cost(scores: &AbilityScores) -> Result<i32, DomainError> {
    scores.iter().try_fold(0, |acc, (ability, score)| {
        point_buy_cost(score)
            .map(|cost| acc + cost)
            .ok_or(DomainError::OutOfRangeScore {
                ability: ability.as_str(),
                score,
                min: POINT_BUY_MIN,
                max: POINT_BUY_MAX,
            })
    })
}

/// A finished point-buy set: every score in 8..=15, exactly 27 points spent.
pub fn validate_point_buy(scores: &AbilityScores) -> Result<(), DomainError> {
    let spent = total_cost(scores)?;
    match spent.cmp(&POINT_BUY_BUDGET) {
        std::cmp::Ordering::Less => Err(DomainError::incomplete(format!(
            "{} point-buy points unspent",
            POINT_BUY_BUDGET - spent
        ))),
        std::cmp::Ordering::Greater => Err(DomainError::InsufficientBudget {
            required: spent,
            remaining: POINT_BUY_BUDGET,
        }),
        std::cmp::Ordering::Equal => Ok(()),
    }
}
