//! Dice pools and rolling
//!
//! Supports pool notation like "1d20", "d8", "4d6dl1" (roll four six-sided
//! dice, drop the lowest one). Randomness is injected as a closure returning a
//! uniformly distributed integer in `min..=max`, so the domain stays free of
//! any RNG dependency.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The pool used for ability scores: 4d6, drop the lowest.
pub const ABILITY_SCORE_POOL: DicePool = DicePool {
    count: 4,
    sides: 6,
    drop_lowest: 1,
};

/// Error when parsing a dice pool
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiceParseError {
    /// The formula string is empty
    #[error("Empty dice formula")]
    Empty,
    /// Invalid format - expected XdY or XdYdlK
    #[error("Invalid dice format: {0}")]
    InvalidFormat(String),
    /// Dice count must be at least 1
    #[error("Dice count must be at least 1")]
    InvalidDiceCount,
    /// Die size must be at least 2
    #[error("Die size must be at least 2")]
    InvalidDieSize,
    /// Must keep at least one die
    #[error("Cannot drop {drop} of {count} dice")]
    DropsAllDice { count: u8, drop: u8 },
}

/// A pool of identical dice, optionally dropping the lowest results.
///
/// Always keeps at least one die; deserialization goes through
/// [`DicePool::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawDicePool")]
pub struct DicePool {
    /// Number of dice to roll (X in XdY)
    count: u8,
    /// Size of each die (Y in XdY)
    sides: u8,
    /// How many of the lowest results to discard
    drop_lowest: u8,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDicePool {
    count: u8,
    sides: u8,
    #[serde(default)]
    drop_lowest: u8,
}

impl TryFrom<RawDicePool> for DicePool {
    type Error = DiceParseError;

    fn try_from(raw: RawDicePool) -> Result<Self, Self::Error> {
        Self::new(raw.count, raw.sides, raw.drop_lowest)
    }
}

impl DicePool {
    pub fn new(count: u8, sides: u8, drop_lowest: u8) -> Result<Self, DiceParseError> {
        if count == 0 {
            return Err(DiceParseError::InvalidDiceCount);
        }
        if sides < 2 {
            return Err(DiceParseError::InvalidDieSize);
        }
        if drop_lowest >= count {
            return Err(DiceParseError::DropsAllDice {
                count,
                drop: drop_lowest,
            });
        }
        Ok(Self {
            count,
            sides,
            drop_lowest,
        })
    }

    pub fn count(&self) -> u8 {
        self.count
    }

    pub fn sides(&self) -> u8 {
        self.sides
    }

    pub fn drop_lowest(&self) -> u8 {
        self.drop_lowest
    }

    /// Parse pool notation.
    ///
    /// Supported formats:
    /// - "XdY" - Roll X dice of size Y
    /// - "dY" - Roll 1 die of size Y (shorthand)
    /// - "XdYdlK" - Roll X dice of size Y, drop the K lowest
    pub fn parse(input: &str) -> Result<Self, DiceParseError> {
        let input = input.trim().to_lowercase();
        if input.is_empty() {
            return Err(DiceParseError::Empty);
        }

        let d_pos = input.find('d').ok_or_else(|| {
            DiceParseError::InvalidFormat(format!("Missing 'd' separator in '{}'", input))
        })?;

        let count_str = &input[..d_pos];
        let count: u8 = if count_str.is_empty() {
            1
        } else {
            count_str.parse().map_err(|_| {
                DiceParseError::InvalidFormat(format!("Invalid dice count: '{}'", count_str))
            })?
        };

        let after_d = &input[d_pos + 1..];
        let (sides_str, drop_lowest) = match after_d.find("dl") {
            Some(dl_pos) => {
                let drop_str = &after_d[dl_pos + 2..];
                let drop: u8 = drop_str.parse().map_err(|_| {
                    DiceParseError::InvalidFormat(format!("Invalid drop count: '{}'", drop_str))
                })?;
                (&after_d[..dl_pos], drop)
            }
            None => (after_d, 0),
        };

        let sides: u8 = sides_str.parse().map_err(|_| {
            DiceParseError::InvalidFormat(format!("Invalid die size: '{}'", sides_str))
        })?;

        Self::new(count, sides, drop_lowest)
    }

    /// Roll the pool, drawing each die from `rng(1, sides)`.
    pub fn roll(&self, rng: &mut impl FnMut(i32, i32) -> i32) -> DiceRollResult {
        let rolls: Vec<i32> = (0..self.count)
            .map(|_| rng(1, i32::from(self.sides)))
            .collect();

        let mut sorted = rolls;
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        let keep = usize::from(self.count - self.drop_lowest);
        let dropped = sorted.split_off(keep);
        let total = sorted.iter().sum();

        DiceRollResult {
            pool: *self,
            kept: sorted,
            dropped,
            total,
        }
    }

    /// Get the minimum possible total
    pub fn min_total(&self) -> i32 {
        i32::from(self.count - self.drop_lowest)
    }

    /// Get the maximum possible total
    pub fn max_total(&self) -> i32 {
        i32::from(self.count - self.drop_lowest) * i32::from(self.sides)
    }
}

impl fmt::Display for DicePool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.drop_lowest == 0 {
            write!(f, "{}d{}", self.count, self.sides)
        } else {
            write!(f, "{}d{}dl{}", self.count, self.sides, self.drop_lowest)
        }
    }
}

/// Result of rolling a pool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiceRollResult {
    /// The pool that was rolled
    pub pool: DicePool,
    /// Kept die results, highest first
    pub kept: Vec<i32>,
    /// Results discarded as lowest
    pub dropped: Vec<i32>,
    /// Sum of the kept dice
    pub total: i32,
}

impl DiceRollResult {
    /// Format as a breakdown string (e.g., "4d6dl1[6, 5, 3] (dropped 1) = 14")
    pub fn breakdown(&self) -> String {
        let rolls: Vec<String> = self.kept.iter().map(|r| r.to_string()).collect();
        if self.dropped.is_empty() {
            format!("{}[{}] = {}", self.pool, rolls.join(", "), self.total)
        } else {
            let dropped: Vec<String> = self.dropped.iter().map(|r| r.to_string()).collect();
            format!(
                "{}[{}] (dropped {}) = {}",
                self.pool,
                rolls.join(", "),
                dropped.join(", "),
                self.total
            )
        }
    }
}

/// Uniform integer in `1..=sides`.
pub fn roll_die(sides: u8, rng: &mut impl FnMut(i32, i32) -> i32) -> i32 {
    rng(1, i32::from(sides.max(1)))
}

/// Roll 4d6, discard the lowest die, sum the rest. Always in `3..=18`.
pub fn roll_ability_score(rng: &mut impl FnMut(i32, i32) -> i32) -> i32 {
    ABILITY_SCORE_POOL.roll(rng).total
}


#[cfg(test)]
mod tests {
    use super::testing::scripted;
    use super::*;

    #[test]
    fn test_parse_simple() {
        let pool = DicePool::parse("1d20").expect("valid");
        assert_eq!((pool.count, pool.sides, pool.drop_lowest), (1, 20, 0));
    }

    #[test]
    fn test_parse_shorthand() {
        let pool = DicePool::parse("d8").expect("valid");
        assert_eq!((pool.count, pool.sides), (1, 8));
    }

    #[test]
    fn test_parse_drop_lowest() {
        let pool = DicePool::parse(" 4D6dl1 ").expect("valid");
        assert_eq!(pool, ABILITY_SCORE_POOL);
        assert_eq!(pool.to_string(), "4d6dl1");
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(DicePool::parse(""), Err(DiceParseError::Empty)));
        assert!(matches!(
            DicePool::parse("20"),
            Err(DiceParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            DicePool::parse("0d6"),
            Err(DiceParseError::InvalidDiceCount)
        ));
        assert!(matches!(
            DicePool::parse("1d1"),
            Err(DiceParseError::InvalidDieSize)
        ));
        assert!(matches!(
            DicePool::parse("2d6dl2"),
            Err(DiceParseError::DropsAllDice { count: 2, drop: 2 })
        ));
    }

    #[test]
    fn test_ability_roll_drops_lowest() {
        let mut rng = scripted(&[3, 6, 1, 5]);
        let result = ABILITY_SCORE_POOL.roll(&mut rng);
        assert_eq!(result.kept, vec![6, 5, 3]);
        assert_eq!(result.dropped, vec![1]);
        assert_eq!(result.total, 14);
        assert_eq!(result.breakdown(), "4d6dl1[6, 5, 3] (dropped 1) = 14");
    }

    #[test]
    fn test_ability_roll_bounds() {
        let mut low = scripted(&[1]);
        assert_eq!(roll_ability_score(&mut low), 3);
        let mut high = scripted(&[6]);
        assert_eq!(roll_ability_score(&mut high), 18);
        assert_eq!(ABILITY_SCORE_POOL.min_total(), 3);
        assert_eq!(ABILITY_SCORE_POOL.max_total(), 18);
    }

    #[test]
    fn test_roll_die_requests_full_range() {
        let mut seen = None;
        let mut rng = |min: i32, max: i32| {
            seen = Some((min, max));
            max
        };
        assert_eq!(roll_die(12, &mut rng), 12);
        assert_eq!(seen, Some((1, 12)));
    }

    #[test]
    fn test_breakdown_without_drop() {
        let pool = DicePool::new(2, 6, 0).expect("valid");
        let mut rng = scripted(&[4, 5]);
        assert_eq!(pool.roll(&mut rng).breakdown(), "2d6[5, 4] = 9");
    }

    #[test]
    fn test_deserialize_validates_pool() {
        let pool: DicePool =
            serde_json::from_str(r#"{"count":4,"sides":6,"dropLowest":1}"#).expect("valid pool");
        assert_eq!(pool, ABILITY_SCORE_POOL);
        assert_eq!((pool.count(), pool.sides(), pool.drop_lowest()), (4, 6, 1));

        let json = serde_json::to_string(&ABILITY_SCORE_POOL).expect("serialize");
        assert_eq!(serde_json::from_str::<DicePool>(&json).expect("round trip"), ABILITY_SCORE_POOL);

        assert!(serde_json::from_str::<DicePool>(r#"{"count":2,"sides":6,"dropLowest":5}"#).is_err());
        assert!(serde_json::from_str::<DicePool>(r#"{"count":0,"sides":6}"#).is_err());
    }
}
