use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Challenge rating labels and their experience values, in ascending order.
const TABLE: [(&str, u64); 34] = [
    ("0", 10),
    ("1/8", 25),
    ("1/4", 50),
    ("1/2", 100),
    ("1", 200),
    ("2", 450),
    ("3", 700),
    ("4", 1_100),
    ("5", 1_800),
    ("6", 2_300),
    ("7", 2_900),
    ("8", 3_900),
    ("9", 5_000),
    ("10", 5_900),
    ("11", 7_200),
    ("12", 8_400),
    ("13", 10_000),
    ("14", 11_500),
    ("15", 13_000),
    ("16", 15_000),
    ("17", 18_000),
    ("18", 20_000),
    ("19", 22_000),
    ("20", 25_000),
    ("21", 33_000),
    ("22", 41_000),
    ("23", 50_000),
    ("24", 62_000),
    ("25", 75_000),
    ("26", 90_000),
    ("27", 105_000),
    ("28", 120_000),
    ("29", 135_000),
    ("30", 155_000),
];

/// One of the 34 challenge rating tiers (0, 1/8, 1/4, 1/2, 1..=30).
///
/// Ordering follows difficulty. Serialized as its label ("1/4", "5").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ChallengeRating(u8);

impl ChallengeRating {
    pub const ZERO: Self = Self(0);

    /// Every tier, lowest first.
    pub fn all() -> impl Iterator<Item = ChallengeRating> {
        (0..TABLE.len() as u8).map(Self)
    }

    /// Integer ratings 1..=30.
    pub fn whole(rating: u8) -> Option<Self> {
        (1..=30).contains(&rating).then(|| Self(rating + 3))
    }

    /// Parse a label ("1/4", "5") or its decimal form ("0.25").
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let label = match input.trim() {
            "0.125" | ".125" => "1/8",
            "0.25" | ".25" => "1/4",
            "0.5" | ".5" => "1/2",
            other => other,
        };
        TABLE
            .iter()
            .position(|(l, _)| *l == label)
            .and_then(|i| u8::try_from(i).ok())
            .map(Self)
            .ok_or_else(|| DomainError::invalid_key("challenge rating", input.trim()))
    }

    pub fn as_str(&self) -> &'static str {
        TABLE[usize::from(self.0)].0
    }

    /// Experience points awarded for a creature of this rating.
    pub fn xp(&self) -> u64 {
        TABLE[usize::from(self.0)].1
    }
}

impl fmt::Display for ChallengeRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ChallengeRating {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ChallengeRating {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<ChallengeRating> for String {
    fn from(cr: ChallengeRating) -> String {
        cr.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xp_table_matches_reference_values() {
        let xp = |label: &str| ChallengeRating::parse(label).map(|cr| cr.xp());
        assert_eq!(xp("0"), Ok(10));
        assert_eq!(xp("1/8"), Ok(25));
        assert_eq!(xp("1/4"), Ok(50));
        assert_eq!(xp("1/2"), Ok(100));
        assert_eq!(xp("1"), Ok(200));
        assert_eq!(xp("5"), Ok(1_800));
        assert_eq!(xp("10"), Ok(5_900));
        assert_eq!(xp("21"), Ok(33_000));
        assert_eq!(xp("30"), Ok(155_000));
    }

    #[test]
    fn table_is_strictly_increasing() {
        let values: Vec<u64> = ChallengeRating::all().map(|cr| cr.xp()).collect();
        assert_eq!(values.len(), 34);
        assert!(values.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn ordering_follows_difficulty() {
        let quarter = ChallengeRating::parse("1/4").expect("valid");
        let half = ChallengeRating::parse("0.5").expect("valid");
        let one = ChallengeRating::whole(1).expect("valid");
        assert!(ChallengeRating::ZERO < quarter);
        assert!(quarter < half);
        assert!(half < one);
        assert_eq!(one.as_str(), "1");
        assert_eq!(ChallengeRating::whole(30).map(|cr| cr.xp()), Some(155_000));
        assert_eq!(ChallengeRating::whole(31), None);
    }

    #[test]
    fn unknown_rating_is_rejected() {
        assert!(ChallengeRating::parse("31").is_err());
        assert!(ChallengeRating::parse("1/3").is_err());
        assert!("".parse::<ChallengeRating>().is_err());
    }

    #[test]
    fn serde_uses_label() {
        let cr = ChallengeRating::parse("1/8").expect("valid");
        assert_eq!(serde_json::to_string(&cr).expect("serialize"), "\"1/8\"");
        let back: ChallengeRating = serde_json::from_str("\"1/8\"").expect("deserialize");
        assert_eq!(back, cr);
    }
}
