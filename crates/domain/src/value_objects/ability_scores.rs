//! A complete set of six ability scores.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::Ability;
use crate::error::DomainError;
use crate::rules::ability_modifier;

/// Scores for all six abilities.
///
/// A value of this type always holds every ability; partial input is rejected
/// at construction with [`DomainError::IncompleteAbilityScores`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AbilityScores {
    strength: i32,
    dexterity: i32,
    constitution: i32,
    intelligence: i32,
    wisdom: i32,
    charisma: i32,
}

impl AbilityScores {
    /// Build a set from scores in [`Ability::ALL`] order.
    pub fn new(scores: [i32; 6]) -> Self {
        let [strength, dexterity, constitution, intelligence, wisdom, charisma] = scores;
        Self {
            strength,
            dexterity,
            constitution,
            intelligence,
            wisdom,
            charisma,
        }
    }

    /// Every ability at the same score.
    pub fn uniform(score: i32) -> Self {
        Self::new([score; 6])
    }

    /// Build a set from `(ability, score)` pairs; every ability must appear.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = (Ability, i32)>,
    {
        let mut slots: [Option<i32>; 6] = [None; 6];
        for (ability, score) in pairs {
            slots[ability.index()] = Some(score);
        }

        let missing: Vec<&str> = Ability::ALL
            .iter()
            .filter(|a| slots[a.index()].is_none())
            .map(|a| a.key())
            .collect();
        if !missing.is_empty() {
            return Err(DomainError::incomplete(format!(
                "missing {}",
                missing.join(", ")
            )));
        }

        let mut scores = [0; 6];
        for (slot, score) in slots.iter().zip(scores.iter_mut()) {
            *score = slot.unwrap_or_default();
        }
        Ok(Self::new(scores))
    }

    pub fn get(&self, ability: Ability) -> i32 {
        match ability {
            Ability::Strength => self.strength,
            Ability::Dexterity => self.dexterity,
            Ability::Constitution => self.constitution,
            Ability::Intelligence => self.intelligence,
            Ability::Wisdom => self.wisdom,
            Ability::Charisma => self.charisma,
        }
    }

    /// Copy of this set with one score replaced.
    pub fn with(mut self, ability: Ability, score: i32) -> Self {
        match ability {
            Ability::Strength => self.strength = score,
            Ability::Dexterity => self.dexterity = score,
            Ability::Constitution => self.constitution = score,
            Ability::Intelligence => self.intelligence = score,
            Ability::Wisdom => self.wisdom = score,
            Ability::Charisma => self.charisma = score,
        }
        self
    }

    pub fn modifier(&self, ability: Ability) -> i32 {
        ability_modifier(self.get(ability))
    }

    /// Scores in [`Ability::ALL`] order.
    pub fn to_array(&self) -> [i32; 6] {
        Ability::ALL.map(|a| self.get(a))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Ability, i32)> + '_ {
        Ability::ALL.into_iter().map(move |a| (a, self.get(a)))
    }

    pub fn total(&self) -> i32 {
        self.to_array().iter().sum()
    }

    pub fn average(&self) -> f64 {
        f64::from(self.total()) / 6.0
    }

    /// True when every score lies in `min..=max`.
    pub fn all_within(&self, min: i32, max: i32) -> bool {
        self.to_array().iter().all(|s| (min..=max).contains(s))
    }

    /// Fail with [`DomainError::OutOfRangeScore`] on the first score outside
    /// `min..=max`.
    pub fn check_range(&self, min: i32, max: i32) -> Result<(), DomainError> {
        match self.iter().find(|(_, s)| !(min..=max).contains(s)) {
            Some((ability, score)) => Err(DomainError::OutOfRangeScore {
                ability: ability.as_str(),
                score,
                min,
                max,
            }),
            None => Ok(()),
        }
    }

    /// Scores sorted highest first.
    pub fn sorted_desc(&self) -> [i32; 6] {
        let mut scores = self.to_array();
        scores.sort_unstable_by(|a, b| b.cmp(a));
        scores
    }
}

impl TryFrom<HashMap<String, i32>> for AbilityScores {
    type Error = DomainError;

    /// Keys may be any name [`Ability`] parses ("strength", "STR", "Fuerza").
    fn try_from(map: HashMap<String, i32>) -> Result<Self, Self::Error> {
        let pairs = map
            .into_iter()
            .map(|(key, score)| key.parse::<Ability>().map(|a| (a, score)))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_pairs(pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_pairs_requires_all_six() {
        let err = AbilityScores::from_pairs([(Ability::Strength, 10), (Ability::Wisdom, 12)])
            .expect_err("four abilities missing");
        match err {
            DomainError::IncompleteAbilityScores(msg) => {
                assert!(msg.contains("dexterity"));
                assert!(msg.contains("charisma"));
                assert!(!msg.contains("strength"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn try_from_map_accepts_mixed_key_styles() {
        let map: HashMap<String, i32> = [
            ("strength", 15),
            ("DEX", 14),
            ("Constitución", 13),
            ("int", 12),
            ("wisdom", 10),
            ("Carisma", 8),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();

        let scores = AbilityScores::try_from(map).expect("complete map");
        assert_eq!(scores.to_array(), [15, 14, 13, 12, 10, 8]);
    }

    #[test]
    fn try_from_map_with_five_keys_is_incomplete() {
        let map: HashMap<String, i32> = ["strength", "dexterity", "constitution", "wisdom", "charisma"]
            .into_iter()
            .map(|k| (k.to_string(), 10))
            .collect();
        assert!(matches!(
            AbilityScores::try_from(map),
            Err(DomainError::IncompleteAbilityScores(_))
        ));
    }

    #[test]
    fn with_replaces_single_score() {
        let scores = AbilityScores::uniform(10).with(Ability::Dexterity, 16);
        assert_eq!(scores.get(Ability::Dexterity), 16);
        assert_eq!(scores.modifier(Ability::Dexterity), 3);
        assert_eq!(scores.get(Ability::Strength), 10);
    }

    #[test]
    fn total_average_and_sorting() {
        let scores = AbilityScores::new([8, 15, 10, 14, 12, 13]);
        assert_eq!(scores.total(), 72);
        assert!((scores.average() - 12.0).abs() < f64::EPSILON);
        assert_eq!(scores.sorted_desc(), [15, 14, 13, 12, 10, 8]);
        assert!(scores.all_within(8, 15));
        assert!(!scores.all_within(9, 15));
        assert!(scores.check_range(8, 15).is_ok());
        assert_eq!(
            scores.check_range(9, 15),
            Err(DomainError::OutOfRangeScore {
                ability: "STR",
                score: 8,
                min: 9,
                max: 15,
            })
        );
    }

    #[test]
    fn serializes_as_named_map() {
        let json = serde_json::to_value(AbilityScores::uniform(10)).expect("serialize");
        assert_eq!(json["constitution"], 10);
        assert_eq!(json.as_object().map(|o| o.len()), Some(6));
    }
}
