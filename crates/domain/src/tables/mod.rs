//! Reference tables
//!
//! Static, read-only records keyed by name. The built-in set carries the ten
//! races, twelve classes and eight backgrounds of the generator; a JSON file
//! with the same shape can replace it.

mod alignment;
mod background;
mod builtin;
mod class;
mod race;

pub use alignment::Alignment;
pub use background::BackgroundDefinition;
pub use class::{ClassDefinition, DEFAULT_STAT_PRIORITY};
pub use race::{RaceDefinition, Size};

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// The fixed standard array.
pub const STANDARD_ARRAY: [i32; 6] = [15, 14, 13, 12, 10, 8];

/// Point-buy cost for each reachable score, 8 through 15.
pub const POINT_BUY_COSTS: [(i32, i32); 8] = [
    (8, 0),
    (9, 1),
    (10, 2),
    (11, 3),
    (12, 4),
    (13, 5),
    (14, 7),
    (15, 9),
];

pub const POINT_BUY_BUDGET: i32 = 27;

pub const SKILLS: [&str; 18] = [
    "Acrobacias",
    "Trato con Animales",
    "Arcana",
    "Atletismo",
    "Engaño",
    "Historia",
    "Perspicacia",
    "Intimidación",
    "Investigación",
    "Medicina",
    "Naturaleza",
    "Percepción",
    "Interpretación",
    "Persuasión",
    "Religión",
    "Sigilo",
    "Supervivencia",
    "Juego de manos",
];

/// Point-buy cost of `score`, or `None` outside 8..=15.
pub fn point_buy_cost(score: i32) -> Option<i32> {
    POINT_BUY_COSTS
        .iter()
        .find(|(s, _)| *s == score)
        .map(|(_, cost)| *cost)
}

/// Races, classes and backgrounds, in table order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceTables {
    races: Vec<RaceDefinition>,
    classes: Vec<ClassDefinition>,
    backgrounds: Vec<BackgroundDefinition>,
}

fn find<'a, T>(
    items: &'a [T],
    table: &'static str,
    key: &str,
    name: impl Fn(&T) -> &str,
) -> Result<&'a T, DomainError> {
    let key = key.trim();
    items
        .iter()
        .find(|item| name(*item) == key)
        .or_else(|| {
            let lowered = key.to_lowercase();
            items.iter().find(|item| name(*item).to_lowercase() == lowered)
        })
        .ok_or_else(|| DomainError::invalid_key(table, key))
}

impl ReferenceTables {
    pub fn builtin() -> Self {
        Self {
            races: builtin::races(),
            classes: builtin::classes(),
            backgrounds: builtin::backgrounds(),
        }
    }

    /// Build tables from explicit definitions.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when a table is empty, a name repeats,
    /// a hit die is below 2 or a stat priority does not name every ability once.
    pub fn new(
        races: Vec<RaceDefinition>,
        classes: Vec<ClassDefinition>,
        backgrounds: Vec<BackgroundDefinition>,
    ) -> Result<Self, DomainError> {
        let tables = Self {
            races,
            classes,
            backgrounds,
        };
        tables.validate()?;
        Ok(tables)
    }

    /// Parse and validate a JSON table file.
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        let tables: Self = serde_json::from_str(json)
            .map_err(|e| DomainError::parse(format!("Invalid reference tables: {}", e)))?;
        tables.validate()?;
        Ok(tables)
    }

    fn validate(&self) -> Result<(), DomainError> {
        check_names("race", self.races.iter().map(|r| r.name.as_str()))?;
        check_names("class", self.classes.iter().map(|c| c.name.as_str()))?;
        check_names("background", self.backgrounds.iter().map(|b| b.name.as_str()))?;

        for class in &self.classes {
            if class.hit_die < 2 {
                return Err(DomainError::validation(format!(
                    "Class {} has invalid hit die d{}",
                    class.name, class.hit_die
                )));
            }
            if !ClassDefinition::is_valid_priority(&class.stat_priority) {
                return Err(DomainError::validation(format!(
                    "Class {} stat priority must name every ability once",
                    class.name
                )));
            }
        }
        Ok(())
    }

    pub fn race(&self, key: &str) -> Result<&RaceDefinition, DomainError> {
        find(&self.races, "race", key, |r| r.name.as_str())
    }

    pub fn class(&self, key: &str) -> Result<&ClassDefinition, DomainError> {
        find(&self.classes, "class", key, |c| c.name.as_str())
    }

    pub fn background(&self, key: &str) -> Result<&BackgroundDefinition, DomainError> {
        find(&self.backgrounds, "background", key, |b| b.name.as_str())
    }

    pub fn races(&self) -> &[RaceDefinition] {
        &self.races
    }

    pub fn classes(&self) -> &[ClassDefinition] {
        &self.classes
    }

    pub fn backgrounds(&self) -> &[BackgroundDefinition] {
        &self.backgrounds
    }

    pub fn race_names(&self) -> Vec<&str> {
        self.races.iter().map(|r| r.name.as_str()).collect()
    }

    pub fn class_names(&self) -> Vec<&str> {
        self.classes.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn background_names(&self) -> Vec<&str> {
        self.backgrounds.iter().map(|b| b.name.as_str()).collect()
    }
}

impl Default for ReferenceTables {
    fn default() -> Self {
        Self::builtin()
    }
}

fn check_names<'a>(
    table: &'static str,
    names: impl Iterator<Item = &'a str>,
) -> Result<(), DomainError> {
    let mut seen: Vec<String> = Vec::new();
    for name in names {
        let lowered = name.trim().to_lowercase();
        if lowered.is_empty() {
            return Err(DomainError::validation(format!("Empty {} name", table)));
        }
        if seen.contains(&lowered) {
            return Err(DomainError::validation(format!(
                "Duplicate {} name: {}",
                table, name
            )));
        }
        seen.push(lowered);
    }
    if seen.is_empty() {
        return Err(DomainError::validation(format!("The {} table is empty", table)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::Ability;

    #[test]
    fn builtin_tables_have_expected_sizes() {
        let tables = ReferenceTables::builtin();
        assert_eq!(tables.races().len(), 10);
        assert_eq!(tables.classes().len(), 12);
        assert_eq!(tables.backgrounds().len(), 8);
        assert_eq!(tables.race_names()[0], "Humano");
        assert_eq!(tables.class_names()[11], "Hechicero");
    }

    #[test]
    fn lookup_is_exact_then_case_insensitive() {
        let tables = ReferenceTables::builtin();
        assert_eq!(tables.race("Enano").map(|r| r.speed), Ok(25));
        assert_eq!(tables.class("bárbaro").map(|c| c.hit_die), Ok(12));
        assert_eq!(tables.background(" SABIO ").map(|b| b.name.as_str()), Ok("Sabio"));
    }

    #[test]
    fn unknown_race_is_invalid_key() {
        let tables = ReferenceTables::builtin();
        let err = tables.race("Marciano").expect_err("no martians");
        assert_eq!(
            err,
            DomainError::InvalidKey {
                table: "race",
                key: "Marciano".to_string()
            }
        );
    }

    #[test]
    fn hit_dice_and_saving_throws_match_the_class_table() {
        let tables = ReferenceTables::builtin();
        let dice: Vec<(&str, u8)> = tables
            .classes()
            .iter()
            .map(|c| (c.name.as_str(), c.hit_die))
            .collect();
        assert!(dice.contains(&("Guerrero", 10)));
        assert!(dice.contains(&("Mago", 6)));
        assert!(dice.contains(&("Pícaro", 8)));
        assert!(dice.contains(&("Explorador", 10)));

        let sorcerer = tables.class("Hechicero").expect("exists");
        assert_eq!(
            sorcerer.saving_throws,
            vec![Ability::Constitution, Ability::Charisma]
        );
        assert_eq!(sorcerer.stat_priority[0], Ability::Charisma);
    }

    #[test]
    fn every_class_priority_is_a_permutation() {
        for class in ReferenceTables::builtin().classes() {
            assert!(
                ClassDefinition::is_valid_priority(&class.stat_priority),
                "{}",
                class.name
            );
        }
    }

    #[test]
    fn small_races() {
        let tables = ReferenceTables::builtin();
        let small: Vec<&str> = tables
            .races()
            .iter()
            .filter(|r| r.size == Size::Small)
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(small, vec!["Mediano", "Gnomo"]);
    }

    #[test]
    fn point_buy_cost_table() {
        assert_eq!(point_buy_cost(8), Some(0));
        assert_eq!(point_buy_cost(14), Some(7));
        assert_eq!(point_buy_cost(15), Some(9));
        assert_eq!(point_buy_cost(16), None);
        assert_eq!(point_buy_cost(7), None);
    }

    #[test]
    fn json_round_trip_and_validation() {
        let json = serde_json::to_string(&ReferenceTables::builtin()).expect("serialize");
        let parsed = ReferenceTables::from_json(&json).expect("valid tables");
        assert_eq!(parsed, ReferenceTables::builtin());

        let empty = r#"{"races":[],"classes":[],"backgrounds":[]}"#;
        assert!(matches!(
            ReferenceTables::from_json(empty),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            ReferenceTables::from_json("not json"),
            Err(DomainError::Parse(_))
        ));
    }

    #[test]
    fn override_class_without_priority_uses_default_order() {
        let json = r#"{
            "races": [{"name": "Kobold", "speed": 30, "size": "Pequeño",
                       "typicalAlignment": "Legal", "languages": ["Común"], "traits": []}],
            "classes": [{"name": "Artífice", "hitDie": 8, "primaryAbility": "Inteligencia",
                         "savingThrows": ["constitution", "intelligence"], "proficiencies": [],
                         "skillChoices": "Elige 2", "features": []}],
            "backgrounds": [{"name": "Gremio", "skills": [], "tools": [], "equipment": [],
                             "feature": "Miembro del gremio"}]
        }"#;
        let tables = ReferenceTables::from_json(json).expect("valid override");
        let class = tables.class("artífice").expect("present");
        assert_eq!(class.stat_priority, DEFAULT_STAT_PRIORITY);
        assert!(!class.spellcasting);
    }
}
