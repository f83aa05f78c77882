//! Character aggregate - an assembled level-1 adventurer
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: every field is read through an accessor
//! - **Valid by construction**: the only constructor is [`Character::assemble`],
//!   which resolves every key against the reference tables and derives all
//!   numeric fields
//! - **No in-place edits**: changing abilities produces a new value through
//!   [`Character::with_abilities`]; derived fields are never set by hand
//!
//! The record is self-contained: traits, features, proficiencies and gear are
//! copied from the tables at assembly time, so a stored character never needs
//! to be joined against the tables again.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;
use crate::generation::GenerationMethod;
use crate::ids::CharacterId;
use crate::rules::{
    ability_modifier, proficiency_bonus, starting_hit_points, unarmored_armor_class, SCORE_MAX,
    SCORE_MIN,
};
use crate::tables::{Alignment, ClassDefinition, RaceDefinition, ReferenceTables, Size};
use crate::value_objects::{Ability, AbilityScores, CharacterName};

/// Every generation path produces level-1 characters.
pub const STARTING_LEVEL: u8 = 1;

/// Generic adventuring kit given to every non-chaos character.
pub const STARTING_EQUIPMENT: [&str; 8] = [
    "Mochila de explorador",
    "Arma inicial (según clase)",
    "Armadura inicial (según clase)",
    "50 po",
    "Raciones (10 días)",
    "Cuerda de cáñamo (50 pies)",
    "Antorcha (10)",
    "Pedernal y yesca",
];

/// Knobs for derivation rules that are a matter of table policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssemblyOptions {
    /// Keep level-1 hit points at 1 or more
    pub clamp_hit_points: bool,
}

impl Default for AssemblyOptions {
    fn default() -> Self {
        Self {
            clamp_hit_points: true,
        }
    }
}

/// Numeric fields computed from race, class and ability scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedStats {
    pub hit_points: i32,
    pub armor_class: i32,
    pub initiative: i32,
    pub speed: i32,
    pub proficiency_bonus: i32,
}

impl DerivedStats {
    pub fn derive(
        race: &RaceDefinition,
        class: &ClassDefinition,
        scores: &AbilityScores,
        options: AssemblyOptions,
    ) -> Self {
        let dex = ability_modifier(scores.get(Ability::Dexterity));
        let con = ability_modifier(scores.get(Ability::Constitution));
        Self {
            hit_points: starting_hit_points(class.hit_die, con, options.clamp_hit_points),
            armor_class: unarmored_armor_class(dex),
            initiative: dex,
            speed: race.speed,
            proficiency_bonus: proficiency_bonus(STARTING_LEVEL),
        }
    }
}

/// Everything the caller chooses; keys are resolved against the tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterRequest {
    pub race: String,
    pub class: String,
    pub background: String,
    pub alignment: Alignment,
    pub ability_scores: AbilityScores,
    /// When set, the scores must satisfy this method's predicate
    #[serde(default)]
    pub method: Option<GenerationMethod>,
    #[serde(default)]
    pub name: Option<String>,
    /// Features granted on top of the class list (chaos mode)
    #[serde(default)]
    pub extra_features: Vec<String>,
    /// Replaces the generic starting kit
    #[serde(default)]
    pub equipment: Option<Vec<String>>,
}

impl CharacterRequest {
    pub fn new(
        race: impl Into<String>,
        class: impl Into<String>,
        background: impl Into<String>,
        alignment: Alignment,
        ability_scores: AbilityScores,
    ) -> Self {
        Self {
            race: race.into(),
            class: class.into(),
            background: background.into(),
            alignment,
            ability_scores,
            method: None,
            name: None,
            extra_features: Vec::new(),
            equipment: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_method(mut self, method: GenerationMethod) -> Self {
        self.method = Some(method);
        self
    }

    pub fn with_extra_features(mut self, features: Vec<String>) -> Self {
        self.extra_features = features;
        self
    }

    pub fn with_equipment(mut self, equipment: Vec<String>) -> Self {
        self.equipment = Some(equipment);
        self
    }
}

/// Rough tier from the average ability score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PowerLevel {
    Novice,
    Average,
    Heroic,
    Epic,
    Legendary,
}

impl PowerLevel {
    pub fn from_average(average: f64) -> Self {
        if average >= 16.0 {
            Self::Legendary
        } else if average >= 14.0 {
            Self::Epic
        } else if average >= 12.0 {
            Self::Heroic
        } else if average >= 10.0 {
            Self::Average
        } else {
            Self::Novice
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Novice => "Novato",
            Self::Average => "Promedio",
            Self::Heroic => "Heroico",
            Self::Epic => "Épico",
            Self::Legendary => "Legendario",
        }
    }
}

impl fmt::Display for PowerLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

fn class_motto(class: &str) -> Option<&'static str> {
    let motto = match class {
        "Guerrero" => "forjado en el campo de batalla",
        "Mago" => "estudiante de las artes arcanas",
        "Pícaro" => "superviviente de las calles",
        "Clérigo" => "elegido por los dioses",
        "Paladín" => "campeón de la justicia",
        "Bardo" => "viajero de mil historias",
        "Bárbaro" => "hijo de las tierras salvajes",
        "Druida" => "guardián de la naturaleza",
        "Monje" => "maestro del cuerpo y mente",
        "Explorador" => "cazador de las tierras inhóspitas",
        "Hechicero" => "portador de magia innata",
        "Brujo" => "pactante de poderes oscuros",
        _ => return None,
    };
    Some(motto)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    // Identity
    id: CharacterId,
    name: CharacterName,

    // Choices (canonical table names)
    race: String,
    class: String,
    background: String,
    alignment: Alignment,
    level: u8,
    method: Option<GenerationMethod>,

    // Abilities and derived numbers
    ability_scores: AbilityScores,
    derived: DerivedStats,

    // Copied from the race table
    size: Size,
    languages: Vec<String>,
    racial_traits: Vec<String>,

    // Copied from the class table
    hit_die: u8,
    saving_throws: Vec<Ability>,
    class_features: Vec<String>,
    class_proficiencies: Vec<String>,
    class_skill_choices: String,
    spellcasting: bool,

    // Copied from the background table
    background_feature: String,
    background_skills: Vec<String>,
    background_tools: Vec<String>,
    background_equipment: Vec<String>,

    equipment: Vec<String>,
    features: Vec<String>,

    created_at: DateTime<Utc>,
    modified_at: DateTime<Utc>,
}

impl Character {
    /// Resolve the request against `tables` and derive every dependent field.
    ///
    /// # Errors
    ///
    /// - `InvalidKey` when the race, class or background is not in the tables
    /// - the method's validation error when `request.method` is set and the
    ///   scores do not satisfy it (e.g. unspent point-buy budget)
    /// - `Validation` when a supplied name is too long
    pub fn assemble(
        tables: &ReferenceTables,
        request: CharacterRequest,
        id: CharacterId,
        now: DateTime<Utc>,
        options: AssemblyOptions,
    ) -> Result<Self, DomainError> {
        let race = tables.race(&request.race)?;
        let class = tables.class(&request.class)?;
        let background = tables.background(&request.background)?;

        match request.method {
            Some(method) => method.validate(&request.ability_scores)?,
            None => request.ability_scores.check_range(SCORE_MIN, SCORE_MAX)?,
        }

        let name = CharacterName::or_placeholder(request.name.as_deref(), &race.name, &class.name)?;
        let derived = DerivedStats::derive(race, class, &request.ability_scores, options);
        let equipment = request
            .equipment
            .unwrap_or_else(|| STARTING_EQUIPMENT.iter().map(|s| s.to_string()).collect());

        Ok(Self {
            id,
            name,
            race: race.name.clone(),
            class: class.name.clone(),
            background: background.name.clone(),
            alignment: request.alignment,
            level: STARTING_LEVEL,
            method: request.method,
            ability_scores: request.ability_scores,
            derived,
            size: race.size,
            languages: race.languages.clone(),
            racial_traits: race.traits.clone(),
            hit_die: class.hit_die,
            saving_throws: class.saving_throws.clone(),
            class_features: class.features.clone(),
            class_proficiencies: class.proficiencies.clone(),
            class_skill_choices: class.skill_choices.clone(),
            spellcasting: class.spellcasting,
            background_feature: background.feature.clone(),
            background_skills: background.skills.clone(),
            background_tools: background.tools.clone(),
            background_equipment: background.equipment.clone(),
            equipment,
            features: request.extra_features,
            created_at: now,
            modified_at: now,
        })
    }

    /// A new character with `scores` and freshly derived stats.
    ///
    /// The generation method no longer applies to hand-picked scores, so it is
    /// cleared.
    pub fn with_abilities(
        &self,
        tables: &ReferenceTables,
        scores: AbilityScores,
        now: DateTime<Utc>,
        options: AssemblyOptions,
    ) -> Result<Self, DomainError> {
        let race = tables.race(&self.race)?;
        let class = tables.class(&self.class)?;
        scores.check_range(SCORE_MIN, SCORE_MAX)?;
        Ok(Self {
            ability_scores: scores,
            derived: DerivedStats::derive(race, class, &scores, options),
            method: None,
            modified_at: now,
            ..self.clone()
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn id(&self) -> CharacterId {
        self.id
    }

    pub fn name(&self) -> &CharacterName {
        &self.name
    }

    pub fn race(&self) -> &str {
        &self.race
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn background(&self) -> &str {
        &self.background
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn method(&self) -> Option<GenerationMethod> {
        self.method
    }

    pub fn ability_scores(&self) -> &AbilityScores {
        &self.ability_scores
    }

    pub fn derived(&self) -> &DerivedStats {
        &self.derived
    }

    pub fn hit_points(&self) -> i32 {
        self.derived.hit_points
    }

    pub fn armor_class(&self) -> i32 {
        self.derived.armor_class
    }

    pub fn initiative(&self) -> i32 {
        self.derived.initiative
    }

    pub fn speed(&self) -> i32 {
        self.derived.speed
    }

    pub fn proficiency_bonus(&self) -> i32 {
        self.derived.proficiency_bonus
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    pub fn racial_traits(&self) -> &[String] {
        &self.racial_traits
    }

    pub fn hit_die(&self) -> u8 {
        self.hit_die
    }

    pub fn saving_throws(&self) -> &[Ability] {
        &self.saving_throws
    }

    /// Saving throw bonus: modifier plus proficiency when proficient.
    pub fn saving_throw(&self, ability: Ability) -> i32 {
        let base = self.ability_scores.modifier(ability);
        if self.saving_throws.contains(&ability) {
            base + self.derived.proficiency_bonus
        } else {
            base
        }
    }

    pub fn class_features(&self) -> &[String] {
        &self.class_features
    }

    pub fn class_proficiencies(&self) -> &[String] {
        &self.class_proficiencies
    }

    pub fn class_skill_choices(&self) -> &str {
        &self.class_skill_choices
    }

    pub fn is_spellcaster(&self) -> bool {
        self.spellcasting
    }

    pub fn background_feature(&self) -> &str {
        &self.background_feature
    }

    pub fn background_skills(&self) -> &[String] {
        &self.background_skills
    }

    pub fn background_tools(&self) -> &[String] {
        &self.background_tools
    }

    pub fn background_equipment(&self) -> &[String] {
        &self.background_equipment
    }

    pub fn equipment(&self) -> &[String] {
        &self.equipment
    }

    /// Features beyond the class list (chaos mode).
    pub fn features(&self) -> &[String] {
        &self.features
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn modified_at(&self) -> DateTime<Utc> {
        self.modified_at
    }

    // =========================================================================
    // Flavour
    // =========================================================================

    pub fn power_level(&self) -> PowerLevel {
        PowerLevel::from_average(self.ability_scores.average())
    }

    pub fn backstory(&self) -> String {
        match class_motto(&self.class) {
            Some(motto) => format!(
                "{}, {} {}, busca su destino en un mundo lleno de magia y peligros.",
                self.name, self.race, motto
            ),
            None => format!(
                "{}, {}, busca su destino en un mundo lleno de magia y peligros.",
                self.name, self.race
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    fn request(race: &str, class: &str, scores: AbilityScores) -> CharacterRequest {
        CharacterRequest::new(race, class, "Soldado", Alignment::LawfulGood, scores)
    }

    fn assemble(request: CharacterRequest) -> Result<Character, DomainError> {
        Character::assemble(
            &ReferenceTables::builtin(),
            request,
            CharacterId::new(),
            now(),
            AssemblyOptions::default(),
        )
    }

    #[test]
    fn human_fighter_with_average_scores() {
        let character =
            assemble(request("Humano", "Guerrero", AbilityScores::uniform(10))).expect("valid");
        assert_eq!(character.hit_points(), 10);
        assert_eq!(character.armor_class(), 10);
        assert_eq!(character.speed(), 30);
        assert_eq!(character.initiative(), 0);
        assert_eq!(character.level(), 1);
        assert_eq!(character.proficiency_bonus(), 2);
    }

    #[test]
    fn unknown_race_fails_with_invalid_key() {
        let err = assemble(request("Marciano", "Guerrero", AbilityScores::uniform(10)))
            .expect_err("unknown race");
        assert_eq!(err, DomainError::invalid_key("race", "Marciano"));
    }

    #[test]
    fn unknown_class_and_background_fail() {
        assert!(assemble(request("Elfo", "Astronauta", AbilityScores::uniform(10)))
            .expect_err("unknown class")
            .is_invalid_key());
        let bad_background = CharacterRequest::new(
            "Elfo",
            "Mago",
            "Pirata",
            Alignment::TrueNeutral,
            AbilityScores::uniform(10),
        );
        assert!(assemble(bad_background).expect_err("unknown background").is_invalid_key());
    }

    #[test]
    fn derived_stats_follow_dexterity_and_constitution() {
        let scores = AbilityScores::new([8, 16, 14, 12, 10, 13]);
        let character = assemble(request("Enano", "Pícaro", scores)).expect("valid");
        assert_eq!(character.hit_points(), 8 + 2);
        assert_eq!(character.armor_class(), 13);
        assert_eq!(character.initiative(), 3);
        assert_eq!(character.speed(), 25);
    }

    #[test]
    fn low_constitution_hit_points_clamp_is_optional() {
        let builtin = ReferenceTables::builtin();
        let mut frail = builtin.class("Mago").expect("exists").clone();
        frail.name = "Aprendiz".to_string();
        frail.hit_die = 4;
        let tables = ReferenceTables::new(
            builtin.races().to_vec(),
            vec![frail],
            builtin.backgrounds().to_vec(),
        )
        .expect("valid tables");

        let scores = AbilityScores::uniform(10).with(Ability::Constitution, 1);
        let build = |clamp_hit_points| {
            Character::assemble(
                &tables,
                request("Gnomo", "Aprendiz", scores),
                CharacterId::new(),
                now(),
                AssemblyOptions { clamp_hit_points },
            )
            .expect("valid")
        };
        assert_eq!(build(false).hit_points(), -1);
        assert_eq!(build(true).hit_points(), 1);
    }

    #[test]
    fn scores_without_a_method_are_still_bounded() {
        let err = assemble(request(
            "Humano",
            "Guerrero",
            AbilityScores::new([0, 99, -50, 10, 10, 10]),
        ))
        .expect_err("out of range");
        assert_eq!(
            err,
            DomainError::OutOfRangeScore {
                ability: "STR",
                score: 0,
                min: SCORE_MIN,
                max: SCORE_MAX,
            }
        );

        let extreme = AbilityScores::uniform(10).with(Ability::Dexterity, i32::MIN);
        assert!(matches!(
            assemble(request("Humano", "Guerrero", extreme)),
            Err(DomainError::OutOfRangeScore { score: i32::MIN, .. })
        ));

        let edges = AbilityScores::new([1, 30, 10, 10, 10, 10]);
        let character = assemble(request("Humano", "Guerrero", edges)).expect("within bounds");
        assert_eq!(character.armor_class(), 20);
    }

    #[test]
    fn scores_with_a_method_use_the_method_bounds() {
        let err = assemble(
            request("Humano", "Guerrero", AbilityScores::uniform(10).with(Ability::Wisdom, 20))
                .with_method(GenerationMethod::DiceRoll),
        )
        .expect_err("above 18");
        assert!(matches!(
            err,
            DomainError::OutOfRangeScore { ability: "WIS", score: 20, min: 3, max: 18 }
        ));
    }

    #[test]
    fn with_abilities_rejects_out_of_range_scores() {
        let original =
            assemble(request("Humano", "Guerrero", AbilityScores::uniform(10))).expect("valid");
        let err = original
            .with_abilities(
                &ReferenceTables::builtin(),
                AbilityScores::uniform(10).with(Ability::Constitution, 31),
                now(),
                AssemblyOptions::default(),
            )
            .expect_err("above 30");
        assert!(matches!(err, DomainError::OutOfRangeScore { score: 31, .. }));
    }

    #[test]
    fn default_name_combines_race_and_class() {
        let character =
            assemble(request("elfo", "mago", AbilityScores::uniform(10))).expect("valid");
        assert_eq!(character.name().as_str(), "Elfo el Mago");
        assert_eq!(character.race(), "Elfo");

        let named = assemble(
            request("Elfo", "Mago", AbilityScores::uniform(10)).with_name("  Elara  "),
        )
        .expect("valid");
        assert_eq!(named.name().as_str(), "Elara");
    }

    #[test]
    fn table_data_is_copied_into_the_record() {
        let character =
            assemble(request("Elfo", "Clérigo", AbilityScores::uniform(10))).expect("valid");
        assert_eq!(
            character.saving_throws(),
            &[Ability::Wisdom, Ability::Charisma]
        );
        assert!(character.is_spellcaster());
        assert_eq!(character.languages(), &["Común", "Élfico"]);
        assert!(character
            .background_feature()
            .starts_with("Rango militar"));
        assert_eq!(character.background_skills(), &["Atletismo", "Intimidación"]);
        assert_eq!(character.equipment().len(), STARTING_EQUIPMENT.len());
        assert!(character.features().is_empty());
    }

    #[test]
    fn point_buy_request_must_spend_the_budget() {
        let partial = request("Humano", "Guerrero", AbilityScores::uniform(8))
            .with_method(GenerationMethod::PointBuy);
        assert!(matches!(
            assemble(partial),
            Err(DomainError::IncompleteAbilityScores(_))
        ));

        let spent = request(
            "Humano",
            "Guerrero",
            AbilityScores::new([15, 14, 13, 12, 10, 8]),
        )
        .with_method(GenerationMethod::PointBuy);
        assert!(assemble(spent).is_ok());
    }

    #[test]
    fn saving_throw_adds_proficiency_when_proficient() {
        let scores = AbilityScores::new([16, 10, 14, 10, 10, 10]);
        let character = assemble(request("Humano", "Guerrero", scores)).expect("valid");
        assert_eq!(character.saving_throw(Ability::Strength), 3 + 2);
        assert_eq!(character.saving_throw(Ability::Dexterity), 0);
    }

    #[test]
    fn with_abilities_rederives_without_mutating() {
        let original =
            assemble(request("Humano", "Guerrero", AbilityScores::uniform(10))).expect("valid");
        let later = now() + chrono::Duration::minutes(5);
        let updated = original
            .with_abilities(
                &ReferenceTables::builtin(),
                AbilityScores::uniform(10).with(Ability::Dexterity, 14),
                later,
                AssemblyOptions::default(),
            )
            .expect("valid");
        assert_eq!(original.armor_class(), 10);
        assert_eq!(updated.armor_class(), 12);
        assert_eq!(updated.id(), original.id());
        assert_eq!(updated.created_at(), original.created_at());
        assert_eq!(updated.modified_at(), later);
    }

    #[test]
    fn power_level_tiers() {
        assert_eq!(PowerLevel::from_average(16.0), PowerLevel::Legendary);
        assert_eq!(PowerLevel::from_average(14.5), PowerLevel::Epic);
        assert_eq!(PowerLevel::from_average(12.0), PowerLevel::Heroic);
        assert_eq!(PowerLevel::from_average(10.0), PowerLevel::Average);
        assert_eq!(PowerLevel::from_average(9.99), PowerLevel::Novice);
    }

    #[test]
    fn backstory_uses_class_motto() {
        let character = assemble(
            request("Enano", "Guerrero", AbilityScores::uniform(10)).with_name("Gimli"),
        )
        .expect("valid");
        assert_eq!(
            character.backstory(),
            "Gimli, Enano forjado en el campo de batalla, busca su destino en un mundo lleno de magia y peligros."
        );
        assert_eq!(character.power_level(), PowerLevel::Average);
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let character =
            assemble(request("Humano", "Guerrero", AbilityScores::uniform(10))).expect("valid");
        let json = serde_json::to_value(&character).expect("serialize");
        assert_eq!(json["derived"]["hitPoints"], 10);
        assert_eq!(json["alignment"], "Legal Bueno");
        let back: Character = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back, character);
    }
}
