//! JSON export and import of single characters.
//!
//! Import reads back only the choices a record was built from. Derived
//! numbers and table data are recomputed through [`Character::assemble`], so
//! an edited file cannot smuggle in hit points or unknown table keys.

use chrono::{DateTime, Utc};
use forge_domain::generation::{CHAOS_EQUIPMENT, CHAOS_FEATURES};
use forge_domain::{
    AbilityScores, Alignment, AssemblyOptions, Character, CharacterId, CharacterRequest,
    DomainError, GenerationMethod, ReferenceTables,
};
use serde::Deserialize;
use serde_json::Value;

use crate::infrastructure::ports::ExportError;

/// Fields an imported record must carry as non-blank strings.
const REQUIRED_FIELDS: [&str; 3] = ["name", "race", "class"];

/// Pretty-printed JSON for one character.
pub fn export_json(character: &Character) -> Result<String, ExportError> {
    serde_json::to_string_pretty(character).map_err(|e| ExportError::Serialization(e.to_string()))
}

/// The choices of an exported record. Everything else in the file is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportedCharacter {
    #[serde(default)]
    pub id: Option<CharacterId>,
    pub name: String,
    pub race: String,
    pub class: String,
    pub background: String,
    pub alignment: Alignment,
    pub ability_scores: AbilityScores,
    #[serde(default)]
    pub method: Option<GenerationMethod>,
    /// Kept only for chaos characters
    #[serde(default)]
    pub features: Vec<String>,
    /// Kept only for chaos characters
    #[serde(default)]
    pub equipment: Vec<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl ImportedCharacter {
    /// Assemble the record again against `tables`.
    ///
    /// The imported id and creation time are kept when present; `fallback_id`
    /// and `fallback_now` fill them otherwise.
    ///
    /// # Errors
    ///
    /// Any assembly error (`InvalidKey`, `OutOfRangeScore`, the method's
    /// validation), or `Validation` when chaos extras are not from the chaos
    /// tables.
    pub fn rebuild(
        self,
        tables: &ReferenceTables,
        fallback_id: CharacterId,
        fallback_now: DateTime<Utc>,
        options: AssemblyOptions,
    ) -> Result<Character, DomainError> {
        let mut request = CharacterRequest::new(
            self.race,
            self.class,
            self.background,
            self.alignment,
            self.ability_scores,
        )
        .with_name(self.name);

        if let Some(method) = self.method {
            request = request.with_method(method);
        }
        if self.method == Some(GenerationMethod::Chaos) {
            ensure_listed("feature", &self.features, &CHAOS_FEATURES)?;
            ensure_listed("equipment", &self.equipment, &CHAOS_EQUIPMENT)?;
            request = request
                .with_extra_features(self.features)
                .with_equipment(self.equipment);
        }

        Character::assemble(
            tables,
            request,
            self.id.unwrap_or(fallback_id),
            self.created_at.unwrap_or(fallback_now),
            options,
        )
    }
}

fn ensure_listed(kind: &str, items: &[String], allowed: &[&str]) -> Result<(), DomainError> {
    match items.iter().find(|item| !allowed.contains(&item.as_str())) {
        Some(item) => Err(DomainError::validation(format!(
            "Unknown chaos {}: {}",
            kind, item
        ))),
        None => Ok(()),
    }
}

/// Parse a character previously produced by [`export_json`].
///
/// # Errors
///
/// - `MissingField` when `name`, `race` or `class` is absent or blank
/// - `Serialization` for malformed JSON or any other invalid field
pub fn import_json(text: &str) -> Result<ImportedCharacter, ExportError> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| ExportError::Serialization(e.to_string()))?;

    for field in REQUIRED_FIELDS {
        let present = value
            .get(field)
            .and_then(Value::as_str)
            .is_some_and(|s| !s.trim().is_empty());
        if !present {
            return Err(ExportError::MissingField(field));
        }
    }

    serde_json::from_value(value).map_err(|e| ExportError::Serialization(e.to_string()))
}
