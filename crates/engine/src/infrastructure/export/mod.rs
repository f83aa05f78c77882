//! Character export: JSON records and plain-text sheets.

mod json_exporter;
mod sheet;

use std::path::{Path, PathBuf};

use forge_domain::Character;

use crate::infrastructure::ports::ExportError;

pub use json_exporter::{export_json, import_json, ImportedCharacter};
pub use sheet::{render_sheet, CharacterSheet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Sheet,
}

impl ExportFormat {
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Json => "_character.json",
            Self::Sheet => "_ficha.txt",
        }
    }

    pub fn render(&self, character: &Character) -> Result<String, ExportError> {
        match self {
            Self::Json => export_json(character),
            Self::Sheet => Ok(render_sheet(character)),
        }
    }
}

/// File name for an export: whitespace runs in the name become `_`.
pub fn export_file_name(character: &Character, format: ExportFormat) -> String {
    let stem = character
        .name()
        .as_str()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_");
    format!("{}{}", stem, format.suffix())
}

/// Write `character` into `dir` and return the created path.
pub async fn write_export(
    dir: &Path,
    character: &Character,
    format: ExportFormat,
) -> Result<PathBuf, ExportError> {
    let path = dir.join(export_file_name(character, format));
    let contents = format.render(character)?;
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| ExportError::Io(e.to_string()))?;
    tokio::fs::write(&path, contents)
        .await
        .map_err(|e| ExportError::Io(e.to_string()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use forge_domain::{
        AbilityScores, Alignment, AssemblyOptions, CharacterId, CharacterRequest, DomainError,
        GenerationMethod, ReferenceTables,
    };
    use serde_json::Value;
    use uuid::Uuid;

    fn rebuild(json: &str) -> Result<Character, DomainError> {
        let fallback_now = Utc
            .with_ymd_and_hms(2030, 1, 1, 0, 0, 0)
            .single()
            .expect("valid timestamp");
        import_json(json).expect("parsed").rebuild(
            &ReferenceTables::builtin(),
            CharacterId::from_uuid(Uuid::from_u128(99)),
            fallback_now,
            AssemblyOptions::default(),
        )
    }

    fn character(name: Option<&str>) -> Character {
        let tables = ReferenceTables::builtin();
        let mut request = CharacterRequest::new(
            "Elfo",
            "Mago",
            "Sabio",
            Alignment::ChaoticGood,
            AbilityScores::new([8, 14, 13, 15, 12, 10]),
        );
        if let Some(name) = name {
            request = request.with_name(name);
        }
        let now = Utc
            .with_ymd_and_hms(2025, 3, 1, 12, 0, 0)
            .single()
            .expect("valid timestamp");
        Character::assemble(
            &tables,
            request,
            CharacterId::from_uuid(Uuid::from_u128(7)),
            now,
            AssemblyOptions::default(),
        )
        .expect("valid character")
    }

    #[test]
    fn file_names_collapse_whitespace() {
        let c = character(Some("Lyra   de  la Luna"));
        assert_eq!(
            export_file_name(&c, ExportFormat::Json),
            "Lyra_de_la_Luna_character.json"
        );
        assert_eq!(
            export_file_name(&c, ExportFormat::Sheet),
            "Lyra_de_la_Luna_ficha.txt"
        );
    }

    #[test]
    fn placeholder_name_is_used_in_file_name() {
        let c = character(None);
        assert_eq!(export_file_name(&c, ExportFormat::Json), "Elfo_el_Mago_character.json");
    }

    #[test]
    fn export_then_import_preserves_character() {
        let c = character(Some("Lyra"));
        let json = export_json(&c).expect("export");
        assert!(json.contains("\"race\": \"Elfo\""));
        assert_eq!(rebuild(&json).expect("rebuilt"), c);
    }

    #[test]
    fn import_rejects_unknown_race() {
        let json = export_json(&character(Some("Lyra"))).expect("export");
        let mut value: Value = serde_json::from_str(&json).expect("json");
        value["race"] = Value::from("Marciano");

        let err = rebuild(&value.to_string()).expect_err("unknown race");
        assert_eq!(err, DomainError::invalid_key("race", "Marciano"));
    }

    #[test]
    fn import_recomputes_edited_derived_fields() {
        let c = character(Some("Lyra"));
        let json = export_json(&c).expect("export");
        let mut value: Value = serde_json::from_str(&json).expect("json");
        value["derived"]["hitPoints"] = Value::from(999);
        value["derived"]["armorClass"] = Value::from(30);
        value["features"] = serde_json::json!(["Invencible"]);
        value["classFeatures"] = serde_json::json!(["Deseo"]);

        let imported = rebuild(&value.to_string()).expect("rebuilt");
        assert_eq!(imported.hit_points(), c.hit_points());
        assert_eq!(imported.armor_class(), c.armor_class());
        assert!(imported.features().is_empty());
        assert_eq!(imported, c);
    }

    #[test]
    fn import_checks_scores_and_chaos_extras() {
        let json = export_json(&character(Some("Lyra"))).expect("export");
        let mut value: Value = serde_json::from_str(&json).expect("json");
        value["abilityScores"]["dexterity"] = Value::from(99);
        let err = rebuild(&value.to_string()).expect_err("out of range");
        assert!(matches!(err, DomainError::OutOfRangeScore { score: 99, .. }));

        value["abilityScores"]["dexterity"] = Value::from(14);
        value["method"] = Value::from(GenerationMethod::Chaos.as_str());
        value["features"] = serde_json::json!(["Invencible"]);
        let err = rebuild(&value.to_string()).expect_err("unlisted chaos feature");
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn import_without_id_or_timestamp_uses_fallbacks() {
        let json = export_json(&character(Some("Lyra"))).expect("export");
        let mut value: Value = serde_json::from_str(&json).expect("json");
        if let Some(obj) = value.as_object_mut() {
            obj.remove("id");
            obj.remove("createdAt");
        }
        let imported = rebuild(&value.to_string()).expect("rebuilt");
        assert_eq!(imported.id(), CharacterId::from_uuid(Uuid::from_u128(99)));
        assert_eq!(imported.created_at().format("%Y").to_string(), "2030");
    }

    #[test]
    fn import_rejects_missing_or_blank_identity() {
        let json = export_json(&character(Some("Lyra"))).expect("export");
        let mut value: Value = serde_json::from_str(&json).expect("json");

        value["class"] = Value::String("  ".to_string());
        let err = import_json(&value.to_string()).expect_err("blank class");
        assert!(matches!(err, ExportError::MissingField("class")));

        if let Some(obj) = value.as_object_mut() {
            obj.remove("name");
        }
        let err = import_json(&value.to_string()).expect_err("missing name");
        assert!(matches!(err, ExportError::MissingField("name")));

        let err = import_json("not json").expect_err("malformed");
        assert!(matches!(err, ExportError::Serialization(_)));
    }

    #[test]
    fn sheet_lists_abilities_and_combat_numbers() {
        let c = character(Some("Lyra"));
        let sheet = render_sheet(&c);
        assert!(sheet.contains("NOMBRE: Lyra"));
        assert!(sheet.contains("ALINEAMIENTO: Caótico Bueno"));
        assert!(sheet.contains("FUE: 8 (-1)"));
        assert!(sheet.contains("INT: 15 (+2)"));
        // Mago: d6 + CON +1, AC 10 + DEX +2, Elfo speed 30
        assert!(sheet.contains("PUNTOS DE GOLPE: 7/7"));
        assert!(sheet.contains("CLASE DE ARMADURA: 12"));
        assert!(sheet.contains("VELOCIDAD: 30 ft"));
        assert!(sheet.contains("BONIFICADOR DE COMPETENCIA: +2"));
        assert!(!sheet.contains("CARACTERÍSTICAS ESPECIALES"));
    }

    #[tokio::test]
    async fn write_export_creates_named_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let c = character(Some("Lyra Luna"));
        let path = write_export(dir.path(), &c, ExportFormat::Sheet)
            .await
            .expect("write");
        assert!(path.ends_with("Lyra_Luna_ficha.txt"));
        let text = tokio::fs::read_to_string(&path).await.expect("read");
        assert!(text.starts_with("====="));
    }
}
