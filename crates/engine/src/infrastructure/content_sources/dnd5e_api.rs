//! Client for the public D&D 5e SRD API.
//!
//! Implements [`ContentProviderPort`] for spell lists and monster stat lines.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;

use crate::infrastructure::ports::{ContentError, ContentProviderPort, MonsterSummary, SpellSummary};

pub const DEFAULT_API_BASE: &str = "https://www.dnd5eapi.co/api";

/// Map a class name from the reference tables to the API's class index.
///
/// Spanish table names and their English equivalents are both accepted.
pub fn class_api_index(class_name: &str) -> Option<&'static str> {
    let index = match class_name.trim().to_lowercase().as_str() {
        "guerrero" | "fighter" => "fighter",
        "mago" | "wizard" => "wizard",
        "pícaro" | "picaro" | "rogue" => "rogue",
        "clérigo" | "clerigo" | "cleric" => "cleric",
        "paladín" | "paladin" => "paladin",
        "bardo" | "bard" => "bard",
        "bárbaro" | "barbaro" | "barbarian" => "barbarian",
        "druida" | "druid" => "druid",
        "monje" | "monk" => "monk",
        "explorador" | "ranger" => "ranger",
        "hechicero" | "sorcerer" => "sorcerer",
        "brujo" | "warlock" => "warlock",
        _ => return None,
    };
    Some(index)
}

/// Client for the D&D 5e API
#[derive(Clone)]
pub struct Dnd5eApiClient {
    client: Client,
    base_url: String,
}

impl Dnd5eApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `path` and decode JSON; `Ok(None)` on 404.
    async fn get_json<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
    ) -> Result<Option<T>, ContentError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "Fetching content");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(ContentError::request)?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(ContentError::Status {
                status: response.status().as_u16(),
                url,
            });
        }

        response.json().await.map(Some).map_err(ContentError::decode)
    }
}

#[async_trait]
impl ContentProviderPort for Dnd5eApiClient {
    async fn spells_for_class(&self, class_index: &str) -> Result<Vec<SpellSummary>, ContentError> {
        let index = class_api_index(class_index).unwrap_or(class_index);
        let list: Option<ApiList> = self.get_json(&format!("/classes/{}/spells", index)).await?;
        match list {
            Some(list) => Ok(list.into_spells()),
            None => Err(ContentError::Unsupported(format!("class {}", index))),
        }
    }

    async fn monster(&self, index: &str) -> Result<Option<MonsterSummary>, ContentError> {
        let monster: Option<ApiMonster> = self.get_json(&format!("/monsters/{}", index)).await?;
        Ok(monster.map(ApiMonster::into_summary))
    }
}

// =============================================================================
// API Types
// =============================================================================

#[derive(Debug, Deserialize)]
struct ApiList {
    #[serde(default)]
    results: Vec<ApiReference>,
}

#[derive(Debug, Deserialize)]
struct ApiReference {
    index: String,
    name: String,
    #[serde(default)]
    level: u8,
}

impl ApiList {
    fn into_spells(self) -> Vec<SpellSummary> {
        let mut spells: Vec<SpellSummary> = self
            .results
            .into_iter()
            .map(|r| SpellSummary {
                index: r.index,
                name: r.name,
                level: r.level,
            })
            .collect();
        spells.sort_by(|a, b| a.level.cmp(&b.level).then_with(|| a.name.cmp(&b.name)));
        spells
    }
}

#[derive(Debug, Deserialize)]
struct ApiMonster {
    index: String,
    name: String,
    #[serde(default)]
    size: String,
    #[serde(rename = "type", default)]
    creature_type: String,
    #[serde(default)]
    alignment: String,
    #[serde(default)]
    armor_class: Vec<ApiArmorClass>,
    #[serde(default)]
    hit_points: i32,
    #[serde(default)]
    challenge_rating: f64,
    #[serde(default)]
    xp: u64,
}

#[derive(Debug, Deserialize)]
struct ApiArmorClass {
    value: i32,
}

impl ApiMonster {
    fn into_summary(self) -> MonsterSummary {
        MonsterSummary {
            index: self.index,
            name: self.name,
            size: self.size,
            creature_type: self.creature_type,
            alignment: self.alignment,
            armor_class: self.armor_class.first().map(|ac| ac.value).unwrap_or(10),
            hit_points: self.hit_points,
            challenge_rating: self.challenge_rating,
            xp: self.xp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_table_class_names_to_api_indices() {
        assert_eq!(class_api_index("Mago"), Some("wizard"));
        assert_eq!(class_api_index("Pícaro"), Some("rogue"));
        assert_eq!(class_api_index("  explorador "), Some("ranger"));
        assert_eq!(class_api_index("Warlock"), Some("warlock"));
        assert_eq!(class_api_index("Artífice"), None);
    }

    #[test]
    fn decodes_spell_list_sorted_by_level() {
        let json = r#"{
            "count": 3,
            "results": [
                {"index": "fireball", "name": "Fireball", "level": 3, "url": "/api/spells/fireball"},
                {"index": "fire-bolt", "name": "Fire Bolt", "level": 0, "url": "/api/spells/fire-bolt"},
                {"index": "shield", "name": "Shield", "level": 1, "url": "/api/spells/shield"}
            ]
        }"#;
        let list: ApiList = serde_json::from_str(json).expect("valid list");
        let names: Vec<String> = list.into_spells().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["Fire Bolt", "Shield", "Fireball"]);
    }

    #[test]
    fn decodes_monster_with_armor_class_list() {
        let json = r#"{
            "index": "goblin",
            "name": "Goblin",
            "size": "Small",
            "type": "humanoid",
            "alignment": "neutral evil",
            "armor_class": [{"type": "armor", "value": 15}],
            "hit_points": 7,
            "challenge_rating": 0.25,
            "xp": 50
        }"#;
        let monster: ApiMonster = serde_json::from_str(json).expect("valid monster");
        let summary = monster.into_summary();
        assert_eq!(summary.armor_class, 15);
        assert_eq!(summary.creature_type, "humanoid");
        assert_eq!(summary.xp, 50);
    }

    #[test]
    fn base_url_drops_trailing_slash() {
        let client = Dnd5eApiClient::new("https://example.test/api/", Duration::from_secs(1));
        assert_eq!(client.base_url(), "https://example.test/api");
    }
}
