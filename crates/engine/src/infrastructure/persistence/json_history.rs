//! JSON-file character history.
//!
//! The whole history is one JSON array, newest first. Writes go to a sibling
//! temp file which is then renamed over the original.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use forge_domain::{Character, CharacterId};
use tokio::sync::Mutex;

use crate::infrastructure::ports::{CharacterHistoryRepo, HistoryError};

pub const HISTORY_FILE_NAME: &str = "characters.json";
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

pub struct JsonHistoryRepo {
    path: PathBuf,
    limit: usize,
    // Serializes read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl JsonHistoryRepo {
    pub fn new(data_dir: impl AsRef<Path>, limit: usize) -> Self {
        Self {
            path: data_dir.as_ref().join(HISTORY_FILE_NAME),
            limit: limit.max(1),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<Vec<Character>, HistoryError> {
        let text = match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(HistoryError::io("load", e)),
        };
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&text).map_err(HistoryError::serialization)
    }

    async fn store(&self, characters: &[Character]) -> Result<(), HistoryError> {
        if let Some(dir) = self.path.parent() {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|e| HistoryError::io("create_dir", e))?;
        }
        let json =
            serde_json::to_string_pretty(characters).map_err(HistoryError::serialization)?;

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json)
            .await
            .map_err(|e| HistoryError::io("write", e))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| HistoryError::io("rename", e))
    }
}

#[async_trait]
impl CharacterHistoryRepo for JsonHistoryRepo {
    async fn save(&self, character: &Character) -> Result<(), HistoryError> {
        let _guard = self.write_lock.lock().await;
        let mut characters = self.load().await?;
        characters.retain(|c| c.id() != character.id());
        characters.insert(0, character.clone());
        characters.truncate(self.limit);
        self.store(&characters).await?;
        tracing::debug!(
            character_id = %character.id(),
            entries = characters.len(),
            "History saved"
        );
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Character>, HistoryError> {
        self.load().await
    }

    async fn get(&self, id: CharacterId) -> Result<Option<Character>, HistoryError> {
        Ok(self.load().await?.into_iter().find(|c| c.id() == id))
    }

    async fn delete(&self, id: CharacterId) -> Result<bool, HistoryError> {
        let _guard = self.write_lock.lock().await;
        let mut characters = self.load().await?;
        let before = characters.len();
        characters.retain(|c| c.id() != id);
        if characters.len() == before {
            return Ok(false);
        }
        self.store(&characters).await?;
        Ok(true)
    }

    async fn latest(&self) -> Result<Option<Character>, HistoryError> {
        Ok(self.load().await?.into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use forge_domain::{
        AbilityScores, Alignment, AssemblyOptions, CharacterRequest, ReferenceTables,
    };
    use uuid::Uuid;

    fn character(n: u128, name: &str) -> Character {
        let tables = ReferenceTables::builtin();
        let request = CharacterRequest::new(
            "Humano",
            "Guerrero",
            "Soldado",
            Alignment::LawfulGood,
            AbilityScores::new([15, 14, 13, 12, 10, 8]),
        )
        .with_name(name);
        let now = Utc
            .with_ymd_and_hms(2025, 3, 1, 12, 0, 0)
            .single()
            .expect("valid timestamp");
        Character::assemble(
            &tables,
            request,
            CharacterId::from_uuid(Uuid::from_u128(n)),
            now,
            AssemblyOptions::default(),
        )
        .expect("valid character")
    }

    #[tokio::test]
    async fn missing_file_is_empty_history() {
        let dir = tempfile::tempdir().expect("tempdir");
        let repo = JsonHistoryRepo::new(dir.path(), 10);
        assert!(repo.list().await.expect("list").is_empty());
        assert!(repo.latest().await.expect("latest").is_none());
    }

    #[tokio::test]
    async fn save_is_newest_first_and_upserts() {
        let dir = tempfile::tempdir().expect("tempdir");
        let repo = JsonHistoryRepo::new(dir.path(), 10);

        repo.save(&character(1, "Aria")).await.expect("save");
        repo.save(&character(2, "Borin")).await.expect("save");
        repo.save(&character(1, "Aria Segunda")).await.expect("save");

        let names: Vec<String> = repo
            .list()
            .await
            .expect("list")
            .iter()
            .map(|c| c.name().to_string())
            .collect();
        assert_eq!(names, vec!["Aria Segunda", "Borin"]);
        assert!(repo.path().exists());
        assert!(!repo.path().with_extension("json.tmp").exists());
    }

    #[tokio::test]
    async fn history_is_truncated_to_limit() {
        let dir = tempfile::tempdir().expect("tempdir");
        let repo = JsonHistoryRepo::new(dir.path(), 3);
        for n in 0..5 {
            repo.save(&character(n, &format!("Heroe {n}"))).await.expect("save");
        }
        let list = repo.list().await.expect("list");
        assert_eq!(list.len(), 3);
        assert_eq!(list[0].name().as_str(), "Heroe 4");
    }

    #[tokio::test]
    async fn get_delete_and_latest() {
        let dir = tempfile::tempdir().expect("tempdir");
        let repo = JsonHistoryRepo::new(dir.path(), 10);
        let first = character(1, "Aria");
        let second = character(2, "Borin");
        repo.save(&first).await.expect("save");
        repo.save(&second).await.expect("save");

        assert_eq!(repo.get(first.id()).await.expect("get"), Some(first.clone()));
        assert_eq!(repo.latest().await.expect("latest"), Some(second.clone()));

        assert!(repo.delete(second.id()).await.expect("delete"));
        assert!(!repo.delete(second.id()).await.expect("delete again"));
        assert_eq!(repo.latest().await.expect("latest"), Some(first));
    }

    #[tokio::test]
    async fn corrupt_file_is_a_serialization_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let repo = JsonHistoryRepo::new(dir.path(), 10);
        tokio::fs::write(repo.path(), "{not json").await.expect("write");
        let err = repo.list().await.expect_err("corrupt");
        assert!(matches!(err, HistoryError::Serialization(_)));
    }
}
