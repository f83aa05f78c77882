//! Repository port for the saved character history.

use async_trait::async_trait;
use forge_domain::{Character, CharacterId};

use super::error::HistoryError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CharacterHistoryRepo: Send + Sync {
    /// Insert or replace by id; the saved character becomes the newest entry
    /// and the history is truncated to its limit.
    async fn save(&self, character: &Character) -> Result<(), HistoryError>;

    /// Newest first.
    async fn list(&self) -> Result<Vec<Character>, HistoryError>;

    async fn get(&self, id: CharacterId) -> Result<Option<Character>, HistoryError>;

    /// Returns false when no entry had this id.
    async fn delete(&self, id: CharacterId) -> Result<bool, HistoryError>;

    async fn latest(&self) -> Result<Option<Character>, HistoryError>;
}
