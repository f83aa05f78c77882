//! Engine operation errors.

use forge_domain::{CharacterId, DomainError};

use crate::infrastructure::ports::{ExportError, HistoryError};

/// Errors that can occur in engine use cases.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Character not found: {0}")]
    CharacterNotFound(CharacterId),

    #[error("Invalid character id: {0}")]
    InvalidCharacterId(String),

    /// An encounter entry is neither a challenge rating nor a known creature.
    #[error("Unknown creature or challenge rating: {0}")]
    UnknownCreature(String),

    #[error("Reference tables could not be loaded from {path}: {message}")]
    Tables { path: String, message: String },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("History error: {0}")]
    History(#[from] HistoryError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),
}
