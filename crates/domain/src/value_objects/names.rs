//! Validated character name newtype
//!
//! Names are valid by construction:
//! - Non-empty
//! - Within length limits
//! - Trimmed of leading/trailing whitespace

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Maximum length for a character name
const MAX_NAME_LENGTH: usize = 200;

/// A validated character name (non-empty, <=200 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CharacterName(String);

impl CharacterName {
    /// Create a new validated character name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The name is empty after trimming
    /// - The name exceeds 200 characters after trimming
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Character name cannot be empty"));
        }
        if trimmed.chars().count() > MAX_NAME_LENGTH {
            return Err(DomainError::validation(format!(
                "Character name cannot exceed {} characters",
                MAX_NAME_LENGTH
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Placeholder used when no name is supplied: "<Race> el <Class>".
    pub fn placeholder(race: &str, class: &str) -> Self {
        Self(format!("{} el {}", race, class))
    }

    /// Use `name` when it is present and valid, otherwise the placeholder.
    pub fn or_placeholder(name: Option<&str>, race: &str, class: &str) -> Result<Self, DomainError> {
        match name {
            Some(n) if !n.trim().is_empty() => Self::new(n),
            _ => Ok(Self::placeholder(race, class)),
        }
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CharacterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CharacterName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<CharacterName> for String {
    fn from(name: CharacterName) -> String {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_validates() {
        let name = CharacterName::new("  Thorin Escudo de Roble ").expect("valid");
        assert_eq!(name.as_str(), "Thorin Escudo de Roble");
        assert!(CharacterName::new("   ").is_err());
        assert!(CharacterName::new("x".repeat(201)).is_err());
    }

    #[test]
    fn blank_name_falls_back_to_placeholder() {
        let name = CharacterName::or_placeholder(Some("  "), "Humano", "Guerrero").expect("ok");
        assert_eq!(name.as_str(), "Humano el Guerrero");
        let name = CharacterName::or_placeholder(None, "Elfo", "Mago").expect("ok");
        assert_eq!(name.as_str(), "Elfo el Mago");
    }

    #[test]
    fn deserializing_empty_name_fails() {
        let parsed: Result<CharacterName, _> = serde_json::from_str("\"\"");
        assert!(parsed.is_err());
    }
}
