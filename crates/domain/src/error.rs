//! Unified error types for the domain layer
//!
//! Every rule violation in character generation, assembly and encounter
//! evaluation is reported through [`DomainError`]. Nothing in the domain
//! retries or substitutes defaults; the caller decides what to do.

use thiserror::Error;

use crate::value_objects::DiceParseError;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A race, class, background, alignment or creature key is not in the tables
    #[error("Unknown {table} key: {key}")]
    InvalidKey { table: &'static str, key: String },

    /// Ability scores are missing, or a point-buy budget is not fully spent
    #[error("Incomplete ability scores: {0}")]
    IncompleteAbilityScores(String),

    /// A score would leave the bounds of its generation method
    #[error("{ability} score {score} is outside {min}..={max}")]
    OutOfRangeScore {
        ability: &'static str,
        score: i32,
        min: i32,
        max: i32,
    },

    /// A point-buy increase costs more than the remaining budget
    #[error("Insufficient point-buy budget: need {required}, have {remaining}")]
    InsufficientBudget { required: i32, remaining: i32 },

    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Wizard step transition not allowed
    #[error("Invalid state transition: {0}")]
    InvalidStateTransition(String),
}

impl DomainError {
    /// Create an unknown-key error for the given reference table.
    pub fn invalid_key(table: &'static str, key: impl Into<String>) -> Self {
        Self::InvalidKey {
            table,
            key: key.into(),
        }
    }

    /// Create an incomplete ability scores error
    pub fn incomplete(msg: impl Into<String>) -> Self {
        Self::IncompleteAbilityScores(msg.into())
    }

    /// Creates a validation error for business rule violations.
    ///
    /// # Example
    /// ```ignore
    /// if party_size == 0 {
    ///     return Err(DomainError::validation("Party size must be at least 1"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create an invalid state transition error
    pub fn invalid_state_transition(msg: impl Into<String>) -> Self {
        Self::InvalidStateTransition(msg.into())
    }

    /// True for errors caused by a lookup against the reference tables.
    pub fn is_invalid_key(&self) -> bool {
        matches!(self, Self::InvalidKey { .. })
    }
}

impl From<DiceParseError> for DomainError {
    fn from(err: DiceParseError) -> Self {
        Self::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_key_error() {
        let err = DomainError::invalid_key("race", "Marciano");
        assert!(err.is_invalid_key());
        assert_eq!(err.to_string(), "Unknown race key: Marciano");
    }

    #[test]
    fn test_out_of_range_error() {
        let err = DomainError::OutOfRangeScore {
            ability: "STR",
            score: 16,
            min: 8,
            max: 15,
        };
        assert_eq!(err.to_string(), "STR score 16 is outside 8..=15");
    }

    #[test]
    fn test_insufficient_budget_error() {
        let err = DomainError::InsufficientBudget {
            required: 2,
            remaining: 1,
        };
        assert!(err.to_string().contains("need 2, have 1"));
    }

    #[test]
    fn test_from_dice_parse_error() {
        let dice_err = DiceParseError::Empty;
        let domain_err: DomainError = dice_err.into();
        assert!(matches!(domain_err, DomainError::Parse(_)));
        assert!(domain_err.to_string().contains("Empty dice formula"));
    }
}
