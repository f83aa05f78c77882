//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific area. Use cases combine the
//! domain rules with the infrastructure ports.

pub mod character;
pub mod encounter;
pub mod enrichment;
mod error;

pub use character::CharacterUseCases;
pub use encounter::{EncounterEntry, EncounterReport, EncounterUseCases};
pub use enrichment::Enrichment;
pub use error::EngineError;
