//! Content source implementations for external data providers.
//!
//! Spell lists and monster entries come from the public D&D 5e API. The
//! best-effort wrapper adds timeouts, caching and the empty fallback.

mod best_effort;
mod dnd5e_api;

pub use best_effort::{BestEffortContent, NoContent};
pub use dnd5e_api::{class_api_index, Dnd5eApiClient, DEFAULT_API_BASE};
