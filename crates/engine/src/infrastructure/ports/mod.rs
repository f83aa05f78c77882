//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Character history storage (could swap the JSON file for a database)
//! - Remote content (could swap the public D&D 5e API for another source)
//! - Clock/Random (for testing)

mod error;
mod external;
mod repos;
mod testing;

// =============================================================================
// Errors
// =============================================================================
pub use error::{ContentError, ExportError, HistoryError};

// =============================================================================
// Repository Ports
// =============================================================================
pub use repos::CharacterHistoryRepo;

// =============================================================================
// External Service Ports
// =============================================================================
pub use external::{ContentProviderPort, MonsterSummary, SpellSummary};

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use external::MockContentProviderPort;
#[cfg(test)]
pub use repos::MockCharacterHistoryRepo;
#[cfg(test)]
pub use testing::{MockClockPort, MockRandomPort};

// =============================================================================
// Testing Ports
// =============================================================================
pub use testing::{rng_fn, ClockPort, RandomPort};
