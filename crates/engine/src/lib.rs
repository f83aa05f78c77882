//! Character Forge engine library.
//!
//! ## Structure
//!
//! - `use_cases/` - Character creation, encounters and enrichment
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `app` - Application composition

pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::{Adapters, App, UseCases};
pub use infrastructure::settings::ForgeConfig;
pub use use_cases::EngineError;
