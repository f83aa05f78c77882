//! Infrastructure layer - port traits and their implementations.

pub mod cache;
pub mod clock;
pub mod content_sources;
pub mod export;
pub mod persistence;
pub mod ports;
pub mod settings;
