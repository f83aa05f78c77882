//! Persistence adapters.

mod json_history;

pub use json_history::{JsonHistoryRepo, DEFAULT_HISTORY_LIMIT, HISTORY_FILE_NAME};
