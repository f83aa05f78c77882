//! Engine configuration loaded from environment variables.
//!
//! Call `dotenvy::dotenv()` first so a `.env` file can provide values.
//! Missing or unparseable values fall back to defaults.
//!
//! # Environment Variables
//!
//! Storage:
//! - `FORGE_DATA_DIR` - Directory holding `characters.json` (default: platform data dir)
//! - `FORGE_HISTORY_LIMIT` - Characters kept in history (default: 50)
//! - `FORGE_TABLES_PATH` - JSON file replacing the built-in reference tables (optional)
//!
//! Rules:
//! - `FORGE_XP_PER_CHARACTER` - Encounter budget per party member (default: 500)
//! - `FORGE_CLAMP_HIT_POINTS` - Clamp level-1 hit points to at least 1 (default: true)
//! - `FORGE_SEED` - Seed for reproducible generation (optional)
//!
//! Remote content:
//! - `FORGE_CONTENT_API_URL` - Base URL (default: https://www.dnd5eapi.co/api)
//! - `FORGE_CONTENT_ENABLED` - Allow remote calls (default: true)
//! - `FORGE_CONTENT_TIMEOUT_MS` - Per-request timeout (default: 3000)
//! - `FORGE_CONTENT_CACHE_TTL_SECS` - Cache lifetime (default: 3600)

use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use forge_domain::{AssemblyOptions, EncounterBudget, DEFAULT_XP_PER_CHARACTER};

use crate::infrastructure::content_sources::DEFAULT_API_BASE;
use crate::infrastructure::persistence::DEFAULT_HISTORY_LIMIT;

/// Helper function to read environment variable with default fallback
fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_opt<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

/// Platform data directory, or `./.forge` when none can be determined.
pub fn default_data_dir() -> PathBuf {
    ProjectDirs::from("org", "forge", "character-forge")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".forge"))
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContentConfig {
    pub enabled: bool,
    pub api_url: String,
    pub timeout: Duration,
    pub cache_ttl: Duration,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            api_url: DEFAULT_API_BASE.to_string(),
            timeout: Duration::from_millis(3_000),
            cache_ttl: Duration::from_secs(3_600),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForgeConfig {
    pub data_dir: PathBuf,
    pub history_limit: usize,
    pub tables_path: Option<PathBuf>,
    pub xp_per_character: u32,
    pub clamp_hit_points: bool,
    pub seed: Option<u64>,
    pub content: ContentConfig,
}

impl Default for ForgeConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            tables_path: None,
            xp_per_character: DEFAULT_XP_PER_CHARACTER,
            clamp_hit_points: true,
            seed: None,
            content: ContentConfig::default(),
        }
    }
}

impl ForgeConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let content_defaults = ContentConfig::default();

        let xp_per_character = env_or("FORGE_XP_PER_CHARACTER", defaults.xp_per_character);
        let history_limit = env_or("FORGE_HISTORY_LIMIT", defaults.history_limit);

        Self {
            data_dir: env_opt::<PathBuf>("FORGE_DATA_DIR").unwrap_or(defaults.data_dir),
            history_limit: if history_limit == 0 {
                DEFAULT_HISTORY_LIMIT
            } else {
                history_limit
            },
            tables_path: env_opt("FORGE_TABLES_PATH"),
            xp_per_character: if xp_per_character == 0 {
                DEFAULT_XP_PER_CHARACTER
            } else {
                xp_per_character
            },
            clamp_hit_points: env_or("FORGE_CLAMP_HIT_POINTS", defaults.clamp_hit_points),
            seed: env_opt("FORGE_SEED"),
            content: ContentConfig {
                enabled: env_or("FORGE_CONTENT_ENABLED", content_defaults.enabled),
                api_url: env_or("FORGE_CONTENT_API_URL", content_defaults.api_url),
                timeout: Duration::from_millis(env_or("FORGE_CONTENT_TIMEOUT_MS", 3_000)),
                cache_ttl: Duration::from_secs(env_or("FORGE_CONTENT_CACHE_TTL_SECS", 3_600)),
            },
        }
    }

    pub fn assembly_options(&self) -> AssemblyOptions {
        AssemblyOptions {
            clamp_hit_points: self.clamp_hit_points,
        }
    }

    pub fn encounter_budget(&self) -> EncounterBudget {
        EncounterBudget::new(self.xp_per_character).unwrap_or_default()
    }
}
