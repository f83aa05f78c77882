//! Application state and composition.

use std::sync::Arc;

use forge_domain::{Bestiary, ReferenceTables};

use crate::infrastructure::{
    clock::{SeededRandom, SystemClock, SystemRandom},
    content_sources::{BestEffortContent, Dnd5eApiClient, NoContent},
    persistence::JsonHistoryRepo,
    ports::{CharacterHistoryRepo, ClockPort, ContentProviderPort, RandomPort},
    settings::ForgeConfig,
};
use crate::use_cases::{CharacterUseCases, EncounterUseCases, EngineError, Enrichment};

/// Main application state.
pub struct App {
    pub config: ForgeConfig,
    pub tables: Arc<ReferenceTables>,
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub character: CharacterUseCases,
    pub encounter: EncounterUseCases,
    pub enrichment: Enrichment,
}

/// Port implementations the use cases run on.
pub struct Adapters {
    pub history: Arc<dyn CharacterHistoryRepo>,
    pub content: Arc<dyn ContentProviderPort>,
    pub clock: Arc<dyn ClockPort>,
    pub random: Arc<dyn RandomPort>,
}

impl App {
    pub fn new(config: ForgeConfig, tables: ReferenceTables, adapters: Adapters) -> Self {
        let tables = Arc::new(tables);
        let use_cases = UseCases {
            character: CharacterUseCases::new(
                tables.clone(),
                adapters.history,
                adapters.clock,
                adapters.random,
                config.assembly_options(),
            ),
            encounter: EncounterUseCases::new(
                Arc::new(Bestiary::builtin()),
                config.encounter_budget(),
                adapters.content.clone(),
            ),
            enrichment: Enrichment::new(adapters.content),
        };
        Self {
            config,
            tables,
            use_cases,
        }
    }

    /// Wire the production adapters described by `config`.
    pub async fn from_config(config: ForgeConfig) -> Result<Self, EngineError> {
        let tables = load_tables(&config).await?;
        let clock: Arc<dyn ClockPort> = Arc::new(SystemClock::new());

        let random: Arc<dyn RandomPort> = match config.seed {
            Some(seed) => {
                tracing::info!(seed, "Using seeded random generator");
                Arc::new(SeededRandom::new(seed))
            }
            None => Arc::new(SystemRandom::new()),
        };

        let content: Arc<dyn ContentProviderPort> = if config.content.enabled {
            let client = Dnd5eApiClient::new(&config.content.api_url, config.content.timeout);
            Arc::new(BestEffortContent::new(
                Arc::new(client),
                config.content.timeout,
                config.content.cache_ttl,
                clock.clone(),
            ))
        } else {
            tracing::info!("Remote content disabled");
            Arc::new(NoContent)
        };

        let history: Arc<dyn CharacterHistoryRepo> =
            Arc::new(JsonHistoryRepo::new(&config.data_dir, config.history_limit));

        tracing::debug!(
            data_dir = %config.data_dir.display(),
            history_limit = config.history_limit,
            "Engine configured"
        );

        Ok(Self::new(
            config,
            tables,
            Adapters {
                history,
                content,
                clock,
                random,
            },
        ))
    }
}

/// Built-in tables, or the JSON override named by `FORGE_TABLES_PATH`.
async fn load_tables(config: &ForgeConfig) -> Result<ReferenceTables, EngineError> {
    let Some(path) = &config.tables_path else {
        return Ok(ReferenceTables::builtin());
    };
    let tables_error = |message: String| EngineError::Tables {
        path: path.display().to_string(),
        message,
    };
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| tables_error(e.to_string()))?;
    let tables = ReferenceTables::from_json(&text).map_err(|e| tables_error(e.to_string()))?;
    tracing::info!(
        path = %path.display(),
        races = tables.races().len(),
        classes = tables.classes().len(),
        backgrounds = tables.backgrounds().len(),
        "Loaded reference tables"
    );
    Ok(tables)
}
