//! Character creation use cases.
//!
//! Every creation path stamps a fresh id and timestamp, assembles the
//! character in the domain, then records it in the history. A history failure
//! is logged and does not fail the creation.

use std::sync::Arc;

use forge_domain::{
    AssemblyOptions, Character, CharacterId, CharacterRequest, CreationWizard, FixedChoices,
    GenerationMethod, GenerationOptions, RandomCharacterGenerator, ReferenceTables,
};

use crate::infrastructure::export::import_json;
use crate::infrastructure::ports::{rng_fn, CharacterHistoryRepo, ClockPort, RandomPort};
use crate::use_cases::EngineError;

/// Container for character use cases.
pub struct CharacterUseCases {
    tables: Arc<ReferenceTables>,
    history: Arc<dyn CharacterHistoryRepo>,
    clock: Arc<dyn ClockPort>,
    random: Arc<dyn RandomPort>,
    assembly: AssemblyOptions,
}

impl CharacterUseCases {
    pub fn new(
        tables: Arc<ReferenceTables>,
        history: Arc<dyn CharacterHistoryRepo>,
        clock: Arc<dyn ClockPort>,
        random: Arc<dyn RandomPort>,
        assembly: AssemblyOptions,
    ) -> Self {
        Self {
            tables,
            history,
            clock,
            random,
            assembly,
        }
    }

    pub fn tables(&self) -> &ReferenceTables {
        &self.tables
    }

    fn next_id(&self) -> CharacterId {
        CharacterId::from_uuid(self.random.gen_uuid())
    }

    /// Random character; `fixed` pins any of race, class, background, alignment or name.
    pub async fn create_random(
        &self,
        options: GenerationOptions,
        fixed: &FixedChoices,
    ) -> Result<Character, EngineError> {
        let generator = RandomCharacterGenerator::new(&self.tables);
        let mut rng = rng_fn(self.random.as_ref());
        let character = generator.generate(
            fixed,
            options,
            self.next_id(),
            self.clock.now(),
            self.assembly,
            &mut rng,
        )?;
        self.record(&character, if options.chaos { "chaos" } else { "random" })
            .await;
        Ok(character)
    }

    pub async fn create_custom(&self, request: CharacterRequest) -> Result<Character, EngineError> {
        let character = Character::assemble(
            &self.tables,
            request,
            self.next_id(),
            self.clock.now(),
            self.assembly,
        )?;
        self.record(&character, "custom").await;
        Ok(character)
    }

    /// Switch the wizard's score method, rolling with the engine's randomness.
    pub fn set_wizard_method(&self, wizard: &mut CreationWizard, method: GenerationMethod) {
        let mut rng = rng_fn(self.random.as_ref());
        wizard.set_method(&self.tables, method, &mut rng);
    }

    pub async fn run_wizard_finish(&self, wizard: &CreationWizard) -> Result<Character, EngineError> {
        let character =
            wizard.finish(&self.tables, self.next_id(), self.clock.now(), self.assembly)?;
        self.record(&character, "wizard").await;
        Ok(character)
    }

    /// Import an exported record and add it to the history.
    ///
    /// The record is assembled again from its choices; derived fields in the
    /// file are ignored.
    pub async fn import(&self, text: &str) -> Result<Character, EngineError> {
        let character = import_json(text)?.rebuild(
            &self.tables,
            self.next_id(),
            self.clock.now(),
            self.assembly,
        )?;
        self.history.save(&character).await?;
        tracing::info!(
            character_id = %character.id(),
            name = %character.name(),
            "Character imported"
        );
        Ok(character)
    }

    pub async fn history(&self) -> Result<Vec<Character>, EngineError> {
        Ok(self.history.list().await?)
    }

    pub async fn get(&self, id: CharacterId) -> Result<Character, EngineError> {
        self.history
            .get(id)
            .await?
            .ok_or(EngineError::CharacterNotFound(id))
    }

    /// Find a saved character by full id or by a unique id prefix.
    pub async fn find(&self, id_or_prefix: &str) -> Result<Character, EngineError> {
        let key = id_or_prefix.trim().to_lowercase();
        if let Ok(id) = key.parse::<CharacterId>() {
            return self.get(id).await;
        }
        if key.is_empty() {
            return Err(EngineError::InvalidCharacterId(id_or_prefix.to_string()));
        }
        let mut matches = self
            .history
            .list()
            .await?
            .into_iter()
            .filter(|c| c.id().to_string().starts_with(&key));
        match (matches.next(), matches.next()) {
            (Some(character), None) => Ok(character),
            _ => Err(EngineError::InvalidCharacterId(id_or_prefix.to_string())),
        }
    }

    pub async fn latest(&self) -> Result<Option<Character>, EngineError> {
        Ok(self.history.latest().await?)
    }

    pub async fn delete(&self, id: CharacterId) -> Result<(), EngineError> {
        if self.history.delete(id).await? {
            tracing::info!(character_id = %id, "Character deleted");
            Ok(())
        } else {
            Err(EngineError::CharacterNotFound(id))
        }
    }

    async fn record(&self, character: &Character, source: &'static str) {
        tracing::info!(
            character_id = %character.id(),
            race = character.race(),
            class = character.class(),
            source,
            "Character created"
        );
        if let Err(e) = self.history.save(character).await {
            tracing::warn!(
                character_id = %character.id(),
                error = %e,
                "Failed to save character to history"
            );
        }
    }
}
