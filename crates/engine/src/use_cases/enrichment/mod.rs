//! Optional remote enrichment of finished characters.

use std::sync::Arc;

use forge_domain::Character;

use crate::infrastructure::content_sources::class_api_index;
use crate::infrastructure::ports::{ContentProviderPort, SpellSummary};

pub struct Enrichment {
    content: Arc<dyn ContentProviderPort>,
}

impl Enrichment {
    pub fn new(content: Arc<dyn ContentProviderPort>) -> Self {
        Self { content }
    }

    /// Spells on the character's class list. Empty for non-casters, for
    /// classes the provider does not know, and when the provider fails.
    pub async fn spells_for(&self, character: &Character) -> Vec<SpellSummary> {
        if !character.is_spellcaster() {
            return Vec::new();
        }
        let Some(index) = class_api_index(character.class()) else {
            tracing::debug!(class = character.class(), "No content index for class");
            return Vec::new();
        };
        match self.content.spells_for_class(index).await {
            Ok(spells) => spells,
            Err(e) => {
                tracing::warn!(class = index, error = %e, "Spell enrichment unavailable");
                Vec::new()
            }
        }
    }
}
