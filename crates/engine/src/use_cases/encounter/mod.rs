//! Encounter evaluation use cases.

use std::sync::Arc;

use forge_domain::{evaluate_encounter, Bestiary, ChallengeRating, EncounterBudget, EncounterDifficulty};
use serde::Serialize;

use crate::infrastructure::ports::ContentProviderPort;
use crate::use_cases::EngineError;

/// One resolved participant of an encounter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EncounterEntry {
    /// Creature name, or the rating label when given a bare rating.
    pub label: String,
    pub challenge_rating: ChallengeRating,
    pub xp: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EncounterReport {
    pub party_size: u32,
    pub entries: Vec<EncounterEntry>,
    pub difficulty: EncounterDifficulty,
}

/// Convert a decimal rating from the content API (0.125, 0.25, 0.5, 1, ...).
fn rating_from_decimal(value: f64) -> Option<ChallengeRating> {
    let label = if (value - 0.125).abs() < f64::EPSILON {
        "1/8".to_string()
    } else if (value - 0.25).abs() < f64::EPSILON {
        "1/4".to_string()
    } else if (value - 0.5).abs() < f64::EPSILON {
        "1/2".to_string()
    } else if value.fract() == 0.0 && (0.0..=30.0).contains(&value) {
        format!("{}", value as u8)
    } else {
        return None;
    };
    ChallengeRating::parse(&label).ok()
}

/// Container for encounter use cases.
pub struct EncounterUseCases {
    bestiary: Arc<Bestiary>,
    budget: EncounterBudget,
    content: Arc<dyn ContentProviderPort>,
}

impl EncounterUseCases {
    pub fn new(
        bestiary: Arc<Bestiary>,
        budget: EncounterBudget,
        content: Arc<dyn ContentProviderPort>,
    ) -> Self {
        Self {
            bestiary,
            budget,
            content,
        }
    }

    pub fn bestiary(&self) -> &Bestiary {
        &self.bestiary
    }

    /// Resolve each entry as a challenge rating, a bestiary creature, or a
    /// remote monster index, in that order.
    async fn resolve(&self, entry: &str) -> Result<EncounterEntry, EngineError> {
        let entry = entry.trim();
        if let Ok(cr) = ChallengeRating::parse(entry) {
            return Ok(EncounterEntry {
                label: format!("CR {}", cr),
                challenge_rating: cr,
                xp: cr.xp(),
            });
        }
        if let Ok(creature) = self.bestiary.get(entry) {
            return Ok(EncounterEntry {
                label: creature.name.clone(),
                challenge_rating: creature.challenge_rating,
                xp: creature.xp(),
            });
        }

        let index = entry.to_lowercase().split_whitespace().collect::<Vec<_>>().join("-");
        match self.content.monster(&index).await {
            Ok(Some(monster)) => {
                let cr = rating_from_decimal(monster.challenge_rating)
                    .ok_or_else(|| EngineError::UnknownCreature(entry.to_string()))?;
                tracing::debug!(monster = %monster.name, cr = %cr, "Resolved remote monster");
                Ok(EncounterEntry {
                    label: monster.name,
                    challenge_rating: cr,
                    xp: cr.xp(),
                })
            }
            Ok(None) => Err(EngineError::UnknownCreature(entry.to_string())),
            Err(e) => {
                tracing::warn!(monster = %index, error = %e, "Monster lookup failed");
                Err(EngineError::UnknownCreature(entry.to_string()))
            }
        }
    }

    /// Evaluate an encounter given creature names or challenge ratings.
    pub async fn evaluate(
        &self,
        creatures: &[String],
        party_size: u32,
    ) -> Result<EncounterReport, EngineError> {
        let mut entries = Vec::with_capacity(creatures.len());
        for creature in creatures {
            entries.push(self.resolve(creature).await?);
        }

        let difficulty = evaluate_encounter(
            entries.iter().map(|e| e.challenge_rating),
            party_size,
            self.budget,
        )?;

        tracing::info!(
            party_size,
            creatures = entries.len(),
            total_xp = difficulty.total_xp,
            tier = difficulty.tier.as_str(),
            "Encounter evaluated"
        );

        Ok(EncounterReport {
            party_size,
            entries,
            difficulty,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::content_sources::NoContent;
    use crate::infrastructure::ports::{MockContentProviderPort, MonsterSummary};
    use forge_domain::{DifficultyTier, DomainError};

    fn use_cases(content: impl ContentProviderPort + 'static) -> EncounterUseCases {
        EncounterUseCases::new(
            Arc::new(Bestiary::builtin()),
            EncounterBudget::default(),
            Arc::new(content),
        )
    }

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn ratings_and_creatures_mix() {
        let uc = use_cases(NoContent);
        let report = uc
            .evaluate(&names(&["1/4", "goblin", "Trol"]), 4)
            .await
            .expect("valid encounter");
        assert_eq!(report.entries.len(), 3);
        assert_eq!(report.entries[1].label, "Goblin");
        assert_eq!(report.difficulty.total_xp, 50 + 50 + 1_800);
        assert_eq!(report.difficulty.threshold, 2_000);
        assert_eq!(report.difficulty.tier, DifficultyTier::Medium);
    }

    #[tokio::test]
    async fn four_trolls_are_deadly_for_four() {
        let uc = use_cases(NoContent);
        let report = uc
            .evaluate(&names(&["Trol", "Trol", "Trol", "Trol"]), 4)
            .await
            .expect("valid encounter");
        assert_eq!(report.difficulty.tier, DifficultyTier::Deadly);
    }

    #[tokio::test]
    async fn zero_party_is_a_validation_error() {
        let uc = use_cases(NoContent);
        let err = uc.evaluate(&names(&["1"]), 0).await.expect_err("empty party");
        assert!(matches!(err, EngineError::Domain(DomainError::Validation(_))));
    }

    #[tokio::test]
    async fn unknown_creature_is_reported() {
        let uc = use_cases(NoContent);
        let err = uc
            .evaluate(&names(&["Tarrasca"]), 4)
            .await
            .expect_err("unknown");
        assert!(matches!(err, EngineError::UnknownCreature(name) if name == "Tarrasca"));
    }

    #[tokio::test]
    async fn remote_monster_fills_gaps() {
        let mut content = MockContentProviderPort::new();
        content
            .expect_monster()
            .withf(|index| index == "owlbear")
            .returning(|_| {
                Ok(Some(MonsterSummary {
                    index: "owlbear".to_string(),
                    name: "Owlbear".to_string(),
                    size: "Large".to_string(),
                    creature_type: "monstrosity".to_string(),
                    alignment: "unaligned".to_string(),
                    armor_class: 13,
                    hit_points: 59,
                    challenge_rating: 3.0,
                    xp: 700,
                }))
            });
        let uc = use_cases(content);
        let report = uc.evaluate(&names(&["Owlbear"]), 2).await.expect("resolved");
        assert_eq!(report.entries[0].label, "Owlbear");
        assert_eq!(report.difficulty.total_xp, 700);
        assert_eq!(report.difficulty.tier, DifficultyTier::Medium);
    }

    #[test]
    fn decimal_ratings_convert() {
        assert_eq!(rating_from_decimal(0.25).map(|cr| cr.xp()), Some(50));
        assert_eq!(rating_from_decimal(0.125).map(|cr| cr.xp()), Some(25));
        assert_eq!(rating_from_decimal(21.0).map(|cr| cr.xp()), Some(33_000));
        assert_eq!(rating_from_decimal(0.3), None);
        assert_eq!(rating_from_decimal(31.0), None);
    }
}
