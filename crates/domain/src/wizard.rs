//! Character creation wizard
//!
//! A finite-state machine over the six creation steps. Each step has a guard;
//! moving forward past a step requires its guard to pass, moving back is
//! always allowed. Rendering is a projection of this state and lives outside
//! the domain.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::aggregates::{AssemblyOptions, Character, CharacterRequest};
use crate::error::DomainError;
use crate::generation::{GenerationMethod, ScoreGeneration};
use crate::ids::CharacterId;
use crate::tables::{Alignment, ReferenceTables};
use crate::value_objects::{Ability, AbilityScores};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreationStep {
    Race,
    Class,
    Background,
    Stats,
    Equipment,
    Details,
}

impl CreationStep {
    pub const ALL: [CreationStep; 6] = [
        Self::Race,
        Self::Class,
        Self::Background,
        Self::Stats,
        Self::Equipment,
        Self::Details,
    ];

    /// 1-based position.
    pub fn number(&self) -> u8 {
        match self {
            Self::Race => 1,
            Self::Class => 2,
            Self::Background => 3,
            Self::Stats => 4,
            Self::Equipment => 5,
            Self::Details => 6,
        }
    }

    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.number() == number)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Race => "Raza",
            Self::Class => "Clase",
            Self::Background => "Trasfondo",
            Self::Stats => "Estadísticas",
            Self::Equipment => "Equipo",
            Self::Details => "Detalles",
        }
    }

    pub fn next(&self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    pub fn previous(&self) -> Option<Self> {
        self.number().checked_sub(1).and_then(Self::from_number)
    }
}

impl fmt::Display for CreationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}

/// Draft selections plus the current step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreationWizard {
    step: CreationStep,
    race: Option<String>,
    class: Option<String>,
    background: Option<String>,
    alignment: Alignment,
    name: String,
    scores: ScoreGeneration,
}

impl Default for CreationWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl CreationWizard {
    /// Start at the race step with a fresh point-buy.
    pub fn new() -> Self {
        Self {
            step: CreationStep::Race,
            race: None,
            class: None,
            background: None,
            alignment: Alignment::TrueNeutral,
            name: String::new(),
            scores: ScoreGeneration::point_buy(),
        }
    }

    pub fn step(&self) -> CreationStep {
        self.step
    }

    pub fn race(&self) -> Option<&str> {
        self.race.as_deref()
    }

    pub fn class(&self) -> Option<&str> {
        self.class.as_deref()
    }

    pub fn background(&self) -> Option<&str> {
        self.background.as_deref()
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn method(&self) -> GenerationMethod {
        self.scores.method()
    }

    pub fn scores(&self) -> AbilityScores {
        self.scores.scores()
    }

    pub fn remaining_points(&self) -> Option<i32> {
        self.scores.remaining_points()
    }

    // =========================================================================
    // Selections
    // =========================================================================

    pub fn select_race(&mut self, tables: &ReferenceTables, key: &str) -> Result<(), DomainError> {
        self.race = Some(tables.race(key)?.name.clone());
        Ok(())
    }

    pub fn select_class(&mut self, tables: &ReferenceTables, key: &str) -> Result<(), DomainError> {
        self.class = Some(tables.class(key)?.name.clone());
        Ok(())
    }

    pub fn select_background(
        &mut self,
        tables: &ReferenceTables,
        key: &str,
    ) -> Result<(), DomainError> {
        self.background = Some(tables.background(key)?.name.clone());
        Ok(())
    }

    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.alignment = alignment;
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Switch score method, discarding current scores. Standard array and
    /// rolls are assigned by the selected class's priority when there is one.
    pub fn set_method(
        &mut self,
        tables: &ReferenceTables,
        method: GenerationMethod,
        rng: &mut impl FnMut(i32, i32) -> i32,
    ) {
        let priority = self
            .class
            .as_deref()
            .and_then(|key| tables.class(key).ok())
            .map(|class| class.stat_priority);
        self.scores.switch_method(method, priority.as_ref(), rng);
    }

    pub fn increase(&mut self, ability: Ability) -> Result<(), DomainError> {
        self.scores.increase(ability)
    }

    pub fn decrease(&mut self, ability: Ability) -> Result<(), DomainError> {
        self.scores.decrease(ability)
    }

    pub fn swap(&mut self, a: Ability, b: Ability) -> Result<(), DomainError> {
        self.scores.swap(a, b)
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// The guard of `step`.
    pub fn check(&self, step: CreationStep) -> Result<(), DomainError> {
        let missing = |what: &str| -> Result<(), DomainError> {
            Err(DomainError::invalid_state_transition(format!(
                "{} requires a {}",
                step, what
            )))
        };
        match step {
            CreationStep::Race if self.race.is_none() => missing("race"),
            CreationStep::Class if self.class.is_none() => missing("class"),
            CreationStep::Background if self.background.is_none() => missing("background"),
            CreationStep::Stats => self.scores.validate().map(|_| ()).map_err(|e| {
                DomainError::invalid_state_transition(format!("{}: {}", step, e))
            }),
            CreationStep::Details if self.name.trim().is_empty() => missing("name"),
            _ => Ok(()),
        }
    }

    pub fn is_step_complete(&self, step: CreationStep) -> bool {
        self.check(step).is_ok()
    }

    /// Move to the next step if the current one is complete.
    pub fn advance(&mut self) -> Result<CreationStep, DomainError> {
        let next = self.step.next().ok_or_else(|| {
            DomainError::invalid_state_transition("Already at the last step; call finish")
        })?;
        self.check(self.step)?;
        self.step = next;
        Ok(next)
    }

    pub fn back(&mut self) -> Result<CreationStep, DomainError> {
        let previous = self.step.previous().ok_or_else(|| {
            DomainError::invalid_state_transition("Already at the first step")
        })?;
        self.step = previous;
        Ok(previous)
    }

    /// Jump to `target`. Going forward checks every step that would be skipped.
    pub fn go_to(&mut self, target: CreationStep) -> Result<CreationStep, DomainError> {
        if target > self.step {
            for step in CreationStep::ALL
                .into_iter()
                .filter(|s| *s >= self.step && *s < target)
            {
                self.check(step)?;
            }
        }
        self.step = target;
        Ok(target)
    }

    /// Assemble the character once every guard passes.
    pub fn finish(
        &self,
        tables: &ReferenceTables,
        id: CharacterId,
        now: DateTime<Utc>,
        options: AssemblyOptions,
    ) -> Result<Character, DomainError> {
        for step in CreationStep::ALL {
            self.check(step)?;
        }
        let (Some(race), Some(class), Some(background)) =
            (&self.race, &self.class, &self.background)
        else {
            return Err(DomainError::invalid_state_transition(
                "Race, class and background must be selected",
            ));
        };
        let request =
            CharacterRequest::new(race, class, background, self.alignment, self.scores.scores())
                .with_method(self.scores.method())
                .with_name(self.name.trim());
        Character::assemble(tables, request, id, now, options)
    }
}
