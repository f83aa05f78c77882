//! One-shot random character generation
//!
//! Balanced mode rolls 4d6-drop-lowest scores and assigns them by the class
//! stat priority. Chaos mode draws every score uniformly from 3..=18, names
//! the character `CHAOS-<n>` and swaps the starting kit for chaos gear.
//! Any of race, class, background, alignment or name may be fixed by the
//! caller; the rest is drawn at random.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::scores::{chaos_scores, roll_scores, GenerationMethod};
use crate::aggregates::{AssemblyOptions, Character, CharacterRequest};
use crate::error::DomainError;
use crate::ids::CharacterId;
use crate::tables::{Alignment, ReferenceTables};

pub const FIRST_NAMES: [&str; 24] = [
    "Thorin", "Gandalf", "Aragorn", "Legolas", "Gimli", "Elara", "Thalia", "Kael", "Darian",
    "Lyra", "Vex", "Grog", "Pike", "Scanlan", "Vax", "Keyleth", "Caleb", "Jester", "Fjord",
    "Beau", "Nott", "Yasha", "Caduceus", "Essek",
];

pub const LAST_NAMES: [&str; 12] = [
    "Escudo de Roble",
    "Martillo de Piedra",
    "Mano Firme",
    "Corazón Valiente",
    "Sombra Nocturna",
    "Viento del Este",
    "Forja de Fuego",
    "Luna Plateada",
    "Espada Rota",
    "Puño de Hierro",
    "Estrella Brillante",
    "Lobo Solitario",
];

pub const CHAOS_FEATURES: [&str; 10] = [
    "Puede lanzar Bola de Fuego (aunque sea un Bárbaro)",
    "Competente con todas las armas (sin entrenamiento)",
    "Puede usar disfraz perfecto a voluntad",
    "Habla con dragones (probablemente lo insultan)",
    "Fuerza sobrenatural (+10 a Fuerza temporalmente)",
    "Genio loco (INT 20 pero WIS 3)",
    "Velocidad del viento (doble velocidad de movimiento)",
    "Piel de hierro (AC +5 natural)",
    "Teletransportación caótica (al azar)",
    "Suerte del caos (crítico en 15-20)",
];

pub const CHAOS_EQUIPMENT: [&str; 10] = [
    "Espada del Caos (+∞ daño, -∞ control)",
    "Escudo de gelatina (AC ±1d20)",
    "Arco que dispara pescados",
    "Poción de transformación aleatoria",
    "Pergamino de confusión masiva",
    "Orbe de desastres",
    "Corona de locura",
    "Trompeta ensordecedora",
    "Barril infinito de cerveza",
    "Pollo mascota parlante",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Uniform 3..=18 scores, chaos name, features and gear
    pub chaos: bool,
}

impl GenerationOptions {
    pub fn chaos() -> Self {
        Self { chaos: true }
    }
}

/// Choices the caller pins down; `None` means "pick at random".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedChoices {
    pub race: Option<String>,
    pub class: Option<String>,
    pub background: Option<String>,
    pub alignment: Option<Alignment>,
    pub name: Option<String>,
}

fn pick<'t, T>(items: &'t [T], rng: &mut impl FnMut(i32, i32) -> i32) -> Option<&'t T> {
    if items.is_empty() {
        return None;
    }
    let last = i32::try_from(items.len() - 1).unwrap_or(i32::MAX);
    let index = usize::try_from(rng(0, last)).unwrap_or(0);
    items.get(index.min(items.len() - 1))
}

/// `count` distinct entries of `items`, in draw order.
fn pick_distinct<T: Clone>(
    items: &[T],
    count: usize,
    rng: &mut impl FnMut(i32, i32) -> i32,
) -> Vec<T> {
    let mut pool: Vec<T> = items.to_vec();
    let mut picked = Vec::with_capacity(count.min(pool.len()));
    while picked.len() < count && !pool.is_empty() {
        let last = i32::try_from(pool.len() - 1).unwrap_or(i32::MAX);
        let index = usize::try_from(rng(0, last)).unwrap_or(0).min(pool.len() - 1);
        picked.push(pool.swap_remove(index));
    }
    picked
}

pub fn random_name(rng: &mut impl FnMut(i32, i32) -> i32) -> String {
    let first = pick(&FIRST_NAMES, rng).copied().unwrap_or("Aventurero");
    let last = pick(&LAST_NAMES, rng).copied().unwrap_or("Sin Nombre");
    format!("{} {}", first, last)
}

pub struct RandomCharacterGenerator<'a> {
    tables: &'a ReferenceTables,
}

impl<'a> RandomCharacterGenerator<'a> {
    pub fn new(tables: &'a ReferenceTables) -> Self {
        Self { tables }
    }

    /// Draw a complete request. Fixed keys are checked against the tables.
    pub fn request(
        &self,
        fixed: &FixedChoices,
        options: GenerationOptions,
        rng: &mut impl FnMut(i32, i32) -> i32,
    ) -> Result<CharacterRequest, DomainError> {
        let race = match &fixed.race {
            Some(key) => self.tables.race(key)?,
            None => pick(self.tables.races(), rng)
                .ok_or_else(|| DomainError::validation("The race table is empty"))?,
        };
        let class = match &fixed.class {
            Some(key) => self.tables.class(key)?,
            None => pick(self.tables.classes(), rng)
                .ok_or_else(|| DomainError::validation("The class table is empty"))?,
        };
        let background = match &fixed.background {
            Some(key) => self.tables.background(key)?,
            None => pick(self.tables.backgrounds(), rng)
                .ok_or_else(|| DomainError::validation("The background table is empty"))?,
        };
        let alignment = match fixed.alignment {
            Some(alignment) => alignment,
            None => pick(&Alignment::ALL, rng)
                .copied()
                .unwrap_or(Alignment::TrueNeutral),
        };

        let fixed_name = fixed
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string);

        let request = if options.chaos {
            let scores = chaos_scores(rng);
            let name = fixed_name.unwrap_or_else(|| format!("CHAOS-{}", rng(0, 9998)));

            let feature_count = usize::try_from(rng(2, 4)).unwrap_or(2);
            let features = pick_distinct(&CHAOS_FEATURES, feature_count, rng)
                .into_iter()
                .map(str::to_string)
                .collect();

            let item_count = rng(3, 7);
            let equipment = (0..item_count)
                .filter_map(|_| pick(&CHAOS_EQUIPMENT, rng).map(|s| s.to_string()))
                .collect();

            CharacterRequest::new(&race.name, &class.name, &background.name, alignment, scores)
                .with_method(GenerationMethod::Chaos)
                .with_name(name)
                .with_extra_features(features)
                .with_equipment(equipment)
        } else {
            let scores = roll_scores(Some(&class.stat_priority), rng);
            let name = fixed_name.unwrap_or_else(|| random_name(rng));
            CharacterRequest::new(&race.name, &class.name, &background.name, alignment, scores)
                .with_method(GenerationMethod::DiceRoll)
                .with_name(name)
        };
        Ok(request)
    }

    /// Draw a request and assemble it.
    pub fn generate(
        &self,
        fixed: &FixedChoices,
        options: GenerationOptions,
        id: CharacterId,
        now: DateTime<Utc>,
        assembly: AssemblyOptions,
        rng: &mut impl FnMut(i32, i32) -> i32,
    ) -> Result<Character, DomainError> {
        let request = self.request(fixed, options, rng)?;
        Character::assemble(self.tables, request, id, now, assembly)
    }
}
