//! Creature stat blocks and the built-in bestiary.

use serde::{Deserialize, Serialize};

use super::ChallengeRating;
use crate::error::DomainError;
use crate::tables::Size;
use crate::value_objects::AbilityScores;

pub const CREATURE_TYPES: [&str; 14] = [
    "Aberración",
    "Bestia",
    "Celestial",
    "Constructo",
    "Dragón",
    "Elemental",
    "Feérico",
    "Demonio",
    "Gigante",
    "Humanoide",
    "Monstruosidad",
    "Cieno",
    "Planta",
    "No-muerto",
];

pub const ENVIRONMENTS: [&str; 13] = [
    "Mazmorra",
    "Bosque",
    "Montaña",
    "Pantano",
    "Desierto",
    "Subterráneo",
    "Ciudad",
    "Costa",
    "Ártico",
    "Plano Abismal",
    "Caverna",
    "Ruinas",
    "Torre",
];

/// A monster stat block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creature {
    pub name: String,
    pub creature_type: String,
    pub challenge_rating: ChallengeRating,
    pub size: Size,
    pub alignment: String,
    pub armor_class: i32,
    pub hit_points: i32,
    pub speed: String,
    pub abilities: AbilityScores,
    pub environments: Vec<String>,
    pub traits: Vec<String>,
    pub actions: Vec<String>,
    #[serde(default)]
    pub legendary_actions: Vec<String>,
}

impl Creature {
    pub fn xp(&self) -> u64 {
        self.challenge_rating.xp()
    }

    pub fn is_legendary(&self) -> bool {
        !self.legendary_actions.is_empty()
    }

    pub fn lives_in(&self, environment: &str) -> bool {
        self.environments
            .iter()
            .any(|e| e.eq_ignore_ascii_case(environment.trim()))
    }
}

/// A searchable set of creatures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bestiary {
    creatures: Vec<Creature>,
}

impl Bestiary {
    pub fn new(creatures: Vec<Creature>) -> Result<Self, DomainError> {
        for (i, creature) in creatures.iter().enumerate() {
            if creature.name.trim().is_empty() {
                return Err(DomainError::validation("Creature name cannot be empty"));
            }
            if creatures[..i]
                .iter()
                .any(|c| c.name.eq_ignore_ascii_case(&creature.name))
            {
                return Err(DomainError::validation(format!(
                    "Duplicate creature: {}",
                    creature.name
                )));
            }
        }
        Ok(Self { creatures })
    }

    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        let creatures: Vec<Creature> =
            serde_json::from_str(json).map_err(|e| DomainError::parse(e.to_string()))?;
        Self::new(creatures)
    }

    pub fn builtin() -> Self {
        Self {
            creatures: builtin_creatures(),
        }
    }

    pub fn creatures(&self) -> &[Creature] {
        &self.creatures
    }

    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }

    /// Look up a creature by name, exact first, then ignoring case.
    pub fn get(&self, name: &str) -> Result<&Creature, DomainError> {
        let key = name.trim();
        self.creatures
            .iter()
            .find(|c| c.name == key)
            .or_else(|| {
                self.creatures
                    .iter()
                    .find(|c| c.name.to_lowercase() == key.to_lowercase())
            })
            .ok_or_else(|| DomainError::invalid_key("creature", key))
    }

    pub fn by_environment<'a>(&'a self, environment: &'a str) -> impl Iterator<Item = &'a Creature> {
        self.creatures.iter().filter(move |c| c.lives_in(environment))
    }

    pub fn by_type<'a>(&'a self, creature_type: &'a str) -> impl Iterator<Item = &'a Creature> {
        let wanted = creature_type.trim().to_lowercase();
        self.creatures
            .iter()
            .filter(move |c| c.creature_type.to_lowercase() == wanted)
    }

    /// Creatures whose rating falls within `min..=max`, lowest first.
    pub fn by_challenge(&self, min: ChallengeRating, max: ChallengeRating) -> Vec<&Creature> {
        let mut found: Vec<&Creature> = self
            .creatures
            .iter()
            .filter(|c| (min..=max).contains(&c.challenge_rating))
            .collect();
        found.sort_by_key(|c| c.challenge_rating);
        found
    }
}

impl Default for Bestiary {
    fn default() -> Self {
        Self::builtin()
    }
}

// =============================================================================
// Built-in creatures
// =============================================================================

struct Block {
    name: &'static str,
    creature_type: &'static str,
    cr: &'static str,
    size: Size,
    alignment: &'static str,
    armor_class: i32,
    hit_points: i32,
    speed: &'static str,
    abilities: [i32; 6],
    environments: &'static [&'static str],
    traits: &'static [&'static str],
    actions: &'static [&'static str],
    legendary_actions: &'static [&'static str],
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

impl From<Block> for Creature {
    fn from(b: Block) -> Self {
        Self {
            name: b.name.to_string(),
            creature_type: b.creature_type.to_string(),
            challenge_rating: ChallengeRating::parse(b.cr).unwrap_or(ChallengeRating::ZERO),
            size: b.size,
            alignment: b.alignment.to_string(),
            armor_class: b.armor_class,
            hit_points: b.hit_points,
            speed: b.speed.to_string(),
            abilities: AbilityScores::new(b.abilities),
            environments: owned(b.environments),
            traits: owned(b.traits),
            actions: owned(b.actions),
            legendary_actions: owned(b.legendary_actions),
        }
    }
}

fn builtin_creatures() -> Vec<Creature> {
    let blocks = [
        Block {
            name: "Goblin",
            creature_type: "Humanoide",
            cr: "1/4",
            size: Size::Small,
            alignment: "Neutral malvado",
            armor_class: 15,
            hit_points: 7,
            speed: "30 ft",
            abilities: [8, 14, 10, 10, 8, 8],
            environments: &["Bosque", "Mazmorra", "Ciudad"],
            traits: &["Evasión Ágil: puede Desengancharse o Esconderse como acción adicional."],
            actions: &[
                "Hoja curva: +4, 1d6 + 2 daño cortante.",
                "Arco corto: +4, 1d6 + 2 daño perforante.",
            ],
            legendary_actions: &[],
        },
        Block {
            name: "Orco",
            creature_type: "Humanoide",
            cr: "1/2",
            size: Size::Medium,
            alignment: "Caótico malvado",
            armor_class: 13,
            hit_points: 15,
            speed: "40 ft",
            abilities: [16, 12, 16, 7, 11, 10],
            environments: &["Montaña", "Llanura"],
            traits: &["Agresividad: como acción adicional, puede moverse hasta su velocidad hacia una criatura hostil."],
            actions: &["Hacha de mano: +5, 1d6 + 3 daño cortante."],
            legendary_actions: &[],
        },
        Block {
            name: "Trol",
            creature_type: "Gigante",
            cr: "5",
            size: Size::Large,
            alignment: "Caótico malvado",
            armor_class: 15,
            hit_points: 84,
            speed: "30 ft",
            abilities: [18, 13, 20, 7, 9, 7],
            environments: &["Pantano", "Caverna", "Montaña"],
            traits: &["Regeneración: recupera 10 PG al inicio de su turno si no ha recibido daño de fuego o ácido."],
            actions: &[
                "Multiataque: una mordida y dos zarpazos.",
                "Mordida: +7, 1d6 + 4 daño perforante.",
                "Zarpazo: +7, 2d6 + 4 daño cortante.",
            ],
            legendary_actions: &[],
        },
        Block {
            name: "Dragón Rojo Joven",
            creature_type: "Dragón",
            cr: "10",
            size: Size::Large,
            alignment: "Caótico malvado",
            armor_class: 18,
            hit_points: 178,
            speed: "40 ft, vuelo 80 ft",
            abilities: [23, 10, 21, 14, 11, 19],
            environments: &["Montaña", "Caverna"],
            traits: &["Sentido Ciego 30 ft", "Percepción Pasiva 21"],
            actions: &[
                "Multiataque: tres ataques, uno con mordida y dos con garras.",
                "Mordida: +10, 2d6 + 7 daño perforante + 1d6 fuego.",
                "Aliento de Fuego: cono de 30 ft, CD 17, 12d6 daño de fuego.",
            ],
            legendary_actions: &[],
        },
        Block {
            name: "Liche",
            creature_type: "No-muerto",
            cr: "21",
            size: Size::Medium,
            alignment: "Legal malvado",
            armor_class: 17,
            hit_points: 135,
            speed: "30 ft",
            abilities: [11, 16, 16, 20, 14, 16],
            environments: &["Torre", "Mazmorra", "Ruinas"],
            traits: &[
                "Toque Paralizador: salvación de CON CD 18 o queda paralizado.",
                "Resistencia a la Expulsión",
            ],
            actions: &["Toque Paralizador: +10, 3d6 + 5 daño de frío."],
            legendary_actions: &[
                "Cantar Hechizo",
                "Movimiento de Invocación",
                "Toque Paralizador",
            ],
        },
    ];
    blocks.into_iter().map(Creature::from).collect()
}
