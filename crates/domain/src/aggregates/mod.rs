//! Aggregate roots
//!
//! | Pattern | Here |
//! |---------|------|
//! | Private fields + getters | [`Character`] is valid by construction |
//! | Factory | [`Character::assemble`] from a [`CharacterRequest`] |
//! | Immutability | edits return a new value ([`Character::with_abilities`]) |

pub mod character;

pub use character::{
    AssemblyOptions, Character, CharacterRequest, DerivedStats, PowerLevel, STARTING_EQUIPMENT,
    STARTING_LEVEL,
};
