//! Plain-text character sheet.

use std::fmt;

use forge_domain::rules::signed;
use forge_domain::{Ability, Character};

const RULE: &str = "===============================================================";

fn spanish_abbreviation(ability: Ability) -> &'static str {
    match ability {
        Ability::Strength => "FUE",
        Ability::Dexterity => "DES",
        Ability::Constitution => "CON",
        Ability::Intelligence => "INT",
        Ability::Wisdom => "SAB",
        Ability::Charisma => "CAR",
    }
}

/// Display adapter rendering a character as a text sheet.
pub struct CharacterSheet<'a>(pub &'a Character);

impl CharacterSheet<'_> {
    fn section(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "{title}")?;
        writeln!(f, "{RULE}")?;
        writeln!(f)
    }

    fn bullets(f: &mut fmt::Formatter<'_>, items: &[String]) -> fmt::Result {
        for item in items {
            writeln!(f, "- {item}")?;
        }
        Ok(())
    }
}

impl fmt::Display for CharacterSheet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.0;

        writeln!(f, "{RULE}")?;
        writeln!(f, "FICHA DE PERSONAJE - D&D 5e")?;
        writeln!(f, "{RULE}")?;
        writeln!(f)?;
        writeln!(f, "NOMBRE: {}", c.name())?;
        writeln!(f, "RAZA: {}", c.race())?;
        writeln!(f, "CLASE: {}", c.class())?;
        writeln!(f, "TRASFONDO: {}", c.background())?;
        writeln!(f, "ALINEAMIENTO: {}", c.alignment().display_name())?;
        writeln!(f, "NIVEL: {}", c.level())?;
        writeln!(f, "PODER: {}", c.power_level().display_name())?;

        Self::section(f, "CARACTERÍSTICAS")?;
        for (ability, score) in c.ability_scores().iter() {
            writeln!(
                f,
                "{}: {} ({})",
                spanish_abbreviation(ability),
                score,
                signed(c.ability_scores().modifier(ability))
            )?;
        }
        let saves: Vec<String> = c
            .saving_throws()
            .iter()
            .map(|a| format!("{} {}", spanish_abbreviation(*a), signed(c.saving_throw(*a))))
            .collect();
        writeln!(f)?;
        writeln!(f, "SALVACIONES: {}", saves.join(", "))?;

        Self::section(f, "COMBATE")?;
        writeln!(f, "PUNTOS DE GOLPE: {}/{}", c.hit_points(), c.hit_points())?;
        writeln!(f, "DADO DE GOLPE: d{}", c.hit_die())?;
        writeln!(f, "CLASE DE ARMADURA: {}", c.armor_class())?;
        writeln!(f, "INICIATIVA: {}", signed(c.initiative()))?;
        writeln!(f, "VELOCIDAD: {} ft", c.speed())?;
        writeln!(f, "BONIFICADOR DE COMPETENCIA: {}", signed(c.proficiency_bonus()))?;

        Self::section(f, "RASGOS")?;
        Self::bullets(f, c.racial_traits())?;
        Self::bullets(f, c.class_features())?;
        writeln!(f, "- {}", c.background_feature())?;

        Self::section(f, "EQUIPO")?;
        Self::bullets(f, c.equipment())?;
        Self::bullets(f, c.background_equipment())?;

        if !c.features().is_empty() {
            Self::section(f, "CARACTERÍSTICAS ESPECIALES")?;
            Self::bullets(f, c.features())?;
        }

        Self::section(f, "HISTORIA")?;
        writeln!(f, "{}", c.backstory())?;

        writeln!(f)?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "Creado: {}", c.created_at().format("%Y-%m-%d %H:%M"))?;
        writeln!(f, "ID: {}", c.id())?;
        write!(f, "{RULE}")
    }
}

/// Render `character` as a plain-text sheet.
pub fn render_sheet(character: &Character) -> String {
    CharacterSheet(character).to_string()
}
