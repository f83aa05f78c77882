//! Built-in 5e reference data.

use super::{BackgroundDefinition, ClassDefinition, RaceDefinition, Size};
use crate::value_objects::Ability::{self, *};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn race(
    name: &str,
    speed: i32,
    size: Size,
    typical_alignment: &str,
    languages: &[&str],
    traits: &[&str],
    subraces: &[&str],
    description: &str,
) -> RaceDefinition {
    RaceDefinition {
        name: name.to_string(),
        speed,
        size,
        typical_alignment: typical_alignment.to_string(),
        languages: strings(languages),
        traits: strings(traits),
        subraces: strings(subraces),
        description: description.to_string(),
    }
}

pub(super) fn races() -> Vec<RaceDefinition> {
    vec![
        race(
            "Humano",
            30,
            Size::Medium,
            "Cualquiera",
            &["Común"],
            &[
                "+1 a todas las características",
                "Idioma adicional de tu elección",
                "Dote adicional en nivel 1",
            ],
            &[],
            "Los humanos son versátiles y ambiciosos. Viven poco en comparación con otras razas, pero logran mucho en ese tiempo.",
        ),
        race(
            "Elfo",
            30,
            Size::Medium,
            "Típicamente caótico",
            &["Común", "Élfico"],
            &[
                "Visión en la oscuridad (60 ft)",
                "Ventaja contra encantamiento",
                "Inmune a sueño mágico",
                "Percepción competente",
            ],
            &["Alto", "Bosque", "Oscuro"],
            "Los elfos son un pueblo hermoso y elegante, magnífico en su arte y saber.",
        ),
        race(
            "Enano",
            25,
            Size::Medium,
            "Típicamente legal",
            &["Común", "Enano"],
            &[
                "Visión en la oscuridad (60 ft)",
                "Ventaja contra veneno",
                "Competente con herramientas de artesano",
                "Conocimiento de piedra",
            ],
            &["Montaña", "Colina"],
            "Los enanos son guerreros robustos que resultan ser excelentes mineros. Su capacidad para el trabajo es famosa en todo el reino.",
        ),
        race(
            "Mediano",
            25,
            Size::Small,
            "Típicamente legal",
            &["Común", "Medianos"],
            &[
                "+2 Destreza",
                "Afortunado: repite 1s en dados de ataque",
                "Valiente: ventaja contra miedo",
                "Agilidad mediana: atravesar criaturas grandes",
            ],
            &["Pies Ligeros", "Robustos"],
            "Los medianos son pueblos pequeños pero resistentes, conocidos por su suerte y ingenio.",
        ),
        race(
            "Orco",
            30,
            Size::Medium,
            "Típicamente caótico",
            &["Común", "Orco"],
            &[
                "+2 Fuerza, +1 Constitución",
                "Visión en la oscuridad (60 ft)",
                "Agresivo: bonus action para moverse",
                "Amenazador: competente en Intimidación",
            ],
            &[],
            "Los orcos son los hijos de Gruumsh, de gran estatura, fuerza y poder.",
        ),
        race(
            "Tiefling",
            30,
            Size::Medium,
            "Típicamente caótico",
            &["Común", "Infernal"],
            &[
                "+2 Carisma, +1 Inteligencia",
                "Visión en la oscuridad (60 ft)",
                "Resistencia infernal: resistencia a fuego",
                "Legado infernal: magia innata",
            ],
            &[],
            "Los tieflings son descendientes parcialmente infernales, distinguidos por su apariencia demoníaca.",
        ),
        race(
            "Dracónido",
            30,
            Size::Medium,
            "Típicamente legal",
            &["Común", "Dracónico"],
            &[
                "+2 Fuerza, +1 Carisma",
                "Ancestro dracónico: resistencia elemental",
                "Arma de aliento: 1 uso por descanso corto",
                "Daño del aliento: 2d6",
            ],
            &[],
            "Los dracónidos son descendientes de dragones con cuerpos humanoides.",
        ),
        race(
            "Gnomo",
            25,
            Size::Small,
            "Típicamente neutral",
            &["Común", "Gnómico"],
            &[
                "+2 Inteligencia",
                "Visión en la oscuridad (60 ft)",
                "Astucia gnómica: ventaja vs magia",
                "Pequeño pero valiente",
            ],
            &["Bosque", "Roca"],
            "Los gnomos son criaturas brillantes y maestros de la ingeniería.",
        ),
        race(
            "Semielfo",
            30,
            Size::Medium,
            "Típicamente caótico",
            &["Común", "Élfico"],
            &[
                "+2 Carisma, +1 a otras dos características",
                "Visión en la oscuridad (60 ft)",
                "Ventaja contra encantamiento",
                "Dos habilidades adicionales competentes",
            ],
            &[],
            "Los semielfos tienen la flexibilidad del carácter humano y el potencial artístico de los elfos.",
        ),
        race(
            "Semiorco",
            30,
            Size::Medium,
            "Típicamente caótico",
            &["Común", "Orco"],
            &[
                "+2 Fuerza, +1 Constitución",
                "Visión en la oscuridad (60 ft)",
                "Amenazador: competente en Intimidación",
                "Resistencia implacable: 1/día quedar con 1 HP",
            ],
            &[],
            "Los semiorcos tienen la agilidad de los humanos y el poder de los orcos.",
        ),
    ]
}

struct ClassRow<'a> {
    name: &'a str,
    hit_die: u8,
    primary_ability: &'a str,
    saving_throws: [Ability; 2],
    proficiencies: &'a [&'a str],
    skill_choices: &'a str,
    features: &'a [&'a str],
    spellcasting: bool,
    description: &'a str,
    stat_priority: [Ability; 6],
}

impl From<ClassRow<'_>> for ClassDefinition {
    fn from(row: ClassRow<'_>) -> Self {
        ClassDefinition {
            name: row.name.to_string(),
            hit_die: row.hit_die,
            primary_ability: row.primary_ability.to_string(),
            saving_throws: row.saving_throws.to_vec(),
            proficiencies: strings(row.proficiencies),
            skill_choices: row.skill_choices.to_string(),
            features: strings(row.features),
            spellcasting: row.spellcasting,
            description: row.description.to_string(),
            stat_priority: row.stat_priority,
        }
    }
}

const MARTIAL_PRIORITY: [Ability; 6] = [
    Strength,
    Constitution,
    Dexterity,
    Wisdom,
    Charisma,
    Intelligence,
];

pub(super) fn classes() -> Vec<ClassDefinition> {
    let specs = [
        ClassRow {
            name: "Guerrero",
            hit_die: 10,
            primary_ability: "Fuerza o Destreza",
            saving_throws: [Strength, Constitution],
            proficiencies: &["Todas las armaduras", "Todos los escudos", "Todas las armas"],
            skill_choices: "Elige 2: Acrobacias, Trato con animales, Atletismo, Historia, Perspicacia, Intimidación, Percepción, Supervivencia",
            features: &["Segundo aliento", "Estilo de lucha", "Oleada de acción", "Ataque extra"],
            spellcasting: false,
            description: "Un guerrero adiestrado en combate, maestro de armas y armadura.",
            stat_priority: MARTIAL_PRIORITY,
        },
        ClassRow {
            name: "Mago",
            hit_die: 6,
            primary_ability: "Inteligencia",
            saving_throws: [Intelligence, Wisdom],
            proficiencies: &["Armas simples", "Dagas, dardos, hondas, bastones, ballestas ligeras"],
            skill_choices: "Elige 2: Arcana, Historia, Perspicacia, Investigación, Medicina, Religión",
            features: &["Lanzamiento de conjuros", "Libro de conjuros", "Recuperación arcana", "Tradición arcana"],
            spellcasting: true,
            description: "Un erudito practicante del arte arcano, maestro de la magia.",
            stat_priority: [Intelligence, Constitution, Dexterity, Wisdom, Charisma, Strength],
        },
        ClassRow {
            name: "Pícaro",
            hit_die: 8,
            primary_ability: "Destreza",
            saving_throws: [Dexterity, Intelligence],
            proficiencies: &["Armadura ligera", "Armas simples", "Ballestas de mano, estoques, espadas cortas"],
            skill_choices: "Elige 4: Acrobacias, Atletismo, Engaño, Perspicacia, Intimidación, Investigación, Percepción, Interpretación, Persuasión, Juego de manos, Sigilo",
            features: &["Ataque furtivo", "Pericia", "Acción astuta", "Esquiva asombrosa", "Evasión"],
            spellcasting: false,
            description: "Un experto en sigilo y emboscadas, maestro de la destreza.",
            stat_priority: [Dexterity, Intelligence, Constitution, Charisma, Wisdom, Strength],
        },
        ClassRow {
            name: "Clérigo",
            hit_die: 8,
            primary_ability: "Sabiduría",
            saving_throws: [Wisdom, Charisma],
            proficiencies: &["Armadura ligera, media y escudos", "Armas simples"],
            skill_choices: "Elige 2: Historia, Perspicacia, Medicina, Persuasión, Religión",
            features: &["Lanzamiento de conjuros", "Dominio divino", "Canalizar divinidad", "Imposición de manos"],
            spellcasting: true,
            description: "Un devoto de una deidad, un mediador entre el mundo mortal y el divino.",
            stat_priority: [Wisdom, Constitution, Strength, Charisma, Intelligence, Dexterity],
        },
        ClassRow {
            name: "Paladín",
            hit_die: 10,
            primary_ability: "Fuerza, Carisma",
            saving_throws: [Wisdom, Charisma],
            proficiencies: &["Todas las armaduras", "Todos los escudos", "Todas las armas"],
            skill_choices: "Elige 2: Atletismo, Perspicacia, Intimidación, Medicina, Persuasión, Religión",
            features: &["Imposición de manos", "Estilo de lucha", "Juramento sagrado", "Golpe divino", "Salud divina"],
            spellcasting: true,
            description: "Un guerrero consagrado, ligado a un juramento sagrado.",
            stat_priority: [Strength, Charisma, Constitution, Wisdom, Dexterity, Intelligence],
        },
        ClassRow {
            name: "Bárbaro",
            hit_die: 12,
            primary_ability: "Fuerza",
            saving_throws: [Strength, Constitution],
            proficiencies: &["Armadura ligera, media", "Escudos", "Todas las armas simples", "Todas las armas marciales"],
            skill_choices: "Elige 2: Trato con animales, Atletismo, Intimidación, Naturaleza, Percepción, Supervivencia",
            features: &["Furia", "Defensa sin armadura", "Ataque temerario", "Sentido del peligro"],
            spellcasting: false,
            description: "Un guerrero salvaje, alimentado por la ira primitiva.",
            stat_priority: MARTIAL_PRIORITY,
        },
        ClassRow {
            name: "Druida",
            hit_die: 8,
            primary_ability: "Sabiduría",
            saving_throws: [Intelligence, Wisdom],
            proficiencies: &["Armadura ligera, media (no metal)", "Escudos (no metal)", "Armas simples"],
            skill_choices: "Elige 2: Trato con animales, Arcana, Perspicacia, Medicina, Naturaleza, Percepción, Religión, Supervivencia",
            features: &["Lanzamiento de conjuros", "Forma salvaje", "Círculo druídico", "Mejora salvaje"],
            spellcasting: true,
            description: "Un guardián de la naturaleza, uno con el mundo salvaje.",
            stat_priority: [Wisdom, Constitution, Dexterity, Intelligence, Strength, Charisma],
        },
        ClassRow {
            name: "Bardo",
            hit_die: 8,
            primary_ability: "Carisma",
            saving_throws: [Dexterity, Charisma],
            proficiencies: &["Armadura ligera", "Armas simples", "Ballestas de mano, estoques, espadas cortas"],
            skill_choices: "Elige 3 cualquiera",
            features: &["Lanzamiento de conjuros", "Inspiración bárdica", "Canción de descanso", "Pericia", "Colegio de bardos"],
            spellcasting: true,
            description: "Un hechicero músico, un tejedor de magia y palabra.",
            stat_priority: [Charisma, Dexterity, Constitution, Intelligence, Wisdom, Strength],
        },
        ClassRow {
            name: "Monje",
            hit_die: 8,
            primary_ability: "Destreza o Sabiduría",
            saving_throws: [Strength, Dexterity],
            proficiencies: &["Armas simples", "Estoques cortos"],
            skill_choices: "Elige 2: Acrobacias, Atletismo, Historia, Perspicacia, Religión, Sigilo",
            features: &["Defensa sin armadura", "Artes marciales", "Ki", "Movimiento sin armadura", "Tradición monástica"],
            spellcasting: false,
            description: "Un maestro de combate desarmado, entrenado en el arte de la disciplina.",
            stat_priority: [Dexterity, Wisdom, Constitution, Strength, Intelligence, Charisma],
        },
        ClassRow {
            name: "Explorador",
            hit_die: 10,
            primary_ability: "Destreza, Sabiduría",
            saving_throws: [Strength, Dexterity],
            proficiencies: &["Armadura ligera, media", "Escudos", "Todas las armas simples", "Todas las armas marciales"],
            skill_choices: "Elige 3: Trato con animales, Atletismo, Perspicacia, Investigación, Naturaleza, Percepción, Sigilo, Supervivencia",
            features: &["Enemigo predilecto", "Explorador nato", "Estilo de lucha", "Lanzamiento de conjuros", "Arquetipo"],
            spellcasting: true,
            description: "Un aventurero de las tierras salvajes, maestro del rastreo y la caza.",
            stat_priority: [Dexterity, Wisdom, Constitution, Strength, Intelligence, Charisma],
        },
        ClassRow {
            name: "Brujo",
            hit_die: 8,
            primary_ability: "Carisma",
            saving_throws: [Wisdom, Charisma],
            proficiencies: &["Armadura ligera", "Armas simples"],
            skill_choices: "Elige 2: Arcana, Engaño, Historia, Intimidación, Investigación, Naturaleza, Religión",
            features: &["Lanzamiento de conjuros", "Pacto sobrenatural", "Característica de patrón", "Invocaciones arcanas"],
            spellcasting: true,
            description: "Un hacedor de pactos, que ha vendido su alma por poder sobrenatural.",
            stat_priority: [Charisma, Constitution, Dexterity, Intelligence, Wisdom, Strength],
        },
        ClassRow {
            name: "Hechicero",
            hit_die: 6,
            primary_ability: "Carisma",
            saving_throws: [Constitution, Charisma],
            proficiencies: &["Armas simples", "Dagas, dardos, hondas, bastones, ballestas ligeras"],
            skill_choices: "Elige 2: Arcana, Engaño, Perspicacia, Intimidación, Persuasión, Religión",
            features: &["Lanzamiento de conjuros", "Magia innata", "Origen sobrenatural", "Fuente de hechicería"],
            spellcasting: true,
            description: "Un poseedor de magia innata, un canalizador de poder arcano natural.",
            stat_priority: [Charisma, Constitution, Dexterity, Wisdom, Intelligence, Strength],
        },
    ];
    specs.into_iter().map(ClassDefinition::from).collect()
}

fn background(
    name: &str,
    skills: &[&str],
    tools: &[&str],
    equipment: &[&str],
    feature: &str,
) -> BackgroundDefinition {
    BackgroundDefinition {
        name: name.to_string(),
        skills: strings(skills),
        tools: strings(tools),
        equipment: strings(equipment),
        feature: feature.to_string(),
    }
}

pub(super) fn backgrounds() -> Vec<BackgroundDefinition> {
    vec![
        background(
            "Acolito",
            &["Perspicacia", "Religión"],
            &["Kit de herbolario"],
            &["Símbolo sagrado", "Libro de plegarias", "Ropa de religioso", "15 gp"],
            "Asilo seguro - Los templos te proporcionarán refugio y sustento",
        ),
        background(
            "Criminal",
            &["Engaño", "Sigilo"],
            &["Kit de herramientas de ladrón", "Dado"],
            &["Seda roja", "Kit de herramientas de ladrón", "Dado trucos", "15 gp"],
            "Contacto criminal - Tienes una conexión con la red criminal",
        ),
        background(
            "Folkheroi",
            &["Trato con animales", "Supervivencia"],
            &["Herramientas de artesano", "Vehículos (tierra)"],
            &["Hoz", "Manta de viajero", "10 gp"],
            "Rusticidad - Los pueblos te proporcionan refugio y alimento",
        ),
        background(
            "Noble",
            &["Perspicacia", "Persuasión"],
            &["Un juego de mesa o instrumento musical"],
            &["Fina ropa", "Sello de casa", "25 gp"],
            "Posición - Tienes conexiones e influencia en tu hogar",
        ),
        background(
            "Sabio",
            &["Arcana", "Historia"],
            &["Kit de escolástico"],
            &["Fina ropa", "Tintero", "Pergamino", "Libro de conocimiento", "10 gp"],
            "Investigador - Tienes acceso a las bibliotecas",
        ),
        background(
            "Soldado",
            &["Atletismo", "Intimidación"],
            &["Juegos de mesa o vehículos"],
            &["Uniforme militar", "Insignia de rango", "Manta de viajero", "10 gp"],
            "Rango militar - Tienes autoridad militar en tu ejército",
        ),
        background(
            "Charlatán",
            &["Engaño", "Juego de manos"],
            &["Kit de disfraz", "Kit de falsificación"],
            &["Ropa elegante", "Kit de disfraz", "Kit de falsificación", "15 gp"],
            "Falsificador de identidades - Puedes crear documentos falsos",
        ),
        background(
            "Aventurero",
            &["Atletismo", "Supervivencia"],
            &["Herramientas de escalada"],
            &["Mochila de explorador", "Cuerda de 50 pies", "10 gp"],
            "Explorador nato - Encuentras camino más fácilmente",
        ),
    ]
}
