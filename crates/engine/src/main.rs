//! Character Forge - command line entry point.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use forge_domain::{
    standard_array, Alignment, Character, CharacterRequest, FixedChoices, GenerationMethod,
    GenerationOptions, CREATURE_TYPES, ENVIRONMENTS,
};
use forge_engine::infrastructure::export::{render_sheet, write_export, ExportFormat};
use forge_engine::use_cases::EncounterReport;
use forge_engine::{App, ForgeConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "\
Usage: forge [--json] <command>

Commands:
  random                                   random balanced character
  chaos                                    random chaos character
  custom <race> <class> <background> [name]
                                           standard array by class priority
  encounter <party_size> <cr-or-creature>...
                                           encounter difficulty
  history                                  saved characters, newest first
  sheet <id>                               text sheet of a saved character
  export <id> [dir]                        write JSON and text files
  import <file>                            add an exported JSON file to history
  tables                                   races, classes, backgrounds, creatures";

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment from repo root when run through cargo.
    load_dotenv_from_repo_root();
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout stays parseable.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "forge_engine=info,forge_domain=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let json = take_flag(&mut args, "--json");
    let Some(command) = args.first().cloned() else {
        println!("{USAGE}");
        return Ok(());
    };
    let rest = &args[1..];

    let config = ForgeConfig::from_env();
    let app = App::from_config(config)
        .await
        .context("Failed to initialise the engine")?;

    match command.as_str() {
        "random" | "chaos" => {
            let options = if command == "chaos" {
                GenerationOptions::chaos()
            } else {
                GenerationOptions::default()
            };
            let character = app
                .use_cases
                .character
                .create_random(options, &FixedChoices::default())
                .await?;
            print_character(&app, &character, json).await?;
        }
        "custom" => {
            let [race, class, background, name @ ..] = rest else {
                bail!("custom needs <race> <class> <background> [name]\n\n{USAGE}");
            };
            let priority = app.tables.class(class)?.stat_priority;
            let mut request = CharacterRequest::new(
                race.as_str(),
                class.as_str(),
                background.as_str(),
                Alignment::TrueNeutral,
                standard_array(Some(&priority)),
            )
            .with_method(GenerationMethod::StandardArray);
            if !name.is_empty() {
                request = request.with_name(name.join(" "));
            }
            let character = app.use_cases.character.create_custom(request).await?;
            print_character(&app, &character, json).await?;
        }
        "encounter" => {
            let Some((party, creatures)) = rest.split_first() else {
                bail!("encounter needs <party_size> <cr-or-creature>...\n\n{USAGE}");
            };
            let party_size: u32 = party
                .parse()
                .with_context(|| format!("Invalid party size: {party}"))?;
            let report = app.use_cases.encounter.evaluate(creatures, party_size).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_encounter(&report);
            }
        }
        "history" => {
            let characters = app.use_cases.character.history().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&characters)?);
            } else if characters.is_empty() {
                println!("No characters saved yet.");
            } else {
                for c in &characters {
                    println!(
                        "{}  {:<28} {} {} ({})",
                        c.id(),
                        c.name().as_str(),
                        c.race(),
                        c.class(),
                        c.created_at().format("%Y-%m-%d %H:%M")
                    );
                }
            }
        }
        "sheet" => {
            let Some(id) = rest.first() else {
                bail!("sheet needs <id>");
            };
            let character = app.use_cases.character.find(id).await?;
            print_character(&app, &character, json).await?;
        }
        "export" => {
            let Some(id) = rest.first() else {
                bail!("export needs <id> [dir]");
            };
            let dir = rest.get(1).map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));
            let character = app.use_cases.character.find(id).await?;
            for format in [ExportFormat::Json, ExportFormat::Sheet] {
                let path = write_export(&dir, &character, format).await?;
                println!("{}", path.display());
            }
        }
        "import" => {
            let Some(file) = rest.first() else {
                bail!("import needs <file>");
            };
            let text = tokio::fs::read_to_string(file)
                .await
                .with_context(|| format!("Failed to read {file}"))?;
            let character = app.use_cases.character.import(&text).await?;
            println!("Imported {} ({})", character.name(), character.id());
        }
        "tables" => print_tables(&app, json)?,
        "help" | "--help" | "-h" => println!("{USAGE}"),
        other => bail!("Unknown command: {other}\n\n{USAGE}"),
    }

    Ok(())
}

fn take_flag(args: &mut Vec<String>, flag: &str) -> bool {
    let before = args.len();
    args.retain(|a| a != flag);
    args.len() != before
}

async fn print_character(app: &App, character: &Character, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(character)?);
        return Ok(());
    }
    println!("{}", render_sheet(character));

    let spells = app.use_cases.enrichment.spells_for(character).await;
    if !spells.is_empty() {
        println!();
        println!("CONJUROS DE CLASE ({})", spells.len());
        for spell in spells.iter().take(20) {
            let level = match spell.level {
                0 => "truco".to_string(),
                n => format!("nivel {n}"),
            };
            println!("- {} ({})", spell.name, level);
        }
    }
    Ok(())
}

fn print_encounter(report: &EncounterReport) {
    for entry in &report.entries {
        println!(
            "{:<24} CR {:<4} {:>7} XP",
            entry.label, entry.challenge_rating, entry.xp
        );
    }
    let d = &report.difficulty;
    println!();
    println!("Party size: {}", report.party_size);
    println!("Total XP:   {}", d.total_xp);
    println!("Threshold:  {}", d.threshold);
    println!("Difficulty: {} ({})", d.tier, d.tier.as_str());
}

fn print_tables(app: &App, json: bool) -> Result<()> {
    let bestiary = app.use_cases.encounter.bestiary();
    if json {
        let value = serde_json::json!({
            "tables": &*app.tables,
            "creatures": bestiary,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("Razas:");
    for race in app.tables.races() {
        println!("  {:<12} {} ft, {}", race.name, race.speed, race.size);
    }
    println!("Clases:");
    for class in app.tables.classes() {
        println!("  {:<12} d{}, {}", class.name, class.hit_die, class.primary_ability);
    }
    println!("Trasfondos: {}", app.tables.background_names().join(", "));
    println!("Alineamientos: {}", Alignment::ALL.map(|a| a.display_name()).join(", "));
    println!("Criaturas:");
    for creature in bestiary.creatures() {
        println!(
            "  {:<20} CR {:<4} {} ({})",
            creature.name, creature.challenge_rating, creature.creature_type, creature.size
        );
    }
    println!("Tipos: {}", CREATURE_TYPES.join(", "));
    println!("Entornos: {}", ENVIRONMENTS.join(", "));
    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
