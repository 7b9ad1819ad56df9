use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use placestore::config::Config;
use placestore::{logger, Database, Place};

/// Inspect and import places in a placestore database.
#[derive(Parser, Debug)]
#[command(name = "placestore", version, about)]
struct Cli {
    /// Configuration file (defaults to ./placestore.toml, then the user config directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the id of every stored place
    ListIds,
    /// Load places with their categories and print them as JSON
    Show { ids: Vec<String> },
    /// Load categories and print them as JSON
    Categories { ids: Vec<String> },
    /// Persist the places in a JSON file (an array of places)
    Import { file: PathBuf },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;
    logger::init(&config.logging)?;

    let db = Database::connect(&config.store)
        .await
        .with_context(|| format!("Failed to open store at {}", config.store.database_url))?;

    match cli.command {
        Command::ListIds => {
            for id in db.places.list_all_ids().await? {
                println!("{id}");
            }
        }
        Command::Show { ids } => {
            let places = db.places.load(&ids).await?;
            println!("{}", serde_json::to_string_pretty(&places)?);
        }
        Command::Categories { ids } => {
            let categories = db.categories.load(&ids).await?;
            println!("{}", serde_json::to_string_pretty(&categories)?);
        }
        Command::Import { file } => {
            let content = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read import file: {}", file.display()))?;
            let mut places: Vec<Place> = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse import file: {}", file.display()))?;

            for place in places.iter_mut().filter(|place| place.id.is_empty()) {
                place.id = uuid::Uuid::new_v4().to_string();
            }

            let persisted = db.places.persist(places).await?;
            info!("Imported {} places from {}", persisted.len(), file.display());
            println!("✅ Imported {} places", persisted.len());
        }
    }

    Ok(())
}
