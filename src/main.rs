use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use flashdeck::storage::{JsonFileStore, KeyValueStore, Persistence, UnavailableStore};
use flashdeck::{App, Config, Study, WordStore};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "flashdeck")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Card store file (defaults to store.json in the data directory)
    #[arg(long, global = true, value_name = "PATH")]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the cards in your deck
    List {
        /// Only show favorites
        #[arg(short, long)]
        favorites: bool,
    },
    /// Add a card
    Add {
        /// Term side
        front: String,
        /// Definition side
        back: String,
    },
    /// Remove a card by its number in `list`
    Remove {
        /// Card number (1-based)
        number: usize,
    },
    /// Toggle a card's favorite flag by its number in `list`
    Favorite {
        /// Card number (1-based)
        number: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The TUI owns the terminal, so it logs to a file instead
    init_logging(cli.command.is_none());

    let mut config = Config::load()?;
    if let Some(path) = cli.data {
        config.data_file = Some(path);
    }
    let store_path = config.store_path()?;

    match cli.command {
        Some(Commands::List { favorites }) => {
            // Read the deck only; restoring a view would write cursors back
            let words = WordStore::load(&mut Persistence::new(open_store(&store_path)?));
            for (i, card) in words.cards().iter().enumerate() {
                if favorites && !card.is_favorite {
                    continue;
                }
                let star = if card.is_favorite { '\u{2605}' } else { ' ' };
                println!("{:>4}. {} {} - {}", i + 1, star, card.front, card.back);
            }
        }
        Some(Commands::Add { front, back }) => {
            let mut study = Study::open(open_store(&store_path)?);
            study.add(&front, &back)?;
            ensure_saved(&study)?;
            println!("Added card #{}", study.cards().len());
        }
        Some(Commands::Remove { number }) => {
            let mut study = Study::open(open_store(&store_path)?);
            let id = card_at(&study, number)?;
            let card = study.delete(id)?;
            ensure_saved(&study)?;
            println!("Removed {} - {}", card.front, card.back);
        }
        Some(Commands::Favorite { number }) => {
            let mut study = Study::open(open_store(&store_path)?);
            let id = card_at(&study, number)?;
            let favorite = study.toggle_favorite(id)?;
            ensure_saved(&study)?;
            println!("Card #{} {}", number, if favorite { "favorited" } else { "unfavorited" });
        }
        None => {
            // Launch TUI; a broken store still gives a usable, unsaved session
            let store: Box<dyn KeyValueStore> = match JsonFileStore::open(&store_path) {
                Ok(store) => Box::new(store),
                Err(e) => {
                    tracing::warn!("Could not open {:?}: {}", store_path, e);
                    Box::new(UnavailableStore::new(e.to_string()))
                }
            };
            let mut app = App::new(config, Study::open(store))?;
            app.run()?;
        }
    }

    Ok(())
}

fn init_logging(to_file: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "flashdeck=info".into());
    let registry = tracing_subscriber::registry().with(filter);

    if !to_file {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
        return;
    }

    match open_log_file() {
        Ok(file) => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init(),
        // Nowhere to write that won't garble the screen
        Err(_) => registry.init(),
    }
}

fn open_log_file() -> Result<std::fs::File> {
    let path = Config::log_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {:?}", path))
}

fn open_store(path: &PathBuf) -> Result<JsonFileStore> {
    JsonFileStore::open(path).with_context(|| format!("Failed to open card store {:?}", path))
}

fn card_at<S: KeyValueStore>(study: &Study<S>, number: usize) -> Result<flashdeck::CardId> {
    match number.checked_sub(1).and_then(|i| study.cards().get(i)) {
        Some(card) => Ok(card.id),
        None => bail!("No card #{} (the deck has {} cards)", number, study.cards().len()),
    }
}

fn ensure_saved<S: KeyValueStore>(study: &Study<S>) -> Result<()> {
    match study.persistence_warning() {
        Some(warning) => Err(warning.into()),
        None => Ok(()),
    }
}
