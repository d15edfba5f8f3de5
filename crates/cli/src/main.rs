use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use filmshelf_agent::{FilmClient, SyncAgent};
use filmshelf_core::{DEFAULT_MIN_RATING, FILM_SOURCE_BASE_URL, default_catalog_path};
use filmshelf_storage::CatalogStore;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "filmshelf")]
#[command(about = "Personal movie catalog with external film-source import", long_about = None)]
struct Cli {
    /// Path to the backing catalog file (defaults to the platform data dir).
    #[arg(long, global = true)]
    data_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a title in the external film source and import it.
    Fetch {
        title: String,
    },
    /// Add a record manually.
    Add {
        title: String,
        #[arg(short, long)]
        genre: String,
        #[arg(short, long)]
        rating: f64,
        #[arg(short, long)]
        year: i32,
        #[arg(short, long)]
        watched: bool,
    },
    /// Print the full catalog.
    List,
    /// Records matching a genre, case-insensitively.
    Search {
        genre: String,
    },
    /// Records rated at or above a threshold.
    Recommend {
        #[arg(short, long, default_value_t = DEFAULT_MIN_RATING)]
        min_rating: f64,
    },
    /// Record and watched counts.
    Stats,
}

fn get_source_url() -> String {
    std::env::var("FILMSHELF_SOURCE_URL")
        .unwrap_or_else(|_| FILM_SOURCE_BASE_URL.to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();
    let data_path = cli.data_path.unwrap_or_else(default_catalog_path);

    if let Some(parent) = data_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    // Constructed once here and owned for the process lifetime; every
    // handler borrows the same instance.
    let mut store = CatalogStore::open(&data_path)?;
    tracing::debug!(path = %data_path.display(), movies = store.len(), "catalog opened");

    match cli.command {
        Commands::Fetch { title } => {
            let agent = SyncAgent::new(FilmClient::new(get_source_url())?);
            match agent.fetch_and_import(&mut store, &title).await? {
                Some(record) => println!("{}", serde_json::to_string_pretty(&record)?),
                None => {
                    eprintln!("movie not found in external source");
                    std::process::exit(1);
                },
            }
        },
        Commands::Add { title, genre, rating, year, watched } => {
            let record = store.add_movie(title, genre, rating, year, watched)?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        },
        Commands::List => {
            println!("{}", serde_json::to_string_pretty(store.list_all())?);
        },
        Commands::Search { genre } => {
            println!("{}", serde_json::to_string_pretty(&store.find_by_genre(&genre))?);
        },
        Commands::Recommend { min_rating } => {
            println!("{}", serde_json::to_string_pretty(&store.find_by_min_rating(min_rating))?);
        },
        Commands::Stats => {
            let watched = store.list_all().iter().filter(|m| m.watched).count();
            let stats = serde_json::json!({
                "movies": store.len(),
                "watched": watched,
            });
            println!("{}", serde_json::to_string_pretty(&stats)?);
        },
    }

    Ok(())
}
