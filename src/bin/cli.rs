//! bookswipe CLI
//!
//! Local front end for the swipe deck, favorites, and recommendation
//! flows. Device state (identity, favorites) lives in the storage
//! directory next to the configuration file.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use bookswipe::{
    config,
    error::{AppError, Result},
    favorites::FavoritesStore,
    identity::DeviceIdentity,
    models::{BookSummary, FetchState},
    services::{CatalogClient, DetailFetcher, RecommendationFetcher, SwipeRecorder},
    session::SwipeSession,
    storage::{KeyValueStorage, LocalStorage, keys},
    utils::http,
};

/// bookswipe - swipe-to-discover book client
#[derive(Parser, Debug)]
#[command(name = "bookswipe", version, about = "Swipe-to-discover book client")]
struct Cli {
    /// Path to storage directory containing config and device state
    #[arg(short, long, default_value = "storage")]
    storage_dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch the catalog deck and list it
    Deck,

    /// Record a decision for one book from the current deck
    Swipe {
        /// ISBN of the book to decide on
        isbn: String,

        /// Record a like (right swipe); the default is a pass
        #[arg(long)]
        like: bool,
    },

    /// Show the backend detail record for an ISBN
    Detail { isbn: String },

    /// List recommended books for this device
    Recommendations,

    /// List favorites (local list, or the server's copy)
    Favorites {
        /// Fetch the server-side list instead of the local one
        #[arg(long)]
        remote: bool,
    },

    /// Validate configuration files
    Validate,

    /// Show device identity and favorites status
    Info,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn list_books(books: &[BookSummary]) {
    for (index, book) in books.iter().enumerate() {
        log::info!(
            "{:>3}. {} by {} [{}]",
            index + 1,
            book.title,
            book.author,
            book.isbn
        );
    }
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    log::info!("bookswipe starting...");

    let config_path = cli.storage_dir.join("config.toml");
    let config = Arc::new(config::load_config(&config_path));

    let storage = Arc::new(LocalStorage::new(&cli.storage_dir));
    let client = http::create_async_client(&config.http)?;
    let identity = DeviceIdentity::new(storage.clone());

    match cli.command {
        Command::Deck => {
            let catalog = CatalogClient::new(Arc::clone(&config), client);
            let deck = catalog.fetch_deck().await;

            if deck.is_empty() {
                log::warn!("No books could be loaded.");
            } else {
                list_books(&deck);
            }
        }

        Command::Swipe { isbn, like } => {
            let catalog = CatalogClient::new(Arc::clone(&config), client.clone());
            let deck = catalog.fetch_deck().await;

            let Some(position) = deck.iter().position(|book| book.isbn == isbn) else {
                log::error!("ISBN {isbn} is not in the current deck.");
                return Err(AppError::not_found(format!("book {isbn}")));
            };

            let mut favorites = FavoritesStore::new(storage.clone());
            favorites.load().await;

            let recorder = SwipeRecorder::new(Arc::clone(&config), client, identity);
            let mut session = SwipeSession::new(vec![deck[position].clone()], favorites, recorder);

            let consumed = if like {
                session.swipe_right().await
            } else {
                session.swipe_left().await
            };

            let (favorites, outcome) = session.finish();
            if consumed {
                log::info!(
                    "Recorded {} for {isbn} ({} delivery failure(s), {} favorite(s) total)",
                    if like { "like" } else { "pass" },
                    outcome.record_failures,
                    favorites.len()
                );
            }
        }

        Command::Detail { isbn } => {
            let fetcher = DetailFetcher::new(Arc::clone(&config), client);
            match fetcher.fetch_state(&isbn).await {
                FetchState::Ready(detail) => {
                    log::info!("{} by {}", detail.title, detail.author);
                    log::info!("Publisher: {}", detail.publisher);
                    log::info!("Sales date: {}", detail.sales_date);
                    log::info!("ISBN: {}", detail.isbn);
                    if detail.price > 0 {
                        log::info!("Price: {} yen", detail.price);
                    }
                    if detail.review_count > 0 {
                        log::info!(
                            "Reviews: {} ({} review(s))",
                            detail.review_average,
                            detail.review_count
                        );
                    }
                    if !detail.summary.is_empty() {
                        log::info!("Summary: {}", detail.summary);
                    }
                    if !detail.purchase_url.is_empty() {
                        log::info!("Purchase: {}", detail.purchase_url);
                    }
                }
                FetchState::Failed(failure) => log::error!("{}", failure.message),
                FetchState::Loading => unreachable!("fetch_state resolves before returning"),
            }
        }

        Command::Recommendations => {
            let fetcher = RecommendationFetcher::new(Arc::clone(&config), client, identity);
            match fetcher.recommendations_state().await {
                FetchState::Ready(books) if books.is_empty() => {
                    log::info!("No recommendations yet. Swipe a few books first.");
                }
                FetchState::Ready(books) => list_books(&books),
                FetchState::Failed(failure) => log::error!("{}", failure.message),
                FetchState::Loading => unreachable!("fetch_state resolves before returning"),
            }
        }

        Command::Favorites { remote } => {
            if remote {
                let fetcher = RecommendationFetcher::new(Arc::clone(&config), client, identity);
                match fetcher.server_favorites_state().await {
                    FetchState::Ready(books) if books.is_empty() => {
                        log::info!("The server has no favorites for this device.");
                    }
                    FetchState::Ready(books) => list_books(&books),
                    FetchState::Failed(failure) => log::error!("{}", failure.message),
                    FetchState::Loading => unreachable!("fetch_state resolves before returning"),
                }
            } else {
                let mut favorites = FavoritesStore::new(storage.clone());
                favorites.load().await;

                if favorites.is_empty() {
                    log::info!("No favorites saved yet.");
                } else {
                    list_books(favorites.entries());
                }
            }
        }

        Command::Validate => {
            log::info!("Validating configuration...");

            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }

            log::info!("All validations passed!");
        }

        Command::Info => {
            log::info!("Storage directory: {}", cli.storage_dir.display());

            match storage.read_key(keys::DEVICE_ID).await {
                Ok(Some(id)) => log::info!("Device identity: {id}"),
                Ok(None) => log::info!("Device identity: not yet created"),
                Err(e) => log::warn!("Device identity unavailable: {e}"),
            }

            let mut favorites = FavoritesStore::new(storage.clone());
            favorites.load().await;
            log::info!("Local favorites: {}", favorites.len());
        }
    }

    log::info!("Done!");

    Ok(())
}
