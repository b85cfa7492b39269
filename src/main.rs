//! breedcache - look up dog sub-breeds from the command line.
//!
//! Fetches sub-breed lists from the dog.ceo API through an in-memory cache,
//! so repeated breed arguments in one invocation hit the network only once.

use std::io;
use std::process::ExitCode;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use breedcache::api::DogApiClient;
use breedcache::cache::CachingBreedFetcher;
use breedcache::config::Config;
use breedcache::fetcher::BreedFetcher;

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn print_usage() {
    eprintln!("Usage: breedcache <breed> [<breed>...]");
    eprintln!();
    eprintln!("Prints the sub-breeds of each named breed. Breed names are");
    eprintln!("case-sensitive lookup keys; repeated names are served from cache.");
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();

    let breeds: Vec<String> = std::env::args().skip(1).collect();
    if breeds.is_empty() || breeds[0] == "--help" || breeds[0] == "-h" {
        print_usage();
        return Ok(ExitCode::from(2));
    }

    info!("breedcache starting");

    let config = Config::load()?;
    let client = DogApiClient::from_config(&config)?;
    let mut fetcher = CachingBreedFetcher::new(client);

    let mut failed = false;
    for breed in &breeds {
        match fetcher.sub_breeds(breed).await {
            Ok(subs) if subs.is_empty() => println!("{}: (no sub-breeds)", breed),
            Ok(subs) => println!("{}: {}", breed, subs.join(", ")),
            Err(e) => {
                eprintln!("Error: {}", e);
                failed = true;
            }
        }
    }

    info!(calls = fetcher.calls_made(), "Lookups complete");

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
