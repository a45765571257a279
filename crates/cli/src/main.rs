//! hashstash CLI entry point.
//!
//! Stores, retrieves and fingerprints content against the configured backend.
//! Results go to stdout; logs go to stderr.

use std::sync::Arc;

use clap::Parser;
use hashstash_core::{AppConfig, ContentService, SaltedHasher, Storage};
use tracing_subscriber::EnvFilter;

mod commands;

/// Content-addressable text store.
///
/// Text is addressed by the salted SHA-256 digest of its content.
#[derive(Parser, Debug)]
#[command(name = "hashstash", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Store text and print its digest.
    Store(commands::StoreArgs),
    /// Print the text stored under a digest.
    Get(commands::GetArgs),
    /// Print the salted digest of a JSON object without storing it.
    Hash(commands::HashArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load()?;
    let storage = Storage::from_config(&config);
    let service = ContentService::new(Arc::new(storage), SaltedHasher::new(config.secret_salt));

    let output = match cli.command {
        Commands::Store(args) => commands::store(&service, args).await?,
        Commands::Get(args) => commands::get(&service, &args).await?,
        Commands::Hash(args) => commands::hash(service.hasher(), &args)?,
    };
    println!("{output}");

    Ok(())
}
