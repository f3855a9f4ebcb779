// src/main.rs
use std::fs;
use std::path::PathBuf;

use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use aa_chain_config::validate_config_json;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Path to a chain configuration JSON file
    #[clap(short, long)]
    config: PathBuf,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Parse command line arguments
    let args = Args::parse();

    let raw = fs::read_to_string(&args.config)?;
    validate_config_json(&raw)?;

    info!("Chain configuration {} is valid", args.config.display());

    Ok(())
}
