use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use driftdeck_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "driftdeck")]
#[command(version, about = "A full-screen terminal slideshow")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Deck file to present (shorthand for `run`)
    #[arg(short = 'd', long = "deck")]
    deck: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Present a deck (the built-in sample when none is given)
    Run {
        /// Deck file (TOML)
        deck: Option<PathBuf>,
    },
    /// Validate a deck file
    Check {
        /// Deck file (TOML)
        deck: PathBuf,
    },
    /// Write the sample deck to a file as a starting point
    Init {
        /// Destination path
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    // Initialize logging; goes to stderr so the alternate screen stays clean
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = Arc::new(AppConfig::load()?);

    match cli.command {
        Some(Commands::Run { deck }) => commands::run::run(config, deck.or(cli.deck)),
        None => commands::run::run(config, cli.deck),
        Some(Commands::Check { deck }) => commands::check::run(&deck),
        Some(Commands::Init { path }) => commands::init::run(&path),
    }
}
