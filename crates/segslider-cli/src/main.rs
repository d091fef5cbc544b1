use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use segslider_core::AppConfig;

mod commands;

/// Default viewport width in points for the offline commands
const DEFAULT_VIEWPORT: f64 = 320.0;

#[derive(Parser)]
#[command(name = "segslider")]
#[command(author, version, about = "A segmented slider control for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file (defaults to ~/.config/segslider/config.toml)
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive slider
    Run,
    /// Print the tile layout for the configured style
    Layout {
        /// Emit the full geometry as JSON
        #[arg(long)]
        json: bool,
        /// Viewport width in points
        #[arg(short = 'w', long, default_value_t = DEFAULT_VIEWPORT)]
        viewport: f64,
    },
    /// Convert between a value and a scroll offset
    Map {
        /// Value to place under the indicator
        #[arg(long, allow_hyphen_values = true, conflicts_with = "offset", required_unless_present = "offset")]
        value: Option<f64>,
        /// Scroll offset to derive a value from
        #[arg(long, allow_hyphen_values = true)]
        offset: Option<f64>,
        /// Viewport width in points
        #[arg(short = 'w', long, default_value_t = DEFAULT_VIEWPORT)]
        viewport: f64,
    },
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the configuration file path
    Path,
    /// Write the default configuration
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(AppConfig::config_path);
    let config = AppConfig::load_from(&config_path)?;

    // RUST_LOG wins over the configured level
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Some(Commands::Run) | None => commands::run::run(&config),
        Some(Commands::Layout { json, viewport }) => commands::layout::run(&config, viewport, json),
        Some(Commands::Map {
            value,
            offset,
            viewport,
        }) => commands::map::run(&config, viewport, value, offset),
        Some(Commands::Config { action }) => match action {
            ConfigAction::Path => commands::config::path(&config_path),
            ConfigAction::Init { force } => commands::config::init(&config_path, force),
        },
    }
}
