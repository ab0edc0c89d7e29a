//! Oxford CLI - command-line client for the Project Oxford face and vision APIs.
//!
//! Each command becomes one HTTP request. Successful JSON results are printed
//! to stdout with sorted keys; errors go to stderr with a non-zero exit code.
//!
//! # Usage
//!
//! ```bash
//! # Store a key once
//! oxford face save-api-key <KEY>
//!
//! # Detect faces in a local file or a URL
//! oxford face detect portrait.jpg
//! oxford face detect https://example.com/portrait.jpg --no-analyzesheadpose
//!
//! # Manage person groups
//! oxford face persongroup create "Family" --persongroupid family
//! oxford face person create "Ada" --persongroupid family --faceid <FACE_ID>
//!
//! # Vision
//! oxford vision thumbnail photo.jpg --width 120 --height 120 --thumbnail thumb.jpg
//! ```

use clap::{Parser, Subcommand};
use oxford_core::{Config, ConfigError};
use std::process::ExitCode;

mod cli;
mod logging;

/// Oxford - command-line client for the Project Oxford face and vision APIs.
#[derive(Parser, Debug)]
#[command(name = "oxford")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true, env = "OXFORD_VERBOSE")]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true, env = "OXFORD_JSON_LOGS")]
    json_logs: bool,

    /// The url to the Project Oxford API (overrides the config file)
    #[arg(long, global = true, env = "OXFORD_URL", value_name = "URL")]
    oxford_url: Option<String>,

    /// Config file location [default: ~/.projectoxford.json]
    #[arg(long, global = true, env = "OXFORD_CONFIG", value_name = "PATH")]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Face detection, identification, and person groups
    Face(cli::face::FaceArgs),

    /// Image analysis, thumbnails, and OCR
    Vision(cli::vision::VisionArgs),

    /// View configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // The config file also carries logging defaults, so it is read before
    // logging exists. Commands that need it report a failed load themselves.
    let config_path = Config::resolve_path(cli.config.as_deref());
    let loaded = Config::load_from(&config_path);
    let logging_config = loaded
        .as_ref()
        .map(|config| config.logging.clone())
        .unwrap_or_default();
    logging::init_from_config(&logging_config, cli.verbose, cli.json_logs);

    tracing::debug!("Oxford v{}", oxford_core::VERSION);
    match &loaded {
        Ok(_) => {}
        Err(ConfigError::Missing(_)) => {
            tracing::debug!("No config file at {}", config_path.display());
        }
        Err(e) => tracing::warn!("Using default logging settings: {e}"),
    }

    let session = cli::Session::new(config_path, loaded, cli.oxford_url);

    // Dispatch to the appropriate command handler
    let result = match cli.command {
        Commands::Face(args) => cli::face::execute(args, session).await,
        Commands::Vision(args) => cli::vision::execute(args, session).await,
        Commands::Config(args) => cli::config::execute(args, session),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("Command failed: {e:?}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
