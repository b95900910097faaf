//! # Vitrine CLI Module
//!
//! This module implements the CLI interface for Vitrine.
//!
//! ## Available Commands
//!
//! - `server` - Start the HTTP server
//! - `status` - Show catalog status
//! - `halls` - Show per-hall breakdown
//! - `search` - Search the catalog
//! - `show` - Show one record
//! - `favorites` - Manage the favorites set
//! - `language` - Show or set the language preference
//! - `export` - Export the catalog to a binary snapshot
//! - `import` - Inspect a binary snapshot
//! - `init` - Initialize a new preference database

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use vitrine_core::CatalogError;

use crate::config::AppConfig;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Vitrine - Museum Catalog Server
///
/// A deterministic, multilingual catalog engine: sanitized search over a
/// curated record store, per-hall stats, and persisted favorites.
#[derive(Parser, Debug)]
#[command(name = "vitrine")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to the catalog JSON data file
    #[arg(short = 'd', long, global = true)]
    pub data: Option<PathBuf>,

    /// Path to the preference database
    #[arg(short = 'P', long, global = true, default_value = "vitrine.db")]
    pub prefs: PathBuf,

    /// Path to the application config file (default: ./vitrine.toml if present)
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start HTTP server
    Server {
        /// Host to bind to (overrides config)
        #[arg(short = 'H', long)]
        host: Option<String>,

        /// Port to bind to (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Show catalog status
    Status,

    /// Show per-hall breakdown with designation stats
    Halls,

    /// Search the catalog
    Search {
        /// Search term (sanitized before filtering)
        term: String,

        /// Category facet; "all" disables the facet
        #[arg(short = 'C', long, default_value = "all")]
        category: String,

        /// Language override (defaults to the persisted preference)
        #[arg(short, long)]
        language: Option<String>,
    },

    /// Show one record by id
    Show {
        /// Record id
        id: String,
    },

    /// Manage the favorites set
    Favorites {
        #[command(subcommand)]
        action: FavoritesAction,
    },

    /// Show or set the language preference
    Language {
        /// Language code to set; omit to show the current preference
        code: Option<String>,
    },

    /// Export the catalog to a binary snapshot
    Export {
        /// Output file path
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Inspect a binary snapshot (and optionally dump it as JSON)
    Import {
        /// Input snapshot path
        #[arg(short, long)]
        input: PathBuf,

        /// Optional path to write the records as JSON
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Initialize a new preference database
    Init {
        /// Force initialization even if the database exists
        #[arg(short, long)]
        force: bool,
    },
}

/// Favorites subcommands.
#[derive(Subcommand, Debug)]
pub enum FavoritesAction {
    /// List favorited record ids
    List,
    /// Add a record to the favorites set
    Add { id: String },
    /// Remove a record from the favorites set
    Remove { id: String },
    /// Flip membership for a record
    Toggle { id: String },
    /// Empty the favorites set
    Clear,
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub async fn execute(cli: Cli) -> Result<(), CatalogError> {
    let config = AppConfig::load(cli.config.as_deref())?;
    let paths = ResolvedPaths::new(&cli, &config);
    let json_mode = cli.json_mode;

    if cli.verbose {
        tracing::debug!(
            data = %paths.data.display(),
            prefs = %paths.prefs.display(),
            "resolved paths"
        );
    }

    match cli.command {
        Some(Commands::Server { host, port }) => {
            let host = host.unwrap_or_else(|| config.server.host.clone());
            let port = port.unwrap_or(config.server.port);
            cmd_server(&paths, &config, &host, port).await
        }
        Some(Commands::Status) => cmd_status(&paths, &config, json_mode),
        Some(Commands::Halls) => cmd_halls(&paths, &config, json_mode),
        Some(Commands::Search {
            term,
            category,
            language,
        }) => cmd_search(&paths, &config, json_mode, &term, &category, language.as_deref()),
        Some(Commands::Show { id }) => cmd_show(&paths, &config, json_mode, &id),
        Some(Commands::Favorites { action }) => cmd_favorites(&paths, &config, json_mode, &action),
        Some(Commands::Language { code }) => {
            cmd_language(&paths, &config, json_mode, code.as_deref())
        }
        Some(Commands::Export { output }) => cmd_export(&paths, &config, &output),
        Some(Commands::Import { input, output }) => {
            cmd_import(&input, output.as_deref(), json_mode)
        }
        Some(Commands::Init { force }) => cmd_init(&paths, force),
        None => {
            // No subcommand - show status by default
            cmd_status(&paths, &config, json_mode)
        }
    }
}
