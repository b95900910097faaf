//! # Vitrine - Museum Catalog Server
//!
//! The main binary for the Vitrine multilingual catalog engine.
//!
//! This application provides:
//! - HTTP REST API server (axum-based)
//! - CLI interface for catalog operations
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                  apps/vitrine (THE BINARY)                 │
//! │                                                            │
//! │      ┌─────────────┐              ┌─────────────┐          │
//! │      │   CLI       │              │   HTTP API  │          │
//! │      │  (clap)     │              │   (axum)    │          │
//! │      └──────┬──────┘              └──────┬──────┘          │
//! │             │                            │                 │
//! │             └────────────┬───────────────┘                 │
//! │                          ▼                                 │
//! │                  ┌───────────────┐                         │
//! │                  │ vitrine-core  │                         │
//! │                  │ (THE LOGIC)   │                         │
//! │                  └───────────────┘                         │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Start the HTTP server
//! vitrine server --host 0.0.0.0 --port 8080
//!
//! # CLI operations
//! vitrine status
//! vitrine search "celadon" --language en
//! vitrine favorites toggle 3
//! ```

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vitrine::cli;

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

#[tokio::main]
async fn main() {
    // Initialize tracing — VITRINE_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("VITRINE_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "vitrine=info,tower_http=debug".into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }

    // Parse CLI arguments
    let cli = cli::Cli::parse();

    // Display startup banner
    if !cli.quiet {
        print_banner();
    }

    // Execute command
    if let Err(e) = cli::execute(cli).await {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the Vitrine startup banner.
fn print_banner() {
    println!(
        r#"
  ██╗   ██╗██╗████████╗██████╗ ██╗███╗   ██╗███████╗
  ██║   ██║██║╚══██╔══╝██╔══██╗██║████╗  ██║██╔════╝
  ██║   ██║██║   ██║   ██████╔╝██║██╔██╗ ██║█████╗
  ╚██╗ ██╔╝██║   ██║   ██╔══██╗██║██║╚██╗██║██╔══╝
   ╚████╔╝ ██║   ██║   ██║  ██║██║██║ ╚████║███████╗
    ╚═══╝  ╚═╝   ╚═╝   ╚═╝  ╚═╝╚═╝╚═╝  ╚═══╝╚══════╝

  Museum Catalog Server v{}

  Deterministic • Multilingual • Curated
"#,
        env!("CARGO_PKG_VERSION")
    );
}
