//! CLI command implementations

use std::sync::Arc;

use clap::Subcommand;
use vidlist_catalog::{CatalogConfig, DemoCatalog, PlaylistAggregator};
use vidlist_web::run_server;

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Start the API server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// Port to bind to
        #[arg(short, long, default_value = "3000")]
        port: u16,
        /// Use canned demo data instead of the YouTube API
        #[arg(long)]
        demo: bool,
    },
    /// Resolve a playlist once and print the result as JSON
    Resolve {
        /// Playlist identifier
        playlist_id: String,
        /// Use canned demo data instead of the YouTube API
        #[arg(long)]
        demo: bool,
    },
}

/// Handle the CLI command
///
/// # Errors
/// Returns appropriate error based on the command that fails
pub async fn handle_command(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Serve { host, port, demo } => serve(host, port, demo).await,
        Commands::Resolve { playlist_id, demo } => resolve(playlist_id, demo).await,
    }
}

/// Build the aggregator, reading the API key at startup unless demo data was
/// requested. A missing key fails here, never per request.
fn build_aggregator(demo: bool) -> Result<PlaylistAggregator, Box<dyn std::error::Error>> {
    if demo {
        Ok(PlaylistAggregator::new(Arc::new(DemoCatalog::new())))
    } else {
        Ok(PlaylistAggregator::from_config(CatalogConfig::from_env()?))
    }
}

/// Start the API server
///
/// # Errors
/// - `ConfigError::MissingApiKey` - No API key supplied and demo mode off
/// - Bind or serve failures from the web layer
async fn serve(host: String, port: u16, demo: bool) -> Result<(), Box<dyn std::error::Error>> {
    let aggregator = build_aggregator(demo)?;

    println!("Starting Vidlist server...");
    if demo {
        println!("Mode: Demo (using sample data)");
    }
    println!("API: http://{host}:{port}/api/playlist/{{playlistId}}");

    run_server(aggregator, &host, port).await
}

/// Resolve a playlist and print it
///
/// # Errors
/// - `ConfigError::MissingApiKey` - No API key supplied and demo mode off
/// - `PlaylistError` - Resolution failed
async fn resolve(playlist_id: String, demo: bool) -> Result<(), Box<dyn std::error::Error>> {
    let aggregator = build_aggregator(demo)?;

    let result = aggregator.resolve_playlist(&playlist_id).await?;
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
