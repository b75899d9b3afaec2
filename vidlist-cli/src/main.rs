//! Vidlist CLI - Command-line interface
//!
//! Provides command-line access to playlist resolution and the API server.

mod commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "vidlist")]
#[command(about = "A YouTube playlist resolution service")]
struct Cli {
    #[command(subcommand)]
    command: commands::Commands,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    commands::handle_command(cli.command).await?;

    Ok(())
}
