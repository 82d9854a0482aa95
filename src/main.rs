//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use fantasy_helper::{
    cli::{Commands, FantasyHelper},
    commands::{compare::handle_compare, players::handle_players},
    ApiClient, ApiConfig, Result,
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let app = FantasyHelper::parse();
    let client = ApiClient::new(ApiConfig::resolve(app.base_url));

    match app.command {
        Commands::Players { search, json } => handle_players(&client, search, json).await?,
        Commands::Compare {
            first,
            second,
            json,
        } => handle_compare(&client, &first, &second, json).await?,
    }

    Ok(())
}
