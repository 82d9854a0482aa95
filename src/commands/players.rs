//! `players` command: list the roster, optionally narrowed by a search term.

use tracing::info;

use crate::{api::http::ApiClient, filter::search_results, models::output::to_json, Result};

/// Fetch the roster and print the players matching `search`.
pub async fn handle_players(
    client: &ApiClient,
    search: Option<String>,
    as_json: bool,
) -> Result<()> {
    info!(base_url = client.config().base_url(), "loading roster");
    let roster = client.fetch_players().await?;

    let term = search.unwrap_or_default();
    let matches = search_results(&roster, &term);

    if as_json {
        println!("{}", to_json(&matches)?);
        return Ok(());
    }

    if matches.is_empty() {
        println!("No players match {:?}", term);
        return Ok(());
    }

    for player in matches {
        println!("{}", player);
    }

    Ok(())
}
