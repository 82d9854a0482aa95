//! HTTP client for the player directory and comparison endpoints.

use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::{
    api::types::{Comparison, ComparisonEnvelope, Player, PlayerEnvelope},
    config::ApiConfig,
    error::{FantasyError, Result},
};


/// Path of the roster endpoint, relative to the base URL.
pub const PLAYERS_PATH: &str = "/players";

/// Path prefix of the comparison endpoint, relative to the base URL.
pub const COMPARE_PATH: &str = "/players/compare";

/// Percent-encode literal spaces. Every other character is passed through
/// untouched.
pub fn encode_spaces(raw: &str) -> String {
    raw.replace(' ', "%20")
}

/// Path segment `{first}/{second}` for a comparison request.
///
/// # Examples
///
/// ```rust
/// use fantasy_helper::api::http::comparison_segment;
///
/// assert_eq!(
///     comparison_segment("John Smith", "Jane Doe"),
///     "John%20Smith/Jane%20Doe"
/// );
/// ```
pub fn comparison_segment(first: &str, second: &str) -> String {
    encode_spaces(&format!("{}/{}", first, second))
}

/// Parse a fully built address into a request target.
fn parse_target(raw: &str) -> Result<Url> {
    Url::parse(raw).map_err(|e| FantasyError::InvalidTarget {
        target: raw.to_string(),
        reason: e.to_string(),
    })
}

/// Client for the local player API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(http: Client, config: ApiConfig) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Request target for `GET /players`.
    pub fn players_url(&self) -> Result<Url> {
        parse_target(&format!("{}{}", self.config.base_url(), PLAYERS_PATH))
    }

    /// Request target for `GET /players/compare/{first}/{second}`.
    pub fn comparison_url(&self, first: &str, second: &str) -> Result<Url> {
        parse_target(&format!(
            "{}{}/{}",
            self.config.base_url(),
            COMPARE_PATH,
            comparison_segment(first, second)
        ))
    }

    /// Fetch the full roster, sorted by name.
    ///
    /// # Errors
    ///
    /// - [`FantasyError::InvalidTarget`] if the base URL does not parse
    /// - [`FantasyError::InvalidResponse`] on any status other than 200
    /// - [`FantasyError::InvalidPayload`] if the body is not a player envelope
    /// - [`FantasyError::Http`] on transport failures
    pub async fn fetch_players(&self) -> Result<Vec<Player>> {
        let url = self.players_url()?;
        let envelope: PlayerEnvelope = self.get_json(url).await?;

        let mut players = envelope.data;
        players.sort_by(|a, b| a.name.cmp(&b.name));
        info!(count = players.len(), "roster loaded");
        Ok(players)
    }

    /// Fetch the full comparison record for two player names.
    pub async fn fetch_comparison(&self, first: &str, second: &str) -> Result<Comparison> {
        let url = self.comparison_url(first, second)?;
        let envelope: ComparisonEnvelope = self.get_json(url).await?;
        let comparison = envelope.data;

        debug!(
            model = %comparison.model,
            choices = comparison.choices.len(),
            total_tokens = comparison.usage.total_tokens,
            "comparison received"
        );
        Ok(comparison)
    }

    /// Compare two players and return the text of the first choice.
    ///
    /// Fails with the same errors as [`ApiClient::fetch_players`], plus
    /// [`FantasyError::EmptyChoices`] when the backend returns no choices.
    pub async fn compare_players(&self, first: &str, second: &str) -> Result<String> {
        self.fetch_comparison(first, second)
            .await?
            .into_first_message()
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!(%url, "GET");
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FantasyError::InvalidResponse { status });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(FantasyError::InvalidPayload)
    }
}
