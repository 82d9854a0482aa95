//! Error types for the fantasy helper client

use thiserror::Error;


pub type Result<T> = std::result::Result<T, FantasyError>;

#[derive(Error, Debug)]
pub enum FantasyError {
    /// The configured address could not be turned into a request URL.
    #[error("Invalid request target {target}: {reason}")]
    InvalidTarget { target: String, reason: String },

    /// Transport succeeded but the server did not answer 200.
    #[error("Invalid response: server returned {status}")]
    InvalidResponse { status: reqwest::StatusCode },

    #[error("Invalid payload: {0}")]
    InvalidPayload(#[source] serde_json::Error),

    #[error("Comparison response contained no choices")]
    EmptyChoices,

    /// Connectivity and other transport failures.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("No player matches {term:?}")]
    NoMatch { term: String },

    #[error("{term:?} matches several players: {}", .candidates.join(", "))]
    AmbiguousSelection {
        term: String,
        candidates: Vec<String>,
    },

    #[error("Comparison needs two selected players")]
    IncompleteSelection,

    /// Results could not be rendered for printing.
    #[error("Failed to render output: {0}")]
    Output(#[source] serde_json::Error),
}

impl FantasyError {
    /// Short kind label used in log lines and state snapshots.
    pub fn kind(&self) -> &'static str {
        match self {
            FantasyError::InvalidTarget { .. } => "invalid_target",
            FantasyError::InvalidResponse { .. } => "invalid_response",
            FantasyError::InvalidPayload(_) => "invalid_payload",
            FantasyError::EmptyChoices => "empty_choices",
            FantasyError::Http(_) => "http",
            FantasyError::NoMatch { .. } => "no_match",
            FantasyError::AmbiguousSelection { .. } => "ambiguous_selection",
            FantasyError::IncompleteSelection => "incomplete_selection",
            FantasyError::Output(_) => "output",
        }
    }
}
