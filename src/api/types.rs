//! Wire types for the player API.
//!
//! Both endpoints wrap their payload in a `{"data": ...}` envelope and use
//! snake_case keys, which map one to one onto the Rust field names.

use crate::error::{FantasyError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

#[cfg(test)]
mod tests;

/// Type-safe wrapper for player identifiers.
///
/// The API hands these out as opaque strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A player as listed by `GET /players`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub team: String,
    pub position: String,
    pub games_played: u32,
    /// Category the API files the player under (e.g. "offense").
    #[serde(rename = "type")]
    pub kind: String,
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {}, {} games)",
            self.name, self.team, self.position, self.games_played
        )
    }
}

/// Top-level envelope for `GET /players`
#[derive(Debug, Deserialize)]
pub struct PlayerEnvelope {
    pub data: Vec<Player>,
}

/// Token accounting reported by the completion backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct Usage {
    pub completion_tokens: u32,
    pub prompt_tokens: u32,
    pub total_tokens: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Message {
    pub content: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Choice {
    pub finish_reason: String,
    pub index: u32,
    pub message: Message,
}

/// A generated comparison of two players.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Comparison {
    pub id: String,
    pub model: String,
    pub object: String,
    pub created: i64,
    pub usage: Usage,
    pub choices: Vec<Choice>,
}

impl Comparison {
    /// Text of the first choice, which is the only one shown to users.
    pub fn first_message(&self) -> Result<&str> {
        self.choices
            .first()
            .map(|choice| choice.message.content.as_str())
            .ok_or(FantasyError::EmptyChoices)
    }

    /// Consuming variant of [`Comparison::first_message`].
    pub fn into_first_message(self) -> Result<String> {
        self.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(FantasyError::EmptyChoices)
    }
}

/// Top-level envelope for `GET /players/compare/{first}/{second}`
#[derive(Debug, Deserialize)]
pub struct ComparisonEnvelope {
    pub data: Comparison,
}
