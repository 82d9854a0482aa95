//! Output models used for printing and JSON serialization.

use serde::Serialize;

use crate::{
    api::types::{Comparison, Usage},
    error::{FantasyError, Result},
};

/// Pretty-printed JSON for command output.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(FantasyError::Output)
}

/// Result of a `compare` run.
#[derive(Debug, Serialize)]
pub struct ComparisonOutput {
    /// Name bound to the first slot.
    pub first: String,
    /// Name bound to the second slot.
    pub second: String,
    /// Text of the first generated choice.
    pub text: String,
    /// Model that produced the text.
    pub model: String,
    pub usage: Usage,
}

impl ComparisonOutput {
    /// Build the output for a shown comparison. Returns `None` when the
    /// comparison carries no choices.
    pub fn new(first: &str, second: &str, comparison: &Comparison) -> Option<Self> {
        let text = comparison.first_message().ok()?;
        Some(Self {
            first: first.to_string(),
            second: second.to_string(),
            text: text.to_string(),
            model: comparison.model.clone(),
            usage: comparison.usage,
        })
    }
}
