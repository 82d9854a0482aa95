//! CLI argument definitions and parsing.

use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the players served by the API.
    ///
    /// Queries `/players` and prints the roster sorted by name.
    Players {
        /// Only show players whose name contains this text (case-sensitive).
        #[clap(long, short)]
        search: Option<String>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Ask the backend to compare two players.
    ///
    /// Each argument is a search term; it must match a player name exactly
    /// or narrow the roster down to a single player.
    Compare {
        /// First player (name or unique part of a name).
        first: String,

        /// Second player (name or unique part of a name).
        second: String,

        /// Output the comparison, model and token usage as JSON.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "fantasy-helper", about = "Compare fantasy football players")]
pub struct FantasyHelper {
    /// Base URL of the player API (or set `FANTASY_HELPER_URL`; default
    /// http://localhost:4000).
    #[clap(long, global = true)]
    pub base_url: Option<String>,

    #[clap(subcommand)]
    pub command: Commands,
}
