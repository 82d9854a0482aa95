//! Fantasy Helper Library
//!
//! Client for a local fantasy football player API: load the roster, search
//! it, pick two players and ask the backend (a language-model completion
//! service) for a written comparison.
//!
//! ## Features
//!
//! - **Roster Retrieval**: `GET /players`, decoded and sorted by name
//! - **Player Comparison**: `GET /players/compare/{first}/{second}`
//! - **Local Search**: case-sensitive substring filter over the roster
//! - **Selection State**: event-driven state machine for the two pickers,
//!   with stale comparison responses discarded
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fantasy_helper::{ApiClient, ApiConfig};
//!
//! # async fn example() -> fantasy_helper::Result<()> {
//! let client = ApiClient::new(ApiConfig::default());
//! let roster = client.fetch_players().await?;
//! let text = client.compare_players(&roster[0].name, &roster[1].name).await?;
//! println!("{}", text);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the client at another server without passing `--base-url`:
//! ```bash
//! export FANTASY_HELPER_URL=http://localhost:4000
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod selection;
pub mod session;

// Re-export commonly used types
pub use api::{ApiClient, Comparison, Player, PlayerId};
pub use config::{ApiConfig, BASE_URL_ENV_VAR, DEFAULT_BASE_URL};
pub use error::{FantasyError, Result};
pub use selection::{Effect, Event, Phase, SelectionState, Slot};
pub use session::Session;
