//! Player API access: wire types and the HTTP client.

pub mod http;
pub mod types;

pub use http::ApiClient;
pub use types::{Choice, Comparison, Message, Player, PlayerId, Usage};
