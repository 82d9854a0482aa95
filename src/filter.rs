//! Local search over a loaded roster.

use crate::api::types::Player;


/// Players whose name contains `term`.
///
/// Matching is a plain case-sensitive substring test. An empty term matches
/// everyone. Roster order is preserved.
///
/// # Examples
///
/// ```rust
/// use fantasy_helper::{filter::search_results, Player, PlayerId};
///
/// let roster = vec![Player {
///     id: PlayerId::new("1"),
///     name: "Alice".to_string(),
///     team: "B".to_string(),
///     position: "WR".to_string(),
///     games_played: 5,
///     kind: "offense".to_string(),
/// }];
///
/// assert_eq!(search_results(&roster, "lic").len(), 1);
/// assert!(search_results(&roster, "alice").is_empty());
/// ```
pub fn search_results<'a>(roster: &'a [Player], term: &str) -> Vec<&'a Player> {
    if term.is_empty() {
        return roster.iter().collect();
    }
    roster.iter().filter(|p| p.name.contains(term)).collect()
}
