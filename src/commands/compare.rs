//! `compare` command: pick two players from the roster and ask the backend
//! how they stack up.

use tracing::info;

use crate::{
    api::{http::ApiClient, types::Player},
    error::FantasyError,
    filter::search_results,
    models::output::{to_json, ComparisonOutput},
    selection::{Event, Slot},
    session::Session,
    Result,
};

/// Resolve a picker search term to one roster entry.
///
/// An exact name match wins. Otherwise the term must narrow the roster to a
/// single player.
pub fn pick_player<'a>(roster: &'a [Player], term: &str) -> Result<&'a Player> {
    if let Some(exact) = roster.iter().find(|p| p.name == term) {
        return Ok(exact);
    }

    match search_results(roster, term).as_slice() {
        [] => Err(FantasyError::NoMatch {
            term: term.to_string(),
        }),
        [only] => Ok(*only),
        many => Err(FantasyError::AmbiguousSelection {
            term: term.to_string(),
            candidates: many.iter().map(|p| p.name.clone()).collect(),
        }),
    }
}

/// Search, select and compare through a [`Session`], returning the settled
/// result.
pub async fn run_comparison(
    session: &mut Session,
    first: &str,
    second: &str,
) -> Result<ComparisonOutput> {
    session.start().await;
    if let Some(error) = session.state_mut().take_error() {
        return Err(error);
    }

    for (slot, term) in [(Slot::First, first), (Slot::Second, second)] {
        session
            .dispatch(Event::SearchChanged {
                slot,
                term: term.to_string(),
            })
            .await;
        let name = pick_player(session.state().roster(), term)?.name.clone();
        info!(?slot, %name, "selected");
        session.dispatch(Event::Selected { slot, name }).await;
    }

    if !session.state().can_compare() {
        return Err(FantasyError::IncompleteSelection);
    }
    session.dispatch(Event::CompareRequested).await;

    if let Some(error) = session.state_mut().take_error() {
        return Err(error);
    }

    let state = session.state();
    state
        .comparison()
        .and_then(|c| {
            ComparisonOutput::new(state.selection(Slot::First), state.selection(Slot::Second), c)
        })
        .ok_or(FantasyError::EmptyChoices)
}

/// Handle the compare command
pub async fn handle_compare(
    client: &ApiClient,
    first: &str,
    second: &str,
    as_json: bool,
) -> Result<()> {
    let mut session = Session::new(client.clone());
    let output = run_comparison(&mut session, first, second).await?;

    if as_json {
        println!("{}", to_json(&output)?);
    } else {
        println!("{} vs {}\n", output.first, output.second);
        println!("{}", output.text);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::PlayerId;

    fn roster() -> Vec<Player> {
        ["Josh Allen", "Josh Jacobs", "Allen Robinson", "Joe Burrow"]
            .iter()
            .enumerate()
            .map(|(i, name)| Player {
                id: PlayerId::new(i.to_string()),
                name: name.to_string(),
                team: "T".to_string(),
                position: "QB".to_string(),
                games_played: 1,
                kind: "offense".to_string(),
            })
            .collect()
    }

    #[test]
    fn test_pick_player_unique_substring() {
        let roster = roster();
        assert_eq!(pick_player(&roster, "Burrow").unwrap().name, "Joe Burrow");
    }

    #[test]
    fn test_pick_player_exact_name_beats_ambiguity() {
        let mut roster = roster();
        roster.push(Player {
            name: "Allen".to_string(),
            ..roster[0].clone()
        });
        assert_eq!(pick_player(&roster, "Allen").unwrap().name, "Allen");
    }

    #[test]
    fn test_pick_player_ambiguous() {
        let roster = roster();
        match pick_player(&roster, "Allen") {
            Err(FantasyError::AmbiguousSelection { candidates, .. }) => {
                assert_eq!(candidates, vec!["Josh Allen", "Allen Robinson"]);
            }
            other => panic!("Expected AmbiguousSelection, got {:?}", other),
        }
    }

    #[test]
    fn test_pick_player_no_match() {
        let roster = roster();
        assert!(matches!(
            pick_player(&roster, "Mahomes"),
            Err(FantasyError::NoMatch { .. })
        ));
    }

    #[test]
    fn test_pick_player_is_case_sensitive() {
        let roster = roster();
        assert!(matches!(
            pick_player(&roster, "burrow"),
            Err(FantasyError::NoMatch { .. })
        ));
    }
}
