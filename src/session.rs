//! Drives a [`SelectionState`] against the live player API.

use tracing::debug;

use crate::{
    api::http::ApiClient,
    selection::{Effect, Event, SelectionState},
};

/// Run the request described by `effect` and turn its outcome into the
/// event that reports it.
///
/// Free-standing so a front-end that keeps several requests in flight can
/// spawn it and dispatch the result later.
pub async fn perform(client: &ApiClient, effect: Effect) -> Event {
    match effect {
        Effect::FetchRoster => match client.fetch_players().await {
            Ok(players) => Event::RosterLoaded(players),
            Err(error) => Event::RosterFailed(error),
        },
        Effect::FetchComparison {
            generation,
            first,
            second,
        } => match client.fetch_comparison(&first, &second).await {
            Ok(comparison) => Event::ComparisonLoaded {
                generation,
                comparison,
            },
            Err(error) => Event::ComparisonFailed { generation, error },
        },
    }
}

/// A selection state paired with the client that serves its requests.
///
/// Effects are awaited inline, so each dispatch returns once the state has
/// settled.
pub struct Session {
    client: ApiClient,
    state: SelectionState,
}

impl Session {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            state: SelectionState::new(),
        }
    }

    /// Apply `event`, then run any follow-up requests until none remain.
    pub async fn dispatch(&mut self, event: Event) {
        let mut next = self.state.update(event);
        while let Some(effect) = next {
            debug!(?effect, "performing");
            let outcome = perform(&self.client, effect).await;
            next = self.state.update(outcome);
        }
    }

    /// Load the roster.
    pub async fn start(&mut self) {
        self.dispatch(Event::Start).await;
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut SelectionState {
        &mut self.state
    }
}
