//! Selection state for the two-player comparison flow.
//!
//! The state is a plain value driven by [`Event`]s through
//! [`SelectionState::update`]. Network work is never done here: `update`
//! returns an [`Effect`] describing the request to make, and the caller feeds
//! the outcome back in as another event (see [`crate::session`]).
//!
//! # Phases
//!
//! ```text
//! Idle -> LoadingRoster -> Ready -> Comparing -> ComparisonShown
//!               |                      |
//!               v                      v
//!         RosterFailed            Ready (failure recorded)
//! ```
//!
//! The phase is derived from independent flags: a roster reload and a
//! comparison can be in flight at the same time, and neither clears the
//! other's flag. A shown comparison survives a roster reload because the
//! selections do.
//!
//! Each comparison request is stamped with a generation number. Changing a
//! selection bumps the generation, so a response that arrives for an older
//! pair of players is dropped instead of overwriting the display.

use tracing::{debug, info, warn};

use crate::{
    api::types::{Comparison, Player},
    error::FantasyError,
    filter::search_results,
};


/// One of the two picker slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    First,
    Second,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    LoadingRoster,
    RosterFailed,
    Ready,
    Comparing,
    ComparisonShown,
}

/// Inputs to the state machine.
#[derive(Debug)]
pub enum Event {
    /// Begin loading the roster.
    Start,
    RosterLoaded(Vec<Player>),
    RosterFailed(FantasyError),
    SearchChanged { slot: Slot, term: String },
    /// Bind a player name to a slot. An empty name clears the slot.
    Selected { slot: Slot, name: String },
    CompareRequested,
    ComparisonLoaded {
        generation: u64,
        comparison: Comparison,
    },
    ComparisonFailed {
        generation: u64,
        error: FantasyError,
    },
}

/// Work the caller must perform after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchRoster,
    FetchComparison {
        generation: u64,
        first: String,
        second: String,
    },
}

/// Outcome of the most recent roster fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RosterStatus {
    NotLoaded,
    Loaded,
    Failed,
}

#[derive(Debug)]
pub struct SelectionState {
    roster: Vec<Player>,
    roster_status: RosterStatus,
    loading_roster: bool,
    first_search: String,
    second_search: String,
    first_selection: String,
    second_selection: String,
    generation: u64,
    in_flight: Option<u64>,
    comparison: Option<Comparison>,
    last_error: Option<FantasyError>,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionState {
    pub fn new() -> Self {
        Self {
            roster: Vec::new(),
            roster_status: RosterStatus::NotLoaded,
            loading_roster: false,
            first_search: String::new(),
            second_search: String::new(),
            first_selection: String::new(),
            second_selection: String::new(),
            generation: 0,
            in_flight: None,
            comparison: None,
            last_error: None,
        }
    }

    /// Apply one event and return the request it calls for, if any.
    pub fn update(&mut self, event: Event) -> Option<Effect> {
        match event {
            Event::Start => self.start(),
            Event::RosterLoaded(players) => {
                info!(count = players.len(), "roster ready");
                self.roster = players;
                self.roster_status = RosterStatus::Loaded;
                self.loading_roster = false;
                None
            }
            Event::RosterFailed(error) => {
                warn!(kind = error.kind(), %error, "roster fetch failed");
                self.roster_status = RosterStatus::Failed;
                self.loading_roster = false;
                self.last_error = Some(error);
                None
            }
            Event::SearchChanged { slot, term } => {
                *self.search_mut(slot) = term;
                None
            }
            Event::Selected { slot, name } => {
                self.select(slot, name);
                None
            }
            Event::CompareRequested => self.request_comparison(),
            Event::ComparisonLoaded {
                generation,
                comparison,
            } => {
                if self.finish_request(generation) {
                    self.show_comparison(comparison);
                }
                None
            }
            Event::ComparisonFailed { generation, error } => {
                if self.finish_request(generation) {
                    warn!(kind = error.kind(), %error, "comparison failed");
                    self.last_error = Some(error);
                }
                None
            }
        }
    }

    fn start(&mut self) -> Option<Effect> {
        if self.loading_roster {
            return None;
        }
        self.loading_roster = true;
        self.last_error = None;
        Some(Effect::FetchRoster)
    }

    fn select(&mut self, slot: Slot, name: String) {
        if *self.selection_mut(slot) == name {
            return;
        }
        *self.selection_mut(slot) = name;
        // Anything requested or shown for the old pair is now stale
        self.generation += 1;
        self.comparison = None;
    }

    fn request_comparison(&mut self) -> Option<Effect> {
        if !self.can_compare() {
            debug!(phase = ?self.phase(), "comparison request ignored");
            return None;
        }
        self.generation += 1;
        self.in_flight = Some(self.generation);
        self.comparison = None;
        self.last_error = None;
        Some(Effect::FetchComparison {
            generation: self.generation,
            first: self.first_selection.clone(),
            second: self.second_selection.clone(),
        })
    }

    /// Clear the in-flight marker for `generation`. Returns whether the
    /// response still belongs to the current selection.
    fn finish_request(&mut self, generation: u64) -> bool {
        if self.in_flight != Some(generation) {
            debug!(generation, "ignoring response for unknown request");
            return false;
        }
        self.in_flight = None;
        if generation != self.generation {
            info!(
                generation,
                current = self.generation,
                "discarding stale comparison"
            );
            return false;
        }
        true
    }

    fn show_comparison(&mut self, comparison: Comparison) {
        if comparison.choices.is_empty() {
            warn!("comparison response had no choices");
            self.last_error = Some(FantasyError::EmptyChoices);
            return;
        }
        self.comparison = Some(comparison);
    }

    fn search_mut(&mut self, slot: Slot) -> &mut String {
        match slot {
            Slot::First => &mut self.first_search,
            Slot::Second => &mut self.second_search,
        }
    }

    fn selection_mut(&mut self, slot: Slot) -> &mut String {
        match slot {
            Slot::First => &mut self.first_selection,
            Slot::Second => &mut self.second_selection,
        }
    }

    /// Coarse view of the flags. A roster fetch outranks a comparison in
    /// flight; use [`SelectionState::is_comparing`] to see both.
    pub fn phase(&self) -> Phase {
        if self.loading_roster {
            return Phase::LoadingRoster;
        }
        match self.roster_status {
            RosterStatus::NotLoaded => Phase::Idle,
            RosterStatus::Failed => Phase::RosterFailed,
            RosterStatus::Loaded if self.in_flight.is_some() => Phase::Comparing,
            RosterStatus::Loaded if self.comparison.is_some() => Phase::ComparisonShown,
            RosterStatus::Loaded => Phase::Ready,
        }
    }

    pub fn roster(&self) -> &[Player] {
        &self.roster
    }

    pub fn search_term(&self, slot: Slot) -> &str {
        match slot {
            Slot::First => &self.first_search,
            Slot::Second => &self.second_search,
        }
    }

    pub fn selection(&self, slot: Slot) -> &str {
        match slot {
            Slot::First => &self.first_selection,
            Slot::Second => &self.second_selection,
        }
    }

    /// Roster entries offered by the picker in `slot`.
    pub fn search_results(&self, slot: Slot) -> Vec<&Player> {
        search_results(&self.roster, self.search_term(slot))
    }

    pub fn is_loading_roster(&self) -> bool {
        self.loading_roster
    }

    pub fn is_comparing(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Whether the compare trigger is enabled.
    pub fn can_compare(&self) -> bool {
        self.roster_status == RosterStatus::Loaded
            && !self.loading_roster
            && self.in_flight.is_none()
            && !self.first_selection.is_empty()
            && !self.second_selection.is_empty()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn comparison(&self) -> Option<&Comparison> {
        self.comparison.as_ref()
    }

    /// Text for the result panel.
    pub fn comparison_text(&self) -> Option<&str> {
        self.comparison.as_ref().and_then(|c| c.first_message().ok())
    }

    pub fn last_error(&self) -> Option<&FantasyError> {
        self.last_error.as_ref()
    }

    /// Hand the recorded failure to the caller, clearing it.
    pub fn take_error(&mut self) -> Option<FantasyError> {
        self.last_error.take()
    }
}
