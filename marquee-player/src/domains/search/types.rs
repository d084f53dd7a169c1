use marquee_model::Movie;

use crate::common::RequestSlot;

/// Search overlay state of the home view.
#[derive(Debug, Default, Clone)]
pub struct SearchState {
    /// Text as typed, untrimmed.
    pub query: String,
    /// Last successful lookup result.
    pub results: Vec<Movie>,
    /// Query of the lookup that currently owns the slot.
    pub in_flight_query: Option<String>,
    pub last_error: Option<String>,
    pub slot: RequestSlot,
}

impl SearchState {
    pub fn is_searching(&self) -> bool {
        self.slot.is_loading()
    }

    pub fn has_results(&self) -> bool {
        !self.results.is_empty()
    }

    /// Whether a lookup for exactly `query` is already outstanding.
    pub fn is_looking_up(&self, query: &str) -> bool {
        self.slot.is_loading() && self.in_flight_query.as_deref() == Some(query)
    }

    /// Starts a lookup for `query`, superseding any outstanding one.
    pub fn begin_lookup(&mut self, query: &str) -> u64 {
        self.in_flight_query = Some(query.to_string());
        self.slot.begin()
    }

    /// Drops results and any outstanding lookup. Keeps the query text.
    pub fn clear_results(&mut self) {
        self.results.clear();
        self.in_flight_query = None;
        self.last_error = None;
        self.slot.invalidate();
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.clear_results();
    }
}
