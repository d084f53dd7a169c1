use marquee_model::{Actor, MovieDetails, MovieId, OverviewText, Trailer};

use crate::common::RequestSlot;

/// Everything the detail page renders. Slots are independent: cast may be
/// on screen while details are still loading.
#[derive(Debug, Default, Clone)]
pub struct DetailsState {
    /// Title the page currently shows or is loading.
    pub movie_id: Option<MovieId>,
    pub details: Option<MovieDetails>,
    pub overview: Option<OverviewText>,
    /// Filtered to the configured department and truncated.
    pub cast: Vec<Actor>,
    /// `None` once videos arrived means the title has no trailer.
    pub trailer: Option<Trailer>,
    pub videos_loaded: bool,
    pub details_slot: RequestSlot,
    pub cast_slot: RequestSlot,
    pub videos_slot: RequestSlot,
}

impl DetailsState {
    pub fn is_loading(&self) -> bool {
        self.details_slot.is_loading()
            || self.cast_slot.is_loading()
            || self.videos_slot.is_loading()
    }

    /// Forgets the shown title's data but keeps slot generations
    /// monotonic.
    pub fn reset_content(&mut self) {
        self.details = None;
        self.overview = None;
        self.cast.clear();
        self.trailer = None;
        self.videos_loaded = false;
    }

    pub fn invalidate(&mut self) {
        self.details_slot.invalidate();
        self.cast_slot.invalidate();
        self.videos_slot.invalidate();
    }
}

/// Actors in `department`, catalog order, at most `limit`.
pub fn top_cast(
    cast: Vec<Actor>,
    department: &str,
    limit: usize,
) -> Vec<Actor> {
    cast.into_iter()
        .filter(|actor| actor.is_in_department(department))
        .take(limit)
        .collect()
}
