use marquee_core::CatalogError;
use marquee_model::{Genre, Movie};

use crate::domains::library::ShelfKey;

/// Completions delivered to the home controller. Each carries the
/// generation of the state slot (or debounce timer) it belongs to.
#[derive(Debug)]
pub enum HomeMessage {
    GenresLoaded {
        generation: u64,
        result: Result<Vec<Genre>, CatalogError>,
    },
    ShelfLoaded {
        key: ShelfKey,
        generation: u64,
        result: Result<Vec<Movie>, CatalogError>,
    },
    /// The debounce interval elapsed with `query` as the latest text.
    SearchSettled { generation: u64, query: String },
    SearchResults {
        generation: u64,
        query: String,
        result: Result<Vec<Movie>, CatalogError>,
    },
}

impl HomeMessage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::GenresLoaded { .. } => "Home::GenresLoaded",
            Self::ShelfLoaded { .. } => "Home::ShelfLoaded",
            Self::SearchSettled { .. } => "Home::SearchSettled",
            Self::SearchResults { .. } => "Home::SearchResults",
        }
    }
}
