use marquee_model::Movie;

use crate::domains::filter::SelectedGenres;
use crate::domains::library::ShelfKey;

/// Which body the home view renders. Exactly one is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeMode {
    /// Non-empty search results, regardless of genre selection.
    Search,
    /// Genre grid over the candidate pool.
    Filtered,
    /// The default shelves.
    Sections,
}

/// Borrowed snapshot of what the home view shows.
#[derive(Debug, Clone)]
pub enum HomeView<'a> {
    Search {
        query: &'a str,
        results: &'a [Movie],
    },
    Filtered {
        selection: &'a SelectedGenres,
        movies: &'a [Movie],
    },
    Sections(Vec<ShelfView<'a>>),
}

impl HomeView<'_> {
    pub fn mode(&self) -> HomeMode {
        match self {
            HomeView::Search { .. } => HomeMode::Search,
            HomeView::Filtered { .. } => HomeMode::Filtered,
            HomeView::Sections(_) => HomeMode::Sections,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ShelfView<'a> {
    pub key: ShelfKey,
    pub movies: &'a [Movie],
    pub can_scroll_left: bool,
    pub can_scroll_right: bool,
    pub loading: bool,
}
