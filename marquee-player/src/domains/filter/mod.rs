//! Genre filter domain.
//!
//! The selection is a set of genre ids; the filtered list is a pure function
//! of (pool, selection). Toggling or resetting the selection notifies a
//! [`SelectionObserver`] with the new set in the same step.

use std::collections::BTreeSet;
use std::fmt;

use marquee_model::{GenreId, Movie};
use tracing::debug;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SelectedGenres(BTreeSet<GenreId>);

impl SelectedGenres {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: GenreId) -> bool {
        self.0.contains(&id)
    }

    /// Adds `id` if absent, removes it otherwise. Returns whether it is now
    /// selected.
    pub fn toggle(&mut self, id: GenreId) -> bool {
        if self.0.remove(&id) {
            false
        } else {
            self.0.insert(id);
            true
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = GenreId> + '_ {
        self.0.iter().copied()
    }

    /// True when `movie` carries at least one selected genre.
    pub fn matches(&self, movie: &Movie) -> bool {
        movie.genre_ids.iter().any(|id| self.0.contains(id))
    }
}

impl<I: Into<GenreId>> FromIterator<I> for SelectedGenres {
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Movies carrying at least one selected genre, in pool order. An empty
/// selection is the inactive filter and yields nothing.
pub fn filter_by_genres(
    pool: &[Movie],
    selection: &SelectedGenres,
) -> Vec<Movie> {
    if selection.is_empty() {
        return Vec::new();
    }
    pool.iter()
        .filter(|movie| selection.matches(movie))
        .cloned()
        .collect()
}

/// Receives the selection every time it changes.
pub trait SelectionObserver: Send {
    fn selection_changed(&self, selection: &SelectedGenres);
}

/// Observer used when nothing upstream cares about the selection.
pub struct NoopSelectionObserver;

impl SelectionObserver for NoopSelectionObserver {
    fn selection_changed(&self, _selection: &SelectedGenres) {}
}

impl fmt::Debug for NoopSelectionObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NoopSelectionObserver")
    }
}

/// Genre chips: owns the selection and keeps the observer in step with it.
pub struct GenrePicker {
    selection: SelectedGenres,
    observer: Box<dyn SelectionObserver>,
}

impl fmt::Debug for GenrePicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenrePicker")
            .field("selection", &self.selection)
            .finish_non_exhaustive()
    }
}

impl Default for GenrePicker {
    fn default() -> Self {
        Self::new(Box::new(NoopSelectionObserver))
    }
}

impl GenrePicker {
    pub fn new(observer: Box<dyn SelectionObserver>) -> Self {
        Self {
            selection: SelectedGenres::new(),
            observer,
        }
    }

    pub fn set_observer(&mut self, observer: Box<dyn SelectionObserver>) {
        self.observer = observer;
    }

    pub fn selection(&self) -> &SelectedGenres {
        &self.selection
    }

    pub fn toggle(&mut self, id: GenreId) -> bool {
        let selected = self.selection.toggle(id);
        debug!(genre = %id, selected, "genre toggled");
        self.observer.selection_changed(&self.selection);
        selected
    }

    /// Clears the selection with a single notification.
    pub fn reset(&mut self) {
        self.selection.clear();
        self.observer.selection_changed(&self.selection);
    }
}

/// Cached output of [`filter_by_genres`] for the current pool and selection.
#[derive(Debug, Default, Clone)]
pub struct GenreFilter {
    filtered: Vec<Movie>,
}

impl GenreFilter {
    pub fn recompute(&mut self, pool: &[Movie], selection: &SelectedGenres) {
        self.filtered = filter_by_genres(pool, selection);
    }

    pub fn movies(&self) -> &[Movie] {
        &self.filtered
    }
}
