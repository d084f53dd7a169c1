//! Library domain: the movie shelves of the home view and the candidate
//! pool they form together.

use std::collections::BTreeMap;
use std::fmt;

use marquee_model::Movie;

use crate::common::RequestSlot;
use crate::domains::ui::ScrollRegion;

/// Card width in layout units.
pub const CARD_WIDTH: f32 = 150.0;
/// Gap between neighbouring cards.
pub const CARD_GAP: f32 = 12.0;

/// Laid-out width of a shelf holding `count` cards.
pub fn content_width(count: usize) -> f32 {
    if count == 0 {
        return 0.0;
    }
    let count = count as f32;
    count * CARD_WIDTH + (count - 1.0) * CARD_GAP
}

/// Shelves in pool order. The derived `Ord` is what puts popular before
/// recommended when the pool is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ShelfKey {
    Popular,
    Recommended,
    TopRated,
}

impl ShelfKey {
    pub const ALL: [ShelfKey; 3] =
        [ShelfKey::Popular, ShelfKey::Recommended, ShelfKey::TopRated];

    pub fn title(self) -> &'static str {
        match self {
            ShelfKey::Popular => "Popular",
            ShelfKey::Recommended => "Recommended",
            ShelfKey::TopRated => "Top Rated",
        }
    }
}

impl fmt::Display for ShelfKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// One loaded list plus its scroll state and request slot.
#[derive(Debug, Clone, Default)]
pub struct Shelf {
    pub movies: Vec<Movie>,
    pub scroll: ScrollRegion,
    pub slot: RequestSlot,
}

impl Shelf {
    pub fn new(scroll_step: f32) -> Self {
        Self {
            movies: Vec::new(),
            scroll: ScrollRegion::new(scroll_step),
            slot: RequestSlot::new(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.slot.is_loading()
    }

    /// Replaces the list and re-measures the scroll content once.
    pub fn populate(&mut self, movies: Vec<Movie>) {
        self.movies = movies;
        self.scroll.set_content_width(content_width(self.movies.len()));
    }
}

#[derive(Debug, Clone)]
pub struct ShelfSet {
    shelves: BTreeMap<ShelfKey, Shelf>,
}

impl Default for ShelfSet {
    fn default() -> Self {
        Self::new(crate::domains::ui::DEFAULT_SCROLL_STEP)
    }
}

impl ShelfSet {
    pub fn new(scroll_step: f32) -> Self {
        let shelves = ShelfKey::ALL
            .into_iter()
            .map(|key| (key, Shelf::new(scroll_step)))
            .collect();
        Self { shelves }
    }

    pub fn get(&self, key: ShelfKey) -> Option<&Shelf> {
        self.shelves.get(&key)
    }

    pub fn get_mut(&mut self, key: ShelfKey) -> Option<&mut Shelf> {
        self.shelves.get_mut(&key)
    }

    pub fn movies(&self, key: ShelfKey) -> &[Movie] {
        self.get(key).map(|shelf| shelf.movies.as_slice()).unwrap_or(&[])
    }

    pub fn set_movies(&mut self, key: ShelfKey, movies: Vec<Movie>) {
        if let Some(shelf) = self.get_mut(key) {
            shelf.populate(movies);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (ShelfKey, &Shelf)> {
        self.shelves.iter().map(|(key, shelf)| (*key, shelf))
    }

    pub fn iter_mut(
        &mut self,
    ) -> impl Iterator<Item = (ShelfKey, &mut Shelf)> {
        self.shelves.iter_mut().map(|(key, shelf)| (*key, shelf))
    }

    pub fn is_loading(&self) -> bool {
        self.shelves.values().any(Shelf::is_loading)
    }

    /// Concatenation of every shelf in key order. Each list keeps its own
    /// order and a title on two shelves appears twice.
    pub fn pool(&self) -> Vec<Movie> {
        self.shelves
            .values()
            .flat_map(|shelf| shelf.movies.iter().cloned())
            .collect()
    }
}
