use crate::genre::Genre;
use crate::ids::{GenreId, MovieId};

/// A title as it appears in catalog listings (popular, recommended, search
/// results). Each list owns its own copies; two lists may hold the same id.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub original_title: Option<String>,
    pub overview: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    /// `YYYY-MM-DD` as reported by the catalog, when known.
    pub release_date: Option<String>,
    /// 0 to 10.
    pub vote_average: f32,
    pub vote_count: u32,
    pub popularity: f32,
    pub adult: bool,
    pub video: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub genre_ids: Vec<GenreId>,
}

impl Movie {
    /// Minimal constructor used by tests and fixtures.
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id: MovieId(id),
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_genres<I>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        self.genre_ids = genres.into_iter().map(GenreId).collect();
        self
    }

    pub fn with_rating(mut self, vote_average: f32) -> Self {
        self.vote_average = vote_average;
        self
    }

    pub fn has_genre(&self, genre: GenreId) -> bool {
        self.genre_ids.contains(&genre)
    }

    pub fn release_year(&self) -> Option<u16> {
        self.release_date
            .as_deref()
            .and_then(|date| date.get(..4))
            .and_then(|year| year.parse().ok())
    }
}

/// Detail-page record: a [`Movie`] plus runtime, external reference and the
/// resolved genre list.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovieDetails {
    pub movie: Movie,
    pub runtime_minutes: Option<u32>,
    /// IMDb identifier (`tt...`).
    pub imdb_id: Option<String>,
    pub genres: Vec<Genre>,
    pub tagline: Option<String>,
}

impl MovieDetails {
    pub fn id(&self) -> MovieId {
        self.movie.id
    }

    pub fn title(&self) -> &str {
        &self.movie.title
    }

    pub fn genre_names(&self) -> impl Iterator<Item = &str> {
        self.genres.iter().map(|genre| genre.name.as_str())
    }
}
