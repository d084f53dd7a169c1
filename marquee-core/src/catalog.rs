use async_trait::async_trait;
use marquee_model::{Actor, Genre, Movie, MovieDetails, MovieId, Video};

use crate::error::Result;

/// Remote movie catalog.
///
/// Pages are 1-based; implementations clamp `0` to `1`. Every call either
/// yields typed records or a [`CatalogError`](crate::CatalogError). Callers
/// in the interaction layer treat any error as "lookup failed".
#[async_trait]
pub trait CatalogService: Send + Sync {
    async fn popular_movies(&self, page: u32) -> Result<Vec<Movie>>;

    async fn top_rated_movies(&self, page: u32) -> Result<Vec<Movie>>;

    async fn search_movies(&self, query: &str, page: u32)
    -> Result<Vec<Movie>>;

    async fn movie_details(&self, id: MovieId) -> Result<MovieDetails>;

    async fn recommendations(&self, id: MovieId) -> Result<Vec<Movie>>;

    /// Billing order as reported by the provider.
    async fn movie_cast(&self, id: MovieId) -> Result<Vec<Actor>>;

    async fn genres(&self) -> Result<Vec<Genre>>;

    async fn movie_videos(&self, id: MovieId) -> Result<Vec<Video>>;
}
