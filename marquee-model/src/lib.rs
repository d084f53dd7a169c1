//! Core data model definitions shared across Marquee crates.
#![allow(missing_docs)]

pub mod credits;
pub mod display;
pub mod error;
pub mod genre;
pub mod ids;
pub mod image;
pub mod movie;
pub mod prelude;
pub mod video;

// Intentionally curated re-exports for downstream consumers.
pub use credits::Actor;
pub use display::{
    OverviewText, age_rating, format_runtime, imdb_url, star_count, stars,
};
pub use error::{ModelError, Result as ModelResult};
pub use genre::{Genre, GenreCatalog};
pub use ids::{GenreId, MovieId, PersonId};
pub use image::{ImageSize, PosterSize, ProfileSize, image_url};
pub use movie::{Movie, MovieDetails};
pub use video::{Trailer, Video, select_trailer};
