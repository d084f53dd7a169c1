//! Convenience re-exports for crates that work with catalog records.

pub use crate::credits::Actor;
pub use crate::genre::{Genre, GenreCatalog};
pub use crate::ids::{GenreId, MovieId, PersonId};
pub use crate::movie::{Movie, MovieDetails};
pub use crate::video::{Trailer, Video};
