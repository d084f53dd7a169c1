use marquee_core::CatalogError;
use marquee_model::{Actor, MovieDetails, Video};

/// Lookup completions for the detail page. Every variant carries the
/// generation of the slot it was issued under.
#[derive(Debug)]
pub enum DetailsMessage {
    DetailsLoaded {
        generation: u64,
        result: Result<MovieDetails, CatalogError>,
    },
    CastLoaded {
        generation: u64,
        result: Result<Vec<Actor>, CatalogError>,
    },
    VideosLoaded {
        generation: u64,
        result: Result<Vec<Video>, CatalogError>,
    },
}

impl DetailsMessage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::DetailsLoaded { .. } => "Details::DetailsLoaded",
            Self::CastLoaded { .. } => "Details::CastLoaded",
            Self::VideosLoaded { .. } => "Details::VideosLoaded",
        }
    }
}
