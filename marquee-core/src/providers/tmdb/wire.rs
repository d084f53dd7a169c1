//! Response shapes of the TMDB v3 endpoints Marquee reads, and their
//! conversion into model records. Fields the provider may omit or null out
//! are optional here and defaulted during conversion.

use marquee_model::{
    Actor, Genre, GenreId, Movie, MovieDetails, MovieId, PersonId, Video,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct Page<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub status_message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MovieItem {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub original_title: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f32>,
    #[serde(default)]
    pub vote_count: Option<u32>,
    #[serde(default)]
    pub popularity: Option<f32>,
    #[serde(default)]
    pub adult: Option<bool>,
    #[serde(default)]
    pub video: Option<bool>,
    #[serde(default)]
    pub genre_ids: Option<Vec<u32>>,
}

impl From<MovieItem> for Movie {
    fn from(item: MovieItem) -> Self {
        Movie {
            id: MovieId(item.id),
            title: item.title.unwrap_or_default(),
            original_title: item.original_title,
            overview: item.overview.unwrap_or_default(),
            poster_path: non_empty(item.poster_path),
            backdrop_path: non_empty(item.backdrop_path),
            release_date: non_empty(item.release_date),
            vote_average: item.vote_average.unwrap_or_default(),
            vote_count: item.vote_count.unwrap_or_default(),
            popularity: item.popularity.unwrap_or_default(),
            adult: item.adult.unwrap_or_default(),
            video: item.video.unwrap_or_default(),
            genre_ids: item
                .genre_ids
                .unwrap_or_default()
                .into_iter()
                .map(GenreId)
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct MovieDetailsBody {
    #[serde(flatten)]
    pub movie: MovieItem,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub imdb_id: Option<String>,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub genres: Vec<GenreItem>,
}

impl From<MovieDetailsBody> for MovieDetails {
    fn from(body: MovieDetailsBody) -> Self {
        let genres: Vec<Genre> =
            body.genres.into_iter().map(Genre::from).collect();
        let mut movie = Movie::from(body.movie);
        // The detail endpoint carries full genre objects instead of ids.
        if movie.genre_ids.is_empty() {
            movie.genre_ids = genres.iter().map(|genre| genre.id).collect();
        }
        MovieDetails {
            movie,
            runtime_minutes: body.runtime.filter(|minutes| *minutes > 0),
            imdb_id: non_empty(body.imdb_id),
            genres,
            tagline: non_empty(body.tagline),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GenreItem {
    pub id: u32,
    #[serde(default)]
    pub name: String,
}

impl From<GenreItem> for Genre {
    fn from(item: GenreItem) -> Self {
        Genre::new(item.id, item.name)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GenreList {
    #[serde(default)]
    pub genres: Vec<GenreItem>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Credits {
    #[serde(default)]
    pub cast: Vec<CastMember>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CastMember {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub character: Option<String>,
    #[serde(default)]
    pub profile_path: Option<String>,
    #[serde(default)]
    pub known_for_department: Option<String>,
}

impl From<CastMember> for Actor {
    fn from(member: CastMember) -> Self {
        Actor {
            id: PersonId(member.id),
            name: member.name,
            character: non_empty(member.character),
            profile_path: non_empty(member.profile_path),
            department: member.known_for_department.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct VideoItem {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub site: String,
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl From<VideoItem> for Video {
    fn from(item: VideoItem) -> Self {
        Video {
            kind: item.kind,
            site: item.site,
            key: item.key,
            name: item.name,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
