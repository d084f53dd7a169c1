//! TMDB v3 catalog client.

mod wire;

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use marquee_model::{Actor, Genre, Movie, MovieDetails, MovieId, Video};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::catalog::CatalogService;
use crate::error::{CatalogError, Result};
use wire::{
    Credits, ErrorBody, GenreList, MovieDetailsBody, MovieItem, Page, VideoItem,
};

pub const TMDB_V3_BASE: &str = "https://api.themoviedb.org/3";
pub const TMDB_IMAGE_BASE: &str = "https://image.tmdb.org/t/p";

/// Connection settings for [`TmdbCatalog`].
#[derive(Clone, PartialEq, Eq)]
pub struct TmdbSettings {
    pub base_url: String,
    pub api_key: String,
    /// ISO 639-1 language tag, e.g. `en-US`.
    pub language: Option<String>,
    /// ISO 3166-1 region applied to listing endpoints.
    pub region: Option<String>,
    pub timeout: Duration,
}

impl TmdbSettings {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: TMDB_V3_BASE.to_string(),
            api_key: api_key.into(),
            language: Some("en-US".to_string()),
            region: None,
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl fmt::Debug for TmdbSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TmdbSettings")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("language", &self.language)
            .field("region", &self.region)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[derive(Debug, Default, Serialize)]
struct TmdbQuery<'a> {
    api_key: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    region: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    query: Option<&'a str>,
}

pub struct TmdbCatalog {
    http: reqwest::Client,
    settings: TmdbSettings,
}

impl fmt::Debug for TmdbCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TmdbCatalog")
            .field("settings", &self.settings)
            .finish()
    }
}

impl TmdbCatalog {
    pub fn new(settings: TmdbSettings) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()?;
        Ok(Self { http, settings })
    }

    pub fn settings(&self) -> &TmdbSettings {
        &self.settings
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.settings.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn base_query(&self) -> TmdbQuery<'_> {
        TmdbQuery {
            api_key: &self.settings.api_key,
            language: self.settings.language.as_deref(),
            ..TmdbQuery::default()
        }
    }

    fn listing_query(&self, page: u32) -> TmdbQuery<'_> {
        TmdbQuery {
            region: self.settings.region.as_deref(),
            page: Some(page.max(1)),
            ..self.base_query()
        }
    }

    fn classify(&self, err: reqwest::Error) -> CatalogError {
        if err.is_timeout() {
            CatalogError::Timeout(self.settings.timeout)
        } else {
            CatalogError::from(err)
        }
    }

    async fn get_json<T>(&self, path: &str, query: &TmdbQuery<'_>) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint(path);
        debug!(path, "catalog request");

        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|err| self.classify(err))?;

        let status = response.status();
        if status.is_success() {
            let body =
                response.bytes().await.map_err(|err| self.classify(err))?;
            return serde_json::from_slice::<T>(&body).map_err(|err| {
                warn!(path, error = %err, "catalog response did not decode");
                CatalogError::from(err)
            });
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.status_message)
            .unwrap_or_else(|| {
                format!("TMDB request failed with status {}", status)
            });

        warn!(
            path,
            status = status.as_u16(),
            %message,
            "catalog request failed"
        );
        Err(CatalogError::from_status(status.as_u16(), message))
    }

    async fn get_movies(
        &self,
        path: &str,
        query: &TmdbQuery<'_>,
    ) -> Result<Vec<Movie>> {
        let page: Page<MovieItem> = self.get_json(path, query).await?;
        Ok(page.results.into_iter().map(Movie::from).collect())
    }
}

#[async_trait]
impl CatalogService for TmdbCatalog {
    async fn popular_movies(&self, page: u32) -> Result<Vec<Movie>> {
        self.get_movies("movie/popular", &self.listing_query(page))
            .await
    }

    async fn top_rated_movies(&self, page: u32) -> Result<Vec<Movie>> {
        self.get_movies("movie/top_rated", &self.listing_query(page))
            .await
    }

    async fn search_movies(
        &self,
        query: &str,
        page: u32,
    ) -> Result<Vec<Movie>> {
        let params = TmdbQuery {
            query: Some(query),
            page: Some(page.max(1)),
            ..self.base_query()
        };
        self.get_movies("search/movie", &params).await
    }

    async fn movie_details(&self, id: MovieId) -> Result<MovieDetails> {
        let body: MovieDetailsBody = self
            .get_json(&format!("movie/{id}"), &self.base_query())
            .await?;
        Ok(body.into())
    }

    async fn recommendations(&self, id: MovieId) -> Result<Vec<Movie>> {
        let params = TmdbQuery {
            page: Some(1),
            ..self.base_query()
        };
        self.get_movies(&format!("movie/{id}/recommendations"), &params)
            .await
    }

    async fn movie_cast(&self, id: MovieId) -> Result<Vec<Actor>> {
        let credits: Credits = self
            .get_json(&format!("movie/{id}/credits"), &self.base_query())
            .await?;
        Ok(credits.cast.into_iter().map(Actor::from).collect())
    }

    async fn genres(&self) -> Result<Vec<Genre>> {
        let list: GenreList = self
            .get_json("genre/movie/list", &self.base_query())
            .await?;
        Ok(list.genres.into_iter().map(Genre::from).collect())
    }

    async fn movie_videos(&self, id: MovieId) -> Result<Vec<Video>> {
        let page: Page<VideoItem> = self
            .get_json(&format!("movie/{id}/videos"), &self.base_query())
            .await?;
        Ok(page.results.into_iter().map(Video::from).collect())
    }
}
