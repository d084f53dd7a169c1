#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use marquee_core::{CatalogError, CatalogService, Result};
use marquee_model::{Actor, Genre, Movie, MovieDetails, MovieId, Video};
use marquee_player::BrowseSettings;
use tokio::sync::oneshot;

pub fn settings() -> BrowseSettings {
    BrowseSettings::default()
}

pub fn ids(movies: &[Movie]) -> Vec<u64> {
    movies.iter().map(|movie| movie.id.get()).collect()
}

/// Catalog answering from fixtures. Search replies for a query can be held
/// back behind a gate and released by the test, and detail lookups can be
/// delayed per title, so tests decide the order responses resolve in.
#[derive(Default)]
pub struct ScriptedCatalog {
    pub popular: Vec<Movie>,
    pub top_rated: Vec<Movie>,
    pub recommendations: HashMap<u64, Vec<Movie>>,
    pub genres: Vec<Genre>,
    pub details: HashMap<u64, MovieDetails>,
    pub cast: HashMap<u64, Vec<Actor>>,
    pub videos: HashMap<u64, Vec<Video>>,
    pub search_results: HashMap<String, Vec<Movie>>,
    pub failing_queries: HashSet<String>,
    pub detail_delays: HashMap<u64, Duration>,
    gates: Mutex<HashMap<String, oneshot::Receiver<Vec<Movie>>>>,
    searches: Mutex<Vec<String>>,
    recommendation_seeds: Mutex<Vec<u64>>,
}

impl ScriptedCatalog {
    pub fn with_popular(popular: Vec<Movie>) -> Self {
        Self {
            popular,
            ..Self::default()
        }
    }

    /// Holds the reply for `query` until the returned sender fires.
    pub fn gate(&self, query: &str) -> oneshot::Sender<Vec<Movie>> {
        let (tx, rx) = oneshot::channel();
        self.gates
            .lock()
            .expect("gates lock")
            .insert(query.to_string(), rx);
        tx
    }

    pub fn searches(&self) -> Vec<String> {
        self.searches.lock().expect("searches lock").clone()
    }

    pub fn recommendation_seeds(&self) -> Vec<u64> {
        self.recommendation_seeds
            .lock()
            .expect("seeds lock")
            .clone()
    }

    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    async fn delay(&self, id: MovieId) {
        if let Some(delay) = self.detail_delays.get(&id.get()) {
            tokio::time::sleep(*delay).await;
        }
    }
}

#[async_trait]
impl CatalogService for ScriptedCatalog {
    async fn popular_movies(&self, _page: u32) -> Result<Vec<Movie>> {
        Ok(self.popular.clone())
    }

    async fn top_rated_movies(&self, _page: u32) -> Result<Vec<Movie>> {
        Ok(self.top_rated.clone())
    }

    async fn search_movies(
        &self,
        query: &str,
        _page: u32,
    ) -> Result<Vec<Movie>> {
        self.searches
            .lock()
            .expect("searches lock")
            .push(query.to_string());

        let gate = self.gates.lock().expect("gates lock").remove(query);
        if let Some(gate) = gate {
            return gate
                .await
                .map_err(|_| CatalogError::transport("gate dropped"));
        }
        if self.failing_queries.contains(query) {
            return Err(CatalogError::from_status(500, "boom"));
        }
        Ok(self.search_results.get(query).cloned().unwrap_or_default())
    }

    async fn movie_details(&self, id: MovieId) -> Result<MovieDetails> {
        self.delay(id).await;
        self.details
            .get(&id.get())
            .cloned()
            .ok_or(CatalogError::NotFound)
    }

    async fn recommendations(&self, id: MovieId) -> Result<Vec<Movie>> {
        self.recommendation_seeds
            .lock()
            .expect("seeds lock")
            .push(id.get());
        Ok(self
            .recommendations
            .get(&id.get())
            .cloned()
            .unwrap_or_default())
    }

    async fn movie_cast(&self, id: MovieId) -> Result<Vec<Actor>> {
        self.delay(id).await;
        self.cast.get(&id.get()).cloned().ok_or(CatalogError::NotFound)
    }

    async fn genres(&self) -> Result<Vec<Genre>> {
        Ok(self.genres.clone())
    }

    async fn movie_videos(&self, id: MovieId) -> Result<Vec<Video>> {
        self.delay(id).await;
        Ok(self.videos.get(&id.get()).cloned().unwrap_or_default())
    }
}
