use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use marquee_core::{CatalogError, CatalogService, Result};
use marquee_model::{Actor, Genre, Movie, MovieDetails, MovieId, Video};
use marquee_player::cli::{self, Command};
use marquee_player::{BrowseSettings, HomeController};
use mockall::mock;

mock! {
    pub Catalog {}

    #[async_trait]
    impl CatalogService for Catalog {
        async fn popular_movies(&self, page: u32) -> Result<Vec<Movie>>;
        async fn top_rated_movies(&self, page: u32) -> Result<Vec<Movie>>;
        async fn search_movies(
            &self,
            query: &str,
            page: u32,
        ) -> Result<Vec<Movie>>;
        async fn movie_details(&self, id: MovieId) -> Result<MovieDetails>;
        async fn recommendations(&self, id: MovieId) -> Result<Vec<Movie>>;
        async fn movie_cast(&self, id: MovieId) -> Result<Vec<Actor>>;
        async fn genres(&self) -> Result<Vec<Genre>>;
        async fn movie_videos(&self, id: MovieId) -> Result<Vec<Video>>;
    }
}

#[tokio::test(start_paused = true)]
async fn burst_of_edits_reaches_the_catalog_once() {
    let mut catalog = MockCatalog::new();
    catalog
        .expect_search_movies()
        .withf(|query, page| query == "star wars" && *page == 1)
        .times(1)
        .returning(|_, _| Ok(vec![Movie::new(11, "Star Wars")]));

    let mut home =
        HomeController::new(Arc::new(catalog), BrowseSettings::default());
    let mut typed = String::new();
    for ch in "star wars".chars() {
        typed.push(ch);
        home.set_query(typed.as_str());
        tokio::time::advance(Duration::from_millis(120)).await;
    }
    home.run_until_idle().await;

    assert_eq!(home.search_results().len(), 1);
    assert_eq!(home.search_results()[0].title, "Star Wars");
}

#[tokio::test(start_paused = true)]
async fn whitespace_never_reaches_the_catalog() {
    let mut catalog = MockCatalog::new();
    catalog.expect_search_movies().never();

    let mut home =
        HomeController::new(Arc::new(catalog), BrowseSettings::default());
    home.set_query("  ");
    home.set_query("\t");
    tokio::time::advance(Duration::from_secs(1)).await;

    assert!(home.is_idle());
    assert!(home.search_results().is_empty());
}

#[tokio::test(start_paused = true)]
async fn slower_debounce_waits_longer() {
    let mut catalog = MockCatalog::new();
    catalog
        .expect_search_movies()
        .times(1)
        .returning(|_, _| Ok(Vec::new()));

    let settings = BrowseSettings::default()
        .with_search_debounce(Duration::from_secs(2));
    let mut home = HomeController::new(Arc::new(catalog), settings);
    home.set_query("heat");
    tokio::time::advance(Duration::from_millis(1500)).await;
    home.set_query("heat 1995");
    tokio::time::advance(Duration::from_millis(1500)).await;

    assert!(!home.search().is_searching());
    home.run_until_idle().await;
}

#[tokio::test(start_paused = true)]
async fn genres_command_lists_the_reference_set() {
    let mut catalog = MockCatalog::new();
    catalog.expect_genres().times(1).returning(|| {
        Ok(vec![Genre::new(28, "Action"), Genre::new(35, "Comedy")])
    });

    let output = cli::execute(
        &Command::Genres,
        false,
        Arc::new(catalog),
        BrowseSettings::default(),
    )
    .await
    .expect("genres");

    assert_eq!(output, "    28  Action\n    35  Comedy\n");
}

#[tokio::test(start_paused = true)]
async fn details_command_fails_when_the_title_is_missing() {
    let mut catalog = MockCatalog::new();
    catalog
        .expect_movie_details()
        .returning(|_| Err(CatalogError::NotFound));
    catalog.expect_movie_cast().returning(|_| Ok(Vec::new()));
    catalog.expect_movie_videos().returning(|_| Ok(Vec::new()));

    let err = cli::execute(
        &Command::Details { id: MovieId(404) },
        false,
        Arc::new(catalog),
        BrowseSettings::default(),
    )
    .await
    .unwrap_err();

    assert!(err.to_string().contains("404"), "{err}");
}
