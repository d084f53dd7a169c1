mod common;

use std::time::Duration;

use common::{ScriptedCatalog, settings};
use marquee_model::{
    Actor, Genre, Movie, MovieDetails, MovieId, PersonId, Video,
};
use marquee_player::DetailsController;

fn actor(id: u64, department: &str) -> Actor {
    Actor {
        id: PersonId(id),
        name: format!("Actor {id}"),
        character: Some(format!("Role {id}")),
        profile_path: Some(format!("/p{id}.jpg")),
        department: department.to_string(),
    }
}

fn details(id: u64, title: &str) -> MovieDetails {
    let mut movie = Movie::new(id, title).with_rating(7.9);
    movie.overview = "x".repeat(200);
    movie.poster_path = Some("/poster.jpg".into());
    MovieDetails {
        movie,
        runtime_minutes: Some(125),
        imdb_id: Some("tt0113277".into()),
        genres: vec![Genre::new(80, "Crime")],
        tagline: None,
    }
}

fn fixture() -> ScriptedCatalog {
    let mut catalog = ScriptedCatalog::default();
    catalog.details.insert(949, details(949, "Heat"));
    catalog.cast.insert(
        949,
        vec![
            actor(1, "Acting"),
            actor(2, "Directing"),
            actor(3, "Acting"),
            actor(4, "Acting"),
            actor(5, "Writing"),
            actor(6, "Acting"),
            actor(7, "Acting"),
            actor(8, "Acting"),
        ],
    );
    catalog.videos.insert(
        949,
        vec![
            Video::new("Teaser", "YouTube", "a"),
            Video::new("Trailer", "YouTube", "b"),
            Video::new("Trailer", "Vimeo", "c"),
        ],
    );
    catalog
}

#[tokio::test(start_paused = true)]
async fn detail_page_fills_every_slot() {
    let mut page = DetailsController::new(fixture().shared(), settings());
    page.open(MovieId(949));
    page.run_until_idle().await;

    let state = page.state();
    assert_eq!(state.details.as_ref().map(|d| d.title()), Some("Heat"));
    let cast: Vec<u64> = state.cast.iter().map(|a| a.id.get()).collect();
    assert_eq!(cast, vec![1, 3, 4, 6, 7]);

    assert_eq!(
        page.trailer_url().as_deref(),
        Some("https://www.youtube.com/watch?v=b")
    );
    assert_eq!(page.runtime_label().as_deref(), Some("2h 5min"));
    assert_eq!(page.stars_label().as_deref(), Some("★★★★"));
    assert_eq!(page.age_rating_label(), Some("PG-13"));
    assert_eq!(
        page.imdb_link().as_deref(),
        Some("https://www.imdb.com/title/tt0113277")
    );
    assert_eq!(
        page.poster_url().as_deref(),
        Some("https://image.tmdb.org/t/p/original/poster.jpg")
    );
    assert_eq!(
        page.cast_profile_urls()[0].as_deref(),
        Some("https://image.tmdb.org/t/p/w200/p1.jpg")
    );
}

#[tokio::test(start_paused = true)]
async fn overview_toggles_between_preview_and_full_text() {
    let mut page = DetailsController::new(fixture().shared(), settings());
    page.open(MovieId(949));
    page.run_until_idle().await;

    let preview = page.overview_text().expect("overview");
    assert_eq!(preview, format!("{}... ", "x".repeat(125)));

    page.toggle_overview();
    assert_eq!(page.overview_text(), Some("x".repeat(200)));
}

#[tokio::test(start_paused = true)]
async fn title_without_a_youtube_trailer_has_none() {
    let mut catalog = fixture();
    catalog
        .videos
        .insert(949, vec![Video::new("Trailer", "Vimeo", "c")]);
    let mut page = DetailsController::new(catalog.shared(), settings());
    page.open(MovieId(949));
    page.run_until_idle().await;

    assert!(page.state().videos_loaded);
    assert_eq!(page.trailer_url(), None);
}

#[tokio::test(start_paused = true)]
async fn failed_slots_leave_the_others_intact() {
    let mut catalog = fixture();
    catalog.cast.clear();
    let mut page = DetailsController::new(catalog.shared(), settings());
    page.open(MovieId(949));
    page.run_until_idle().await;

    assert!(page.state().details.is_some());
    assert!(page.state().cast.is_empty());
    assert!(page.trailer_url().is_some());
    assert!(page.is_idle());
}

#[tokio::test(start_paused = true)]
async fn reopening_supersedes_the_slow_title() {
    let mut catalog = fixture();
    catalog.details.insert(1, details(1, "Slow"));
    catalog.cast.insert(1, vec![actor(99, "Acting")]);
    catalog.detail_delays.insert(1, Duration::from_secs(3));
    let mut page = DetailsController::new(catalog.shared(), settings());

    page.open(MovieId(1));
    page.open(MovieId(949));
    page.run_until_idle().await;
    assert_eq!(page.state().movie_id, Some(MovieId(949)));

    // The slow title's three responses still arrive and are dropped.
    tokio::time::advance(Duration::from_secs(5)).await;
    for _ in 0..3 {
        let late = page.next_message().await.expect("late response");
        page.update(late);
    }

    assert_eq!(
        page.state().details.as_ref().map(|d| d.id()),
        Some(MovieId(949))
    );
    assert!(page.state().cast.iter().all(|a| a.id != PersonId(99)));
}

#[tokio::test(start_paused = true)]
async fn shutdown_discards_in_flight_lookups() {
    let mut page = DetailsController::new(fixture().shared(), settings());
    page.open(MovieId(949));
    page.shutdown();

    assert!(page.is_idle());
    assert!(page.next_message().await.is_none());
    page.open(MovieId(949));
    assert!(page.state().details.is_none());
    assert!(page.is_shut_down());
}
