use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use marquee_core::model::{GenreId, MovieId, select_trailer};
use marquee_core::{
    CatalogError, CatalogService, RetryPolicy, RetryingCatalog, TmdbCatalog,
    TmdbSettings,
};
use serde_json::{Value, json};

const API_KEY: &str = "test-key";

type Params = Query<HashMap<String, String>>;

fn authorized(params: &HashMap<String, String>) -> bool {
    params.get("api_key").map(String::as_str) == Some(API_KEY)
}

fn unauthorized() -> axum::response::Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({
            "status_code": 7,
            "status_message": "Invalid API key: You must be granted a valid key."
        })),
    )
        .into_response()
}

async fn popular(Query(params): Params) -> axum::response::Response {
    if !authorized(&params) {
        return unauthorized();
    }
    let page = params.get("page").cloned().unwrap_or_default();
    Json(json!({
        "page": page.parse::<u32>().unwrap_or(0),
        "results": [
            {"id": 1, "title": "Heat", "genre_ids": [28, 80], "vote_average": 7.9},
            {"id": 2, "title": "Alien", "genre_ids": [27, 878], "poster_path": "/alien.jpg"}
        ]
    }))
    .into_response()
}

async fn search(Query(params): Params) -> axum::response::Response {
    if !authorized(&params) {
        return unauthorized();
    }
    let query = params.get("query").cloned().unwrap_or_default();
    Json(json!({
        "results": [{"id": 42, "title": format!("match for {query}")}]
    }))
    .into_response()
}

async fn details(Path(id): Path<u64>) -> axum::response::Response {
    if id == 404 {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"status_message": "The resource you requested could not be found."})),
        )
            .into_response();
    }
    Json(json!({
        "id": id,
        "title": "Fight Club",
        "runtime": 139,
        "imdb_id": "tt0137523",
        "adult": false,
        "genres": [{"id": 18, "name": "Drama"}]
    }))
    .into_response()
}

async fn credits(Path(_id): Path<u64>) -> Json<Value> {
    Json(json!({
        "id": 550,
        "cast": [
            {"id": 819, "name": "Edward Norton", "character": "Narrator", "known_for_department": "Acting"},
            {"id": 7467, "name": "David Fincher", "known_for_department": "Directing"}
        ]
    }))
}

async fn videos(Path(_id): Path<u64>) -> Json<Value> {
    Json(json!({
        "results": [
            {"type": "Teaser", "site": "YouTube", "key": "a"},
            {"type": "Trailer", "site": "YouTube", "key": "b", "name": "Official Trailer"},
            {"type": "Trailer", "site": "YouTube", "key": "c"}
        ]
    }))
}

async fn genres() -> Json<Value> {
    Json(json!({
        "genres": [{"id": 28, "name": "Action"}, {"id": 35, "name": "Comedy"}]
    }))
}

async fn broken() -> impl IntoResponse {
    (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded")
}

async fn spawn_stub(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve stub");
    });
    format!("http://{addr}/3")
}

async fn stub_catalog() -> TmdbCatalog {
    let router = Router::new()
        .route("/3/movie/popular", get(popular))
        .route("/3/movie/top_rated", get(broken))
        .route("/3/search/movie", get(search))
        .route("/3/movie/{id}", get(details))
        .route("/3/movie/{id}/credits", get(credits))
        .route("/3/movie/{id}/videos", get(videos))
        .route("/3/genre/movie/list", get(genres));
    let base = spawn_stub(router).await;
    TmdbCatalog::new(TmdbSettings::new(API_KEY).with_base_url(base))
        .expect("build catalog")
}

#[tokio::test]
async fn popular_listing_decodes_into_movies() {
    let catalog = stub_catalog().await;
    let movies = catalog.popular_movies(1).await.expect("popular");

    assert_eq!(movies.len(), 2);
    assert_eq!(movies[0].id, MovieId(1));
    assert_eq!(movies[0].genre_ids, vec![GenreId(28), GenreId(80)]);
    assert_eq!(movies[1].poster_path.as_deref(), Some("/alien.jpg"));
}

#[tokio::test]
async fn search_forwards_the_query_text() {
    let catalog = stub_catalog().await;
    let movies = catalog.search_movies("star wars", 1).await.expect("search");
    assert_eq!(movies[0].title, "match for star wars");
}

#[tokio::test]
async fn details_cast_and_videos_resolve() {
    let catalog = stub_catalog().await;

    let details = catalog.movie_details(MovieId(550)).await.expect("details");
    assert_eq!(details.runtime_minutes, Some(139));
    assert_eq!(details.genre_names().collect::<Vec<_>>(), ["Drama"]);

    let cast = catalog.movie_cast(MovieId(550)).await.expect("cast");
    assert_eq!(cast.len(), 2);
    assert!(cast[0].is_in_department("Acting"));
    assert_eq!(cast[1].character, None);

    let videos = catalog.movie_videos(MovieId(550)).await.expect("videos");
    let trailer = select_trailer(&videos).expect("trailer");
    assert_eq!(trailer.key, "b");
}

#[tokio::test]
async fn genre_list_keeps_catalog_order() {
    let catalog = stub_catalog().await;
    let genres = catalog.genres().await.expect("genres");
    let names: Vec<_> = genres.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, ["Action", "Comedy"]);
}

#[tokio::test]
async fn status_codes_map_onto_the_error_taxonomy() {
    let catalog = stub_catalog().await;

    let missing = catalog.movie_details(MovieId(404)).await.unwrap_err();
    assert!(matches!(missing, CatalogError::NotFound));

    let upstream = catalog.top_rated_movies(1).await.unwrap_err();
    assert!(matches!(
        upstream,
        CatalogError::Upstream { status: 500, .. }
    ));
    assert!(!upstream.is_retryable());
}

#[tokio::test]
async fn wrong_api_key_is_reported_as_such() {
    let base = spawn_stub(Router::new().route("/3/movie/popular", get(popular)))
        .await;
    let catalog =
        TmdbCatalog::new(TmdbSettings::new("nope").with_base_url(base))
            .expect("build catalog");

    let err = catalog.popular_movies(1).await.unwrap_err();
    assert!(matches!(err, CatalogError::InvalidApiKey));
}

#[tokio::test]
async fn unreachable_host_is_a_transport_failure() {
    // Bind then drop to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let catalog = TmdbCatalog::new(
        TmdbSettings::new(API_KEY).with_base_url(format!("http://{addr}/3")),
    )
    .expect("build catalog");

    let err = catalog.genres().await.unwrap_err();
    assert!(err.is_transport(), "unexpected error: {err:?}");
}

#[tokio::test]
async fn retrying_catalog_leaves_upstream_errors_alone() {
    let hits = Arc::new(AtomicU32::new(0));
    let router = Router::new()
        .route(
            "/3/movie/top_rated",
            get(|State(hits): State<Arc<AtomicU32>>| async move {
                hits.fetch_add(1, Ordering::SeqCst);
                (StatusCode::BAD_GATEWAY, "try later")
            }),
        )
        .with_state(Arc::clone(&hits));
    let base = spawn_stub(router).await;
    let catalog = RetryingCatalog::new(
        TmdbCatalog::new(TmdbSettings::new(API_KEY).with_base_url(base))
            .expect("build catalog"),
        RetryPolicy::default(),
    );

    let err = catalog.top_rated_movies(1).await.unwrap_err();
    assert!(matches!(err, CatalogError::Upstream { status: 502, .. }));
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}
