use std::time::Duration;

pub const DEFAULT_CONFIG_LOCATIONS: &[&str] =
    &["marquee.toml", "marquee.json", "config/marquee.toml"];

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";
pub const DEFAULT_LANGUAGE: &str = "en-US";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub const DEFAULT_RETRY_ATTEMPTS: u32 = 3;
pub const DEFAULT_INITIAL_BACKOFF: Duration = Duration::from_millis(200);
pub const DEFAULT_MAX_BACKOFF: Duration = Duration::from_secs(2);

pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);
pub const DEFAULT_SCROLL_STEP: f32 = 300.0;
pub const DEFAULT_CAST_LIMIT: usize = 5;
pub const DEFAULT_CAST_DEPARTMENT: &str = "Acting";
pub const DEFAULT_OVERVIEW_PREVIEW_CHARS: usize = 125;

pub const DEFAULT_LOG_FILTER: &str = "marquee=info";

pub mod env {
    pub const CONFIG_PATH: &str = "MARQUEE_CONFIG_PATH";
    pub const API_KEY: &str = "TMDB_API_KEY";
    pub const LANGUAGE: &str = "TMDB_LANG";
    pub const REGION: &str = "TMDB_REGION";
    pub const BASE_URL: &str = "MARQUEE_BASE_URL";
    pub const SEARCH_DEBOUNCE_MS: &str = "MARQUEE_SEARCH_DEBOUNCE_MS";
    pub const LOG_FILTER: &str = "MARQUEE_LOG";
}
