pub mod sources;

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use marquee_core::{RetryPolicy, TmdbSettings};

use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_CAST_DEPARTMENT, DEFAULT_CAST_LIMIT,
    DEFAULT_IMAGE_BASE_URL, DEFAULT_INITIAL_BACKOFF, DEFAULT_LANGUAGE,
    DEFAULT_LOG_FILTER, DEFAULT_MAX_BACKOFF, DEFAULT_OVERVIEW_PREVIEW_CHARS,
    DEFAULT_REQUEST_TIMEOUT, DEFAULT_RETRY_ATTEMPTS, DEFAULT_SCROLL_STEP,
    DEFAULT_SEARCH_DEBOUNCE,
};
use crate::validation::ConfigGuardRailError;

#[derive(Debug, Clone)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub browse: BrowseConfig,
    /// `tracing-subscriber` filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
    pub metadata: ConfigMetadata,
}

#[derive(Clone, PartialEq)]
pub struct CatalogConfig {
    pub base_url: String,
    pub image_base_url: String,
    pub api_key: Option<String>,
    pub language: Option<String>,
    pub region: Option<String>,
    pub request_timeout: Duration,
    pub retry: RetryConfig,
}

impl fmt::Debug for CatalogConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogConfig")
            .field("base_url", &self.base_url)
            .field("image_base_url", &self.image_base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("language", &self.language)
            .field("region", &self.region)
            .field("request_timeout", &self.request_timeout)
            .field("retry", &self.retry)
            .finish()
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            api_key: None,
            language: Some(DEFAULT_LANGUAGE.to_string()),
            region: None,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            retry: RetryConfig::default(),
        }
    }
}

impl CatalogConfig {
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|key| !key.is_empty())
    }

    /// Client settings for the TMDB catalog. Every catalog call needs a key,
    /// so a missing one is a hard error here rather than at first request.
    pub fn tmdb_settings(&self) -> Result<TmdbSettings, ConfigGuardRailError> {
        let api_key = self
            .api_key
            .clone()
            .filter(|key| !key.is_empty())
            .ok_or(ConfigGuardRailError::MissingApiKey)?;
        Ok(TmdbSettings {
            base_url: self.base_url.clone(),
            api_key,
            language: self.language.clone(),
            region: self.region.clone(),
            timeout: self.request_timeout,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryConfig {
    pub max_attempts: u32,
    pub initial_backoff: Duration,
    pub max_backoff: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_RETRY_ATTEMPTS,
            initial_backoff: DEFAULT_INITIAL_BACKOFF,
            max_backoff: DEFAULT_MAX_BACKOFF,
        }
    }
}

impl From<&RetryConfig> for RetryPolicy {
    fn from(value: &RetryConfig) -> Self {
        RetryPolicy {
            max_attempts: value.max_attempts,
            initial_backoff: value.initial_backoff,
            max_backoff: value.max_backoff,
        }
    }
}

/// Interaction tuning for the home and detail views.
#[derive(Debug, Clone, PartialEq)]
pub struct BrowseConfig {
    pub search_debounce: Duration,
    /// Pixels moved by one shelf arrow press.
    pub scroll_step: f32,
    pub cast_limit: usize,
    pub cast_department: String,
    pub overview_preview_chars: usize,
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            search_debounce: DEFAULT_SEARCH_DEBOUNCE,
            scroll_step: DEFAULT_SCROLL_STEP,
            cast_limit: DEFAULT_CAST_LIMIT,
            cast_department: DEFAULT_CAST_DEPARTMENT.to_string(),
            overview_preview_chars: DEFAULT_OVERVIEW_PREVIEW_CHARS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Toml,
    Json,
}

impl FileFormat {
    /// `.json` files are JSON; anything else is read as TOML.
    pub fn from_path(path: &std::path::Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

/// Where the file layer of a [`Config`] came from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Defaults,
    File {
        path: PathBuf,
        format: FileFormat,
    },
}

#[derive(Debug, Clone, Default)]
pub struct ConfigMetadata {
    pub source: ConfigSource,
    pub env_file_loaded: bool,
    /// Environment variables that overrode file or default values.
    pub env_overrides: Vec<&'static str>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig::default(),
            browse: BrowseConfig::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            metadata: ConfigMetadata::default(),
        }
    }
}
