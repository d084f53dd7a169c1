use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::models::Config;

#[derive(Debug, Error)]
pub enum ConfigGuardRailError {
    #[error("{field} is not a valid URL: '{value}'")]
    InvalidUrl {
        field: &'static str,
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("{field} must use http or https, got '{scheme}'")]
    UnsupportedScheme { field: &'static str, scheme: String },
    #[error("no TMDB API key configured; set TMDB_API_KEY or catalog.api_key")]
    MissingApiKey,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn extend(&mut self, other: ConfigWarnings) {
        self.items.extend(other.items);
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConfigWarning> {
        self.items.iter()
    }
}

/// Rejects configurations that cannot work and clamps the ones that would
/// misbehave, reporting every clamp as a warning.
pub fn apply_guard_rails(
    config: &mut Config,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let mut warnings = ConfigWarnings::default();

    check_http_url("catalog.base_url", &config.catalog.base_url)?;
    check_http_url("catalog.image_base_url", &config.catalog.image_base_url)?;

    if !config.catalog.has_api_key() {
        warnings.push_with_hint(
            "No TMDB API key configured; catalog requests will be rejected",
            "Set TMDB_API_KEY in the environment or a .env file",
        );
    }

    let browse = &mut config.browse;
    if browse.search_debounce.is_zero() {
        warnings.push("search_debounce of 0 clamped to 1ms");
        browse.search_debounce = Duration::from_millis(1);
    }

    if !browse.scroll_step.is_finite() || browse.scroll_step < 1.0 {
        warnings.push(format!(
            "scroll_step of {} clamped to 1",
            browse.scroll_step
        ));
        browse.scroll_step = 1.0;
    }

    if browse.cast_limit == 0 {
        warnings.push("cast_limit is 0; detail pages will show no cast");
    }

    let retry = &mut config.catalog.retry;
    if retry.max_attempts == 0 {
        warnings.push("retry.max_attempts of 0 clamped to 1");
        retry.max_attempts = 1;
    }
    if retry.initial_backoff > retry.max_backoff {
        warnings.push_with_hint(
            "retry.initial_backoff exceeds retry.max_backoff",
            "max_backoff raised to match initial_backoff",
        );
        retry.max_backoff = retry.initial_backoff;
    }

    if config.catalog.request_timeout.is_zero() {
        warnings.push("request_timeout of 0 clamped to 1s");
        config.catalog.request_timeout = Duration::from_secs(1);
    }

    Ok(warnings)
}

fn check_http_url(
    field: &'static str,
    value: &str,
) -> Result<(), ConfigGuardRailError> {
    let parsed = Url::parse(value).map_err(|source| {
        ConfigGuardRailError::InvalidUrl {
            field,
            value: value.to_string(),
            source,
        }
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigGuardRailError::UnsupportedScheme {
            field,
            scheme: other.to_string(),
        }),
    }
}
