use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::constants::env;
use crate::util::non_blank;

/// Raw configuration as written in a TOML or JSON file. Durations are
/// humantime strings (`"500ms"`, `"30s"`).
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub catalog: FileCatalogConfig,
    #[serde(default)]
    pub browse: FileBrowseConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FileCatalogConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout: Option<String>,
    #[serde(default)]
    pub retry: FileRetryConfig,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FileRetryConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_attempts: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_backoff: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_backoff: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FileBrowseConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_debounce: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scroll_step: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cast_limit: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cast_department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overview_preview_chars: Option<usize>,
}

/// Environment overrides, gathered through a lookup function so callers
/// can layer a `.env` file under the process environment (or replace both
/// in tests).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EnvConfig {
    pub config_path: Option<PathBuf>,
    pub api_key: Option<String>,
    pub language: Option<String>,
    pub region: Option<String>,
    pub base_url: Option<String>,
    /// Raw value; parsed by the loader so a bad value can be reported.
    pub search_debounce_ms: Option<String>,
    pub log_filter: Option<String>,
}

impl EnvConfig {
    pub fn gather<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| non_blank(lookup(name));
        Self {
            config_path: var(env::CONFIG_PATH).map(PathBuf::from),
            api_key: var(env::API_KEY),
            language: var(env::LANGUAGE),
            region: var(env::REGION),
            base_url: var(env::BASE_URL),
            search_debounce_ms: var(env::SEARCH_DEBOUNCE_MS),
            log_filter: var(env::LOG_FILTER),
        }
    }

    /// Process environment first, then the given `.env` entries.
    pub fn gather_layered(dotenv: &HashMap<String, String>) -> Self {
        Self::gather(|name| {
            std::env::var(name)
                .ok()
                .or_else(|| dotenv.get(name).cloned())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gather_ignores_blank_values() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("TMDB_API_KEY", " abc "),
            ("TMDB_REGION", "   "),
            ("MARQUEE_SEARCH_DEBOUNCE_MS", "250"),
        ]);
        let env = EnvConfig::gather(|name| {
            vars.get(name).map(|value| value.to_string())
        });

        assert_eq!(env.api_key.as_deref(), Some("abc"));
        assert_eq!(env.region, None);
        assert_eq!(env.search_debounce_ms.as_deref(), Some("250"));
        assert_eq!(env.config_path, None);
    }

    #[test]
    fn file_config_rejects_unknown_keys() {
        let parsed = toml::from_str::<FileConfig>("[catalog]\napi_kee = \"x\"\n");
        assert!(parsed.is_err());
    }
}
