pub mod error;

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::constants::{DEFAULT_CONFIG_LOCATIONS, env};
use crate::models::sources::{EnvConfig, FileConfig};
use crate::models::{
    BrowseConfig, CatalogConfig, Config, ConfigMetadata, ConfigSource,
    FileFormat, RetryConfig,
};
use crate::util::{non_blank, parse_duration};
use crate::validation::{self, ConfigWarnings};
use error::ConfigLoadError;

type EnvLookup = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

#[derive(Debug, Default, Clone)]
pub struct ConfigLoaderOptions {
    pub config_path: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
    /// Directory that relative default locations and `.env` resolve
    /// against. Defaults to the working directory.
    pub search_root: Option<PathBuf>,
    pub skip_env_file: bool,
}

#[derive(Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
    env_lookup: Option<EnvLookup>,
}

impl fmt::Debug for ConfigLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigLoader")
            .field("options", &self.options)
            .field("custom_env", &self.env_lookup.is_some())
            .finish()
    }
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ConfigLoaderOptions) -> Self {
        Self {
            options,
            env_lookup: None,
        }
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    pub fn with_search_root<P: Into<PathBuf>>(mut self, root: P) -> Self {
        self.options.search_root = Some(root.into());
        self
    }

    pub fn without_env_file(mut self) -> Self {
        self.options.skip_env_file = true;
        self
    }

    /// Replaces the process environment as the override layer. The `.env`
    /// file, when present, still sits underneath it.
    pub fn with_env_lookup<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        self.env_lookup = Some(Arc::new(lookup));
        self
    }

    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let (dotenv, env_file_loaded) = self.read_env_file()?;

        let env_config = match &self.env_lookup {
            Some(lookup) => EnvConfig::gather(|name| {
                lookup(name).or_else(|| dotenv.get(name).cloned())
            }),
            None => EnvConfig::gather_layered(&dotenv),
        };

        let (file_config, source) = self.load_file_config(&env_config)?;

        let mut warnings = ConfigWarnings::default();
        if matches!(source, ConfigSource::Defaults) {
            warnings.push_with_hint(
                "No marquee.toml detected; using defaults and environment variables",
                "Point MARQUEE_CONFIG_PATH at a config file to customize browsing",
            );
        }

        let mut config =
            self.compose_config(file_config, env_config, &mut warnings)?;
        config.metadata.source = source;
        config.metadata.env_file_loaded = env_file_loaded;

        warnings.extend(validation::apply_guard_rails(&mut config)?);
        debug!(
            source = ?config.metadata.source,
            overrides = ?config.metadata.env_overrides,
            warnings = warnings.len(),
            "configuration loaded"
        );

        Ok(ConfigLoad { config, warnings })
    }

    fn resolve(&self, relative: impl AsRef<Path>) -> PathBuf {
        match &self.options.search_root {
            Some(root) => root.join(relative),
            None => relative.as_ref().to_path_buf(),
        }
    }

    fn read_env_file(
        &self,
    ) -> Result<(HashMap<String, String>, bool), ConfigLoadError> {
        if self.options.skip_env_file {
            return Ok((HashMap::new(), false));
        }

        let path = self
            .options
            .env_file
            .clone()
            .unwrap_or_else(|| self.resolve(".env"));

        let entries = match dotenvy::from_path_iter(&path) {
            Ok(entries) => entries,
            Err(dotenvy::Error::Io(_)) => return Ok((HashMap::new(), false)),
            Err(err) => return Err(err.into()),
        };

        let mut vars = HashMap::new();
        for entry in entries {
            let (key, value) = entry?;
            vars.insert(key, value);
        }
        Ok((vars, true))
    }

    fn load_file_config(
        &self,
        env_config: &EnvConfig,
    ) -> Result<(Option<FileConfig>, ConfigSource), ConfigLoadError> {
        let (path, required) = if let Some(explicit) = &self.options.config_path
        {
            (Some(explicit.clone()), true)
        } else if let Some(from_env) = &env_config.config_path {
            (Some(from_env.clone()), true)
        } else {
            let found = DEFAULT_CONFIG_LOCATIONS
                .iter()
                .map(|candidate| self.resolve(candidate))
                .find(|candidate| candidate.exists());
            (found, false)
        };

        let Some(path) = path else {
            return Ok((None, ConfigSource::Defaults));
        };

        if !path.exists() {
            if required {
                return Err(ConfigLoadError::MissingConfig { path });
            }
            return Ok((None, ConfigSource::Defaults));
        }

        let contents =
            fs::read_to_string(&path).map_err(|source| ConfigLoadError::Io {
                path: path.clone(),
                source,
            })?;

        let format = FileFormat::from_path(&path);
        let file_config = match format {
            FileFormat::Toml => toml::from_str::<FileConfig>(&contents)
                .map_err(|source| ConfigLoadError::ParseToml {
                    path: path.clone(),
                    source,
                })?,
            FileFormat::Json => serde_json::from_str::<FileConfig>(&contents)
                .map_err(|source| ConfigLoadError::ParseJson {
                    path: path.clone(),
                    source,
                })?,
        };

        Ok((Some(file_config), ConfigSource::File { path, format }))
    }

    fn compose_config(
        &self,
        file_config: Option<FileConfig>,
        env_config: EnvConfig,
        warnings: &mut ConfigWarnings,
    ) -> Result<Config, ConfigLoadError> {
        let FileConfig {
            catalog: file_catalog,
            browse: file_browse,
            log_filter: file_log_filter,
        } = file_config.unwrap_or_default();

        let defaults = Config::default();
        let mut overrides = Vec::new();

        let catalog_defaults = defaults.catalog;
        let retry_defaults = catalog_defaults.retry;
        let catalog = CatalogConfig {
            base_url: layer(
                env_config.base_url,
                env::BASE_URL,
                &mut overrides,
                non_blank(file_catalog.base_url),
            )
            .unwrap_or(catalog_defaults.base_url),
            image_base_url: non_blank(file_catalog.image_base_url)
                .unwrap_or(catalog_defaults.image_base_url),
            api_key: layer(
                env_config.api_key,
                env::API_KEY,
                &mut overrides,
                non_blank(file_catalog.api_key),
            ),
            language: layer(
                env_config.language,
                env::LANGUAGE,
                &mut overrides,
                non_blank(file_catalog.language),
            )
            .or(catalog_defaults.language),
            region: layer(
                env_config.region,
                env::REGION,
                &mut overrides,
                non_blank(file_catalog.region),
            ),
            request_timeout: duration_field(
                "catalog.request_timeout",
                file_catalog.request_timeout,
            )?
            .unwrap_or(catalog_defaults.request_timeout),
            retry: RetryConfig {
                max_attempts: file_catalog
                    .retry
                    .max_attempts
                    .unwrap_or(retry_defaults.max_attempts),
                initial_backoff: duration_field(
                    "catalog.retry.initial_backoff",
                    file_catalog.retry.initial_backoff,
                )?
                .unwrap_or(retry_defaults.initial_backoff),
                max_backoff: duration_field(
                    "catalog.retry.max_backoff",
                    file_catalog.retry.max_backoff,
                )?
                .unwrap_or(retry_defaults.max_backoff),
            },
        };

        let browse_defaults = defaults.browse;
        let env_debounce = env_config.search_debounce_ms.and_then(|raw| {
            match raw.parse::<u64>() {
                Ok(ms) => Some(Duration::from_millis(ms)),
                Err(_) => {
                    warnings.push_with_hint(
                        format!(
                            "{} is not a whole number of milliseconds: '{raw}'",
                            env::SEARCH_DEBOUNCE_MS
                        ),
                        "The value was ignored",
                    );
                    None
                }
            }
        });
        let file_debounce = duration_field(
            "browse.search_debounce",
            file_browse.search_debounce,
        )?;

        let browse = BrowseConfig {
            search_debounce: layer(
                env_debounce,
                env::SEARCH_DEBOUNCE_MS,
                &mut overrides,
                file_debounce,
            )
            .unwrap_or(browse_defaults.search_debounce),
            scroll_step: file_browse
                .scroll_step
                .unwrap_or(browse_defaults.scroll_step),
            cast_limit: file_browse
                .cast_limit
                .unwrap_or(browse_defaults.cast_limit),
            cast_department: non_blank(file_browse.cast_department)
                .unwrap_or(browse_defaults.cast_department),
            overview_preview_chars: file_browse
                .overview_preview_chars
                .unwrap_or(browse_defaults.overview_preview_chars),
        };

        let log_filter = layer(
            env_config.log_filter,
            env::LOG_FILTER,
            &mut overrides,
            non_blank(file_log_filter),
        )
        .unwrap_or(defaults.log_filter);

        Ok(Config {
            catalog,
            browse,
            log_filter,
            metadata: ConfigMetadata {
                env_overrides: overrides,
                ..ConfigMetadata::default()
            },
        })
    }
}

/// Environment value when set (recording the override), else the file value.
fn layer<T>(
    from_env: Option<T>,
    name: &'static str,
    overrides: &mut Vec<&'static str>,
    from_file: Option<T>,
) -> Option<T> {
    match from_env {
        Some(value) => {
            overrides.push(name);
            Some(value)
        }
        None => from_file,
    }
}

fn duration_field(
    field: &'static str,
    raw: Option<String>,
) -> Result<Option<Duration>, ConfigLoadError> {
    let Some(raw) = non_blank(raw) else {
        return Ok(None);
    };
    parse_duration(&raw).map(Some).map_err(|source| {
        ConfigLoadError::InvalidDuration {
            field,
            value: raw,
            source,
        }
    })
}

#[derive(Debug)]
pub struct ConfigLoad {
    pub config: Config,
    pub warnings: ConfigWarnings,
}
