//! Configuration for Marquee.
//!
//! A [`Config`] is composed from built-in defaults, an optional TOML or JSON
//! file, an optional `.env` file and the process environment, in that order
//! of increasing precedence. [`ConfigLoader`] performs the composition and
//! runs the guard rails in [`validation`], returning any non-fatal findings
//! as [`ConfigWarnings`] next to the config itself.
#![allow(missing_docs)]

pub mod constants;
pub mod loader;
pub mod models;
pub mod util;
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoader, error::ConfigLoadError};
pub use models::sources::{EnvConfig, FileConfig};
pub use models::{
    BrowseConfig, CatalogConfig, Config, ConfigMetadata, ConfigSource,
    FileFormat, RetryConfig,
};
pub use validation::{ConfigGuardRailError, ConfigWarning, ConfigWarnings};
