use std::time::Duration;

use marquee_config::{BrowseConfig, CatalogConfig, Config};

/// Interaction settings shared by the home and details controllers.
#[derive(Debug, Clone, PartialEq)]
pub struct BrowseSettings {
    pub search_debounce: Duration,
    pub scroll_step: f32,
    pub cast_limit: usize,
    pub cast_department: String,
    pub overview_preview_chars: usize,
    pub image_base_url: String,
}

impl Default for BrowseSettings {
    fn default() -> Self {
        Self::from_parts(&BrowseConfig::default(), &CatalogConfig::default())
    }
}

impl BrowseSettings {
    fn from_parts(browse: &BrowseConfig, catalog: &CatalogConfig) -> Self {
        Self {
            search_debounce: browse.search_debounce,
            scroll_step: browse.scroll_step,
            cast_limit: browse.cast_limit,
            cast_department: browse.cast_department.clone(),
            overview_preview_chars: browse.overview_preview_chars,
            image_base_url: catalog.image_base_url.clone(),
        }
    }

    pub fn with_search_debounce(mut self, interval: Duration) -> Self {
        self.search_debounce = interval;
        self
    }
}

impl From<&Config> for BrowseSettings {
    fn from(config: &Config) -> Self {
        Self::from_parts(&config.browse, &config.catalog)
    }
}
