use crate::collection::{
    SearchQuery, DEFAULT_ITEMS_PER_PAGE, DEFAULT_NUMBER_OF_PAGES, DEFAULT_RANDOM_COUNT,
};
use crate::error::ConfigError;
use serde_derive::Deserialize;
use std::str::FromStr;

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Deserialize, Debug)]
pub struct AppConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl AppConfig {
    pub fn log_level(&self) -> tracing::Level {
        tracing::Level::from_str(self.log_level.as_str()).unwrap_or(tracing::Level::INFO)
    }
}

pub(crate) fn load_app_config() -> Result<AppConfig, ConfigError> {
    envy::from_env::<AppConfig>().map_err(|err| ConfigError::env_parse("AppConfig", err))
}

fn default_base_url() -> String {
    "https://collectionapi.metmuseum.org/public/collection/v1".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_random_max_attempts() -> usize {
    500
}

fn default_user_agent() -> String {
    "collection-browser".to_string()
}

#[derive(Deserialize, Debug, Clone)]
pub struct CollectionConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    // upper bound on random draws before a sample request gives up
    #[serde(default = "default_random_max_attempts")]
    pub random_max_attempts: usize,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl CollectionConfig {
    fn validate(self) -> Result<Self, ConfigError> {
        if self.timeout_seconds == 0 {
            return Err(ConfigError::invalid("timeout_seconds", "must be at least 1"));
        }
        if self.random_max_attempts == 0 {
            return Err(ConfigError::invalid(
                "random_max_attempts",
                "must be at least 1",
            ));
        }
        Ok(self)
    }
}

pub fn load_collection_config() -> Result<CollectionConfig, ConfigError> {
    envy::prefixed("COLLECTION_")
        .from_env::<CollectionConfig>()
        .map_err(|err| ConfigError::env_parse("CollectionConfig", err))?
        .validate()
}

fn default_page() -> usize {
    1
}

fn default_items_per_page() -> usize {
    DEFAULT_ITEMS_PER_PAGE
}

fn default_pages() -> usize {
    DEFAULT_NUMBER_OF_PAGES
}

fn default_random_count() -> usize {
    DEFAULT_RANDOM_COUNT
}

#[derive(Deserialize, Debug)]
pub struct BrowseConfig {
    pub search: Option<String>,
    // `/search` filters, applied only when set
    pub has_images: Option<bool>,
    pub is_highlight: Option<bool>,
    pub is_on_view: Option<bool>,
    pub title: Option<bool>,
    pub tags: Option<bool>,
    pub artist_or_culture: Option<bool>,
    pub department_id: Option<u64>,
    pub medium: Option<String>,
    pub geo_location: Option<String>,
    pub date_begin: Option<i32>,
    pub date_end: Option<i32>,
    #[serde(default = "default_page")]
    pub page: usize,
    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,
    // collect `pages` pages of search results in one pass instead of one cached page
    #[serde(default)]
    pub search_results: bool,
    #[serde(default = "default_pages")]
    pub pages: usize,
    #[serde(default = "default_random_count")]
    pub random_count: usize,
}

impl BrowseConfig {
    fn validate(self) -> Result<Self, ConfigError> {
        if self.page == 0 {
            return Err(ConfigError::invalid("page", "pages start at 1"));
        }
        if self.items_per_page == 0 {
            return Err(ConfigError::invalid("items_per_page", "must be at least 1"));
        }
        if self.pages == 0 {
            return Err(ConfigError::invalid("pages", "must be at least 1"));
        }
        match (self.date_begin, self.date_end) {
            (Some(begin), Some(end)) if begin > end => {
                return Err(ConfigError::invalid("date_begin", "must not be after date_end"))
            }
            (Some(_), None) | (None, Some(_)) => {
                return Err(ConfigError::invalid(
                    "date_begin",
                    "date_begin and date_end must be set together",
                ))
            }
            _ => {}
        }
        Ok(self)
    }

    /// The search described by the configured words and filters.
    pub fn query(&self) -> SearchQuery {
        let mut query = SearchQuery::from_words(self.search.as_deref());

        if let Some(value) = self.has_images {
            query = query.has_images(value);
        }
        if let Some(value) = self.is_highlight {
            query = query.is_highlight(value);
        }
        if let Some(value) = self.is_on_view {
            query = query.is_on_view(value);
        }
        if let Some(value) = self.title {
            query = query.title(value);
        }
        if let Some(value) = self.tags {
            query = query.tags(value);
        }
        if let Some(value) = self.artist_or_culture {
            query = query.artist_or_culture(value);
        }
        if let Some(id) = self.department_id {
            query = query.department(id);
        }
        if let Some(medium) = &self.medium {
            query = query.medium(medium.as_str());
        }
        if let Some(location) = &self.geo_location {
            query = query.geo_location(location.as_str());
        }
        if let (Some(begin), Some(end)) = (self.date_begin, self.date_end) {
            query = query.date_range(begin, end);
        }
        query
    }
}

pub fn load_browse_config() -> Result<BrowseConfig, ConfigError> {
    envy::prefixed("BROWSE_")
        .from_env::<BrowseConfig>()
        .map_err(|err| ConfigError::env_parse("BrowseConfig", err))?
        .validate()
}
