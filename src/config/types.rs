use serde::{Deserialize, Serialize};

/// Default TMDB v3 API root.
pub const DEFAULT_API_BASE_URL: &str = "https://api.themoviedb.org/3";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// TMDB API read access token, sent as `Authorization: Bearer`
    #[serde(default)]
    pub api_token: String,

    /// Include adult titles in search results (default: true)
    #[serde(default = "default_include_adult")]
    pub include_adult: bool,

    /// Download the "original" image size instead of the largest scaled one
    #[serde(default)]
    pub image_size_original: bool,

    /// Download every matching image per category instead of just the first
    #[serde(default)]
    pub all_images: bool,

    /// Log a warning for crew jobs that have no Matroska tag mapping
    #[serde(default)]
    pub warn_unknown_crew: bool,

    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

fn default_include_adult() -> bool {
    true
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

impl Config {
    /// Build a config around an API token with every other setting at its default.
    pub fn with_token<S: Into<String>>(api_token: S) -> Self {
        Self {
            api_token: api_token.into(),
            ..Self::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_token: String::new(),
            include_adult: default_include_adult(),
            image_size_original: false,
            all_images: false,
            warn_unknown_crew: false,
            api_base_url: default_api_base_url(),
        }
    }
}
