//! Build-time Configuration
//!
//! The frontend is a static bundle, so settings are baked in when it is built:
//! `FOOD_API_URL` (default `http://localhost:3333`) and `FOOD_LOG_LEVEL`
//! (default `info`).

use log::LevelFilter;

const DEFAULT_API_URL: &str = "http://localhost:3333";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AppConfig {
    /// Backend base URL without trailing slash
    pub api_base_url: &'static str,
    pub log_level: LevelFilter,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_values(option_env!("FOOD_API_URL"), option_env!("FOOD_LOG_LEVEL"))
    }

    fn from_values(api_url: Option<&'static str>, log_level: Option<&str>) -> Self {
        let api_base_url = api_url
            .map(|url| url.trim().trim_end_matches('/'))
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL);
        let log_level = log_level
            .and_then(|level| level.trim().parse().ok())
            .unwrap_or(LevelFilter::Info);
        Self { api_base_url, log_level }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}
