use log::Level;
use puppy_bowl_client::protocol::{api_url, API_BASE};

use crate::utils;

/// Cohort used when neither the build nor the page URL names one.
pub const DEFAULT_COHORT: &str = "2109-UNF-HY-WEB-PT";

/// Where the roster lives and how chatty the console should be.
///
/// Build-time defaults come from `PUPPY_BOWL_COHORT` and `PUPPY_BOWL_API_BASE`; the page's
/// `?cohort=`, `?api=` and `?log=` query parameters override them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub cohort: String,
    pub api_base: String,
    pub log_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            cohort: option_env!("PUPPY_BOWL_COHORT")
                .unwrap_or(DEFAULT_COHORT)
                .to_owned(),
            api_base: option_env!("PUPPY_BOWL_API_BASE")
                .unwrap_or(API_BASE)
                .to_owned(),
            log_level: Level::Debug,
        }
    }
}

impl Config {
    /// Defaults overridden by whatever `lookup` finds. Blank and unparsable values are ignored.
    pub fn from_query(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Config::default();
        let lookup = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        if let Some(cohort) = lookup("cohort") {
            config.cohort = cohort;
        }
        if let Some(api_base) = lookup("api") {
            config.api_base = api_base;
        }
        if let Some(level) = lookup("log").and_then(|level| level.parse::<Level>().ok()) {
            config.log_level = level;
        }
        config
    }

    /// Configuration for the page currently loaded in the browser.
    pub fn from_location() -> Self {
        Config::from_query(utils::query_param)
    }

    /// Base URL of this cohort's roster.
    pub fn api_url(&self) -> String {
        api_url(&self.api_base, &self.cohort)
    }
}
