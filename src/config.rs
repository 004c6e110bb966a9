use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::Result;

pub const DEFAULT_BASE_URL: &str = "https://www.airlinequality.com/airline-reviews/british-airways";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/115.0 Safari/537.36";
pub const DEFAULT_OUTPUT_PATH: &str = "british_airways_detailed_reviews.csv";

/// Runtime settings for a collection run.
///
/// Loaded from built-in defaults, an optional `reviews.*` file in the working
/// directory and `REVIEWS_*` environment variables, in that order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub base_url: String,
    pub user_agent: String,
    pub sort_by: String,
    pub page_size: u32,
    pub pages: u32,
    pub delay_secs: u64,
    pub output_path: PathBuf,
    /// Unset means requests may block forever. Setting this is recommended for
    /// unattended runs.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            sort_by: "post_date:Desc".to_string(),
            page_size: 100,
            pages: 40,
            delay_secs: 2,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            request_timeout_secs: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from("reviews")
    }

    /// Same as [`Config::load`] but reads the optional settings file from `file_stem`.
    pub fn load_from(file_stem: &str) -> Result<Self> {
        let defaults = Config::default();

        let settings = config::Config::builder()
            .set_default("base_url", defaults.base_url)?
            .set_default("user_agent", defaults.user_agent)?
            .set_default("sort_by", defaults.sort_by)?
            .set_default("page_size", i64::from(defaults.page_size))?
            .set_default("pages", i64::from(defaults.pages))?
            .set_default("delay_secs", defaults.delay_secs as i64)?
            .set_default("output_path", defaults.output_path.to_string_lossy().into_owned())?
            .add_source(config::File::with_name(file_stem).required(false))
            .add_source(config::Environment::with_prefix("REVIEWS"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
