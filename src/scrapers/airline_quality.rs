use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use url::Url;

use crate::config::Config;
use crate::error::Result;
use crate::scrapers::PageSource;
use crate::utils::http::{create_client, fetch_text};

/// Review listing pages on airlinequality.com, newest first.
pub struct AirlineQualitySource {
    config: Arc<Config>,
    client: Client,
}

impl AirlineQualitySource {
    pub fn new(config: Arc<Config>) -> Result<Self> {
        let client = create_client(&config)?;
        Ok(Self { config, client })
    }

    /// `{base_url}/page/{n}/?sortby=...&pagesize=...`
    pub fn page_url(&self, page: u32) -> Result<Url> {
        let base = self.config.base_url.trim_end_matches('/');
        let mut url = Url::parse(&format!("{}/page/{}/", base, page))?;

        let params = [
            ("sortby", self.config.sort_by.clone()),
            ("pagesize", self.config.page_size.to_string()),
        ];
        let query = serde_urlencoded::to_string(&params[..])?;
        url.set_query(Some(&query));

        Ok(url)
    }
}

#[async_trait]
impl PageSource for AirlineQualitySource {
    async fn fetch_page(&self, page: u32) -> Result<String> {
        let url = self.page_url(page)?;
        fetch_text(&self.client, &url).await
    }
}
