use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use crate::config::Config;
use crate::error::Result;

/// Build the shared client with the spoofed browser identity.
///
/// No timeout is set unless `request_timeout_secs` is configured.
pub fn create_client(config: &Config) -> Result<Client> {
    let mut builder = ClientBuilder::new().user_agent(config.user_agent.as_str());

    if let Some(secs) = config.request_timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    Ok(builder.build()?)
}

/// GET `url` and return the body whatever the status code.
///
/// Only transport failures (DNS, connect, timeout, broken body) are errors.
pub async fn fetch_text(client: &Client, url: &Url) -> Result<String> {
    debug!("GET {}", url);
    let response = client.get(url.clone()).send().await?;

    let status = response.status();
    if !status.is_success() {
        warn!("HTTP error {}: {}", status, url);
    }

    Ok(response.text().await?)
}
