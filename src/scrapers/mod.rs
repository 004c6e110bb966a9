use async_trait::async_trait;

use crate::error::Result;

mod airline_quality;
mod collector;

pub use airline_quality::AirlineQualitySource;
pub use collector::{extract_reviews, ReviewCollector};

/// Something that can hand back the raw HTML of a numbered listing page.
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch_page(&self, page: u32) -> Result<String>;
}
