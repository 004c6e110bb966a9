use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use std::time::Duration;
use tracing::{error, info};

use crate::error::Result;
use crate::models::{Dataset, ReviewRecord};
use crate::parsers::parse_review;
use crate::scrapers::PageSource;

static REVIEW_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("article.comp_media-review-rated").expect("Invalid review selector")
});

/// Parse every review unit on a listing page, in document order.
pub fn extract_reviews(html: &str) -> Vec<ReviewRecord> {
    let document = Html::parse_document(html);
    document.select(&REVIEW_SELECTOR).map(parse_review).collect()
}

/// Walks listing pages one at a time and gathers their reviews.
pub struct ReviewCollector {
    source: Box<dyn PageSource>,
    delay: Duration,
}

impl ReviewCollector {
    pub fn new(source: Box<dyn PageSource>, delay: Duration) -> Self {
        Self { source, delay }
    }

    /// Fetch and parse a single page. Fetch errors are passed to the caller.
    pub async fn parse_page(&self, page: u32) -> Result<Vec<ReviewRecord>> {
        let html = self.source.fetch_page(page).await?;
        let reviews = extract_reviews(&html);
        info!("Page {}: {} reviews found.", page, reviews.len());
        Ok(reviews)
    }

    /// Scrape pages `1..=pages` in order.
    ///
    /// A failing page is logged and contributes nothing. The polite delay runs
    /// after every page, including failed ones and the last one.
    pub async fn scrape_all(&self, pages: u32) -> Dataset {
        let mut all_reviews = Dataset::new();

        for page in 1..=pages {
            info!("Scraping page {}...", page);

            match self.parse_page(page).await {
                Ok(reviews) => all_reviews.extend(reviews),
                Err(e) => error!("Error on page {}: {}", page, e),
            }

            tokio::time::sleep(self.delay).await;
        }

        all_reviews
    }
}
