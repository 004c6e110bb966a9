use anyhow::Result;
use scraper::{Html, Selector};
use std::fs;
use std::sync::Arc;

use airline_reviews::config::Config;
use airline_reviews::scrapers::{AirlineQualitySource, PageSource};

// Structural markers the parser depends on
const SELECTORS: &[&str] = &[
    "article.comp_media-review-rated",
    "h2.text_header",
    "div.rating-10",
    "div.text_content",
    "h3.userStatusWrapper",
    "time[datetime]",
    "table.review-ratings",
    "span.star",
    "span.star.fill",
];

#[tokio::main]
async fn main() -> Result<()> {
    let page: u32 = std::env::args()
        .nth(1)
        .map(|arg| arg.parse())
        .transpose()?
        .unwrap_or(1);

    let config = Arc::new(Config::load()?);
    let source = AirlineQualitySource::new(config.clone())?;

    println!("Fetching {}...", source.page_url(page)?);
    let html = source.fetch_page(page).await?;

    let sample = format!("reviews_page_{}_sample.html", page);
    fs::write(&sample, &html)?;
    println!("Saved {} bytes to {}", html.len(), sample);

    let document = Html::parse_document(&html);
    for selector_str in SELECTORS {
        if let Ok(selector) = Selector::parse(selector_str) {
            let count = document.select(&selector).count();
            println!("Selector '{}' matched {} elements", selector_str, count);
        }
    }

    Ok(())
}
