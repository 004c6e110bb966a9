use once_cell::sync::Lazy;
use scraper::{ElementRef, Selector};

use super::{clean_text, extract_review_details};
use crate::models::{ReviewRecord, TripVerified, EMOJI_CHECK, EMOJI_CROSS};

static TITLE_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("h2.text_header").expect("Invalid title selector")
});
static RATING_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("div.rating-10").expect("Invalid rating selector")
});
static CONTENT_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("div.text_content").expect("Invalid content selector")
});
static AUTHOR_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("h3.userStatusWrapper").expect("Invalid author selector")
});
static TIME_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("time").expect("Invalid time selector")
});

/// Build a record from one review unit.
///
/// Every field is read on its own and falls back to a default when the markup
/// lacks it, so a partial unit still yields a complete record.
pub fn parse_review(review: ElementRef<'_>) -> ReviewRecord {
    let body = extract_body(review);

    ReviewRecord {
        date: extract_date(review).unwrap_or_default(),
        author: extract_author(review).unwrap_or_default(),
        title: extract_title(review).unwrap_or_default(),
        rating: extract_rating(review),
        trip_verified: body
            .as_deref()
            .map(TripVerified::from_body)
            .unwrap_or(TripVerified::No),
        review: body.as_deref().map(strip_badges).unwrap_or_default(),
        details: extract_review_details(review),
    }
}

fn first_text(review: ElementRef<'_>, selector: &Selector) -> Option<String> {
    review
        .select(selector)
        .next()
        .map(|element| element.text().collect::<String>())
}

fn extract_title(review: ElementRef<'_>) -> Option<String> {
    first_text(review, &TITLE_SELECTOR).map(|title| clean_text(title.trim()))
}

// Kept verbatim; the site renders e.g. "7/10" with surrounding whitespace.
fn extract_rating(review: ElementRef<'_>) -> Option<String> {
    first_text(review, &RATING_SELECTOR).filter(|rating| !rating.is_empty())
}

fn extract_body(review: ElementRef<'_>) -> Option<String> {
    first_text(review, &CONTENT_SELECTOR).map(|body| body.trim().to_string())
}

fn extract_author(review: ElementRef<'_>) -> Option<String> {
    first_text(review, &AUTHOR_SELECTOR).map(|author| clean_text(author.trim()))
}

fn extract_date(review: ElementRef<'_>) -> Option<String> {
    review
        .select(&TIME_SELECTOR)
        .next()
        .and_then(|time| time.value().attr("datetime"))
        .map(str::to_string)
}

fn strip_badges(body: &str) -> String {
    body.replace(EMOJI_CHECK, "").replace(EMOJI_CROSS, "")
}
