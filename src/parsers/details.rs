use once_cell::sync::Lazy;
use scraper::{ElementRef, Selector};

use super::stripped_text;
use crate::models::{DetailValue, Details};

static TABLE_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("table.review-ratings").expect("Invalid ratings table selector")
});
static ROW_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("tr").expect("Invalid row selector"));
static CELL_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("td").expect("Invalid cell selector"));
static STAR_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("span.star").expect("Invalid star selector")
});

/// Extract the ratings table of a review unit into label/value pairs.
///
/// Only rows with exactly two cells count. Star widgets become the number of
/// filled stars, anything else is kept as trimmed text. Returns an empty map
/// when the unit has no ratings table.
pub fn extract_review_details(review: ElementRef<'_>) -> Details {
    let mut details = Details::new();

    let Some(table) = review.select(&TABLE_SELECTOR).next() else {
        return details;
    };

    for row in table.select(&ROW_SELECTOR) {
        let cells: Vec<ElementRef<'_>> = row.select(&CELL_SELECTOR).collect();
        let [label, value] = cells.as_slice() else {
            continue;
        };

        let key = stripped_text(*label);
        details.insert(key, parse_detail_value(*value));
    }

    details
}

fn parse_detail_value(cell: ElementRef<'_>) -> DetailValue {
    let stars: Vec<ElementRef<'_>> = cell.select(&STAR_SELECTOR).collect();

    if stars.is_empty() {
        DetailValue::Text(stripped_text(cell))
    } else {
        let filled = stars
            .iter()
            .filter(|star| star.value().classes().any(|class| class == "fill"))
            .count();
        DetailValue::Stars(filled.min(u8::MAX as usize) as u8)
    }
}
