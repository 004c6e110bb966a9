pub mod details;
pub mod review;

pub use details::*;
pub use review::*;

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::ElementRef;

static NON_ASCII_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^\x00-\x7F]+").expect("Invalid non-ASCII regex")
});

// The information separators U+001C..U+001F count as whitespace too.
static WHITESPACE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\s\x1C-\x1F]+").expect("Invalid whitespace regex")
});

/// Clean scraped text: keep ASCII only, straighten quotes, collapse whitespace
/// and trim surrounding quotes and spaces.
pub fn clean_text(text: &str) -> String {
    let ascii = NON_ASCII_REGEX.replace_all(text, "");
    let straightened = ascii
        .replace(['\u{201C}', '\u{201D}'], "\"")
        .replace(['\u{2018}', '\u{2019}'], "'");
    let collapsed = WHITESPACE_REGEX.replace_all(&straightened, " ");

    collapsed
        .trim_matches(|c: char| c == '"' || c == '\'' || c == ' ')
        .to_string()
}

/// Concatenated text of an element with each text node trimmed.
pub fn stripped_text(element: ElementRef<'_>) -> String {
    element.text().map(str::trim).collect()
}
