use indexmap::IndexMap;
use std::fmt;

use super::{
    FIELD_AUTHOR, FIELD_DATE, FIELD_RATING, FIELD_REVIEW, FIELD_TITLE, FIELD_TRIP_VERIFIED,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripVerified {
    Yes,
    No,
}

impl TripVerified {
    pub fn from_body(body: &str) -> Self {
        if body.contains("Trip Verified") {
            TripVerified::Yes
        } else {
            TripVerified::No
        }
    }
}

impl fmt::Display for TripVerified {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TripVerified::Yes => write!(f, "Yes"),
            TripVerified::No => write!(f, "No"),
        }
    }
}

/// Value of one row in a review's ratings table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailValue {
    /// Number of filled stars in a star widget.
    Stars(u8),
    Text(String),
}

impl fmt::Display for DetailValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetailValue::Stars(count) => write!(f, "{}", count),
            DetailValue::Text(text) => write!(f, "{}", text),
        }
    }
}

impl From<u8> for DetailValue {
    fn from(count: u8) -> Self {
        DetailValue::Stars(count)
    }
}

impl From<&str> for DetailValue {
    fn from(text: &str) -> Self {
        DetailValue::Text(text.to_string())
    }
}

/// Ratings table entries keyed by the label the site uses, in table order.
///
/// Inserting an existing key replaces its value but keeps its original position.
pub type Details = IndexMap<String, DetailValue>;

/// One parsed review.
///
/// The fixed fields hold what the markup said; `details` is applied on top only
/// in [`ReviewRecord::fields`], which is the merged view to read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewRecord {
    pub date: String,
    pub author: String,
    pub title: String,
    pub rating: Option<String>,
    pub trip_verified: TripVerified,
    pub review: String,
    pub details: Details,
}

impl Default for ReviewRecord {
    fn default() -> Self {
        Self {
            date: String::new(),
            author: String::new(),
            title: String::new(),
            rating: None,
            trip_verified: TripVerified::No,
            review: String::new(),
            details: Details::new(),
        }
    }
}

impl ReviewRecord {
    /// Flattens the record into ordered `(column, value)` pairs.
    ///
    /// Fixed fields come first, followed by the ratings table. A table key that
    /// matches a fixed column overwrites that column's value in place. An absent
    /// rating yields `None`.
    pub fn fields(&self) -> IndexMap<String, Option<String>> {
        let mut fields = IndexMap::with_capacity(6 + self.details.len());
        fields.insert(FIELD_DATE.to_string(), Some(self.date.clone()));
        fields.insert(FIELD_AUTHOR.to_string(), Some(self.author.clone()));
        fields.insert(FIELD_TITLE.to_string(), Some(self.title.clone()));
        fields.insert(FIELD_RATING.to_string(), self.rating.clone());
        fields.insert(
            FIELD_TRIP_VERIFIED.to_string(),
            Some(self.trip_verified.to_string()),
        );
        fields.insert(FIELD_REVIEW.to_string(), Some(self.review.clone()));

        for (key, value) in &self.details {
            fields.insert(key.clone(), Some(value.to_string()));
        }

        fields
    }
}

/// Every record collected in a run, in page order.
pub type Dataset = Vec<ReviewRecord>;
