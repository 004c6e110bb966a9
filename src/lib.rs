//! Collects airline reviews from paginated airlinequality.com listings and
//! flattens them into a CSV dataset.

pub mod config;
pub mod error;
pub mod models;
pub mod parsers;
pub mod scrapers;
pub mod storage;
pub mod utils;

pub use error::{Result, ScrapeError};
