pub mod review;

pub use review::*;

// Column names of the fixed fields
pub const FIELD_DATE: &str = "Date";
pub const FIELD_AUTHOR: &str = "Author";
pub const FIELD_TITLE: &str = "Title";
pub const FIELD_RATING: &str = "Rating";
pub const FIELD_TRIP_VERIFIED: &str = "Trip Verified";
pub const FIELD_REVIEW: &str = "Review";

// Verification badges the site prefixes review bodies with
pub const EMOJI_CHECK: &str = "✅";
pub const EMOJI_CROSS: &str = "❌";
