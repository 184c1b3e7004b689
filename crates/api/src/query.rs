//! Shared query parameter types for API handlers.
//!
//! Filter values arrive as raw strings and are parsed into their enum with
//! [`realty_core::status::parse_filter`], so an unknown value becomes a 400
//! with the list of allowed values instead of an extractor rejection.

use serde::Deserialize;

/// `?status=` filter (projects, inquiries).
#[derive(Debug, Default, Deserialize)]
pub struct StatusFilter {
    pub status: Option<String>,
}

/// `?category=` filter (resources).
#[derive(Debug, Default, Deserialize)]
pub struct CategoryFilter {
    pub category: Option<String>,
}

/// `?category=&limit=` for the blog listing.
#[derive(Debug, Default, Deserialize)]
pub struct BlogListParams {
    pub category: Option<String>,
    pub limit: Option<i64>,
}

/// Required `?status=` for the inquiry status update.
#[derive(Debug, Deserialize)]
pub struct StatusUpdateParams {
    pub status: String,
}
