// src/models/hostaway.rs
use serde::{Deserialize, Serialize};

use crate::models::review::ReviewType;

/// One (category, rating) pair as Hostaway returns it. The rating is an
/// integer on the 0-10 scale or null.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostawayReviewCategory {
    pub category: String,
    pub rating: Option<i32>,
}

/// Review record as returned by the Hostaway API, untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostawayReview {
    pub id: i64,
    #[serde(rename = "type")]
    pub review_type: ReviewType,
    pub status: String,
    // Listing-level rating; Hostaway leaves this null on category-rated reviews
    pub rating: Option<f64>,
    pub public_review: String,
    #[serde(default)]
    pub review_category: Option<Vec<HostawayReviewCategory>>,
    pub submitted_at: String,
    pub guest_name: String,
    pub listing_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostawayApiResponse {
    pub status: String,
    pub result: Vec<HostawayReview>,
}
