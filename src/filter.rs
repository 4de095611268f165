// src/filter.rs
use chrono::NaiveDate;
use serde::Deserialize;

use crate::models::review::{Channel, NormalizedReview, ReviewType};

/// Kriteria filter dashboard. Field yang None berarti wildcard; semua dimensi
/// digabung dengan AND.
#[derive(Debug, Clone, Default)]
pub struct ReviewFilter {
    pub listing: Option<String>,
    pub min_rating: Option<f64>,
    pub channel: Option<Channel>,
    pub review_type: Option<ReviewType>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl ReviewFilter {
    pub fn matches(&self, review: &NormalizedReview) -> bool {
        if let Some(listing) = &self.listing {
            if review.listing_name != *listing {
                return false;
            }
        }

        // Threshold rating: review tanpa overall rating tidak pernah lolos
        // threshold yang di-set, tapi lolos kalau kriterianya wildcard.
        if let Some(min) = self.min_rating {
            match review.overall_rating {
                Some(rating) if rating >= min => {}
                _ => return false,
            }
        }

        if let Some(channel) = self.channel {
            if review.channel != channel {
                return false;
            }
        }

        if let Some(review_type) = self.review_type {
            if review.review_type != review_type {
                return false;
            }
        }

        // Rentang tanggal inklusif di kedua ujung. Review dengan timestamp
        // yang tidak bisa di-parse lolos: tidak bisa dibuktikan di luar rentang.
        if let Some(date) = review.date {
            let day = date.date();
            if let Some(start) = self.start_date {
                if day < start {
                    return false;
                }
            }
            if let Some(end) = self.end_date {
                if day > end {
                    return false;
                }
            }
        }

        true
    }
}

/// Terapkan filter ke koleksi review. Urutan input dipertahankan.
pub fn apply(mut reviews: Vec<NormalizedReview>, filter: &ReviewFilter) -> Vec<NormalizedReview> {
    reviews.retain(|review| filter.matches(review));
    reviews
}

/// Query param filter di endpoint reviews/stats. Semua field opsional; nilai
/// yang kosong atau tidak bisa di-parse diperlakukan sebagai wildcard.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewFilterQuery {
    pub listing: Option<String>,
    pub min_rating: Option<String>,
    pub channel: Option<String>,
    #[serde(rename = "type")]
    pub review_type: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl ReviewFilterQuery {
    pub fn into_filter(self) -> ReviewFilter {
        ReviewFilter {
            listing: non_empty(self.listing),
            min_rating: non_empty(self.min_rating).and_then(|v| v.parse().ok()),
            channel: non_empty(self.channel).and_then(|v| Channel::parse(&v)),
            review_type: non_empty(self.review_type).and_then(|v| ReviewType::parse(&v)),
            start_date: non_empty(self.start_date)
                .and_then(|v| NaiveDate::parse_from_str(&v, "%Y-%m-%d").ok()),
            end_date: non_empty(self.end_date)
                .and_then(|v| NaiveDate::parse_from_str(&v, "%Y-%m-%d").ok()),
        }
    }
}
