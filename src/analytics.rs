// src/analytics.rs
//
// Proyeksi read-only di atas koleksi review ternormalisasi (biasanya sudah
// difilter). Setiap proyeksi mengabaikan review yang tidak menyumbang nilai,
// bukan gagal.
use std::collections::BTreeMap;

use chrono::Datelike;
use serde::Serialize;

use crate::models::review::{NormalizedReview, ReviewType};
use crate::utils::round_to;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAverage {
    pub category: String,
    pub average: f64,
    pub count: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTrendPoint {
    /// Kunci kalender `YYYY-MM`.
    pub month: String,
    pub average: f64,
    pub count: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingBucket {
    pub label: &'static str,
    pub count: i64,
    pub percentage: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSummary {
    pub total_reviews: i64,
    pub approved_reviews: i64,
    pub average_rating: f64,
    pub low_ratings: i64,
    pub guest_to_host: i64,
    pub host_to_guest: i64,
    pub approval_rate: f64,
}

/// Rata-rata per kategori di seluruh union kunci kategori yang muncul.
/// Kategori tanpa satu pun rating non-null tidak ikut di hasil.
pub fn category_averages(reviews: &[NormalizedReview]) -> Vec<CategoryAverage> {
    let mut sums: BTreeMap<String, (i64, i64)> = BTreeMap::new();

    for review in reviews {
        for (category, rating) in review.categories.entries() {
            if let Some(rating) = rating {
                let entry = sums.entry(category.to_string()).or_insert((0, 0));
                entry.0 += rating as i64;
                entry.1 += 1;
            }
        }
    }

    sums.into_iter()
        .map(|(category, (sum, count))| CategoryAverage {
            category,
            average: sum as f64 / count as f64,
            count,
        })
        .collect()
}

/// Rata-rata overall rating per bulan kalender, urut naik. Review tanpa
/// overall rating atau tanpa timestamp yang valid tidak ikut dihitung.
/// Koleksi tanpa data menghasilkan vektor kosong; placeholder "No data"
/// urusan presentasi.
pub fn monthly_trend(reviews: &[NormalizedReview]) -> Vec<MonthlyTrendPoint> {
    let mut months: BTreeMap<String, Vec<f64>> = BTreeMap::new();

    for review in reviews {
        let (rating, date) = match (review.overall_rating, review.date) {
            (Some(rating), Some(date)) => (rating, date),
            _ => continue,
        };
        let key = format!("{}-{:02}", date.year(), date.month());
        months.entry(key).or_default().push(rating);
    }

    months
        .into_iter()
        .map(|(month, ratings)| {
            let average = ratings.iter().sum::<f64>() / ratings.len() as f64;
            MonthlyTrendPoint {
                month,
                average: round_to(average, 2),
                count: ratings.len() as i64,
            }
        })
        .collect()
}

/// Distribusi overall rating ke empat bucket tetap. Review tanpa overall
/// rating tidak masuk bucket mana pun.
pub fn rating_distribution(reviews: &[NormalizedReview]) -> Vec<RatingBucket> {
    const LABELS: [&str; 4] = [
        "Excellent (9-10)",
        "Good (7-8.9)",
        "Average (5-6.9)",
        "Poor (0-4.9)",
    ];

    let mut counts = [0i64; 4];
    for review in reviews {
        let rating = match review.overall_rating {
            Some(rating) => rating,
            None => continue,
        };
        if rating >= 9.0 {
            counts[0] += 1;
        } else if rating >= 7.0 {
            counts[1] += 1;
        } else if rating >= 5.0 {
            counts[2] += 1;
        } else {
            counts[3] += 1;
        }
    }

    let classified: i64 = counts.iter().sum();
    LABELS
        .into_iter()
        .zip(counts)
        .map(|(label, count)| RatingBucket {
            label,
            count,
            percentage: if classified > 0 {
                (count as f64 / classified as f64) * 100.0
            } else {
                0.0
            },
        })
        .collect()
}

/// Statistik panel overview, dihitung ulang dari koleksi terfilter saat ini.
pub fn summary(reviews: &[NormalizedReview]) -> ReviewSummary {
    let total_reviews = reviews.len() as i64;
    let approved_reviews = reviews.iter().filter(|r| r.is_approved).count() as i64;

    let ratings: Vec<f64> = reviews.iter().filter_map(|r| r.overall_rating).collect();
    let average_rating = if ratings.is_empty() {
        0.0
    } else {
        round_to(ratings.iter().sum::<f64>() / ratings.len() as f64, 1)
    };

    let low_ratings = reviews
        .iter()
        .filter(|r| matches!(r.overall_rating, Some(rating) if rating < 7.0))
        .count() as i64;

    let guest_to_host = reviews
        .iter()
        .filter(|r| r.review_type == ReviewType::GuestToHost)
        .count() as i64;
    let host_to_guest = total_reviews - guest_to_host;

    let approval_rate = if total_reviews > 0 {
        round_to(approved_reviews as f64 / total_reviews as f64 * 100.0, 1)
    } else {
        0.0
    };

    ReviewSummary {
        total_reviews,
        approved_reviews,
        average_rating,
        low_ratings,
        guest_to_host,
        host_to_guest,
        approval_rate,
    }
}
