// src/hostaway.rs
use reqwest::Client;

use crate::config::HostawayConfig;
use crate::models::hostaway::{HostawayApiResponse, HostawayReview, HostawayReviewCategory};
use crate::models::review::{Channel, NormalizedReview, ReviewCategories, ReviewType};
use crate::utils::parse_submitted_at;

/// Client Hostaway. Kredensial datang dari config saat konstruksi, bukan dari
/// global; satu reqwest::Client dipakai ulang untuk semua request.
pub struct HostawayClient {
    http: Client,
    config: HostawayConfig,
}

impl HostawayClient {
    pub fn new(config: HostawayConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    /// Ambil review mentah dari Hostaway. Kegagalan apa pun di jalur fetch
    /// (jaringan, auth, non-2xx, bentuk respons) jatuh ke data fixture tanpa
    /// retry dan tidak pernah sampai ke client HTTP.
    pub async fn fetch_raw(&self) -> Vec<HostawayReview> {
        match self.try_fetch().await {
            Ok(reviews) => {
                log::info!("Berhasil mengambil {} review dari Hostaway", reviews.len());
                reviews
            }
            Err(e) => {
                log::warn!(
                    "Gagal mengambil review dari Hostaway API: {}, fallback ke data fixture",
                    e
                );
                fixture_reviews()
            }
        }
    }

    async fn try_fetch(&self) -> Result<Vec<HostawayReview>, reqwest::Error> {
        let url = format!("{}/reviews", self.config.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[("accountId", self.config.account_id.as_str())])
            .bearer_auth(&self.config.api_key)
            .send()
            .await?
            .error_for_status()?;

        let body: HostawayApiResponse = response.json().await?;
        log::debug!("Hostaway envelope status: {}", body.status);
        Ok(body.result)
    }
}

/// Normalizer untuk channel Hostaway. Pure dan total: record yang aneh tetap
/// menghasilkan review, tidak pernah error.
pub fn normalize_reviews(raw: Vec<HostawayReview>) -> Vec<NormalizedReview> {
    raw.into_iter().map(normalize_review).collect()
}

fn normalize_review(review: HostawayReview) -> NormalizedReview {
    let raw_categories = review.review_category.unwrap_or_default();

    // Overall rating = rata-rata SEMUA rating non-null di list mentah,
    // termasuk kategori di luar tiga kunci terjamin dan termasuk nama yang
    // berulang. Rating di luar 0-10 diteruskan apa adanya.
    let rated: Vec<i32> = raw_categories.iter().filter_map(|c| c.rating).collect();
    let overall_rating = if rated.is_empty() {
        None
    } else {
        Some(rated.iter().map(|r| *r as f64).sum::<f64>() / rated.len() as f64)
    };

    // Peta kategori: tiga kunci terjamin selalu ada (null kalau absen),
    // sisanya ditambahkan dari record; nama berulang menimpa (last-seen wins).
    let mut categories = ReviewCategories::default();
    for category in &raw_categories {
        categories.set(&category.category, category.rating);
    }

    let date = parse_submitted_at(&review.submitted_at);

    NormalizedReview {
        id: review.id,
        review_type: review.review_type,
        status: review.status,
        overall_rating,
        public_review: review.public_review,
        categories,
        submitted_at: review.submitted_at,
        guest_name: review.guest_name,
        listing_name: review.listing_name,
        channel: Channel::Hostaway,
        is_approved: false,
        date,
    }
}

fn cat(category: &str, rating: i32) -> HostawayReviewCategory {
    HostawayReviewCategory {
        category: category.to_string(),
        rating: Some(rating),
    }
}

/// Data fixture untuk development dan fallback saat API tidak bisa dijangkau.
pub fn fixture_reviews() -> Vec<HostawayReview> {
    vec![
        HostawayReview {
            id: 7453,
            review_type: ReviewType::HostToGuest,
            status: "published".to_string(),
            rating: None,
            public_review: "Shane and family are wonderful! Would definitely host again :)"
                .to_string(),
            review_category: Some(vec![
                cat("cleanliness", 10),
                cat("communication", 10),
                cat("respect_house_rules", 10),
            ]),
            submitted_at: "2020-08-21 22:45:14".to_string(),
            guest_name: "Shane Finkelstein".to_string(),
            listing_name: "2B N1 A - 29 Shoreditch Heights".to_string(),
        },
        HostawayReview {
            id: 7454,
            review_type: ReviewType::GuestToHost,
            status: "published".to_string(),
            rating: None,
            public_review: "Great stay! The apartment was clean and well-located.".to_string(),
            review_category: Some(vec![
                cat("cleanliness", 9),
                cat("communication", 8),
                cat("location", 10),
            ]),
            submitted_at: "2020-08-22 10:30:00".to_string(),
            guest_name: "Maria Rodriguez".to_string(),
            listing_name: "2B N1 A - 29 Shoreditch Heights".to_string(),
        },
        HostawayReview {
            id: 7455,
            review_type: ReviewType::GuestToHost,
            status: "published".to_string(),
            rating: None,
            public_review: "Good value for money but could be cleaner.".to_string(),
            review_category: Some(vec![
                cat("cleanliness", 6),
                cat("communication", 9),
                cat("value", 8),
            ]),
            submitted_at: "2020-08-23 15:20:00".to_string(),
            guest_name: "John Smith".to_string(),
            listing_name: "Studio Loft - Downtown".to_string(),
        },
        HostawayReview {
            id: 7456,
            review_type: ReviewType::GuestToHost,
            status: "published".to_string(),
            rating: None,
            public_review: "Amazing experience! Will come back for sure.".to_string(),
            review_category: Some(vec![
                cat("cleanliness", 10),
                cat("communication", 10),
                cat("location", 9),
                cat("value", 9),
            ]),
            submitted_at: "2020-09-01 09:15:00".to_string(),
            guest_name: "Emily Chen".to_string(),
            listing_name: "Luxury Penthouse - City Center".to_string(),
        },
        HostawayReview {
            id: 7457,
            review_type: ReviewType::HostToGuest,
            status: "published".to_string(),
            rating: None,
            public_review: "Excellent guests, very respectful of the property.".to_string(),
            review_category: Some(vec![cat("respect_house_rules", 10), cat("communication", 9)]),
            submitted_at: "2020-09-02 14:30:00".to_string(),
            guest_name: "David Wilson".to_string(),
            listing_name: "Studio Loft - Downtown".to_string(),
        },
        // Review yang masih menunggu rating; list kategorinya kosong
        HostawayReview {
            id: 7458,
            review_type: ReviewType::GuestToHost,
            status: "awaiting".to_string(),
            rating: None,
            public_review: "Checked out this morning, will rate the stay soon!".to_string(),
            review_category: Some(vec![]),
            submitted_at: "2020-09-05 18:05:00".to_string(),
            guest_name: "Priya Sharma".to_string(),
            listing_name: "Luxury Penthouse - City Center".to_string(),
        },
        HostawayReview {
            id: 7459,
            review_type: ReviewType::GuestToHost,
            status: "published".to_string(),
            rating: None,
            public_review: "Spotless apartment and quick responses from the host.".to_string(),
            review_category: Some(vec![
                cat("cleanliness", 10),
                cat("communication", 9),
                cat("location", 8),
            ]),
            submitted_at: "2020-10-03 11:42:00".to_string(),
            guest_name: "Liam O'Brien".to_string(),
            listing_name: "2B N1 A - 29 Shoreditch Heights".to_string(),
        },
    ]
}
