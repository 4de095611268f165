// src/models/review.rs
use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Arah review: dari host ke tamu atau sebaliknya.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReviewType {
    #[serde(rename = "host-to-guest")]
    HostToGuest,
    #[serde(rename = "guest-to-host")]
    GuestToHost,
}

impl ReviewType {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "host-to-guest" => Some(ReviewType::HostToGuest),
            "guest-to-host" => Some(ReviewType::GuestToHost),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewType::HostToGuest => "host-to-guest",
            ReviewType::GuestToHost => "guest-to-host",
        }
    }
}

/// Sumber review. Hanya Hostaway yang punya normalizer saat ini; Google
/// dicadangkan untuk integrasi berikutnya. Sumber baru berarti normalizer
/// baru untuk tag-nya, bukan perubahan pada normalizer yang sudah ada.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Hostaway,
    Google,
}

impl Channel {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "hostaway" => Some(Channel::Hostaway),
            "google" => Some(Channel::Google),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Hostaway => "hostaway",
            Channel::Google => "google",
        }
    }
}

/// Peta kategori ternormalisasi. Tiga kategori yang dijamin selalu ada
/// dipegang sebagai field biasa, sisanya (location, value, dll.) masuk ke
/// map terbuka. Lewat `serde(flatten)` bentuk JSON-nya tetap satu objek.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReviewCategories {
    pub cleanliness: Option<i32>,
    pub communication: Option<i32>,
    pub respect_house_rules: Option<i32>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Option<i32>>,
}

impl ReviewCategories {
    /// Set rating untuk satu nama kategori. Nama yang berulang menimpa nilai
    /// sebelumnya (last-seen wins).
    pub fn set(&mut self, name: &str, rating: Option<i32>) {
        match name {
            "cleanliness" => self.cleanliness = rating,
            "communication" => self.communication = rating,
            "respect_house_rules" => self.respect_house_rules = rating,
            _ => {
                self.extra.insert(name.to_string(), rating);
            }
        }
    }

    /// Semua entri: tiga kategori terjamin lebih dulu, lalu map terbuka
    /// terurut berdasarkan nama.
    pub fn entries(&self) -> Vec<(&str, Option<i32>)> {
        let mut entries = vec![
            ("cleanliness", self.cleanliness),
            ("communication", self.communication),
            ("respect_house_rules", self.respect_house_rules),
        ];
        for (name, rating) in &self.extra {
            entries.push((name.as_str(), *rating));
        }
        entries
    }
}

/// Bentuk kanonik satu review setelah normalisasi.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedReview {
    pub id: i64,
    #[serde(rename = "type")]
    pub review_type: ReviewType,
    pub status: String,
    /// Rata-rata semua rating kategori non-null pada record mentah;
    /// None kalau tidak ada kategori yang membawa rating.
    pub overall_rating: Option<f64>,
    pub public_review: String,
    pub categories: ReviewCategories,
    pub submitted_at: String,
    pub guest_name: String,
    pub listing_name: String,
    pub channel: Channel,
    pub is_approved: bool,
    // Timestamp hasil parse, dipakai internal untuk filter tanggal dan
    // pengelompokan bulanan. None kalau string sumber tidak bisa di-parse.
    #[serde(skip)]
    pub date: Option<NaiveDateTime>,
}
