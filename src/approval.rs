// src/approval.rs
use std::collections::HashMap;
use std::sync::RwLock;

use crate::models::review::NormalizedReview;

/// Status approval per review id, dipegang di memori selama proses hidup.
/// Last-write-wins; di-apply ke setiap koleksi yang diserve supaya approval
/// bertahan melewati fetch ulang. Penyimpanan durable tinggal menggantikan
/// struct ini tanpa menyentuh controller.
#[derive(Debug, Default)]
pub struct ApprovalStore {
    inner: RwLock<HashMap<i64, bool>>,
}

impl ApprovalStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, review_id: i64, approved: bool) {
        let mut map = self.inner.write().unwrap_or_else(|e| e.into_inner());
        map.insert(review_id, approved);
    }

    pub fn get(&self, review_id: i64) -> Option<bool> {
        let map = self.inner.read().unwrap_or_else(|e| e.into_inner());
        map.get(&review_id).copied()
    }

    /// Timpa flag approval pada review yang sudah pernah di-set staff.
    pub fn apply(&self, reviews: &mut [NormalizedReview]) {
        let map = self.inner.read().unwrap_or_else(|e| e.into_inner());
        for review in reviews.iter_mut() {
            if let Some(approved) = map.get(&review.id) {
                review.is_approved = *approved;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::review::{Channel, ReviewCategories, ReviewType};

    fn review(id: i64) -> NormalizedReview {
        NormalizedReview {
            id,
            review_type: ReviewType::GuestToHost,
            status: "published".to_string(),
            overall_rating: Some(9.0),
            public_review: "ok".to_string(),
            categories: ReviewCategories::default(),
            submitted_at: "2020-08-21 22:45:14".to_string(),
            guest_name: "Guest".to_string(),
            listing_name: "Listing".to_string(),
            channel: Channel::Hostaway,
            is_approved: false,
            date: None,
        }
    }

    #[test]
    fn last_write_wins() {
        let store = ApprovalStore::new();
        store.set(7453, true);
        store.set(7453, false);
        store.set(7453, true);
        assert_eq!(store.get(7453), Some(true));
        assert_eq!(store.get(9999), None);
    }

    #[test]
    fn apply_only_touches_known_ids() {
        let store = ApprovalStore::new();
        store.set(1, true);

        let mut reviews = vec![review(1), review(2)];
        store.apply(&mut reviews);
        assert!(reviews[0].is_approved);
        assert!(!reviews[1].is_approved);
    }

    #[test]
    fn apply_can_revoke() {
        let store = ApprovalStore::new();
        store.set(1, false);

        let mut reviews = vec![review(1)];
        reviews[0].is_approved = true;
        store.apply(&mut reviews);
        assert!(!reviews[0].is_approved);
    }
}
