// src/controllers/stats_controller.rs
use actix_web::{HttpResponse, get, web};
use serde_json::json;

use crate::analytics;
use crate::approval::ApprovalStore;
use crate::filter::{self, ReviewFilterQuery};
use crate::hostaway::{HostawayClient, normalize_reviews};

// Proyeksi chart dan panel overview, dihitung di atas subset terfilter yang
// sama dengan endpoint reviews
#[get("/api/reviews/hostaway/stats")]
pub async fn get_review_stats(
    client: web::Data<HostawayClient>,
    approvals: web::Data<ApprovalStore>,
    query: web::Query<ReviewFilterQuery>,
) -> HttpResponse {
    let raw = client.fetch_raw().await;
    let mut reviews = normalize_reviews(raw);
    approvals.apply(&mut reviews);

    let review_filter = query.into_inner().into_filter();
    let reviews = filter::apply(reviews, &review_filter);

    HttpResponse::Ok().json(json!({
        "status": "success",
        "data": {
            "summary": analytics::summary(&reviews),
            "categoryAverages": analytics::category_averages(&reviews),
            "monthlyTrend": analytics::monthly_trend(&reviews),
            "ratingDistribution": analytics::rating_distribution(&reviews),
        }
    }))
}
