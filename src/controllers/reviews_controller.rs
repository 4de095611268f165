// src/controllers/reviews_controller.rs
use actix_web::{HttpResponse, get, patch, web};
use serde::Deserialize;
use serde_json::json;

use crate::approval::ApprovalStore;
use crate::filter::{self, ReviewFilterQuery};
use crate::hostaway::{HostawayClient, normalize_reviews};
use crate::models::review::Channel;

// Reviews ternormalisasi untuk dashboard, opsional terfilter lewat query param
#[get("/api/reviews/hostaway")]
pub async fn get_hostaway_reviews(
    client: web::Data<HostawayClient>,
    approvals: web::Data<ApprovalStore>,
    query: web::Query<ReviewFilterQuery>,
) -> HttpResponse {
    let raw = client.fetch_raw().await;
    let mut reviews = normalize_reviews(raw);
    approvals.apply(&mut reviews);

    let review_filter = query.into_inner().into_filter();
    let reviews = filter::apply(reviews, &review_filter);

    // Metadata untuk dropdown filter di dashboard
    let mut listings: Vec<String> = reviews.iter().map(|r| r.listing_name.clone()).collect();
    listings.sort();
    listings.dedup();
    let total = reviews.len();

    HttpResponse::Ok().json(json!({
        "status": "success",
        "data": reviews,
        "metadata": {
            "total": total,
            "listings": listings,
            "channels": [Channel::Hostaway.as_str()],
        }
    }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalRequest {
    pub is_approved: bool,
}

// Staff: update status approval sebuah review
#[patch("/api/reviews/{review_id}/approval")]
pub async fn update_review_approval(
    approvals: web::Data<ApprovalStore>,
    path: web::Path<i64>,
    data: web::Json<ApprovalRequest>,
) -> HttpResponse {
    let review_id = path.into_inner();
    approvals.set(review_id, data.is_approved);
    log::info!(
        "Approval review {} diubah menjadi {}",
        review_id,
        data.is_approved
    );

    HttpResponse::Ok().json(json!({
        "status": "success",
        "message": "Review approval updated successfully",
        "data": {
            "reviewId": review_id,
            "isApproved": data.is_approved,
        }
    }))
}

// Tampilan publik per properti: hanya review yang sudah di-approve staff
#[get("/api/properties/{listing_name}/reviews")]
pub async fn get_property_reviews(
    client: web::Data<HostawayClient>,
    approvals: web::Data<ApprovalStore>,
    path: web::Path<String>,
) -> HttpResponse {
    let listing_name = path.into_inner();

    let mut reviews = normalize_reviews(client.fetch_raw().await);
    approvals.apply(&mut reviews);
    reviews.retain(|r| r.listing_name == listing_name && r.is_approved);
    let total = reviews.len();

    HttpResponse::Ok().json(json!({
        "status": "success",
        "data": reviews,
        "metadata": {
            "total": total,
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HostawayConfig;
    use actix_web::{App, test};

    // Base URL yang tidak bisa dijangkau supaya client jatuh ke fixture
    fn offline_client() -> web::Data<HostawayClient> {
        web::Data::new(HostawayClient::new(HostawayConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            account_id: "test".to_string(),
            api_key: "test".to_string(),
        }))
    }

    #[actix_web::test]
    async fn reviews_endpoint_serves_fixture_with_metadata() {
        let app = test::init_service(
            App::new()
                .app_data(offline_client())
                .app_data(web::Data::new(ApprovalStore::new()))
                .service(get_hostaway_reviews),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/reviews/hostaway")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "success");
        assert_eq!(body["metadata"]["total"], 7);
        assert_eq!(body["metadata"]["channels"], json!(["hostaway"]));
        // listings terdeduplikasi dan terurut
        assert_eq!(
            body["metadata"]["listings"],
            json!([
                "2B N1 A - 29 Shoreditch Heights",
                "Luxury Penthouse - City Center",
                "Studio Loft - Downtown"
            ])
        );
        assert_eq!(body["data"][0]["id"], 7453);
        assert_eq!(body["data"][0]["channel"], "hostaway");
        assert_eq!(body["data"][0]["isApproved"], false);
    }

    #[actix_web::test]
    async fn reviews_endpoint_applies_query_filters() {
        let app = test::init_service(
            App::new()
                .app_data(offline_client())
                .app_data(web::Data::new(ApprovalStore::new()))
                .service(get_hostaway_reviews),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/reviews/hostaway?minRating=9")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        // 7455 (7.67) dan 7458 (tanpa rating) tersaring
        assert_eq!(body["metadata"]["total"], 5);
        let ids: Vec<i64> = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["id"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, vec![7453, 7454, 7456, 7457, 7459]);
    }

    #[actix_web::test]
    async fn approval_patch_is_reflected_on_next_fetch() {
        let approvals = web::Data::new(ApprovalStore::new());
        let app = test::init_service(
            App::new()
                .app_data(offline_client())
                .app_data(approvals.clone())
                .service(get_hostaway_reviews)
                .service(update_review_approval),
        )
        .await;

        let req = test::TestRequest::patch()
            .uri("/api/reviews/7453/approval")
            .set_json(json!({"isApproved": true}))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "success");
        assert_eq!(body["data"]["reviewId"], 7453);
        assert_eq!(body["data"]["isApproved"], true);

        let req = test::TestRequest::get()
            .uri("/api/reviews/hostaway")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"][0]["id"], 7453);
        assert_eq!(body["data"][0]["isApproved"], true);
    }

    #[actix_web::test]
    async fn property_endpoint_serves_only_approved_reviews() {
        let approvals = web::Data::new(ApprovalStore::new());
        approvals.set(7455, true);

        let app = test::init_service(
            App::new()
                .app_data(offline_client())
                .app_data(approvals)
                .service(get_property_reviews),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/properties/Studio%20Loft%20-%20Downtown/reviews")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        // 7457 juga Studio Loft tapi belum di-approve
        assert_eq!(body["metadata"]["total"], 1);
        assert_eq!(body["data"][0]["id"], 7455);
    }
}
