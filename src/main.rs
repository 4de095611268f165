// main.rs
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::middleware::Logger;
use actix_web::web::JsonConfig;
use actix_web::{App, HttpServer, web};
use dotenv::dotenv;

mod analytics;
mod approval;
mod config;
mod controllers;
mod filter;
mod hostaway;
mod models;
mod utils;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("starting up...");

    let app_config = config::AppConfig::from_env();
    let bind_addr = format!("{}:{}", app_config.host, app_config.port);
    let cors_origin = app_config.cors_origin.clone();

    let hostaway_client = web::Data::new(hostaway::HostawayClient::new(app_config.hostaway));
    let approvals = web::Data::new(approval::ApprovalStore::new());

    log::info!("listening on {}", bind_addr);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&cors_origin)
            .allowed_methods(vec!["GET", "PATCH", "OPTIONS"])
            .allowed_headers(vec![header::CONTENT_TYPE, header::AUTHORIZATION])
            .max_age(3600);

        let json_config = JsonConfig::default().error_handler(|err, _req| {
            log::error!("JSON payload error: {}", err);
            actix_web::error::ErrorBadRequest(format!("Payload error: {}", err))
        });

        App::new()
            .app_data(hostaway_client.clone())
            .app_data(approvals.clone())
            .app_data(json_config)
            .wrap(cors)
            .wrap(Logger::default())
            //reviews
            .service(controllers::reviews_controller::get_hostaway_reviews)
            .service(controllers::reviews_controller::update_review_approval)
            .service(controllers::reviews_controller::get_property_reviews)
            //stats
            .service(controllers::stats_controller::get_review_stats)
            //health
            .service(controllers::health_controller::health_check)
    })
    .bind(bind_addr)?
    .run()
    .await
}
