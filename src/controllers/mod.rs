pub mod health_controller;
pub mod reviews_controller;
pub mod stats_controller;
