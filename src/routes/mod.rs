use actix_web::{http::StatusCode, web, HttpResponse, Responder};

use crate::db::DBHealthStatus;
use crate::types::{AppState, HealthStatus, ResponsePayload};

pub mod short_link;

// Handler function for the root route "/"
async fn index() -> impl Responder {
    let welcome_message = ResponsePayload {
        status: 200,
        message: String::from("Welcome! POST a longUrl to /api/urls to get a short link."),
    };

    HttpResponse::Ok().json(welcome_message)
}

// Maps the store health to the status code and label served by `/health`
fn health_outcome(db_status: &DBHealthStatus) -> (StatusCode, &'static str) {
    match db_status {
        DBHealthStatus::Healthy => (StatusCode::OK, "OK"),
        DBHealthStatus::Unhealthy => (StatusCode::SERVICE_UNAVAILABLE, "DEGRADED"),
    }
}

// Handler function for the health check endpoint
async fn health_check(data: web::Data<AppState>) -> impl Responder {
    let uptime = data.start_time.elapsed().as_secs();
    let db_health = data.db.health_check().await;

    let (code, status) = health_outcome(&db_health.status);

    let status = HealthStatus {
        status: String::from(status),
        version: data.version.clone(),
        db_health: Some(db_health),
        uptime_seconds: uptime,
    };

    HttpResponse::build(code).json(status)
}

// Configure all routes function
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index));
    cfg.route("/health", web::get().to(health_check));
    short_link::configure_routes(cfg);
}
