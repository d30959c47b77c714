use actix_web::{web, HttpRequest, HttpResponse};
use log::debug;

use crate::constants::{ERR_ROUTE_NOT_FOUND, MSG_SERVER_RUNNING};
use crate::errors::BookingError;
use crate::models::HealthResponse;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Health check
            .route("/health", web::get().to(health_check)),
    )
    // Requests that match no route are funnelled through the error
    // translator so the whole surface answers with the uniform envelope
    .default_service(web::route().to(not_found));
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "OK".to_string(),
        message: MSG_SERVER_RUNNING.to_string(),
    })
}

/// Fallback handler for requests that match no registered route.
pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, BookingError> {
    debug!("No route matched: {} {}", req.method(), req.path());
    Err(BookingError::ResourceNotFound(
        ERR_ROUTE_NOT_FOUND.to_string(),
    ))
}
