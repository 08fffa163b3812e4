//! handlers/health_handler.rs
use actix_web::HttpResponse;

use crate::config::app_config::{SERVICE_NAME, SERVICE_VERSION};
use crate::models::parse_model::{HealthStatus, ServiceInfo};

/// GET /
pub async fn root_endpoint() -> HttpResponse {
    HttpResponse::Ok().json(ServiceInfo {
        message: "MU Result Parser API".to_string(),
        version: SERVICE_VERSION.to_string(),
        status: "active".to_string(),
    })
}

/// GET /health
pub async fn health_endpoint() -> HttpResponse {
    HttpResponse::Ok().json(HealthStatus {
        status: "ok".to_string(),
        service: SERVICE_NAME.to_string(),
        version: SERVICE_VERSION.to_string(),
    })
}
