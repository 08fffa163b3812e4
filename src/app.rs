//! app.rs
use actix_cors::Cors;
use actix_web::http::{header, Uri};
use actix_web::web;

use crate::config::app_config::AppConfig;
use crate::handlers::{health_handler, parse_handler};

/// Cache de preflight (segundos)
const CORS_MAX_AGE: usize = 3600;

pub fn init_app(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(health_handler::root_endpoint))
        .route("/health", web::get().to(health_handler::health_endpoint))
        .route("/parse", web::post().to(parse_handler::parse_pdf_endpoint));
}

/// CORS según la lista de orígenes permitidos.
/// Un origen fuera de la lista no recibe `Access-Control-Allow-Origin`.
pub fn build_cors(config: &AppConfig) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            header::ACCEPT,
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
        ])
        .max_age(CORS_MAX_AGE)
        .block_on_origin_mismatch(false);

    if config.allows_any_origin() {
        return cors.allow_any_origin();
    }

    config
        .allowed_origins
        .iter()
        .filter(|origin| {
            let valid = origin.parse::<Uri>().is_ok();
            if !valid {
                log::warn!("Origen CORS inválido, se ignora: {}", origin);
            }
            valid
        })
        .fold(cors.supports_credentials(), |cors, origin| {
            cors.allowed_origin(origin)
        })
}
