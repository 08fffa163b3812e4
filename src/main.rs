use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;

use mu_result_parser::app;
use mu_result_parser::config::app_config::AppConfig;
use mu_result_parser::logger::init_logger;
use mu_result_parser::services::parse_service::ParseService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok(); // Cargar .env al inicio
    init_logger();

    let config = Arc::new(AppConfig::from_env());
    let parse_service = ParseService::new(config.clone());

    log::info!(
        "Orígenes CORS permitidos: {}",
        config.allowed_origins.join(", ")
    );

    // Levantar servidor
    log::info!("Levantando servidor en {}:{}", config.host, config.port);
    let app_config = config.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(app::build_cors(&app_config))
            .app_data(web::Data::new(parse_service.clone()))
            .configure(app::init_app)
    })
    .workers(config.workers)
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
