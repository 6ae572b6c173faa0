mod config;
mod services;

use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::{info, warn};

use crate::config::HostConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = HostConfig::from_env();

    for (name, endpoint) in [
        ("CQL library", config.services.cql_library_base_url()),
        ("ELM translation", config.services.elm_translation_base_url()),
        ("Measure", config.services.measure_base_url()),
    ] {
        match endpoint {
            Some(url) => info!("{} service: {}", name, url),
            None => warn!("{} service URL is not configured", name),
        }
    }

    info!("Server running at {}", config.url());

    let services = web::Data::new(config.services.clone());
    HttpServer::new(move || {
        App::new()
            .app_data(services.clone())
            .service(services::service_config::configure_routes())
            .default_service(web::route().to(services::static_files::serve_embedded))
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
