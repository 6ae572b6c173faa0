//! Serves the runtime service configuration the frontend boots from.

use actix_web::web::{self, get, resource};
use actix_web::{HttpResponse, Resource, Responder};
use common::model::service_config::{ServiceConfig, SERVICE_CONFIG_PATH};

pub fn configure_routes() -> Resource {
    resource(SERVICE_CONFIG_PATH).route(get().to(process))
}

async fn process(config: web::Data<ServiceConfig>) -> impl Responder {
    HttpResponse::Ok()
        .insert_header(("Cache-Control", "no-store"))
        .json(config.get_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use common::model::service_config::ServiceEndpoint;

    #[actix_web::test]
    async fn returns_configured_services() {
        let config = ServiceConfig {
            cql_library_service: Some(ServiceEndpoint {
                base_url: "https://library.example.org/api".to_string(),
            }),
            ..ServiceConfig::default()
        };
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(config.clone()))
                .service(configure_routes()),
        )
            .await;

        let req = test::TestRequest::get().uri(SERVICE_CONFIG_PATH).to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(
            body["cqlLibraryService"]["baseUrl"],
            "https://library.example.org/api"
        );
        assert!(body["elmTranslationService"].is_null());

        let decoded: ServiceConfig = serde_json::from_value(body).unwrap();
        assert_eq!(decoded, config);
    }

    #[actix_web::test]
    async fn only_get_is_routed() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ServiceConfig::default()))
                .service(configure_routes()),
        )
            .await;

        let req = test::TestRequest::post().uri(SERVICE_CONFIG_PATH).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 405);
    }
}
