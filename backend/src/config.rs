//! Host configuration read from the environment.
//!
//! Variables from a `.env` file in the working directory are added to the
//! environment; ones already set are not overridden.

use common::model::service_config::{ServiceConfig, ServiceEndpoint};
use log::warn;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq)]
pub struct HostConfig {
    pub host: String,
    pub port: u16,
    pub services: ServiceConfig,
}

impl HostConfig {
    pub fn from_env() -> Self {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                warn!("Ignoring unreadable .env file: {}", e);
            }
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let endpoint = |key: &str| {
            lookup(key)
                .map(|url| url.trim().to_string())
                .filter(|url| !url.is_empty())
                .map(|base_url| ServiceEndpoint { base_url })
        };

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!("PORT={} is not a valid port, using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        Self {
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            services: ServiceConfig {
                measure_service: endpoint("MEASURE_SERVICE_URL"),
                elm_translation_service: endpoint("ELM_TRANSLATION_SERVICE_URL"),
                cql_library_service: endpoint("CQL_LIBRARY_SERVICE_URL"),
                terminology_service: endpoint("TERMINOLOGY_SERVICE_URL"),
            },
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
