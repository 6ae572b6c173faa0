//! Runtime service configuration.
//!
//! The host serves this document at [`SERVICE_CONFIG_PATH`]; the frontend
//! fetches it before rendering any route and builds its gateways from it.

use serde::{Deserialize, Serialize};

/// Path the host serves the configuration document on.
pub const SERVICE_CONFIG_PATH: &str = "/env-config/serviceConfig.json";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceEndpoint {
    #[serde(default)]
    pub base_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceConfig {
    pub measure_service: Option<ServiceEndpoint>,
    pub elm_translation_service: Option<ServiceEndpoint>,
    pub cql_library_service: Option<ServiceEndpoint>,
    pub terminology_service: Option<ServiceEndpoint>,
}

impl ServiceConfig {
    pub fn cql_library_base_url(&self) -> Option<&str> {
        base_url(&self.cql_library_service)
    }

    pub fn elm_translation_base_url(&self) -> Option<&str> {
        base_url(&self.elm_translation_service)
    }

    /// Organizations are served by the measure service.
    pub fn measure_base_url(&self) -> Option<&str> {
        base_url(&self.measure_service)
    }
}

/// An endpoint with an empty base URL counts as unconfigured.
fn base_url(endpoint: &Option<ServiceEndpoint>) -> Option<&str> {
    endpoint
        .as_ref()
        .map(|e| e.base_url.trim())
        .filter(|url| !url.is_empty())
}
