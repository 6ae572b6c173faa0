use std::rc::Rc;

use common::error::GatewayResult;
use common::gateway::library::{
    collection_url, decode_libraries, decode_library, library_url, listing_url, MISSING_URL,
};
use common::gateway::{bearer, require_base_url};
use common::model::cql_library::CqlLibrary;
use common::model::service_config::ServiceConfig;
use common::session::SessionProvider;
use gloo_net::http::Request;

use super::exchange;

/// Client for the CQL library resource.
pub struct CqlLibraryServiceApi {
    base_url: Option<String>,
    session: Rc<dyn SessionProvider>,
}

impl CqlLibraryServiceApi {
    pub fn new(config: &ServiceConfig, session: Rc<dyn SessionProvider>) -> Self {
        Self {
            base_url: config.cql_library_base_url().map(str::to_string),
            session,
        }
    }

    fn base_url(&self) -> GatewayResult<&str> {
        require_base_url(self.base_url.as_deref(), MISSING_URL)
    }

    fn authorization(&self) -> String {
        bearer(&self.session.access_token())
    }

    pub async fn fetch_cql_libraries(&self, current_user_only: bool) -> GatewayResult<Vec<CqlLibrary>> {
        let url = listing_url(self.base_url()?, current_user_only);
        let (status, body) = exchange(
            Request::get(&url)
                .header("Authorization", &self.authorization())
                .build(),
        )
        .await?;
        decode_libraries(status, &body)
    }

    pub async fn fetch_cql_library(&self, id: &str) -> GatewayResult<CqlLibrary> {
        let url = library_url(self.base_url()?, id);
        let (status, body) = exchange(
            Request::get(&url)
                .header("Authorization", &self.authorization())
                .build(),
        )
        .await?;
        decode_library(status, &body)
    }

    pub async fn create_cql_library(&self, library: &CqlLibrary) -> GatewayResult<CqlLibrary> {
        let url = collection_url(self.base_url()?);
        let (status, body) = exchange(
            Request::post(&url)
                .header("Authorization", &self.authorization())
                .json(library),
        )
        .await?;
        decode_library(status, &body)
    }

    /// Replaces the stored record with `library`, matched by its `id`.
    pub async fn update_cql_library(&self, library: &CqlLibrary) -> GatewayResult<CqlLibrary> {
        let url = collection_url(self.base_url()?);
        let (status, body) = exchange(
            Request::put(&url)
                .header("Authorization", &self.authorization())
                .json(library),
        )
        .await?;
        decode_library(status, &body)
    }
}
