//! HTTP gateways to the services the library pages talk to.
//!
//! Each gateway is built from the runtime `ServiceConfig` and a session
//! provider. URL shapes and response decoding come from `common::gateway`;
//! this module only moves bytes with `gloo-net`.

pub mod cql_library_service;
pub mod elm_translation_service;
pub mod organization_service;
pub mod service_config;
pub mod session;

use std::rc::Rc;

use common::error::{GatewayError, GatewayResult};
use common::model::service_config::ServiceConfig;
use common::session::SessionProvider;
use gloo_net::http::Request;

use cql_library_service::CqlLibraryServiceApi;
use elm_translation_service::ElmTranslationServiceApi;
use organization_service::OrganizationServiceApi;

/// The gateways a page needs, shared by reference between components.
#[derive(Clone)]
pub struct Services {
    pub libraries: Rc<CqlLibraryServiceApi>,
    pub translator: Rc<ElmTranslationServiceApi>,
    pub organizations: Rc<OrganizationServiceApi>,
    pub session: Rc<dyn SessionProvider>,
}

impl Services {
    pub fn new(config: &ServiceConfig, session: Rc<dyn SessionProvider>) -> Self {
        Self {
            libraries: Rc::new(CqlLibraryServiceApi::new(config, session.clone())),
            translator: Rc::new(ElmTranslationServiceApi::new(config, session.clone())),
            organizations: Rc::new(OrganizationServiceApi::new(config, session.clone())),
            session,
        }
    }

    pub fn current_user(&self) -> Option<String> {
        self.session.user_name()
    }
}

impl PartialEq for Services {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.libraries, &other.libraries)
            && Rc::ptr_eq(&self.translator, &other.translator)
            && Rc::ptr_eq(&self.organizations, &other.organizations)
    }
}

/// Sends a prepared request and returns its status and body text.
pub(crate) async fn exchange(
    request: Result<Request, gloo_net::Error>,
) -> GatewayResult<(u16, String)> {
    let request = request.map_err(|e| GatewayError::Transport(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| GatewayError::Transport(e.to_string()))?;
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| GatewayError::Transport(e.to_string()))?;
    Ok((status, body))
}
