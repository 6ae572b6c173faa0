use std::rc::Rc;

use common::error::GatewayResult;
use common::gateway::organization::{decode_organizations, organizations_url, MISSING_URL};
use common::gateway::{bearer, require_base_url};
use common::model::organization::Organization;
use common::model::service_config::ServiceConfig;
use common::session::SessionProvider;
use gloo_net::http::Request;

use super::exchange;

/// Client for the organization list used by the publisher picker.
pub struct OrganizationServiceApi {
    base_url: Option<String>,
    session: Rc<dyn SessionProvider>,
}

impl OrganizationServiceApi {
    pub fn new(config: &ServiceConfig, session: Rc<dyn SessionProvider>) -> Self {
        Self {
            base_url: config.measure_base_url().map(str::to_string),
            session,
        }
    }

    /// All organizations, sorted by name.
    pub async fn get_all_organizations(&self) -> GatewayResult<Vec<Organization>> {
        let base_url = require_base_url(self.base_url.as_deref(), MISSING_URL)?;
        let (status, body) = exchange(
            Request::get(&organizations_url(base_url))
                .header("Authorization", &bearer(&self.session.access_token()))
                .build(),
        )
        .await?;
        decode_organizations(status, &body)
    }
}
