//! Organization lookup, served by the measure service.

use crate::error::{GatewayError, GatewayResult};
use crate::model::organization::{sort_by_name, Organization};

pub const MISSING_URL: &str = "Missing measure service URL! Is it present in the service config?";

pub fn organizations_url(base_url: &str) -> String {
    format!("{base_url}/organizations")
}

/// Decodes the organization list and returns it in display order.
pub fn decode_organizations(status: u16, body: &str) -> GatewayResult<Vec<Organization>> {
    if !(200..300).contains(&status) {
        return Err(GatewayError::from_response(status, body));
    }
    let organizations: Vec<Organization> = super::decode_json(body)?;
    Ok(sort_by_name(organizations))
}
