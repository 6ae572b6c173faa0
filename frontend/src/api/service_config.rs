use common::error::{GatewayError, GatewayResult};
use common::gateway::decode_json;
use common::model::service_config::{ServiceConfig, SERVICE_CONFIG_PATH};
use gloo_net::http::Request;

use super::exchange;

/// Fetches the service configuration published by the host page.
pub async fn fetch_service_config() -> GatewayResult<ServiceConfig> {
    let (status, body) = exchange(Request::get(SERVICE_CONFIG_PATH).build()).await?;
    if !(200..300).contains(&status) {
        return Err(GatewayError::from_response(status, &body));
    }
    decode_json(&body)
}
