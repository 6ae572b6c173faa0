//! Wire-level pieces of the service gateways: URLs, fixed query flags and
//! response decoding. The HTTP clients that use them live in the frontend.

pub mod library;
pub mod organization;
pub mod translation;

use crate::error::{GatewayError, GatewayResult};

/// Returns the configured base URL without a trailing slash, or the
/// configuration error the gateway reports instead of calling out.
pub fn require_base_url<'a>(base_url: Option<&'a str>, missing: &str) -> GatewayResult<&'a str> {
    base_url
        .map(|url| url.trim_end_matches('/'))
        .filter(|url| !url.is_empty())
        .ok_or_else(|| GatewayError::Configuration(missing.to_string()))
}

/// Value of the `Authorization` header for `token`.
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Decodes a JSON success body.
pub fn decode_json<T: serde::de::DeserializeOwned>(body: &str) -> GatewayResult<T> {
    serde_json::from_str(body).map_err(|e| GatewayError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_blank_base_url_is_a_configuration_error() {
        assert_eq!(
            require_base_url(None, "Missing X URL!"),
            Err(GatewayError::Configuration("Missing X URL!".to_string()))
        );
        assert!(require_base_url(Some("/"), "Missing X URL!").is_err());
        assert_eq!(require_base_url(Some("http://svc/api/"), "m"), Ok("http://svc/api"));
    }

    #[test]
    fn builds_bearer_header() {
        assert_eq!(bearer("test.jwt"), "Bearer test.jwt");
    }
}
