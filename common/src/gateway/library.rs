//! CQL library resource.

use crate::error::{GatewayError, GatewayResult};
use crate::model::cql_library::CqlLibrary;

pub const MISSING_URL: &str = "Missing CQL Library service URL! Is it present in the service config?";

pub fn collection_url(base_url: &str) -> String {
    format!("{base_url}/cql-libraries")
}

pub fn listing_url(base_url: &str, current_user_only: bool) -> String {
    if current_user_only {
        format!("{}?currentUser=true", collection_url(base_url))
    } else {
        collection_url(base_url)
    }
}

pub fn library_url(base_url: &str, id: &str) -> String {
    format!("{}/{id}", collection_url(base_url))
}

/// Interprets the response to any library call that returns one record.
pub fn decode_library(status: u16, body: &str) -> GatewayResult<CqlLibrary> {
    if (200..300).contains(&status) {
        super::decode_json(body)
    } else {
        Err(GatewayError::from_response(status, body))
    }
}

pub fn decode_libraries(status: u16, body: &str) -> GatewayResult<Vec<CqlLibrary>> {
    if (200..300).contains(&status) {
        super::decode_json(body)
    } else {
        Err(GatewayError::from_response(status, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_resource_urls() {
        assert_eq!(collection_url("http://svc"), "http://svc/cql-libraries");
        assert_eq!(library_url("http://svc", "abc"), "http://svc/cql-libraries/abc");
        assert_eq!(listing_url("http://svc", true), "http://svc/cql-libraries?currentUser=true");
        assert_eq!(listing_url("http://svc", false), "http://svc/cql-libraries");
    }

    #[test]
    fn decodes_created_record() {
        let library = decode_library(201, r#"{"id":"1","cqlLibraryName":"Lib","draft":true}"#).unwrap();
        assert_eq!(library.id.as_deref(), Some("1"));
    }

    #[test]
    fn rejected_create_carries_field_errors() {
        let error = decode_library(
            400,
            r#"{"message":"Error X","validationErrors":{"cqlLibraryName":"Name taken"}}"#,
        )
        .unwrap_err();
        assert_eq!(error.server_message().as_deref(), Some("Error X cqlLibraryName : Name taken"));
    }

    #[test]
    fn garbage_success_body_is_a_decode_error() {
        assert!(matches!(decode_library(200, "not json"), Err(GatewayError::Decode(_))));
    }
}
