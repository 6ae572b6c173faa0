//! CQL-to-ELM translation resource.

use crate::error::{GatewayError, GatewayResult};
use crate::model::elm::{ElmTranslation, TranslationEnvelope};

pub const MISSING_URL: &str = "Missing ELM translation service URL! Is it present in the service config?";
pub const NON_OK_RESPONSE: &str = "received non-OK response for CQL-to-ELM translation";

/// Upper bound on a translation round trip.
pub const TIMEOUT_MS: u32 = 15_000;

/// Translator flags sent with every request.
pub const QUERY_FLAGS: [(&str, &str); 7] = [
    ("showWarnings", "true"),
    ("annotations", "true"),
    ("locators", "true"),
    ("disable-list-demotion", "true"),
    ("disable-list-promotion", "true"),
    ("disable-method-invocation", "false"),
    ("validate-units", "true"),
];

pub fn translator_url(base_url: &str) -> String {
    format!("{base_url}/cql/translator/cql")
}

/// Decodes a translation response. Anything but 200 is a failure, as is an
/// envelope whose `json` string does not hold a translation.
pub fn decode_translation(status: u16, body: &str) -> GatewayResult<ElmTranslation> {
    if status != 200 {
        return Err(GatewayError::from_response(status, body));
    }
    let envelope: TranslationEnvelope = super::decode_json(body)?;
    super::decode_json(&envelope.json)
}
