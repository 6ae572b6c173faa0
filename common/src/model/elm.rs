//! Shapes returned by the CQL-to-ELM translation service.
//!
//! The translator reports both its own compile errors (`errorExceptions`) and
//! errors raised while resolving included libraries (`externalErrors`) with the
//! same record shape. Positions are 1-based.

use serde::{Deserialize, Serialize};

/// One diagnostic produced by the translator.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ElmTranslationError {
    pub library_id: Option<String>,
    pub library_version: Option<String>,
    pub start_line: Option<u32>,
    pub start_char: Option<u32>,
    pub end_line: Option<u32>,
    pub end_char: Option<u32>,
    pub error_severity: Option<String>,
    pub error_type: Option<String>,
    pub message: String,
    pub target_include_library_id: Option<String>,
    pub target_include_library_version_id: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Result of translating a CQL document.
///
/// `library` is the ELM tree itself; it is kept opaque because the editor only
/// consumes the diagnostics.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ElmTranslation {
    pub error_exceptions: Vec<ElmTranslationError>,
    pub external_errors: Vec<ElmTranslationError>,
    pub library: Option<serde_json::Value>,
}

/// Envelope the translation endpoint wraps its result in: the ELM JSON arrives
/// as a string that has to be parsed a second time.
#[derive(Debug, Clone, Deserialize)]
pub struct TranslationEnvelope {
    pub json: String,
}
