//! Failure taxonomy for calls to the backend services.

use serde_json::Value;
use thiserror::Error;

pub type GatewayResult<T> = Result<T, GatewayError>;

/// What a service said when it rejected a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerFailure {
    /// The service rejected individual fields of the submitted record.
    /// Fields keep the order the service listed them in.
    Validation {
        message: String,
        fields: Vec<(String, String)>,
    },
    /// Any other rejection. The message is absent when the body carried none.
    Generic { message: Option<String> },
}

impl ServerFailure {
    /// Interprets an error response body. Bodies that are not JSON, or carry
    /// neither a message nor field errors, become a message-less generic failure.
    /// A malformed `validationErrors` entry never hides the message.
    pub fn from_body(body: &str) -> Self {
        let parsed: Value = serde_json::from_str(body).unwrap_or(Value::Null);
        let message = parsed
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string);
        let fields: Vec<(String, String)> = parsed
            .get("validationErrors")
            .and_then(Value::as_object)
            .map(|errors| {
                errors
                    .iter()
                    .map(|(field, error)| (field.clone(), describe(error)))
                    .collect()
            })
            .unwrap_or_default();

        if fields.is_empty() {
            ServerFailure::Generic {
                message: message.filter(|m| !m.trim().is_empty()),
            }
        } else {
            ServerFailure::Validation {
                message: message.unwrap_or_default(),
                fields,
            }
        }
    }

    /// One-line summary: the message followed by ` field : error` for each
    /// rejected field.
    pub fn summary(&self) -> Option<String> {
        match self {
            ServerFailure::Validation { message, fields } => {
                let mut summary = message.clone();
                for (field, error) in fields {
                    summary.push_str(&format!(" {field} : {error}"));
                }
                Some(summary.trim_start().to_string())
            }
            ServerFailure::Generic { message } => message.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// The service has no base URL configured; nothing was sent.
    #[error("{0}")]
    Configuration(String),

    #[error("requested resource was not found")]
    NotFound,

    #[error("service responded with status {status}")]
    Server { status: u16, failure: ServerFailure },

    #[error("request failed: {0}")]
    Transport(String),

    #[error("malformed response: {0}")]
    Decode(String),

    #[error("no response within {0} ms")]
    Timeout(u32),
}

impl GatewayError {
    /// Builds the error for a non-success response.
    pub fn from_response(status: u16, body: &str) -> Self {
        if status == 404 {
            return GatewayError::NotFound;
        }
        GatewayError::Server {
            status,
            failure: ServerFailure::from_body(body),
        }
    }

    /// Message the service supplied, consolidated with any field errors.
    pub fn server_message(&self) -> Option<String> {
        match self {
            GatewayError::Server { failure, .. } => failure.summary(),
            _ => None,
        }
    }

    /// Field-level rejections, if the service reported any.
    pub fn field_errors(&self) -> Option<&[(String, String)]> {
        match self {
            GatewayError::Server {
                failure: ServerFailure::Validation { fields, .. },
                ..
            } => Some(fields.as_slice()),
            _ => None,
        }
    }
}

/// Text for one field error. Services usually send a string; lists are joined.
fn describe(error: &Value) -> String {
    match error {
        Value::String(text) => text.clone(),
        Value::Array(items) => items.iter().map(describe).collect::<Vec<_>>().join(", "),
        other => other.to_string(),
    }
}
