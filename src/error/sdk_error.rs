use serde::Serialize;
use thiserror::Error;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationFieldError {
    pub field: String,
    pub message: String,
}

/// Error type shared by the transport, repositories and use cases.
///
/// Repositories hand these back untouched; use cases are the only place
/// that decide how a failure is reported.
#[derive(Error, Debug)]
pub enum SdkError {
    /// The request never produced an HTTP response (DNS, connect, timeout)
    #[error("Transport failure calling {endpoint}: {message}")]
    Transport {
        endpoint: String,
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// The gateway answered with a non-2xx status
    #[error("Gateway returned {status} for {endpoint}: {message}")]
    Http {
        endpoint: String,
        status: u16,
        message: String,
        code: Option<String>,
    },

    /// The response body did not match the expected envelope
    #[error("Malformed response from {endpoint}")]
    Deserialization {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    /// The request body could not be encoded
    #[error("Failed to encode request body")]
    Serialization {
        #[source]
        source: serde_json::Error,
    },

    /// Validation error with field-specific details
    #[error("Validation failed for {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Several fields of a request failed validation
    #[error("Validation failed: {}", format_field_errors(.errors))]
    ValidationErrors { errors: Vec<ValidationFieldError> },

    /// Configuration error with key information
    #[error("Configuration error: {key}: {message}")]
    Configuration { key: String, message: String },

    /// The owning scope was cancelled before the operation finished
    #[error("Operation cancelled")]
    Cancelled,

    /// Internal error for unexpected failures
    #[error("Internal error")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

/// Coarse classification of an [`SdkError`], cheap to copy into UI state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Transport,
    Http,
    Deserialization,
    Serialization,
    Validation,
    Configuration,
    Cancelled,
    Internal,
}

impl SdkError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SdkError::Transport { .. } => ErrorKind::Transport,
            SdkError::Http { .. } => ErrorKind::Http,
            SdkError::Deserialization { .. } => ErrorKind::Deserialization,
            SdkError::Serialization { .. } => ErrorKind::Serialization,
            SdkError::Validation { .. } | SdkError::ValidationErrors { .. } => {
                ErrorKind::Validation
            }
            SdkError::Configuration { .. } => ErrorKind::Configuration,
            SdkError::Cancelled => ErrorKind::Cancelled,
            SdkError::Internal { .. } => ErrorKind::Internal,
        }
    }

    pub fn configuration(key: impl Into<String>, message: impl Into<String>) -> Self {
        SdkError::Configuration {
            key: key.into(),
            message: message.into(),
        }
    }

    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        SdkError::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Renders the error together with its source chain on one line.
    pub fn describe(&self) -> String {
        let mut out = self.to_string();
        let mut current = std::error::Error::source(self);
        while let Some(cause) = current {
            out.push_str(": ");
            out.push_str(&cause.to_string());
            current = cause.source();
        }
        out
    }
}

fn format_field_errors(errors: &[ValidationFieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<anyhow::Error> for SdkError {
    fn from(error: anyhow::Error) -> Self {
        SdkError::Internal { source: error }
    }
}

impl From<validator::ValidationErrors> for SdkError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut collected: Vec<ValidationFieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| ValidationFieldError {
                    field: field.to_string(),
                    message: e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string()),
                })
            })
            .collect();
        collected.sort_by(|a, b| a.field.cmp(&b.field));
        SdkError::ValidationErrors { errors: collected }
    }
}

/// Type alias for Result with SdkError to simplify function signatures
pub type SdkResult<T> = Result<T, SdkError>;
