use std::fmt;

use serde::{Deserialize, Serialize};

/// Boxed cause of a failed HTTP exchange, as reported by a [`Transport`](crate::Transport).
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Required {field} for {record}{}", at_position(*position))]
    Validation {
        record: &'static str,
        field: &'static str,
        /// Index of the offending record when it was passed in a list.
        position: Option<usize>,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Transport error: {0}")]
    Transport(#[source] TransportError),

    #[error("HTTP error: {status} {reason}{}", attached(application.as_deref()))]
    Http {
        status: u16,
        reason: &'static str,
        application: Option<Box<ApplicationError>>,
    },

    #[error("Application error: {0}")]
    Application(ApplicationError),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Serialization error: {0}")]
    Serialization(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ApiError>;

fn at_position(position: Option<usize>) -> String {
    position.map(|p| format!(" at position {p}")).unwrap_or_default()
}

fn attached(application: Option<&ApplicationError>) -> String {
    application.map(|a| format!(" ({a})")).unwrap_or_default()
}

// ---------------------------------------------------------------------------
// ApplicationError -- the `{"error": {...}}` envelope
// ---------------------------------------------------------------------------

/// Structured error reported by the service inside a response body.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ApplicationError {
    #[serde(default)]
    pub instance: String,
    #[serde(rename = "type", default)]
    pub error_type: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub detail: String,
    #[serde(default)]
    pub errors: Vec<ErrorLine>,
}

/// One entry of an envelope's `errors` list. The service sends either bare
/// strings or `{"message", "line"}` objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorLine {
    Detailed {
        message: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        line: Option<i64>,
    },
    Message(String),
}

impl fmt::Display for ErrorLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorLine::Detailed {
                message,
                line: Some(line),
            } => write!(f, "line {line}: {message}"),
            ErrorLine::Detailed { message, line: None } => f.write_str(message),
            ErrorLine::Message(message) => f.write_str(message),
        }
    }
}

impl fmt::Display for ApplicationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {}. {}",
            self.error_type, self.instance, self.title, self.detail
        )?;
        for line in &self.errors {
            write!(f, "\n  {line}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ApplicationError {}
