use serde_json::Value;
use thiserror::Error;

use crate::app::ports::HttpMethod;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP {status} on {method} {path}")]
    Status {
        method: HttpMethod,
        path: String,
        status: u16,
        body: Option<Value>,
    },

    #[error("Transport failure on {method} {path}: {message}")]
    Network {
        method: HttpMethod,
        path: String,
        message: String,
    },

    #[error("Failed to decode response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("HTTP client setup failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Environment variable error: {0}")]
    Env(#[from] std::env::VarError),
}

impl ApiError {
    /// HTTP status attached by the transport, if the failure got that far.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Decoded error body returned alongside a non-2xx status.
    pub fn body(&self) -> Option<&Value> {
        match self {
            ApiError::Status { body, .. } => body.as_ref(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
