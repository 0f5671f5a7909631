use async_trait::async_trait;
use serde_json::Value;
use std::fmt;

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Authenticated request/response exchange against the backend.
///
/// Implementations own the base URL and credentials. On a 2xx they return the decoded
/// body (`Value::Null` for an empty one); otherwise they fail with
/// [`ApiError::Status`](crate::error::ApiError::Status) carrying the status and decoded
/// error body, or [`ApiError::Network`](crate::error::ApiError::Network) when no
/// response arrived at all.
#[async_trait]
pub trait TransportPort: Send + Sync {
    async fn request(&self, method: HttpMethod, path: &str, body: Option<Value>) -> Result<Value>;
}
