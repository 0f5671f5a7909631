use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

use crate::app::ports::{HttpMethod, TransportPort};
use crate::config::ApiConfig;
use crate::error::{ApiError, Result};
use crate::observability::metrics::{self, RequestOutcome};

/// `TransportPort` over reqwest. Holds the base URL and the bearer credential; nothing
/// else in the crate sees either.
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ReqwestTransport {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        })
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        let transport = Self::new(&config.base_url, Duration::from_secs(config.timeout_seconds))?;
        Ok(match &config.token {
            Some(token) => transport.with_token(token.clone()),
            None => transport,
        })
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

fn to_reqwest(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Delete => reqwest::Method::DELETE,
    }
}

/// JSON if it parses, the raw text otherwise, `None` for an empty body.
fn decode_body(bytes: &[u8]) -> Option<Value> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return None;
    }
    Some(
        serde_json::from_slice(bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned())),
    )
}

#[async_trait]
impl TransportPort for ReqwestTransport {
    async fn request(&self, method: HttpMethod, path: &str, body: Option<Value>) -> Result<Value> {
        let url = self.url(path);
        debug!(%method, %url, "HTTP request");
        let started = Instant::now();

        let mut request = self
            .client
            .request(to_reqwest(method), &url)
            .header(ACCEPT, "application/json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = &body {
            request = request.json(body);
        }

        let network_error = |e: reqwest::Error| {
            metrics::record_request(method.as_str(), RequestOutcome::NetworkError, started.elapsed());
            warn!(%method, path, error = %e, "HTTP request failed before a response arrived");
            ApiError::Network {
                method,
                path: path.to_string(),
                message: e.to_string(),
            }
        };

        let response = request.send().await.map_err(network_error)?;
        let status = response.status();

        if status.is_success() {
            let bytes = response.bytes().await.map_err(network_error)?;
            metrics::record_request(method.as_str(), RequestOutcome::Success, started.elapsed());
            debug!(%method, path, status = status.as_u16(), bytes = bytes.len(), "HTTP response");
            Ok(decode_body(&bytes).unwrap_or(Value::Null))
        } else {
            // The status is already known; an unreadable error body only loses the body.
            let decoded = match response.bytes().await {
                Ok(bytes) => decode_body(&bytes),
                Err(e) => {
                    warn!(%method, path, status = status.as_u16(), error = %e, "error response body could not be read");
                    None
                }
            };
            metrics::record_request(method.as_str(), RequestOutcome::HttpError, started.elapsed());
            debug!(%method, path, status = status.as_u16(), body = ?decoded, "HTTP error response");
            Err(ApiError::Status {
                method,
                path: path.to_string(),
                status: status.as_u16(),
                body: decoded,
            })
        }
    }
}
