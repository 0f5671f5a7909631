//! Client-side metrics, recorded through the `metrics` facade.
//!
//! The library never installs a recorder; without one every call here is a no-op.

use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricName {
    RequestsTotal,
    RequestDuration,
    ListFallbackTotal,
}

impl MetricName {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricName::RequestsTotal => "trace_client_requests_total",
            MetricName::RequestDuration => "trace_client_request_duration_seconds",
            MetricName::ListFallbackTotal => "trace_client_list_fallback_total",
        }
    }

    pub fn all() -> [MetricName; 3] {
        [
            MetricName::RequestsTotal,
            MetricName::RequestDuration,
            MetricName::ListFallbackTotal,
        ]
    }
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome label for a finished transport call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    Success,
    HttpError,
    NetworkError,
}

impl RequestOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestOutcome::Success => "success",
            RequestOutcome::HttpError => "http_error",
            RequestOutcome::NetworkError => "network_error",
        }
    }
}

pub fn record_request(method: &'static str, outcome: RequestOutcome, elapsed: Duration) {
    ::metrics::counter!(
        MetricName::RequestsTotal.as_str(),
        "method" => method,
        "outcome" => outcome.as_str()
    )
    .increment(1);
    ::metrics::histogram!(MetricName::RequestDuration.as_str(), "method" => method)
        .record(elapsed.as_secs_f64());
}

pub fn record_list_fallback(status: u16) {
    ::metrics::counter!(
        MetricName::ListFallbackTotal.as_str(),
        "status" => status.to_string()
    )
    .increment(1);
}
