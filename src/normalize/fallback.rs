use tracing::warn;

use crate::constants::ABSORBED_LIST_STATUSES;
use crate::error::{ApiError, Result};
use crate::observability::metrics;

/// Where a failed call ends up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureClass {
    /// Replaced by an empty collection.
    Absorbed,
    /// Returned to the caller unchanged.
    Propagated,
}

/// Classifies a failure raised by a list fetch. Only a transport status of exactly 404
/// or 500 is absorbed; failures without a status never are.
pub fn classify_list_failure(err: &ApiError) -> FailureClass {
    match err.status() {
        Some(status) if ABSORBED_LIST_STATUSES.contains(&status) => FailureClass::Absorbed,
        _ => FailureClass::Propagated,
    }
}

/// Applies the empty-collection fallback to the outcome of a list fetch.
///
/// Item, create, update and delete calls must not go through here.
pub fn absorb_list_failure<T>(path: &str, result: Result<Vec<T>>) -> Result<Vec<T>> {
    match result {
        Ok(records) => Ok(records),
        Err(err) => match classify_list_failure(&err) {
            FailureClass::Absorbed => {
                let status = err.status().unwrap_or_default();
                warn!(path, status, body = ?err.body(), "list fetch failed, returning empty collection");
                metrics::record_list_fallback(status);
                Ok(Vec::new())
            }
            FailureClass::Propagated => Err(err),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ports::HttpMethod;

    fn status(status: u16) -> ApiError {
        ApiError::Status {
            method: HttpMethod::Get,
            path: "/suppliers".into(),
            status,
            body: None,
        }
    }

    #[test]
    fn not_found_and_server_error_are_absorbed() {
        for code in [404, 500] {
            assert_eq!(classify_list_failure(&status(code)), FailureClass::Absorbed);
            let out: Result<Vec<u8>> = absorb_list_failure("/suppliers", Err(status(code)));
            assert!(out.unwrap().is_empty());
        }
    }

    #[test]
    fn neighbouring_statuses_propagate() {
        for code in [400, 401, 403, 405, 422, 501, 502, 503] {
            let out: Result<Vec<u8>> = absorb_list_failure("/suppliers", Err(status(code)));
            assert_eq!(out.unwrap_err().status(), Some(code));
        }
    }

    #[test]
    fn statusless_failures_propagate() {
        let err = ApiError::Network {
            method: HttpMethod::Get,
            path: "/suppliers".into(),
            message: "dns error".into(),
        };
        assert_eq!(classify_list_failure(&err), FailureClass::Propagated);
        let out: Result<Vec<u8>> = absorb_list_failure("/suppliers", Err(err));
        assert!(matches!(out, Err(ApiError::Network { .. })));
    }

    #[test]
    fn successful_pages_pass_through() {
        let out = absorb_list_failure("/suppliers", Ok(vec![1, 2, 3]));
        assert_eq!(out.unwrap(), vec![1, 2, 3]);
    }
}
