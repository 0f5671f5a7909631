use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

use crate::app::ports::{HttpMethod, TransportPort};
use crate::error::Result;
use crate::normalize::{absorb_list_failure, decode_record, decode_records};

/// Shared request plumbing for the resource APIs.
///
/// Wraps the injected transport; holds no other state, so clones are cheap and
/// concurrent calls are independent.
#[derive(Clone)]
pub struct ApiContext {
    transport: Arc<dyn TransportPort>,
}

impl ApiContext {
    pub fn new(transport: Arc<dyn TransportPort>) -> Self {
        Self { transport }
    }

    /// List fetch: envelope unwrapped, 404/500 absorbed into an empty collection.
    pub async fn list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        let result = match self.transport.request(HttpMethod::Get, path, None).await {
            Ok(body) => decode_records(path, body),
            Err(err) => Err(err),
        };
        let records = absorb_list_failure(path, result)?;
        debug!(path, count = records.len(), "list fetched");
        Ok(records)
    }

    /// Single-record fetch. Failures always propagate.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let body = self.transport.request(HttpMethod::Get, path, None).await?;
        decode_record(path, body)
    }

    /// Untyped fetch for endpoints without a fixed schema.
    pub async fn get_value(&self, path: &str) -> Result<Value> {
        self.transport.request(HttpMethod::Get, path, None).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body)?;
        let reply = self.transport.request(HttpMethod::Post, path, Some(body)).await?;
        decode_record(path, reply)
    }

    /// POST with an already-shaped JSON body and an untyped reply.
    pub async fn post_value(&self, path: &str, body: Option<Value>) -> Result<Value> {
        self.transport.request(HttpMethod::Post, path, body).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body)?;
        let reply = self.transport.request(HttpMethod::Put, path, Some(body)).await?;
        decode_record(path, reply)
    }

    pub async fn delete(&self, path: &str) -> Result<()> {
        self.transport.request(HttpMethod::Delete, path, None).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::infra::ScriptedTransport;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        id: i64,
    }

    fn context() -> (ApiContext, ScriptedTransport) {
        let transport = ScriptedTransport::new();
        (ApiContext::new(Arc::new(transport.clone())), transport)
    }

    #[tokio::test]
    async fn list_unwraps_and_absorbs() {
        let (ctx, transport) = context();
        transport
            .reply(json!({"data": [{"id": 1}], "pagination": {"total": 1}}))
            .fail_with_status(500, Some(json!({"message": "boom"})));

        let rows: Vec<Row> = ctx.list("/rows").await.unwrap();
        assert_eq!(rows, vec![Row { id: 1 }]);
        let rows: Vec<Row> = ctx.list("/rows").await.unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn list_decode_failure_is_not_absorbed() {
        let (ctx, transport) = context();
        transport.reply(json!({"data": [{"name": "no id"}]}));
        let err = ctx.list::<Row>("/rows").await.unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }));
    }

    #[tokio::test]
    async fn get_never_absorbs() {
        let (ctx, transport) = context();
        transport.fail_with_status(404, None);
        let err = ctx.get::<Row>("/rows/1").await.unwrap_err();
        assert_eq!(err.status(), Some(404));
    }

    #[tokio::test]
    async fn delete_ignores_reply_body() {
        let (ctx, transport) = context();
        transport.reply(json!({"message": "deleted"}));
        ctx.delete("/rows/1").await.unwrap();
        assert_eq!(transport.last_request().unwrap().method, HttpMethod::Delete);
    }
}
