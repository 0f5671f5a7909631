use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::app::ports::{HttpMethod, TransportPort};
use crate::error::{ApiError, Result};

/// A request as the transport received it.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: HttpMethod,
    pub path: String,
    pub body: Option<Value>,
}

enum Reply {
    Body(Value),
    Status(u16, Option<Value>),
    Network(String),
}

/// In-memory transport that answers from a queue of scripted replies and records every
/// request it sees. Used for development and tests.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    replies: Arc<Mutex<VecDeque<Reply>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a 2xx reply with `body`.
    pub fn reply(&self, body: Value) -> &Self {
        self.push(Reply::Body(body))
    }

    /// Queues a non-2xx reply.
    pub fn fail_with_status(&self, status: u16, body: Option<Value>) -> &Self {
        self.push(Reply::Status(status, body))
    }

    /// Queues a failure that never got a response.
    pub fn fail_without_status(&self, message: impl Into<String>) -> &Self {
        self.push(Reply::Network(message.into()))
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.requests().pop()
    }

    fn push(&self, reply: Reply) -> &Self {
        self.replies
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(reply);
        self
    }
}

#[async_trait]
impl TransportPort for ScriptedTransport {
    async fn request(&self, method: HttpMethod, path: &str, body: Option<Value>) -> Result<Value> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(RecordedRequest {
                method,
                path: path.to_string(),
                body,
            });

        let reply = self
            .replies
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front();

        match reply {
            Some(Reply::Body(body)) => Ok(body),
            Some(Reply::Status(status, body)) => Err(ApiError::Status {
                method,
                path: path.to_string(),
                status,
                body,
            }),
            Some(Reply::Network(message)) => Err(ApiError::Network {
                method,
                path: path.to_string(),
                message,
            }),
            None => Err(ApiError::Network {
                method,
                path: path.to_string(),
                message: "no scripted reply left".to_string(),
            }),
        }
    }
}
