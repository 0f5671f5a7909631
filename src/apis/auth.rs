use serde_json::{Map, Value};
use tracing::{info, instrument, warn};

use crate::app::context::ApiContext;
use crate::constants::{AUTH_LOGIN, AUTH_LOGOUT, AUTH_ME, AUTH_REGISTER};
use crate::domain::auth::{AuthResponse, LocalizedRegistration, LoginRequest, Operator, RegisterRequest};
use crate::error::{ApiError, Result};
use crate::normalize::canonicalize_fields;

pub struct AuthApi {
    ctx: ApiContext,
}

impl AuthApi {
    pub fn new(ctx: ApiContext) -> Self {
        Self { ctx }
    }

    /// Exchanges credentials for a token. Storing the token and handing it to the
    /// transport is up to the caller.
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse> {
        match self.ctx.post::<_, AuthResponse>(AUTH_LOGIN, request).await {
            Ok(response) => {
                info!(operator_id = response.operator.operator_id, "login succeeded");
                Ok(response)
            }
            Err(err) => {
                warn!(status = ?err.status(), body = ?err.body(), "login failed");
                Err(err)
            }
        }
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<Value> {
        let body = serde_json::to_value(request)?;
        self.ctx.post_value(AUTH_REGISTER, Some(body)).await
    }

    /// Registration from localized input. `nombre`, `apellido` and `usuario` are renamed
    /// to their canonical names; every other field is sent as given.
    pub async fn register_localized(&self, fields: Map<String, Value>) -> Result<Value> {
        let body = Value::Object(canonicalize_fields(fields));
        self.ctx.post_value(AUTH_REGISTER, Some(body)).await
    }

    pub async fn register_form(&self, form: &LocalizedRegistration) -> Result<Value> {
        match serde_json::to_value(form)? {
            Value::Object(fields) => self.register_localized(fields).await,
            other => Err(ApiError::Json(<serde_json::Error as serde::ser::Error>::custom(
                format!("registration form serialized to a non-object: {}", other),
            ))),
        }
    }

    pub async fn current_user(&self) -> Result<Operator> {
        self.ctx.get(AUTH_ME).await
    }

    pub async fn logout(&self) -> Result<Value> {
        self.ctx.post_value(AUTH_LOGOUT, None).await
    }
}
