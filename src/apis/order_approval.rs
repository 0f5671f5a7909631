use serde_json::{json, Value};
use tracing::instrument;

use crate::app::context::ApiContext;
use crate::constants::ORDER_APPROVAL;
use crate::domain::customers::CustomerOrder;
use crate::error::Result;

/// Supervisor review of incoming customer orders.
pub struct OrderApprovalApi {
    ctx: ApiContext,
}

impl OrderApprovalApi {
    pub fn new(ctx: ApiContext) -> Self {
        Self { ctx }
    }

    pub async fn pending(&self) -> Result<Vec<CustomerOrder>> {
        self.ctx.list(&format!("{}/pending", ORDER_APPROVAL)).await
    }

    #[instrument(skip(self))]
    pub async fn approve(&self, order_id: i64, observations: Option<&str>) -> Result<Value> {
        let body = match observations {
            Some(text) => json!({ "observations": text }),
            None => json!({}),
        };
        self.ctx
            .post_value(&format!("{}/{}/approve", ORDER_APPROVAL, order_id), Some(body))
            .await
    }

    #[instrument(skip(self))]
    pub async fn reject(&self, order_id: i64, reason: &str) -> Result<Value> {
        self.ctx
            .post_value(
                &format!("{}/{}/reject", ORDER_APPROVAL, order_id),
                Some(json!({ "reason": reason })),
            )
            .await
    }
}
