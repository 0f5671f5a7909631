use serde::Serialize;
use tracing::{debug, instrument};

use crate::app::context::ApiContext;
use crate::constants::{item_path, CUSTOMER_ORDERS};
use crate::domain::customers::CustomerOrder;
use crate::domain::orders::CreateOrderPayload;
use crate::error::Result;

/// Customer orders. The only order API; the customer and order screens share it.
pub struct OrdersApi {
    ctx: ApiContext,
}

impl OrdersApi {
    pub fn new(ctx: ApiContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<CustomerOrder>> {
        self.ctx.list(CUSTOMER_ORDERS).await
    }

    pub async fn get(&self, id: i64) -> Result<CustomerOrder> {
        self.ctx.get(&item_path(CUSTOMER_ORDERS, id)).await
    }

    /// Submits the payload as built: product lines and destination indices are not
    /// checked or renumbered.
    #[instrument(
        skip(self, payload),
        fields(
            products = payload.products.len(),
            destinations = payload.destinations.as_ref().map_or(0, Vec::len)
        )
    )]
    pub async fn create(&self, payload: &CreateOrderPayload) -> Result<CustomerOrder> {
        debug!("creating customer order");
        self.ctx.post(CUSTOMER_ORDERS, payload).await
    }

    pub async fn update<B: Serialize + ?Sized>(&self, id: i64, data: &B) -> Result<CustomerOrder> {
        self.ctx.put(&item_path(CUSTOMER_ORDERS, id), data).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.ctx.delete(&item_path(CUSTOMER_ORDERS, id)).await
    }
}
