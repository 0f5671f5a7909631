use serde::Serialize;
use tracing::instrument;

use crate::app::context::ApiContext;
use crate::constants::{item_path, CUSTOMERS};
use crate::domain::customers::Customer;
use crate::error::Result;

pub struct CustomersApi {
    ctx: ApiContext,
}

impl CustomersApi {
    pub fn new(ctx: ApiContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Customer>> {
        self.ctx.list(CUSTOMERS).await
    }

    pub async fn get(&self, id: i64) -> Result<Customer> {
        self.ctx.get(&item_path(CUSTOMERS, id)).await
    }

    pub async fn create<B: Serialize + ?Sized>(&self, data: &B) -> Result<Customer> {
        self.ctx.post(CUSTOMERS, data).await
    }

    pub async fn update<B: Serialize + ?Sized>(&self, id: i64, data: &B) -> Result<Customer> {
        self.ctx.put(&item_path(CUSTOMERS, id), data).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.ctx.delete(&item_path(CUSTOMERS, id)).await
    }
}
