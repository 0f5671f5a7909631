use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, instrument};

use crate::app::context::ApiContext;
use crate::constants::{item_path, BATCH_RAW_MATERIALS, PROCESS_EVALUATION, PROCESS_TRANSFORMATION, PRODUCTION_BATCHES};
use crate::domain::production::{BatchRawMaterial, LegacyBatchView, ProcessTransformation, ProductionBatch};
use crate::error::Result;
use crate::normalize::project_legacy_batch;

/// Production batches, their raw-material consumption, and per-step process data.
pub struct ProductionApi {
    ctx: ApiContext,
}

impl ProductionApi {
    pub fn new(ctx: ApiContext) -> Self {
        Self { ctx }
    }

    // Production batches

    #[instrument(skip(self))]
    pub async fn list_batches(&self) -> Result<Vec<ProductionBatch>> {
        self.ctx.list(PRODUCTION_BATCHES).await
    }

    pub async fn get_batch(&self, id: i64) -> Result<ProductionBatch> {
        self.ctx.get(&item_path(PRODUCTION_BATCHES, id)).await
    }

    pub async fn create_batch<B: Serialize + ?Sized>(&self, data: &B) -> Result<ProductionBatch> {
        self.ctx.post(PRODUCTION_BATCHES, data).await
    }

    pub async fn update_batch<B: Serialize + ?Sized>(&self, id: i64, data: &B) -> Result<ProductionBatch> {
        self.ctx.put(&item_path(PRODUCTION_BATCHES, id), data).await
    }

    #[instrument(skip(self))]
    pub async fn delete_batch(&self, id: i64) -> Result<()> {
        self.ctx.delete(&item_path(PRODUCTION_BATCHES, id)).await
    }

    // Legacy batch view

    /// Batch list in the backward-compatible shape. Inherits the list fallback.
    #[instrument(skip(self))]
    pub async fn legacy_batches(&self) -> Result<Vec<LegacyBatchView>> {
        let batches = self.list_batches().await?;
        info!(count = batches.len(), "projecting batches to legacy view");
        Ok(batches.iter().map(project_legacy_batch).collect())
    }

    /// Single batch in the backward-compatible shape. Failures propagate.
    #[instrument(skip(self))]
    pub async fn legacy_batch(&self, id: i64) -> Result<LegacyBatchView> {
        let batch = self.get_batch(id).await?;
        debug!(batch_id = batch.batch_id, "projecting batch to legacy view");
        Ok(project_legacy_batch(&batch))
    }

    // Batch raw materials

    pub async fn list_batch_raw_materials(&self) -> Result<Vec<BatchRawMaterial>> {
        self.ctx.list(BATCH_RAW_MATERIALS).await
    }

    pub async fn get_batch_raw_material(&self, id: i64) -> Result<BatchRawMaterial> {
        self.ctx.get(&item_path(BATCH_RAW_MATERIALS, id)).await
    }

    pub async fn create_batch_raw_material<B: Serialize + ?Sized>(&self, data: &B) -> Result<BatchRawMaterial> {
        self.ctx.post(BATCH_RAW_MATERIALS, data).await
    }

    pub async fn update_batch_raw_material<B: Serialize + ?Sized>(
        &self,
        id: i64,
        data: &B,
    ) -> Result<BatchRawMaterial> {
        self.ctx.put(&item_path(BATCH_RAW_MATERIALS, id), data).await
    }

    pub async fn delete_batch_raw_material(&self, id: i64) -> Result<()> {
        self.ctx.delete(&item_path(BATCH_RAW_MATERIALS, id)).await
    }

    // Process transformation

    pub async fn register_transformation(
        &self,
        batch_id: i64,
        process_machine_id: i64,
        data: &ProcessTransformation,
    ) -> Result<Value> {
        let path = transformation_path(batch_id, process_machine_id);
        let body = serde_json::to_value(data)?;
        self.ctx.post_value(&path, Some(body)).await
    }

    pub async fn transformation_form(&self, batch_id: i64, process_machine_id: i64) -> Result<Value> {
        self.ctx
            .get_value(&transformation_path(batch_id, process_machine_id))
            .await
    }

    pub async fn batch_process(&self, batch_id: i64) -> Result<Value> {
        self.ctx
            .get_value(&format!("{}/batch/{}", PROCESS_TRANSFORMATION, batch_id))
            .await
    }

    // Process evaluation

    pub async fn finalize_evaluation(&self, batch_id: i64, data: Value) -> Result<Value> {
        self.ctx
            .post_value(&format!("{}/finalize/{}", PROCESS_EVALUATION, batch_id), Some(data))
            .await
    }

    pub async fn evaluation_log(&self, batch_id: i64) -> Result<Value> {
        self.ctx
            .get_value(&format!("{}/log/{}", PROCESS_EVALUATION, batch_id))
            .await
    }
}

fn transformation_path(batch_id: i64, process_machine_id: i64) -> String {
    format!(
        "{}/batch/{}/machine/{}",
        PROCESS_TRANSFORMATION, batch_id, process_machine_id
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ports::HttpMethod;
    use crate::infra::ScriptedTransport;
    use serde_json::json;
    use std::sync::Arc;

    fn api() -> (ProductionApi, ScriptedTransport) {
        let transport = ScriptedTransport::new();
        (ProductionApi::new(ApiContext::new(Arc::new(transport.clone()))), transport)
    }

    #[tokio::test]
    async fn legacy_list_and_item_agree() {
        let (api, transport) = api();
        let record = json!({
            "batch_id": 12,
            "name": "Lote 12",
            "creation_date": "2025-05-01",
            "target_quantity": "500",
            "customer_order": {"order_id": 4, "description": "Bolsas 30x40"}
        });
        transport
            .reply(json!({"data": [record.clone()], "pagination": {"total": 1}}))
            .reply(record);

        let list = api.legacy_batches().await.unwrap();
        let item = api.legacy_batch(12).await.unwrap();
        assert_eq!(list, vec![item.clone()]);
        assert_eq!(item.product_name, "Bolsas 30x40");
        assert_eq!(item.quantity, 500.0);
    }

    #[tokio::test]
    async fn legacy_list_absorbs_server_error() {
        let (api, transport) = api();
        transport.fail_with_status(500, None);
        assert!(api.legacy_batches().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn legacy_item_propagates_not_found() {
        let (api, transport) = api();
        transport.fail_with_status(404, None);
        assert_eq!(api.legacy_batch(3).await.unwrap_err().status(), Some(404));
    }

    #[tokio::test]
    async fn transformation_paths() {
        let (api, transport) = api();
        transport.reply(json!({"ok": true})).reply(json!({"fields": []}));

        let data = ProcessTransformation {
            operator_id: Some(2),
            ..Default::default()
        };
        api.register_transformation(7, 3, &data).await.unwrap();
        api.transformation_form(7, 3).await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].method, HttpMethod::Post);
        assert_eq!(requests[0].path, "/process-transformation/batch/7/machine/3");
        assert_eq!(requests[0].body, Some(json!({"operator_id": 2, "variables": {}})));
        assert_eq!(requests[1].method, HttpMethod::Get);
        assert_eq!(requests[1].path, "/process-transformation/batch/7/machine/3");
    }
}
