use serde::Serialize;

use crate::app::context::ApiContext;
use crate::constants::{item_path, MATERIAL_MOVEMENT_LOGS, MATERIAL_REQUESTS, MATERIAL_REQUEST_DETAILS, STORAGES};
use crate::domain::storage::{MaterialMovementLog, MaterialRequest, MaterialRequestDetail, Storage};
use crate::error::Result;

/// Finished-goods storage, material movements and material requests.
pub struct StorageApi {
    ctx: ApiContext,
}

impl StorageApi {
    pub fn new(ctx: ApiContext) -> Self {
        Self { ctx }
    }

    // Storage

    pub async fn list_storages(&self) -> Result<Vec<Storage>> {
        self.ctx.list(STORAGES).await
    }

    pub async fn get_storage(&self, id: i64) -> Result<Storage> {
        self.ctx.get(&item_path(STORAGES, id)).await
    }

    pub async fn storages_by_batch(&self, batch_id: i64) -> Result<Vec<Storage>> {
        self.ctx.list(&format!("{}/batch/{}", STORAGES, batch_id)).await
    }

    pub async fn create_storage<B: Serialize + ?Sized>(&self, data: &B) -> Result<Storage> {
        self.ctx.post(STORAGES, data).await
    }

    pub async fn update_storage<B: Serialize + ?Sized>(&self, id: i64, data: &B) -> Result<Storage> {
        self.ctx.put(&item_path(STORAGES, id), data).await
    }

    pub async fn delete_storage(&self, id: i64) -> Result<()> {
        self.ctx.delete(&item_path(STORAGES, id)).await
    }

    // Material movement logs

    pub async fn list_movements(&self) -> Result<Vec<MaterialMovementLog>> {
        self.ctx.list(MATERIAL_MOVEMENT_LOGS).await
    }

    pub async fn get_movement(&self, id: i64) -> Result<MaterialMovementLog> {
        self.ctx.get(&item_path(MATERIAL_MOVEMENT_LOGS, id)).await
    }

    pub async fn movements_by_material(&self, raw_material_id: i64) -> Result<Vec<MaterialMovementLog>> {
        self.ctx
            .list(&format!("{}/material/{}", MATERIAL_MOVEMENT_LOGS, raw_material_id))
            .await
    }

    pub async fn create_movement<B: Serialize + ?Sized>(&self, data: &B) -> Result<MaterialMovementLog> {
        self.ctx.post(MATERIAL_MOVEMENT_LOGS, data).await
    }

    pub async fn update_movement<B: Serialize + ?Sized>(&self, id: i64, data: &B) -> Result<MaterialMovementLog> {
        self.ctx.put(&item_path(MATERIAL_MOVEMENT_LOGS, id), data).await
    }

    pub async fn delete_movement(&self, id: i64) -> Result<()> {
        self.ctx.delete(&item_path(MATERIAL_MOVEMENT_LOGS, id)).await
    }

    // Material requests

    pub async fn list_requests(&self) -> Result<Vec<MaterialRequest>> {
        self.ctx.list(MATERIAL_REQUESTS).await
    }

    pub async fn get_request(&self, id: i64) -> Result<MaterialRequest> {
        self.ctx.get(&item_path(MATERIAL_REQUESTS, id)).await
    }

    pub async fn create_request<B: Serialize + ?Sized>(&self, data: &B) -> Result<MaterialRequest> {
        self.ctx.post(MATERIAL_REQUESTS, data).await
    }

    pub async fn update_request<B: Serialize + ?Sized>(&self, id: i64, data: &B) -> Result<MaterialRequest> {
        self.ctx.put(&item_path(MATERIAL_REQUESTS, id), data).await
    }

    pub async fn delete_request(&self, id: i64) -> Result<()> {
        self.ctx.delete(&item_path(MATERIAL_REQUESTS, id)).await
    }

    // Material request details

    pub async fn list_request_details(&self) -> Result<Vec<MaterialRequestDetail>> {
        self.ctx.list(MATERIAL_REQUEST_DETAILS).await
    }

    pub async fn get_request_detail(&self, id: i64) -> Result<MaterialRequestDetail> {
        self.ctx.get(&item_path(MATERIAL_REQUEST_DETAILS, id)).await
    }

    pub async fn create_request_detail<B: Serialize + ?Sized>(&self, data: &B) -> Result<MaterialRequestDetail> {
        self.ctx.post(MATERIAL_REQUEST_DETAILS, data).await
    }

    pub async fn update_request_detail<B: Serialize + ?Sized>(
        &self,
        id: i64,
        data: &B,
    ) -> Result<MaterialRequestDetail> {
        self.ctx.put(&item_path(MATERIAL_REQUEST_DETAILS, id), data).await
    }

    pub async fn delete_request_detail(&self, id: i64) -> Result<()> {
        self.ctx.delete(&item_path(MATERIAL_REQUEST_DETAILS, id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::ScriptedTransport;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn filtered_lists_use_sub_paths_and_fallback() {
        let transport = ScriptedTransport::new();
        transport
            .fail_with_status(404, Some(json!({"message": "No storage for batch"})))
            .reply(json!([{"material_movement_log_id": 1, "quantity": 3}]));
        let api = StorageApi::new(ApiContext::new(Arc::new(transport.clone())));

        assert!(api.storages_by_batch(5).await.unwrap().is_empty());
        assert_eq!(api.movements_by_material(9).await.unwrap().len(), 1);

        let paths: Vec<String> = transport.requests().into_iter().map(|r| r.path).collect();
        assert_eq!(paths, vec!["/storages/batch/5", "/material-movement-logs/material/9"]);
    }

    #[tokio::test]
    async fn request_lookup_propagates_unauthorized() {
        let transport = ScriptedTransport::new();
        transport.fail_with_status(401, None);
        let api = StorageApi::new(ApiContext::new(Arc::new(transport)));
        assert_eq!(api.get_request(1).await.unwrap_err().status(), Some(401));
    }
}
