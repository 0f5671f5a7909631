use serde_json::{json, Value};
use tracing::{info, instrument};

use crate::app::context::ApiContext;
use crate::constants::{BATCHES, PROCESS_MACHINE_RECORDS};
use crate::domain::certification::{
    BatchProcessMachines, CertificationLog, CreateProcessMachineRecord, ProcessMachineRecord,
};
use crate::domain::production::ProductionBatch;
use crate::error::Result;

/// Batch certification: assign a process, record each machine step, then finalize.
pub struct CertificationApi {
    ctx: ApiContext,
}

impl CertificationApi {
    pub fn new(ctx: ApiContext) -> Self {
        Self { ctx }
    }

    pub async fn pending_certification(&self) -> Result<Vec<ProductionBatch>> {
        self.ctx
            .list(&format!("{}/pending-certification", BATCHES))
            .await
    }

    pub async fn assign_process(&self, batch_id: i64, process_id: i64) -> Result<Value> {
        self.ctx
            .post_value(
                &format!("{}/{}/assign-process", BATCHES, batch_id),
                Some(json!({ "process_id": process_id })),
            )
            .await
    }

    pub async fn process_machines(&self, batch_id: i64) -> Result<BatchProcessMachines> {
        self.ctx
            .get(&format!("{}/{}/process-machines", BATCHES, batch_id))
            .await
    }

    #[instrument(skip(self, data), fields(batch_id = data.batch_id, process_machine_id = data.process_machine_id))]
    pub async fn record_variables(&self, data: &CreateProcessMachineRecord) -> Result<ProcessMachineRecord> {
        let record: ProcessMachineRecord = self.ctx.post(PROCESS_MACHINE_RECORDS, data).await?;
        info!(record_id = record.record_id, meets_standard = record.meets_standard, "step recorded");
        Ok(record)
    }

    pub async fn finalize(&self, batch_id: i64, observations: Option<&str>) -> Result<Value> {
        let body = match observations {
            Some(text) => json!({ "observations": text }),
            None => json!({}),
        };
        self.ctx
            .post_value(&format!("{}/{}/finalize-certification", BATCHES, batch_id), Some(body))
            .await
    }

    pub async fn certification_log(&self, batch_id: i64) -> Result<CertificationLog> {
        self.ctx
            .get(&format!("{}/{}/certification-log", BATCHES, batch_id))
            .await
    }
}
