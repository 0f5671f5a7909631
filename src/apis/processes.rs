use serde::Serialize;
use tracing::instrument;

use crate::app::context::ApiContext;
use crate::constants::{item_path, MACHINES, PROCESSES, STANDARD_VARIABLES};
use crate::domain::processes::{Machine, Process, ProcessInput, StandardVariable, StandardVariableInput};
use crate::error::Result;

pub struct MachinesApi {
    ctx: ApiContext,
}

impl MachinesApi {
    pub fn new(ctx: ApiContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Machine>> {
        self.ctx.list(MACHINES).await
    }

    pub async fn get(&self, id: i64) -> Result<Machine> {
        self.ctx.get(&item_path(MACHINES, id)).await
    }

    pub async fn create<B: Serialize + ?Sized>(&self, data: &B) -> Result<Machine> {
        self.ctx.post(MACHINES, data).await
    }

    pub async fn update<B: Serialize + ?Sized>(&self, id: i64, data: &B) -> Result<Machine> {
        self.ctx.put(&item_path(MACHINES, id), data).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.ctx.delete(&item_path(MACHINES, id)).await
    }
}

pub struct ProcessesApi {
    ctx: ApiContext,
}

impl ProcessesApi {
    pub fn new(ctx: ApiContext) -> Self {
        Self { ctx }
    }

    /// With `include_machines`, each process carries its ordered machine steps.
    #[instrument(skip(self))]
    pub async fn list(&self, include_machines: bool) -> Result<Vec<Process>> {
        if include_machines {
            self.ctx.list(&format!("{}?include=machines", PROCESSES)).await
        } else {
            self.ctx.list(PROCESSES).await
        }
    }

    pub async fn get(&self, id: i64) -> Result<Process> {
        self.ctx.get(&item_path(PROCESSES, id)).await
    }

    pub async fn create(&self, data: &ProcessInput) -> Result<Process> {
        self.ctx.post(PROCESSES, data).await
    }

    pub async fn update(&self, id: i64, data: &ProcessInput) -> Result<Process> {
        self.ctx.put(&item_path(PROCESSES, id), data).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.ctx.delete(&item_path(PROCESSES, id)).await
    }
}

pub struct StandardVariablesApi {
    ctx: ApiContext,
}

impl StandardVariablesApi {
    pub fn new(ctx: ApiContext) -> Self {
        Self { ctx }
    }

    pub async fn list(&self) -> Result<Vec<StandardVariable>> {
        self.ctx.list(STANDARD_VARIABLES).await
    }

    pub async fn get(&self, id: i64) -> Result<StandardVariable> {
        self.ctx.get(&item_path(STANDARD_VARIABLES, id)).await
    }

    pub async fn create(&self, data: &StandardVariableInput) -> Result<StandardVariable> {
        self.ctx.post(STANDARD_VARIABLES, data).await
    }

    pub async fn update(&self, id: i64, data: &StandardVariableInput) -> Result<StandardVariable> {
        self.ctx.put(&item_path(STANDARD_VARIABLES, id), data).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.ctx.delete(&item_path(STANDARD_VARIABLES, id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::ScriptedTransport;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn include_machines_query() {
        let transport = ScriptedTransport::new();
        transport.reply(json!([])).reply(json!({"data": []}));
        let api = ProcessesApi::new(ApiContext::new(Arc::new(transport.clone())));

        api.list(true).await.unwrap();
        api.list(false).await.unwrap();

        let paths: Vec<String> = transport.requests().into_iter().map(|r| r.path).collect();
        assert_eq!(paths, vec!["/processes?include=machines", "/processes"]);
    }

    #[tokio::test]
    async fn machine_list_forbidden_propagates() {
        let transport = ScriptedTransport::new();
        transport.fail_with_status(403, None);
        let api = MachinesApi::new(ApiContext::new(Arc::new(transport)));
        assert_eq!(api.list().await.unwrap_err().status(), Some(403));
    }

    #[tokio::test]
    async fn standard_variable_delete_propagates_server_error() {
        let transport = ScriptedTransport::new();
        transport.fail_with_status(500, None);
        let api = StandardVariablesApi::new(ApiContext::new(Arc::new(transport)));
        assert_eq!(api.delete(1).await.unwrap_err().status(), Some(500));
    }
}
