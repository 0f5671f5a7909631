//! One API struct per resource family, all sharing a single injected transport.

pub mod auth;
pub mod certification;
pub mod customers;
pub mod materials;
pub mod order_approval;
pub mod orders;
pub mod processes;
pub mod production;
pub mod storage;

use std::sync::Arc;

use crate::app::context::ApiContext;
use crate::app::ports::TransportPort;

pub use auth::AuthApi;
pub use certification::CertificationApi;
pub use customers::CustomersApi;
pub use materials::{ProductsApi, RawMaterialsApi, SuppliersApi};
pub use order_approval::OrderApprovalApi;
pub use orders::OrdersApi;
pub use processes::{MachinesApi, ProcessesApi, StandardVariablesApi};
pub use production::ProductionApi;
pub use storage::StorageApi;

/// Every resource API, bound to the same transport.
pub struct TraceApi {
    pub auth: AuthApi,
    pub customers: CustomersApi,
    pub orders: OrdersApi,
    pub order_approval: OrderApprovalApi,
    pub machines: MachinesApi,
    pub processes: ProcessesApi,
    pub standard_variables: StandardVariablesApi,
    pub production: ProductionApi,
    pub certification: CertificationApi,
    pub raw_materials: RawMaterialsApi,
    pub products: ProductsApi,
    pub suppliers: SuppliersApi,
    pub storage: StorageApi,
}

impl TraceApi {
    pub fn new(transport: Arc<dyn TransportPort>) -> Self {
        let ctx = ApiContext::new(transport);
        Self {
            auth: AuthApi::new(ctx.clone()),
            customers: CustomersApi::new(ctx.clone()),
            orders: OrdersApi::new(ctx.clone()),
            order_approval: OrderApprovalApi::new(ctx.clone()),
            machines: MachinesApi::new(ctx.clone()),
            processes: ProcessesApi::new(ctx.clone()),
            standard_variables: StandardVariablesApi::new(ctx.clone()),
            production: ProductionApi::new(ctx.clone()),
            certification: CertificationApi::new(ctx.clone()),
            raw_materials: RawMaterialsApi::new(ctx.clone()),
            products: ProductsApi::new(ctx.clone()),
            suppliers: SuppliersApi::new(ctx.clone()),
            storage: StorageApi::new(ctx),
        }
    }
}
