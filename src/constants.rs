//! Backend paths and fixed literals shared across the API wrappers.

// Envelope / fallback policy
pub const ENVELOPE_DATA_FIELD: &str = "data";
pub const ABSORBED_LIST_STATUSES: [u16; 2] = [404, 500];

// Legacy batch view fallbacks
pub const LEGACY_UNKNOWN_PRODUCT: &str = "Unknown Product";
pub const LEGACY_DEFAULT_STATUS: &str = "in_progress";
pub const LEGACY_DEFAULT_OPERATOR: &str = "Production Team";

// Auth
pub const AUTH_LOGIN: &str = "/auth/login";
pub const AUTH_REGISTER: &str = "/auth/register";
pub const AUTH_ME: &str = "/auth/me";
pub const AUTH_LOGOUT: &str = "/auth/logout";

// Resource collections
pub const CUSTOMERS: &str = "/customers";
pub const CUSTOMER_ORDERS: &str = "/customer-orders";
pub const MACHINES: &str = "/machines";
pub const PROCESSES: &str = "/processes";
pub const PRODUCTION_BATCHES: &str = "/production-batches";
pub const BATCH_RAW_MATERIALS: &str = "/batch-raw-materials";
pub const PROCESS_TRANSFORMATION: &str = "/process-transformation";
pub const PROCESS_EVALUATION: &str = "/process-evaluation";
pub const PRODUCTS: &str = "/products";
pub const RAW_MATERIAL_BASES: &str = "/raw-material-bases";
pub const RAW_MATERIALS: &str = "/raw-materials";
pub const RAW_MATERIAL_CATEGORIES: &str = "/raw-material-categories";
pub const STANDARD_VARIABLES: &str = "/standard-variables";
pub const STORAGES: &str = "/storages";
pub const MATERIAL_MOVEMENT_LOGS: &str = "/material-movement-logs";
pub const MATERIAL_REQUESTS: &str = "/material-requests";
pub const MATERIAL_REQUEST_DETAILS: &str = "/material-request-details";
pub const SUPPLIERS: &str = "/suppliers";
pub const ORDER_APPROVAL: &str = "/order-approval";
pub const BATCHES: &str = "/batches";
pub const PROCESS_MACHINE_RECORDS: &str = "/process-machine-records";

/// `"{collection}/{id}"`
pub fn item_path(collection: &str, id: i64) -> String {
    format!("{}/{}", collection, id)
}
