use serde::{Deserialize, Serialize};

use crate::normalize::lenient::{null_as_default, optional_f64};

use super::materials::CategoryRef;
use super::production::{NamedRef, OperatorRef};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UnitOfMeasureRef {
    pub unit_of_measure_id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    pub abbreviation: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatusRef {
    pub status_id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredBatchOrder {
    pub product_name: Option<String>,
    pub customer: Option<NamedRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredBatchRef {
    pub production_batch_id: Option<i64>,
    pub customer_order: Option<StoredBatchOrder>,
}

/// Finished goods placed in storage from a production batch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Storage {
    pub storage_id: i64,
    pub production_batch_id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    pub storage_date: Option<String>,
    #[serde(default, deserialize_with = "optional_f64")]
    pub quantity: Option<f64>,
    pub unit_of_measure_id: Option<i64>,
    pub status_id: Option<i64>,
    pub notes: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub production_batch: Option<StoredBatchRef>,
    pub unit_of_measure: Option<UnitOfMeasureRef>,
    pub status: Option<StatusRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LotRef {
    pub raw_material_id: Option<i64>,
    pub lot_number: Option<String>,
    pub base: Option<NamedRef>,
    pub supplier: Option<NamedRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovementTypeRef {
    pub movement_type_id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MaterialMovementLog {
    pub material_movement_log_id: i64,
    pub raw_material_id: Option<i64>,
    pub movement_type_id: Option<i64>,
    #[serde(default, deserialize_with = "optional_f64")]
    pub quantity: Option<f64>,
    pub movement_date: Option<String>,
    pub operator_id: Option<i64>,
    pub notes: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub raw_material: Option<LotRef>,
    pub movement_type: Option<MovementTypeRef>,
    pub operator: Option<OperatorRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RequestedBaseRef {
    pub raw_material_base_id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    pub category: Option<CategoryRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MaterialRequest {
    pub material_request_id: i64,
    pub operator_id: Option<i64>,
    pub raw_material_base_id: Option<i64>,
    #[serde(default, deserialize_with = "optional_f64")]
    pub quantity_requested: Option<f64>,
    pub unit_of_measure_id: Option<i64>,
    pub status_id: Option<i64>,
    pub request_date: Option<String>,
    pub notes: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub operator: Option<OperatorRef>,
    pub raw_material_base: Option<RequestedBaseRef>,
    pub unit_of_measure: Option<UnitOfMeasureRef>,
    pub status: Option<StatusRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MaterialRequestDetail {
    pub material_request_detail_id: i64,
    pub material_request_id: Option<i64>,
    pub raw_material_id: Option<i64>,
    #[serde(default, deserialize_with = "optional_f64")]
    pub quantity_provided: Option<f64>,
    pub provided_date: Option<String>,
    pub notes: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub material_request: Option<MaterialRequest>,
    pub raw_material: Option<LotRef>,
}
