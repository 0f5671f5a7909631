use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::normalize::lenient::{null_as_default, optional_f64};

use super::customers::CustomerRef;

/// Order summary joined onto a production batch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BatchOrderRef {
    pub order_id: Option<i64>,
    pub order_number: Option<String>,
    pub description: Option<String>,
    pub customer: Option<CustomerRef>,
}

/// Operator summary, joined by some endpoints only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OperatorRef {
    pub operator_id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub first_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub last_name: String,
    pub username: Option<String>,
}

impl OperatorRef {
    /// `"First Last"`, or `None` when both parts are blank.
    pub fn display_name(&self) -> Option<String> {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        if full.is_empty() {
            None
        } else {
            Some(full.to_string())
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductionBatch {
    pub batch_id: i64,
    pub order_id: Option<i64>,
    pub batch_code: Option<String>,
    pub name: Option<String>,
    pub creation_date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    #[serde(default, deserialize_with = "optional_f64")]
    pub target_quantity: Option<f64>,
    #[serde(default, deserialize_with = "optional_f64")]
    pub produced_quantity: Option<f64>,
    pub observations: Option<String>,
    pub customer_order: Option<BatchOrderRef>,
    /// Older list responses join the relation as `order`; some send both keys.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<BatchOrderRef>,
    /// Not served by the backend yet; read when present.
    pub status: Option<String>,
    /// Not joined by the backend yet; read when present.
    pub operator: Option<OperatorRef>,
}

impl ProductionBatch {
    /// The joined order, under whichever key the endpoint used. `customer_order` wins.
    pub fn order_ref(&self) -> Option<&BatchOrderRef> {
        self.customer_order.as_ref().or(self.order.as_ref())
    }
}

/// Backward-compatible batch shape consumed by the older batch screens.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LegacyBatchView {
    pub batch_id: i64,
    pub product_name: String,
    pub status: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub quantity: f64,
    pub operator_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BatchRawMaterialRef {
    pub raw_material_id: i64,
    pub supplier_batch: Option<String>,
    pub base: Option<NamedRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NamedRef {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BatchRawMaterial {
    pub batch_material_id: i64,
    pub batch_id: Option<i64>,
    pub raw_material_id: Option<i64>,
    #[serde(default, deserialize_with = "optional_f64")]
    pub planned_quantity: Option<f64>,
    #[serde(default, deserialize_with = "optional_f64")]
    pub used_quantity: Option<f64>,
    pub raw_material: Option<BatchRawMaterialRef>,
}

/// Variables captured for one machine step of a batch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ProcessTransformation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub variables: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_sparse_batch() {
        let batch: ProductionBatch = serde_json::from_value(json!({"batch_id": 4})).unwrap();
        assert_eq!(batch.batch_id, 4);
        assert!(batch.customer_order.is_none());
        assert!(batch.target_quantity.is_none());
    }

    #[test]
    fn reads_order_relation_under_either_key() {
        let a: ProductionBatch = serde_json::from_value(json!({
            "batch_id": 1,
            "customer_order": {"order_id": 2, "description": "Bolsas"}
        }))
        .unwrap();
        let b: ProductionBatch = serde_json::from_value(json!({
            "batch_id": 1,
            "order": {"order_id": 2, "description": "Bolsas"}
        }))
        .unwrap();
        assert_eq!(a.order_ref(), b.order_ref());
        assert_eq!(b.order_ref().and_then(|o| o.order_id), Some(2));
    }

    #[test]
    fn both_order_keys_decode() {
        let batch: ProductionBatch = serde_json::from_value(json!({
            "batch_id": 1,
            "order": {"order_id": 2, "description": "Viejo"},
            "customer_order": {"order_id": 2, "description": "Bolsas"}
        }))
        .unwrap();
        assert_eq!(
            batch.order_ref().and_then(|o| o.description.as_deref()),
            Some("Bolsas")
        );
    }

    #[test]
    fn string_quantities_are_numbers() {
        let batch: ProductionBatch = serde_json::from_value(json!({
            "batch_id": 1,
            "target_quantity": "150.00",
            "produced_quantity": 20
        }))
        .unwrap();
        assert_eq!(batch.target_quantity, Some(150.0));
        assert_eq!(batch.produced_quantity, Some(20.0));
    }

    #[test]
    fn operator_display_name() {
        let op = OperatorRef {
            operator_id: Some(1),
            first_name: "Luis".into(),
            last_name: "Rojas".into(),
            username: None,
        };
        assert_eq!(op.display_name().as_deref(), Some("Luis Rojas"));
        let blank = OperatorRef {
            operator_id: None,
            first_name: " ".into(),
            last_name: String::new(),
            username: None,
        };
        assert_eq!(blank.display_name(), None);
    }
}
