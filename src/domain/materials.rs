use serde::{Deserialize, Serialize};

use crate::normalize::lenient::{null_as_default, optional_f64};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryRef {
    pub category_id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UnitRef {
    pub unit_id: Option<i64>,
    pub code: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    pub abbreviation: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SupplierRef {
    pub supplier_id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub business_name: String,
    pub trading_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RawMaterialBase {
    pub material_id: i64,
    pub category_id: Option<i64>,
    pub unit_id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "optional_f64")]
    pub available_quantity: Option<f64>,
    #[serde(default, deserialize_with = "optional_f64")]
    pub minimum_stock: Option<f64>,
    #[serde(default, deserialize_with = "optional_f64")]
    pub maximum_stock: Option<f64>,
    pub image_url: Option<String>,
    pub active: Option<bool>,
    pub category: Option<CategoryRef>,
    pub unit: Option<UnitRef>,
}

/// A received lot of a base material.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RawMaterial {
    pub raw_material_id: i64,
    pub material_id: Option<i64>,
    pub supplier_id: Option<i64>,
    pub supplier_batch: Option<String>,
    pub invoice_number: Option<String>,
    pub receipt_date: Option<String>,
    pub expiration_date: Option<String>,
    #[serde(default, deserialize_with = "optional_f64")]
    pub quantity: Option<f64>,
    #[serde(default, deserialize_with = "optional_f64")]
    pub available_quantity: Option<f64>,
    pub receipt_conformity: Option<bool>,
    pub observations: Option<String>,
    pub material_base: Option<RawMaterialBase>,
    pub supplier: Option<SupplierRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RawMaterialCategory {
    pub category_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    pub description: Option<String>,
    pub active: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub product_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "optional_f64")]
    pub weight: Option<f64>,
    pub unit_id: Option<i64>,
    pub unit: Option<UnitRef>,
    pub active: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Supplier {
    pub supplier_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub business_name: String,
    pub trading_name: Option<String>,
    pub tax_id: Option<String>,
    pub contact_person: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub active: Option<bool>,
}
