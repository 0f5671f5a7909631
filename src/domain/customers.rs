use serde::{Deserialize, Serialize};

use crate::normalize::lenient::{null_as_default, optional_f64};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Customer {
    pub customer_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub business_name: String,
    pub trading_name: Option<String>,
    pub tax_id: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub contact_person: Option<String>,
    pub active: Option<bool>,
}

/// Customer summary joined onto orders and batches.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomerRef {
    pub customer_id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub business_name: String,
    pub trading_name: Option<String>,
}

/// A customer order, as served by `/customer-orders`.
///
/// Carries the union of the fields the order list and detail responses expose; anything
/// a given response omits is `None`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomerOrder {
    pub order_id: i64,
    pub customer_id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub order_number: String,
    pub creation_date: Option<String>,
    pub delivery_date: Option<String>,
    pub priority: Option<i64>,
    pub description: Option<String>,
    pub observations: Option<String>,
    #[serde(default, deserialize_with = "optional_f64")]
    pub quantity: Option<f64>,
    pub status: Option<String>,
    pub customer: Option<CustomerRef>,
}
