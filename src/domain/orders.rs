use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Line of the flat product list of a new order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderProductLine {
    pub product_id: i64,
    /// Kept as the caller wrote it, integer or decimal.
    pub quantity: Number,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Share of an order product sent to one destination.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DestinationProduct {
    /// Zero-based index into [`CreateOrderPayload::products`].
    pub order_product_index: usize,
    pub quantity: Number,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderDestination {
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<DestinationProduct>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body of `POST /customer-orders`.
///
/// Passed to the transport exactly as built. Every `order_product_index` must point into
/// `products`; that is the caller's responsibility and nothing on the way to the backend
/// checks or renumbers it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateOrderPayload {
    pub customer_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observations: Option<String>,
    pub products: Vec<OrderProductLine>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destinations: Option<Vec<OrderDestination>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CreateOrderPayload {
    /// `(destination, index)` pairs whose index falls outside the product list.
    ///
    /// Offered to callers that want to check the precondition before submitting; the
    /// create call itself never consults it.
    pub fn dangling_indices(&self) -> Vec<(usize, usize)> {
        self.destinations
            .iter()
            .flatten()
            .enumerate()
            .flat_map(|(dest, destination)| {
                destination
                    .products
                    .iter()
                    .flatten()
                    .map(move |p| (dest, p.order_product_index))
            })
            .filter(|(_, index)| *index >= self.products.len())
            .collect()
    }
}
