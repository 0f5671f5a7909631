use crate::constants::{
    LEGACY_DEFAULT_OPERATOR, LEGACY_DEFAULT_STATUS, LEGACY_UNKNOWN_PRODUCT,
};
use crate::domain::production::{LegacyBatchView, ProductionBatch};

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

/// Projects a canonical batch onto the legacy view. Both legacy endpoints use this.
///
/// `status` and `operator_name` are only real when the backend sends a `status` field or
/// joins an `operator`; otherwise the fixed fallbacks apply.
pub fn project_legacy_batch(batch: &ProductionBatch) -> LegacyBatchView {
    let product_name = non_blank(
        batch
            .order_ref()
            .and_then(|order| order.description.as_deref()),
    )
    .or_else(|| non_blank(batch.name.as_deref()))
    .unwrap_or(LEGACY_UNKNOWN_PRODUCT)
    .to_string();

    let status = non_blank(batch.status.as_deref())
        .unwrap_or(LEGACY_DEFAULT_STATUS)
        .to_string();

    let start_date = non_blank(batch.start_time.as_deref())
        .or(batch.creation_date.as_deref())
        .map(str::to_string);

    let operator_name = batch
        .operator
        .as_ref()
        .and_then(|op| op.display_name())
        .unwrap_or_else(|| LEGACY_DEFAULT_OPERATOR.to_string());

    LegacyBatchView {
        batch_id: batch.batch_id,
        product_name,
        status,
        start_date,
        end_date: batch.end_time.clone(),
        quantity: batch.target_quantity.unwrap_or(0.0),
        operator_name,
    }
}
