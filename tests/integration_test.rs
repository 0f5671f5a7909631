use anyhow::Result;
use serde_json::{json, Map, Value};
use std::sync::Arc;

use trace_client::domain::orders::CreateOrderPayload;
use trace_client::infra::ScriptedTransport;
use trace_client::normalize::unwrap_envelope;
use trace_client::{ApiError, HttpMethod, TraceApi};

fn client() -> (TraceApi, ScriptedTransport) {
    let transport = ScriptedTransport::new();
    (TraceApi::new(Arc::new(transport.clone())), transport)
}

#[tokio::test]
async fn list_endpoints_return_inner_sequence_of_envelopes() -> Result<()> {
    let (api, transport) = client();
    let customers = json!([
        {"customer_id": 1, "business_name": "Plasticos SA"},
        {"customer_id": 2, "business_name": "Empaques del Sur"}
    ]);
    transport
        .reply(json!({"data": customers.clone(), "pagination": {"page": 1, "limit": 10, "total": 2}}))
        .reply(customers.clone());

    let wrapped = api.customers.list().await?;
    let bare = api.customers.list().await?;
    assert_eq!(wrapped, bare);
    assert_eq!(wrapped.len(), 2);
    assert_eq!(wrapped[1].customer_id, 2);

    assert_eq!(unwrap_envelope(unwrap_envelope(customers.clone())), customers);
    Ok(())
}

#[tokio::test]
async fn list_endpoints_absorb_404_and_500() -> Result<()> {
    let (api, transport) = client();
    transport
        .fail_with_status(404, None)
        .fail_with_status(500, Some(json!({"message": "relation does not exist"})))
        .fail_with_status(404, None)
        .fail_with_status(500, None)
        .fail_with_status(404, None)
        .fail_with_status(500, None);

    assert!(api.orders.list().await?.is_empty());
    assert!(api.production.list_batches().await?.is_empty());
    assert!(api.raw_materials.list().await?.is_empty());
    assert!(api.suppliers.list().await?.is_empty());
    assert!(api.processes.list(false).await?.is_empty());
    assert!(api.standard_variables.list().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn list_endpoints_rethrow_other_failures() {
    let (api, transport) = client();
    transport
        .fail_with_status(401, None)
        .fail_with_status(403, None)
        .fail_with_status(422, Some(json!({"errors": ["page must be positive"]})))
        .fail_without_status("connection reset by peer");

    assert_eq!(api.customers.list().await.unwrap_err().status(), Some(401));
    assert_eq!(api.orders.list().await.unwrap_err().status(), Some(403));

    let err = api.machines.list().await.unwrap_err();
    assert_eq!(err.status(), Some(422));
    assert_eq!(err.body(), Some(&json!({"errors": ["page must be positive"]})));

    let err = api.products.list().await.unwrap_err();
    match err {
        ApiError::Network { path, message, .. } => {
            assert_eq!(path, "/products");
            assert_eq!(message, "connection reset by peer");
        }
        other => panic!("expected network failure, got {other:?}"),
    }
}

#[tokio::test]
async fn item_and_mutation_failures_always_propagate() {
    let (api, transport) = client();
    for status in [404, 500, 404, 500, 404, 500] {
        transport.fail_with_status(status, None);
    }

    assert_eq!(api.customers.get(1).await.unwrap_err().status(), Some(404));
    assert_eq!(
        api.customers.create(&json!({"business_name": "x"})).await.unwrap_err().status(),
        Some(500)
    );
    assert_eq!(
        api.suppliers.update(3, &json!({"phone": "1"})).await.unwrap_err().status(),
        Some(404)
    );
    assert_eq!(api.production.delete_batch(3).await.unwrap_err().status(), Some(500));
    assert_eq!(api.production.legacy_batch(3).await.unwrap_err().status(), Some(404));
    assert_eq!(api.processes.get(3).await.unwrap_err().status(), Some(500));
}

#[tokio::test]
async fn legacy_projection_product_name() -> Result<()> {
    let (api, transport) = client();
    transport
        .reply(json!([
            {"batch_id": 1, "name": "Lote A", "customer_order": {"order_id": 1, "description": "X"}},
            {"batch_id": 2, "name": "Y"}
        ]))
        .reply(json!({"batch_id": 2, "name": "Y", "start_time": "2025-06-01T07:00:00Z"}));

    let views = api.production.legacy_batches().await?;
    assert_eq!(views[0].product_name, "X");
    assert_eq!(views[1].product_name, "Y");
    assert!(views.iter().all(|v| v.status == "in_progress"));
    assert!(views.iter().all(|v| v.operator_name == "Production Team"));

    let view = api.production.legacy_batch(2).await?;
    assert_eq!(view.product_name, "Y");
    assert_eq!(view.start_date.as_deref(), Some("2025-06-01T07:00:00Z"));
    Ok(())
}

#[tokio::test]
async fn null_text_columns_do_not_fail_the_list() -> Result<()> {
    let (api, transport) = client();
    transport
        .reply(json!([
            {"customer_id": 1, "business_name": "Plasticos SA"},
            {"customer_id": 2, "business_name": null}
        ]))
        .reply(json!({"data": [
            {"batch_id": 1, "name": "Lote A", "operator": {"operator_id": 3, "first_name": null, "last_name": null}},
            {
                "batch_id": 2,
                "order": {"order_id": 9, "description": "Viejo"},
                "customer_order": {"order_id": 9, "description": "Bolsas"}
            }
        ]}));

    let customers = api.customers.list().await?;
    assert_eq!(customers.len(), 2);
    assert_eq!(customers[1].business_name, "");

    let views = api.production.legacy_batches().await?;
    assert_eq!(views.len(), 2);
    assert_eq!(views[0].operator_name, "Production Team");
    assert_eq!(views[1].product_name, "Bolsas");
    Ok(())
}

#[tokio::test]
async fn localized_registration_payload_is_exact() -> Result<()> {
    let (api, transport) = client();
    transport.reply(json!({"operator_id": 10}));

    let fields: Map<String, Value> = serde_json::from_value(json!({
        "nombre": "Ana",
        "apellido": "Diaz",
        "usuario": "adiaz",
        "email": "a@x.com",
        "password": "p"
    }))?;
    api.auth.register_localized(fields).await?;

    let sent = transport.last_request().expect("request recorded");
    assert_eq!(sent.method, HttpMethod::Post);
    assert_eq!(sent.path, "/auth/register");
    assert_eq!(
        sent.body,
        Some(json!({
            "first_name": "Ana",
            "last_name": "Diaz",
            "username": "adiaz",
            "email": "a@x.com",
            "password": "p"
        }))
    );
    Ok(())
}

#[tokio::test]
async fn order_creation_preserves_product_indices() -> Result<()> {
    let (api, transport) = client();
    transport
        .reply(json!({"order_id": 50, "order_number": "ORD-50"}))
        .reply(json!({"order_id": 51, "order_number": "ORD-51"}));

    let with_destinations = json!({
        "customer_id": 7,
        "delivery_date": "2025-07-15",
        "products": [
            {"product_id": 1, "quantity": 100},
            {"product_id": 2, "quantity": 40.5}
        ],
        "destinations": [
            {"address": "Planta Norte", "products": [{"order_product_index": 1, "quantity": 40}]}
        ]
    });
    let without_destinations = json!({
        "customer_id": 1,
        "products": [{"product_id": 5, "quantity": 10}]
    });

    for input in [with_destinations, without_destinations] {
        let payload: CreateOrderPayload = serde_json::from_value(input.clone())?;
        api.orders.create(&payload).await?;
        let body = transport.last_request().and_then(|r| r.body).expect("body sent");
        assert_eq!(body, input);
    }
    Ok(())
}
