//! Integration tests for the order composer under `/pedido`.
//!
//! These tests require:
//! - A running `PostgreSQL` database with the demo menu (`nv-cli seed menu --clear`)
//! - The storefront running (cargo run -p navegante-storefront)
//!
//! Each test uses its own cookie store, so each gets its own open order.

use navegante_integration_tests::{fetch_menu, find_product, session_client, storefront_base_url};
use reqwest::{Client, StatusCode};
use serde_json::Value;

async fn post_form(client: &Client, path: &str, form: &[(&str, &str)]) -> reqwest::Response {
    client
        .post(format!("{}{path}", storefront_base_url()))
        .form(form)
        .send()
        .await
        .expect("Failed to post form")
}

async fn summary(client: &Client) -> Value {
    client
        .get(format!("{}/pedido/summary", storefront_base_url()))
        .send()
        .await
        .expect("Failed to get summary")
        .json()
        .await
        .expect("Failed to parse summary")
}

/// Add Paella Marinera once and Tarta de Limón twice.
async fn order_paella_and_tartas(client: &Client) -> (String, String) {
    let menu = fetch_menu(client).await;
    let paella = find_product(&menu, "Paella Marinera").id.to_string();
    let tarta = find_product(&menu, "Tarta de Limón").id.to_string();

    for id in [&paella, &tarta, &tarta] {
        let resp = post_form(client, "/pedido/add", &[("product_id", id.as_str())]).await;
        // The redirect to /pedido is followed
        assert_eq!(resp.status(), StatusCode::OK);
    }

    (paella, tarta)
}

#[tokio::test]
#[ignore = "Requires running storefront with the demo menu"]
async fn test_add_to_order_totals() {
    let client = session_client();

    order_paella_and_tartas(&client).await;
    let summary = summary(&client).await;

    assert_eq!(summary["lines"].as_array().map(Vec::len), Some(2));
    assert_eq!(summary["lines"][1]["quantity"], 2);
    assert_eq!(summary["item_count"], 3);
    assert_eq!(summary["total"], "38.97");
}

#[tokio::test]
#[ignore = "Requires running storefront with the demo menu"]
async fn test_update_and_remove() {
    let client = session_client();
    let (paella, tarta) = order_paella_and_tartas(&client).await;

    post_form(
        &client,
        "/pedido/update",
        &[("product_id", tarta.as_str()), ("quantity", "0")],
    )
    .await;
    let after_update = summary(&client).await;
    assert_eq!(after_update["item_count"], 1);
    assert_eq!(after_update["total"], "24.99");

    post_form(&client, "/pedido/remove", &[("product_id", paella.as_str())]).await;
    let after_remove = summary(&client).await;
    assert_eq!(after_remove["item_count"], 0);
}

#[tokio::test]
#[ignore = "Requires running storefront with the demo menu"]
async fn test_add_unknown_product_is_not_found() {
    let client = session_client();

    let resp = post_form(&client, "/pedido/add", &[("product_id", "999999")]).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "Requires running storefront with the demo menu"]
async fn test_submit_confirms_and_keeps_order() {
    let client = session_client();
    order_paella_and_tartas(&client).await;

    let resp = post_form(
        &client,
        "/pedido/submit",
        &[
            ("name", "María Pérez"),
            ("phone", "600 000 000"),
            ("address", "Paseo Marítimo 7"),
        ],
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read response");
    assert!(body.contains("Pedido enviado con éxito!"));
    assert!(body.contains("$38.97"));

    assert_eq!(summary(&client).await["item_count"], 3);
}

#[tokio::test]
#[ignore = "Requires running storefront with the demo menu"]
async fn test_submit_rejects_missing_details_and_empty_order() {
    let client = session_client();

    let resp = post_form(
        &client,
        "/pedido/submit",
        &[("name", "Ana"), ("phone", "600"), ("address", "Calle 1")],
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    order_paella_and_tartas(&client).await;
    let resp = post_form(
        &client,
        "/pedido/submit",
        &[("name", "Ana"), ("phone", " "), ("address", "Calle 1")],
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = resp.text().await.expect("Failed to read response");
    assert_eq!(body, "Bad request: phone is required");
}
