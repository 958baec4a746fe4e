//! Integration tests for the menu pages and `GET /api/sections`.
//!
//! These tests require:
//! - A running `PostgreSQL` database with the demo menu (`nv-cli seed menu --clear`)
//! - The storefront running (cargo run -p navegante-storefront)

use navegante_integration_tests::{fetch_menu, find_product, session_client, storefront_base_url};
use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
#[ignore = "Requires running storefront with the demo menu"]
async fn test_sections_are_grouped_in_order() {
    let client = session_client();

    let menu = fetch_menu(&client).await;

    let titles: Vec<&str> = menu.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, ["Entradas", "Platos Principales", "Postres"]);
    assert!(menu.iter().all(|s| s.products.len() == 3));

    let ids: Vec<i32> = menu.iter().map(|s| s.id.as_i32()).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
}

#[tokio::test]
#[ignore = "Requires running storefront with the demo menu"]
async fn test_sections_json_shape() {
    let client = session_client();

    let resp = client
        .get(format!("{}/api/sections", storefront_base_url()))
        .send()
        .await
        .expect("Failed to get sections");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to parse sections");
    let first = body
        .as_array()
        .and_then(|sections| sections.first())
        .expect("at least one section");

    assert!(first["id"].is_number());
    assert_eq!(first["title"], "Entradas");

    let ceviche = &first["products"][0];
    assert_eq!(ceviche["name"], "Ceviche de Camarón");
    assert_eq!(ceviche["price"], 12.99);
    assert!(ceviche["description"].is_string());
}

#[tokio::test]
#[ignore = "Requires running storefront with the demo menu"]
async fn test_product_without_description_omits_field() {
    let client = session_client();

    let menu = fetch_menu(&client).await;
    let helado = find_product(&menu, "Helado Artesanal");

    assert!(helado.description.is_none());
    assert_eq!(helado.price.display(), "$5.99");
}

#[tokio::test]
#[ignore = "Requires running storefront with the demo menu"]
async fn test_menu_page_lists_products() {
    let client = session_client();

    let resp = client
        .get(format!("{}/menu", storefront_base_url()))
        .send()
        .await
        .expect("Failed to get menu page");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read response");
    assert!(body.contains("Platos Principales"));
    assert!(body.contains("Paella Marinera"));
    assert!(body.contains("$24.99"));
}

#[tokio::test]
#[ignore = "Requires running storefront"]
async fn test_health_endpoints() {
    let client = session_client();
    let base_url = storefront_base_url();

    let resp = client
        .get(format!("{base_url}/health"))
        .send()
        .await
        .expect("Failed to get health");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .get(format!("{base_url}/health/ready"))
        .send()
        .await
        .expect("Failed to get readiness");
    assert_eq!(resp.status(), StatusCode::OK);
}
