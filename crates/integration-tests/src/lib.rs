//! Integration tests for El Navegante.
//!
//! These tests talk to a running storefront over HTTP.
//!
//! # Running Tests
//!
//! ```bash
//! # Prepare the database with the demo menu
//! cargo run -p navegante-cli -- migrate
//! cargo run -p navegante-cli -- seed menu --clear
//!
//! # Start the storefront
//! cargo run -p navegante-storefront
//!
//! # Run integration tests
//! cargo test -p navegante-integration-tests -- --ignored
//! ```
//!
//! `STOREFRONT_BASE_URL` selects the server (default `http://localhost:3000`).

use navegante_core::{MenuItem, MenuSection};
use reqwest::Client;

/// Base URL for the storefront (configurable via environment).
#[must_use]
pub fn storefront_base_url() -> String {
    std::env::var("STOREFRONT_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// Create a client that keeps the session cookie between requests.
///
/// # Panics
///
/// Panics if the HTTP client cannot be built.
#[must_use]
pub fn session_client() -> Client {
    Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}

/// Fetch the menu from `GET /api/sections`.
///
/// # Panics
///
/// Panics if the request fails or the body is not a menu.
pub async fn fetch_menu(client: &Client) -> Vec<MenuSection> {
    let resp = client
        .get(format!("{}/api/sections", storefront_base_url()))
        .send()
        .await
        .expect("Failed to get sections");

    assert!(resp.status().is_success(), "status {}", resp.status());
    resp.json().await.expect("Failed to parse sections")
}

/// Find a product on the menu by name.
///
/// # Panics
///
/// Panics if no product has that name.
#[must_use]
pub fn find_product<'a>(menu: &'a [MenuSection], name: &str) -> &'a MenuItem {
    menu.iter()
        .flat_map(|section| &section.products)
        .find(|product| product.name == name)
        .unwrap_or_else(|| panic!("{name} is not on the menu"))
}
