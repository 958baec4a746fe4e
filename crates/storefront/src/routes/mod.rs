//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                  - Landing page
//! GET  /menu              - Menu page
//! GET  /health            - Liveness check (main.rs)
//! GET  /health/ready      - Readiness check (main.rs)
//!
//! # Order (form posts, redirect back to /pedido)
//! GET  /pedido            - Order page: menu, cart summary, delivery form
//! POST /pedido/add        - Add one unit of a product
//! POST /pedido/update     - Set a line's quantity (0 removes it)
//! POST /pedido/remove     - Remove a line
//! POST /pedido/submit     - Submit the order with delivery details
//! GET  /pedido/summary    - Cart summary as JSON
//!
//! # API
//! GET  /api/sections      - Menu sections with their products (JSON)
//! ```

pub mod api;
pub mod home;
pub mod menu;
pub mod order;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

use crate::state::AppState;

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(order::show))
        .route("/add", post(order::add))
        .route("/update", post(order::update))
        .route("/remove", post(order::remove))
        .route("/submit", post(order::submit))
        .route("/summary", get(order::summary))
}

/// Create the JSON API router.
pub fn api_routes() -> Router<AppState> {
    Router::new().route("/sections", get(api::sections::index))
}

/// Create all routes for the storefront.
///
/// `cors` is applied to `/api` only.
pub fn routes(cors: Option<CorsLayer>) -> Router<AppState> {
    let api = match cors {
        Some(layer) => api_routes().layer(layer),
        None => api_routes(),
    };

    Router::new()
        .route("/", get(home::home))
        .route("/menu", get(menu::show))
        .nest("/pedido", order_routes())
        .nest("/api", api)
}
