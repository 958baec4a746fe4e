//! `GET /api/sections` - the menu as JSON.
//!
//! Responds with every section in storage order, each carrying the products
//! that reference it:
//!
//! ```json
//! [ { "id": 1, "title": "Entradas",
//!     "products": [ { "id": 1, "name": "Ceviche de Camarón", "price": 12.99 } ] } ]
//! ```
//!
//! Any store failure becomes a plain-text 500; the cause is only logged.

use axum::{Json, extract::State};
use tracing::instrument;

use navegante_core::MenuSection;

use crate::error::Result;
use crate::services::load_menu;
use crate::state::AppState;

/// List menu sections with their products.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<MenuSection>>> {
    let menu = load_menu(state.pool()).await?;
    Ok(Json(menu))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;
    use tower_sessions::MemoryStore;

    use crate::routes::test_support::{app, unavailable_store_state};
    use crate::services::LoggingOrderSink;

    #[tokio::test]
    async fn test_unavailable_store_returns_500() {
        let app = app(
            unavailable_store_state(Arc::new(LoggingOrderSink)),
            MemoryStore::default(),
        );

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/sections")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"Internal server error");
    }
}
