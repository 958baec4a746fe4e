//! CORS for the JSON API.
//!
//! The menu API may be read by pages hosted on another origin (a static
//! marketing site, a local dev server). Only configured origins are allowed
//! and only for `GET`.

use axum::http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Build the CORS layer for `/api`, or `None` when no origins are configured.
#[must_use]
pub fn api_cors_layer(origins: &[String]) -> Option<CorsLayer> {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(%origin, "Ignoring invalid CORS origin: {e}");
                None
            }
        })
        .collect();

    if allowed.is_empty() {
        return None;
    }

    Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(allowed))
            .allow_methods([Method::GET]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_origins_disables_cors() {
        assert!(api_cors_layer(&[]).is_none());
    }

    #[test]
    fn test_configured_origin_enables_cors() {
        let origins = ["http://localhost:4321".to_string()];
        assert!(api_cors_layer(&origins).is_some());
    }
}
