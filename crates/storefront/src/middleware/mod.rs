//! HTTP middleware stack for storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, transactions)
//! 2. `TraceLayer` (request span)
//! 3. Request ID (recorded on the request span)
//! 4. Security headers
//! 5. Session layer (tower-sessions with `PostgreSQL` store)
//! 6. CORS (only on `/api`, only when origins are configured)

pub mod cors;
pub mod request_id;
pub mod security_headers;
pub mod session;

pub use cors::api_cors_layer;
pub use request_id::{REQUEST_ID_HEADER, request_id_middleware, request_span};
pub use security_headers::security_headers_middleware;
pub use session::create_session_layer;
