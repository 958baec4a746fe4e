//! Types stored outside the request cycle.

pub mod session;

pub use session::keys as session_keys;
