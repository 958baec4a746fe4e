//! Session-related types.
//!
//! The visitor's open order lives in the session as an
//! [`OrderComposer`](navegante_core::OrderComposer). It is created on the
//! first cart action and expires with the session.

/// Session keys.
pub mod keys {
    /// Key for the visitor's open order.
    pub const ORDER: &str = "order";
}
