//! Business logic services for storefront.
//!
//! # Services
//!
//! - `menu` - Loads sections and products and groups them for display
//! - `orders` - Hands submitted orders to the order sink

pub mod menu;
pub mod orders;

pub use menu::load_menu;
pub use orders::{LoggingOrderSink, OrderReceipt, OrderSink, OrderSinkError};
