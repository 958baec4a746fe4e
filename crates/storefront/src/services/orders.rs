//! Order submission.
//!
//! Submitted orders go to an [`OrderSink`]. The only sink today is
//! [`LoggingOrderSink`], which records the order in the logs and as a Sentry
//! breadcrumb and confirms it to the customer. Nothing is persisted or sent
//! to a kitchen or delivery service.

use navegante_core::{OrderPayload, Price};
use thiserror::Error;
use tracing::info;

use crate::error::add_breadcrumb;

/// Confirmation shown to the customer after a successful submission.
pub const CONFIRMATION_MESSAGE: &str = "Pedido enviado con éxito!";

/// Errors returned by an order sink.
#[derive(Debug, Error)]
pub enum OrderSinkError {
    /// The payload could not be encoded for the sink.
    #[error("failed to encode order: {0}")]
    Encode(#[from] serde_json::Error),
}

/// What the customer is told once an order is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderReceipt {
    pub message: String,
    pub total: Price,
    pub item_count: u32,
}

/// Destination for submitted orders.
pub trait OrderSink: Send + Sync {
    /// Accept an order.
    ///
    /// # Errors
    ///
    /// Returns `OrderSinkError` if the order cannot be accepted.
    fn submit(&self, payload: &OrderPayload) -> Result<OrderReceipt, OrderSinkError>;
}

/// Order sink that only records the order.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingOrderSink;

impl OrderSink for LoggingOrderSink {
    fn submit(&self, payload: &OrderPayload) -> Result<OrderReceipt, OrderSinkError> {
        let order = serde_json::to_string(payload)?;
        let item_count = payload.item_count;

        info!(
            lines = payload.cart_lines.len(),
            items = item_count,
            total = %payload.total,
            %order,
            "Order submitted"
        );

        let total = payload.total.to_string();
        let items = item_count.to_string();
        add_breadcrumb(
            "order",
            "Order submitted",
            Some(&[("total", total.as_str()), ("items", items.as_str())]),
        );

        Ok(OrderReceipt {
            message: CONFIRMATION_MESSAGE.to_string(),
            total: payload.total,
            item_count,
        })
    }
}
