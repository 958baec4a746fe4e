//! Order composition.
//!
//! An [`OrderComposer`] holds the cart for one ordering session: at most one
//! [`CartLine`] per product, each with a positive quantity. The total is
//! always derived from the lines and never stored.
//!
//! The composer is plain data so that the storefront can keep it in the
//! visitor's session; it owns no handles and performs no I/O. Submitting
//! produces an [`OrderPayload`] for whatever sink receives orders.

use core::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::menu::MenuItem;
use crate::types::{Price, ProductId};

/// A product snapshot plus the quantity ordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub price: Price,
    pub quantity: u32,
}

impl CartLine {
    /// Price times quantity for this line.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }
}

/// A required customer field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerField {
    Name,
    Phone,
    Address,
}

impl fmt::Display for CustomerField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Address => "address",
        };
        f.write_str(name)
    }
}

/// Errors that can occur when building a [`CustomerInfo`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CustomerInfoError {
    /// A required field is empty or whitespace.
    #[error("{0} is required")]
    MissingField(CustomerField),
}

/// Delivery details for an order.
///
/// All three fields are required free text. Construction trims surrounding
/// whitespace and rejects blank values, so a `CustomerInfo` in hand is always
/// complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerInfo {
    name: String,
    phone: String,
    address: String,
}

impl CustomerInfo {
    /// Validate and build customer info.
    ///
    /// # Errors
    ///
    /// Returns [`CustomerInfoError::MissingField`] naming the first blank field,
    /// checked in the order name, phone, address.
    pub fn new(name: &str, phone: &str, address: &str) -> Result<Self, CustomerInfoError> {
        Ok(Self {
            name: required(name, CustomerField::Name)?,
            phone: required(phone, CustomerField::Phone)?,
            address: required(address, CustomerField::Address)?,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }
}

fn required(value: &str, field: CustomerField) -> Result<String, CustomerInfoError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CustomerInfoError::MissingField(field));
    }
    Ok(trimmed.to_owned())
}

/// The order handed to the submission sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    pub customer: CustomerInfo,
    pub cart_lines: Vec<CartLine>,
    pub total: Price,
    pub item_count: u32,
    pub submitted_at: DateTime<Utc>,
}

/// Cart state for a single ordering session.
///
/// Empty and non-empty carts are both steady states; submitting neither
/// clears nor locks the cart.
///
/// ## Examples
///
/// ```
/// use navegante_core::{MenuItem, OrderComposer, Price, ProductId};
/// use rust_decimal::Decimal;
///
/// let ceviche = MenuItem {
///     id: ProductId::new(1),
///     name: "Ceviche de Camarón".to_string(),
///     price: Price::new(Decimal::new(1299, 2)).unwrap(),
///     description: None,
/// };
///
/// let mut order = OrderComposer::new();
/// order.add_to_order(&ceviche);
/// order.add_to_order(&ceviche);
/// assert_eq!(order.total().display(), "$25.98");
///
/// order.update_quantity(ceviche.id, 0);
/// assert!(order.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderComposer {
    lines: Vec<CartLine>,
}

impl OrderComposer {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add one unit of `item`.
    ///
    /// Increments the existing line for the product, or appends a new line
    /// with quantity 1.
    pub fn add_to_order(&mut self, item: &MenuItem) {
        if let Some(line) = self.line_mut(item.id) {
            line.quantity = line.quantity.saturating_add(1);
            return;
        }

        self.lines.push(CartLine {
            product_id: item.id,
            name: item.name.clone(),
            price: item.price,
            quantity: 1,
        });
    }

    /// Remove the line for `product_id`. Does nothing if there is none.
    pub fn remove_from_order(&mut self, product_id: ProductId) {
        self.lines.retain(|line| line.product_id != product_id);
    }

    /// Set the quantity of the line for `product_id`.
    ///
    /// A quantity of zero removes the line. Does nothing if the product is
    /// not in the cart.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove_from_order(product_id);
            return;
        }

        if let Some(line) = self.line_mut(product_id) {
            line.quantity = quantity;
        }
    }

    /// Sum of price times quantity over all lines; zero for an empty cart.
    #[must_use]
    pub fn total(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0_u32, |count, line| count.saturating_add(line.quantity))
    }

    /// Lines in the order they were first added.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Compose the payload for submission.
    ///
    /// The cart is left as it is.
    #[must_use]
    pub fn submit(&self, customer: CustomerInfo) -> OrderPayload {
        OrderPayload {
            customer,
            cart_lines: self.lines.clone(),
            total: self.total(),
            item_count: self.item_count(),
            submitted_at: Utc::now(),
        }
    }

    fn line_mut(&mut self, product_id: ProductId) -> Option<&mut CartLine> {
        self.lines
            .iter_mut()
            .find(|line| line.product_id == product_id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn item(id: i32, name: &str, cents: i64) -> MenuItem {
        MenuItem {
            id: ProductId::new(id),
            name: name.to_string(),
            price: Price::new(Decimal::new(cents, 2)).unwrap(),
            description: None,
        }
    }

    fn price(cents: i64) -> Price {
        Price::new(Decimal::new(cents, 2)).unwrap()
    }

    fn customer() -> CustomerInfo {
        CustomerInfo::new("María González", "+34 600 000 000", "Calle del Puerto 4").unwrap()
    }

    #[test]
    fn test_add_same_product_twice_increments_quantity() {
        let mut order = OrderComposer::new();
        let product = item(1, "Ceviche de Camarón", 1000);

        order.add_to_order(&product);
        order.add_to_order(&product);

        assert_eq!(order.lines().len(), 1);
        assert_eq!(order.lines()[0].quantity, 2);
        assert_eq!(order.total(), price(2000));
    }

    #[test]
    fn test_add_distinct_products_appends_in_order() {
        let mut order = OrderComposer::new();
        order.add_to_order(&item(7, "Tarta de Limón", 699));
        order.add_to_order(&item(4, "Paella Marinera", 2499));
        order.add_to_order(&item(7, "Tarta de Limón", 699));

        let ids: Vec<i32> = order.lines().iter().map(|l| l.product_id.as_i32()).collect();
        assert_eq!(ids, [7, 4]);
        assert_eq!(order.item_count(), 3);
    }

    #[test]
    fn test_update_quantity_zero_removes_line() {
        let mut order = OrderComposer::new();
        order.add_to_order(&item(1, "Ceviche de Camarón", 1000));

        order.update_quantity(ProductId::new(1), 0);

        assert!(order.is_empty());
        assert_eq!(order.total(), Price::ZERO);
    }

    #[test]
    fn test_update_quantity_sets_existing_line() {
        let mut order = OrderComposer::new();
        order.add_to_order(&item(8, "Mousse de Chocolate", 799));

        order.update_quantity(ProductId::new(8), 3);

        assert_eq!(order.lines()[0].quantity, 3);
        assert_eq!(order.total(), price(2397));
    }

    #[test]
    fn test_update_quantity_unknown_product_is_noop() {
        let mut order = OrderComposer::new();
        order.add_to_order(&item(8, "Mousse de Chocolate", 799));
        let before = order.clone();

        order.update_quantity(ProductId::new(99), 5);

        assert_eq!(order, before);
    }

    #[test]
    fn test_remove_unknown_product_is_noop() {
        let mut order = OrderComposer::new();
        order.add_to_order(&item(4, "Paella Marinera", 2499));
        let before = order.clone();

        order.remove_from_order(ProductId::new(42));

        assert_eq!(order, before);
        assert_eq!(order.total(), price(2499));
    }

    #[test]
    fn test_remove_existing_product() {
        let mut order = OrderComposer::new();
        order.add_to_order(&item(4, "Paella Marinera", 2499));
        order.add_to_order(&item(9, "Helado Artesanal", 599));

        order.remove_from_order(ProductId::new(4));

        assert_eq!(order.lines().len(), 1);
        assert_eq!(order.lines()[0].product_id, ProductId::new(9));
    }

    #[test]
    fn test_total_paella_and_two_tartas() {
        let mut order = OrderComposer::new();
        order.add_to_order(&item(4, "Paella Marinera", 2499));
        order.add_to_order(&item(7, "Tarta de Limón", 699));
        order.update_quantity(ProductId::new(7), 2);

        assert_eq!(order.total(), price(3897));
        assert_eq!(order.total().display(), "$38.97");
    }

    #[test]
    fn test_empty_cart_total_is_zero() {
        assert_eq!(OrderComposer::new().total(), Price::ZERO);
        assert_eq!(OrderComposer::new().item_count(), 0);
    }

    #[test]
    fn test_submit_keeps_cart_and_carries_total() {
        let mut order = OrderComposer::new();
        order.add_to_order(&item(4, "Paella Marinera", 2499));
        order.add_to_order(&item(7, "Tarta de Limón", 699));
        order.add_to_order(&item(7, "Tarta de Limón", 699));

        let payload = order.submit(customer());

        assert_eq!(payload.total, price(3897));
        assert_eq!(payload.item_count, 3);
        assert_eq!(payload.cart_lines, order.lines());
        assert_eq!(payload.customer.name(), "María González");
        assert!(!order.is_empty());
    }

    #[test]
    fn test_payload_json_field_names() {
        let mut order = OrderComposer::new();
        order.add_to_order(&item(4, "Paella Marinera", 2499));

        let json = serde_json::to_value(order.submit(customer())).unwrap();

        assert_eq!(json["customer"]["address"], "Calle del Puerto 4");
        assert_eq!(json["cartLines"][0]["quantity"], 1);
        assert_eq!(json["total"], "24.99");
        assert_eq!(json["itemCount"], 1);
        assert!(json["submittedAt"].is_string());
    }

    #[test]
    fn test_composer_survives_serde_round_trip() {
        let mut order = OrderComposer::new();
        order.add_to_order(&item(4, "Paella Marinera", 2499));
        order.update_quantity(ProductId::new(4), 2);

        let stored = serde_json::to_value(&order).unwrap();
        let restored: OrderComposer = serde_json::from_value(stored).unwrap();

        assert_eq!(restored, order);
        assert_eq!(restored.total(), price(4998));
    }

    #[test]
    fn test_customer_info_requires_every_field() {
        assert_eq!(
            CustomerInfo::new("", "600", "Calle 1"),
            Err(CustomerInfoError::MissingField(CustomerField::Name))
        );
        assert_eq!(
            CustomerInfo::new("Ana", "   ", "Calle 1"),
            Err(CustomerInfoError::MissingField(CustomerField::Phone))
        );
        assert_eq!(
            CustomerInfo::new("Ana", "600", ""),
            Err(CustomerInfoError::MissingField(CustomerField::Address))
        );
    }

    #[test]
    fn test_customer_info_trims() {
        let info = CustomerInfo::new("  Juan Pérez ", "600", " Calle 1 ").unwrap();
        assert_eq!(info.name(), "Juan Pérez");
        assert_eq!(info.address(), "Calle 1");
    }

    #[test]
    fn test_customer_info_error_message() {
        let err = CustomerInfo::new("Ana", "", "Calle 1").unwrap_err();
        assert_eq!(err.to_string(), "phone is required");
    }
}
