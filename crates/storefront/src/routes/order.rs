//! Order route handlers.
//!
//! The open order is an [`OrderComposer`] kept in the visitor's session.
//! Cart actions are plain form posts that update it and redirect back to
//! `/pedido`. Prices always come from the store, never from the form.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form, Json,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use navegante_core::{CartLine, CustomerInfo, MenuItem, OrderComposer, Price, ProductId};

use crate::db::MenuRepository;
use crate::error::{AppError, Result, add_breadcrumb};
use crate::models::session_keys;
use crate::routes::menu::{MenuSectionView, section_views};
use crate::services::load_menu;
use crate::state::AppState;

/// Where cart actions send the browser afterwards.
const ORDER_PAGE: &str = "/pedido";

/// Cart line display data for templates.
#[derive(Clone)]
pub struct CartLineView {
    pub product_id: i32,
    pub name: String,
    pub price: String,
    pub quantity: u32,
    pub line_total: String,
    /// Quantity submitted by the "minus" button (0 removes the line).
    pub decrement: u32,
    /// Quantity submitted by the "plus" button.
    pub increment: u32,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct OrderView {
    pub lines: Vec<CartLineView>,
    pub total: String,
    pub item_count: u32,
}

impl From<&CartLine> for CartLineView {
    fn from(line: &CartLine) -> Self {
        Self {
            product_id: line.product_id.as_i32(),
            name: line.name.clone(),
            price: line.price.display(),
            quantity: line.quantity,
            line_total: line.line_total().display(),
            decrement: line.quantity.saturating_sub(1),
            increment: line.quantity.saturating_add(1),
        }
    }
}

impl From<&OrderComposer> for OrderView {
    fn from(order: &OrderComposer) -> Self {
        Self {
            lines: order.lines().iter().map(CartLineView::from).collect(),
            total: order.total().display(),
            item_count: order.item_count(),
        }
    }
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Get the open order from the session, or an empty one.
async fn load_order(session: &Session) -> Result<OrderComposer> {
    Ok(session
        .get::<OrderComposer>(session_keys::ORDER)
        .await?
        .unwrap_or_default())
}

/// Store the open order in the session.
async fn save_order(session: &Session, order: &OrderComposer) -> Result<()> {
    session.insert(session_keys::ORDER, order).await?;
    Ok(())
}

// =============================================================================
// Forms
// =============================================================================

/// Add / remove form data.
#[derive(Debug, Deserialize)]
pub struct ProductForm {
    pub product_id: i32,
}

/// Update quantity form data.
#[derive(Debug, Deserialize)]
pub struct UpdateQuantityForm {
    pub product_id: i32,
    pub quantity: u32,
}

/// Delivery details form data.
#[derive(Debug, Deserialize)]
pub struct CustomerForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
}

/// Cart summary returned by `GET /pedido/summary`.
#[derive(Debug, Serialize)]
pub struct OrderSummary {
    pub lines: Vec<CartLine>,
    pub total: Price,
    pub item_count: u32,
}

// =============================================================================
// Templates
// =============================================================================

/// Order page template.
#[derive(Template, WebTemplate)]
#[template(path = "order/show.html")]
pub struct OrderShowTemplate {
    pub sections: Vec<MenuSectionView>,
    pub order: OrderView,
}

/// Order confirmation template.
#[derive(Template, WebTemplate)]
#[template(path = "order/confirmation.html")]
pub struct OrderConfirmationTemplate {
    pub message: String,
    pub total: String,
    pub item_count: u32,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the order page.
#[instrument(skip(state, session))]
pub async fn show(State(state): State<AppState>, session: Session) -> Result<OrderShowTemplate> {
    let menu = load_menu(state.pool()).await?;
    let order = load_order(&session).await?;

    Ok(OrderShowTemplate {
        sections: section_views(&menu),
        order: OrderView::from(&order),
    })
}

/// Add one unit of a product to the order.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<ProductForm>,
) -> Result<Redirect> {
    let product_id = ProductId::new(form.product_id);
    let product = MenuRepository::new(state.pool())
        .get_product(product_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {product_id}")))?;

    let mut order = load_order(&session).await?;
    order.add_to_order(&MenuItem::from(&product));
    save_order(&session, &order).await?;

    let id = product_id.to_string();
    add_breadcrumb("order", "Added product", Some(&[("product_id", id.as_str())]));

    Ok(Redirect::to(ORDER_PAGE))
}

/// Set a line's quantity. Zero removes the line.
#[instrument(skip(session))]
pub async fn update(session: Session, Form(form): Form<UpdateQuantityForm>) -> Result<Redirect> {
    let mut order = load_order(&session).await?;
    order.update_quantity(ProductId::new(form.product_id), form.quantity);
    save_order(&session, &order).await?;

    Ok(Redirect::to(ORDER_PAGE))
}

/// Remove a line from the order.
#[instrument(skip(session))]
pub async fn remove(session: Session, Form(form): Form<ProductForm>) -> Result<Redirect> {
    let mut order = load_order(&session).await?;
    order.remove_from_order(ProductId::new(form.product_id));
    save_order(&session, &order).await?;

    Ok(Redirect::to(ORDER_PAGE))
}

/// Return the open order as JSON.
#[instrument(skip(session))]
pub async fn summary(session: Session) -> Result<Json<OrderSummary>> {
    let order = load_order(&session).await?;

    Ok(Json(OrderSummary {
        total: order.total(),
        item_count: order.item_count(),
        lines: order.lines().to_vec(),
    }))
}

/// Submit the order with delivery details.
///
/// The order stays in the session afterwards.
#[instrument(skip(state, session, form))]
pub async fn submit(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<CustomerForm>,
) -> Result<Response> {
    let order = load_order(&session).await?;
    if order.is_empty() {
        return Err(AppError::BadRequest("the order has no items".to_string()));
    }

    let customer = CustomerInfo::new(&form.name, &form.phone, &form.address)
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let receipt = state.order_sink().submit(&order.submit(customer))?;

    Ok(OrderConfirmationTemplate {
        message: receipt.message,
        total: receipt.total.display(),
        item_count: receipt.item_count,
    }
    .into_response())
}
