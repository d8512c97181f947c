//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! The cart itself lives in the shopper's cookie ([`CartCookies`]); each
//! mutation loads it, applies one change, and answers with the updated cookie
//! plus freshly rendered fragments for every view that shows cart state.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{AppendHeaders, IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;

use online_store_core::{
    Cart, CartModel, CartProduct, CartStorageError, CartUpdate, CurrencyCode, ProductId,
    format_amount,
};

use crate::cart_cookie::CartCookies;
use crate::state::AppState;

/// Event raised on the client after every cart mutation.
pub const CART_UPDATED_EVENT: &str = "cartUpdated";

/// Confirmation shown after adding a product.
pub const ADDED_NOTICE: &str = "Product added to cart.";

/// Shown when the grown cart no longer fits in the shopper's cookies.
pub const CART_FULL_NOTICE: &str = "Your cart is full. Remove an item before adding another.";

/// Notice returned by the demo checkout.
pub const CHECKOUT_NOTICE: &str = "This is a demo checkout only (no real payment gateway).";

/// Cart line display data for templates.
#[derive(Clone, Debug)]
pub struct CartItemView {
    pub id: i64,
    pub name: String,
    pub quantity: u32,
    /// Formatted price times quantity.
    pub line_total: String,
}

/// Cart display data for templates.
#[derive(Clone, Debug)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    /// Formatted sum of all line totals.
    pub total: String,
    pub count: u64,
}

impl CartView {
    /// Build the view for a cart.
    #[must_use]
    pub fn from_cart(cart: &Cart, currency: CurrencyCode) -> Self {
        Self {
            items: cart
                .items()
                .iter()
                .map(|item| CartItemView {
                    id: item.id.as_i64(),
                    name: item.name.clone(),
                    quantity: item.quantity,
                    line_total: format_amount(item.line_total(), currency),
                })
                .collect(),
            total: format_amount(cart.total(), currency),
            count: cart.count(),
        }
    }
}

/// Remove-from-cart and change-quantity form data.
#[derive(Debug, Deserialize)]
pub struct CartLineForm {
    pub id: ProductId,
    #[serde(default)]
    pub delta: i64,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
    pub cart_count: u64,
    pub oob: bool,
}

/// Cart items and summary fragment template (for HTMX).
///
/// With `oob` set, also carries an out-of-band badge update.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
    pub oob: bool,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u64,
    pub oob: bool,
}

/// Notice fragment template, optionally with an out-of-band badge update.
#[derive(Template, WebTemplate)]
#[template(path = "partials/notice.html")]
pub struct NoticeTemplate {
    pub message: &'static str,
    pub badge: Option<u64>,
}

/// Display cart page.
#[instrument(skip(state, cookies))]
pub async fn show(State(state): State<AppState>, cookies: CartCookies) -> impl IntoResponse {
    let cart = CartModel::new(cookies).load();

    CartShowTemplate {
        cart_count: cart.count(),
        cart: CartView::from_cart(&cart, state.currency()),
        oob: false,
    }
}

/// Render cart items and summary (HTMX).
#[instrument(skip(state, cookies))]
pub async fn items(State(state): State<AppState>, cookies: CartCookies) -> impl IntoResponse {
    let cart = CartModel::new(cookies).load();

    CartItemsTemplate {
        cart: CartView::from_cart(&cart, state.currency()),
        oob: false,
    }
}

/// Get cart count badge (HTMX).
#[instrument(skip(cookies))]
pub async fn count(cookies: CartCookies) -> impl IntoResponse {
    CartCountTemplate {
        count: CartModel::new(cookies).count(),
        oob: false,
    }
}

/// Add one unit of a product to the cart (HTMX).
///
/// Returns the confirmation notice with an out-of-band badge update.
#[instrument(skip(cookies))]
pub async fn add(cookies: CartCookies, Form(product): Form<CartProduct>) -> Response {
    let mut model = CartModel::new(cookies);
    match model.add(product) {
        Ok(update) => {
            tracing::debug!(count = update.count, "Added product to cart");
            (
                model.into_storage(),
                AppendHeaders([("HX-Trigger", CART_UPDATED_EVENT)]),
                NoticeTemplate {
                    message: ADDED_NOTICE,
                    badge: Some(update.count),
                },
            )
                .into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, "Refused to grow cart");
            NoticeTemplate {
                message: CART_FULL_NOTICE,
                badge: Some(model.count()),
            }
            .into_response()
        }
    }
}

/// Answer a line mutation with the re-rendered cart.
///
/// A refused write sends no cookie and re-renders the unchanged cart.
fn line_response(
    model: CartModel<CartCookies>,
    result: Result<CartUpdate, CartStorageError>,
    currency: CurrencyCode,
) -> Response {
    match result {
        Ok(update) => (
            model.into_storage(),
            AppendHeaders([("HX-Trigger", CART_UPDATED_EVENT)]),
            CartItemsTemplate {
                cart: CartView::from_cart(&update.cart, currency),
                oob: true,
            },
        )
            .into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "Refused cart update");
            CartItemsTemplate {
                cart: CartView::from_cart(&model.load(), currency),
                oob: true,
            }
            .into_response()
        }
    }
}

/// Change a line's quantity by `delta` (HTMX).
///
/// A quantity that reaches zero removes the line.
#[instrument(skip(state, cookies))]
pub async fn update(
    State(state): State<AppState>,
    cookies: CartCookies,
    Form(form): Form<CartLineForm>,
) -> Response {
    let mut model = CartModel::new(cookies);
    let result = model.change_quantity(form.id, form.delta);
    line_response(model, result, state.currency())
}

/// Remove a line from the cart (HTMX).
#[instrument(skip(state, cookies))]
pub async fn remove(
    State(state): State<AppState>,
    cookies: CartCookies,
    Form(form): Form<CartLineForm>,
) -> Response {
    let mut model = CartModel::new(cookies);
    let result = model.remove(form.id);
    line_response(model, result, state.currency())
}

/// Demo checkout. Nothing is charged or stored.
#[instrument]
pub async fn checkout() -> impl IntoResponse {
    NoticeTemplate {
        message: CHECKOUT_NOTICE,
        badge: None,
    }
}
