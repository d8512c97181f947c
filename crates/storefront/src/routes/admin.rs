//! Admin form controller.
//!
//! Collects the add-product form, hands it to the catalog service and
//! answers with the form fragment: emptied with the new id on success, or
//! kept as submitted with a failure message so the admin can retry.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State, response::IntoResponse};
use serde::Deserialize;
use tracing::instrument;

use online_store_core::types::product::parse_decimal;
use online_store_core::{CartModel, ProductDraft, ProductId};

use crate::cart_cookie::CartCookies;
use crate::services::CatalogError;
use crate::state::AppState;

/// Message shown when a submission fails for any reason.
pub const SAVE_FAILED_MESSAGE: &str = "An error occurred while saving.";

/// Raw admin form fields, exactly as typed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdminProductForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub stock: String,
}

impl AdminProductForm {
    /// Build the creation payload.
    ///
    /// Price is parsed as a decimal (unparseable means missing). Stock
    /// defaults to 0 when blank or unparseable.
    #[must_use]
    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            name: Some(self.name.clone()),
            description: Some(self.description.clone()),
            price: parse_decimal(&self.price),
            image: Some(self.image.clone()),
            category: Some(self.category.clone()),
            stock: Some(self.stock.trim().parse::<i64>().unwrap_or(0)),
        }
    }
}

/// Outcome line displayed under the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminMessage {
    Saved(ProductId),
    Failed,
}

impl AdminMessage {
    /// CSS class for the message element.
    #[must_use]
    pub const fn class(&self) -> &'static str {
        match self {
            Self::Saved(_) => "success",
            Self::Failed => "error",
        }
    }
}

impl std::fmt::Display for AdminMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Saved(id) => write!(f, "Product saved successfully (ID: {id})"),
            Self::Failed => f.write_str(SAVE_FAILED_MESSAGE),
        }
    }
}

/// Admin page template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/show.html")]
pub struct AdminPageTemplate {
    pub form: AdminProductForm,
    pub message: Option<AdminMessage>,
    pub cart_count: u64,
}

/// Admin form fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/admin_form.html")]
pub struct AdminFormTemplate {
    pub form: AdminProductForm,
    pub message: Option<AdminMessage>,
}

/// Display the add-product form.
#[instrument(skip(cookies))]
pub async fn form_page(cookies: CartCookies) -> impl IntoResponse {
    AdminPageTemplate {
        form: AdminProductForm::default(),
        message: None,
        cart_count: CartModel::new(cookies).count(),
    }
}

/// Submit the add-product form (HTMX).
#[instrument(skip(state))]
pub async fn submit(
    State(state): State<AppState>,
    Form(form): Form<AdminProductForm>,
) -> impl IntoResponse {
    match state.catalog().create_product(form.to_draft()).await {
        Ok(id) => AdminFormTemplate {
            form: AdminProductForm::default(),
            message: Some(AdminMessage::Saved(id)),
        },
        Err(e) => {
            match &e {
                CatalogError::Validation(_) => {
                    tracing::warn!(error = %e, "Rejected product submission");
                }
                _ => tracing::error!(error = %e, "Failed to save product"),
            }
            AdminFormTemplate {
                form,
                message: Some(AdminMessage::Failed),
            }
        }
    }
}
