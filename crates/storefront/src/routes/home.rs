//! Entry page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;
use tracing::instrument;

use online_store_core::CartModel;

use crate::cart_cookie::CartCookies;

/// Entry page template.
///
/// The product grid is fetched by the page itself from `/products/grid`.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub cart_count: u64,
}

/// Display the entry page.
#[instrument(skip(cookies))]
pub async fn home(cookies: CartCookies) -> impl IntoResponse {
    HomeTemplate {
        cart_count: CartModel::new(cookies).count(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_footer_names_no_currency() {
        let html = HomeTemplate { cart_count: 0 }.render().unwrap();
        let footer = html.split("site-footer").nth(1).unwrap();
        assert!(!footer.contains("SAR"));
        assert!(footer.contains("Demo store."));
    }
}
