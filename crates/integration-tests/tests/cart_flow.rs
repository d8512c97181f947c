//! Integration tests for the cart fragments and the cart cookie.

use online_store_core::ProductId;
use online_store_integration_tests::{TestContext, cart_from_response, set_cookies};
use reqwest::StatusCode;

const COFFEE: [(&str, &str); 3] = [("id", "1"), ("name", "Coffee"), ("price", "12.5")];
const NOTEBOOK: [(&str, &str); 3] = [("id", "5"), ("name", "Notebook"), ("price", "7.5")];

async fn post_form(ctx: &TestContext, path: &str, form: &[(&str, &str)]) -> reqwest::Response {
    ctx.client
        .post(ctx.url(path))
        .form(form)
        .send()
        .await
        .expect("Failed to post form")
}

async fn get_text(ctx: &TestContext, path: &str) -> String {
    ctx.client
        .get(ctx.url(path))
        .send()
        .await
        .expect("Failed to get page")
        .text()
        .await
        .expect("Failed to read body")
}

#[tokio::test]
async fn test_entry_page_shows_badge_and_grid_region() {
    let ctx = TestContext::new().await;

    let body = get_text(&ctx, "/").await;

    assert!(body.contains(r#"<span id="cart-count">0</span>"#));
    assert!(body.contains(r#"id="product-list""#));
    assert!(body.contains(r#"hx-get="/products/grid""#));
}

#[tokio::test]
async fn test_product_grid_lists_catalog() {
    let ctx = TestContext::new().await;

    let body = get_text(&ctx, "/products/grid").await;

    assert_eq!(body.matches(r#"class="product-card""#).count(), 5);
    assert!(body.contains("12.50 SAR"));
    assert!(body.contains("images/coffee.svg"));
}

#[tokio::test]
async fn test_add_same_product_twice_merges_line() {
    let ctx = TestContext::new().await;

    let resp = post_form(&ctx, "/cart/add", &COFFEE).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("hx-trigger").and_then(|v| v.to_str().ok()),
        Some("cartUpdated")
    );
    let cart = cart_from_response(&resp).expect("Missing cart cookie");
    assert_eq!(cart.count(), 1);
    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("Product added to cart."));
    assert!(body.contains(r#"<span id="cart-count" hx-swap-oob="true">1</span>"#));

    let resp = post_form(&ctx, "/cart/add", &COFFEE).await;
    let cart = cart_from_response(&resp).expect("Missing cart cookie");
    assert_eq!(cart.items().len(), 1);
    assert_eq!(cart.get(ProductId::new(1)).map(|line| line.quantity), Some(2));
    assert_eq!(cart.count(), 2);

    let badge = get_text(&ctx, "/cart/count").await;
    assert_eq!(badge.trim(), r#"<span id="cart-count">2</span>"#);
}

#[tokio::test]
async fn test_cart_page_totals_lines() {
    let ctx = TestContext::new().await;

    post_form(&ctx, "/cart/add", &COFFEE).await;
    post_form(&ctx, "/cart/add", &COFFEE).await;
    post_form(&ctx, "/cart/add", &NOTEBOOK).await;

    let body = get_text(&ctx, "/cart").await;

    assert_eq!(body.matches(r#"class="cart-item""#).count(), 2);
    assert!(body.contains("25.00 SAR"));
    assert!(body.contains("Total: 32.50 SAR"));
    assert!(body.contains(r#"<span id="cart-count">3</span>"#));
}

#[tokio::test]
async fn test_decrement_to_zero_removes_line() {
    let ctx = TestContext::new().await;

    post_form(&ctx, "/cart/add", &COFFEE).await;
    post_form(&ctx, "/cart/add", &NOTEBOOK).await;

    let resp = post_form(&ctx, "/cart/update", &[("id", "1"), ("delta", "-1")]).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let cart = cart_from_response(&resp).expect("Missing cart cookie");
    assert!(cart.get(ProductId::new(1)).is_none());
    assert_eq!(cart.count(), 1);

    let body = resp.text().await.expect("Failed to read body");
    assert_eq!(body.matches(r#"class="cart-item""#).count(), 1);
    assert!(body.contains(r#"<span id="cart-count" hx-swap-oob="true">1</span>"#));
}

#[tokio::test]
async fn test_increment_unknown_line_leaves_cart_untouched() {
    let ctx = TestContext::new().await;

    post_form(&ctx, "/cart/add", &COFFEE).await;

    let resp = post_form(&ctx, "/cart/update", &[("id", "42"), ("delta", "1")]).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(cart_from_response(&resp).is_none());

    let badge = get_text(&ctx, "/cart/count").await;
    assert_eq!(badge.trim(), r#"<span id="cart-count">1</span>"#);
}

#[tokio::test]
async fn test_remove_last_line_empties_cart() {
    let ctx = TestContext::new().await;

    post_form(&ctx, "/cart/add", &NOTEBOOK).await;

    let resp = post_form(&ctx, "/cart/remove", &[("id", "5")]).await;
    let cart = cart_from_response(&resp).expect("Missing cart cookie");
    assert!(cart.is_empty());

    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("Your cart is empty."));
    assert!(body.contains(r#"<div id="cart-summary"></div>"#));
    assert!(body.contains(r#"<span id="cart-count" hx-swap-oob="true">0</span>"#));
}

async fn add_arabic_line(ctx: &TestContext, id: i64) -> reqwest::Response {
    let id = id.to_string();
    let name = format!("سماعات بلوتوث لاسلكية مع علبة شحن رقم {id}");
    post_form(
        ctx,
        "/cart/add",
        &[("id", &id), ("name", &name), ("price", "199.99")],
    )
    .await
}

#[tokio::test]
async fn test_large_arabic_cart_is_kept_across_requests() {
    let ctx = TestContext::new().await;

    let mut last = None;
    for id in 1..=40 {
        let resp = add_arabic_line(&ctx, id).await;
        assert_eq!(resp.status(), StatusCode::OK);
        last = Some(resp);
    }
    let last = last.expect("No response");
    let cookies = set_cookies(&last);
    assert!(cookies.len() > 1, "cart should span several cookies");
    for cookie in &cookies {
        let pair = cookie.split(';').next().unwrap_or_default();
        assert!(pair.len() <= 4096, "{} bytes", pair.len());
    }
    assert_eq!(cart_from_response(&last).map(|cart| cart.count()), Some(40));

    let badge = get_text(&ctx, "/cart/count").await;
    assert_eq!(badge.trim(), r#"<span id="cart-count">40</span>"#);
    let page = get_text(&ctx, "/cart").await;
    assert_eq!(page.matches(r#"class="cart-item""#).count(), 40);
}

#[tokio::test]
async fn test_full_cart_refuses_add_with_notice() {
    let ctx = TestContext::new().await;

    let mut added = 0;
    let refused = loop {
        let resp = add_arabic_line(&ctx, added + 1).await;
        assert_eq!(resp.status(), StatusCode::OK);
        if cart_from_response(&resp).is_none() {
            break resp;
        }
        added += 1;
        assert!(added < 1_000, "cart never filled up");
    };

    assert!(refused.headers().get("hx-trigger").is_none());
    let body = refused.text().await.expect("Failed to read body");
    assert!(body.contains("Your cart is full."));
    assert!(body.contains(&format!(
        r#"<span id="cart-count" hx-swap-oob="true">{added}</span>"#
    )));

    let badge = get_text(&ctx, "/cart/count").await;
    assert_eq!(badge.trim(), format!(r#"<span id="cart-count">{added}</span>"#));
}

#[tokio::test]
async fn test_add_rejects_out_of_range_price() {
    let ctx = TestContext::new().await;

    for price in ["50000000000000000000000000000", "1000000000.01", "-3"] {
        let resp = post_form(
            &ctx,
            "/cart/add",
            &[("id", "1"), ("name", "Coffee"), ("price", price)],
        )
        .await;
        assert!(resp.status().is_client_error(), "{price}");
        assert!(cart_from_response(&resp).is_none());
    }

    let badge = get_text(&ctx, "/cart/count").await;
    assert_eq!(badge.trim(), r#"<span id="cart-count">0</span>"#);
}

#[tokio::test]
async fn test_corrupt_cookie_reads_as_empty_cart() {
    let ctx = TestContext::new().await;

    let resp = ctx
        .client
        .get(ctx.url("/cart/count"))
        .header(reqwest::header::COOKIE, "simpleStoreCart=%7Bnot-json")
        .send()
        .await
        .expect("Failed to get badge");

    assert_eq!(resp.status(), StatusCode::OK);
    let badge = resp.text().await.expect("Failed to read body");
    assert_eq!(badge.trim(), r#"<span id="cart-count">0</span>"#);
}

#[tokio::test]
async fn test_checkout_is_demo_only() {
    let ctx = TestContext::new().await;

    post_form(&ctx, "/cart/add", &COFFEE).await;

    let resp = ctx
        .client
        .post(ctx.url("/checkout"))
        .send()
        .await
        .expect("Failed to check out");

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(cart_from_response(&resp).is_none());
    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("This is a demo checkout only (no real payment gateway)."));

    let badge = get_text(&ctx, "/cart/count").await;
    assert_eq!(badge.trim(), r#"<span id="cart-count">1</span>"#);
}
