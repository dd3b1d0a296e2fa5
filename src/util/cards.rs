//! Card descriptor builder — the pure half of product rendering.
//!
//! Computes everything a product card displays ahead of DOM insertion, so
//! card content is testable without a browser. The `ProductCard` component
//! is the thin adapter that turns a descriptor into elements.

#[cfg(test)]
#[path = "cards_test.rs"]
mod cards_test;

use crate::state::catalog::Product;

/// Add-to-cart icon shown on every card. Renderer-supplied, not
/// product-derived.
pub const ADD_TO_CART_ICON: &str = "./icons/bt_add_to_cart.svg";

/// Display content for one product card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardSpec {
    pub name: String,
    pub price_label: String,
    pub image_url: String,
    pub cart_icon: &'static str,
}

/// Price label shown on a card: a literal `$` prefix and the raw number.
pub fn price_label(price: u32) -> String {
    format!("${price}")
}

/// Build one descriptor per product, preserving input order. An empty slice
/// yields an empty list.
pub fn card_specs(products: &[Product]) -> Vec<CardSpec> {
    products
        .iter()
        .map(|product| CardSpec {
            name: product.name.clone(),
            price_label: price_label(product.price),
            image_url: product.image_url.clone(),
            cart_icon: ADD_TO_CART_ICON,
        })
        .collect()
}
