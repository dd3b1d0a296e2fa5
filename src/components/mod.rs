//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render store chrome and the product grid while reading/writing
//! shared state from Leptos context providers. Overlay components derive the
//! `inactive` class from `PanelState`; the stylesheet does the actual hiding.

pub mod desktop_menu;
pub mod mobile_menu;
pub mod navbar;
pub mod product_card;
pub mod product_detail;
pub mod shopping_cart;
