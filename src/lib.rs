//! # storefront
//!
//! Leptos + WASM client for a small storefront UI: mutually exclusive
//! overlay panels (desktop menu, mobile menu, shopping cart), an
//! independently toggled product-detail aside, and a product grid rendered
//! from a fixed embedded catalog.
//!
//! Panel visibility lives in an explicit controller state provided through
//! context; components derive the `inactive` class from that state rather
//! than treating class membership as the state itself. Browser-only code is
//! gated behind the `csr` feature so the crate builds and tests natively.

pub mod app;
pub mod boot;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;
