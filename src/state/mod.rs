//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`catalog`, `panels`) so components depend on
//! small focused models provided through Leptos contexts.

pub mod catalog;
pub mod panels;
