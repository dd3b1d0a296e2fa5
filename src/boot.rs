//! Browser startup: logger install, catalog load, mount point lookup.
//!
//! ERROR HANDLING
//! ==============
//! Setup is all-or-nothing. If any required collaborator is missing the app
//! mounts nothing and reports the failure to the console, rather than wiring
//! a partial UI. In-session operations have no failure paths.

use thiserror::Error;

use crate::state::catalog::CatalogError;

/// CSS selector for the element the app mounts into.
pub const MOUNT_SELECTOR: &str = ".storefront-root";

/// Errors that abort startup.
#[derive(Debug, Error)]
pub enum BootError {
    #[error("browser window is not available")]
    NoWindow,
    #[error("browser document is not available")]
    NoDocument,
    #[error("mount element `{0}` not found in the document")]
    MissingMount(&'static str),
    #[error("console logger could not be installed: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Initialize logging, load the catalog, and mount the app.
///
/// # Errors
///
/// Returns a [`BootError`] if the logger, the embedded catalog, or the mount
/// element is unavailable. Nothing is mounted on error.
#[cfg(feature = "csr")]
pub fn run() -> Result<(), BootError> {
    use leptos::prelude::*;
    use wasm_bindgen::JsCast;

    use crate::app::App;
    use crate::state::catalog::CatalogState;

    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug)?;

    let catalog = CatalogState::seed()?;

    let window = web_sys::window().ok_or(BootError::NoWindow)?;
    let document = window.document().ok_or(BootError::NoDocument)?;
    let mount = document
        .query_selector(MOUNT_SELECTOR)
        .map_err(|_js| BootError::MissingMount(MOUNT_SELECTOR))?
        .ok_or(BootError::MissingMount(MOUNT_SELECTOR))?;
    let mount: web_sys::HtmlElement = mount
        .dyn_into()
        .map_err(|_el| BootError::MissingMount(MOUNT_SELECTOR))?;

    log::info!("mounting storefront with {} products", catalog.products.len());
    leptos::mount::mount_to(mount, move || view! { <App catalog/> }).forget();
    Ok(())
}

/// WASM entry point, invoked by the browser module loader.
///
/// # Errors
///
/// Propagates startup failures to the loader after logging them.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() -> Result<(), wasm_bindgen::JsValue> {
    run().map_err(|e| {
        log::error!("startup failed: {e}");
        wasm_bindgen::JsValue::from_str(&e.to_string())
    })
}
