//! Root application component and shared state contexts.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};

use crate::components::desktop_menu::DesktopMenu;
use crate::components::mobile_menu::MobileMenu;
use crate::components::navbar::Navbar;
use crate::components::product_detail::ProductDetail;
use crate::components::shopping_cart::ShoppingCart;
use crate::pages::home::HomePage;
use crate::state::catalog::CatalogState;
use crate::state::panels::PanelState;

/// Root component. Provides the panel controller and the catalog as
/// reactive contexts, then composes the store chrome and the product grid.
#[component]
pub fn App(catalog: CatalogState) -> impl IntoView {
    provide_meta_context();

    let panels = RwSignal::new(PanelState::default());
    let catalog = RwSignal::new(catalog);

    provide_context(panels);
    provide_context(catalog);

    view! {
        <Stylesheet id="storefront" href="/styles.css"/>
        <Title text="Yard Sale"/>

        <Navbar/>
        <DesktopMenu/>
        <MobileMenu/>
        <HomePage/>
        <ShoppingCart/>
        <ProductDetail/>
    }
}
