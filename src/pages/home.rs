//! Home page: the product grid.

use leptos::prelude::*;

use crate::components::product_card::ProductCard;
use crate::state::catalog::CatalogState;
use crate::util::cards::card_specs;

/// Storefront home page. Cards land in the grid container in catalog order;
/// the container is appended to, never cleared.
#[component]
pub fn HomePage() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();

    view! {
        <section class="main-container">
            <div class="cards-container">
                {move || {
                    card_specs(&catalog.get().products)
                        .into_iter()
                        .map(|spec| view! { <ProductCard spec/> })
                        .collect::<Vec<_>>()
                }}
            </div>
        </section>
    }
}
