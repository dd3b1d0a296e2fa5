//! Product card — the insertion adapter for a [`CardSpec`].

use leptos::prelude::*;

use crate::state::panels::PanelState;
use crate::util::cards::CardSpec;

/// One card in the product grid. Activating the primary image opens the
/// product-detail aside through the panel controller; the add-to-cart icon
/// is fixed chrome from the descriptor.
#[component]
pub fn ProductCard(spec: CardSpec) -> impl IntoView {
    let panels = expect_context::<RwSignal<PanelState>>();

    let on_image = move |_| panels.update(PanelState::open_product_detail);

    view! {
        <div class="product-card">
            <img src=spec.image_url alt=spec.name.clone() on:click=on_image/>
            <div class="product-info">
                <div>
                    <p>{spec.price_label}</p>
                    <p>{spec.name}</p>
                </div>
                <figure>
                    <img src=spec.cart_icon alt="add to cart"/>
                </figure>
            </div>
        </div>
    }
}
