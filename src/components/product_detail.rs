//! Product-detail aside, opened by activating a card's primary image.

use leptos::prelude::*;

use crate::state::panels::{Panel, PanelState};

/// Detail overlay with a close affordance wired to the controller.
#[component]
pub fn ProductDetail() -> impl IntoView {
    let panels = expect_context::<RwSignal<PanelState>>();

    let on_close = move |_| panels.update(PanelState::close_product_detail);

    view! {
        <aside class="product-detail" class:inactive=move || !panels.get().is_open(Panel::ProductDetail)>
            <div class="product-detail-close" on:click=on_close>
                <img src="./icons/icon_close.png" alt="close"/>
            </div>
        </aside>
    }
}
