//! Shopping-cart aside.

use leptos::prelude::*;

use crate::state::panels::{Panel, PanelState};

/// Cart overlay. Content is chrome only; cart line items are out of scope
/// for this storefront.
#[component]
pub fn ShoppingCart() -> impl IntoView {
    let panels = expect_context::<RwSignal<PanelState>>();

    let on_close = move |_| panels.update(PanelState::toggle_cart);

    view! {
        <aside class="shopping-cart" class:inactive=move || !panels.get().is_open(Panel::Cart)>
            <div class="title-container">
                <img src="./icons/flechita.svg" alt="back" on:click=on_close/>
                <p class="title">"My order"</p>
            </div>
        </aside>
    }
}
