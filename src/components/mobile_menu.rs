//! Mobile slide-in menu, anchored to the navbar hamburger icon.

use leptos::prelude::*;

use crate::state::panels::{Panel, PanelState};

/// Full category and account menu for narrow viewports.
#[component]
pub fn MobileMenu() -> impl IntoView {
    let panels = expect_context::<RwSignal<PanelState>>();

    view! {
        <div class="mobile-menu" class:inactive=move || !panels.get().is_open(Panel::MobileMenu)>
            <ul>
                <li><a href="/">"All"</a></li>
                <li><a href="/">"Clothes"</a></li>
                <li><a href="/">"Electronics"</a></li>
                <li><a href="/">"Furnitures"</a></li>
                <li><a href="/">"Toys"</a></li>
                <li><a href="/">"Others"</a></li>
            </ul>
            <ul>
                <li><a href="/">"My orders"</a></li>
                <li><a href="/">"My account"</a></li>
            </ul>
            <ul>
                <li class="email">"shop@example.com"</li>
                <li><a class="sign-out" href="/">"Sign out"</a></li>
            </ul>
        </div>
    }
}
