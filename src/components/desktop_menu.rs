//! Desktop account menu, anchored to the navbar email label.

use leptos::prelude::*;

use crate::state::panels::{Panel, PanelState};

/// Dropdown menu for account actions on desktop viewports. Hidden whenever
/// the controller marks it closed.
#[component]
pub fn DesktopMenu() -> impl IntoView {
    let panels = expect_context::<RwSignal<PanelState>>();

    view! {
        <div class="desktop-menu" class:inactive=move || !panels.get().is_open(Panel::DesktopMenu)>
            <ul>
                <li><a class="title" href="/">"My orders"</a></li>
                <li><a href="/">"My account"</a></li>
                <li><a href="/">"Sign out"</a></li>
            </ul>
        </div>
    }
}
