//! Top navigation bar with the three overlay triggers.

use leptos::prelude::*;

use crate::state::panels::PanelState;

/// Navigation bar. The hamburger icon toggles the mobile menu, the email
/// label the desktop menu, and the cart icon the shopping-cart aside. One
/// handler per trigger, registered once and never unregistered.
#[component]
pub fn Navbar() -> impl IntoView {
    let panels = expect_context::<RwSignal<PanelState>>();

    let on_hamburger = move |_| panels.update(PanelState::toggle_mobile_menu);
    let on_email = move |_| panels.update(PanelState::toggle_desktop_menu);
    let on_cart = move |_| panels.update(PanelState::toggle_cart);

    view! {
        <nav class="navbar">
            <img class="menu" src="./icons/icon_menu.svg" alt="open menu" on:click=on_hamburger/>

            <div class="navbar-left">
                <a class="navbar-logo" href="/">"Yard Sale"</a>
                <ul>
                    <li><a href="/">"All"</a></li>
                    <li><a href="/">"Clothes"</a></li>
                    <li><a href="/">"Electronics"</a></li>
                    <li><a href="/">"Furnitures"</a></li>
                    <li><a href="/">"Toys"</a></li>
                    <li><a href="/">"Others"</a></li>
                </ul>
            </div>

            <div class="navbar-right">
                <ul>
                    <li class="navbar-email" on:click=on_email>
                        "shop@example.com"
                    </li>
                    <li class="navbar-shopping-cart" on:click=on_cart>
                        <img src="./icons/icon_shopping_cart.svg" alt="shopping cart"/>
                    </li>
                </ul>
            </div>
        </nav>
    }
}
