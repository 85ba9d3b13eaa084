//! Dashboard navigation bar.

use leptos::prelude::*;

use crate::theme::Theme;

/// Top-level menu entries. Targets are placeholders until those screens
/// exist.
const MENU_ITEMS: [&str; 5] = ["Dashboard", "Products", "Customers", "Reports", "Settings"];

/// Branded navigation bar with the menu, a search box, and logout.
/// The search controls are visual only; logout just leaves for the
/// login route.
#[component]
pub fn NavBar() -> impl IntoView {
    let theme = expect_context::<Theme>();
    let bar_style = format!("background-color: {};", theme.navbar_bg);
    let search_style = format!("border: 1px solid {};", theme.border);
    let search_button_style = format!("background-color: {}; color: #ffffff;", theme.primary);
    let logout_style = format!("background-color: {}; color: #ffffff;", theme.link);

    view! {
        <header class="navbar" style=bar_style>
            <div class="navbar__brand">
                <img class="navbar__logo" src="/Invenza.png" alt="Invenza logo"/>
                <nav>
                    <ul class="navbar__menu">
                        {MENU_ITEMS
                            .into_iter()
                            .map(|item| {
                                view! {
                                    <li>
                                        <a class="navbar__menu-link" href="#">
                                            {item}
                                        </a>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                </nav>
            </div>
            <div class="navbar__actions">
                <input
                    class="navbar__search"
                    type="text"
                    placeholder="Search..."
                    style=search_style
                />
                <button class="navbar__search-button" style=search_button_style>
                    "Search"
                </button>
                <a class="navbar__logout" href="/" style=logout_style>
                    "Logout"
                </a>
            </div>
        </header>
    }
}
