//! Dashboard page: static product-management shell.
//!
//! The landing route after login. Purely presentational — the nav bar
//! and welcome card expose no state-changing operations yet.

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::theme::Theme;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let theme = expect_context::<Theme>();
    let frame_style = format!(
        "border: 2px solid {}; background-color: {};",
        theme.border, theme.page_bg
    );
    let card_style = format!(
        "background-color: {}; border: 1px solid {};",
        theme.card_bg, theme.border
    );
    let title_style = format!("color: {};", theme.body_text);
    let blurb_style = format!("color: {};", theme.body_text);
    let button_style = format!("background-color: {}; color: #ffffff;", theme.primary);

    view! {
        <div class="dashboard-page" style=frame_style>
            <NavBar/>
            <main class="dashboard-page__main">
                <div class="welcome-card" style=card_style>
                    <h1 class="welcome-card__title" style=title_style>
                        "Welcome to the Invenza Dashboard!"
                    </h1>
                    <p class="welcome-card__blurb" style=blurb_style>
                        "Manage your products, customers, and reports from here."
                    </p>
                    <button class="welcome-card__action" style=button_style>
                        "Add New Product"
                    </button>
                </div>
            </main>
        </div>
    }
}
