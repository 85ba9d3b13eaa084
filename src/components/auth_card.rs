//! Centered card wrapper shared by the login and signup screens.

use leptos::prelude::*;

use crate::theme::Theme;

/// Full-page wrapper with the branded card: logo, heading, optional
/// subtitle, then whatever the page puts inside.
#[component]
pub fn AuthCard(
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
    /// Use the tinted card surface instead of the plain one.
    #[prop(optional)]
    tinted: bool,
    children: Children,
) -> impl IntoView {
    let theme = expect_context::<Theme>();
    let page_style = format!("background-color: {};", theme.page_bg);
    let card_bg = if tinted {
        theme.card_tint_bg.clone()
    } else {
        theme.card_bg.clone()
    };
    let card_style = format!(
        "background-color: {}; border: 1px solid {}; border-radius: 30px; box-shadow: 0 6px 20px rgba(0, 0, 0, 0.08);",
        card_bg, theme.field_ink
    );
    let title_style = format!("color: {};", theme.heading);
    let subtitle_style = format!("color: {};", theme.body_text);

    view! {
        <div class="auth-page" style=page_style>
            <div class="auth-card" style=card_style>
                <img class="auth-card__logo" src="/Invenza.png" alt="Invenza logo"/>
                <h1 class="auth-card__title" style=title_style>{title}</h1>
                {subtitle
                    .map(|text| {
                        view! {
                            <p class="auth-card__subtitle" style=subtitle_style>{text}</p>
                        }
                    })}
                {children()}
            </div>
        </div>
    }
}
