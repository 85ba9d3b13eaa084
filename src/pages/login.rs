//! Login page: credentials form posting to the remote auth service.
//!
//! SYSTEM CONTEXT
//! ==============
//! Entry route of the app. A successful login leaves for the dashboard;
//! failures stay here with a single error banner. The disabled submit
//! control is the only concurrency guard, so at most one request is in
//! flight per view instance.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::auth_card::AuthCard;
use crate::components::spinner::Spinner;
use crate::components::status_banner::StatusBanner;
use crate::components::text_field::TextField;
use crate::net::types::Credentials;
use crate::state::form::{FormPhase, FormStatus};
use crate::theme::Theme;

/// Validate login fields. The username is trimmed; the password is taken
/// verbatim since whitespace may be part of it.
fn validate_login_input(username: &str, password: &str) -> Result<Credentials, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Please enter both username and password.");
    }
    Ok(Credentials {
        username: username.to_owned(),
        password: password.to_owned(),
    })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let theme = expect_context::<Theme>();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let remember_me = RwSignal::new(false);
    let status = RwSignal::new(FormStatus::default());
    let navigate = use_navigate();

    let busy = Signal::derive(move || status.get().is_busy());
    let on_edit = Callback::new(move |()| status.update(FormStatus::clear_on_edit));

    // Leave for the dashboard once the remote accepts the credentials.
    let navigate_on_success = navigate.clone();
    Effect::new(move || {
        if matches!(status.get().phase, FormPhase::Success) {
            navigate_on_success("/dashboard", NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.get().is_busy() {
            return;
        }
        status.update(FormStatus::begin_attempt);
        let credentials = match validate_login_input(&username.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(message) => {
                status.update(|s| s.reject_local(message));
                return;
            }
        };
        status.update(FormStatus::begin_request);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&credentials).await {
                Ok(()) => status.update(|s| s.succeed("Login successful!")),
                Err(message) => status.update(|s| s.fail(message)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
        }
    };

    let navigate_signup = navigate.clone();
    let navigate_forgot = navigate;

    let remember_style = format!("color: {};", theme.field_ink);
    let footer_style = format!("color: {};", theme.field_ink);
    let forgot_style = format!("color: {};", theme.link);
    let signup_style = format!("color: {};", theme.link);
    let button_style = format!(
        "background-color: {}; color: #ffffff; --hover: {};",
        theme.primary, theme.primary_hover
    );

    view! {
        <AuthCard title="Login" tinted=true>
            <form class="auth-form" on:submit=on_submit>
                <TextField
                    id="username"
                    label="Username"
                    placeholder="Enter your Username"
                    value=username
                    disabled=busy
                    on_edit=on_edit
                />
                <TextField
                    id="password"
                    label="Password"
                    placeholder="Enter your Password"
                    input_type="password"
                    value=password
                    disabled=busy
                    on_edit=on_edit
                />
                <div class="auth-form__options">
                    <label class="auth-form__remember" style=remember_style>
                        <input
                            type="checkbox"
                            prop:checked=move || remember_me.get()
                            on:change=move |ev| remember_me.set(event_target_checked(&ev))
                            disabled=move || busy.get()
                        />
                        " Remember Me"
                    </label>
                    <span
                        class="auth-form__link"
                        style=forgot_style
                        on:click=move |_| navigate_forgot("/forgot-password", NavigateOptions::default())
                    >
                        "Forgot Password?"
                    </span>
                </div>
                <StatusBanner status=status/>
                <button
                    class="auth-form__submit"
                    type="submit"
                    style=button_style
                    disabled=move || busy.get()
                >
                    <Show when=move || busy.get() fallback=|| "Login">
                        <Spinner/>
                    </Show>
                </button>
            </form>
            <p class="auth-card__footer">
                <span style=footer_style>"Don't have an account? "</span>
                <span
                    class="auth-form__link"
                    style=signup_style
                    on:click=move |_| navigate_signup("/signup", NavigateOptions::default())
                >
                    "Sign Up"
                </span>
            </p>
        </AuthCard>
    }
}
