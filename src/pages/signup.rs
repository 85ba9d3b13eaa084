//! Signup page: registration form with local validation and a delayed
//! redirect to login after success.
//!
//! SYSTEM CONTEXT
//! ==============
//! Validation rules run in a fixed order and stop at the first failure,
//! so the user sees one actionable message at a time. The confirmation
//! field exists only for the local equality check and never reaches the
//! wire.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::auth_card::AuthCard;
use crate::components::spinner::Spinner;
use crate::components::status_banner::StatusBanner;
use crate::components::text_field::TextField;
use crate::net::types::Registration;
use crate::state::form::{FormPhase, FormStatus};
use crate::theme::Theme;
use crate::util::password::check_password;

/// Delay between a successful signup and the redirect to login.
const SUCCESS_REDIRECT_MS: u64 = 1500;

/// Shown when the server acknowledges without a confirmation body.
const SIGNUP_SUCCESS_NOTICE: &str = "Account created successfully!";

/// Validate signup fields in order, stopping at the first failure.
/// Username and email are trimmed; both password fields are verbatim.
fn validate_signup_input(
    username: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<Registration, &'static str> {
    let username = username.trim();
    let email = email.trim();
    if username.is_empty() || email.is_empty() || password.is_empty() || confirm_password.is_empty()
    {
        return Err("Please fill all fields.");
    }
    if password != confirm_password {
        return Err("Passwords do not match.");
    }
    check_password(password).map_err(|issue| issue.message())?;
    Ok(Registration {
        username: username.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let theme = expect_context::<Theme>();
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let status = RwSignal::new(FormStatus::default());
    let navigate = use_navigate();

    let busy = Signal::derive(move || status.get().is_busy());
    let on_edit = Callback::new(move |()| status.update(FormStatus::clear_on_edit));

    // Head back to login a moment after the success notice appears.
    let redirect_scheduled = RwSignal::new(false);
    let navigate_on_success = navigate.clone();
    Effect::new(move || {
        if !matches!(status.get().phase, FormPhase::Success) {
            return;
        }
        if redirect_scheduled.get() {
            return;
        }
        redirect_scheduled.set(true);
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate_on_success.clone();
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(SUCCESS_REDIRECT_MS))
                    .await;
                navigate("/", NavigateOptions::default());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &navigate_on_success;
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.get().is_busy() {
            return;
        }
        status.update(FormStatus::begin_attempt);
        let registration = match validate_signup_input(
            &username.get(),
            &email.get(),
            &password.get(),
            &confirm_password.get(),
        ) {
            Ok(registration) => registration,
            Err(message) => {
                status.update(|s| s.reject_local(message));
                return;
            }
        };
        status.update(FormStatus::begin_request);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::signup(&registration).await {
                Ok(confirmation) => {
                    status.update(|s| {
                        s.succeed(
                            confirmation.unwrap_or_else(|| SIGNUP_SUCCESS_NOTICE.to_owned()),
                        );
                    });
                    // A fresh form for the next account; rejected attempts
                    // keep their values for correction instead.
                    username.set(String::new());
                    email.set(String::new());
                    password.set(String::new());
                    confirm_password.set(String::new());
                }
                Err(message) => status.update(|s| s.fail(message)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = registration;
        }
    };

    let navigate_login = navigate;

    let footer_style = format!("color: {};", theme.body_text);
    let login_style = format!("color: {};", theme.link);
    let button_style = format!(
        "background-color: {}; color: #ffffff; --hover: {};",
        theme.primary, theme.primary_hover
    );

    view! {
        <AuthCard title="Sign Up" subtitle="Create your account">
            <StatusBanner status=status/>
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
                    id="email"
                    label="Email"
                    placeholder="Enter your Email"
                    value=email
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
                <TextField
                    id="confirm-password"
                    label="Confirm Password"
                    placeholder="Confirm your Password"
                    input_type="password"
                    value=confirm_password
                    disabled=busy
                    on_edit=on_edit
                />
                <button
                    class="auth-form__submit"
                    type="submit"
                    style=button_style
                    disabled=move || busy.get()
                >
                    <Show when=move || busy.get() fallback=|| "Sign Up">
                        <Spinner/>
                    </Show>
                </button>
            </form>
            <p class="auth-card__footer">
                <span style=footer_style>"Already have an account? "</span>
                <span
                    class="auth-form__link"
                    style=login_style
                    on:click=move |_| navigate_login("/", NavigateOptions::default())
                >
                    "Login"
                </span>
            </p>
        </AuthCard>
    }
}
