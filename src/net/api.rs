//! HTTP calls to the remote authentication service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side / native: stubs returning errors since these endpoints
//! are only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get a single user-visible string per failure. A remote
//! rejection shows the response body verbatim when the server supplied
//! one; transport failures and empty bodies collapse to the per-form
//! fallback text, with the underlying detail logged rather than shown.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Credentials, Registration};

/// Login endpoint, same-origin.
pub const LOGIN_ENDPOINT: &str = "/api/auth/login";
/// Signup endpoint, same-origin.
pub const SIGNUP_ENDPOINT: &str = "/api/auth/signup";

/// Shown when login fails without a server-supplied message.
pub const LOGIN_FALLBACK_ERROR: &str = "Invalid username or password.";
/// Shown when signup fails without a server-supplied message.
pub const SIGNUP_FALLBACK_ERROR: &str = "Signup failed. Try again.";

/// Prefer the server-supplied body; fall back when it carries nothing.
#[cfg(any(test, feature = "hydrate"))]
fn rejection_message(body: &str, fallback: &str) -> String {
    if body.trim().is_empty() {
        fallback.to_owned()
    } else {
        body.to_owned()
    }
}

#[cfg(feature = "hydrate")]
fn transport_failure(call: &str, detail: &str, fallback: &str) -> String {
    log::error!("{call} request failed: {detail}");
    fallback.to_owned()
}

/// Submit credentials via `POST /api/auth/login`.
///
/// Success is determined by the HTTP status alone; any 2xx body is
/// informational and ignored.
///
/// # Errors
///
/// Returns the user-visible error string: the rejection body verbatim,
/// or the login fallback text for transport failures and empty bodies.
pub async fn login(credentials: &Credentials) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(LOGIN_ENDPOINT)
            .json(credentials)
            .map_err(|e| transport_failure("login", &e.to_string(), LOGIN_FALLBACK_ERROR))?
            .send()
            .await
            .map_err(|e| transport_failure("login", &e.to_string(), LOGIN_FALLBACK_ERROR))?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(rejection_message(&body, LOGIN_FALLBACK_ERROR));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err("not available on server".to_owned())
    }
}

/// Submit a registration via `POST /api/auth/signup`.
///
/// Success is determined by the HTTP status alone. A non-empty 2xx body
/// is returned as an optional human-readable confirmation string.
///
/// # Errors
///
/// Returns the user-visible error string: the rejection body verbatim,
/// or the signup fallback text for transport failures and empty bodies.
pub async fn signup(registration: &Registration) -> Result<Option<String>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(SIGNUP_ENDPOINT)
            .json(registration)
            .map_err(|e| transport_failure("signup", &e.to_string(), SIGNUP_FALLBACK_ERROR))?
            .send()
            .await
            .map_err(|e| transport_failure("signup", &e.to_string(), SIGNUP_FALLBACK_ERROR))?;
        let body = resp.text().await.unwrap_or_default();
        if !resp.ok() {
            return Err(rejection_message(&body, SIGNUP_FALLBACK_ERROR));
        }
        let confirmation = body.trim();
        Ok((!confirmation.is_empty()).then(|| confirmation.to_owned()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = registration;
        Err("not available on server".to_owned())
    }
}
