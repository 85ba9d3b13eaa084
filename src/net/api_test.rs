use super::*;

#[test]
fn rejection_message_prefers_the_response_body_verbatim() {
    assert_eq!(
        rejection_message("Invalid credentials", LOGIN_FALLBACK_ERROR),
        "Invalid credentials"
    );
    // Verbatim means verbatim: surrounding whitespace survives.
    assert_eq!(
        rejection_message("Email already registered.\n", SIGNUP_FALLBACK_ERROR),
        "Email already registered.\n"
    );
}

#[test]
fn rejection_message_falls_back_on_empty_bodies() {
    assert_eq!(
        rejection_message("", LOGIN_FALLBACK_ERROR),
        "Invalid username or password."
    );
    assert_eq!(
        rejection_message("  \n", SIGNUP_FALLBACK_ERROR),
        "Signup failed. Try again."
    );
}

#[test]
fn endpoints_are_same_origin_auth_paths() {
    assert_eq!(LOGIN_ENDPOINT, "/api/auth/login");
    assert_eq!(SIGNUP_ENDPOINT, "/api/auth/signup");
}
