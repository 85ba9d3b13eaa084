use super::*;

const GOOD_PASSWORD: &str = "Password1!";

#[test]
fn validate_signup_input_requires_every_field() {
    assert_eq!(
        validate_signup_input("", "a@b.com", GOOD_PASSWORD, GOOD_PASSWORD),
        Err("Please fill all fields.")
    );
    assert_eq!(
        validate_signup_input("pat", "", GOOD_PASSWORD, GOOD_PASSWORD),
        Err("Please fill all fields.")
    );
    assert_eq!(
        validate_signup_input("pat", "a@b.com", "", GOOD_PASSWORD),
        Err("Please fill all fields.")
    );
    assert_eq!(
        validate_signup_input("pat", "a@b.com", GOOD_PASSWORD, ""),
        Err("Please fill all fields.")
    );
    assert_eq!(
        validate_signup_input("   ", "a@b.com", GOOD_PASSWORD, GOOD_PASSWORD),
        Err("Please fill all fields.")
    );
}

#[test]
fn mismatched_passwords_block_submission_before_policy_checks() {
    // "a" vs "b" would also fail the length rule; the mismatch wins.
    assert_eq!(
        validate_signup_input("pat", "a@b.com", "a", "b"),
        Err("Passwords do not match.")
    );
    assert_eq!(
        validate_signup_input("pat", "a@b.com", GOOD_PASSWORD, "Password1?"),
        Err("Passwords do not match.")
    );
}

#[test]
fn short_passwords_are_rejected_locally() {
    assert_eq!(
        validate_signup_input("pat", "a@b.com", "Aa1!", "Aa1!"),
        Err("Password must be at least 8 characters long.")
    );
}

#[test]
fn passwords_missing_a_character_class_are_rejected_locally() {
    assert_eq!(
        validate_signup_input("pat", "a@b.com", "password1!", "password1!"),
        Err("Password must contain at least one uppercase letter.")
    );
    assert_eq!(
        validate_signup_input("pat", "a@b.com", "Password!", "Password!"),
        Err("Password must contain at least one digit.")
    );
    assert_eq!(
        validate_signup_input("pat", "a@b.com", "Password1", "Password1"),
        Err("Password must contain at least one symbol (!@#$%^&*()-_=+[]{};:,.?).")
    );
}

#[test]
fn valid_input_builds_the_wire_payload_without_the_confirmation() {
    let registration =
        validate_signup_input("  pat  ", " pat@example.com ", GOOD_PASSWORD, GOOD_PASSWORD)
            .expect("valid input");
    assert_eq!(
        registration,
        Registration {
            username: "pat".to_owned(),
            email: "pat@example.com".to_owned(),
            password: GOOD_PASSWORD.to_owned(),
        }
    );
}
