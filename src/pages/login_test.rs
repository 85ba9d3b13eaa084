use super::*;

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(
        validate_login_input("", "secret"),
        Err("Please enter both username and password.")
    );
    assert_eq!(
        validate_login_input("a@b.com", ""),
        Err("Please enter both username and password.")
    );
    assert_eq!(
        validate_login_input("", ""),
        Err("Please enter both username and password.")
    );
    assert_eq!(
        validate_login_input("   ", "secret"),
        Err("Please enter both username and password.")
    );
}

#[test]
fn validate_login_input_trims_the_username_only() {
    assert_eq!(
        validate_login_input("  a@b.com  ", " secret "),
        Ok(Credentials {
            username: "a@b.com".to_owned(),
            password: " secret ".to_owned(),
        })
    );
}

#[test]
fn validate_login_input_accepts_complete_credentials() {
    assert_eq!(
        validate_login_input("a@b.com", "secret"),
        Ok(Credentials {
            username: "a@b.com".to_owned(),
            password: "secret".to_owned(),
        })
    );
}
