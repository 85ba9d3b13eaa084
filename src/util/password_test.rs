use super::*;

#[test]
fn short_passwords_are_rejected_first() {
    assert_eq!(check_password(""), Err(PasswordIssue::TooShort));
    assert_eq!(check_password("Aa1!"), Err(PasswordIssue::TooShort));
    assert_eq!(check_password("Aa1!Aa1"), Err(PasswordIssue::TooShort));
}

#[test]
fn length_is_counted_in_characters_not_bytes() {
    // Eight characters, more than eight bytes.
    assert_eq!(check_password("Päss1!pp"), Ok(()));
}

#[test]
fn missing_uppercase_is_reported() {
    assert_eq!(check_password("password1!"), Err(PasswordIssue::MissingUppercase));
}

#[test]
fn missing_digit_is_reported() {
    assert_eq!(check_password("Password!"), Err(PasswordIssue::MissingDigit));
}

#[test]
fn missing_symbol_is_reported() {
    assert_eq!(check_password("Password1"), Err(PasswordIssue::MissingSymbol));
}

#[test]
fn compliant_passwords_pass() {
    assert_eq!(check_password("Password1!"), Ok(()));
    assert_eq!(check_password("Abcdef1]"), Ok(()));
}

#[test]
fn every_listed_symbol_satisfies_the_symbol_rule() {
    for symbol in PASSWORD_SYMBOLS.chars() {
        let candidate = format!("Abcdef1{symbol}");
        assert_eq!(check_password(&candidate), Ok(()), "symbol {symbol:?}");
    }
}

#[test]
fn issue_messages_name_the_violated_rule() {
    assert_eq!(
        PasswordIssue::TooShort.message(),
        "Password must be at least 8 characters long."
    );
    assert!(PasswordIssue::MissingUppercase.message().contains("uppercase"));
    assert!(PasswordIssue::MissingDigit.message().contains("digit"));
    assert!(PasswordIssue::MissingSymbol.message().contains("symbol"));
}
