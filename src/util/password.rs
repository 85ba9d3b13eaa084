//! Password policy for signup submissions.
//!
//! Minimum length plus a composition rule: at least one ASCII uppercase
//! letter, one digit, and one symbol from a fixed set. Violations are
//! reported one at a time so the form shows a single message.

#[cfg(test)]
#[path = "password_test.rs"]
mod password_test;

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Symbols that satisfy the composition rule.
pub const PASSWORD_SYMBOLS: &str = "!@#$%^&*()-_=+[]{};:,.?";

/// First policy rule a candidate password violates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PasswordIssue {
    TooShort,
    MissingUppercase,
    MissingDigit,
    MissingSymbol,
}

impl PasswordIssue {
    /// User-facing message for this violation.
    pub fn message(self) -> &'static str {
        match self {
            Self::TooShort => "Password must be at least 8 characters long.",
            Self::MissingUppercase => "Password must contain at least one uppercase letter.",
            Self::MissingDigit => "Password must contain at least one digit.",
            Self::MissingSymbol => {
                "Password must contain at least one symbol (!@#$%^&*()-_=+[]{};:,.?)."
            }
        }
    }
}

/// Check a password against the policy, reporting the first violation.
/// Rules are checked in order: length, uppercase, digit, symbol.
pub fn check_password(password: &str) -> Result<(), PasswordIssue> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(PasswordIssue::TooShort);
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(PasswordIssue::MissingUppercase);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(PasswordIssue::MissingDigit);
    }
    if !password.chars().any(|c| PASSWORD_SYMBOLS.contains(c)) {
        return Err(PasswordIssue::MissingSymbol);
    }
    Ok(())
}
