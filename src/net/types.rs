//! Request DTOs for the remote authentication service.
//!
//! DESIGN
//! ======
//! Field names are the wire contract; serde derives keep the JSON bodies
//! schema-driven rather than hand-assembled.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Login submission as sent to `POST /api/auth/login`.
///
/// The username carries whatever identifier the account was registered
/// with — typically the email address.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Signup submission as sent to `POST /api/auth/signup`.
///
/// The confirmation field never crosses the wire; it is checked locally
/// and dropped before this value is built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
}
