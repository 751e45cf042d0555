//! Error types for the Laptop Inventory application

use thiserror::Error;

/// Authentication and credential failures.
///
/// Each variant deliberately collapses several underlying causes so that a
/// caller cannot learn whether an email is registered or why a token was
/// rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// The email is already bound to another account
    #[error("Email already registered")]
    DuplicateEmail,

    /// Unknown email or wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Malformed, tampered with, or expired token
    #[error("Invalid token")]
    InvalidToken,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_do_not_leak_cause() {
        assert_eq!(AuthError::InvalidCredentials.to_string(), "Invalid credentials");
        assert_eq!(AuthError::InvalidToken.to_string(), "Invalid token");
    }
}
