//! Password-reset validation.

use thiserror::Error;

/// Why a new password was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordResetError {
    #[error("Passwords do not match")]
    Mismatch,
    #[error("Password must be at least {min} characters")]
    TooShort { min: usize },
}

/// Checks a new password and its confirmation.
///
/// A mismatch is reported before the length check.
pub fn validate_new_password(
    password: &str,
    confirm: &str,
    min_len: usize,
) -> Result<(), PasswordResetError> {
    if password != confirm {
        return Err(PasswordResetError::Mismatch);
    }
    if password.chars().count() < min_len {
        return Err(PasswordResetError::TooShort { min: min_len });
    }
    Ok(())
}
