//! Input validation functions
//!
//! Length limits mirror the column sizes of the `users` and `laptops`
//! tables. Lengths are counted in characters, not bytes.

use validator::ValidateEmail;

/// Maximum length of a user's display name
pub const USER_NAME_MAX_LEN: usize = 250;
/// Maximum length of an email address
pub const EMAIL_MAX_LEN: usize = 250;
/// Maximum length of a plaintext password
pub const PASSWORD_MAX_LEN: usize = 100;
/// Maximum length of a laptop name
pub const LAPTOP_NAME_MAX_LEN: usize = 250;
/// Maximum length of a laptop description
pub const DESCRIPTION_MAX_LEN: usize = 500;

fn validate_text(field: &str, value: &str, max_len: usize) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{} cannot be empty", field));
    }
    if value.chars().count() > max_len {
        return Err(format!("{} must be at most {} characters", field, max_len));
    }
    Ok(())
}

/// Validate a user's display name
pub fn validate_user_name(name: &str) -> Result<(), String> {
    validate_text("Name", name, USER_NAME_MAX_LEN)
}

/// Validate email format
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email cannot be empty".to_string());
    }
    if email.chars().count() > EMAIL_MAX_LEN {
        return Err("Email too long".to_string());
    }
    if !email.validate_email() {
        return Err("Invalid email format".to_string());
    }
    Ok(())
}

/// Validate a plaintext password
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.is_empty() {
        return Err("Password cannot be empty".to_string());
    }
    if password.chars().count() > PASSWORD_MAX_LEN {
        return Err("Password too long".to_string());
    }
    Ok(())
}

/// Validate a laptop name
pub fn validate_laptop_name(name: &str) -> Result<(), String> {
    validate_text("Name", name, LAPTOP_NAME_MAX_LEN)
}

/// Validate a laptop description
pub fn validate_description(description: &str) -> Result<(), String> {
    validate_text("Description", description, DESCRIPTION_MAX_LEN)
}
