//! User-facing wording for known authentication failures.
//!
//! Handlers pass internal error codes through `format_auth_error` before
//! putting them in a response body; anything not in the known set passes
//! through unchanged so unexpected backend messages still surface.

pub const INVALID_CREDENTIALS: &str = "invalid_credentials";
pub const EMAIL_TAKEN: &str = "email_taken";
pub const WEAK_PASSWORD: &str = "weak_password";
pub const RATE_LIMITED: &str = "rate_limited";
pub const RESET_TOKEN_INVALID: &str = "reset_token_invalid";

/// Map a known error code to its user-facing message. Unrecognized strings
/// are returned as-is.
pub fn format_auth_error(raw: &str) -> String {
    match raw {
        INVALID_CREDENTIALS => "Incorrect email or password.".to_string(),
        EMAIL_TAKEN => "An account with this email already exists.".to_string(),
        WEAK_PASSWORD => "Password must be at least 8 characters.".to_string(),
        RATE_LIMITED => "Too many attempts. Please try again later.".to_string(),
        RESET_TOKEN_INVALID => "This reset link is invalid or has expired.".to_string(),
        other => other.to_string(),
    }
}
