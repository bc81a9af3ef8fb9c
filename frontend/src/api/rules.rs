//! Field rules for request payloads that validator's built-ins don't cover.

use regex::Regex;
use std::{borrow::Cow, sync::LazyLock};
use validator::ValidationError;

use super::types::INVALID_EMAIL_MESSAGE;

/// Dotted domain ending in an alphabetic TLD of two or more letters.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+-]@([A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$").unwrap()
});

/// Validates email syntax.
///
/// Requirements:
/// - local part does not start with `.` and ends with a non-dot character
/// - no `..` anywhere
/// - no IP literals, no dotless hosts, TLD is 2+ letters
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.starts_with('.') || email.contains("..") || !EMAIL_REGEX.is_match(email) {
        return Err(
            ValidationError::new("email").with_message(Cow::Borrowed(INVALID_EMAIL_MESSAGE))
        );
    }
    Ok(())
}
