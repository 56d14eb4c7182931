use lazy_static::lazy_static;
use regex::Regex;

use super::submission::FormFields;

pub const MIN_NAME_LEN: usize = 2;
pub const MIN_MESSAGE_LEN: usize = 10;

lazy_static! {
    static ref EMAIL_PATTERN: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Pure required-field check; a submission is only sent when this
/// returns true.
pub fn validate(fields: &FormFields) -> bool {
    if fields.name.trim().chars().count() < MIN_NAME_LEN {
        return false;
    }
    if !is_valid_email(&fields.email.trim().to_lowercase()) {
        return false;
    }
    if fields.message.trim().chars().count() < MIN_MESSAGE_LEN {
        return false;
    }
    true
}

/// Blur-time UX hint for the email field. Flags a non-empty value that
/// does not look like an email; never blocks submission.
pub fn live_email_feedback(value: &str) -> bool {
    !value.is_empty() && !is_valid_email(value)
}
