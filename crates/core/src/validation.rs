//! Input validation helpers shared by the request handlers.
//!
//! All helpers return [`CoreError::Validation`] so the API layer maps them to
//! 400 uniformly.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

/// Default page size for the public blog listing.
pub const DEFAULT_BLOG_LIMIT: i64 = 100;

/// Upper bound for any caller-supplied listing limit.
pub const MAX_LIST_LIMIT: i64 = 1000;

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Default ISO 4217 currency for payment orders.
pub const DEFAULT_CURRENCY: &str = "INR";

/// Deliberately loose: one `@`, no whitespace, a dot in the domain.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid regex"));

/// Lowercase ASCII words separated by single hyphens.
static SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("valid regex"));

/// Validate an email address shape.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid email address '{email}'"
        )))
    }
}

/// Validate a URL slug.
pub fn validate_slug(slug: &str) -> Result<(), CoreError> {
    if SLUG_RE.is_match(slug) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid slug '{slug}'. Use lowercase letters, digits and single hyphens"
        )))
    }
}

/// Reject empty or whitespace-only required text fields.
pub fn require_non_empty(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

/// Payment amounts are minor currency units and must be positive.
pub fn validate_amount(amount: i64) -> Result<(), CoreError> {
    if amount <= 0 {
        return Err(CoreError::Validation(format!(
            "Amount must be a positive number of minor currency units (got {amount})"
        )));
    }
    Ok(())
}

/// Resolve a caller-supplied listing limit: default when absent, clamped to
/// `1..=MAX_LIST_LIMIT` otherwise.
pub fn clamp_limit(limit: Option<i64>, default: i64) -> i64 {
    limit.unwrap_or(default).clamp(1, MAX_LIST_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_emails() {
        assert!(validate_email("buyer@example.com").is_ok());
        assert!(validate_email("first.last+tag@mail.example.co.in").is_ok());
    }

    #[test]
    fn rejects_malformed_emails() {
        for bad in ["", "no-at-sign", "two@@example.com", "a b@example.com", "x@localhost"] {
            assert!(validate_email(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn slugs() {
        assert!(validate_slug("sky-gardens-phase-2").is_ok());
        assert!(validate_slug("Sky-Gardens").is_err());
        assert!(validate_slug("double--hyphen").is_err());
        assert!(validate_slug("-leading").is_err());
        assert!(validate_slug("").is_err());
    }

    #[test]
    fn non_empty() {
        assert!(require_non_empty("name", "Asha").is_ok());
        let err = require_non_empty("name", "   ").unwrap_err();
        assert!(err.to_string().contains("name must not be empty"));
    }

    #[test]
    fn amounts_must_be_positive() {
        assert!(validate_amount(1).is_ok());
        assert!(validate_amount(0).is_err());
        assert!(validate_amount(-500).is_err());
    }

    #[test]
    fn limit_defaults_and_clamps() {
        assert_eq!(clamp_limit(None, DEFAULT_BLOG_LIMIT), 100);
        assert_eq!(clamp_limit(Some(5), DEFAULT_BLOG_LIMIT), 5);
        assert_eq!(clamp_limit(Some(0), DEFAULT_BLOG_LIMIT), 1);
        assert_eq!(clamp_limit(Some(-3), DEFAULT_BLOG_LIMIT), 1);
        assert_eq!(clamp_limit(Some(50_000), DEFAULT_BLOG_LIMIT), MAX_LIST_LIMIT);
    }
}
