//! Local field rules
//!
//! These checks run before anything is sent. The backend re-validates every
//! submission and its answer always wins.

use super::field::{FieldKind, FieldValue, FormField};
use regex::Regex;
use std::sync::LazyLock;

/// Minimum password length accepted on create
pub const MIN_PASSWORD_LEN: usize = 8;

/// Minimum digit count for a phone number, separators ignored
pub const MIN_PHONE_DIGITS: usize = 10;

pub const INVALID_EMAIL: &str = "Please enter a valid email address";
pub const INVALID_PHONE: &str = "Please enter a valid phone number";
pub const SHORT_PASSWORD: &str = "Password must be at least 8 characters";

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Keep only the digits of a phone input
pub fn phone_digits(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Group phone digits into 3-3-4 blocks (`555-123-4567`).
///
/// Digits beyond the tenth stay in the last block, so formatting an already
/// formatted value returns it unchanged.
pub fn format_phone(input: &str) -> String {
    let digits = phone_digits(input);
    let mut out = String::with_capacity(digits.len() + 2);
    for (i, c) in digits.chars().enumerate() {
        if i == 3 || i == 6 {
            out.push('-');
        }
        out.push(c);
    }
    out
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value.trim())
}

/// Apply the rules for `field`'s kind to `value`.
///
/// Returns the message to show when the value is rejected.
pub fn check(field: &FormField, value: &FieldValue) -> Result<(), String> {
    let text = match value {
        FieldValue::Text(s) => s.as_str(),
        // Flags, numbers and roles are always well-formed
        _ => return Ok(()),
    };

    if text.trim().is_empty() {
        return if field.required {
            Err(format!("{} is required", field.label))
        } else {
            Ok(())
        };
    }

    match field.kind {
        FieldKind::Email if !is_valid_email(text) => Err(INVALID_EMAIL.to_string()),
        FieldKind::Phone if phone_digits(text).len() < MIN_PHONE_DIGITS => {
            Err(INVALID_PHONE.to_string())
        }
        FieldKind::Password if text.chars().count() < MIN_PASSWORD_LEN => {
            Err(SHORT_PASSWORD.to_string())
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(value: &str) -> FieldValue {
        FieldValue::Text(value.to_string())
    }

    #[test]
    fn test_format_phone_groups_digits() {
        assert_eq!(format_phone("5551234567"), "555-123-4567");
        assert_eq!(format_phone("(555) 123 4567"), "555-123-4567");
        assert_eq!(format_phone("5551"), "555-1");
        assert_eq!(format_phone("555123"), "555-123");
        assert_eq!(format_phone(""), "");
    }

    #[test]
    fn test_format_phone_is_idempotent() {
        for input in ["5551234567", "555-12", "12", "55512345678901", "a5b5c5"] {
            let once = format_phone(input);
            assert_eq!(format_phone(&once), once, "input {input:?}");
        }
    }

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("ada@example.com"));
        assert!(!is_valid_email("bad-email"));
        assert!(!is_valid_email("ada@example"));
        assert!(!is_valid_email("a da@example.com"));
    }

    #[test]
    fn test_required_text() {
        let field = FormField::text("name", "Name", false).required();
        assert_eq!(check(&field, &text("  ")), Err("Name is required".to_string()));
        assert_eq!(check(&field, &text("Ada")), Ok(()));
    }

    #[test]
    fn test_optional_blank_is_valid() {
        let phone = FormField::phone("phone", "Phone");
        assert_eq!(check(&phone, &text("")), Ok(()));
        let password = FormField::password("password", "Password");
        assert_eq!(check(&password, &text("")), Ok(()));
    }

    #[test]
    fn test_invalid_email_message() {
        let field = FormField::email("email", "Email").required();
        assert_eq!(check(&field, &text("bad-email")), Err(INVALID_EMAIL.to_string()));
    }

    #[test]
    fn test_phone_needs_ten_digits() {
        let field = FormField::phone("phone", "Phone");
        assert_eq!(check(&field, &text("555-123-456")), Err(INVALID_PHONE.to_string()));
        assert_eq!(check(&field, &text("555-123-4567")), Ok(()));
    }

    #[test]
    fn test_password_length() {
        let field = FormField::password("password", "Password").required();
        assert_eq!(check(&field, &text("short")), Err(SHORT_PASSWORD.to_string()));
        assert_eq!(check(&field, &text("longenough")), Ok(()));
        assert_eq!(check(&field, &text("")), Err("Password is required".to_string()));
    }

    #[test]
    fn test_non_text_values_pass() {
        let field = FormField::flag("active", "Active");
        assert_eq!(check(&field, &FieldValue::Flag(false)), Ok(()));
    }
}
