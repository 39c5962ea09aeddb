use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[\d\s\-()]{10,}$").expect("phone pattern"));

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("This field is required")]
    Required,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a valid phone number")]
    InvalidPhone,
}

/// The input `type` that decides which rule applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Select,
    TextArea,
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

pub fn is_valid_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

/// Checks one field value. Optional email and phone fields may stay empty,
/// but anything typed into them has to have the right shape.
pub fn validate(kind: FieldKind, required: bool, raw: &str) -> Result<(), ValidationError> {
    let value = raw.trim();
    if value.is_empty() {
        return if required { Err(ValidationError::Required) } else { Ok(()) };
    }
    match kind {
        FieldKind::Email if !is_valid_email(value) => Err(ValidationError::InvalidEmail),
        FieldKind::Tel if !is_valid_phone(value) => Err(ValidationError::InvalidPhone),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user example.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("us er@example.com"));
    }

    #[test]
    fn phone_shapes() {
        assert!(is_valid_phone("+1 (555) 123-4567"));
        assert!(is_valid_phone("08012345678"));
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("555-CALL-NOW"));
        assert!(!is_valid_phone("++1 555 123 4567"));
    }

    #[test]
    fn required_fields_reject_blank_input() {
        assert_eq!(validate(FieldKind::Text, true, "   "), Err(ValidationError::Required));
        assert_eq!(validate(FieldKind::Select, true, ""), Err(ValidationError::Required));
        assert_eq!(validate(FieldKind::TextArea, true, "Need help"), Ok(()));
    }

    #[test]
    fn optional_fields_may_be_empty() {
        assert_eq!(validate(FieldKind::Tel, false, ""), Ok(()));
        assert_eq!(validate(FieldKind::Text, false, " "), Ok(()));
    }

    #[test]
    fn typed_fields_check_shape_after_trim() {
        assert_eq!(validate(FieldKind::Email, true, "  user@example.com "), Ok(()));
        assert_eq!(validate(FieldKind::Email, true, "user@"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate(FieldKind::Tel, false, "12345"), Err(ValidationError::InvalidPhone));
    }

    #[test]
    fn messages_are_user_facing() {
        assert_eq!(ValidationError::Required.to_string(), "This field is required");
        assert_eq!(ValidationError::InvalidEmail.to_string(), "Please enter a valid email address");
        assert_eq!(ValidationError::InvalidPhone.to_string(), "Please enter a valid phone number");
    }
}
