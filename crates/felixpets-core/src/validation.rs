//! Form Validation Rules

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ValidationError;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Basic `local@domain.tld` shape check
pub fn is_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// True when the value has something other than whitespace
pub fn is_filled(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Check `(label, value)` pairs in order, reporting the first blank one
pub fn require_all<'a>(
    fields: impl IntoIterator<Item = (&'static str, &'a str)>,
) -> Result<(), ValidationError> {
    for (label, value) in fields {
        if !is_filled(value) {
            return Err(ValidationError::MissingField(label));
        }
    }
    Ok(())
}

/// Email rule shared by both forms; the stored value is the one checked
pub fn require_email(value: &str) -> Result<(), ValidationError> {
    if is_email(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_pattern() {
        assert!(is_email("a@b.co"));
        assert!(is_email("ana@x.com"));
        assert!(!is_email("a@b"));
        assert!(!is_email("a b@c.com"));
        assert!(!is_email("@b.co"));
        assert!(!is_email("a@@b.co"));
        assert!(!is_email(""));
    }

    #[test]
    fn test_require_all_reports_first_missing() {
        let result = require_all([("A", "x"), ("B", "   "), ("C", "")]);
        assert_eq!(result, Err(ValidationError::MissingField("B")));
        assert!(require_all([("A", "x"), ("B", "y")]).is_ok());
    }

    #[test]
    fn test_require_email_checks_raw_value() {
        assert!(require_email("ana@x.com").is_ok());
        assert_eq!(require_email(" ana@x.com "), Err(ValidationError::InvalidEmail));
        assert_eq!(require_email("ana@x.com\n"), Err(ValidationError::InvalidEmail));
        assert_eq!(require_email("ana"), Err(ValidationError::InvalidEmail));
    }
}
