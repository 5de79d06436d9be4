use crate::errors::{CoreError, Result};
use regex::Regex;
use std::sync::OnceLock;
use uuid::Uuid;

/// Check that every listed argument is non-blank.
///
/// Mirrors the validation every endpoint method runs before a request is
/// built: the first blank entry fails the whole call with the argument name.
pub fn validate_required(args: &[(&str, &str)]) -> Result<()> {
    for (name, value) in args {
        if value.trim().is_empty() {
            return Err(CoreError::MissingArgument((*name).to_string()));
        }
    }
    Ok(())
}

/// Fuzzy GUID format check, hyphenated or not.
///
/// The legacy events endpoint embeds the API secret and access token in the
/// URL path and rejects anything that does not look like a GUID, so the
/// check runs client-side first.
pub fn is_guid(value: &str) -> bool {
    Uuid::parse_str(value.trim()).is_ok()
}

/// Validate a GUID-format argument, naming it in the error.
pub fn require_guid(name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CoreError::MissingArgument(name.to_string()));
    }
    if !is_guid(value) {
        return Err(CoreError::ValidationFailed(format!(
            "{} is not in GUID format",
            name
        )));
    }
    Ok(())
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap())
}

/// Loose email format check; the server stays the authority.
pub fn is_email(value: &str) -> bool {
    email_regex().is_match(value.trim())
}

/// Validate an email-format argument, naming it in the error.
pub fn require_email(name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CoreError::MissingArgument(name.to_string()));
    }
    if !is_email(value) {
        return Err(CoreError::ValidationFailed(format!(
            "{} is not a valid email address",
            name
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required() {
        assert!(validate_required(&[("email", "a@b.com"), ("password", "x")]).is_ok());

        let err = validate_required(&[("email", "a@b.com"), ("password", "  ")]).unwrap_err();
        assert!(err.to_string().contains("password"));

        assert!(validate_required(&[]).is_ok());
    }

    #[test]
    fn test_guid_formats() {
        assert!(is_guid("c1b1e1a0-3b1f-4d6e-9a23-5a0857c12345"));
        assert!(is_guid("c1b1e1a03b1f4d6e9a235a0857c12345"));
        assert!(is_guid("  c1b1e1a0-3b1f-4d6e-9a23-5a0857c12345  "));

        assert!(!is_guid("not-a-guid"));
        assert!(!is_guid(""));
        assert!(!is_guid("c1b1e1a0-3b1f-4d6e"));
    }

    #[test]
    fn test_require_guid_errors() {
        assert!(require_guid("api_secret", "c1b1e1a0-3b1f-4d6e-9a23-5a0857c12345").is_ok());

        let err = require_guid("api_secret", "xyz").unwrap_err();
        assert!(err.to_string().contains("api_secret"));

        let err = require_guid("api_secret", "").unwrap_err();
        assert!(matches!(err, CoreError::MissingArgument(_)));
    }

    #[test]
    fn test_email_formats() {
        assert!(is_email("user@example.com"));
        assert!(is_email("first.last+tag@sub.example.co"));

        assert!(!is_email("user@"));
        assert!(!is_email("@example.com"));
        assert!(!is_email("user example.com"));
        assert!(!is_email("user@example"));
    }
}
