//! Payload validation helpers
//!
//! Small checks shared by the registration, blog, project and contact
//! payloads. A field counts as present when it is `Some` and not blank.

use std::sync::LazyLock;

use regex::Regex;

use crate::shared::error::SharedError;

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern is a valid regex")
});

/// Minimum accepted password length at registration
pub const MIN_PASSWORD_LEN: usize = 6;

/// True when the value is present and contains something besides whitespace
pub fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

/// Collect the names of every absent or blank field
///
/// Returns `Ok(())` when all fields are present, otherwise a
/// `SharedError::MissingFields` listing the offenders in the given order.
pub fn require_all(fields: &[(&'static str, Option<&str>)]) -> Result<(), SharedError> {
    let missing: Vec<&'static str> = fields
        .iter()
        .filter(|(_, value)| !is_present(*value))
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(SharedError::missing(missing))
    }
}

/// Check the `local@domain.tld` shape used for user and contact emails
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

/// Validate an email field, producing a field-scoped error
pub fn validate_email(email: &str) -> Result<(), SharedError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(SharedError::validation(
            "email",
            "Please provide a valid email address",
        ))
    }
}

/// Reject a patch that would blank a required text field
pub fn reject_blank(field: &'static str, value: Option<&str>) -> Result<(), SharedError> {
    match value {
        Some(v) if v.trim().is_empty() => Err(SharedError::validation(
            field,
            format!("{field} cannot be empty"),
        )),
        _ => Ok(()),
    }
}
