//! Field rules for supplier records.
//!
//! A supplier needs a non-blank name and an email of the form
//! `local@domain.tld`, where:
//! - the local part uses letters, digits and `. _ % + -`
//! - the domain has at least one dot and a top-level part of two or more letters
//!
//! These are syntactic checks only; nothing here talks to a mail server.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

/// Checks that `email` is syntactically well formed.
///
/// # Examples
/// ```
/// use suppliers::services::validation::is_valid_email;
///
/// assert!(is_valid_email("buyer@acme.com"));
/// assert!(is_valid_email("first.last+orders@mail.example.co"));
///
/// assert!(!is_valid_email(""));
/// assert!(!is_valid_email("buyer"));
/// assert!(!is_valid_email("buyer@acme"));
/// assert!(!is_valid_email("buyer @acme.com"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Validates the fields of a new supplier. Inputs are expected to be trimmed.
pub fn validate_supplier(name: &str, email: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if email.is_empty() {
        return Err(ValidationError::EmptyEmail);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail(email.to_string()));
    }
    Ok(())
}

/// Error type for supplier field validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Imported record has an empty id
    EmptyId,
    /// Name is empty or only whitespace
    EmptyName,
    /// Email is empty or only whitespace
    EmptyEmail,
    /// Email does not look like an address
    InvalidEmail(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyId => write!(f, "id cannot be empty"),
            ValidationError::EmptyName => write!(f, "name cannot be empty"),
            ValidationError::EmptyEmail => write!(f, "email cannot be empty"),
            ValidationError::InvalidEmail(email) => {
                write!(f, "invalid email address '{}'", email)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
