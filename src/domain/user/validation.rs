//! Login/signup form validation

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::entity::Role;

/// Errors raised when parsing user-facing values
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("Unknown role '{0}'. Expected one of: Admin, User, Wasteworker")]
    UnknownRole(String),
}

const MIN_PASSWORD_LENGTH: usize = 6;

/// Loose shape check, not RFC validation
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

/// A login or signup submission
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl Credentials {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            role,
        }
    }
}

/// Form fields that can carry an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CredentialField {
    Name,
    Email,
    Password,
}

impl CredentialField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
        }
    }
}

impl std::fmt::Display for CredentialField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-field error messages. Only failing fields are present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<CredentialField, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// The submission is accepted iff no field failed
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get(&self, field: CredentialField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: CredentialField) -> bool {
        self.errors.contains_key(&field)
    }

    /// Drop the error of a field the user just edited
    pub fn clear_field(&mut self, field: CredentialField) {
        self.errors.remove(&field);
    }

    pub fn iter(&self) -> impl Iterator<Item = (CredentialField, &str)> {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    fn insert(&mut self, field: CredentialField, message: &str) {
        self.errors.insert(field, message.to_string());
    }
}

/// Validate a submission.
///
/// Every field is checked so that all problems surface at once. The role is
/// picked from a fixed set and is never checked.
pub fn validate_credentials(credentials: &Credentials) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if credentials.name.trim().is_empty() {
        errors.insert(CredentialField::Name, "Name is required");
    }

    if credentials.email.trim().is_empty() {
        errors.insert(CredentialField::Email, "Email is required");
    } else if !EMAIL_PATTERN.is_match(&credentials.email) {
        errors.insert(CredentialField::Email, "Invalid email format");
    }

    if credentials.password.is_empty() {
        errors.insert(CredentialField::Password, "Password is required");
    } else if credentials.password.chars().count() < MIN_PASSWORD_LENGTH {
        errors.insert(
            CredentialField::Password,
            "Password must be at least 6 characters",
        );
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds(name: &str, email: &str, password: &str) -> Credentials {
        Credentials::new(name, email, password, Role::User)
    }

    #[test]
    fn test_valid_submission() {
        let errors = validate_credentials(&creds("Asha", "asha@city.gov", "secret1"));
        assert!(errors.is_valid());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_every_role_accepted() {
        for role in Role::ALL {
            let c = Credentials::new("Asha", "a@b.c", "123456", role);
            assert!(validate_credentials(&c).is_valid());
        }
    }

    #[test]
    fn test_name_required_regardless_of_other_fields() {
        for (email, password) in [("", ""), ("a@b.c", "123456"), ("abc", "12")] {
            let errors = validate_credentials(&creds("", email, password));
            assert_eq!(errors.get(CredentialField::Name), Some("Name is required"));
        }
    }

    #[test]
    fn test_whitespace_name_rejected() {
        let errors = validate_credentials(&creds("   \t", "a@b.c", "123456"));
        assert_eq!(errors.get(CredentialField::Name), Some("Name is required"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_email_cases() {
        let ok = validate_credentials(&creds("A", "a@b.c", "123456"));
        assert!(!ok.contains(CredentialField::Email));

        let bad = validate_credentials(&creds("A", "abc", "123456"));
        assert_eq!(bad.get(CredentialField::Email), Some("Invalid email format"));

        let empty = validate_credentials(&creds("A", "", "123456"));
        assert_eq!(empty.get(CredentialField::Email), Some("Email is required"));

        let blank = validate_credentials(&creds("A", "   ", "123456"));
        assert_eq!(blank.get(CredentialField::Email), Some("Email is required"));
    }

    #[test]
    fn test_email_shape_is_loose() {
        for email in ["a@b.c", "first.last@sub.domain.org", "x@y.z.w"] {
            let errors = validate_credentials(&creds("A", email, "123456"));
            assert!(errors.is_valid(), "{email} should be accepted");
        }

        for email in ["a@b", "ab.c", "a @b.c", "@.", "a@ .c"] {
            let errors = validate_credentials(&creds("A", email, "123456"));
            assert_eq!(
                errors.get(CredentialField::Email),
                Some("Invalid email format"),
                "{email} should be rejected"
            );
        }
    }

    #[test]
    fn test_password_length_boundary() {
        let short = validate_credentials(&creds("A", "a@b.c", "12345"));
        assert_eq!(
            short.get(CredentialField::Password),
            Some("Password must be at least 6 characters")
        );

        let exact = validate_credentials(&creds("A", "a@b.c", "123456"));
        assert!(exact.is_valid());
    }

    #[test]
    fn test_password_required() {
        let errors = validate_credentials(&creds("A", "a@b.c", ""));
        assert_eq!(
            errors.get(CredentialField::Password),
            Some("Password is required")
        );
    }

    #[test]
    fn test_password_counts_characters() {
        let errors = validate_credentials(&creds("A", "a@b.c", "pässwö"));
        assert!(errors.is_valid());
    }

    #[test]
    fn test_all_errors_reported_together() {
        let errors = validate_credentials(&creds(" ", "nope", "123"));
        let fields: Vec<_> = errors.iter().map(|(f, _)| f).collect();
        assert_eq!(
            fields,
            vec![
                CredentialField::Name,
                CredentialField::Email,
                CredentialField::Password
            ]
        );
    }

    #[test]
    fn test_clear_field() {
        let mut errors = validate_credentials(&creds("", "", ""));
        assert_eq!(errors.len(), 3);

        errors.clear_field(CredentialField::Email);
        assert!(!errors.contains(CredentialField::Email));
        assert_eq!(errors.len(), 2);
    }
}
