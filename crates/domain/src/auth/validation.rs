//! Login and sign-up form validation.
//!
//! Field messages match what the login and sign-up pages show next to
//! each input.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use super::types::{LoginRequest, SignUpRequest};
use crate::error::{DomainError, DomainResult};

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));

/// Minimum accepted password length.
const MIN_PASSWORD_LEN: usize = 6;

/// Per-field validation messages, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<String, String>);

impl FormErrors {
    /// Records a message for a field. The first message for a field wins.
    pub fn insert(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_insert_with(|| message.into());
    }

    /// Returns the message for a field, if any.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Returns true if no field failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of failing fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn into_result(self) -> DomainResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(DomainError::InvalidForm(self))
        }
    }
}

impl std::fmt::Display for FormErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

fn check_email(errors: &mut FormErrors, email: &str) {
    if email.is_empty() {
        errors.insert("email", "Email is required");
    } else if !EMAIL_PATTERN.is_match(email) {
        errors.insert("email", "Please enter a valid email address");
    }
}

fn check_password(errors: &mut FormErrors, password: &str) {
    if password.is_empty() {
        errors.insert("password", "Password is required");
    } else if password.chars().count() < MIN_PASSWORD_LEN {
        errors.insert("password", "Password must be at least 6 characters");
    }
}

/// Raw input of the login form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    /// Email field.
    pub email: String,
    /// Password field.
    pub password: String,
}

impl LoginForm {
    /// Creates a login form.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Validates the form and converts it to a login request.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidForm`] listing every failing field.
    pub fn validate(&self) -> DomainResult<LoginRequest> {
        let mut errors = FormErrors::default();
        check_email(&mut errors, &self.email);
        check_password(&mut errors, &self.password);
        errors.into_result()?;

        Ok(LoginRequest {
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}

/// Raw input of the sign-up form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignUpForm {
    /// First name field.
    pub first_name: String,
    /// Last name field.
    pub last_name: String,
    /// Email field.
    pub email: String,
    /// Password field.
    pub password: String,
    /// Password confirmation field.
    pub confirm_password: String,
    /// Role selector.
    pub role: String,
}

impl SignUpForm {
    /// Validates the form and converts it to a sign-up request.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidForm`] listing every failing field.
    pub fn validate(&self) -> DomainResult<SignUpRequest> {
        let mut errors = FormErrors::default();

        if self.first_name.trim().is_empty() {
            errors.insert("firstName", "First Name is required");
        }
        if self.last_name.trim().is_empty() {
            errors.insert("lastName", "Last Name is required");
        }
        check_email(&mut errors, &self.email);
        check_password(&mut errors, &self.password);
        if self.confirm_password.is_empty() {
            errors.insert("confirmPassword", "Please confirm your password");
        } else if self.confirm_password != self.password {
            errors.insert("confirmPassword", "Passwords do not match");
        }
        if self.role.trim().is_empty() {
            errors.insert("role", "Role is required");
        }
        errors.into_result()?;

        Ok(SignUpRequest {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.clone(),
            password: self.password.clone(),
            role: self.role.trim().to_string(),
        })
    }
}
