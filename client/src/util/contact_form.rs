//! Contact form model and client-side validation.
//!
//! The rules mirror the server's so most mistakes are caught before a
//! round-trip; the server still re-validates everything.

#[cfg(test)]
#[path = "contact_form_test.rs"]
mod contact_form_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const NAME_LEN: (usize, usize) = (2, 50);
pub const SUBJECT_LEN: (usize, usize) = (3, 100);
pub const MESSAGE_LEN: (usize, usize) = (10, 1000);
pub const MAX_RATING: u8 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

pub type FieldErrors = BTreeMap<ContactField, String>;

/// Draft contents of the contact form; serialized as the `/api/contact` body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub rating: u8,
}

impl ContactForm {
    /// # Errors
    ///
    /// Returns one message per invalid field.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        if let Some(msg) = check_length("Name", &self.name, NAME_LEN) {
            errors.insert(ContactField::Name, msg);
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.insert(ContactField::Email, "Email is required".to_owned());
        } else if !is_valid_email(&self.email) {
            errors.insert(ContactField::Email, "Please enter a valid email".to_owned());
        }

        if let Some(msg) = check_length("Subject", &self.subject, SUBJECT_LEN) {
            errors.insert(ContactField::Subject, msg);
        }
        if let Some(msg) = check_length("Message", &self.message, MESSAGE_LEN) {
            errors.insert(ContactField::Message, msg);
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Copy with the rating clamped into `0..=5`.
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self { rating: self.rating.min(MAX_RATING), ..self.clone() }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }

    #[must_use]
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }
}

fn check_length(label: &str, raw: &str, (min, max): (usize, usize)) -> Option<String> {
    let len = raw.trim().chars().count();
    if len == 0 {
        Some(format!("{label} is required"))
    } else if len < min {
        Some(format!("{label} must be at least {min} characters"))
    } else if len > max {
        Some(format!("{label} must be less than {max} characters"))
    } else {
        None
    }
}

/// `local@domain.tld` with no whitespace and a single `@`.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // Needs something on both sides of some dot in the domain.
    domain
        .char_indices()
        .filter(|&(_, c)| c == '.')
        .any(|(i, _)| i > 0 && i + 1 < domain.len())
}
