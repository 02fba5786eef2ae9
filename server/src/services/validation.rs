//! Contact form validation and sanitization.
//!
//! SYSTEM CONTEXT
//! ==============
//! The contact route runs three checks in order: `validate_contact` (shape
//! and length rules, per-field errors), `Sanitizer::sanitize` (rejects
//! script and SQL-injection patterns, strips HTML), and
//! `is_disposable_email` (domain blocklist).
//!
//! TRADE-OFFS
//! ==========
//! The SQL patterns are deliberately broad (`;`, `#`, `--`, and keywords such
//! as `DELETE`), so some honest messages are rejected. Nothing downstream
//! touches SQL; the filter exists to keep junk out of the webhook.

use std::ops::RangeInclusive;

use regex::Regex;

use crate::models::{ContactRequest, ContactSubmission, FieldError};

pub const NAME_LEN: RangeInclusive<usize> = 2..=50;
pub const SUBJECT_LEN: RangeInclusive<usize> = 3..=100;
pub const MESSAGE_LEN: RangeInclusive<usize> = 10..=1000;
pub const RATING_RANGE: RangeInclusive<i64> = 0..=5;
const EMAIL_MAX_LEN: usize = 254;

pub const DISPOSABLE_DOMAINS: &[&str] = &["tempmail.com", "throwaway.email", "guerrillamail.com"];

// =============================================================================
// VALIDATION
// =============================================================================

/// Check every field and normalize the survivors.
///
/// # Errors
///
/// Returns one `FieldError` per failing field, in field order.
pub fn validate_contact(req: ContactRequest) -> Result<ContactSubmission, Vec<FieldError>> {
    let mut errors = Vec::new();

    let name = required(&mut errors, "name", req.name)
        .and_then(|raw| check_length(&mut errors, "name", raw, &NAME_LEN))
        .and_then(|raw| check_name(&mut errors, &raw));
    let email = required(&mut errors, "email", req.email).and_then(|raw| check_email(&mut errors, &raw));
    let subject = required(&mut errors, "subject", req.subject)
        .and_then(|raw| check_length(&mut errors, "subject", raw, &SUBJECT_LEN))
        .and_then(|raw| normalized_text(&mut errors, "subject", &raw));
    let message = required(&mut errors, "message", req.message)
        .and_then(|raw| check_length(&mut errors, "message", raw, &MESSAGE_LEN))
        .and_then(|raw| normalized_text(&mut errors, "message", &raw));
    let rating = check_rating(&mut errors, req.rating.unwrap_or(0));

    match (name, email, subject, message, rating) {
        (Some(name), Some(email), Some(subject), Some(message), Some(rating)) if errors.is_empty() => {
            Ok(ContactSubmission { name, email, subject, message, rating })
        }
        _ => Err(errors),
    }
}

fn required(errors: &mut Vec<FieldError>, field: &str, value: Option<String>) -> Option<String> {
    if value.is_none() {
        errors.push(FieldError::new(field, "missing", "Field required"));
    }
    value
}

fn check_length(
    errors: &mut Vec<FieldError>,
    field: &str,
    raw: String,
    bounds: &RangeInclusive<usize>,
) -> Option<String> {
    let len = raw.chars().count();
    if len < *bounds.start() {
        errors.push(FieldError::new(
            field,
            "string_too_short",
            format!("String should have at least {} characters", bounds.start()),
        ));
        return None;
    }
    if len > *bounds.end() {
        errors.push(FieldError::new(
            field,
            "string_too_long",
            format!("String should have at most {} characters", bounds.end()),
        ));
        return None;
    }
    Some(raw)
}

fn is_name_char(c: char) -> bool {
    c.is_alphabetic() || c.is_whitespace() || c == '-' || c == '\''
}

fn check_name(errors: &mut Vec<FieldError>, raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !raw.chars().all(is_name_char) {
        errors.push(FieldError::new(
            "name",
            "value_error",
            "Name must contain only letters, spaces, hyphens, and apostrophes",
        ));
        return None;
    }
    Some(trimmed.to_owned())
}

/// Shape check for `local@domain.tld`; the domain is lowercased.
#[must_use]
pub fn normalize_email(raw: &str) -> Option<String> {
    let email = raw.trim();
    if email.is_empty() || email.len() > EMAIL_MAX_LEN || email.chars().any(char::is_whitespace) {
        return None;
    }
    let (local, domain) = email.split_once('@')?;
    if local.is_empty() || domain.contains('@') {
        return None;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|l| l.is_empty()) {
        return None;
    }
    Some(format!("{local}@{}", domain.to_ascii_lowercase()))
}

fn check_email(errors: &mut Vec<FieldError>, raw: &str) -> Option<String> {
    let email = normalize_email(raw);
    if email.is_none() {
        errors.push(FieldError::new("email", "value_error", "value is not a valid email address"));
    }
    email
}

/// Collapse whitespace runs to one space and trim.
#[must_use]
pub fn collapse_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn normalized_text(errors: &mut Vec<FieldError>, field: &str, raw: &str) -> Option<String> {
    let text = collapse_whitespace(raw);
    if text.is_empty() {
        errors.push(FieldError::new(field, "string_too_short", "String should not be blank"));
        return None;
    }
    Some(text)
}

fn check_rating(errors: &mut Vec<FieldError>, rating: i64) -> Option<u8> {
    if rating < *RATING_RANGE.start() {
        errors.push(FieldError::new("rating", "greater_than_equal", "Input should be greater than or equal to 0"));
        return None;
    }
    if rating > *RATING_RANGE.end() {
        errors.push(FieldError::new("rating", "less_than_equal", "Input should be less than or equal to 5"));
        return None;
    }
    u8::try_from(rating).ok()
}

// =============================================================================
// SANITIZATION
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SanitizeError {
    #[error("Dangerous content detected in {field}")]
    DangerousContent { field: &'static str },
    #[error("Suspicious input detected in {field}")]
    SuspiciousInput { field: &'static str },
}

const SCRIPT_PATTERNS: &[&str] = &[r"<script", r"javascript:", r"on\w+\s*=", r"<iframe", r"<object", r"<embed"];

const SQL_PATTERNS: &[&str] = &[
    r"'\s*(OR|AND)\s*'",
    r"--|#|/\*|\*/",
    r";|\|\||&&",
    r"\bUNION\b.*\bSELECT\b",
    r"\bDROP\b|\bDELETE\b|\bINSERT\b",
    r"\bEXEC\b|\bEXECUTE\b",
];

/// Compiled pattern sets. Built once at startup and shared through
/// `AppState`.
#[derive(Debug, Clone)]
pub struct Sanitizer {
    script: Vec<Regex>,
    sql: Vec<Regex>,
    tag: Regex,
}

impl Sanitizer {
    /// # Errors
    ///
    /// Returns the regex error if a built-in pattern fails to compile.
    pub fn new() -> Result<Self, regex::Error> {
        let compile = |patterns: &[&str]| -> Result<Vec<Regex>, regex::Error> {
            patterns.iter().map(|p| Regex::new(&format!("(?i){p}"))).collect()
        };
        Ok(Self { script: compile(SCRIPT_PATTERNS)?, sql: compile(SQL_PATTERNS)?, tag: Regex::new(r"<[^>]*>")? })
    }

    #[must_use]
    pub fn has_script_content(&self, text: &str) -> bool {
        self.script.iter().any(|re| re.is_match(text))
    }

    #[must_use]
    pub fn has_sql_injection(&self, text: &str) -> bool {
        self.sql.iter().any(|re| re.is_match(text))
    }

    /// Remove every HTML tag, keeping inner text.
    #[must_use]
    pub fn strip_html(&self, text: &str) -> String {
        self.tag.replace_all(text, "").trim().to_owned()
    }

    /// Reject hostile text fields, then strip markup from the rest.
    ///
    /// # Errors
    ///
    /// Returns `SanitizeError` naming the first offending field.
    pub fn sanitize(&self, submission: ContactSubmission) -> Result<ContactSubmission, SanitizeError> {
        let ContactSubmission { name, email, subject, message, rating } = submission;
        Ok(ContactSubmission {
            name: self.clean_field("name", &name)?,
            email: self.clean_field("email", &email)?,
            subject: self.clean_field("subject", &subject)?,
            message: self.clean_field("message", &message)?,
            rating,
        })
    }

    fn clean_field(&self, field: &'static str, value: &str) -> Result<String, SanitizeError> {
        if self.has_script_content(value) {
            tracing::warn!(field, "potential XSS attempt detected");
            return Err(SanitizeError::DangerousContent { field });
        }
        if self.has_sql_injection(value) {
            tracing::warn!(field, "potential SQL injection attempt detected");
            return Err(SanitizeError::SuspiciousInput { field });
        }
        Ok(self.strip_html(value))
    }
}

/// Whether the email's domain is on the disposable-address blocklist.
#[must_use]
pub fn is_disposable_email(email: &str) -> bool {
    let domain = email.rsplit('@').next().unwrap_or_default().to_ascii_lowercase();
    DISPOSABLE_DOMAINS.contains(&domain.as_str())
}

#[cfg(test)]
#[path = "validation_test.rs"]
mod tests;
