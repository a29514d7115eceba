//! Core data types for the page runtime

use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

lazy_static! {
    /// Email shape check: one-or-more non-whitespace non-`@` chars, `@`,
    /// same, `.`, same.
    static ref EMAIL_RE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
        .expect("email pattern is a valid regex");
}

// ============================================
// Image Resolution
// ============================================

/// State of one profile image resolution run.
///
/// Transitions strictly left-to-right: `Pending` -> `Resolved` or
/// `Pending` -> `Exhausted`. Both right-hand states are terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ResolutionState {
    /// No outcome yet; candidates still being tried
    Pending,
    /// A candidate loaded; holds the committed location
    Resolved(String),
    /// Every candidate failed; fallback presentation active
    Exhausted,
}

impl ResolutionState {
    /// Terminal states accept no further transitions
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// The committed location, if any
    pub fn location(&self) -> Option<&str> {
        match self {
            Self::Resolved(loc) => Some(loc),
            _ => None,
        }
    }
}

// ============================================
// Contact Form
// ============================================

/// The three contact form fields, captured fresh at submission time.
///
/// Serializes as the form-url-encoded POST body (`name`, `email`,
/// `message` keys).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFormFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFormFields {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Validate the fields: all three non-empty after trimming, email
    /// matching the required shape. Validation looks at trimmed values;
    /// the body sent on success carries the fields as captured.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.message.trim().is_empty()
        {
            return Err(ValidationError::MissingField);
        }
        if !EMAIL_RE.is_match(self.email.trim()) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }
}

/// Why local validation rejected a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValidationError {
    MissingField,
    InvalidEmail,
}

impl ValidationError {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingField => "missing field",
            Self::InvalidEmail => "invalid email",
        }
    }

    /// Text surfaced to the user on the notification banner
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::MissingField => "Please fill in all required fields.",
            Self::InvalidEmail => "Please enter a valid email address.",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one `submit` invocation. Drives the single notification
/// shown to the user; never queued or stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SubmissionOutcome {
    /// Local validation rejected the fields; no request was sent
    ValidationFailed(ValidationError),
    /// Request accepted with a success-range status
    Sent,
    /// Non-success status or transport error; fields preserved for retry
    NetworkFailed,
}

impl SubmissionOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, Self::Sent)
    }
}

// ============================================
// Notifications
// ============================================

/// Severity/styling class of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NotificationKind {
    Info,
    Success,
    Error,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    /// Leading glyph used when the notification is rendered
    pub fn icon(&self) -> char {
        match self {
            Self::Info => 'ℹ',
            Self::Success => '✔',
            Self::Error => '⚠',
        }
    }
}

/// A transient status message for the notification surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationMessage {
    pub text: String,
    pub kind: NotificationKind,
}

impl NotificationMessage {
    pub fn new(text: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

/// A notification currently occupying the surface.
///
/// The id is monotonically increasing per page view; a dismissal only
/// applies if its id still matches the displayed one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveNotification {
    pub id: u64,
    pub message: NotificationMessage,
    pub shown_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email_shapes() {
        for email in ["a@b.co", "jane@x.com", "first.last@sub.domain.org"] {
            let fields = ContactFormFields::new("Jane", email, "Hi");
            assert!(fields.validate().is_ok(), "{} should validate", email);
        }
    }

    #[test]
    fn test_invalid_email_shapes() {
        for email in ["foo", "foo@bar", "@bar.com", "foo@.", "a b@c.d", "a@b c.d"] {
            let fields = ContactFormFields::new("Jane", email, "Hi");
            assert_eq!(
                fields.validate(),
                Err(ValidationError::InvalidEmail),
                "{} should be rejected",
                email
            );
        }
    }

    #[test]
    fn test_missing_fields_after_trim() {
        let cases = [
            ContactFormFields::new("", "jane@x.com", "Hi"),
            ContactFormFields::new("Jane", "   ", "Hi"),
            ContactFormFields::new("Jane", "jane@x.com", "\t\n"),
        ];
        for fields in cases {
            assert_eq!(fields.validate(), Err(ValidationError::MissingField));
        }
    }

    #[test]
    fn test_missing_field_checked_before_email() {
        // Empty email reports the missing field, not the malformed shape
        let fields = ContactFormFields::new("Jane", "", "Hi");
        assert_eq!(fields.validate(), Err(ValidationError::MissingField));
    }

    #[test]
    fn test_validation_reason_strings() {
        assert_eq!(ValidationError::MissingField.as_str(), "missing field");
        assert_eq!(ValidationError::InvalidEmail.as_str(), "invalid email");
    }

    #[test]
    fn test_resolution_state_terminal() {
        assert!(!ResolutionState::Pending.is_terminal());
        assert!(ResolutionState::Resolved("/a.jpg".to_string()).is_terminal());
        assert!(ResolutionState::Exhausted.is_terminal());
    }

    #[test]
    fn test_whitespace_only_message_rejected() {
        let fields = ContactFormFields::new("Jane", "jane@x.com", "   ");
        assert_eq!(fields.validate(), Err(ValidationError::MissingField));
    }
}
