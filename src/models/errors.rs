//! Centralized error handling
//!
//! Every failure carries a unique string code for log filtering.
//!
//! Error codes follow pattern: CATEGORY_SPECIFIC_ERROR
//! - IMG_xxx: image resolution errors
//! - FORM_xxx: contact form validation errors
//! - NET_xxx: network transport errors
//! - CFG_xxx: configuration errors

use std::fmt;

/// Application-wide error type
#[derive(Debug)]
pub struct AppError {
    /// Unique error code for logging/monitoring
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Optional underlying error
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new AppError
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Create AppError with source error
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Get error code as string (for logging)
    pub fn code_str(&self) -> &'static str {
        self.code.as_str()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Unique error codes for monitoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // ============================================
    // Image Resolution Errors
    // ============================================
    /// A single candidate location failed to load
    ImageLoadFailed,
    /// Every candidate in the list failed
    ImageCandidatesExhausted,

    // ============================================
    // Form Validation Errors
    // ============================================
    /// A required field is empty after trimming
    FormMissingField,
    /// Email does not match the required shape
    FormInvalidEmail,

    // ============================================
    // Network Errors
    // ============================================
    /// Request could not be sent (connect failure, DNS, offline)
    NetworkRequestFailed,
    /// Response arrived with a non-success status
    NetworkBadStatus,
    /// Request timed out
    NetworkTimeout,

    // ============================================
    // Configuration Errors
    // ============================================
    /// Invalid configuration value
    ConfigInvalidValue,

    // ============================================
    // Generic
    // ============================================
    /// Unknown error
    Unknown,
}

impl ErrorCode {
    /// Get string representation of error code
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ImageLoadFailed => "IMG_LOAD_FAILED",
            Self::ImageCandidatesExhausted => "IMG_CANDIDATES_EXHAUSTED",
            Self::FormMissingField => "FORM_MISSING_FIELD",
            Self::FormInvalidEmail => "FORM_INVALID_EMAIL",
            Self::NetworkRequestFailed => "NET_REQUEST_FAILED",
            Self::NetworkBadStatus => "NET_BAD_STATUS",
            Self::NetworkTimeout => "NET_TIMEOUT",
            Self::ConfigInvalidValue => "CFG_INVALID_VALUE",
            Self::Unknown => "UNKNOWN_ERROR",
        }
    }

    /// Check if the routine recovers locally from this error.
    ///
    /// A failed candidate advances the resolver to the next one; nothing
    /// else is retried (a failed submission waits for the user).
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::ImageLoadFailed)
    }
}

// ============================================
// Convenience constructors
// ============================================

impl AppError {
    /// Candidate image failed to load
    pub fn image_load_failed(location: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ImageLoadFailed,
            format!("Candidate failed to load: {}", location.into()),
        )
    }

    /// All candidates failed
    pub fn candidates_exhausted(tried: usize) -> Self {
        Self::new(
            ErrorCode::ImageCandidatesExhausted,
            format!("All {} image candidates failed", tried),
        )
    }

    /// Required field empty after trim
    pub fn missing_field(field: &str) -> Self {
        Self::new(
            ErrorCode::FormMissingField,
            format!("Required field is empty: {}", field),
        )
    }

    /// Malformed email address
    pub fn invalid_email(value: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::FormInvalidEmail,
            format!("Invalid email address: {}", value.into()),
        )
    }

    /// Non-success HTTP status
    pub fn bad_status(status: u16) -> Self {
        Self::new(ErrorCode::NetworkBadStatus, format!("HTTP status {}", status))
    }

    /// Invalid configuration value
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalidValue, msg)
    }
}

// ============================================
// Result type alias
// ============================================

/// Application Result type
pub type AppResult<T> = Result<T, AppError>;

// ============================================
// Conversion from common error types
// ============================================

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::new(ErrorCode::NetworkTimeout, "Request timeout")
        } else if err.is_connect() {
            Self::new(ErrorCode::NetworkRequestFailed, "Connection failed")
        } else {
            Self::with_source(ErrorCode::NetworkRequestFailed, "Request failed", err)
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(ErrorCode::Unknown, "IO error", err)
    }
}
