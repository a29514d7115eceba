//! Data model: core types and the application error taxonomy

pub mod errors;
pub mod types;

pub use errors::{AppError, AppResult, ErrorCode};
pub use types::{
    ActiveNotification, ContactFormFields, NotificationKind, NotificationMessage,
    ResolutionState, SubmissionOutcome, ValidationError,
};
