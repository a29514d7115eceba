//! Portfolio Page Runtime
//!
//! Headless client runtime for a personal portfolio page:
//! - Profile image resolution: ordered candidate trial with first-success
//!   commit and a static fallback on exhaustion
//! - Contact form: local validation, form-url-encoded POST, outcome
//!   notification, guaranteed submit-control restoration
//! - Single-slot transient notifications with timed auto-dismissal
//! - Page chrome state: menu, scroll effects, lazy loading, reduced motion

pub mod chrome;
pub mod config;
pub mod models;
pub mod notify;
pub mod page;
pub mod resolver;
pub mod submitter;

pub use config::PageConfig;
pub use models::{
    AppError, AppResult, ContactFormFields, ErrorCode, NotificationKind, NotificationMessage,
    ResolutionState, SubmissionOutcome, ValidationError,
};
pub use notify::NotificationCenter;
pub use page::{PageModel, SectionAnchor, SharedPage};
pub use resolver::{HttpImageProbe, ImageProbe, ImageResolver};
pub use submitter::{FormSubmitter, FormTransport, HttpFormTransport};
