//! Contact form submission
//!
//! Validates the captured fields locally, posts them form-url-encoded to
//! the configured endpoint, and surfaces the outcome on the notification
//! surface. The submit control is disabled for the duration of the
//! request and restored exactly once on every exit path.

use crate::models::errors::{AppError, AppResult};
use crate::models::types::{ContactFormFields, NotificationKind, SubmissionOutcome};
use crate::notify::NotificationCenter;
use crate::page::model::SharedPage;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use std::time::Duration;
use tracing::{error, info, warn};

/// Transient label shown on the submit control while the request is
/// in flight
pub const SENDING_LABEL: &str = "Sending...";

/// Default timeout for the submission request
pub const DEFAULT_SUBMIT_TIMEOUT: Duration = Duration::from_secs(10);

const SUBMIT_USER_AGENT: &str = concat!("portfolio-page/", env!("CARGO_PKG_VERSION"));

const MSG_SENT: &str = "Thanks! Message received. I will get back to you soon.";
const MSG_SEND_FAILED: &str = "There was a problem sending the message. Try again later.";
const MSG_NETWORK_ERROR: &str = "Network error while sending message.";

/// One POST of the three fields, form-url-encoded. Returns the response
/// status code; transport-level failures surface as errors.
#[async_trait]
pub trait FormTransport: Send + Sync {
    async fn post_form(&self, endpoint: &str, fields: &ContactFormFields) -> AppResult<u16>;
}

/// Production transport backed by reqwest. `.form(..)` url-encodes the
/// body and sets `Content-Type: application/x-www-form-urlencoded`.
pub struct HttpFormTransport {
    client: reqwest::Client,
}

impl HttpFormTransport {
    pub fn new() -> AppResult<Self> {
        Self::with_timeout(DEFAULT_SUBMIT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> AppResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(SUBMIT_USER_AGENT));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(AppError::from)?;

        Ok(Self { client })
    }
}

#[async_trait]
impl FormTransport for HttpFormTransport {
    async fn post_form(&self, endpoint: &str, fields: &ContactFormFields) -> AppResult<u16> {
        let response = self.client.post(endpoint).form(fields).send().await?;
        Ok(response.status().as_u16())
    }
}

/// Restores the submit control when dropped. Drop runs exactly once on
/// every exit path, including an unwinding panic.
struct SubmitGuard {
    page: SharedPage,
    original_label: Option<String>,
}

impl SubmitGuard {
    fn engage(page: &SharedPage) -> Self {
        let original_label = page
            .write()
            .ok()
            .map(|mut page| page.disable_submit(SENDING_LABEL));
        Self {
            page: page.clone(),
            original_label,
        }
    }
}

impl Drop for SubmitGuard {
    fn drop(&mut self) {
        if let Some(label) = self.original_label.take() {
            if let Ok(mut page) = self.page.write() {
                page.restore_submit(label);
            }
        }
    }
}

/// Contact form submitter.
///
/// `submit` takes `&mut self`: a second submission cannot begin on the
/// same submitter until the current one resolves.
pub struct FormSubmitter<T: FormTransport> {
    transport: T,
    endpoint: String,
}

impl<T: FormTransport> FormSubmitter<T> {
    pub fn new(transport: T, endpoint: impl Into<String>) -> Self {
        Self {
            transport,
            endpoint: endpoint.into(),
        }
    }

    /// Handle one user-initiated submission.
    ///
    /// Validation runs before anything touches the network; the request
    /// is issued at most once; the submit control restoration never
    /// executes before the request settles.
    pub async fn submit(
        &mut self,
        page: &SharedPage,
        notifier: &NotificationCenter,
    ) -> SubmissionOutcome {
        // Captured fresh per invocation
        let fields = page
            .read()
            .map(|page| page.capture_contact_fields())
            .unwrap_or_else(|_| ContactFormFields::new("", "", ""));

        if let Err(reason) = fields.validate() {
            warn!("⚠️ Submission rejected: {}", reason);
            notifier.show(reason.user_message(), NotificationKind::Error);
            return SubmissionOutcome::ValidationFailed(reason);
        }

        let _guard = SubmitGuard::engage(page);

        match self.transport.post_form(&self.endpoint, &fields).await {
            Ok(status) if (200..300).contains(&status) => {
                info!("✅ Contact form sent (HTTP {})", status);
                if let Ok(mut page) = page.write() {
                    page.clear_contact_fields();
                }
                notifier.show(MSG_SENT, NotificationKind::Success);
                SubmissionOutcome::Sent
            }
            Ok(status) => {
                warn!("⚠️ Contact form rejected with HTTP {}", status);
                notifier.show(MSG_SEND_FAILED, NotificationKind::Error);
                SubmissionOutcome::NetworkFailed
            }
            Err(e) => {
                error!("❌ Contact form transport error ({}): {}", e.code_str(), e);
                notifier.show(MSG_NETWORK_ERROR, NotificationKind::Error);
                SubmissionOutcome::NetworkFailed
            }
        }
        // _guard drops here: control re-enabled after the request settled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::types::ValidationError;
    use crate::page::model::PageModel;
    use std::sync::Mutex;

    /// Transport double: scripted status (or transport error), records
    /// each call and the submit-control state observed mid-flight.
    struct ScriptedTransport {
        status: Option<u16>,
        page: SharedPage,
        calls: Mutex<Vec<ContactFormFields>>,
        observed_label: Mutex<Option<String>>,
    }

    impl ScriptedTransport {
        fn new(status: Option<u16>, page: SharedPage) -> Self {
            Self {
                status,
                page,
                calls: Mutex::new(Vec::new()),
                observed_label: Mutex::new(None),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.lock().expect("calls lock").len()
        }
    }

    #[async_trait]
    impl FormTransport for ScriptedTransport {
        async fn post_form(&self, _endpoint: &str, fields: &ContactFormFields) -> AppResult<u16> {
            self.calls.lock().expect("calls lock").push(fields.clone());
            if let Ok(page) = self.page.read() {
                *self.observed_label.lock().expect("label lock") =
                    Some(page.submit.label.clone());
                assert!(!page.submit.enabled, "control must be disabled in flight");
            }
            match self.status {
                Some(status) => Ok(status),
                None => Err(AppError::new(
                    crate::models::errors::ErrorCode::NetworkRequestFailed,
                    "Connection failed",
                )),
            }
        }
    }

    fn filled_page() -> SharedPage {
        let mut page = PageModel::default();
        page.set_contact_fields(&ContactFormFields::new("Jane", "jane@x.com", "Hi"));
        page.into_shared()
    }

    fn harness(
        status: Option<u16>,
        page: &SharedPage,
    ) -> (FormSubmitter<ScriptedTransport>, NotificationCenter) {
        let transport = ScriptedTransport::new(status, page.clone());
        let submitter = FormSubmitter::new(transport, "http://localhost:8080/");
        let notifier = NotificationCenter::new(page.clone());
        (submitter, notifier)
    }

    #[tokio::test]
    async fn test_missing_field_skips_network() {
        let page = PageModel::default().into_shared();
        let (mut submitter, notifier) = harness(Some(200), &page);

        let outcome = submitter.submit(&page, &notifier).await;

        assert_eq!(
            outcome,
            SubmissionOutcome::ValidationFailed(ValidationError::MissingField)
        );
        assert_eq!(submitter.transport.call_count(), 0);

        let shown = notifier.current().expect("error notification");
        assert_eq!(shown.message.kind, NotificationKind::Error);
        // Control was never touched
        assert!(page.read().expect("page lock").submit.enabled);
    }

    #[tokio::test]
    async fn test_invalid_email_skips_network() {
        let page = PageModel::default().into_shared();
        if let Ok(mut p) = page.write() {
            p.set_contact_fields(&ContactFormFields::new("Jane", "foo@bar", "Hi"));
        }
        let (mut submitter, notifier) = harness(Some(200), &page);

        let outcome = submitter.submit(&page, &notifier).await;

        assert_eq!(
            outcome,
            SubmissionOutcome::ValidationFailed(ValidationError::InvalidEmail)
        );
        assert_eq!(submitter.transport.call_count(), 0);
        assert_eq!(
            notifier.current().expect("notification").message.text,
            "Please enter a valid email address."
        );
    }

    #[tokio::test]
    async fn test_success_clears_fields_and_restores_control() {
        let page = filled_page();
        let (mut submitter, notifier) = harness(Some(200), &page);

        let outcome = submitter.submit(&page, &notifier).await;

        assert_eq!(outcome, SubmissionOutcome::Sent);
        assert_eq!(submitter.transport.call_count(), 1);
        assert_eq!(
            submitter
                .transport
                .observed_label
                .lock()
                .expect("label lock")
                .as_deref(),
            Some(SENDING_LABEL)
        );

        let shown = notifier.current().expect("success notification");
        assert_eq!(shown.message.kind, NotificationKind::Success);

        let page = page.read().expect("page lock");
        assert!(page.name_input.is_empty());
        assert!(page.email_input.is_empty());
        assert!(page.message_input.is_empty());
        assert!(page.submit.enabled);
        assert_eq!(page.submit.label, "Send Message");
    }

    #[tokio::test]
    async fn test_failure_status_preserves_fields() {
        let page = filled_page();
        let (mut submitter, notifier) = harness(Some(500), &page);

        let outcome = submitter.submit(&page, &notifier).await;

        assert_eq!(outcome, SubmissionOutcome::NetworkFailed);
        let shown = notifier.current().expect("error notification");
        assert_eq!(shown.message.kind, NotificationKind::Error);

        let page = page.read().expect("page lock");
        assert_eq!(page.name_input, "Jane");
        assert_eq!(page.email_input, "jane@x.com");
        assert_eq!(page.message_input, "Hi");
        assert!(page.submit.enabled);
        assert_eq!(page.submit.label, "Send Message");
    }

    #[tokio::test]
    async fn test_transport_error_preserves_fields() {
        let page = filled_page();
        let (mut submitter, notifier) = harness(None, &page);

        let outcome = submitter.submit(&page, &notifier).await;

        assert_eq!(outcome, SubmissionOutcome::NetworkFailed);
        assert_eq!(
            notifier.current().expect("notification").message.text,
            "Network error while sending message."
        );

        let page = page.read().expect("page lock");
        assert_eq!(page.name_input, "Jane");
        assert!(page.submit.enabled);
    }

    #[tokio::test]
    async fn test_resubmit_after_failure_is_fresh_invocation() {
        let page = filled_page();
        let (mut failing, notifier) = harness(Some(503), &page);
        assert_eq!(
            failing.submit(&page, &notifier).await,
            SubmissionOutcome::NetworkFailed
        );

        // Fields survived, so the user's manual retry can succeed
        let (mut succeeding, notifier) = harness(Some(200), &page);
        assert_eq!(
            succeeding.submit(&page, &notifier).await,
            SubmissionOutcome::Sent
        );
    }

    #[test]
    fn test_guard_restores_on_drop() {
        let page = PageModel::default().into_shared();
        {
            let _guard = SubmitGuard::engage(&page);
            let locked = page.read().expect("page lock");
            assert!(!locked.submit.enabled);
            assert_eq!(locked.submit.label, SENDING_LABEL);
        }
        let locked = page.read().expect("page lock");
        assert!(locked.submit.enabled);
        assert_eq!(locked.submit.label, "Send Message");
    }
}
