//! Profile image resolution
//!
//! Tries an ordered list of candidate locations and commits the first
//! one that loads. Candidates are probed off-screen, strictly in order,
//! one attempt each; exhaustion reveals the static fallback placeholder.
//! The whole run may be deferred briefly after page-ready so it does not
//! compete with initial paint work.

use crate::models::errors::{AppError, AppResult};
use crate::models::types::ResolutionState;
use crate::page::model::SharedPage;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Deferral before the first probe. A tunable, not a correctness knob.
pub const DEFAULT_RESOLVE_DELAY: Duration = Duration::from_millis(80);

/// Default timeout for a single image probe
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(10);

const PROBE_USER_AGENT: &str = concat!("portfolio-page/", env!("CARGO_PKG_VERSION"));

/// Off-screen load attempt for one candidate location.
///
/// `Ok(())` means the candidate is usable; any error means the resolver
/// advances to the next candidate.
#[async_trait]
pub trait ImageProbe: Send + Sync {
    async fn probe(&self, location: &str) -> AppResult<()>;
}

/// Probe backed by an HTTP GET: a success-range status means loadable
pub struct HttpImageProbe {
    client: reqwest::Client,
    origin: String,
}

impl HttpImageProbe {
    pub fn new(origin: impl Into<String>) -> AppResult<Self> {
        Self::with_timeout(origin, DEFAULT_PROBE_TIMEOUT)
    }

    pub fn with_timeout(origin: impl Into<String>, timeout: Duration) -> AppResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(PROBE_USER_AGENT));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .gzip(true)
            .build()
            .map_err(AppError::from)?;

        Ok(Self {
            client,
            origin: origin.into(),
        })
    }

    /// Resolve a candidate location against the configured origin.
    /// Absolute URLs pass through untouched.
    fn resolve_url(&self, location: &str) -> String {
        if location.starts_with("http://") || location.starts_with("https://") {
            return location.to_string();
        }
        let origin = self.origin.trim_end_matches('/');
        let path = location.trim_start_matches("./").trim_start_matches('/');
        format!("{}/{}", origin, path)
    }
}

#[async_trait]
impl ImageProbe for HttpImageProbe {
    async fn probe(&self, location: &str) -> AppResult<()> {
        let url = self.resolve_url(location);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::bad_status(status.as_u16()));
        }
        Ok(())
    }
}

/// Sequential candidate trial over a fixed list.
///
/// One resolution run per page view; re-running is idempotent in final
/// visual outcome (last run wins).
pub struct ImageResolver<P: ImageProbe> {
    probe: P,
    candidates: Vec<String>,
    startup_delay: Duration,
}

impl<P: ImageProbe> ImageResolver<P> {
    pub fn new(probe: P, candidates: Vec<String>) -> Self {
        Self {
            probe,
            candidates,
            startup_delay: DEFAULT_RESOLVE_DELAY,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.startup_delay = delay;
        self
    }

    /// Run the trial: commit the first loadable candidate to the page, or
    /// reveal the fallback once the list is exhausted.
    ///
    /// Candidate `i + 1` is never probed before candidate `i`'s outcome
    /// is known, and a failed candidate is never retried.
    pub async fn resolve(&self, page: &SharedPage) -> ResolutionState {
        if self.candidates.is_empty() {
            warn!("🖼️ No image candidates configured, showing fallback");
            Self::apply_fallback(page);
            return ResolutionState::Exhausted;
        }

        if !self.startup_delay.is_zero() {
            tokio::time::sleep(self.startup_delay).await;
        }

        let total = self.candidates.len();
        for (index, location) in self.candidates.iter().enumerate() {
            debug!("🔍 Probing image candidate {}/{}: {}", index + 1, total, location);
            match self.probe.probe(location).await {
                Ok(()) => {
                    info!("✅ Profile image resolved: {}", location);
                    if let Ok(mut page) = page.write() {
                        page.commit_profile_image(location.clone());
                    }
                    return ResolutionState::Resolved(location.clone());
                }
                Err(e) => {
                    debug!("Candidate {} failed ({}): {}", location, e.code_str(), e);
                }
            }
        }

        warn!(
            "⚠️ {}",
            AppError::candidates_exhausted(total)
        );
        Self::apply_fallback(page);
        ResolutionState::Exhausted
    }

    fn apply_fallback(page: &SharedPage) {
        if let Ok(mut page) = page.write() {
            page.show_profile_fallback();
        }
    }
}
