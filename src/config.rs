//! Runtime configuration
//!
//! All tunables live here, environment-overridable with safe defaults.
//! Invalid overrides fall back to the default with a warning rather
//! than failing page startup.

use std::time::Duration;
use tracing::warn;

/// Origin the page is served from; relative candidates resolve against it
pub const DEFAULT_SITE_ORIGIN: &str = "http://localhost:8080";

/// Deferral before the first image probe (milliseconds)
pub const DEFAULT_RESOLVE_DELAY_MS: u64 = 80;

/// Notification display interval (seconds)
pub const DEFAULT_NOTIFICATION_TTL_SECS: u64 = 5;

/// HTTP request timeout (seconds)
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Configuration for one page view
#[derive(Debug, Clone)]
pub struct PageConfig {
    /// Origin serving the page and its assets
    pub site_origin: String,
    /// Where the contact form posts. Defaults to the site origin root.
    pub form_endpoint: String,
    /// Ordered candidate locations for the profile image, fixed at startup
    pub image_candidates: Vec<String>,
    pub resolve_delay: Duration,
    pub notification_ttl: Duration,
    pub request_timeout: Duration,
}

impl Default for PageConfig {
    fn default() -> Self {
        let site_origin = std::env::var("PORTFOLIO_SITE_ORIGIN")
            .unwrap_or_else(|_| DEFAULT_SITE_ORIGIN.to_string());

        let form_endpoint = std::env::var("PORTFOLIO_FORM_URL")
            .unwrap_or_else(|_| format!("{}/", site_origin.trim_end_matches('/')));

        let image_candidates = std::env::var("PORTFOLIO_IMAGE_CANDIDATES")
            .map(|raw| parse_candidates(&raw))
            .unwrap_or_default();
        let image_candidates = if image_candidates.is_empty() {
            default_candidates()
        } else {
            image_candidates
        };

        Self {
            site_origin,
            form_endpoint,
            image_candidates,
            resolve_delay: Duration::from_millis(env_u64(
                "PORTFOLIO_RESOLVE_DELAY_MS",
                DEFAULT_RESOLVE_DELAY_MS,
            )),
            notification_ttl: Duration::from_secs(env_u64(
                "PORTFOLIO_NOTIFICATION_TTL_SECS",
                DEFAULT_NOTIFICATION_TTL_SECS,
            )),
            request_timeout: Duration::from_secs(env_u64(
                "PORTFOLIO_REQUEST_TIMEOUT_SECS",
                DEFAULT_REQUEST_TIMEOUT_SECS,
            )),
        }
    }
}

/// Default candidate spread: the same asset under relative and
/// absolute paths
fn default_candidates() -> Vec<String> {
    vec![
        "profile.jpg".to_string(),
        "./profile.jpg".to_string(),
        "/profile.jpg".to_string(),
        "assets/profile.jpg".to_string(),
    ]
}

/// Comma-separated candidate list, blanks dropped
fn parse_candidates(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn env_u64(key: &str, default: u64) -> u64 {
    match std::env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("⚠️ Invalid {} value '{}', using default {}", key, raw, default);
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_candidates_drops_blanks() {
        let parsed = parse_candidates("a.jpg, ./b.jpg,,  ,/c.jpg");
        assert_eq!(parsed, vec!["a.jpg", "./b.jpg", "/c.jpg"]);
    }

    #[test]
    fn test_parse_candidates_preserves_order() {
        let parsed = parse_candidates("z.jpg,a.jpg");
        assert_eq!(parsed, vec!["z.jpg", "a.jpg"]);
    }

    #[test]
    fn test_default_candidates_nonempty() {
        assert!(!default_candidates().is_empty());
    }
}
