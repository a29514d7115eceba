//! Notification surface
//!
//! At most one notification is visible at a time. A new request replaces
//! whatever is displayed, and every notification removes itself after a
//! fixed interval unless the user dismissed it first. Auto-dismissal is
//! id-guarded so a stale timer never clears a newer notification.

use crate::models::types::{ActiveNotification, NotificationKind, NotificationMessage};
use crate::page::model::SharedPage;
use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Default display interval before auto-dismissal
pub const DEFAULT_NOTIFICATION_TTL: Duration = Duration::from_secs(5);

/// Owner of the page's single notification slot
#[derive(Clone)]
pub struct NotificationCenter {
    page: SharedPage,
    /// Monotonic id source; the newest id owns the surface
    seq: Arc<AtomicU64>,
    ttl: Duration,
}

impl NotificationCenter {
    pub fn new(page: SharedPage) -> Self {
        Self::with_ttl(page, DEFAULT_NOTIFICATION_TTL)
    }

    pub fn with_ttl(page: SharedPage, ttl: Duration) -> Self {
        Self {
            page,
            seq: Arc::new(AtomicU64::new(0)),
            ttl,
        }
    }

    /// Display a notification, replacing any currently shown one.
    ///
    /// Returns the id of the new notification. Schedules its removal
    /// after the configured interval.
    pub fn show(&self, text: impl Into<String>, kind: NotificationKind) -> u64 {
        self.show_message(NotificationMessage::new(text, kind))
    }

    pub fn show_message(&self, message: NotificationMessage) -> u64 {
        let id = self.seq.fetch_add(1, Ordering::Relaxed) + 1;
        info!("🔔 Notification [{}]: {}", message.kind.as_str(), message.text);

        if let Ok(mut page) = self.page.write() {
            // Replacing the slot removes any prior notification
            page.notification = Some(ActiveNotification {
                id,
                message,
                shown_at: Utc::now(),
            });
        }

        let page = self.page.clone();
        let ttl = self.ttl;
        tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            Self::dismiss_if_current(&page, id);
        });

        id
    }

    /// The user-close path: remove whatever is displayed right now
    pub fn dismiss(&self) {
        if let Ok(mut page) = self.page.write() {
            if page.notification.take().is_some() {
                debug!("🔕 Notification dismissed");
            }
        }
    }

    /// Currently displayed notification, if any
    pub fn current(&self) -> Option<ActiveNotification> {
        self.page
            .read()
            .map(|page| page.notification.clone())
            .unwrap_or(None)
    }

    /// Auto-dismiss path: only clears the slot if the notification that
    /// scheduled this timer is still the one displayed.
    fn dismiss_if_current(page: &SharedPage, id: u64) {
        if let Ok(mut page) = page.write() {
            let is_current = page
                .notification
                .as_ref()
                .map(|n| n.id == id)
                .unwrap_or(false);
            if is_current {
                page.notification = None;
                debug!("🔕 Notification {} auto-dismissed", id);
            }
        }
    }
}
