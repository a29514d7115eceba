//! In-memory page model
//!
//! The runtime's stand-in for the browser document: the handful of
//! elements the cores consume (profile image, fallback placeholder,
//! contact form, submit control, notification surface) plus the chrome
//! state the page wires to scroll/click/key events. Mutations are
//! absolute, so repeating an operation leaves the same final state.

use crate::models::types::{ActiveNotification, ContactFormFields};
use serde::Serialize;
use std::collections::BTreeSet;
use std::sync::{Arc, RwLock};

/// Page model shared between the resolver, submitter, and notification
/// center. Locks are only held for synchronous mutation, never across a
/// suspension point.
pub type SharedPage = Arc<RwLock<PageModel>>;

/// The visible profile image element
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileImage {
    /// Committed location, once a candidate has loaded
    pub src: Option<String>,
    pub visible: bool,
    /// The image element's "loaded" marker class
    pub loaded: bool,
}

/// The form's submit control
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitControl {
    pub enabled: bool,
    pub label: String,
}

/// A page section that can become the active navigation target
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionAnchor {
    pub id: String,
    /// Vertical offset of the section top, in pixels
    pub offset_top: u64,
}

impl SectionAnchor {
    pub fn new(id: impl Into<String>, offset_top: u64) -> Self {
        Self {
            id: id.into(),
            offset_top,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageModel {
    pub profile: ProfileImage,
    /// Static placeholder shown when no candidate image loads
    pub fallback_visible: bool,

    pub name_input: String,
    pub email_input: String,
    pub message_input: String,
    pub submit: SubmitControl,

    /// The single notification surface slot
    pub notification: Option<ActiveNotification>,

    pub menu_open: bool,
    pub header_elevated: bool,
    /// Rendered header height, used for anchor scroll offsets
    pub header_height: u64,
    pub sections: Vec<SectionAnchor>,
    pub active_section: Option<String>,
    /// Ids of lazily loaded images already marked visible
    pub lazy_loaded: BTreeSet<String>,
    pub reduced_motion: bool,
    /// Cleared when reduced motion is requested
    pub transitions_enabled: bool,
}

impl Default for PageModel {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl PageModel {
    pub fn new(sections: Vec<SectionAnchor>) -> Self {
        Self {
            profile: ProfileImage {
                src: None,
                visible: true,
                loaded: false,
            },
            fallback_visible: false,
            name_input: String::new(),
            email_input: String::new(),
            message_input: String::new(),
            submit: SubmitControl {
                enabled: true,
                label: "Send Message".to_string(),
            },
            notification: None,
            menu_open: false,
            header_elevated: false,
            header_height: 72,
            sections,
            active_section: None,
            lazy_loaded: BTreeSet::new(),
            reduced_motion: false,
            transitions_enabled: true,
        }
    }

    /// Wrap the model for sharing across the runtime's components
    pub fn into_shared(self) -> SharedPage {
        Arc::new(RwLock::new(self))
    }

    // ============================================
    // Profile image element
    // ============================================

    /// Commit a loaded candidate to the visible image element and mark it
    /// loaded. Hides the fallback placeholder.
    pub fn commit_profile_image(&mut self, src: impl Into<String>) {
        self.profile.src = Some(src.into());
        self.profile.visible = true;
        self.profile.loaded = true;
        self.fallback_visible = false;
    }

    /// Hide the image element and reveal the static fallback instead
    pub fn show_profile_fallback(&mut self) {
        self.profile.visible = false;
        self.profile.loaded = false;
        self.fallback_visible = true;
    }

    // ============================================
    // Contact form
    // ============================================

    /// Capture the input values as they are at this moment
    pub fn capture_contact_fields(&self) -> ContactFormFields {
        ContactFormFields::new(
            self.name_input.clone(),
            self.email_input.clone(),
            self.message_input.clone(),
        )
    }

    pub fn set_contact_fields(&mut self, fields: &ContactFormFields) {
        self.name_input = fields.name.clone();
        self.email_input = fields.email.clone();
        self.message_input = fields.message.clone();
    }

    /// The form-reset path of a successful submission
    pub fn clear_contact_fields(&mut self) {
        self.name_input.clear();
        self.email_input.clear();
        self.message_input.clear();
    }

    /// Disable the submit control and show the transient sending label.
    /// Returns the original label for later restoration.
    pub fn disable_submit(&mut self, sending_label: &str) -> String {
        let original = std::mem::replace(&mut self.submit.label, sending_label.to_string());
        self.submit.enabled = false;
        original
    }

    /// Re-enable the submit control with its original label
    pub fn restore_submit(&mut self, original_label: String) {
        self.submit.label = original_label;
        self.submit.enabled = true;
    }

    /// Value for the menu button's aria-expanded attribute
    pub fn aria_expanded(&self) -> &'static str {
        if self.menu_open {
            "true"
        } else {
            "false"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_hides_fallback() {
        let mut page = PageModel::default();
        page.show_profile_fallback();
        page.commit_profile_image("/profile.jpg");

        assert!(page.profile.visible);
        assert!(page.profile.loaded);
        assert_eq!(page.profile.src.as_deref(), Some("/profile.jpg"));
        assert!(!page.fallback_visible);
    }

    #[test]
    fn test_fallback_hides_image() {
        let mut page = PageModel::default();
        page.commit_profile_image("/profile.jpg");
        page.show_profile_fallback();

        assert!(!page.profile.visible);
        assert!(page.fallback_visible);
    }

    #[test]
    fn test_repeated_operations_are_idempotent() {
        let mut page = PageModel::default();
        page.show_profile_fallback();
        let first = page.clone();
        page.show_profile_fallback();
        assert_eq!(page, first);

        page.commit_profile_image("/a.jpg");
        let committed = page.clone();
        page.commit_profile_image("/a.jpg");
        assert_eq!(page, committed);
    }

    #[test]
    fn test_submit_disable_restore_round_trip() {
        let mut page = PageModel::default();
        let original = page.disable_submit("Sending...");

        assert!(!page.submit.enabled);
        assert_eq!(page.submit.label, "Sending...");

        page.restore_submit(original);
        assert!(page.submit.enabled);
        assert_eq!(page.submit.label, "Send Message");
    }

    #[test]
    fn test_capture_and_clear_fields() {
        let mut page = PageModel::default();
        page.name_input = "Jane".to_string();
        page.email_input = "jane@x.com".to_string();
        page.message_input = "Hi".to_string();

        let fields = page.capture_contact_fields();
        assert_eq!(fields.name, "Jane");

        page.clear_contact_fields();
        assert!(page.name_input.is_empty());
        assert!(page.email_input.is_empty());
        assert!(page.message_input.is_empty());
    }
}
