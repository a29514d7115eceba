//! Page chrome
//!
//! The event-to-state wiring around the two cores: mobile menu toggling,
//! scroll-driven section highlighting and header elevation, anchor
//! scroll targets, lazy-load marking, and the reduced-motion switch.
//! All transitions are plain functions over the page model.

use crate::page::model::PageModel;
use std::time::{Duration, Instant};

/// A section becomes active once scroll passes its top minus this lead
pub const ACTIVE_SECTION_LEAD_PX: u64 = 160;

/// Scroll depth past which the header casts its shadow
pub const HEADER_ELEVATION_THRESHOLD_PX: u64 = 40;

/// Gap kept between the header and an anchor-scrolled section top
pub const ANCHOR_HEADER_GAP_PX: u64 = 12;

/// Minimum interval between accepted scroll events
pub const SCROLL_THROTTLE: Duration = Duration::from_millis(150);

// ============================================
// Navigation menu
// ============================================

/// Flip the mobile menu open/closed
pub fn toggle_menu(page: &mut PageModel) {
    page.menu_open = !page.menu_open;
}

pub fn close_menu(page: &mut PageModel) {
    page.menu_open = false;
}

/// Escape closes an open menu; any other key is ignored
pub fn handle_key(page: &mut PageModel, key: &str) {
    if key == "Escape" && page.menu_open {
        close_menu(page);
    }
}

/// Following an in-page anchor closes the mobile menu and yields the
/// scroll target: the section top minus header height and gap.
pub fn follow_anchor(page: &mut PageModel, section_id: &str) -> Option<u64> {
    let target = page
        .sections
        .iter()
        .find(|s| s.id == section_id)
        .map(|s| s.offset_top.saturating_sub(page.header_height + ANCHOR_HEADER_GAP_PX))?;
    close_menu(page);
    Some(target)
}

// ============================================
// Scroll effects
// ============================================

/// Recompute the active navigation section for a scroll position.
/// The last section whose lead-adjusted top has been passed wins.
pub fn update_active_section(page: &mut PageModel, scroll_y: u64) {
    let mut current = None;
    for section in &page.sections {
        if scroll_y >= section.offset_top.saturating_sub(ACTIVE_SECTION_LEAD_PX) {
            current = Some(section.id.clone());
        }
    }
    page.active_section = current;
}

pub fn update_header_elevation(page: &mut PageModel, scroll_y: u64) {
    page.header_elevated = scroll_y > HEADER_ELEVATION_THRESHOLD_PX;
}

/// One scroll event: both effects in a single pass
pub fn on_scroll(page: &mut PageModel, scroll_y: u64) {
    update_active_section(page, scroll_y);
    update_header_elevation(page, scroll_y);
}

/// Rate gate for scroll handlers. Accepts an event only when the
/// configured interval has elapsed since the last accepted one.
pub struct Throttle {
    interval: Duration,
    last: Option<Instant>,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    pub fn allow(&mut self, now: Instant) -> bool {
        match self.last {
            Some(last) if now.duration_since(last) < self.interval => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }
}

// ============================================
// Lazy loading & accessibility
// ============================================

/// Mark a lazily loaded image as visible. Re-marking is a no-op.
pub fn mark_lazy_loaded(page: &mut PageModel, image_id: &str) {
    page.lazy_loaded.insert(image_id.to_string());
}

/// Apply the user's reduced-motion preference
pub fn apply_reduced_motion(page: &mut PageModel, prefers_reduced: bool) {
    page.reduced_motion = prefers_reduced;
    page.transitions_enabled = !prefers_reduced;
}
