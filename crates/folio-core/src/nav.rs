//! Navigation highlight tracking.
//!
//! A section is "reached" once its top edge scrolls to or above a trigger
//! line measured from the top of the viewport. The active section is the
//! last reached one in document order.

use crate::constants::{
    NAV_FALLBACK_HEIGHT_PX, NAV_SCROLL_LOCK, NAV_SHADOW_THRESHOLD_PX, NAV_TRIGGER_GAP_PX,
    SCROLL_TARGET_GAP_PX,
};
use instant::Instant;

/// Index of the last section whose viewport-relative top is `<= trigger`.
/// Missing sections (`None`) are skipped.
pub fn last_reached(section_tops: &[Option<f64>], trigger: f64) -> Option<usize> {
    section_tops
        .iter()
        .enumerate()
        .filter_map(|(i, top)| match top {
            Some(t) if *t <= trigger => Some(i),
            _ => None,
        })
        .last()
}

/// Trigger line for the mobile nav: just below the nav bar.
#[inline]
pub fn mobile_trigger(nav_height: Option<f64>) -> f64 {
    nav_height.unwrap_or(NAV_FALLBACK_HEIGHT_PX) + NAV_TRIGGER_GAP_PX
}

#[inline]
pub fn nav_is_scrolled(page_y: f64) -> bool {
    page_y > NAV_SHADOW_THRESHOLD_PX
}

/// Document-space scroll target that puts a section just under the nav bar.
#[inline]
pub fn scroll_target_top(section_viewport_top: f64, page_y: f64, nav_height: f64) -> f64 {
    section_viewport_top + page_y - nav_height - SCROLL_TARGET_GAP_PX
}

/// Horizontal rect in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Span {
    pub left: f64,
    pub width: f64,
}

/// `scrollLeft` for a horizontally scrolling track that centers `item`.
#[inline]
pub fn centered_scroll_left(track_scroll_left: f64, track: Span, item: Span) -> f64 {
    track_scroll_left + item.left - track.left - track.width / 2.0 + item.width / 2.0
}

/// Time-bounded suppression of scroll-driven updates after a nav click.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollLock {
    until: Option<Instant>,
}

impl ScrollLock {
    pub fn lock(&mut self, now: Instant) {
        self.until = Some(now + NAV_SCROLL_LOCK);
    }

    pub fn is_locked(&self, now: Instant) -> bool {
        matches!(self.until, Some(u) if now < u)
    }
}

/// Active-item state of the mobile nav.
#[derive(Clone, Debug)]
pub struct NavTracker {
    sections: Vec<String>,
    active: Option<usize>,
    lock: ScrollLock,
}

impl NavTracker {
    pub fn new<I, T>(sections: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            sections: sections.into_iter().map(Into::into).collect(),
            active: None,
            lock: ScrollLock::default(),
        }
    }

    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active.map(|i| self.sections[i].as_str())
    }

    /// Mark `index` active. Out-of-range indices are ignored.
    pub fn set_active(&mut self, index: usize) -> bool {
        if index >= self.sections.len() {
            return false;
        }
        self.active = Some(index);
        true
    }

    /// A nav item was clicked: activate it and hold off scroll tracking.
    pub fn select(&mut self, index: usize, now: Instant) -> bool {
        if !self.set_active(index) {
            return false;
        }
        self.lock.lock(now);
        true
    }

    pub fn is_locked(&self, now: Instant) -> bool {
        self.lock.is_locked(now)
    }

    /// Recompute from section tops (same order as `sections`). Returns the
    /// active index when it changed; `None` when unchanged or locked. No
    /// section reached means the first one.
    pub fn on_scroll(
        &mut self,
        now: Instant,
        section_tops: &[Option<f64>],
        trigger: f64,
    ) -> Option<usize> {
        if self.lock.is_locked(now) || self.sections.is_empty() {
            return None;
        }
        let idx = last_reached(section_tops, trigger).unwrap_or(0);
        if self.active == Some(idx) {
            return None;
        }
        self.set_active(idx).then_some(idx)
    }
}
