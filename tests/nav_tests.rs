// Host-side tests for navigation highlight tracking.

use folio_core::constants::{NAV_SCROLL_LOCK, NAV_TRIGGER_GAP_PX};
use folio_core::{
    centered_scroll_left, last_reached, mobile_trigger, nav_is_scrolled, scroll_target_top,
    NavTracker, ScrollLock, Span,
};
use instant::Instant;
use std::time::Duration;

const SECTIONS: [&str; 4] = ["about", "skills", "projects", "contact"];

#[test]
fn last_reached_picks_the_deepest_section_above_trigger() {
    let tops = [Some(-900.0), Some(-200.0), Some(80.0), Some(700.0)];
    assert_eq!(last_reached(&tops, 100.0), Some(2));
    assert_eq!(last_reached(&tops, 80.0), Some(2));
    assert_eq!(last_reached(&tops, 79.9), Some(1));
    assert_eq!(last_reached(&[Some(300.0), Some(900.0)], 100.0), None);
    assert_eq!(last_reached(&[], 100.0), None);
}

#[test]
fn missing_sections_are_skipped() {
    let tops = [Some(-50.0), None, Some(20.0), None];
    assert_eq!(last_reached(&tops, 100.0), Some(2));
}

#[test]
fn trigger_sits_below_the_nav_bar() {
    assert_eq!(mobile_trigger(Some(72.0)), 72.0 + NAV_TRIGGER_GAP_PX);
    assert_eq!(mobile_trigger(None), 100.0);
}

#[test]
fn nav_shadow_threshold() {
    assert!(!nav_is_scrolled(0.0));
    assert!(!nav_is_scrolled(60.0));
    assert!(nav_is_scrolled(60.5));
}

#[test]
fn scroll_target_clears_the_nav_bar() {
    assert_eq!(scroll_target_top(400.0, 1200.0, 64.0), 1516.0);
}

#[test]
fn centered_item_scroll() {
    let track = Span {
        left: 0.0,
        width: 300.0,
    };
    let item = Span {
        left: 500.0,
        width: 100.0,
    };
    // Item center (550) moves to track center (150).
    assert_eq!(centered_scroll_left(20.0, track, item), 420.0);
}

#[test]
fn tracker_follows_scroll_and_reports_changes_only() {
    let mut nav = NavTracker::new(SECTIONS);
    let now = Instant::now();
    assert_eq!(nav.active(), None);
    assert_eq!(nav.on_scroll(now, &[Some(300.0); 4], 100.0), Some(0));
    assert_eq!(nav.on_scroll(now, &[Some(300.0); 4], 100.0), None);
    let tops = [Some(-800.0), Some(-10.0), Some(400.0), Some(1200.0)];
    assert_eq!(nav.on_scroll(now, &tops, 100.0), Some(1));
    assert_eq!(nav.active_id(), Some("skills"));
}

#[test]
fn selecting_locks_scroll_tracking() {
    let mut nav = NavTracker::new(SECTIONS);
    let t0 = Instant::now();
    assert!(nav.select(3, t0));
    assert_eq!(nav.active_id(), Some("contact"));
    let tops = [Some(-10.0), Some(300.0), Some(600.0), Some(900.0)];
    assert_eq!(nav.on_scroll(t0 + Duration::from_millis(500), &tops, 100.0), None);
    assert_eq!(nav.active(), Some(3));
    let later = t0 + NAV_SCROLL_LOCK + Duration::from_millis(1);
    assert!(!nav.is_locked(later));
    assert_eq!(nav.on_scroll(later, &tops, 100.0), Some(0));
}

#[test]
fn out_of_range_selection_is_ignored() {
    let mut nav = NavTracker::new(SECTIONS);
    let t0 = Instant::now();
    assert!(!nav.select(4, t0));
    assert!(!nav.is_locked(t0));
    assert_eq!(nav.active(), None);
    assert!(!nav.set_active(usize::MAX));
}

#[test]
fn scroll_lock_expires() {
    let mut lock = ScrollLock::default();
    let t0 = Instant::now();
    assert!(!lock.is_locked(t0));
    lock.lock(t0);
    assert!(lock.is_locked(t0 + Duration::from_millis(1399)));
    assert!(!lock.is_locked(t0 + Duration::from_millis(1400)));
}

#[test]
fn empty_tracker_never_activates() {
    let mut nav = NavTracker::new(Vec::<String>::new());
    assert_eq!(nav.on_scroll(Instant::now(), &[], 100.0), None);
    assert!(nav.sections().is_empty());
}
