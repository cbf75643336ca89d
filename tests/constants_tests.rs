// Host-side tests for constants and their relationships.
// The web crate is wasm-only, so its DOM contract is included directly.

#![allow(dead_code)]
mod dom_contract {
    include!("../src/constants.rs");
}

use dom_contract::*;
use folio_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn motion_constants_are_within_reasonable_bounds() {
    assert!(VELOCITY_SMOOTHING > 0.0 && VELOCITY_SMOOTHING < 1.0);
    assert!(HOVER_DAMPING_RATIO > 0.0 && HOVER_DAMPING_RATIO < 1.0);
    assert!(DEFAULT_BASE_SPEED > 0.0);
    assert!(MAX_FRAME_MS > REFERENCE_FRAME_MS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn debounce_windows_are_ordered() {
    assert!(NAV_SHADOW_DEBOUNCE < NAV_HIGHLIGHT_DEBOUNCE);
    assert!(NAV_HIGHLIGHT_DEBOUNCE < RESIZE_DEBOUNCE);
    assert!(RESIZE_DEBOUNCE < NAV_SCROLL_LOCK);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn reveal_thresholds_are_fractions() {
    assert!(SECTION_REVEAL_THRESHOLD > 0.0 && SECTION_REVEAL_THRESHOLD < 1.0);
    assert!(CARD_REVEAL_THRESHOLD > 0.0 && CARD_REVEAL_THRESHOLD < 1.0);
    assert!(WORKFLOW_OPEN_DELAY_MS < WORKFLOW_NODE_BASE_DELAY_MS + WORKFLOW_NODE_STAGGER_MS);
    assert!(OVERLAY_OPEN_FRAMES >= 1);
}

#[test]
fn dom_contract_is_consistent() {
    assert!(!MODAL_IDS.contains(&LIGHTBOX_ID));
    assert!(SECTION_IDS.iter().all(|id| !id.is_empty() && !id.contains('#')));
    assert!(MARQUEE_VIEWPORT_SELECTOR.starts_with('.'));
    assert!(MARQUEE_TRACK_SELECTOR.starts_with('.'));
    assert!(ATTR_SPEED.starts_with("data-") && ATTR_DIRECTION.starts_with("data-"));
}

#[test]
fn skill_tags_are_revealed_and_glow() {
    assert!(REVEAL_ITEM_SELECTOR
        .split(',')
        .any(|s| s.trim() == SKILL_TAG_SELECTOR));
    assert_eq!(SKILL_TAG_GLOW, "0 0 18px rgba(0,212,255,0.22)");
}
