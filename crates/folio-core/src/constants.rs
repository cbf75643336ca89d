//! Timing and tuning constants for page behavior.
//!
//! Speeds are expressed in pixels per reference frame (one 60 Hz display
//! refresh); delays are in milliseconds.
use std::time::Duration;

// Marquee motion
pub const REFERENCE_FRAME_MS: f64 = 16.667;
pub const MAX_FRAME_MS: f64 = 50.0; // clamp after tab-backgrounding
pub const VELOCITY_SMOOTHING: f64 = 0.055; // new = v + (target - v) * k
pub const HOVER_DAMPING_RATIO: f64 = 0.12;
pub const DEFAULT_BASE_SPEED: f64 = 0.55;

// Debounce windows
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(200);
pub const NAV_HIGHLIGHT_DEBOUNCE: Duration = Duration::from_millis(80);
pub const NAV_SHADOW_DEBOUNCE: Duration = Duration::from_millis(50);

// Navigation
pub const NAV_SHADOW_THRESHOLD_PX: f64 = 60.0;
pub const NAV_FALLBACK_HEIGHT_PX: f64 = 60.0;
pub const NAV_TRIGGER_GAP_PX: f64 = 40.0; // below the nav bar
pub const DESKTOP_NAV_TRIGGER_PX: f64 = 120.0;
pub const SCROLL_TARGET_GAP_PX: f64 = 20.0;
pub const NAV_SCROLL_LOCK: Duration = Duration::from_millis(1400);

// Reveal
pub const SECTION_REVEAL_THRESHOLD: f64 = 0.07;
pub const SECTION_REVEAL_ROOT_MARGIN: &str = "0px 0px -40px 0px";
pub const CARD_REVEAL_THRESHOLD: f64 = 0.05;
pub const CARD_STAGGER_MS: u64 = 65;
pub const CARD_OFFSET_Y_PX: f64 = 22.0;
pub const WORKFLOW_NODE_BASE_DELAY_MS: u64 = 180;
pub const WORKFLOW_NODE_STAGGER_MS: u64 = 80;
pub const WORKFLOW_NODE_OFFSET_Y_PX: f64 = 16.0;
pub const WORKFLOW_OPEN_DELAY_MS: u64 = 200;

// Overlays
pub const OVERLAY_OPEN_FRAMES: u8 = 2; // frames between is-visible and is-open
