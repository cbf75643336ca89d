//! Marquee engine: a seamless, infinitely looping horizontal strip.
//!
//! The host duplicates the strip content once so the rendered track is two
//! cycles wide. The engine only has to keep the offset inside one cycle,
//! `(-track_width, 0]`, for the loop to appear seamless.
//!
//! Three influences combine into the offset: a base autoplay speed, hover
//! damping, and pointer drag. Velocity eases toward its target once per
//! frame; the eased velocity is then scaled by the frame's elapsed time
//! relative to a 60 Hz reference frame.

use crate::config::MarqueeConfig;
use std::time::Duration;

/// Wrap `position` into `(-width, 0]`.
///
/// A zero, negative or non-finite width leaves the position unchanged.
#[inline]
pub fn wrap(position: f64, width: f64) -> f64 {
    if !(width.is_finite() && width > 0.0) {
        return position;
    }
    let mut p = position % width;
    if p > 0.0 {
        p -= width;
        // A remainder below one ulp of `width` rounds onto the open end.
        if p <= -width {
            p = 0.0;
        }
    }
    p
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragState {
    pub active: bool,
    pub pointer_start_x: f64,
    pub position_at_start: f64,
}

#[derive(Clone, Debug)]
pub struct Marquee {
    config: MarqueeConfig,
    track_width: f64,
    position: f64,
    current_velocity: f64,
    target_velocity: f64,
    drag: DragState,
    hovered: bool,
}

impl Marquee {
    pub fn new(config: MarqueeConfig, track_width: f64) -> Self {
        Self {
            config,
            track_width,
            position: 0.0,
            current_velocity: 0.0,
            target_velocity: config.base_speed,
            drag: DragState::default(),
            hovered: false,
        }
    }

    /// Advance by one display frame and return the offset to render.
    pub fn tick(&mut self, elapsed: Duration) -> f64 {
        if self.drag.active {
            return self.position;
        }
        let t = self.config.tuning;
        let dt_ms = (elapsed.as_secs_f64() * 1000.0).min(t.max_frame_ms);
        self.current_velocity += (self.target_velocity - self.current_velocity) * t.smoothing;
        if !self.has_cycle() {
            // Nothing measurable to scroll through.
            return self.position;
        }
        let step =
            self.config.direction.sign() * self.current_velocity * (dt_ms / t.reference_frame_ms);
        self.position = wrap(self.position - step, self.track_width);
        self.position
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
        if !self.drag.active {
            self.target_velocity = self.idle_target();
        }
    }

    /// Take manual control. Velocity drops to zero immediately, without easing.
    pub fn begin_drag(&mut self, pointer_x: f64) {
        self.drag = DragState {
            active: true,
            pointer_start_x: pointer_x,
            position_at_start: self.position,
        };
        self.current_velocity = 0.0;
        self.target_velocity = 0.0;
    }

    pub fn update_drag(&mut self, pointer_x: f64) -> Option<f64> {
        if !self.drag.active {
            return None;
        }
        let offset = self.drag.position_at_start + (pointer_x - self.drag.pointer_start_x);
        self.position = wrap(offset, self.track_width);
        Some(self.position)
    }

    /// Release manual control; autoplay resumes through easing.
    pub fn end_drag(&mut self) -> bool {
        if !self.drag.active {
            return false;
        }
        self.drag.active = false;
        self.target_velocity = self.idle_target();
        true
    }

    /// Replace the measured cycle width and re-wrap the current offset.
    pub fn set_track_width(&mut self, width: f64) {
        self.track_width = width;
        self.position = wrap(self.position, width);
    }

    #[inline]
    pub fn has_cycle(&self) -> bool {
        self.track_width.is_finite() && self.track_width > 0.0
    }

    fn idle_target(&self) -> f64 {
        if self.hovered {
            self.config.base_speed * self.config.tuning.hover_ratio
        } else {
            self.config.base_speed
        }
    }

    #[inline]
    pub fn position(&self) -> f64 {
        self.position
    }
    #[inline]
    pub fn track_width(&self) -> f64 {
        self.track_width
    }
    #[inline]
    pub fn current_velocity(&self) -> f64 {
        self.current_velocity
    }
    #[inline]
    pub fn target_velocity(&self) -> f64 {
        self.target_velocity
    }
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.active
    }
    #[inline]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }
    #[inline]
    pub fn drag_state(&self) -> DragState {
        self.drag
    }
    #[inline]
    pub fn config(&self) -> &MarqueeConfig {
        &self.config
    }
}
