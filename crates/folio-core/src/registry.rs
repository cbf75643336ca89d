//! Page-level owner of all marquee strips.
//!
//! Instances are kept in insertion order and advanced together by a single
//! frame callback. Resize notifications are collapsed by one shared
//! debouncer; when it fires, every strip re-measures its cycle width.

use crate::config::MarqueeConfig;
use crate::constants::RESIZE_DEBOUNCE;
use crate::debounce::Debouncer;
use crate::marquee::Marquee;
use crate::scheduler::FrameClock;
use instant::Instant;

/// Host side of a strip: where the width comes from and where the offset goes.
pub trait TrackSurface {
    /// Width of one un-duplicated content cycle, in pixels.
    fn cycle_width(&self) -> f64;
    fn set_offset(&mut self, offset_px: f64);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MarqueeId(usize);

impl MarqueeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

struct Slot<S> {
    engine: Marquee,
    surface: S,
}

pub struct MarqueeRegistry<S: TrackSurface> {
    slots: Vec<Slot<S>>,
    clock: FrameClock,
    resize: Debouncer,
}

impl<S: TrackSurface> Default for MarqueeRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: TrackSurface> MarqueeRegistry<S> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            clock: FrameClock::default(),
            resize: Debouncer::new(RESIZE_DEBOUNCE),
        }
    }

    pub fn add(&mut self, config: MarqueeConfig, surface: S) -> MarqueeId {
        let width = surface.cycle_width();
        let id = MarqueeId(self.slots.len());
        log::info!(
            "[marquee] #{} width={:.1} speed={:.2} dir={:?}",
            id.0,
            width,
            config.base_speed,
            config.direction
        );
        self.slots.push(Slot {
            engine: Marquee::new(config, width),
            surface,
        });
        id
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, id: MarqueeId) -> Option<&Marquee> {
        self.slots.get(id.0).map(|s| &s.engine)
    }

    pub fn get_mut(&mut self, id: MarqueeId) -> Option<&mut Marquee> {
        self.slots.get_mut(id.0).map(|s| &mut s.engine)
    }

    pub fn surface(&self, id: MarqueeId) -> Option<&S> {
        self.slots.get(id.0).map(|s| &s.surface)
    }

    /// Move a dragged strip and render it immediately, without waiting for
    /// the next frame.
    pub fn drag_to(&mut self, id: MarqueeId, pointer_x: f64) {
        if let Some(slot) = self.slots.get_mut(id.0) {
            if let Some(pos) = slot.engine.update_drag(pointer_x) {
                slot.surface.set_offset(pos);
            }
        }
    }

    pub fn request_remeasure(&mut self, now: Instant) {
        self.resize.trigger(now);
    }

    /// Drop a resize that has not settled yet.
    pub fn cancel_remeasure(&mut self) {
        self.resize.cancel();
    }

    /// Re-measure every strip right away. Returns the number measured.
    pub fn remeasure(&mut self) -> usize {
        for slot in &mut self.slots {
            let width = slot.surface.cycle_width();
            slot.engine.set_track_width(width);
        }
        log::debug!("[marquee] remeasured {} strips", self.slots.len());
        self.slots.len()
    }

    /// One display frame: settle pending resizes, then advance and render
    /// every strip.
    pub fn frame(&mut self, now: Instant) {
        if self.resize.poll(now) {
            self.remeasure();
        }
        let dt = self.clock.advance(now);
        for slot in &mut self.slots {
            let pos = slot.engine.tick(dt);
            slot.surface.set_offset(pos);
        }
    }
}
