//! Frame scheduling.
//!
//! Hosts drive page behavior through [`FrameScheduler`], which invokes a
//! callback once per display frame until its [`FrameHandle`] is stopped.
//! The browser host implements it over `requestAnimationFrame`;
//! [`ManualScheduler`] steps frames explicitly and needs no host at all.

use crate::constants::{MAX_FRAME_MS, REFERENCE_FRAME_MS};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

pub type FrameCallback = Box<dyn FnMut(Instant)>;

pub trait FrameScheduler {
    /// Run `frame` once per display frame until the returned handle is stopped.
    fn run_each_frame(&self, frame: FrameCallback) -> FrameHandle;
}

/// Cancellation handle for a running frame loop. Clones share state.
#[derive(Clone, Debug, Default)]
pub struct FrameHandle {
    stopped: Rc<Cell<bool>>,
}

impl FrameHandle {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn stop(&self) {
        self.stopped.set(true);
    }
    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped.get()
    }
}

/// Elapsed-time source for frame updates.
///
/// The first frame reports one reference frame; later frames report the
/// time since the previous one, capped so a backgrounded tab does not
/// produce a runaway jump on return.
#[derive(Clone, Debug)]
pub struct FrameClock {
    last: Option<Instant>,
    reference: Duration,
    max: Duration,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self {
            last: None,
            reference: Duration::from_secs_f64(REFERENCE_FRAME_MS / 1000.0),
            max: Duration::from_secs_f64(MAX_FRAME_MS / 1000.0),
        }
    }
}

impl FrameClock {
    pub fn advance(&mut self, now: Instant) -> Duration {
        let dt = match self.last {
            None => self.reference,
            Some(last) if now > last => (now - last).min(self.max),
            Some(_) => Duration::ZERO,
        };
        self.last = Some(now);
        dt
    }
}

/// Scheduler whose frames are produced by calling [`ManualScheduler::step`].
#[derive(Default)]
pub struct ManualScheduler {
    loops: RefCell<Vec<(FrameHandle, FrameCallback)>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run every live loop once. Stopped loops are dropped. Returns the
    /// number of callbacks invoked.
    pub fn step(&self, now: Instant) -> usize {
        // Taken out so callbacks may register new loops while running.
        let mut running = std::mem::take(&mut *self.loops.borrow_mut());
        let mut ran = 0;
        running.retain_mut(|(handle, frame)| {
            if handle.is_stopped() {
                return false;
            }
            frame(now);
            ran += 1;
            !handle.is_stopped()
        });
        let mut loops = self.loops.borrow_mut();
        running.append(&mut loops);
        *loops = running;
        ran
    }

    pub fn live_loops(&self) -> usize {
        self.loops
            .borrow()
            .iter()
            .filter(|(h, _)| !h.is_stopped())
            .count()
    }
}

impl FrameScheduler for ManualScheduler {
    fn run_each_frame(&self, frame: FrameCallback) -> FrameHandle {
        let handle = FrameHandle::new();
        self.loops.borrow_mut().push((handle.clone(), frame));
        handle
    }
}
