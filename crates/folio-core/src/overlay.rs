//! Modal and lightbox visibility.
//!
//! An overlay opens in two steps so its CSS transition can run: it is first
//! made visible, then marked open a couple of frames later. Closing reverses
//! that: the open mark is removed, and the overlay is hidden once its
//! opacity transition finishes.

use crate::constants::OVERLAY_OPEN_FRAMES;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayKind {
    /// Locks page scroll while visible.
    Modal,
    /// Shows a single image; cleared when hidden.
    Lightbox,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverlayPhase {
    #[default]
    Hidden,
    Showing {
        frames_left: u8,
    },
    Open,
    Closing,
}

/// What the host should change in response to a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayEffect {
    /// Make visible (and lock scroll for modals).
    Show,
    /// Start the open transition.
    Reveal,
    /// Start the close transition.
    BeginClose,
    /// Remove every visibility mark and release resources.
    Hide,
}

#[derive(Clone, Debug)]
pub struct Overlay {
    kind: OverlayKind,
    phase: OverlayPhase,
}

impl Overlay {
    pub fn new(kind: OverlayKind) -> Self {
        Self {
            kind,
            phase: OverlayPhase::Hidden,
        }
    }

    #[inline]
    pub fn kind(&self) -> OverlayKind {
        self.kind
    }
    #[inline]
    pub fn phase(&self) -> OverlayPhase {
        self.phase
    }

    pub fn open(&mut self) -> Option<OverlayEffect> {
        match self.phase {
            OverlayPhase::Hidden | OverlayPhase::Closing => {
                self.phase = OverlayPhase::Showing {
                    frames_left: OVERLAY_OPEN_FRAMES,
                };
                Some(OverlayEffect::Show)
            }
            OverlayPhase::Showing { .. } | OverlayPhase::Open => None,
        }
    }

    pub fn on_frame(&mut self) -> Option<OverlayEffect> {
        let OverlayPhase::Showing { frames_left } = self.phase else {
            return None;
        };
        if frames_left <= 1 {
            self.phase = OverlayPhase::Open;
            Some(OverlayEffect::Reveal)
        } else {
            self.phase = OverlayPhase::Showing {
                frames_left: frames_left - 1,
            };
            None
        }
    }

    pub fn close(&mut self) -> Option<OverlayEffect> {
        match self.phase {
            OverlayPhase::Open => {
                self.phase = OverlayPhase::Closing;
                Some(OverlayEffect::BeginClose)
            }
            // Never reached the open state, so no transition will end.
            OverlayPhase::Showing { .. } => {
                self.phase = OverlayPhase::Hidden;
                Some(OverlayEffect::Hide)
            }
            OverlayPhase::Hidden | OverlayPhase::Closing => None,
        }
    }

    /// Only the opacity transition finishes a close.
    pub fn on_transition_end(&mut self, property: &str) -> Option<OverlayEffect> {
        if self.phase != OverlayPhase::Closing || property != "opacity" {
            return None;
        }
        self.phase = OverlayPhase::Hidden;
        Some(OverlayEffect::Hide)
    }
}

pub type EffectBatch = SmallVec<[(usize, OverlayEffect); 4]>;

/// Named overlays of a page, in registration order.
#[derive(Clone, Debug, Default)]
pub struct OverlaySet {
    entries: Vec<(String, Overlay)>,
}

impl OverlaySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, id: impl Into<String>, kind: OverlayKind) -> usize {
        let id = id.into();
        if let Some(i) = self.index_of(&id) {
            return i;
        }
        self.entries.push((id, Overlay::new(kind)));
        self.entries.len() - 1
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == id)
    }

    pub fn id(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|(k, _)| k.as_str())
    }

    pub fn get(&self, id: &str) -> Option<&Overlay> {
        self.entries.iter().find(|(k, _)| k == id).map(|(_, o)| o)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Overlay> {
        self.entries
            .iter_mut()
            .find(|(k, _)| k == id)
            .map(|(_, o)| o)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Advance every overlay by one frame.
    pub fn frame(&mut self) -> EffectBatch {
        self.entries
            .iter_mut()
            .enumerate()
            .filter_map(|(i, (_, o))| o.on_frame().map(|e| (i, e)))
            .collect()
    }

    pub fn close_all(&mut self) -> EffectBatch {
        self.entries
            .iter_mut()
            .enumerate()
            .filter_map(|(i, (_, o))| o.close().map(|e| (i, e)))
            .collect()
    }

    /// Any modal currently visible in any phase other than hidden.
    pub fn any_modal_visible(&self) -> bool {
        self.entries
            .iter()
            .any(|(_, o)| o.kind == OverlayKind::Modal && o.phase != OverlayPhase::Hidden)
    }
}
