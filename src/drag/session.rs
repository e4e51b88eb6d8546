//! Per-card drag state machine.
//!
//! ```text
//!            pointer-down                 pointer-up
//!   Idle ─────────────────▶ Dragging ─────────────────▶ Returning
//!    ▲                         ▲  │ pointer-move            │
//!    │                         │  └──────────┘               │
//!    │                         └──── pointer-down (cancel) ──┤
//!    └──────────────────── animation finished ───────────────┘
//! ```
//!
//! The session only tracks state. `drag::controller` performs the side
//! effects on cards and zones.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::animation::ReturnAnimation;
use crate::core::ZoneHandle;

/// Coarse phase of a drag session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging,
    /// Released and animating toward a resting position. Behaves like
    /// `Idle` for input, except that a pointer-down cancels the motion.
    Returning,
}

/// State captured when a drag begins.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DragOrigin {
    pub position: Vec2,
    /// Index in the board draw list before the card was raised.
    pub draw_index: usize,
    /// Zone the card was assigned to before the drag.
    pub zone: Option<ZoneHandle>,
}

/// Drag session embedded in every card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum DragSession {
    #[default]
    Idle,
    Dragging {
        origin: DragOrigin,
        hovered: Option<ZoneHandle>,
    },
    Returning(ReturnAnimation),
}

impl DragSession {
    #[must_use]
    pub fn phase(&self) -> DragPhase {
        match self {
            DragSession::Idle => DragPhase::Idle,
            DragSession::Dragging { .. } => DragPhase::Dragging,
            DragSession::Returning(_) => DragPhase::Returning,
        }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragSession::Dragging { .. })
    }

    /// Zone currently under the pointer while dragging.
    #[must_use]
    pub fn hovered(&self) -> Option<ZoneHandle> {
        match self {
            DragSession::Dragging { hovered, .. } => *hovered,
            _ => None,
        }
    }

    #[must_use]
    pub fn origin(&self) -> Option<&DragOrigin> {
        match self {
            DragSession::Dragging { origin, .. } => Some(origin),
            _ => None,
        }
    }

    #[must_use]
    pub fn animation(&self) -> Option<&ReturnAnimation> {
        match self {
            DragSession::Returning(anim) => Some(anim),
            _ => None,
        }
    }

    pub fn animation_mut(&mut self) -> Option<&mut ReturnAnimation> {
        match self {
            DragSession::Returning(anim) => Some(anim),
            _ => None,
        }
    }

    /// Enter `Dragging`. Any in-flight animation is discarded and returned.
    ///
    /// Returns `None` without changing state if already dragging.
    pub fn begin(&mut self, origin: DragOrigin) -> Option<Option<ReturnAnimation>> {
        let cancelled = match *self {
            DragSession::Dragging { .. } => return None,
            DragSession::Idle => None,
            DragSession::Returning(anim) => Some(anim),
        };
        *self = DragSession::Dragging { origin, hovered: None };
        Some(cancelled)
    }

    /// Record the zone under the pointer.
    ///
    /// Returns `(previous, current)` when it changed.
    pub fn set_hovered(&mut self, zone: Option<ZoneHandle>) -> Option<(Option<ZoneHandle>, Option<ZoneHandle>)> {
        match self {
            DragSession::Dragging { hovered, .. } if *hovered != zone => {
                let previous = std::mem::replace(hovered, zone);
                Some((previous, zone))
            }
            _ => None,
        }
    }

    /// Leave `Dragging`, returning the origin and the hovered zone.
    ///
    /// The session is left `Idle`; callers move it to `Returning` with
    /// `start_return` if the card should animate.
    pub fn end(&mut self) -> Option<(DragOrigin, Option<ZoneHandle>)> {
        match *self {
            DragSession::Dragging { origin, hovered } => {
                *self = DragSession::Idle;
                Some((origin, hovered))
            }
            _ => None,
        }
    }

    pub fn start_return(&mut self, anim: ReturnAnimation) {
        *self = DragSession::Returning(anim);
    }

    /// Stop any animation and go `Idle`.
    pub fn settle(&mut self) {
        if !self.is_dragging() {
            *self = DragSession::Idle;
        }
    }
}
