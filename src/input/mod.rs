//! Boundary with the host's pointer delivery and hit-testing.
//!
//! The host forwards raw pointer events scoped to a card as
//! `PointerEvent`s. The board asks its `InputAdapter` to project pointer
//! positions into board space and to find the zone under a point.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::core::{CardHandle, ZoneHandle};
use crate::zones::{DropZone, ZoneRegistry};

/// Pointer input scoped to one card. Positions are in screen space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { card: CardHandle, position: Vec2 },
    Move { card: CardHandle, position: Vec2 },
    Up { card: CardHandle, position: Vec2 },
    /// Pointer started hovering the card (no button held).
    Enter { card: CardHandle },
    Exit { card: CardHandle },
}

impl PointerEvent {
    #[must_use]
    pub fn card(&self) -> CardHandle {
        match self {
            PointerEvent::Down { card, .. }
            | PointerEvent::Move { card, .. }
            | PointerEvent::Up { card, .. }
            | PointerEvent::Enter { card }
            | PointerEvent::Exit { card } => *card,
        }
    }
}

/// Geometry queries the board delegates to the host.
///
/// The defaults treat screen space as board space and test zones against
/// their rectangular bounds.
pub trait InputAdapter {
    /// Convert a screen-space pointer position into board space.
    fn project(&self, screen: Vec2) -> Vec2 {
        screen
    }

    /// Is `point` (board space) inside `zone`?
    fn zone_contains(&self, zone: &DropZone, point: Vec2) -> bool {
        zone.contains_point(point)
    }

    /// Topmost zone containing `point`; later registrations are on top.
    fn zone_under(&self, point: Vec2, zones: &ZoneRegistry) -> Option<ZoneHandle> {
        zones
            .iter()
            .rev()
            .find(|z| self.zone_contains(z, point))
            .map(DropZone::handle)
    }
}

/// Screen space equals board space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DirectInput;

impl InputAdapter for DirectInput {}

/// Board drawn on a canvas at `origin` with a uniform `scale`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasProjection {
    pub origin: Vec2,
    pub scale: f32,
}

impl CanvasProjection {
    #[must_use]
    pub fn new(origin: Vec2, scale: f32) -> Self {
        let scale = if scale.is_finite() && scale.abs() > f32::EPSILON { scale } else { 1.0 };
        Self { origin, scale }
    }
}

impl InputAdapter for CanvasProjection {
    fn project(&self, screen: Vec2) -> Vec2 {
        (screen - self.origin) / self.scale
    }
}
