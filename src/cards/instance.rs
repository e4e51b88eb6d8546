//! Card instances - runtime card state.
//!
//! `Card` is a specific movable card on the board. Its position and
//! assignment are written only by its own drag session (through
//! `drag::controller`) or by the stack that currently owns it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::definition::CardData;
use crate::core::{CardHandle, ZoneHandle};
use crate::drag::{DragPhase, DragSession};

/// A card on the board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub handle: CardHandle,

    pub data: CardData,

    /// Current position in board space.
    pub position: Vec2,

    /// Scale at rest; hover and drag multiply this.
    pub base_scale: f32,
    pub scale: f32,

    /// Opacity at rest.
    pub base_alpha: f32,
    pub alpha: f32,

    pub draggable: bool,

    /// Added to the projected pointer position while dragging.
    pub drag_offset: Vec2,

    /// Zone whose stack holds this card.
    pub zone: Option<ZoneHandle>,

    /// Size of the owning stack (1 when unassigned).
    pub stack_level: usize,

    /// Index inside the owning stack, bottom = 0.
    pub stack_slot: Option<usize>,

    /// Where the card rests when not dragging; failed drops animate here.
    pub rest_position: Vec2,

    pub session: DragSession,
}

impl Card {
    /// Create an unassigned, idle card at `position`.
    #[must_use]
    pub fn new(handle: CardHandle, data: CardData, position: Vec2) -> Self {
        Self {
            handle,
            data,
            position,
            base_scale: 1.0,
            scale: 1.0,
            base_alpha: 1.0,
            alpha: 1.0,
            draggable: true,
            drag_offset: Vec2::ZERO,
            zone: None,
            stack_level: 1,
            stack_slot: None,
            rest_position: position,
            session: DragSession::Idle,
        }
    }

    #[must_use]
    pub fn with_drag_offset(mut self, offset: Vec2) -> Self {
        self.drag_offset = offset;
        self
    }

    /// Stacking identity.
    #[must_use]
    pub fn card_id(&self) -> &str {
        &self.data.card_id
    }

    #[must_use]
    pub fn phase(&self) -> DragPhase {
        self.session.phase()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_dragging()
    }

    #[must_use]
    pub fn is_assigned(&self) -> bool {
        self.zone.is_some()
    }

    /// Set scale and opacity relative to the resting values.
    pub fn set_visual(&mut self, scale_multiplier: f32, alpha: f32) {
        self.scale = self.base_scale * scale_multiplier;
        self.alpha = alpha;
    }

    /// Restore resting scale and opacity.
    pub fn reset_visual(&mut self) {
        self.scale = self.base_scale;
        self.alpha = self.base_alpha;
    }

    /// Mark the card as a member of `zone` at `slot` in a stack of `level`.
    pub fn assign(&mut self, zone: ZoneHandle, slot: usize, level: usize) {
        self.zone = Some(zone);
        self.stack_slot = Some(slot);
        self.stack_level = level;
    }

    /// Clear stack membership fields.
    pub fn unassign(&mut self) {
        self.zone = None;
        self.stack_slot = None;
        self.stack_level = 1;
    }
}
