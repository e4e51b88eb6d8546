//! Drop zones: acceptance gate and hover feedback around a stack.
//!
//! Visual state transitions:
//!
//! ```text
//! Normal ──accepted enter──▶ Hover
//! Normal ──refused enter───▶ Rejected
//! Hover | Rejected ──exit or successful drop──▶ Normal
//! ```

use glam::Vec2;
use log::trace;
use serde::{Deserialize, Serialize};

use super::stack::{Stack, StackMembers};
use crate::cards::{Card, CardArena};
use crate::core::{AcceptMode, CardHandle, Rect, ZoneConfig, ZoneHandle};
use crate::events::{Notification, Notifier, RejectReason};

/// Feedback state shown by the zone background.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneVisual {
    #[default]
    Normal,
    Hover,
    Rejected,
}

/// A stationary container that owns one stack.
#[derive(Clone, Debug)]
pub struct DropZone {
    handle: ZoneHandle,
    name: String,
    accept: AcceptMode,
    anchor: Vec2,
    snap_offset: Vec2,
    size: Vec2,
    visual: ZoneVisual,
    hovering: bool,
    stack: Stack,
}

impl DropZone {
    /// Create an empty zone from its configuration.
    #[must_use]
    pub fn new(handle: ZoneHandle, config: ZoneConfig) -> Self {
        let config = config.sanitized();
        Self {
            handle,
            name: config.name,
            accept: config.accept,
            anchor: config.anchor,
            snap_offset: config.snap_offset,
            size: config.size,
            visual: ZoneVisual::Normal,
            hovering: false,
            stack: Stack::new(handle, config.stack),
        }
    }

    #[must_use]
    pub fn handle(&self) -> ZoneHandle {
        self.handle
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn accept_mode(&self) -> AcceptMode {
        self.accept
    }

    pub fn set_accept_mode(&mut self, accept: AcceptMode) {
        self.accept = accept;
    }

    #[must_use]
    pub fn anchor(&self) -> Vec2 {
        self.anchor
    }

    #[must_use]
    pub fn snap_offset(&self) -> Vec2 {
        self.snap_offset
    }

    /// Relocate the zone. Member positions catch up on the next tick.
    pub fn move_to(&mut self, anchor: Vec2) {
        self.anchor = anchor;
    }

    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::new(self.anchor, self.size)
    }

    #[must_use]
    pub fn contains_point(&self, point: Vec2) -> bool {
        self.bounds().contains(point)
    }

    /// Anchor plus snap offset: where the bottom member sits.
    #[must_use]
    pub fn snap_position(&self) -> Vec2 {
        self.anchor + self.snap_offset
    }

    /// Current slot position of a member card.
    #[must_use]
    pub fn slot_position(&self, card: CardHandle) -> Option<Vec2> {
        let slot = self.stack.slot_of(card)?;
        Some(self.stack.slot_position(self.snap_position(), slot))
    }

    #[must_use]
    pub fn snap_position_for_next_insertion(&self) -> Vec2 {
        self.stack.snap_position_for_next_insertion(self.snap_position())
    }

    #[must_use]
    pub fn visual(&self) -> ZoneVisual {
        self.visual
    }

    #[must_use]
    pub fn is_card_hovering(&self) -> bool {
        self.hovering
    }

    #[must_use]
    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    #[must_use]
    pub fn card_count(&self) -> usize {
        self.stack.len()
    }

    #[must_use]
    pub fn has_cards(&self) -> bool {
        !self.stack.is_empty()
    }

    #[must_use]
    pub fn locked_type(&self) -> Option<&str> {
        self.stack.locked_type()
    }

    /// Zone gate AND stack type lock.
    #[must_use]
    pub fn can_accept(&self, card: &Card) -> bool {
        self.accept == AcceptMode::AcceptAny && self.stack.can_accept(card)
    }

    /// A dragged card moved over the zone. Returns whether it would be
    /// accepted right now.
    ///
    /// Refusal is silent here; `CardRejected` is raised only on a failed drop.
    pub fn on_enter(&mut self, card: &Card, notifier: &mut Notifier) -> bool {
        self.hovering = true;
        let accepted = self.can_accept(card);
        if accepted {
            self.visual = ZoneVisual::Hover;
            notifier.raise(Notification::ZoneEntered {
                card: card.handle,
                zone: self.handle,
            });
        } else {
            self.visual = ZoneVisual::Rejected;
        }
        trace!("{} entered {} (accepted: {})", card.handle, self.handle, accepted);
        accepted
    }

    /// A dragged card left the zone, or its drag ended over it.
    pub fn on_exit(&mut self, card: CardHandle, notifier: &mut Notifier) {
        self.hovering = false;
        self.visual = ZoneVisual::Normal;
        notifier.raise(Notification::ZoneExited { card, zone: self.handle });
        trace!("{} exited {}", card, self.handle);
    }

    /// Drop `card` into the stack.
    ///
    /// Success resets the visual state as an implicit exit and raises
    /// `CardDropped`. Failure raises exactly one `CardRejected`.
    pub fn try_drop(&mut self, card: CardHandle, cards: &mut CardArena, notifier: &mut Notifier) -> bool {
        if self.accept == AcceptMode::AcceptNothing {
            notifier.raise(Notification::CardRejected {
                card,
                zone: self.handle,
                reason: RejectReason::ZoneRefused,
            });
            return false;
        }
        let base = self.snap_position();
        if !self.stack.try_add(card, base, cards, notifier) {
            return false;
        }
        self.hovering = false;
        self.visual = ZoneVisual::Normal;
        notifier.raise(Notification::CardDropped { card, zone: self.handle });
        true
    }

    /// Add `card` without the zone gate. The type lock still applies.
    pub(crate) fn insert_bootstrap(&mut self, card: CardHandle, cards: &mut CardArena, notifier: &mut Notifier) -> bool {
        let base = self.snap_position();
        self.stack.try_add(card, base, cards, notifier)
    }

    /// Remove `card` from the stack. No-op if it is not a member.
    pub fn remove(&mut self, card: CardHandle, cards: &mut CardArena) -> bool {
        let base = self.snap_position();
        self.stack.remove(card, base, cards)
    }

    /// Empty the stack. Returns the former members.
    pub fn clear(&mut self, cards: &mut CardArena) -> StackMembers {
        self.stack.clear(cards)
    }
}
