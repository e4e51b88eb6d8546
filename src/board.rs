//! The board: arenas of cards and zones plus the notification channel.
//!
//! `Board` is the single owner of mutable state. Cards and zones refer to
//! each other only through handles. Pointer transitions and the frame tick
//! live in `drag::controller`; this file holds construction, bootstrap
//! population and explicit assignment.

use glam::Vec2;
use log::warn;

use crate::cards::{Bonuses, Card, CardArena, CardData};
use crate::core::{BoardConfig, CardHandle, ZoneConfig, ZoneHandle};
use crate::events::{Notification, Notifier};
use crate::input::{DirectInput, InputAdapter};
use crate::zones::{DropZone, StackMembers, ZoneRegistry};

/// Cards, zones and the interaction state between them.
///
/// ## Example
///
/// ```
/// use glam::Vec2;
/// use rust_cardstack::{Board, BoardConfig, CardData, ZoneConfig};
///
/// let mut board = Board::new(BoardConfig::default());
/// let zone = board.add_zone(ZoneConfig::new("Gear", Vec2::new(100.0, 100.0)));
/// let sword = board.add_card(CardData::loot("sword", "Sword"), Vec2::ZERO);
///
/// assert!(board.place(sword, zone));
/// assert_eq!(board.zone(zone).unwrap().card_count(), 1);
/// assert_eq!(board.card(sword).unwrap().position, Vec2::new(100.0, 100.0));
/// ```
pub struct Board {
    pub(crate) cards: CardArena,
    pub(crate) zones: ZoneRegistry,
    pub(crate) notifier: Notifier,
    pub(crate) adapter: Box<dyn InputAdapter>,
    pub(crate) config: BoardConfig,
}

impl Board {
    /// Create an empty board. The configuration is sanitized.
    #[must_use]
    pub fn new(config: BoardConfig) -> Self {
        Self::with_adapter(config, DirectInput)
    }

    /// Create an empty board that projects and hit-tests through `adapter`.
    #[must_use]
    pub fn with_adapter(config: BoardConfig, adapter: impl InputAdapter + 'static) -> Self {
        Self {
            cards: CardArena::new(),
            zones: ZoneRegistry::new(),
            notifier: Notifier::new(),
            adapter: Box::new(adapter),
            config: config.sanitized(),
        }
    }

    pub fn set_adapter(&mut self, adapter: impl InputAdapter + 'static) {
        self.adapter = Box::new(adapter);
    }

    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Replace the configuration. Existing cards keep their drag offset.
    pub fn reconfigure(&mut self, config: BoardConfig) {
        self.config = config.sanitized();
    }

    // === Registration ===

    /// Register a zone.
    pub fn add_zone(&mut self, config: ZoneConfig) -> ZoneHandle {
        self.zones.register(config)
    }

    /// Add an unassigned card on top of the draw list.
    pub fn add_card(&mut self, data: CardData, position: Vec2) -> CardHandle {
        let handle = self.cards.insert(data, position);
        self.cards[handle].drag_offset = self.config.drag.drag_offset;
        handle
    }

    // === Queries ===

    #[must_use]
    pub fn card(&self, card: CardHandle) -> Option<&Card> {
        self.cards.get(card)
    }

    #[must_use]
    pub fn zone(&self, zone: ZoneHandle) -> Option<&DropZone> {
        self.zones.get(zone)
    }

    #[must_use]
    pub fn cards(&self) -> &CardArena {
        &self.cards
    }

    #[must_use]
    pub fn zones(&self) -> &ZoneRegistry {
        &self.zones
    }

    /// Zone the card is assigned to.
    #[must_use]
    pub fn assignment(&self, card: CardHandle) -> Option<ZoneHandle> {
        self.cards.get(card).and_then(|c| c.zone)
    }

    /// Sum of bonuses in a zone's stack.
    #[must_use]
    pub fn total_bonuses(&self, zone: ZoneHandle) -> Bonuses {
        self.zones
            .get(zone)
            .map(|z| z.stack().total_bonuses(&self.cards))
            .unwrap_or_default()
    }

    // === Notifications ===

    /// Install the notification handler, replacing any previous one.
    pub fn set_notification_handler(&mut self, handler: impl FnMut(&Notification) + 'static) {
        self.notifier.set_handler(handler);
    }

    /// Notifications raised since the last drain.
    #[must_use]
    pub fn pending_notifications(&self) -> &[Notification] {
        self.notifier.pending()
    }

    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        self.notifier.drain().collect()
    }

    // === Card settings ===

    /// Enable or disable dragging. Takes effect at the next pointer-down.
    pub fn set_draggable(&mut self, card: CardHandle, draggable: bool) {
        if let Some(c) = self.cards.get_mut(card) {
            c.draggable = draggable;
        }
    }

    pub fn set_drag_offset(&mut self, card: CardHandle, offset: Vec2) {
        if let Some(c) = self.cards.get_mut(card) {
            c.drag_offset = offset;
        }
    }

    /// Relocate a zone. Idle members follow on the next tick.
    pub fn move_zone(&mut self, zone: ZoneHandle, anchor: Vec2) {
        if let Some(z) = self.zones.get_mut(zone) {
            z.move_to(anchor);
        }
    }

    // === Assignment ===

    /// Remove `card` from whatever stack holds it.
    pub(crate) fn detach(&mut self, card: CardHandle) -> Option<ZoneHandle> {
        let zone = self.cards.get(card)?.zone?;
        if let Some(z) = self.zones.get_mut(zone) {
            z.remove(card, &mut self.cards);
        }
        self.cards[card].unassign();
        Some(zone)
    }

    /// Take `card` out of its zone; it rests where it currently is.
    ///
    /// Returns the zone it left.
    pub fn unassign(&mut self, card: CardHandle) -> Option<ZoneHandle> {
        let zone = self.detach(card)?;
        let c = &mut self.cards[card];
        c.rest_position = c.position;
        Some(zone)
    }

    /// Validated drop of an idle card into `zone`, without a drag.
    ///
    /// On success the card snaps to its slot. Dragging cards and unknown
    /// handles are refused.
    pub fn place(&mut self, card: CardHandle, zone: ZoneHandle) -> bool {
        let Some(c) = self.cards.get(card) else {
            warn!("place: unknown {card}");
            return false;
        };
        if c.is_dragging() || self.zones.get(zone).is_none() {
            return false;
        }
        if c.zone == Some(zone) {
            return true;
        }
        self.detach(card);
        self.cards[card].session.settle();
        self.zones[zone].try_drop(card, &mut self.cards, &mut self.notifier)
    }

    /// Startup population: add `cards` to `zone` bypassing the zone gate.
    ///
    /// The stack type lock still applies; cards that would break it (or
    /// that are being dragged) are skipped and returned.
    pub fn populate_zone(&mut self, zone: ZoneHandle, cards: &[CardHandle]) -> Vec<CardHandle> {
        let mut skipped = Vec::new();
        if self.zones.get(zone).is_none() {
            warn!("populate_zone: unknown {zone}");
            return cards.to_vec();
        }
        for &card in cards {
            match self.cards.get(card) {
                Some(c) if !c.is_dragging() => {}
                _ => {
                    warn!("populate_zone: skipping {card} (unknown or dragging)");
                    skipped.push(card);
                    continue;
                }
            }
            if self.cards[card].zone != Some(zone) {
                self.detach(card);
            }
            self.cards[card].session.settle();
            if !self.zones[zone].insert_bootstrap(card, &mut self.cards, &mut self.notifier) {
                warn!("populate_zone: {card} does not match the lock of {zone}");
                skipped.push(card);
            }
        }
        skipped
    }

    /// Drop an unassigned idle card into the zone under its position.
    pub fn auto_assign(&mut self, card: CardHandle) -> bool {
        let Some(c) = self.cards.get(card) else {
            return false;
        };
        if c.is_assigned() || c.is_dragging() {
            return false;
        }
        let position = c.position;
        match self.adapter.zone_under(position, &self.zones) {
            Some(zone) => self.place(card, zone),
            None => false,
        }
    }

    /// `auto_assign` every card. Returns how many were placed.
    pub fn auto_assign_all(&mut self) -> usize {
        let handles: Vec<_> = self.cards.handles().collect();
        handles.into_iter().filter(|&card| self.auto_assign(card)).count()
    }

    /// Empty a zone. Former members stay where they are, unassigned.
    pub fn clear_zone(&mut self, zone: ZoneHandle) -> StackMembers {
        let Some(z) = self.zones.get_mut(zone) else {
            return StackMembers::new();
        };
        let removed = z.clear(&mut self.cards);
        for &card in &removed {
            let c = &mut self.cards[card];
            c.session.settle();
            c.rest_position = c.position;
        }
        removed
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Board")
            .field("cards", &self.cards.len())
            .field("zones", &self.zones.len())
            .field("config", &self.config)
            .finish()
    }
}
