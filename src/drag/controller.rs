//! Pointer transitions and the frame tick.
//!
//! Every entry point takes the card's handle and performs one complete
//! transition. Intermediate states (a card removed from one stack and not
//! yet in another) never outlive the call.

use glam::Vec2;
use log::{trace, warn};
use serde::{Deserialize, Serialize};

use super::animation::ReturnAnimation;
use super::session::{DragOrigin, DragPhase};
use crate::board::Board;
use crate::core::{CardHandle, ZoneHandle};
use crate::events::Notification;
use crate::input::PointerEvent;

/// How a drag ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DropOutcome {
    /// The zone took the card.
    Accepted(ZoneHandle),
    /// The zone under the pointer refused the card.
    Rejected(ZoneHandle),
    /// Released over empty space.
    NoZone,
}

impl DropOutcome {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, DropOutcome::Accepted(_))
    }
}

impl Board {
    /// Pick up `card`.
    ///
    /// Cancels an in-flight return, removes the card from its stack and
    /// raises it to the top of the draw list. Returns false if the card is
    /// unknown, not draggable or already dragging.
    pub fn pointer_down(&mut self, card: CardHandle, _screen: Vec2) -> bool {
        let Some(c) = self.cards.get(card) else {
            warn!("pointer_down: unknown {card}");
            return false;
        };
        if !c.draggable || c.is_dragging() {
            return false;
        }

        let origin = DragOrigin {
            position: c.position,
            draw_index: self.cards.draw_index(card).unwrap_or(0),
            zone: c.zone,
        };

        self.detach(card);

        let drag = &self.config.drag;
        let c = &mut self.cards[card];
        if let Some(Some(cancelled)) = c.session.begin(origin) {
            trace!("{card} return to {:?} cancelled", cancelled.target);
        }
        c.set_visual(drag.drag_scale, drag.drag_alpha);
        self.cards.bring_to_front(card);

        self.notifier.raise(Notification::CardSelected { card });
        self.notifier.raise(Notification::DragStarted { card });
        trace!("{card} drag started from {:?}", origin.position);
        true
    }

    /// Follow the pointer and fire zone exit/enter on hover changes.
    pub fn pointer_move(&mut self, card: CardHandle, screen: Vec2) {
        let Some(c) = self.cards.get(card) else {
            warn!("pointer_move: unknown {card}");
            return;
        };
        if !c.is_dragging() {
            return;
        }

        let pointer = self.adapter.project(screen);
        let under = self.adapter.zone_under(pointer, &self.zones);

        let c = &mut self.cards[card];
        c.position = pointer + c.drag_offset;
        let Some((previous, current)) = c.session.set_hovered(under) else {
            return;
        };

        if let Some(z) = previous.and_then(|z| self.zones.get_mut(z)) {
            z.on_exit(card, &mut self.notifier);
        }
        if let Some(z) = current.and_then(|z| self.zones.get_mut(z)) {
            z.on_enter(&self.cards[card], &mut self.notifier);
        }
    }

    /// Release `card`.
    ///
    /// Tries the hovered zone; on success the card settles into its slot,
    /// otherwise it returns to where the drag started. Either way the
    /// session passes through `Returning` and reaches `Idle` on a later
    /// tick. The drop uses the hover state of the last `pointer_move`.
    /// Returns `None` if the card was not being dragged.
    pub fn pointer_up(&mut self, card: CardHandle, _screen: Vec2) -> Option<DropOutcome> {
        let Some(c) = self.cards.get_mut(card) else {
            warn!("pointer_up: unknown {card}");
            return None;
        };
        let (origin, hovered) = c.session.end()?;
        let release = c.position;

        let (outcome, target) = match hovered {
            Some(zone) if self.zones.get(zone).is_some() => {
                let slot = self.zones[zone].snap_position_for_next_insertion();
                if self.zones[zone].try_drop(card, &mut self.cards, &mut self.notifier) {
                    (DropOutcome::Accepted(zone), slot)
                } else {
                    (DropOutcome::Rejected(zone), origin.position)
                }
            }
            _ => (DropOutcome::NoZone, origin.position),
        };

        if let Some(z) = hovered.and_then(|z| self.zones.get_mut(z)) {
            z.on_exit(card, &mut self.notifier);
        }

        let returning = self.config.returning.clone();
        let c = &mut self.cards[card];
        c.position = release;
        c.rest_position = target;
        if release.distance(target) <= f32::EPSILON {
            c.position = target;
            c.session.settle();
        } else {
            c.session.start_return(ReturnAnimation::new(release, target, &returning));
        }
        c.reset_visual();
        self.notifier.raise(Notification::DragEnded { card });

        if target.distance(origin.position) < self.config.drag.restore_order_threshold {
            self.cards.set_draw_index(card, origin.draw_index);
            if let DropOutcome::Accepted(zone) = outcome {
                let members = self.zones[zone].stack().members().to_vec();
                self.cards.arrange_ascending(&members);
            }
        }

        trace!("{card} drag ended: {outcome:?} (picked up from {:?})", origin.zone);
        Some(outcome)
    }

    /// Hover feedback while not dragging.
    pub fn pointer_enter(&mut self, card: CardHandle) {
        let hover_scale = self.config.drag.hover_scale;
        if let Some(c) = self.cards.get_mut(card) {
            if c.draggable && !c.is_dragging() {
                c.set_visual(hover_scale, c.base_alpha);
            }
        }
    }

    pub fn pointer_exit(&mut self, card: CardHandle) {
        if let Some(c) = self.cards.get_mut(card) {
            if !c.is_dragging() {
                c.reset_visual();
            }
        }
    }

    /// Dispatch a host pointer event.
    ///
    /// Returns the drop outcome for `Up` events.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Option<DropOutcome> {
        match event {
            PointerEvent::Down { card, position } => {
                self.pointer_down(card, position);
                None
            }
            PointerEvent::Move { card, position } => {
                self.pointer_move(card, position);
                None
            }
            PointerEvent::Up { card, position } => self.pointer_up(card, position),
            PointerEvent::Enter { card } => {
                self.pointer_enter(card);
                None
            }
            PointerEvent::Exit { card } => {
                self.pointer_exit(card);
                None
            }
        }
    }

    /// Advance return animations by `dt` seconds and keep idle members on
    /// their zone's slots.
    pub fn tick(&mut self, dt: f32) {
        let follow_threshold = self.config.drag.follow_threshold;
        for c in self.cards.iter_mut() {
            let slot = c.zone.and_then(|z| self.zones.get(z)).and_then(|z| z.slot_position(c.handle));
            match c.phase() {
                DragPhase::Dragging => {}
                DragPhase::Returning => {
                    let Some(anim) = c.session.animation_mut() else {
                        continue;
                    };
                    if let Some(slot) = slot {
                        anim.retarget(slot);
                    }
                    c.position = anim.advance(dt);
                    if anim.is_finished() {
                        let target = anim.target;
                        c.position = target;
                        c.rest_position = target;
                        c.session.settle();
                        trace!("{} settled at {:?}", c.handle, target);
                    }
                }
                DragPhase::Idle => {
                    if let Some(slot) = slot {
                        if c.position.distance(slot) > follow_threshold {
                            c.position = slot;
                        }
                        c.rest_position = slot;
                    }
                }
            }
        }
    }

    /// Tick until no card is returning, at most `max_steps` times.
    ///
    /// Returns true if every card is settled.
    pub fn settle_all(&mut self, dt: f32, max_steps: usize) -> bool {
        for _ in 0..max_steps {
            if !self.any_returning() {
                return true;
            }
            self.tick(dt);
        }
        !self.any_returning()
    }

    #[must_use]
    pub fn any_returning(&self) -> bool {
        self.cards.iter().any(|c| c.phase() == DragPhase::Returning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardData;
    use crate::core::{BoardConfig, ZoneConfig};
    use crate::zones::ZoneVisual;

    fn board() -> (Board, ZoneHandle, CardHandle) {
        let mut board = Board::new(BoardConfig::default());
        let zone = board.add_zone(ZoneConfig::new("Z", Vec2::new(300.0, 0.0)));
        let card = board.add_card(CardData::loot("sword", "Sword"), Vec2::ZERO);
        (board, zone, card)
    }

    #[test]
    fn test_drop_into_zone() {
        let (mut board, zone, card) = board();

        assert!(board.pointer_down(card, Vec2::ZERO));
        assert_eq!(board.card(card).unwrap().phase(), DragPhase::Dragging);
        board.pointer_move(card, Vec2::new(290.0, 5.0));
        assert_eq!(board.zone(zone).unwrap().visual(), ZoneVisual::Hover);

        let outcome = board.pointer_up(card, Vec2::new(290.0, 5.0));
        assert_eq!(outcome, Some(DropOutcome::Accepted(zone)));
        assert_eq!(board.assignment(card), Some(zone));
        assert_eq!(board.zone(zone).unwrap().visual(), ZoneVisual::Normal);
        assert_eq!(board.card(card).unwrap().phase(), DragPhase::Returning);

        assert!(board.settle_all(0.05, 100));
        assert_eq!(board.card(card).unwrap().position, Vec2::new(300.0, 0.0));
    }

    #[test]
    fn test_release_over_nothing_returns() {
        let (mut board, _, card) = board();
        board.pointer_down(card, Vec2::ZERO);
        board.pointer_move(card, Vec2::new(-500.0, -500.0));

        assert_eq!(board.pointer_up(card, Vec2::ZERO), Some(DropOutcome::NoZone));
        board.settle_all(0.05, 100);
        let c = board.card(card).unwrap();
        assert_eq!(c.position, Vec2::ZERO);
        assert_eq!(c.phase(), DragPhase::Idle);
        assert!(!c.is_assigned());
    }

    #[test]
    fn test_pointer_up_without_drag() {
        let (mut board, _, card) = board();
        assert_eq!(board.pointer_up(card, Vec2::ZERO), None);
        assert_eq!(board.pointer_up(CardHandle::new(42), Vec2::ZERO), None);
    }

    #[test]
    fn test_drag_visuals() {
        let (mut board, _, card) = board();
        board.pointer_enter(card);
        assert!((board.card(card).unwrap().scale - 1.1).abs() < 1e-6);

        board.pointer_down(card, Vec2::ZERO);
        let c = board.card(card).unwrap();
        assert!((c.scale - 1.2).abs() < 1e-6);
        assert!((c.alpha - 0.8).abs() < 1e-6);

        board.pointer_exit(card);
        assert!((board.card(card).unwrap().scale - 1.2).abs() < 1e-6);

        board.pointer_up(card, Vec2::ZERO);
        let c = board.card(card).unwrap();
        assert_eq!(c.scale, 1.0);
        assert_eq!(c.alpha, 1.0);
    }

    #[test]
    fn test_non_draggable_ignored() {
        let (mut board, _, card) = board();
        board.set_draggable(card, false);

        assert!(!board.pointer_down(card, Vec2::ZERO));
        board.pointer_enter(card);
        assert_eq!(board.card(card).unwrap().scale, 1.0);
        assert!(board.pending_notifications().is_empty());
    }

    #[test]
    fn test_handle_pointer_dispatch() {
        let (mut board, zone, card) = board();
        board.handle_pointer(PointerEvent::Down { card, position: Vec2::ZERO });
        board.handle_pointer(PointerEvent::Move { card, position: Vec2::new(300.0, 0.0) });
        let outcome = board.handle_pointer(PointerEvent::Up { card, position: Vec2::new(300.0, 0.0) });

        assert_eq!(outcome, Some(DropOutcome::Accepted(zone)));
        assert!(outcome.unwrap().is_accepted());
    }

    #[test]
    fn test_idle_member_follows_moved_zone() {
        let (mut board, zone, card) = board();
        board.place(card, zone);

        board.move_zone(zone, Vec2::new(310.0, 40.0));
        board.tick(0.016);
        assert_eq!(board.card(card).unwrap().position, Vec2::new(310.0, 40.0));
        assert_eq!(board.card(card).unwrap().rest_position, Vec2::new(310.0, 40.0));
    }

    #[test]
    fn test_returning_member_retargets() {
        let (mut board, zone, card) = board();
        board.pointer_down(card, Vec2::ZERO);
        board.pointer_move(card, Vec2::new(300.0, 100.0));
        board.pointer_up(card, Vec2::new(300.0, 100.0));

        board.move_zone(zone, Vec2::new(350.0, 0.0));
        board.settle_all(0.05, 100);
        assert_eq!(board.card(card).unwrap().position, Vec2::new(350.0, 0.0));
    }
}
