//! Ordered, type-locked card stacks.
//!
//! A stack belongs to exactly one drop zone. Its members are kept in
//! insertion order: index 0 is the bottom, the last member is the most
//! recently added and draws on top.
//!
//! ## Type lock
//!
//! The first card added to an empty stack locks it to that card's
//! `card_id`. Later cards must match exactly. The lock is released only
//! when the last member leaves.
//!
//! ## Layout
//!
//! Every member is visible. Member `i` sits at
//! `base + i * offset(N)` where `offset(N)` is the configured base offset
//! compressed for a stack of `N` members:
//!
//! ```text
//! factor(N) = lerp(1, min_offset_multiplier, clamp((N-1)/(window-1), 0, 1))
//! offset(N) = clamp_per_axis(base_offset * factor(N), max_spread / N)
//! ```
//!
//! so the per-member offset never grows with `N` and the whole spread stays
//! inside `max_spread`.

use glam::Vec2;
use log::debug;
use smallvec::SmallVec;

use crate::cards::{Bonuses, Card, CardArena};
use crate::core::{CardHandle, StackConfig, ZoneHandle};
use crate::drag::DragPhase;
use crate::events::{Notification, Notifier, RejectReason};

/// Member list; most stacks are small.
pub type StackMembers = SmallVec<[CardHandle; 8]>;

/// A zone's card stack.
#[derive(Clone, Debug)]
pub struct Stack {
    owner: ZoneHandle,
    members: StackMembers,
    locked_type: Option<String>,
    config: StackConfig,
}

impl Stack {
    /// Create an empty, unlocked stack owned by `owner`.
    #[must_use]
    pub fn new(owner: ZoneHandle, config: StackConfig) -> Self {
        Self {
            owner,
            members: SmallVec::new(),
            locked_type: None,
            config: config.sanitized(),
        }
    }

    #[must_use]
    pub fn owner(&self) -> ZoneHandle {
        self.owner
    }

    #[must_use]
    pub fn config(&self) -> &StackConfig {
        &self.config
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members bottom to top.
    #[must_use]
    pub fn members(&self) -> &[CardHandle] {
        &self.members
    }

    /// Most recently added member.
    #[must_use]
    pub fn top(&self) -> Option<CardHandle> {
        self.members.last().copied()
    }

    #[must_use]
    pub fn contains(&self, card: CardHandle) -> bool {
        self.members.contains(&card)
    }

    /// Index of `card` in the stack, bottom = 0.
    #[must_use]
    pub fn slot_of(&self, card: CardHandle) -> Option<usize> {
        self.members.iter().position(|&m| m == card)
    }

    /// The card id this stack is locked to. `None` iff the stack is empty.
    #[must_use]
    pub fn locked_type(&self) -> Option<&str> {
        self.locked_type.as_deref()
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked_type.is_some()
    }

    /// Why `card` would be refused, if it would.
    #[must_use]
    pub fn rejection(&self, card: &Card) -> Option<RejectReason> {
        match &self.locked_type {
            Some(locked) if locked != card.card_id() => Some(RejectReason::TypeMismatch {
                locked: locked.clone(),
                offered: card.card_id().to_string(),
            }),
            _ => None,
        }
    }

    /// True if the stack is empty or locked to `card`'s id.
    #[must_use]
    pub fn can_accept(&self, card: &Card) -> bool {
        self.rejection(card).is_none()
    }

    /// Per-member offset for a stack of `size` members.
    #[must_use]
    pub fn compressed_offset(&self, size: usize) -> Vec2 {
        let n = size.max(1);
        let window = self.config.compression_window.max(2);
        let t = ((n - 1) as f32 / (window - 1) as f32).min(1.0);
        let factor = 1.0 + (self.config.min_offset_multiplier - 1.0) * t;
        let offset = self.config.base_offset * factor;
        let limit = self.config.max_spread / n as f32;
        Vec2::new(offset.x.clamp(-limit.x, limit.x), offset.y.clamp(-limit.y, limit.y))
    }

    /// Position of `slot` in the current layout, relative to `base`.
    #[must_use]
    pub fn slot_position(&self, base: Vec2, slot: usize) -> Vec2 {
        base + self.compressed_offset(self.len()) * slot as f32
    }

    /// Where a new top member would sit once added.
    #[must_use]
    pub fn snap_position_for_next_insertion(&self, base: Vec2) -> Vec2 {
        let size = self.len();
        base + self.compressed_offset(size + 1) * size as f32
    }

    /// Add `card` on top if the type lock allows it.
    ///
    /// On refusal raises `CardRejected` and leaves the stack untouched.
    /// On success locks an empty stack, re-lays out every member and
    /// raises `CardStacked`.
    pub fn try_add(
        &mut self,
        card: CardHandle,
        base: Vec2,
        cards: &mut CardArena,
        notifier: &mut Notifier,
    ) -> bool {
        if self.contains(card) {
            return true;
        }
        if let Some(reason) = self.rejection(&cards[card]) {
            debug!("{} rejected by {}: {}", card, self.owner, reason);
            notifier.raise(Notification::CardRejected {
                card,
                zone: self.owner,
                reason,
            });
            return false;
        }

        if self.members.is_empty() {
            self.locked_type = Some(cards[card].card_id().to_string());
        }
        self.members.push(card);
        self.recompute_layout(base, cards);

        debug!(
            "'{}' stacked in {}. Stack size: {}",
            cards[card].data.name,
            self.owner,
            self.len()
        );
        notifier.raise(Notification::CardStacked {
            card,
            zone: self.owner,
            stack_size: self.len(),
        });
        true
    }

    /// Remove `card`. No-op (returns false) if it is not a member.
    pub fn remove(&mut self, card: CardHandle, base: Vec2, cards: &mut CardArena) -> bool {
        let Some(index) = self.slot_of(card) else {
            return false;
        };

        if self.members.len() == 1 {
            self.clear(cards);
            return true;
        }

        self.members.remove(index);
        cards[card].unassign();
        self.recompute_layout(base, cards);

        debug!("{} removed from {}. Remaining size: {}", card, self.owner, self.len());
        true
    }

    /// Remove every member and release the lock. Returns the former members.
    pub fn clear(&mut self, cards: &mut CardArena) -> StackMembers {
        let removed = std::mem::take(&mut self.members);
        for &member in &removed {
            if let Some(card) = cards.get_mut(member) {
                card.unassign();
            }
        }
        self.locked_type = None;
        debug!("{} stack cleared", self.owner);
        removed
    }

    /// Place every member, order them bottom to top in the draw list and
    /// update their stack level.
    ///
    /// Members in the middle of a return animation keep their position;
    /// the animation retargets to the slot on the next tick.
    pub fn recompute_layout(&self, base: Vec2, cards: &mut CardArena) {
        let size = self.len();
        let offset = self.compressed_offset(size);
        for (slot, &member) in self.members.iter().enumerate() {
            let slot_pos = base + offset * slot as f32;
            let card = &mut cards[member];
            card.assign(self.owner, slot, size);
            card.rest_position = slot_pos;
            if card.phase() == DragPhase::Idle {
                card.position = slot_pos;
            }
        }
        cards.arrange_ascending(&self.members);
    }

    /// Sum of the bonuses of every member.
    #[must_use]
    pub fn total_bonuses(&self, cards: &CardArena) -> Bonuses {
        self.members
            .iter()
            .filter_map(|&m| cards.get(m))
            .map(|c| c.data.bonuses())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardData;

    const ZONE: ZoneHandle = ZoneHandle(0);

    fn config() -> StackConfig {
        StackConfig::default()
            .with_base_offset(Vec2::new(8.0, -8.0))
            .with_max_spread(Vec2::new(40.0, 40.0))
            .with_compression(0.25, 8)
    }

    fn setup(ids: &[&str]) -> (Stack, CardArena, Notifier, Vec<CardHandle>) {
        let mut arena = CardArena::new();
        let handles = ids
            .iter()
            .map(|id| arena.insert(CardData::loot(*id, *id), Vec2::new(500.0, 500.0)))
            .collect();
        (Stack::new(ZONE, config()), arena, Notifier::new(), handles)
    }

    #[test]
    fn test_first_card_locks_stack() {
        let (mut stack, mut cards, mut n, h) = setup(&["sword"]);
        let base = Vec2::new(100.0, 100.0);

        assert!(stack.try_add(h[0], base, &mut cards, &mut n));
        assert_eq!(stack.locked_type(), Some("sword"));
        assert_eq!(stack.len(), 1);
        assert_eq!(cards[h[0]].position, base);
        assert_eq!(cards[h[0]].zone, Some(ZONE));
        assert_eq!(cards[h[0]].stack_level, 1);
    }

    #[test]
    fn test_mismatch_rejected() {
        let (mut stack, mut cards, mut n, h) = setup(&["sword", "shield"]);
        stack.try_add(h[0], Vec2::ZERO, &mut cards, &mut n);
        n.drain().count();

        assert!(!stack.try_add(h[1], Vec2::ZERO, &mut cards, &mut n));
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.locked_type(), Some("sword"));
        assert!(!cards[h[1]].is_assigned());
        assert!(matches!(
            n.pending(),
            [Notification::CardRejected { reason: RejectReason::TypeMismatch { .. }, .. }]
        ));
    }

    #[test]
    fn test_stack_levels_follow_size() {
        let (mut stack, mut cards, mut n, h) = setup(&["gem", "gem", "gem"]);
        for &c in &h {
            stack.try_add(c, Vec2::ZERO, &mut cards, &mut n);
        }
        assert!(h.iter().all(|&c| cards[c].stack_level == 3));
        assert_eq!(cards[h[2]].stack_slot, Some(2));

        stack.remove(h[1], Vec2::ZERO, &mut cards);
        assert_eq!(cards[h[0]].stack_level, 2);
        assert_eq!(cards[h[2]].stack_level, 2);
        assert_eq!(cards[h[2]].stack_slot, Some(1));
        assert_eq!(cards[h[1]].stack_level, 1);
    }

    #[test]
    fn test_remove_last_clears_lock() {
        let (mut stack, mut cards, mut n, h) = setup(&["sword", "sword"]);
        stack.try_add(h[0], Vec2::ZERO, &mut cards, &mut n);
        stack.try_add(h[1], Vec2::ZERO, &mut cards, &mut n);

        assert!(stack.remove(h[0], Vec2::ZERO, &mut cards));
        assert_eq!(stack.locked_type(), Some("sword"));
        assert!(stack.remove(h[1], Vec2::ZERO, &mut cards));
        assert_eq!(stack.locked_type(), None);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_remove_non_member_is_noop() {
        let (mut stack, mut cards, mut n, h) = setup(&["sword", "sword"]);
        stack.try_add(h[0], Vec2::ZERO, &mut cards, &mut n);
        let before = cards[h[0]].position;

        assert!(!stack.remove(h[1], Vec2::new(50.0, 50.0), &mut cards));
        assert_eq!(stack.members(), &[h[0]]);
        assert_eq!(cards[h[0]].position, before);
    }

    #[test]
    fn test_empty_id_is_its_own_type() {
        let (mut stack, mut cards, mut n, h) = setup(&["", "", "sword"]);
        assert!(stack.try_add(h[0], Vec2::ZERO, &mut cards, &mut n));
        assert_eq!(stack.locked_type(), Some(""));
        assert!(stack.try_add(h[1], Vec2::ZERO, &mut cards, &mut n));
        assert!(!stack.try_add(h[2], Vec2::ZERO, &mut cards, &mut n));
    }

    #[test]
    fn test_compression_monotonic_and_bounded() {
        let stack = Stack::new(ZONE, config());
        let mut previous = f32::MAX;
        for n in 1..=40 {
            let offset = stack.compressed_offset(n);
            assert!(offset.x.abs() <= previous + 1e-6);
            previous = offset.x.abs();

            let span = offset.abs() * (n - 1) as f32;
            assert!(span.x <= 40.0 + 1e-4 && span.y <= 40.0 + 1e-4);
        }
    }

    #[test]
    fn test_compression_reaches_minimum_at_window() {
        let stack = Stack::new(ZONE, config().with_max_spread(Vec2::splat(1000.0)));
        assert_eq!(stack.compressed_offset(1), Vec2::new(8.0, -8.0));
        assert_eq!(stack.compressed_offset(8), Vec2::new(2.0, -2.0));
        assert_eq!(stack.compressed_offset(20), Vec2::new(2.0, -2.0));
    }

    #[test]
    fn test_next_insertion_matches_layout() {
        let (mut stack, mut cards, mut n, h) = setup(&["gem", "gem", "gem"]);
        let base = Vec2::new(10.0, 10.0);
        for &c in &h {
            let predicted = stack.snap_position_for_next_insertion(base);
            stack.try_add(c, base, &mut cards, &mut n);
            let top = stack.slot_position(base, stack.len() - 1);
            assert_eq!(predicted, top);
        }
    }

    #[test]
    fn test_draw_order_ascending() {
        let (mut stack, mut cards, mut n, h) = setup(&["gem", "gem", "other"]);
        // Draw list becomes [1, 2, 0]: the first member starts above the second.
        cards.bring_to_front(h[0]);
        stack.try_add(h[0], Vec2::ZERO, &mut cards, &mut n);
        stack.try_add(h[1], Vec2::ZERO, &mut cards, &mut n);

        assert_eq!(cards.draw_list(), &[h[0], h[2], h[1]]);
    }

    #[test]
    fn test_total_bonuses() {
        let mut cards = CardArena::new();
        let mut n = Notifier::new();
        let data = CardData::loot("ring", "Ring").with_bonuses(Bonuses::default().speed(2));
        let a = cards.insert(data.clone(), Vec2::ZERO);
        let b = cards.insert(data, Vec2::ZERO);

        let mut stack = Stack::new(ZONE, config());
        stack.try_add(a, Vec2::ZERO, &mut cards, &mut n);
        stack.try_add(b, Vec2::ZERO, &mut cards, &mut n);

        assert_eq!(stack.total_bonuses(&cards).speed, 4);
    }
}
