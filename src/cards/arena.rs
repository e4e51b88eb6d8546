//! Card storage and draw order.
//!
//! The `CardArena` owns every card on the board and the draw list: the
//! back-to-front order cards are rendered in (the last entry is on top).

use glam::Vec2;

use super::definition::CardData;
use super::instance::Card;
use crate::core::CardHandle;

/// Arena of cards indexed by `CardHandle`.
///
/// ## Example
///
/// ```
/// use glam::Vec2;
/// use rust_cardstack::cards::{CardArena, CardData};
///
/// let mut arena = CardArena::new();
/// let a = arena.insert(CardData::loot("sword", "Sword"), Vec2::ZERO);
/// let b = arena.insert(CardData::loot("shield", "Shield"), Vec2::ZERO);
///
/// assert_eq!(arena.draw_list(), &[a, b]);
/// arena.bring_to_front(a);
/// assert_eq!(arena.draw_list(), &[b, a]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardArena {
    cards: Vec<Card>,
    draw_order: Vec<CardHandle>,
}

impl CardArena {
    /// Create a new empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a card on top of the draw list and return its handle.
    ///
    /// # Panics
    ///
    /// Panics once every `u32` handle is taken.
    pub fn insert(&mut self, data: CardData, position: Vec2) -> CardHandle {
        let index = u32::try_from(self.cards.len())
            .unwrap_or_else(|_| panic!("card arena full: at most {} cards", u32::MAX as u64 + 1));
        let handle = CardHandle::new(index);
        self.cards.push(Card::new(handle, data, position));
        self.draw_order.push(handle);
        handle
    }

    #[must_use]
    pub fn get(&self, handle: CardHandle) -> Option<&Card> {
        self.cards.get(handle.index())
    }

    pub fn get_mut(&mut self, handle: CardHandle) -> Option<&mut Card> {
        self.cards.get_mut(handle.index())
    }

    /// Get a card, panicking if the handle is foreign to this arena.
    #[must_use]
    pub fn get_unchecked(&self, handle: CardHandle) -> &Card {
        self.cards
            .get(handle.index())
            .unwrap_or_else(|| panic!("{handle} not found in card arena"))
    }

    pub fn get_unchecked_mut(&mut self, handle: CardHandle) -> &mut Card {
        self.cards
            .get_mut(handle.index())
            .unwrap_or_else(|| panic!("{handle} not found in card arena"))
    }

    #[must_use]
    pub fn contains(&self, handle: CardHandle) -> bool {
        handle.index() < self.cards.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Card> {
        self.cards.iter_mut()
    }

    pub fn handles(&self) -> impl Iterator<Item = CardHandle> + '_ {
        self.cards.iter().map(|c| c.handle)
    }

    /// Back-to-front render order.
    #[must_use]
    pub fn draw_list(&self) -> &[CardHandle] {
        &self.draw_order
    }

    /// Position of `handle` in the draw list.
    #[must_use]
    pub fn draw_index(&self, handle: CardHandle) -> Option<usize> {
        self.draw_order.iter().position(|&h| h == handle)
    }

    /// Move a card to the top of the draw list.
    pub fn bring_to_front(&mut self, handle: CardHandle) {
        if let Some(i) = self.draw_index(handle) {
            self.draw_order.remove(i);
            self.draw_order.push(handle);
        }
    }

    /// Move a card to `index` (clamped) in the draw list.
    pub fn set_draw_index(&mut self, handle: CardHandle, index: usize) {
        if let Some(i) = self.draw_index(handle) {
            self.draw_order.remove(i);
            let index = index.min(self.draw_order.len());
            self.draw_order.insert(index, handle);
        }
    }

    /// Reorder `members` so they draw in the given order, reusing the
    /// draw slots they already occupy. Other cards keep their slots.
    pub fn arrange_ascending(&mut self, members: &[CardHandle]) {
        let mut slots: Vec<usize> = members.iter().filter_map(|&h| self.draw_index(h)).collect();
        if slots.len() != members.len() {
            return;
        }
        slots.sort_unstable();
        for (&slot, &member) in slots.iter().zip(members) {
            self.draw_order[slot] = member;
        }
    }
}

impl std::ops::Index<CardHandle> for CardArena {
    type Output = Card;

    fn index(&self, handle: CardHandle) -> &Card {
        self.get_unchecked(handle)
    }
}

impl std::ops::IndexMut<CardHandle> for CardArena {
    fn index_mut(&mut self, handle: CardHandle) -> &mut Card {
        self.get_unchecked_mut(handle)
    }
}
