//! Stable handles into the board arenas.
//!
//! Cards and zones never own each other. A zone's stack holds an ordered
//! list of `CardHandle`s, and a card holds an optional `ZoneHandle` for its
//! assignment. Handles are plain indices allocated by the `Board` in
//! registration order and are never reused.
//!
//! ## Usage
//!
//! ```
//! use rust_cardstack::core::{CardHandle, ZoneHandle};
//!
//! let card = CardHandle::new(3);
//! let zone = ZoneHandle::new(0);
//!
//! assert_eq!(card.index(), 3);
//! assert_eq!(format!("{}", zone), "Zone(0)");
//! ```

use serde::{Deserialize, Serialize};

/// Handle to a card stored in a `CardArena`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardHandle(pub u32);

impl CardHandle {
    /// Create a card handle from a raw index.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Arena index of this card.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw handle value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for CardHandle {
    fn from(index: u32) -> Self {
        Self(index)
    }
}

impl std::fmt::Display for CardHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Handle to a drop zone stored in a `ZoneRegistry`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ZoneHandle(pub u16);

impl ZoneHandle {
    /// Create a zone handle from a raw index.
    #[must_use]
    pub const fn new(index: u16) -> Self {
        Self(index)
    }

    /// Registry index of this zone.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw handle value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for ZoneHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Zone({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_handle_index() {
        assert_eq!(CardHandle::new(0).index(), 0);
        assert_eq!(CardHandle::new(41).index(), 41);
        assert_eq!(CardHandle::from(7).raw(), 7);
    }

    #[test]
    fn test_zone_handle_index() {
        assert_eq!(ZoneHandle::new(2).index(), 2);
        assert_eq!(ZoneHandle::new(2).raw(), 2);
    }

    #[test]
    fn test_ordering() {
        assert!(CardHandle::new(1) < CardHandle::new(2));
        assert!(ZoneHandle::new(0) < ZoneHandle::new(5));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", CardHandle(42)), "Card(42)");
        assert_eq!(format!("{}", ZoneHandle(3)), "Zone(3)");
    }

    #[test]
    fn test_serialization() {
        let card = CardHandle(123);
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: CardHandle = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
