//! Zone registry for hit-testing.
//!
//! Zones register explicitly when created; the registry is what the input
//! adapter queries to find the zone under a point. Later registrations are
//! treated as drawn above earlier ones, so overlapping zones resolve to the
//! most recently registered.

use glam::Vec2;
use rustc_hash::FxHashMap;

use super::zone::DropZone;
use crate::core::{ZoneConfig, ZoneHandle};

/// All drop zones on a board.
///
/// ## Usage
///
/// ```
/// use glam::Vec2;
/// use rust_cardstack::core::ZoneConfig;
/// use rust_cardstack::zones::ZoneRegistry;
///
/// let mut zones = ZoneRegistry::new();
/// let hand = zones.register(ZoneConfig::new("Hand", Vec2::ZERO));
/// let gear = zones.register(ZoneConfig::new("Gear", Vec2::new(300.0, 0.0)));
///
/// assert_eq!(zones.zone_at(Vec2::new(10.0, 10.0)), Some(hand));
/// assert_eq!(zones.zone_at(Vec2::new(300.0, 0.0)), Some(gear));
/// assert_eq!(zones.zone_at(Vec2::new(1000.0, 0.0)), None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ZoneRegistry {
    zones: Vec<DropZone>,
    /// First zone registered under each name.
    by_name: FxHashMap<String, ZoneHandle>,
}

impl ZoneRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create and register a zone. Returns its handle.
    ///
    /// # Panics
    ///
    /// Panics once every `u16` handle is taken.
    pub fn register(&mut self, config: ZoneConfig) -> ZoneHandle {
        let index = u16::try_from(self.zones.len())
            .unwrap_or_else(|_| panic!("zone registry full: at most {} zones", u16::MAX as usize + 1));
        let handle = ZoneHandle::new(index);
        self.by_name.entry(config.name.clone()).or_insert(handle);
        self.zones.push(DropZone::new(handle, config));
        handle
    }

    #[must_use]
    pub fn get(&self, zone: ZoneHandle) -> Option<&DropZone> {
        self.zones.get(zone.index())
    }

    pub fn get_mut(&mut self, zone: ZoneHandle) -> Option<&mut DropZone> {
        self.zones.get_mut(zone.index())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DropZone> {
        self.zones.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut DropZone> {
        self.zones.iter_mut()
    }

    /// Does `zone`'s bounds contain `point`? False for unknown zones.
    #[must_use]
    pub fn contains(&self, zone: ZoneHandle, point: Vec2) -> bool {
        self.get(zone).is_some_and(|z| z.contains_point(point))
    }

    /// Topmost zone whose bounds contain `point`.
    #[must_use]
    pub fn zone_at(&self, point: Vec2) -> Option<ZoneHandle> {
        self.zones
            .iter()
            .rev()
            .find(|z| z.contains_point(point))
            .map(DropZone::handle)
    }

    /// Find a zone by name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<ZoneHandle> {
        self.by_name.get(name).copied()
    }
}

impl std::ops::Index<ZoneHandle> for ZoneRegistry {
    type Output = DropZone;

    fn index(&self, zone: ZoneHandle) -> &DropZone {
        self.get(zone)
            .unwrap_or_else(|| panic!("{zone} not found in zone registry"))
    }
}

impl std::ops::IndexMut<ZoneHandle> for ZoneRegistry {
    fn index_mut(&mut self, zone: ZoneHandle) -> &mut DropZone {
        self.get_mut(zone)
            .unwrap_or_else(|| panic!("{zone} not found in zone registry"))
    }
}
