//! Board configuration types.
//!
//! Games configure the board at construction by providing:
//! - `DragConfig`: Pointer offset, hover/drag visual multipliers, thresholds
//! - `ReturnConfig`: Duration and easing of the settle/return animation
//! - `StackConfig`: Stack spread offset and compression parameters
//! - `ZoneConfig`: Per-zone acceptance, anchor, snap offset, bounds
//! - `BoardConfig`: Combines the board-wide settings
//!
//! Every struct can be loaded from JSON. Out-of-range values are never an
//! error: `sanitized()` clamps them to safe values and logs a warning, so a
//! drag session can always reach `Idle`.

use glam::Vec2;
use log::warn;
use serde::{Deserialize, Serialize};

use super::geometry::{finite_or, Easing};

/// Smallest accepted animation duration, in seconds.
pub const MIN_RETURN_DURATION: f32 = 0.01;

/// Longest accepted animation duration, in seconds.
pub const MAX_RETURN_DURATION: f32 = 10.0;

/// Smallest accepted scale multiplier.
pub const MIN_SCALE: f32 = 0.01;

fn clamp_finite(value: f32, min: f32, max: f32, fallback: f32, what: &str) -> f32 {
    if !value.is_finite() {
        warn!("{what} is not finite ({value}), using {fallback}");
        return fallback;
    }
    let clamped = value.clamp(min, max);
    if clamped != value {
        warn!("{what} {value} out of range, clamped to {clamped}");
    }
    clamped
}

/// Pointer and visual feedback settings shared by all cards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragConfig {
    /// Added to the projected pointer position while dragging.
    pub drag_offset: Vec2,

    /// Scale multiplier while the pointer hovers an idle card.
    pub hover_scale: f32,

    /// Scale multiplier while dragging.
    pub drag_scale: f32,

    /// Opacity while dragging.
    pub drag_alpha: f32,

    /// A card whose resting position ends within this distance of its
    /// drag-start position gets its pre-drag draw order back.
    pub restore_order_threshold: f32,

    /// Idle cards further than this from their slot snap to it on tick.
    pub follow_threshold: f32,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            drag_offset: Vec2::ZERO,
            hover_scale: 1.1,
            drag_scale: 1.2,
            drag_alpha: 0.8,
            restore_order_threshold: 10.0,
            follow_threshold: 1.0,
        }
    }
}

impl DragConfig {
    #[must_use]
    pub fn with_drag_offset(mut self, offset: Vec2) -> Self {
        self.drag_offset = offset;
        self
    }

    #[must_use]
    pub fn with_scales(mut self, hover: f32, drag: f32) -> Self {
        self.hover_scale = hover;
        self.drag_scale = drag;
        self
    }

    #[must_use]
    pub fn with_drag_alpha(mut self, alpha: f32) -> Self {
        self.drag_alpha = alpha;
        self
    }

    /// Clamp every field into its valid range.
    #[must_use]
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        Self {
            drag_offset: finite_or(self.drag_offset, Vec2::ZERO),
            hover_scale: clamp_finite(self.hover_scale, MIN_SCALE, f32::MAX, defaults.hover_scale, "hover_scale"),
            drag_scale: clamp_finite(self.drag_scale, MIN_SCALE, f32::MAX, defaults.drag_scale, "drag_scale"),
            drag_alpha: clamp_finite(self.drag_alpha, 0.0, 1.0, defaults.drag_alpha, "drag_alpha"),
            restore_order_threshold: clamp_finite(
                self.restore_order_threshold,
                0.0,
                f32::MAX,
                defaults.restore_order_threshold,
                "restore_order_threshold",
            ),
            follow_threshold: clamp_finite(
                self.follow_threshold,
                0.0,
                f32::MAX,
                defaults.follow_threshold,
                "follow_threshold",
            ),
        }
    }
}

/// Settle/return animation settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReturnConfig {
    /// Seconds from release to resting position.
    pub duration: f32,
    pub easing: Easing,
}

impl Default for ReturnConfig {
    fn default() -> Self {
        Self {
            duration: 0.3,
            easing: Easing::SmoothStep,
        }
    }
}

impl ReturnConfig {
    #[must_use]
    pub fn with_duration(mut self, duration: f32) -> Self {
        self.duration = duration;
        self
    }

    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    #[must_use]
    pub fn sanitized(self) -> Self {
        Self {
            duration: clamp_finite(
                self.duration,
                MIN_RETURN_DURATION,
                MAX_RETURN_DURATION,
                0.3,
                "return duration",
            ),
            easing: self.easing,
        }
    }
}

/// Stack spread and compression settings.
///
/// The per-member offset starts at `base_offset` and shrinks linearly to
/// `base_offset * min_offset_multiplier` as the stack grows to
/// `compression_window` members. It is then clamped per axis so the
/// whole spread fits inside `max_spread`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackConfig {
    pub base_offset: Vec2,
    pub max_spread: Vec2,
    pub min_offset_multiplier: f32,
    pub compression_window: usize,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            base_offset: Vec2::new(2.0, -2.0),
            max_spread: Vec2::new(40.0, 40.0),
            min_offset_multiplier: 0.25,
            compression_window: 8,
        }
    }
}

impl StackConfig {
    #[must_use]
    pub fn with_base_offset(mut self, offset: Vec2) -> Self {
        self.base_offset = offset;
        self
    }

    #[must_use]
    pub fn with_max_spread(mut self, spread: Vec2) -> Self {
        self.max_spread = spread;
        self
    }

    #[must_use]
    pub fn with_compression(mut self, min_multiplier: f32, window: usize) -> Self {
        self.min_offset_multiplier = min_multiplier;
        self.compression_window = window;
        self
    }

    #[must_use]
    pub fn sanitized(self) -> Self {
        let max_spread = finite_or(self.max_spread, Vec2::ZERO).abs();
        if max_spread != self.max_spread {
            warn!("max_spread {:?} normalized to {:?}", self.max_spread, max_spread);
        }
        let compression_window = if self.compression_window < 2 {
            warn!("compression_window {} raised to 2", self.compression_window);
            2
        } else {
            self.compression_window
        };
        Self {
            base_offset: finite_or(self.base_offset, Vec2::ZERO),
            max_spread,
            min_offset_multiplier: clamp_finite(
                self.min_offset_multiplier,
                0.0,
                1.0,
                0.25,
                "min_offset_multiplier",
            ),
            compression_window,
        }
    }
}

/// Zone-level acceptance gate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AcceptMode {
    /// Defer to the zone's stack (type-lock).
    #[default]
    AcceptAny,
    /// Refuse every drop, regardless of the stack.
    AcceptNothing,
}

/// Configuration for a single drop zone.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoneConfig {
    /// Human-readable name (for debugging/display).
    pub name: String,
    pub accept: AcceptMode,
    /// Center of the zone in board space.
    pub anchor: Vec2,
    /// Added to the anchor to get the first slot position.
    pub snap_offset: Vec2,
    /// Full width/height of the zone bounds.
    pub size: Vec2,
    pub stack: StackConfig,
}

impl Default for ZoneConfig {
    fn default() -> Self {
        Self {
            name: "Drop Zone".to_string(),
            accept: AcceptMode::AcceptAny,
            anchor: Vec2::ZERO,
            snap_offset: Vec2::ZERO,
            size: Vec2::new(200.0, 300.0),
            stack: StackConfig::default(),
        }
    }
}

impl ZoneConfig {
    /// Create a zone configuration at `anchor`.
    pub fn new(name: impl Into<String>, anchor: Vec2) -> Self {
        Self {
            name: name.into(),
            anchor,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn with_snap_offset(mut self, offset: Vec2) -> Self {
        self.snap_offset = offset;
        self
    }

    #[must_use]
    pub fn with_stack(mut self, stack: StackConfig) -> Self {
        self.stack = stack;
        self
    }

    /// Refuse all drops (display-only zone).
    #[must_use]
    pub fn accept_nothing(mut self) -> Self {
        self.accept = AcceptMode::AcceptNothing;
        self
    }

    #[must_use]
    pub fn sanitized(self) -> Self {
        let size = finite_or(self.size, ZoneConfig::default().size).abs();
        Self {
            anchor: finite_or(self.anchor, Vec2::ZERO),
            snap_offset: finite_or(self.snap_offset, Vec2::ZERO),
            size,
            stack: self.stack.sanitized(),
            ..self
        }
    }
}

/// Board-wide configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub drag: DragConfig,
    pub returning: ReturnConfig,
}

impl BoardConfig {
    #[must_use]
    pub fn with_drag(mut self, drag: DragConfig) -> Self {
        self.drag = drag;
        self
    }

    #[must_use]
    pub fn with_return(mut self, returning: ReturnConfig) -> Self {
        self.returning = returning;
        self
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn sanitized(self) -> Self {
        Self {
            drag: self.drag.sanitized(),
            returning: self.returning.sanitized(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BoardConfig::default();
        assert_eq!(config.drag.hover_scale, 1.1);
        assert_eq!(config.drag.drag_scale, 1.2);
        assert_eq!(config.drag.drag_alpha, 0.8);
        assert_eq!(config.returning.duration, 0.3);
        assert_eq!(config.returning.easing, Easing::SmoothStep);
    }

    #[test]
    fn test_builder_pattern() {
        let config = BoardConfig::default()
            .with_drag(DragConfig::default().with_drag_offset(Vec2::new(0.0, 12.0)))
            .with_return(ReturnConfig::default().with_duration(0.5));

        assert_eq!(config.drag.drag_offset, Vec2::new(0.0, 12.0));
        assert_eq!(config.returning.duration, 0.5);
    }

    #[test]
    fn test_sanitize_duration() {
        let config = ReturnConfig::default().with_duration(-1.0).sanitized();
        assert_eq!(config.duration, MIN_RETURN_DURATION);

        let config = ReturnConfig::default().with_duration(f32::NAN).sanitized();
        assert_eq!(config.duration, 0.3);

        let config = ReturnConfig::default().with_duration(1.0e7).sanitized();
        assert_eq!(config.duration, MAX_RETURN_DURATION);
    }

    #[test]
    fn test_sanitize_drag() {
        let config = DragConfig::default()
            .with_scales(0.0, -3.0)
            .with_drag_alpha(4.0)
            .sanitized();

        assert_eq!(config.hover_scale, MIN_SCALE);
        assert_eq!(config.drag_scale, MIN_SCALE);
        assert_eq!(config.drag_alpha, 1.0);
    }

    #[test]
    fn test_sanitize_stack() {
        let config = StackConfig::default()
            .with_max_spread(Vec2::new(-30.0, f32::INFINITY))
            .with_compression(1.5, 0)
            .sanitized();

        assert_eq!(config.max_spread, Vec2::new(30.0, 0.0));
        assert_eq!(config.min_offset_multiplier, 1.0);
        assert_eq!(config.compression_window, 2);
    }

    #[test]
    fn test_zone_config() {
        let zone = ZoneConfig::new("Weapons", Vec2::new(100.0, 50.0))
            .with_snap_offset(Vec2::new(0.0, 10.0))
            .accept_nothing();

        assert_eq!(zone.name, "Weapons");
        assert_eq!(zone.anchor, Vec2::new(100.0, 50.0));
        assert_eq!(zone.accept, AcceptMode::AcceptNothing);
        assert_eq!(zone.size, Vec2::new(200.0, 300.0));
    }

    #[test]
    fn test_from_json_partial() {
        let config = BoardConfig::from_json(r#"{ "returning": { "duration": 0.5 } }"#).unwrap();
        assert_eq!(config.returning.duration, 0.5);
        assert_eq!(config.returning.easing, Easing::SmoothStep);
        assert_eq!(config.drag, DragConfig::default());
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(BoardConfig::from_json("{ not json").is_err());
    }

    #[test]
    fn test_serialization() {
        let config = ZoneConfig::new("Armor", Vec2::new(5.0, 6.0));
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: ZoneConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
