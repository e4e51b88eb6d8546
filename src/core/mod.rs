//! Core board types: handles, geometry, configuration.
//!
//! This module contains the building blocks shared by cards, zones and
//! drag sessions. Games configure behavior via `BoardConfig` and
//! `ZoneConfig` rather than modifying the core.

pub mod config;
pub mod geometry;
pub mod handle;

pub use config::{AcceptMode, BoardConfig, DragConfig, ReturnConfig, StackConfig, ZoneConfig};
pub use geometry::{Easing, Rect};
pub use handle::{CardHandle, ZoneHandle};
