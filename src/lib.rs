//! # rust-cardstack
//!
//! Drag-and-drop card stacking: cards picked up with a pointer, dropped
//! into zones that hold ordered, type-locked stacks.
//!
//! ## Design Principles
//!
//! 1. **Handles, not references**: Cards and zones live in arenas on the
//!    `Board` and refer to each other through `CardHandle`/`ZoneHandle`.
//!
//! 2. **Frame-driven**: Pointer events and `Board::tick` are the only
//!    things that change state. Return motion is an explicit timer, so a
//!    new pointer-down cancels it by overwriting the session.
//!
//! 3. **Host owns the screen**: Rendering and hit-testing belong to the
//!    host. The board reads geometry through an `InputAdapter` and exposes
//!    read-only `CardView`/`ZoneView` snapshots.
//!
//! ## Modules
//!
//! - `core`: Handles, geometry, configuration
//! - `cards`: Card data, runtime cards, the card arena and draw list
//! - `zones`: Drop zones, stacks, zone registry
//! - `drag`: Drag sessions, return animation, pointer controller
//! - `events`: Notifications raised by the board
//! - `input`: Pointer events and the `InputAdapter` trait
//! - `board`: The `Board` that owns everything
//! - `view`: Snapshots for rendering
//!
//! ## Example
//!
//! ```
//! use glam::Vec2;
//! use rust_cardstack::{Board, CardData, DropOutcome, Notification, ZoneConfig};
//!
//! let mut board = Board::default();
//! let gear = board.add_zone(ZoneConfig::new("Gear", Vec2::new(300.0, 0.0)));
//! let sword = board.add_card(CardData::loot("sword", "Sword"), Vec2::ZERO);
//!
//! board.pointer_down(sword, Vec2::ZERO);
//! board.pointer_move(sword, Vec2::new(300.0, 0.0));
//! let outcome = board.pointer_up(sword, Vec2::new(300.0, 0.0));
//!
//! assert_eq!(outcome, Some(DropOutcome::Accepted(gear)));
//! assert!(board
//!     .drain_notifications()
//!     .contains(&Notification::CardDropped { card: sword, zone: gear }));
//! ```

pub mod board;
pub mod cards;
pub mod core;
pub mod drag;
pub mod events;
pub mod input;
pub mod view;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    AcceptMode, BoardConfig, DragConfig, ReturnConfig, StackConfig, ZoneConfig,
    Easing, Rect,
    CardHandle, ZoneHandle,
};

pub use crate::cards::{Bonuses, Card, CardArchetype, CardArena, CardData, ItemCategory, MonsterStats};

pub use crate::zones::{DropZone, Stack, StackMembers, ZoneRegistry, ZoneVisual};

pub use crate::drag::{DragOrigin, DragPhase, DragSession, DropOutcome, ReturnAnimation};

pub use crate::events::{Notification, NotificationHandler, Notifier, RejectReason};

pub use crate::input::{CanvasProjection, DirectInput, InputAdapter, PointerEvent};

pub use crate::board::Board;

pub use crate::view::{CardLabel, CardView, ZoneView};
