//! Drop zones and their stacks.
//!
//! ## Key Types
//!
//! - `DropZone`: Acceptance gate, hover feedback, owns one `Stack`
//! - `Stack`: Ordered, type-locked members with compressed spread layout
//! - `ZoneRegistry`: Explicit zone registration and hit-testing
//! - `ZoneVisual`: `Normal | Hover | Rejected`

pub mod registry;
pub mod stack;
pub mod zone;

pub use registry::ZoneRegistry;
pub use stack::{Stack, StackMembers};
pub use zone::{DropZone, ZoneVisual};

// Re-export zone configuration from core for convenience
pub use crate::core::config::{AcceptMode, StackConfig, ZoneConfig};
