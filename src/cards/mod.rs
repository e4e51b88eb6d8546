//! Card system: definitions, runtime instances, and the card arena.
//!
//! ## Key Types
//!
//! - `CardData`: Static identity and display data (`card_id`, name, kind)
//! - `CardArchetype`: Closed set of card kinds with capability queries
//! - `Bonuses`: Player bonuses, summed across a stack
//! - `Card`: Runtime state (position, visuals, assignment, drag session)
//! - `CardArena`: Card storage by handle plus the draw list

pub mod arena;
pub mod definition;
pub mod instance;

pub use arena::CardArena;
pub use definition::{Bonuses, CardArchetype, CardData, ItemCategory, MonsterStats};
pub use instance::Card;
