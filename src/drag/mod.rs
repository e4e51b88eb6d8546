//! Drag lifecycle: session state, return animation and the pointer
//! controller.

pub mod animation;
pub mod controller;
pub mod session;

pub use animation::ReturnAnimation;
pub use controller::DropOutcome;
pub use session::{DragOrigin, DragPhase, DragSession};
