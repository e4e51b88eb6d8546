//! Notifications raised by the board.
//!
//! Notifications are fire-and-forget: the board never reads a result back.
//! A `Notifier` forwards each one to at most one handler and also keeps it
//! in a queue, so callers can either subscribe or poll with `drain`.
//!
//! ## Example
//!
//! ```
//! use rust_cardstack::core::CardHandle;
//! use rust_cardstack::events::{Notification, Notifier};
//!
//! let mut notifier = Notifier::new();
//! notifier.raise(Notification::DragStarted { card: CardHandle::new(0) });
//!
//! let events: Vec<_> = notifier.drain().collect();
//! assert_eq!(events, vec![Notification::DragStarted { card: CardHandle::new(0) }]);
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{CardHandle, ZoneHandle};

/// Why a drop was refused.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectReason {
    /// The stack is locked to a different card id.
    TypeMismatch { locked: String, offered: String },
    /// The zone accepts nothing.
    ZoneRefused,
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectReason::TypeMismatch { locked, offered } => {
                write!(f, "stack locked to '{locked}', got '{offered}'")
            }
            RejectReason::ZoneRefused => write!(f, "zone accepts no cards"),
        }
    }
}

/// Something that happened on the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Notification {
    CardSelected { card: CardHandle },
    DragStarted { card: CardHandle },
    DragEnded { card: CardHandle },
    /// A dragged card entered a zone that would accept it.
    ZoneEntered { card: CardHandle, zone: ZoneHandle },
    ZoneExited { card: CardHandle, zone: ZoneHandle },
    /// A stack took the card.
    CardStacked { card: CardHandle, zone: ZoneHandle, stack_size: usize },
    /// A zone accepted a drop.
    CardDropped { card: CardHandle, zone: ZoneHandle },
    CardRejected { card: CardHandle, zone: ZoneHandle, reason: RejectReason },
}

impl Notification {
    /// The card the notification is about.
    #[must_use]
    pub fn card(&self) -> CardHandle {
        match self {
            Notification::CardSelected { card }
            | Notification::DragStarted { card }
            | Notification::DragEnded { card }
            | Notification::ZoneEntered { card, .. }
            | Notification::ZoneExited { card, .. }
            | Notification::CardStacked { card, .. }
            | Notification::CardDropped { card, .. }
            | Notification::CardRejected { card, .. } => *card,
        }
    }

    /// The zone involved, if any.
    #[must_use]
    pub fn zone(&self) -> Option<ZoneHandle> {
        match self {
            Notification::ZoneEntered { zone, .. }
            | Notification::ZoneExited { zone, .. }
            | Notification::CardStacked { zone, .. }
            | Notification::CardDropped { zone, .. }
            | Notification::CardRejected { zone, .. } => Some(*zone),
            _ => None,
        }
    }
}

/// Handler invoked for every notification.
pub type NotificationHandler = Box<dyn FnMut(&Notification)>;

/// Single-handler notification channel with a pending queue.
#[derive(Default)]
pub struct Notifier {
    handler: Option<NotificationHandler>,
    pending: Vec<Notification>,
}

impl Notifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the handler, replacing any previous one.
    pub fn set_handler(&mut self, handler: impl FnMut(&Notification) + 'static) {
        self.handler = Some(Box::new(handler));
    }

    pub fn clear_handler(&mut self) {
        self.handler = None;
    }

    pub fn raise(&mut self, notification: Notification) {
        if let Some(handler) = self.handler.as_mut() {
            handler(&notification);
        }
        self.pending.push(notification);
    }

    /// Notifications raised since the last drain.
    #[must_use]
    pub fn pending(&self) -> &[Notification] {
        &self.pending
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Notification> + '_ {
        self.pending.drain(..)
    }
}

impl std::fmt::Debug for Notifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifier")
            .field("has_handler", &self.handler.is_some())
            .field("pending", &self.pending)
            .finish()
    }
}
