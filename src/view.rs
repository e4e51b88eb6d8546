//! Read-only snapshots for rendering.
//!
//! The host polls these once per frame. Nothing here writes back into the
//! board.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{CardHandle, Rect, ZoneHandle};
use crate::drag::DragPhase;
use crate::zones::ZoneVisual;

/// Text shown on a card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardLabel {
    /// Name with the "+N" stack suffix.
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardView {
    pub handle: CardHandle,
    pub position: Vec2,
    pub scale: f32,
    pub alpha: f32,
    /// Back-to-front index in the draw list.
    pub draw_index: usize,
    pub dragging: bool,
    pub phase: DragPhase,
    pub zone: Option<ZoneHandle>,
    /// Zone the card was lifted out of, while a drag is in progress.
    pub origin_zone: Option<ZoneHandle>,
    pub stack_level: usize,
    pub label: CardLabel,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZoneView {
    pub handle: ZoneHandle,
    pub name: String,
    pub visual: ZoneVisual,
    pub hovering: bool,
    pub card_count: usize,
    pub locked_type: Option<String>,
    pub anchor: Vec2,
    pub bounds: Rect,
}

impl Board {
    #[must_use]
    pub fn card_view(&self, card: CardHandle) -> Option<CardView> {
        let c = self.cards.get(card)?;
        Some(CardView {
            handle: card,
            position: c.position,
            scale: c.scale,
            alpha: c.alpha,
            draw_index: self.cards.draw_index(card).unwrap_or(0),
            dragging: c.is_dragging(),
            phase: c.phase(),
            zone: c.zone,
            origin_zone: c.session.origin().and_then(|o| o.zone),
            stack_level: c.stack_level,
            label: CardLabel {
                title: c.data.display_name(c.stack_level),
                description: c.data.display_description(),
            },
        })
    }

    #[must_use]
    pub fn zone_view(&self, zone: ZoneHandle) -> Option<ZoneView> {
        let z = self.zones.get(zone)?;
        Some(ZoneView {
            handle: zone,
            name: z.name().to_string(),
            visual: z.visual(),
            hovering: z.is_card_hovering(),
            card_count: z.card_count(),
            locked_type: z.locked_type().map(str::to_string),
            anchor: z.anchor(),
            bounds: z.bounds(),
        })
    }

    /// Every card in draw order, back to front.
    #[must_use]
    pub fn card_views(&self) -> Vec<CardView> {
        self.cards
            .draw_list()
            .iter()
            .filter_map(|&h| self.card_view(h))
            .collect()
    }

    #[must_use]
    pub fn zone_views(&self) -> Vec<ZoneView> {
        self.zones.iter().filter_map(|z| self.zone_view(z.handle())).collect()
    }
}
