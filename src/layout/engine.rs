//! Sequence layout and drawing.
//!
//! For each sequence the engine:
//! 1. resolves every subject into zones (repeated `repeat` times,
//!    empty zones dropped),
//! 2. sums the zones into a bounding box along the sequence's axis,
//! 3. anchors the box on the card from the sequence alignment,
//! 4. walks the zones, advancing along the axis by `extent + spacing`.
//!
//! The axis across the sequence is not shrink-wrapped: each zone is
//! placed against the card edges (or centre) on its own.

use log::trace;

use crate::cards::AttributeStore;
use crate::core::{Image, TextRenderer};

use super::subject::{AxisAlign, DrawSequence, Orientation};
use super::zone::{resolve_zone, Zone, ZoneContent};

/// The card area a sequence is laid out in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl CardRect {
    /// Create a card rectangle.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }
}

/// A zone with its absolute top-left position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacedZone<'a> {
    pub x: i32,
    pub y: i32,
    pub zone: Zone<'a>,
    /// Right-justify text lines inside the zone.
    pub justify_end: bool,
}

/// One sequence laid out on a card.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SequenceLayout<'a> {
    /// Bounding box width, spacing included.
    pub width: i32,
    /// Bounding box height, spacing included.
    pub height: i32,
    /// Zones in draw order.
    pub zones: Vec<PlacedZone<'a>>,
}

/// Most copies a single subject can contribute to a sequence.
///
/// Repeat counts come from card data; anything above this is clamped.
pub const MAX_REPEAT: usize = u16::MAX as usize;

/// Resolve a sequence's subjects into its zone list.
///
/// Each subject contributes `repeat` copies of its zone, clamped to
/// `0..=MAX_REPEAT`. Subjects whose content doesn't resolve contribute
/// nothing.
#[must_use]
pub fn collect_zones<'a>(
    sequence: &'a DrawSequence,
    card: &AttributeStore,
    font: &dyn TextRenderer,
) -> Vec<Zone<'a>> {
    let mut zones = Vec::new();
    for subject in &sequence.subjects {
        let repeat = subject.repeat.as_int(card).clamp(0, MAX_REPEAT as i64) as usize;
        if repeat == 0 {
            continue;
        }
        let zone = resolve_zone(subject, card, font);
        if zone.is_empty() {
            continue;
        }
        zones.extend(std::iter::repeat(zone).take(repeat));
    }
    zones
}

/// Bounding box `(width, height)` of a zone list.
///
/// Along the sequence axis zones are summed with `spacing` between
/// neighbours; across it the largest zone wins. No zones is `(0, 0)`.
#[must_use]
pub fn sequence_bounds(zones: &[Zone<'_>], orientation: Orientation, spacing: i32) -> (i32, i32) {
    if zones.is_empty() {
        return (0, 0);
    }

    let gaps = spacing * (zones.len() as i32 - 1);
    let along: i32 = zones.iter().map(|z| along_extent(z, orientation)).sum::<i32>() + gaps;
    let across = zones.iter().map(|z| across_extent(z, orientation)).max().unwrap_or(0);

    match orientation {
        Orientation::Horizontal => (along, across),
        Orientation::Vertical => (across, along),
    }
}

fn along_extent(zone: &Zone<'_>, orientation: Orientation) -> i32 {
    match orientation {
        Orientation::Horizontal => zone.width as i32,
        Orientation::Vertical => zone.height as i32,
    }
}

fn across_extent(zone: &Zone<'_>, orientation: Orientation) -> i32 {
    match orientation {
        Orientation::Horizontal => zone.height as i32,
        Orientation::Vertical => zone.width as i32,
    }
}

/// Position of something `extent` long placed on a card edge of
/// length `card` starting at `origin`.
#[must_use]
pub fn axis_anchor(align: AxisAlign, origin: i32, card: u32, extent: i32) -> i32 {
    match align {
        AxisAlign::Start => origin,
        AxisAlign::Center => origin + (card as i32 - extent) / 2,
        AxisAlign::End => origin + card as i32 - extent,
    }
}

/// Lay out one sequence on a card without drawing it.
#[must_use]
pub fn layout_sequence<'a>(
    sequence: &'a DrawSequence,
    card: &AttributeStore,
    font: &dyn TextRenderer,
    rect: CardRect,
    spacing: i32,
) -> SequenceLayout<'a> {
    let zones = collect_zones(sequence, card, font);
    if zones.is_empty() {
        return SequenceLayout::default();
    }

    let (width, height) = sequence_bounds(&zones, sequence.orientation, spacing);
    let h_align = sequence.alignment.horizontal();
    let v_align = sequence.alignment.vertical();
    let justify_end = h_align == AxisAlign::End;

    let mut cursor = match sequence.orientation {
        Orientation::Horizontal => axis_anchor(h_align, rect.x, rect.width, width),
        Orientation::Vertical => axis_anchor(v_align, rect.y, rect.height, height),
    };

    let mut placed = Vec::with_capacity(zones.len());
    for zone in zones {
        let (x, y, advance) = match sequence.orientation {
            Orientation::Horizontal => {
                let y = axis_anchor(v_align, rect.y, rect.height, zone.height as i32);
                (cursor, y, zone.width as i32)
            }
            Orientation::Vertical => {
                let x = axis_anchor(h_align, rect.x, rect.width, zone.width as i32);
                (x, cursor, zone.height as i32)
            }
        };
        placed.push(PlacedZone {
            x,
            y,
            zone,
            justify_end,
        });
        cursor += advance + spacing;
    }

    trace!(
        "laid out {:?} sequence: {} zones in {}x{}",
        sequence.alignment,
        placed.len(),
        width,
        height
    );

    SequenceLayout {
        width,
        height,
        zones: placed,
    }
}

/// Draw a laid-out sequence onto `target`.
pub fn draw_layout(target: &mut Image, layout: &SequenceLayout<'_>, font: &dyn TextRenderer) {
    for placed in &layout.zones {
        let zone = &placed.zone;
        match &zone.content {
            ZoneContent::Image(image) => target.draw_transparent(image, placed.x, placed.y),
            ZoneContent::Text(lines) => {
                let mut y = placed.y;
                for line in lines {
                    let x = if placed.justify_end {
                        placed.x + zone.width as i32 - font.line_width(line.chars().count()) as i32
                    } else {
                        placed.x
                    };
                    font.print(target, line, x, y, zone.color);
                    y += font.char_height() as i32;
                }
            }
            ZoneContent::Empty => {}
        }
    }
}
