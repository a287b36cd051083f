//! Zones: subjects resolved against one card.
//!
//! Resolving a subject produces a `Zone` with concrete content, colour
//! and pixel size. A subject whose content doesn't resolve still
//! produces a zone, an empty zero-size placeholder, and the sequence
//! layout decides what to do with it.

use crate::cards::AttributeStore;
use crate::core::{ColorIndex, Image, TextRenderer};

use super::subject::{DrawSubject, SubjectKind};

/// Resolved content of a zone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ZoneContent<'a> {
    /// Wrapped lines of text, top to bottom.
    Text(Vec<String>),
    /// An image owned by the design.
    Image(&'a Image),
    /// Nothing resolved.
    Empty,
}

/// A sized, resolved region of a card face.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Zone<'a> {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Text colour.
    pub color: ColorIndex,
    /// What to draw.
    pub content: ZoneContent<'a>,
}

impl<'a> Zone<'a> {
    /// A zero-size placeholder for an unresolved subject.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            width: 0,
            height: 0,
            color: 0,
            content: ZoneContent::Empty,
        }
    }

    /// Check if the zone has nothing to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self.content, ZoneContent::Empty)
    }
}

/// Split text into lines of at most `columns` characters, keeping at
/// most `rows` lines.
///
/// Text that doesn't fit is cut off after the last allowed line; no
/// ellipsis is added. Limits below 1 are treated as 1.
#[must_use]
pub fn wrap_text(text: &str, columns: usize, rows: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(columns.max(1))
        .take(rows.max(1))
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Resolve a subject against a card.
#[must_use]
pub fn resolve_zone<'a>(
    subject: &'a DrawSubject,
    card: &AttributeStore,
    font: &dyn TextRenderer,
) -> Zone<'a> {
    let color = subject.color.as_int(card).clamp(0, ColorIndex::MAX as i64) as ColorIndex;

    match subject.kind {
        SubjectKind::Text { width, height } => {
            let text = subject.content.as_text(card);
            if text.is_empty() {
                return Zone::empty();
            }

            let char_width = font.char_width().max(1);
            let char_height = font.char_height().max(1);
            let columns = (width / char_width) as usize;
            let rows = (height / char_height) as usize;
            let lines = wrap_text(&text, columns, rows);

            // A single line shrinks to the text; wrapped text fills the column limit.
            let widest = match lines.as_slice() {
                [only] => only.chars().count(),
                _ => columns.max(1),
            };

            Zone {
                width: font.line_width(widest),
                height: lines.len() as u32 * font.char_height(),
                color,
                content: ZoneContent::Text(lines),
            }
        }
        SubjectKind::Image => match subject.content.as_image(card) {
            Some(image) => Zone {
                width: image.width(),
                height: image.height(),
                color,
                content: ZoneContent::Image(image),
            },
            None => Zone::empty(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{DynamicValue, LookupTable};
    use crate::core::BlockFont;

    #[test]
    fn test_wrap_fits_one_line() {
        assert_eq!(wrap_text("10", 4, 2), vec!["10"]);
    }

    #[test]
    fn test_wrap_chunks_by_columns() {
        assert_eq!(wrap_text("abcdefg", 3, 5), vec!["abc", "def", "g"]);
    }

    #[test]
    fn test_wrap_truncates_rows() {
        assert_eq!(wrap_text("abcdefghij", 3, 2), vec!["abc", "def"]);
    }

    #[test]
    fn test_wrap_zero_limits() {
        assert_eq!(wrap_text("ab", 0, 0), vec!["a"]);
        assert!(wrap_text("", 3, 3).is_empty());
    }

    #[test]
    fn test_text_zone_single_line() {
        let font = BlockFont::new(6, 8);
        let subject = DrawSubject::text(DynamicValue::from_attribute(0), 30, 16);
        let card = AttributeStore::new().with(0, 7);

        let zone = resolve_zone(&subject, &card, &font);
        assert_eq!(zone.width, 6);
        assert_eq!(zone.height, 8);
        assert_eq!(zone.color, 15);
        assert_eq!(zone.content, ZoneContent::Text(vec!["7".to_string()]));
    }

    #[test]
    fn test_text_zone_wrapped() {
        let font = BlockFont::new(6, 8);
        let subject = DrawSubject::text(DynamicValue::text("QUEEN"), 18, 40);
        let zone = resolve_zone(&subject, &AttributeStore::new(), &font);

        assert_eq!(zone.width, 18);
        assert_eq!(zone.height, 16);
        assert_eq!(
            zone.content,
            ZoneContent::Text(vec!["QUE".to_string(), "EN".to_string()])
        );
    }

    #[test]
    fn test_text_zone_empty_text() {
        let font = BlockFont::default();
        let subject = DrawSubject::text(DynamicValue::from_attribute(0), 30, 16);
        let zone = resolve_zone(&subject, &AttributeStore::new(), &font);
        assert!(zone.is_empty());
        assert_eq!((zone.width, zone.height), (0, 0));
    }

    #[test]
    fn test_image_zone() {
        let font = BlockFont::default();
        let icon = Image::filled(5, 4, 2);
        let subject = DrawSubject::image(DynamicValue::from_lookup(
            1,
            LookupTable::new().with(0, icon.clone()),
        ));

        let zone = resolve_zone(&subject, &AttributeStore::new().with(1, 0), &font);
        assert_eq!((zone.width, zone.height), (5, 4));
        assert_eq!(zone.content, ZoneContent::Image(&icon));

        let zone = resolve_zone(&subject, &AttributeStore::new().with(1, 3), &font);
        assert!(zone.is_empty());
    }

    #[test]
    fn test_color_clamped() {
        let font = BlockFont::default();
        let subject = DrawSubject::text(DynamicValue::text("x"), 6, 8).with_color(DynamicValue::int(400));
        assert_eq!(resolve_zone(&subject, &AttributeStore::new(), &font).color, 255);

        let subject = subject.with_color(DynamicValue::int(-1));
        assert_eq!(resolve_zone(&subject, &AttributeStore::new(), &font).color, 0);
    }
}
