//! Card designs: the shared look of a family of cards.
//!
//! A `CardDesign` owns the frame art, the declarative face layout and
//! the stack parameters. It is built once and then used to draw every
//! card of the family; cards only contribute their `AttributeStore`.

use log::debug;

use crate::cards::AttributeStore;
use crate::core::{BlockFont, DesignError, FrameKind, Image, ResizableFrame, TextRenderer};
use crate::layout::{draw_layout, layout_sequence, CardRect, DrawSequence, SequenceLayout};

use super::stack::{StackFrames, StackGeometry};

/// Everything needed to draw one family of cards.
///
/// ## Example
///
/// ```
/// use card_face::cards::{AttributeStore, DynamicValue};
/// use card_face::core::Image;
/// use card_face::design::CardDesign;
/// use card_face::layout::{Alignment, DrawSequence, DrawSubject, Orientation};
///
/// let design = CardDesign::builder(12, 20)
///     .front(Image::filled(12, 20, 1))
///     .back(Image::filled(12, 20, 2))
///     .front_stack(Image::filled(3, 3, 1))
///     .back_stack(Image::filled(3, 3, 2))
///     .sequence(
///         DrawSequence::new(Alignment::Center, Orientation::Horizontal)
///             .with_subject(DrawSubject::text(DynamicValue::from_attribute(0), 12, 8)),
///     )
///     .build()
///     .unwrap();
///
/// let card = AttributeStore::new().with(0, "7");
/// let mut screen = Image::new(40, 40);
/// design.draw_card_front(&mut screen, 0, 0, &card);
///
/// assert_eq!(screen.get_pixel(0, 0), Some(1));
/// assert_eq!(screen.get_pixel(3, 6), Some(15)); // the "7"
/// ```
pub struct CardDesign {
    width: u32,
    height: u32,
    front: Image,
    back: Image,
    blank: Option<Image>,
    stack_frames: StackFrames,
    stack: StackGeometry,
    sequences: Vec<DrawSequence>,
    spacing: i32,
    font: Box<dyn TextRenderer>,
}

impl std::fmt::Debug for CardDesign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardDesign")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("stack", &self.stack)
            .field("sequences", &self.sequences.len())
            .field("spacing", &self.spacing)
            .finish_non_exhaustive()
    }
}

/// Scale art to exactly `width x height`, passing it through when it
/// already fits.
fn normalize(art: Image, width: u32, height: u32, kind: &str) -> Image {
    if art.width() == width && art.height() == height {
        return art;
    }
    debug!(
        "resizing {} art from {}x{} to {}x{}",
        kind,
        art.width(),
        art.height(),
        width,
        height
    );
    ResizableFrame::new(art).render(width, height)
}

impl CardDesign {
    /// Create a design from all of its parts.
    ///
    /// Front, back and blank art are resized to the card size if they
    /// don't already match. Text is drawn with the default `BlockFont`;
    /// use the builder to pick another renderer.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        width: u32,
        height: u32,
        front: Image,
        back: Image,
        blank: Option<Image>,
        front_stack: Image,
        back_stack: Image,
        cards_per_unit: u32,
        max_stack_thickness: u32,
        sequences: Vec<DrawSequence>,
        spacing: i32,
    ) -> Result<Self, DesignError> {
        Self::assemble(
            width,
            height,
            front,
            back,
            blank,
            StackFrames::new(front_stack, back_stack),
            StackGeometry::new(cards_per_unit, max_stack_thickness),
            sequences,
            spacing,
            Box::new(BlockFont::default()),
        )
    }

    /// Start building a design of the given card size.
    #[must_use]
    pub fn builder(width: u32, height: u32) -> CardDesignBuilder {
        CardDesignBuilder::new(width, height)
    }

    #[allow(clippy::too_many_arguments)]
    fn assemble(
        width: u32,
        height: u32,
        front: Image,
        back: Image,
        blank: Option<Image>,
        stack_frames: StackFrames,
        stack: StackGeometry,
        sequences: Vec<DrawSequence>,
        spacing: i32,
        font: Box<dyn TextRenderer>,
    ) -> Result<Self, DesignError> {
        let design = Self {
            width,
            height,
            front: normalize(front, width, height, "front"),
            back: normalize(back, width, height, "back"),
            blank: blank.map(|art| normalize(art, width, height, "blank")),
            stack_frames,
            stack,
            sequences,
            spacing,
            font,
        };
        debug!(
            "built {}x{} card design with {} sequences",
            width,
            height,
            design.sequences.len()
        );
        Ok(design)
    }

    /// Card width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Card height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixels between neighbouring zones (negative overlaps them).
    #[must_use]
    pub fn spacing(&self) -> i32 {
        self.spacing
    }

    /// Face layout in draw order.
    #[must_use]
    pub fn sequences(&self) -> &[DrawSequence] {
        &self.sequences
    }

    /// Face-up art at card size.
    #[must_use]
    pub fn front(&self) -> &Image {
        &self.front
    }

    /// Face-down art at card size.
    #[must_use]
    pub fn back(&self) -> &Image {
        &self.back
    }

    /// Empty-slot art, if any.
    #[must_use]
    pub fn blank(&self) -> Option<&Image> {
        self.blank.as_ref()
    }

    /// Text renderer used for text zones.
    #[must_use]
    pub fn font(&self) -> &dyn TextRenderer {
        self.font.as_ref()
    }

    /// Extra stack height for `count` cards.
    #[must_use]
    pub fn stack_thickness(&self, count: u32) -> u32 {
        self.stack.thickness(count)
    }

    /// Height of the tallest possible stack: card plus maximum thickness.
    #[must_use]
    pub fn stack_envelope_height(&self) -> u32 {
        self.height + self.stack.max_thickness
    }

    /// Stack art for `count` cards, `height + stack_thickness(count)` tall.
    ///
    /// The image is a cache owned by the design and is repainted in
    /// place by the next call with a different thickness.
    pub fn stack_surface(&mut self, count: u32, face_up: bool) -> &Image {
        let height = self.height + self.stack.thickness(count);
        self.stack_frames.surface(self.width, height, face_up)
    }

    /// Lay out the face of `card` drawn at `(x, y)` without drawing it.
    ///
    /// Sequences with nothing to show are still returned, empty, so the
    /// result lines up with [`CardDesign::sequences`].
    #[must_use]
    pub fn layout_front(&self, x: i32, y: i32, card: &AttributeStore) -> Vec<SequenceLayout<'_>> {
        let rect = CardRect::new(x, y, self.width, self.height);
        self.sequences
            .iter()
            .map(|sequence| layout_sequence(sequence, card, self.font(), rect, self.spacing))
            .collect()
    }

    /// Draw the face of `card` at `(x, y)`: front art, then every sequence.
    ///
    /// A card with no area has no face, so nothing is drawn.
    pub fn draw_card_front(&self, target: &mut Image, x: i32, y: i32, card: &AttributeStore) {
        if self.width == 0 || self.height == 0 {
            return;
        }
        target.draw_transparent(&self.front, x, y);
        for layout in self.layout_front(x, y, card) {
            draw_layout(target, &layout, self.font());
        }
    }

    /// Draw the back art at `(x, y)`. Backs don't depend on attributes.
    pub fn draw_card_back(&self, target: &mut Image, x: i32, y: i32) {
        target.draw_transparent(&self.back, x, y);
    }

    /// Draw the empty-slot art at `(x, y)`, if the design has one.
    pub fn draw_empty_card(&self, target: &mut Image, x: i32, y: i32) {
        if let Some(blank) = &self.blank {
            target.draw_transparent(blank, x, y);
        }
    }

    /// Draw a stack of `count` cards in the envelope starting at `(x, y)`.
    ///
    /// The stack is bottom-aligned in an envelope of
    /// [`CardDesign::stack_envelope_height`], so stacks of any size rest
    /// on the same line. One card is drawn as plain front or back art;
    /// an empty stack draws nothing.
    pub fn draw_card_stack(&mut self, target: &mut Image, x: i32, y: i32, count: u32, face_up: bool) {
        let bottom = y + self.stack_envelope_height() as i32;
        match count {
            0 => {}
            1 => {
                let art = if face_up { &self.front } else { &self.back };
                target.draw_transparent(art, x, bottom - self.height as i32);
            }
            _ => {
                let surface = self.stack_surface(count, face_up);
                target.draw_transparent(surface, x, bottom - surface.height() as i32);
            }
        }
    }
}

/// Builder for [`CardDesign`].
///
/// Front, back and both stack frames are required; everything else has
/// a default (no blank art, one card per pixel of thickness, no
/// thickness, no spacing, no sequences, `BlockFont` text).
pub struct CardDesignBuilder {
    width: u32,
    height: u32,
    front: Option<Image>,
    back: Option<Image>,
    blank: Option<Image>,
    front_stack: Option<Image>,
    back_stack: Option<Image>,
    cards_per_unit: u32,
    max_stack_thickness: u32,
    sequences: Vec<DrawSequence>,
    spacing: i32,
    font: Box<dyn TextRenderer>,
}

impl CardDesignBuilder {
    /// Start a builder for a `width x height` card.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            front: None,
            back: None,
            blank: None,
            front_stack: None,
            back_stack: None,
            cards_per_unit: 1,
            max_stack_thickness: 0,
            sequences: Vec::new(),
            spacing: 0,
            font: Box::new(BlockFont::default()),
        }
    }

    /// Face-up art.
    #[must_use]
    pub fn front(mut self, art: Image) -> Self {
        self.front = Some(art);
        self
    }

    /// Face-down art.
    #[must_use]
    pub fn back(mut self, art: Image) -> Self {
        self.back = Some(art);
        self
    }

    /// Empty-slot art.
    #[must_use]
    pub fn blank(mut self, art: Image) -> Self {
        self.blank = Some(art);
        self
    }

    /// Nine-slice art for face-up stacks.
    #[must_use]
    pub fn front_stack(mut self, art: Image) -> Self {
        self.front_stack = Some(art);
        self
    }

    /// Nine-slice art for face-down stacks.
    #[must_use]
    pub fn back_stack(mut self, art: Image) -> Self {
        self.back_stack = Some(art);
        self
    }

    /// Cards per pixel of stack thickness.
    #[must_use]
    pub fn cards_per_unit(mut self, cards: u32) -> Self {
        self.cards_per_unit = cards;
        self
    }

    /// Maximum stack thickness in pixels.
    #[must_use]
    pub fn max_stack_thickness(mut self, pixels: u32) -> Self {
        self.max_stack_thickness = pixels;
        self
    }

    /// Pixels between neighbouring zones.
    #[must_use]
    pub fn spacing(mut self, spacing: i32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Append a face sequence.
    #[must_use]
    pub fn sequence(mut self, sequence: DrawSequence) -> Self {
        self.sequences.push(sequence);
        self
    }

    /// Text renderer for text zones.
    #[must_use]
    pub fn font(mut self, font: impl TextRenderer + 'static) -> Self {
        self.font = Box::new(font);
        self
    }

    /// Validate and build the design.
    pub fn build(self) -> Result<CardDesign, DesignError> {
        let front = self.front.ok_or(DesignError::MissingFrame(FrameKind::Front))?;
        let back = self.back.ok_or(DesignError::MissingFrame(FrameKind::Back))?;
        let front_stack = self
            .front_stack
            .ok_or(DesignError::MissingFrame(FrameKind::FrontStack))?;
        let back_stack = self
            .back_stack
            .ok_or(DesignError::MissingFrame(FrameKind::BackStack))?;

        CardDesign::assemble(
            self.width,
            self.height,
            front,
            back,
            self.blank,
            StackFrames::new(front_stack, back_stack),
            StackGeometry::new(self.cards_per_unit, self.max_stack_thickness),
            self.sequences,
            self.spacing,
            self.font,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::DynamicValue;
    use crate::core::TRANSPARENT;
    use crate::layout::{Alignment, DrawSubject, Orientation};

    fn builder() -> CardDesignBuilder {
        CardDesign::builder(10, 14)
            .front(Image::filled(10, 14, 1))
            .back(Image::filled(10, 14, 2))
            .front_stack(Image::filled(3, 3, 1))
            .back_stack(Image::filled(3, 3, 2))
    }

    #[test]
    fn test_missing_frames() {
        let err = CardDesign::builder(10, 14).build().unwrap_err();
        assert!(matches!(err, DesignError::MissingFrame(FrameKind::Front)));

        let err = CardDesign::builder(10, 14)
            .front(Image::new(1, 1))
            .back(Image::new(1, 1))
            .front_stack(Image::new(1, 1))
            .build()
            .unwrap_err();
        assert!(matches!(err, DesignError::MissingFrame(FrameKind::BackStack)));
    }

    #[test]
    fn test_zero_size_design_draws_nothing() {
        let mut design = CardDesign::new(
            0,
            20,
            Image::filled(4, 4, 1),
            Image::filled(4, 4, 2),
            None,
            Image::filled(3, 3, 1),
            Image::filled(3, 3, 2),
            1,
            2,
            vec![DrawSequence::new(Alignment::Center, Orientation::Horizontal)
                .with_subject(DrawSubject::text(DynamicValue::text("X"), 12, 8))],
            0,
        )
        .unwrap();
        assert_eq!((design.front().width(), design.front().height()), (0, 20));

        let mut target = Image::new(16, 24);
        design.draw_card_front(&mut target, 2, 2, &AttributeStore::new());
        design.draw_card_back(&mut target, 2, 2);
        design.draw_card_stack(&mut target, 2, 0, 5, true);
        assert_eq!(target.count_color(TRANSPARENT), 16 * 24);
    }

    #[test]
    fn test_zero_height_builds() {
        let design = CardDesign::builder(10, 0)
            .front(Image::filled(10, 14, 1))
            .back(Image::filled(10, 14, 2))
            .front_stack(Image::filled(3, 3, 1))
            .back_stack(Image::filled(3, 3, 2))
            .build();
        assert!(design.is_ok());
    }

    #[test]
    fn test_art_normalized() {
        let design = builder()
            .front(Image::filled(3, 3, 4))
            .blank(Image::filled(20, 20, 5))
            .build()
            .unwrap();

        assert_eq!((design.front().width(), design.front().height()), (10, 14));
        assert_eq!(design.front().count_color(4), 140);
        assert_eq!(design.blank().map(|b| (b.width(), b.height())), Some((10, 14)));
        assert_eq!(design.back(), &Image::filled(10, 14, 2));
    }

    #[test]
    fn test_draw_back_and_empty() {
        let design = builder().build().unwrap();
        let mut target = Image::new(12, 16);

        design.draw_empty_card(&mut target, 0, 0);
        assert_eq!(target.count_color(0), 12 * 16);

        design.draw_card_back(&mut target, 1, 1);
        assert_eq!(target.count_color(2), 140);
        assert_eq!(target.get_pixel(0, 0), Some(0));
    }

    #[test]
    fn test_back_ignores_sequences() {
        let design = builder()
            .sequence(
                DrawSequence::new(Alignment::Center, Orientation::Horizontal)
                    .with_subject(DrawSubject::text(DynamicValue::text("X"), 10, 8)),
            )
            .build()
            .unwrap();

        let mut target = Image::new(10, 14);
        design.draw_card_back(&mut target, 0, 0);
        assert_eq!(target.count_color(15), 0);
    }

    #[test]
    fn test_layout_front_one_per_sequence() {
        let design = builder()
            .sequence(DrawSequence::new(Alignment::Top, Orientation::Horizontal))
            .sequence(
                DrawSequence::new(Alignment::Top, Orientation::Horizontal)
                    .with_subject(DrawSubject::image(DynamicValue::image(Image::filled(2, 2, 9)))),
            )
            .build()
            .unwrap();

        let layouts = design.layout_front(100, 200, &AttributeStore::new());
        assert_eq!(layouts.len(), 2);
        assert!(layouts[0].zones.is_empty());
        assert_eq!((layouts[1].zones[0].x, layouts[1].zones[0].y), (104, 200));
    }

    #[test]
    fn test_stack_surface_sizes() {
        let mut design = builder().cards_per_unit(2).max_stack_thickness(3).build().unwrap();
        assert_eq!(design.stack_envelope_height(), 17);
        assert_eq!(design.stack_surface(2, true).height(), 15);
        assert_eq!(design.stack_surface(100, false).height(), 17);
        assert_eq!(design.stack_surface(100, false).width(), 10);
    }
}
