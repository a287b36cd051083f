//! Declarative description of what goes on a card face.
//!
//! A design is a list of `DrawSequence`s. Each sequence is an ordered
//! row (or column) of `DrawSubject`s sharing one alignment. Subjects
//! are plain data: the layout engine interprets them for each card.

use serde::{Deserialize, Serialize};

use crate::cards::DynamicValue;

/// Default colour index for subjects that don't set one.
pub const DEFAULT_COLOR: i64 = 15;

/// What a subject draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubjectKind {
    /// Text wrapped into a `width x height` pixel box.
    Text { width: u32, height: u32 },
    /// An image drawn at its own size.
    Image,
}

/// One region of a card face.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawSubject {
    /// Text or image.
    pub kind: SubjectKind,
    /// How many identical zones this subject contributes (e.g. pips).
    pub repeat: DynamicValue,
    /// The text or image to draw.
    pub content: DynamicValue,
    /// Colour index for text. Images keep their own colours.
    pub color: DynamicValue,
}

impl DrawSubject {
    /// A text subject bounded by a `width x height` pixel box.
    #[must_use]
    pub fn text(content: DynamicValue, width: u32, height: u32) -> Self {
        Self {
            kind: SubjectKind::Text { width, height },
            repeat: DynamicValue::int(1),
            content,
            color: DynamicValue::int(DEFAULT_COLOR),
        }
    }

    /// An image subject.
    #[must_use]
    pub fn image(content: DynamicValue) -> Self {
        Self {
            kind: SubjectKind::Image,
            repeat: DynamicValue::int(1),
            content,
            color: DynamicValue::int(DEFAULT_COLOR),
        }
    }

    /// Set the colour source.
    #[must_use]
    pub fn with_color(mut self, color: DynamicValue) -> Self {
        self.color = color;
        self
    }

    /// Set the repeat count source.
    #[must_use]
    pub fn with_repeat(mut self, repeat: DynamicValue) -> Self {
        self.repeat = repeat;
        self
    }
}

/// Placement along one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisAlign {
    /// Left or top edge.
    Start,
    /// Middle.
    Center,
    /// Right or bottom edge.
    End,
}

/// Where a sequence sits on the card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Alignment {
    TopLeft,
    Top,
    TopRight,
    Left,
    #[default]
    Center,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl Alignment {
    /// All nine positions, row by row.
    pub const ALL: [Alignment; 9] = [
        Alignment::TopLeft,
        Alignment::Top,
        Alignment::TopRight,
        Alignment::Left,
        Alignment::Center,
        Alignment::Right,
        Alignment::BottomLeft,
        Alignment::Bottom,
        Alignment::BottomRight,
    ];

    /// Horizontal component.
    #[must_use]
    pub fn horizontal(self) -> AxisAlign {
        match self {
            Alignment::TopLeft | Alignment::Left | Alignment::BottomLeft => AxisAlign::Start,
            Alignment::Top | Alignment::Center | Alignment::Bottom => AxisAlign::Center,
            Alignment::TopRight | Alignment::Right | Alignment::BottomRight => AxisAlign::End,
        }
    }

    /// Vertical component.
    #[must_use]
    pub fn vertical(self) -> AxisAlign {
        match self {
            Alignment::TopLeft | Alignment::Top | Alignment::TopRight => AxisAlign::Start,
            Alignment::Left | Alignment::Center | Alignment::Right => AxisAlign::Center,
            Alignment::BottomLeft | Alignment::Bottom | Alignment::BottomRight => AxisAlign::End,
        }
    }
}

/// Direction a sequence's zones are laid out in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Left to right.
    #[default]
    Horizontal,
    /// Top to bottom.
    Vertical,
}

/// An ordered group of subjects drawn together with one alignment.
///
/// ## Example
///
/// ```
/// use card_face::cards::DynamicValue;
/// use card_face::layout::{Alignment, DrawSequence, DrawSubject, Orientation};
///
/// let corner = DrawSequence::new(Alignment::TopLeft, Orientation::Vertical)
///     .with_subject(DrawSubject::text(DynamicValue::from_attribute(0), 12, 8))
///     .with_subject(DrawSubject::image(DynamicValue::from_attribute(1)));
///
/// assert_eq!(corner.subjects.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawSequence {
    /// Anchor on the card.
    pub alignment: Alignment,
    /// Layout direction.
    pub orientation: Orientation,
    /// Subjects in draw order.
    pub subjects: Vec<DrawSubject>,
}

impl DrawSequence {
    /// Create an empty sequence.
    #[must_use]
    pub fn new(alignment: Alignment, orientation: Orientation) -> Self {
        Self {
            alignment,
            orientation,
            subjects: Vec::new(),
        }
    }

    /// Append a subject (builder pattern).
    #[must_use]
    pub fn with_subject(mut self, subject: DrawSubject) -> Self {
        self.subjects.push(subject);
        self
    }
}
