//! # card-face
//!
//! Attribute-driven rendering of card faces.
//!
//! Cards carry no art of their own, only a handful of attributes (rank,
//! suit, value, ...). A design declares once how a face is assembled
//! and the engine draws any card by resolving that declaration against
//! the card's attributes.
//!
//! ## Design Principles
//!
//! 1. **Data, Not Subclasses**: Faces are described by plain
//!    `DrawSequence`/`DrawSubject` records interpreted by one layout
//!    engine.
//!
//! 2. **Total Rendering**: Missing attributes and unmatched lookups
//!    resolve to `0`, `""` or no image. Only design construction can
//!    fail.
//!
//! 3. **Attribute Agnostic**: Attribute ids and values are caller
//!    defined; no schema is enforced.
//!
//! ## Modules
//!
//! - `core`: Images, nine-slice frames, text rendering, errors
//! - `cards`: Attribute stores and dynamic values
//! - `layout`: Subjects, sequences, zones and the layout engine
//! - `design`: Card designs, stacks and the render entry points
//!
//! ## Example
//!
//! ```
//! use card_face::{
//!     Alignment, AttributeStore, CardDesign, DrawSequence, DrawSubject, DynamicValue, Image,
//!     LookupTable, Orientation,
//! };
//!
//! const RANK: i32 = 0;
//! const SUIT: i32 = 1;
//!
//! let heart = Image::from_rows(&[".2.2.", "22222", ".222.", "..2.."]);
//! let spade = Image::from_rows(&["..f..", ".fff.", "fffff", "..f.."]);
//!
//! let corner = DrawSequence::new(Alignment::TopLeft, Orientation::Vertical)
//!     .with_subject(DrawSubject::text(DynamicValue::from_attribute(RANK), 12, 8))
//!     .with_subject(DrawSubject::image(DynamicValue::from_lookup(
//!         SUIT,
//!         LookupTable::new().with("hearts", heart).with("spades", spade),
//!     )));
//!
//! let design = CardDesign::builder(24, 32)
//!     .front(Image::filled(24, 32, 1))
//!     .back(Image::filled(24, 32, 8))
//!     .front_stack(Image::filled(3, 3, 1))
//!     .back_stack(Image::filled(3, 3, 8))
//!     .spacing(1)
//!     .sequence(corner)
//!     .build()
//!     .unwrap();
//!
//! let card = AttributeStore::new().with(RANK, "Q").with(SUIT, "hearts");
//! let mut screen = Image::new(64, 64);
//! design.draw_card_front(&mut screen, 4, 4, &card);
//!
//! assert!(screen.count_color(2) > 0);
//! ```

pub mod core;
pub mod cards;
pub mod layout;
pub mod design;

// Re-export commonly used types
pub use crate::core::{
    BlockFont, ColorIndex, DesignError, FrameKind, Image, ResizableFrame, TextRenderer,
    TRANSPARENT,
};

pub use crate::cards::{
    AttributeId, AttributeStore, AttributeValue, DesignValue, DynamicValue, LookupTable,
};

pub use crate::layout::{
    Alignment, CardRect, DrawSequence, DrawSubject, Orientation, SequenceLayout, SubjectKind,
    Zone, ZoneContent,
};

pub use crate::design::{CardDesign, CardDesignBuilder, StackGeometry};
