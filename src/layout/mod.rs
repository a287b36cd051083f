//! Declarative card face layout.
//!
//! - `subject`: `DrawSubject`/`DrawSequence` configuration and alignment
//! - `zone`: resolving subjects into sized zones, text wrapping
//! - `engine`: bounding boxes, anchoring and drawing of sequences

pub mod engine;
pub mod subject;
pub mod zone;

pub use engine::{
    axis_anchor, collect_zones, draw_layout, layout_sequence, sequence_bounds, CardRect,
    PlacedZone, SequenceLayout, MAX_REPEAT,
};
pub use subject::{Alignment, AxisAlign, DrawSequence, DrawSubject, Orientation, SubjectKind, DEFAULT_COLOR};
pub use zone::{resolve_zone, wrap_text, Zone, ZoneContent};
