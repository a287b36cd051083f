//! Rendering primitives the card engine draws with.
//!
//! - `Image`: palette-indexed pixel surface with transparent overlay
//! - `ResizableFrame`: nine-slice art that can be regrown to any size
//! - `TextRenderer`: monospace text seam, with `BlockFont` as a default
//! - `DesignError`: configuration and snapshot errors

pub mod error;
pub mod frame;
pub mod image;
pub mod text;

pub use error::{DesignError, FrameKind};
pub use frame::ResizableFrame;
pub use image::{ColorIndex, Image, TRANSPARENT};
pub use text::{BlockFont, TextRenderer};
