//! Card designs and the render entry points.
//!
//! - `CardDesign`: frame art, face layout and stack parameters
//! - `CardDesignBuilder`: validated construction
//! - `StackGeometry`/`StackFrames`: stack thickness and cached stack art

pub mod card_design;
pub mod stack;

pub use card_design::{CardDesign, CardDesignBuilder};
pub use stack::{StackFrames, StackGeometry};
