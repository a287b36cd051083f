//! Card stack geometry and stack-frame caching.
//!
//! A stack of N cards is drawn as one tall frame: the card height plus
//! a thickness that grows with N and saturates at a maximum.

use log::debug;

use crate::core::{Image, ResizableFrame};

/// How stack thickness grows with card count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StackGeometry {
    /// Cards per pixel of thickness.
    pub cards_per_unit: u32,
    /// Thickness never exceeds this many pixels.
    pub max_thickness: u32,
}

impl StackGeometry {
    /// Create stack geometry.
    #[must_use]
    pub const fn new(cards_per_unit: u32, max_thickness: u32) -> Self {
        Self {
            cards_per_unit,
            max_thickness,
        }
    }

    /// Extra pixels of height for a stack of `count` cards:
    /// `floor(count / cards_per_unit)`, clamped to `max_thickness`.
    ///
    /// With `cards_per_unit == 0` any non-empty stack is at full thickness.
    #[must_use]
    pub fn thickness(&self, count: u32) -> u32 {
        if self.cards_per_unit == 0 {
            return if count == 0 { 0 } else { self.max_thickness };
        }
        (count / self.cards_per_unit).min(self.max_thickness)
    }
}

/// The two stack frames of a design, each with its last rendering cached.
#[derive(Clone, Debug)]
pub struct StackFrames {
    face_up: ResizableFrame,
    face_down: ResizableFrame,
}

impl StackFrames {
    /// Wrap face-up and face-down stack art.
    #[must_use]
    pub fn new(face_up: Image, face_down: Image) -> Self {
        Self {
            face_up: ResizableFrame::new(face_up),
            face_down: ResizableFrame::new(face_down),
        }
    }

    /// Regrow the matching frame to `width x height` and return it.
    ///
    /// The returned image is the cache itself: it is repainted by the
    /// next call with a different size, so don't hold on to it.
    pub fn surface(&mut self, width: u32, height: u32, face_up: bool) -> &Image {
        let frame = if face_up {
            &mut self.face_up
        } else {
            &mut self.face_down
        };
        let cached = frame.image();
        if cached.width() != width || cached.height() != height {
            debug!(
                "regrowing {} stack frame from {}x{} to {}x{}",
                if face_up { "face-up" } else { "face-down" },
                cached.width(),
                cached.height(),
                width,
                height
            );
        }
        frame.resize_repaint(width, height)
    }
}
