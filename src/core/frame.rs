//! Nine-slice resizable frames.
//!
//! A frame is a small piece of art cut into a 3x3 grid. Growing it
//! keeps the corners intact, tiles the edges along their length and
//! tiles the centre. Card designs use this to normalize face art to the
//! card size and to grow stack art as more cards pile up.

use super::image::Image;

/// Frame art plus a cached rendering at the last requested size.
#[derive(Clone, Debug)]
pub struct ResizableFrame {
    art: Image,
    output: Image,
}

impl ResizableFrame {
    /// Wrap frame art. The cached rendering starts at the art's own size.
    #[must_use]
    pub fn new(art: Image) -> Self {
        Self {
            output: art.clone(),
            art,
        }
    }

    /// The most recent rendering.
    #[must_use]
    pub fn image(&self) -> &Image {
        &self.output
    }

    /// Render the frame at an arbitrary size without touching the cache.
    #[must_use]
    pub fn render(&self, width: u32, height: u32) -> Image {
        if width == self.art.width() && height == self.art.height() {
            return self.art.clone();
        }

        let mut out = Image::new(width, height);
        if self.art.is_empty() {
            return out;
        }

        let cols = SliceAxis::new(self.art.width(), width);
        let rows = SliceAxis::new(self.art.height(), height);
        for y in 0..height {
            let sy = rows.source(y);
            for x in 0..width {
                let sx = cols.source(x);
                if let Some(color) = self.art.get_pixel(sx as i32, sy as i32) {
                    out.set_pixel(x as i32, y as i32, color);
                }
            }
        }
        out
    }

    /// Regrow the cached rendering to `width x height` and return it.
    ///
    /// Repainting only happens when the size actually changes.
    pub fn resize_repaint(&mut self, width: u32, height: u32) -> &Image {
        if self.output.width() != width || self.output.height() != height {
            self.output = self.render(width, height);
        }
        &self.output
    }
}

/// Maps output coordinates back to art coordinates along one axis.
struct SliceAxis {
    art_len: u32,
    out_len: u32,
    edge: u32,
    head: u32,
    tail: u32,
}

impl SliceAxis {
    fn new(art_len: u32, out_len: u32) -> Self {
        // Art thinner than three pixels has no usable border; tile it whole.
        let edge = if art_len >= 3 { art_len / 3 } else { 0 };
        let head = edge.min(out_len);
        let tail = edge.min(out_len - head);
        Self {
            art_len,
            out_len,
            edge,
            head,
            tail,
        }
    }

    fn source(&self, pos: u32) -> u32 {
        if pos < self.head {
            pos
        } else if pos >= self.out_len - self.tail {
            self.art_len - (self.out_len - pos)
        } else {
            let middle = self.art_len - 2 * self.edge;
            self.edge + (pos - self.head) % middle
        }
    }
}
