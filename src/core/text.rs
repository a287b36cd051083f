//! Monospace text rendering seam.
//!
//! Layout only needs to know the fixed cell size of a glyph; actual
//! glyph art is the host's business. `BlockFont` is a minimal
//! implementation that paints a solid block per visible character,
//! with optional per-character art overrides.

use rustc_hash::FxHashMap;

use super::image::{ColorIndex, Image, TRANSPARENT};

/// Draws single lines of monospace text onto an image.
///
/// Implementations must advance exactly `char_width()` pixels per
/// character; text wrapping relies on it.
pub trait TextRenderer {
    /// Width of one character cell in pixels.
    fn char_width(&self) -> u32;

    /// Height of one character cell in pixels.
    fn char_height(&self) -> u32;

    /// Print one line of text with its top-left corner at `(x, y)`.
    fn print(&self, target: &mut Image, text: &str, x: i32, y: i32, color: ColorIndex);

    /// Pixel width of a line of `chars` characters.
    fn line_width(&self, chars: usize) -> u32 {
        chars as u32 * self.char_width()
    }
}

/// Solid-block monospace font.
///
/// ## Example
///
/// ```
/// use card_face::core::{BlockFont, Image, TextRenderer};
///
/// let font = BlockFont::new(3, 5);
/// let mut target = Image::new(10, 5);
/// font.print(&mut target, "A B", 0, 0, 4);
///
/// // Two visible glyphs, 2x4 each (one pixel of spacing right and below).
/// assert_eq!(target.count_color(4), 16);
/// ```
#[derive(Clone, Debug)]
pub struct BlockFont {
    char_width: u32,
    char_height: u32,
    glyphs: FxHashMap<char, Image>,
}

impl BlockFont {
    /// Cell size of the default font.
    pub const DEFAULT_CELL: (u32, u32) = (6, 8);

    /// Create a font with the given cell size.
    #[must_use]
    pub fn new(char_width: u32, char_height: u32) -> Self {
        Self {
            char_width,
            char_height,
            glyphs: FxHashMap::default(),
        }
    }

    /// Use custom art for one character (builder pattern).
    ///
    /// Non-transparent pixels of the art are recoloured to the print
    /// colour, so one glyph works in every colour.
    #[must_use]
    pub fn with_glyph(mut self, c: char, art: Image) -> Self {
        self.glyphs.insert(c, art);
        self
    }

    fn draw_glyph(&self, target: &mut Image, c: char, x: i32, y: i32, color: ColorIndex) {
        if let Some(art) = self.glyphs.get(&c) {
            for gy in 0..art.height().min(self.char_height) as i32 {
                for gx in 0..art.width().min(self.char_width) as i32 {
                    if art.get_pixel(gx, gy).is_some_and(|p| p != TRANSPARENT) {
                        target.set_pixel(x + gx, y + gy, color);
                    }
                }
            }
        } else if !c.is_whitespace() {
            // Leave a one pixel gutter so adjacent glyphs stay distinct.
            let w = self.char_width.saturating_sub(1).max(1);
            let h = self.char_height.saturating_sub(1).max(1);
            target.fill_rect(x, y, w, h, color);
        }
    }
}

impl Default for BlockFont {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CELL.0, Self::DEFAULT_CELL.1)
    }
}

impl TextRenderer for BlockFont {
    fn char_width(&self) -> u32 {
        self.char_width
    }

    fn char_height(&self) -> u32 {
        self.char_height
    }

    fn print(&self, target: &mut Image, text: &str, x: i32, y: i32, color: ColorIndex) {
        let mut cx = x;
        for c in text.chars() {
            self.draw_glyph(target, c, cx, y, color);
            cx += self.char_width as i32;
        }
    }
}
