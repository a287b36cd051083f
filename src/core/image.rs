//! Palette-indexed pixel surfaces.
//!
//! Every pixel is a colour index into the host's palette. Index 0 is
//! transparent: `draw_transparent` skips it, which is how card art,
//! pip icons and text are layered onto a card face.

use serde::{Deserialize, Serialize};

/// Index into the host palette.
pub type ColorIndex = u8;

/// The colour index treated as "no pixel" when compositing.
pub const TRANSPARENT: ColorIndex = 0;

/// A fixed-size pixel buffer.
///
/// ## Example
///
/// ```
/// use card_face::core::Image;
///
/// let heart = Image::from_rows(&[
///     ".2.2.",
///     "22222",
///     ".222.",
///     "..2..",
/// ]);
///
/// let mut face = Image::filled(10, 10, 1);
/// face.draw_transparent(&heart, 2, 3);
///
/// assert_eq!(face.get_pixel(3, 3), Some(2));
/// assert_eq!(face.get_pixel(2, 3), Some(1)); // transparent pixel skipped
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<ColorIndex>,
}

impl Image {
    /// Create a fully transparent image.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, TRANSPARENT)
    }

    /// Create an image filled with one colour.
    #[must_use]
    pub fn filled(width: u32, height: u32, color: ColorIndex) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        }
    }

    /// Build an image from rows of hex digits.
    ///
    /// `0-9`/`a-f` set that colour index, anything else (conventionally
    /// `.`) is transparent. Short rows are padded with transparency.
    #[must_use]
    pub fn from_rows(rows: &[&str]) -> Self {
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0) as u32;
        let mut image = Self::new(width, rows.len() as u32);
        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.chars().enumerate() {
                let color = c.to_digit(16).map_or(TRANSPARENT, |d| d as ColorIndex);
                image.set_pixel(x as i32, y as i32, color);
            }
        }
        image
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Check if the image has no pixels at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Read a pixel. `None` outside the image.
    #[must_use]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<ColorIndex> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Write a pixel. Writes outside the image are dropped.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: ColorIndex) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    /// Overwrite every pixel with `color`.
    pub fn fill(&mut self, color: ColorIndex) {
        self.pixels.fill(color);
    }

    /// Fill a rectangle, clipped to the image.
    pub fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: ColorIndex) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + width as i32).min(self.width as i32);
        let y1 = (y + height as i32).min(self.height as i32);
        for py in y0..y1 {
            for px in x0..x1 {
                self.set_pixel(px, py, color);
            }
        }
    }

    /// Overlay `src` at `(x, y)`, skipping transparent source pixels.
    pub fn draw_transparent(&mut self, src: &Image, x: i32, y: i32) {
        for sy in 0..src.height as i32 {
            let dy = y + sy;
            if dy < 0 || dy >= self.height as i32 {
                continue;
            }
            for sx in 0..src.width as i32 {
                let dx = x + sx;
                if dx < 0 || dx >= self.width as i32 {
                    continue;
                }
                let color = src.pixels[sy as usize * src.width as usize + sx as usize];
                if color == TRANSPARENT {
                    continue;
                }
                self.set_pixel(dx, dy, color);
            }
        }
    }

    /// Count pixels of a given colour. Handy for assertions on rendered output.
    #[must_use]
    pub fn count_color(&self, color: ColorIndex) -> usize {
        self.pixels.iter().filter(|&&p| p == color).count()
    }
}
