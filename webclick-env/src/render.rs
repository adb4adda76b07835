//! Drawing of page elements.
mod font;
pub use font::{FontConfig, Typeface};

use crate::{geometry::Rect, PixelObs};
use image::{Rgb, RgbImage};

/// White.
pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// Black.
pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Blue.
pub const BLUE: Rgb<u8> = Rgb([0, 0, 255]);

/// An RGB canvas the page is drawn on.
pub struct Canvas {
    img: RgbImage,
}

impl Canvas {
    /// Creates a canvas filled with `background`.
    pub fn new(width: u32, height: u32, background: Rgb<u8>) -> Self {
        Self {
            img: RgbImage::from_pixel(width, height, background),
        }
    }

    /// Fills `rect` with `color`, clipped to the canvas.
    pub fn fill_rect(&mut self, rect: &Rect, color: Rgb<u8>) {
        let x0 = rect.x.max(0.0).floor() as u32;
        let y0 = rect.y.max(0.0).floor() as u32;
        let x1 = ((rect.x + rect.width).ceil().max(0.0) as u32).min(self.img.width());
        let y1 = ((rect.y + rect.height).ceil().max(0.0) as u32).min(self.img.height());
        for y in y0..y1 {
            for x in x0..x1 {
                self.img.put_pixel(x, y, color);
            }
        }
    }

    /// Draws `text` with its top-left corner at `(x, y)`.
    pub fn draw_text(
        &mut self,
        typeface: &Typeface,
        text: &str,
        x: f32,
        y: f32,
        size: f32,
        color: Rgb<u8>,
    ) {
        typeface.draw(&mut self.img, text, x, y, size, color);
    }

    /// Returns the underlying image.
    pub fn image(&self) -> &RgbImage {
        &self.img
    }

    /// Converts the canvas into an observation.
    pub fn into_obs(self) -> PixelObs {
        self.img.into()
    }
}
