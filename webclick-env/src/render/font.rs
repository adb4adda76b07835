//! Typefaces used to draw labels, titles and bodies.
use crate::WebClickError;
use ab_glyph::{point, Font, FontVec, PxScale, ScaleFont};
use font8x8::{UnicodeFonts, BASIC_FONTS};
use image::{Rgb, RgbImage};
use log::info;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Width of a builtin glyph cell relative to the font size.
const BUILTIN_ADVANCE: f32 = 0.5;

/// Source of the glyphs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontConfig {
    /// The 8x8 bitmap font shipped with the `font8x8` crate.
    Builtin,

    /// A TrueType or OpenType font file.
    TrueType {
        /// Path of the font file.
        path: PathBuf,
    },
}

impl Default for FontConfig {
    fn default() -> Self {
        Self::Builtin
    }
}

/// A loaded typeface.
pub enum Typeface {
    /// Bitmap glyphs scaled to a cell of `size / 2` by `size` pixels.
    Builtin,

    /// Outline glyphs rasterized with anti-aliasing.
    TrueType(FontVec),
}

impl Typeface {
    /// Loads the typeface described by `config`.
    pub fn load(config: &FontConfig) -> Result<Self, WebClickError> {
        match config {
            FontConfig::Builtin => Ok(Self::Builtin),
            FontConfig::TrueType { path } => {
                let data = std::fs::read(path).map_err(|source| WebClickError::FontIo {
                    path: path.clone(),
                    source,
                })?;
                let font = FontVec::try_from_vec(data)
                    .map_err(|_| WebClickError::FontParse(path.clone()))?;
                info!("Loaded font {:?}", path);
                Ok(Self::TrueType(font))
            }
        }
    }

    /// Width of `text` in pixels when drawn at font size `size`.
    pub fn text_width(&self, text: &str, size: f32) -> f32 {
        match self {
            Self::Builtin => text.chars().count() as f32 * size * BUILTIN_ADVANCE,
            Self::TrueType(font) => {
                let scaled = font.as_scaled(PxScale::from(size));
                let mut width = 0f32;
                let mut prev = None;
                for c in text.chars() {
                    let id = scaled.glyph_id(c);
                    if let Some(prev) = prev {
                        width += scaled.kern(prev, id);
                    }
                    width += scaled.h_advance(id);
                    prev = Some(id);
                }
                width
            }
        }
    }

    /// Draws `text` with its top-left corner at `(x, y)`.
    ///
    /// Pixels outside of `img` are clipped.
    pub fn draw(&self, img: &mut RgbImage, text: &str, x: f32, y: f32, size: f32, color: Rgb<u8>) {
        match self {
            Self::Builtin => draw_builtin(img, text, x, y, size, color),
            Self::TrueType(font) => draw_outlined(font, img, text, x, y, size, color),
        }
    }
}

fn draw_builtin(img: &mut RgbImage, text: &str, x: f32, y: f32, size: f32, color: Rgb<u8>) {
    let advance = size * BUILTIN_ADVANCE;
    let cell_w = advance.round().max(1.0) as i64;
    let cell_h = size.round().max(1.0) as i64;
    let top = y.floor() as i64;

    for (i, c) in text.chars().enumerate() {
        // Unknown characters take up space but draw nothing.
        let glyph = match BASIC_FONTS.get(c) {
            Some(glyph) => glyph,
            None => continue,
        };
        let left = (x + i as f32 * advance).floor() as i64;
        for py in 0..cell_h {
            let row = glyph[(py * 8 / cell_h) as usize];
            for px in 0..cell_w {
                if row & (1 << (px * 8 / cell_w)) != 0 {
                    put_pixel(img, left + px, top + py, color, 1.0);
                }
            }
        }
    }
}

fn draw_outlined(
    font: &FontVec,
    img: &mut RgbImage,
    text: &str,
    x: f32,
    y: f32,
    size: f32,
    color: Rgb<u8>,
) {
    let scale = PxScale::from(size);
    let scaled = font.as_scaled(scale);
    let mut caret = point(x, y + scaled.ascent());
    let mut prev = None;

    for c in text.chars() {
        let id = scaled.glyph_id(c);
        if let Some(prev) = prev {
            caret.x += scaled.kern(prev, id);
        }
        let glyph = id.with_scale_and_position(scale, caret);
        caret.x += scaled.h_advance(id);
        prev = Some(id);

        if let Some(outlined) = font.outline_glyph(glyph) {
            let bounds = outlined.px_bounds();
            outlined.draw(|gx, gy, coverage| {
                let px = bounds.min.x as i64 + gx as i64;
                let py = bounds.min.y as i64 + gy as i64;
                put_pixel(img, px, py, color, coverage);
            });
        }
    }
}

/// Blends `color` over the pixel at `(x, y)` with the given coverage.
fn put_pixel(img: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>, coverage: f32) {
    if x < 0 || y < 0 || x >= img.width() as i64 || y >= img.height() as i64 {
        return;
    }
    let coverage = coverage.clamp(0.0, 1.0);
    let pixel = img.get_pixel_mut(x as u32, y as u32);
    for (dst, src) in pixel.0.iter_mut().zip(color.0.iter()) {
        let blended = *dst as f32 * (1.0 - coverage) + *src as f32 * coverage;
        *dst = blended.round() as u8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempdir::TempDir;

    // Fonts commonly installed on Linux hosts. Tests using them return early
    // when none is present.
    const SYSTEM_FONTS: [&str; 3] = [
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
    ];

    fn system_font() -> Option<Typeface> {
        let path = SYSTEM_FONTS.iter().map(Path::new).find(|p| p.exists())?;
        let config = FontConfig::TrueType {
            path: path.to_path_buf(),
        };
        Some(Typeface::load(&config).unwrap())
    }

    #[test]
    fn test_builtin_text_width() {
        let face = Typeface::Builtin;
        assert_eq!(face.text_width("Search", 16.0), 48.0);
        assert_eq!(face.text_width("Breaking News: AI Revolution", 24.0), 336.0);
        assert_eq!(face.text_width("", 24.0), 0.0);
    }

    #[test]
    fn test_builtin_draw_stays_in_cell() {
        let face = Typeface::Builtin;
        let mut img = RgbImage::from_pixel(40, 40, Rgb([255, 255, 255]));
        face.draw(&mut img, "H", 10.0, 10.0, 16.0, Rgb([0, 0, 0]));

        let mut n_inked = 0;
        for (x, y, p) in img.enumerate_pixels() {
            if p.0 != [255, 255, 255] {
                assert!((10..18).contains(&x) && (10..26).contains(&y));
                n_inked += 1;
            }
        }
        assert!(n_inked > 0);
    }

    #[test]
    fn test_draw_clips_at_edges() {
        let face = Typeface::Builtin;
        let mut img = RgbImage::from_pixel(10, 10, Rgb([255, 255, 255]));
        face.draw(&mut img, "WWWW", -5.0, -5.0, 24.0, Rgb([0, 0, 0]));
        face.draw(&mut img, "WWWW", 5.0, 5.0, 24.0, Rgb([0, 0, 0]));
    }

    #[test]
    fn test_missing_font_file() {
        let config = FontConfig::TrueType {
            path: PathBuf::from("/nonexistent/arial.ttf"),
        };
        assert!(matches!(
            Typeface::load(&config),
            Err(WebClickError::FontIo { .. })
        ));
    }

    #[test]
    fn test_unparsable_font_file() -> anyhow::Result<()> {
        let dir = TempDir::new("unparsable_font")?;
        let path = dir.path().join("garbage.ttf");
        std::fs::write(&path, b"this is not a font file")?;

        let config = FontConfig::TrueType { path: path.clone() };
        match Typeface::load(&config) {
            Err(WebClickError::FontParse(p)) => assert_eq!(p, path),
            Err(e) => panic!("unexpected error {}", e),
            Ok(_) => panic!("garbage was parsed as a font"),
        }
        Ok(())
    }

    #[test]
    fn test_truetype_text_width() {
        let face = match system_font() {
            Some(face) => face,
            None => return,
        };
        let w1 = face.text_width("Search", 16.0);
        let w2 = face.text_width("Search", 32.0);
        assert!(w1 > 0.0);
        assert!((w2 - 2.0 * w1).abs() < 1.0);
        assert!(face.text_width("Search Search", 16.0) > 2.0 * w1);
        assert_eq!(face.text_width("", 16.0), 0.0);
    }

    #[test]
    fn test_truetype_draw() {
        let face = match system_font() {
            Some(face) => face,
            None => return,
        };
        let mut img = RgbImage::from_pixel(100, 40, Rgb([255, 255, 255]));
        face.draw(&mut img, "Hi", 10.0, 5.0, 24.0, Rgb([0, 0, 0]));

        let width = face.text_width("Hi", 24.0);
        let mut n_inked = 0;
        for (x, y, p) in img.enumerate_pixels() {
            if p.0 != [255, 255, 255] {
                assert!((x as f32) >= 9.0 && (x as f32) <= 11.0 + width);
                assert!((5..30).contains(&y));
                n_inked += 1;
            }
        }
        assert!(n_inked > 0);

        // Clipped drawing
        face.draw(&mut img, "WWWW", 90.0, -10.0, 24.0, Rgb([0, 0, 0]));
    }
}
