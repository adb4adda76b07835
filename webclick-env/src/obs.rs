//! Observation of the page environments.
use crate::WebClickError;
use image::RgbImage;
use ndarray::Array3;
use std::path::Path;
use webclick_core::Obs;

/// Rendered page with shape `[height, width, 3]`.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelObs(pub Array3<u8>);

impl PixelObs {
    /// Height of the image.
    pub fn height(&self) -> usize {
        self.0.shape()[0]
    }

    /// Width of the image.
    pub fn width(&self) -> usize {
        self.0.shape()[1]
    }

    /// Converts the observation back into an image.
    pub fn to_image(&self) -> RgbImage {
        let (h, w) = (self.height() as u32, self.width() as u32);
        RgbImage::from_fn(w, h, |x, y| {
            let (x, y) = (x as usize, y as usize);
            image::Rgb([self.0[[y, x, 0]], self.0[[y, x, 1]], self.0[[y, x, 2]]])
        })
    }

    /// Saves the observation as an image file. The format follows the extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), WebClickError> {
        self.to_image().save(path)?;
        Ok(())
    }
}

impl From<RgbImage> for PixelObs {
    fn from(img: RgbImage) -> Self {
        let (w, h) = (img.width() as usize, img.height() as usize);
        Self(Array3::from_shape_fn((h, w, 3), |(y, x, c)| {
            img.get_pixel(x as u32, y as u32).0[c]
        }))
    }
}

impl Obs for PixelObs {
    fn shape(&self) -> Vec<usize> {
        self.0.shape().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_layout_is_height_width_channel() {
        let mut img = RgbImage::from_pixel(4, 2, Rgb([255, 255, 255]));
        img.put_pixel(3, 1, Rgb([1, 2, 3]));
        let obs = PixelObs::from(img.clone());

        assert_eq!(obs.shape(), vec![2, 4, 3]);
        assert_eq!(obs.0[[1, 3, 0]], 1);
        assert_eq!(obs.0[[1, 3, 2]], 3);
        assert_eq!(obs.to_image(), img);
    }
}
