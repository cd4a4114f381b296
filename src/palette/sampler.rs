//! Strided pixel sampling.

use image::RgbaImage;

use crate::color::Rgba;

/// Lazy iterator over every `stride`-th pixel of an image, in both axes.
///
/// Sampling starts at the origin and walks the grid row by row with a fixed
/// step, stopping at or before the far edge. The iterator is read-only and
/// finite; a zero-area image yields nothing.
///
/// # Example
///
/// ```
/// use image::RgbaImage;
/// use thumbsmith::SampledPixels;
///
/// let image = RgbaImage::new(20, 20);
/// // x and y each take values {0, 10}: four samples.
/// assert_eq!(SampledPixels::new(&image, 10).count(), 4);
/// ```
pub struct SampledPixels<'a> {
    image: &'a RgbaImage,
    stride: u32,
    x: u32,
    y: u32,
}

impl<'a> SampledPixels<'a> {
    /// Sample `image` at the given stride (clamped to at least 1).
    pub fn new(image: &'a RgbaImage, stride: u32) -> Self {
        Self {
            image,
            stride: stride.max(1),
            x: 0,
            y: 0,
        }
    }
}

impl Iterator for SampledPixels<'_> {
    type Item = Rgba;

    fn next(&mut self) -> Option<Rgba> {
        let (width, height) = self.image.dimensions();
        if self.x >= width || self.y >= height {
            return None;
        }

        let pixel = Rgba::from(*self.image.get_pixel(self.x, self.y));

        self.x += self.stride;
        if self.x >= width {
            self.x = 0;
            self.y += self.stride;
        }

        Some(pixel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_count_matches_stride_grid() {
        // 25x25 at stride 10 samples x,y in {0, 10, 20}: 3 * 3 pixels.
        let image = RgbaImage::new(25, 25);
        assert_eq!(SampledPixels::new(&image, 10).count(), 9);
    }

    #[test]
    fn test_stride_one_visits_every_pixel() {
        let image = RgbaImage::new(4, 3);
        assert_eq!(SampledPixels::new(&image, 1).count(), 12);
    }

    #[test]
    fn test_zero_area_image_is_empty() {
        let image = RgbaImage::new(0, 0);
        assert_eq!(SampledPixels::new(&image, 10).count(), 0);
    }

    #[test]
    fn test_origin_is_first_sample() {
        let mut image = RgbaImage::new(8, 8);
        image.put_pixel(0, 0, image::Rgba([1, 2, 3, 255]));

        let first = SampledPixels::new(&image, 4).next().unwrap();
        assert_eq!(first, Rgba::new(1, 2, 3));
    }

    #[test]
    fn test_stride_larger_than_image_samples_origin_only() {
        let image = RgbaImage::new(5, 5);
        assert_eq!(SampledPixels::new(&image, 100).count(), 1);
    }

    #[test]
    fn test_alpha_carried_through() {
        let mut image = RgbaImage::new(1, 1);
        image.put_pixel(0, 0, image::Rgba([9, 9, 9, 12]));

        let sample = SampledPixels::new(&image, 10).next().unwrap();
        assert!(sample.is_transparent());
    }
}
