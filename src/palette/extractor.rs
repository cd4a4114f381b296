//! Dominant-color extraction.

use image::RgbaImage;

use super::sampler::SampledPixels;
use super::whitelist::Whitelist;
use crate::color::Rgba;

/// Extracts an ordered palette of visually dominant colors from an image.
///
/// The extractor sub-samples the pixel grid at a fixed stride, snaps every
/// visible sample to its nearest [`Whitelist`] entry, suppresses the color
/// assumed to be the background, and keeps the entries whose estimated
/// coverage passes a percentage threshold, most common first.
///
/// Occurrence counters live on the stack of each [`extract()`](Self::extract)
/// call, so a single extractor can be shared and reused freely.
///
/// # Example
///
/// ```
/// use image::RgbaImage;
/// use thumbsmith::PaletteExtractor;
///
/// let extractor = PaletteExtractor::default();
/// let image = RgbaImage::from_pixel(100, 100, image::Rgba([255, 0, 0, 255]));
/// // A solid image is all background: nothing survives suppression.
/// assert!(extractor.extract(&image).is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct PaletteExtractor {
    whitelist: Whitelist,
    stride: u32,
    match_threshold_percent: f64,
}

impl PaletteExtractor {
    /// Default sampling stride: every 10th pixel in both axes.
    pub const DEFAULT_STRIDE: u32 = 10;

    /// Default estimated-coverage threshold, in percent of image area.
    pub const DEFAULT_MATCH_THRESHOLD_PERCENT: f64 = 0.25;

    /// Create an extractor over the given whitelist with default stride
    /// and threshold.
    pub fn new(whitelist: Whitelist) -> Self {
        Self {
            whitelist,
            stride: Self::DEFAULT_STRIDE,
            match_threshold_percent: Self::DEFAULT_MATCH_THRESHOLD_PERCENT,
        }
    }

    /// Set the sampling stride (clamped to at least 1).
    #[inline]
    pub fn stride(mut self, stride: u32) -> Self {
        self.stride = stride.max(1);
        self
    }

    /// Set the estimated-coverage threshold in percent.
    #[inline]
    pub fn match_threshold_percent(mut self, percent: f64) -> Self {
        self.match_threshold_percent = percent;
        self
    }

    /// The reference whitelist this extractor matches against.
    #[inline]
    pub fn whitelist(&self) -> &Whitelist {
        &self.whitelist
    }

    /// Extract the dominant palette of `image`.
    ///
    /// Returns surviving whitelist colors ordered by descending occurrence
    /// count; equal counts keep whitelist order. A zero-area image returns
    /// an empty palette.
    ///
    /// Background suppression is a heuristic: the pixel at the origin is
    /// assumed to be background, and its nearest whitelist match is zeroed
    /// unconditionally. A genuine foreground region of that color is
    /// suppressed too; callers that cannot tolerate this should place
    /// their own whitelist without the background color.
    pub fn extract(&self, image: &RgbaImage) -> Vec<Rgba> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Vec::new();
        }

        let mut counts = vec![0u64; self.whitelist.len()];
        for sample in SampledPixels::new(image, self.stride) {
            if sample.is_transparent() {
                continue;
            }
            let (index, _) = self.whitelist.find_nearest(sample);
            counts[index] += 1;
        }

        let corner = Rgba::from(*image.get_pixel(0, 0));
        if !corner.is_transparent() {
            let (background, _) = self.whitelist.find_nearest(corner);
            counts[background] = 0;
        }

        self.palette_from_counts(&counts, width, height)
    }

    /// Order by count and apply the coverage threshold.
    ///
    /// The estimate `(100 / (w*h)) * count * stride` extrapolates the
    /// strided sample count back to a full-image percentage. It multiplies
    /// by the stride once, not squared, so it understates true coverage;
    /// the threshold is calibrated against this exact formula and the
    /// formula is kept as-is for behavior parity.
    fn palette_from_counts(&self, counts: &[u64], width: u32, height: u32) -> Vec<Rgba> {
        debug_assert_eq!(counts.len(), self.whitelist.len());

        let mut order: Vec<usize> = (0..counts.len()).collect();
        // Stable sort: equal counts keep whitelist order.
        order.sort_by(|&a, &b| counts[b].cmp(&counts[a]));

        let total_pixels = width as f64 * height as f64;
        order
            .into_iter()
            .filter(|&index| {
                let estimated =
                    (100.0 / total_pixels) * counts[index] as f64 * self.stride as f64;
                estimated >= self.match_threshold_percent
            })
            .map(|index| self.whitelist.color(index))
            .collect()
    }
}

impl Default for PaletteExtractor {
    /// Default whitelist, stride 10, threshold 0.25%.
    fn default() -> Self {
        Self::new(Whitelist::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn small_whitelist() -> Whitelist {
        Whitelist::from_hex(&["#000000", "#ff0000", "#00ff00", "#ffffff"]).unwrap()
    }

    #[test]
    fn test_solid_image_yields_empty_palette() {
        // The single color is also the corner-inferred background.
        let extractor = PaletteExtractor::new(small_whitelist());
        let image = RgbaImage::from_pixel(50, 50, image::Rgba([255, 0, 0, 255]));
        assert_eq!(extractor.extract(&image), vec![]);
    }

    #[test]
    fn test_zero_area_image_yields_empty_palette() {
        let extractor = PaletteExtractor::new(small_whitelist());
        assert_eq!(extractor.extract(&RgbaImage::new(0, 0)), vec![]);
    }

    #[test]
    fn test_transparent_pixels_are_skipped() {
        // Fully transparent image: no samples counted, transparent corner
        // suppresses nothing, every count is zero.
        let extractor = PaletteExtractor::new(small_whitelist());
        let image = RgbaImage::from_pixel(50, 50, image::Rgba([255, 0, 0, 0]));
        assert_eq!(extractor.extract(&image), vec![]);
    }

    #[test]
    fn test_foreground_survives_background_suppression() {
        // White background with a red band wide enough to pass the
        // threshold at stride 1: 100x100 image, band rows 50..100.
        let mut image = RgbaImage::from_pixel(100, 100, image::Rgba([255, 255, 255, 255]));
        for y in 50..100 {
            for x in 0..100 {
                image.put_pixel(x, y, image::Rgba([255, 0, 0, 255]));
            }
        }

        let extractor = PaletteExtractor::new(small_whitelist()).stride(1);
        let palette = extractor.extract(&image);
        assert_eq!(palette, vec![Rgba::new(255, 0, 0)]);
    }

    #[test]
    fn test_background_suppressed_even_when_most_common() {
        // Red fills 90% of the image including the corner; green fills the
        // rest. Red is suppressed despite dominating.
        let mut image = RgbaImage::from_pixel(100, 100, image::Rgba([255, 0, 0, 255]));
        for y in 90..100 {
            for x in 0..100 {
                image.put_pixel(x, y, image::Rgba([0, 255, 0, 255]));
            }
        }

        let extractor = PaletteExtractor::new(small_whitelist()).stride(1);
        let palette = extractor.extract(&image);
        assert_eq!(palette, vec![Rgba::new(0, 255, 0)]);
    }

    // Threshold math on synthetic histograms, bypassing sampling.
    mod threshold {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_exactly_at_threshold_is_included() {
            // 100x100 image, stride 1: estimate = count / 100 percent.
            // count 25 -> exactly 0.25.
            let extractor = PaletteExtractor::new(small_whitelist()).stride(1);
            let counts = [25, 0, 0, 0];
            let palette = extractor.palette_from_counts(&counts, 100, 100);
            assert_eq!(palette, vec![Rgba::new(0, 0, 0)]);
        }

        #[test]
        fn test_strictly_below_threshold_is_excluded() {
            // count 24 -> 0.24, just under the default 0.25.
            let extractor = PaletteExtractor::new(small_whitelist()).stride(1);
            let counts = [24, 0, 0, 0];
            let palette = extractor.palette_from_counts(&counts, 100, 100);
            assert_eq!(palette, vec![]);
        }

        #[test]
        fn test_ordering_descending_with_stable_ties() {
            let extractor = PaletteExtractor::new(small_whitelist());
            // Green ties black; black precedes it in the whitelist.
            let counts = [50, 80, 50, 30];
            let palette = extractor.palette_from_counts(&counts, 100, 100);
            assert_eq!(
                palette,
                vec![
                    Rgba::new(255, 0, 0),
                    Rgba::new(0, 0, 0),
                    Rgba::new(0, 255, 0),
                    Rgba::new(255, 255, 255),
                ]
            );
        }

        #[test]
        fn test_stride_scales_estimate() {
            // count 3 on a 100x100 image: stride 10 estimates 0.3 percent
            // (kept), stride 1 estimates 0.03 percent (dropped).
            let counts = [3, 0, 0, 0];

            let wide = PaletteExtractor::new(small_whitelist()).stride(10);
            assert_eq!(
                wide.palette_from_counts(&counts, 100, 100),
                vec![Rgba::new(0, 0, 0)]
            );

            let dense = PaletteExtractor::new(small_whitelist()).stride(1);
            assert_eq!(dense.palette_from_counts(&counts, 100, 100), vec![]);
        }
    }
}
