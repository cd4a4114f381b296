//! The resize pipeline.
//!
//! [`ImageProcessor`] is configured once (output directory, sizes, format
//! policy, optional palette extraction) and then reused:
//! [`process_image`](ImageProcessor::process_image) takes `&self` and keeps
//! no state between calls.

mod result;

pub use result::ProcessedImage;

use std::io::Write;
use std::path::{Path, PathBuf};

use image::codecs::gif::GifEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::{self, FilterType};
use image::{Frame, ImageFormat, RgbaImage};

use crate::error::ProcessorError;
use crate::output::{self, EncodeFormat, OutputFormat, ResizeRoute};
use crate::palette::PaletteExtractor;
use crate::{gifsicle, naming, scale, source};

/// JPEG encode quality for all size variants.
const JPEG_QUALITY: u8 = 85;

/// Resizes an image into a set of bounded size variants and writes them to
/// an output directory.
///
/// # Example
///
/// ```no_run
/// use thumbsmith::{ImageProcessor, OutputFormat, PaletteExtractor};
///
/// let processor = ImageProcessor::new("/var/www/thumbs")
///     .size("thumb", 300)
///     .size("large", 500)
///     .output_format(OutputFormat::Original)
///     .palette_extractor(PaletteExtractor::default());
///
/// let result = processor.process_image("photos/holiday.png", "Holiday Snap")?;
/// for (suffix, file_name) in result.file_names() {
///     println!("{suffix}: {file_name}");
/// }
/// # Ok::<(), thumbsmith::ProcessorError>(())
/// ```
#[derive(Debug)]
pub struct ImageProcessor {
    output_dir: PathBuf,
    scratch_dir: PathBuf,
    sizes: Vec<(String, u32)>,
    output_format: OutputFormat,
    overwrite: bool,
    extractor: Option<PaletteExtractor>,
    gifsicle_available: bool,
}

impl ImageProcessor {
    /// Create a processor writing into `output_dir`.
    ///
    /// Probes once for the external GIF resizer; GIF-to-GIF resizes keep
    /// their animation only when it was found.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        ImageProcessor {
            output_dir: output_dir.into(),
            scratch_dir: std::env::temp_dir(),
            sizes: Vec::new(),
            output_format: OutputFormat::default(),
            overwrite: true,
            extractor: None,
            gifsicle_available: gifsicle::probe(),
        }
    }

    /// Add a size variant: `suffix` names it (and lands in the filename),
    /// `bounding_size` is the square bound in pixels.
    pub fn size(mut self, suffix: impl Into<String>, bounding_size: u32) -> Self {
        self.sizes.push((suffix.into(), bounding_size));
        self
    }

    /// Set the output format policy. Defaults to [`OutputFormat::Jpeg`].
    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Whether existing files may be overwritten. Defaults to `true`; when
    /// disabled, colliding filenames get a numeric marker instead.
    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Directory for scratch copies of fetched sources. Defaults to the
    /// system temp directory.
    pub fn scratch_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.scratch_dir = dir.into();
        self
    }

    /// Also extract a dominant color palette from each processed image.
    pub fn palette_extractor(mut self, extractor: PaletteExtractor) -> Self {
        self.extractor = Some(extractor);
        self
    }

    /// Fetch `location`, produce every configured size variant under the
    /// output directory, and (if configured) extract the palette.
    ///
    /// `name` becomes the filename base after slugification. Variants are
    /// written in configuration order; the first failure aborts the call,
    /// leaving already-written variants on disk.
    pub fn process_image(
        &self,
        location: &str,
        name: &str,
    ) -> Result<ProcessedImage, ProcessorError> {
        if self.sizes.is_empty() {
            return Err(ProcessorError::NoSizesConfigured);
        }
        for (suffix, bounding_size) in &self.sizes {
            if *bounding_size == 0 {
                return Err(ProcessorError::InvalidSize {
                    suffix: suffix.clone(),
                });
            }
        }

        let scratch = source::fetch_to_scratch(location, &self.scratch_dir)?;
        let detected = output::detect(&scratch.bytes);

        let decoded = image::load_from_memory(&scratch.bytes)
            .map_err(|e| ProcessorError::UndecodableImage(e.to_string()))?;
        let rgba = decoded.to_rgba8();
        if rgba.width() == 0 || rgba.height() == 0 {
            return Err(ProcessorError::EmptyImage);
        }

        std::fs::create_dir_all(&self.output_dir).map_err(|source| {
            ProcessorError::OutputDirectory {
                path: self.output_dir.clone(),
                source,
            }
        })?;

        let mut result = ProcessedImage::default();
        for (suffix, bounding_size) in &self.sizes {
            let route =
                output::resolve(self.output_format, detected, self.gifsicle_available)?;
            let file_name = naming::resolve_file_name(
                name,
                suffix,
                route.format().extension(),
                self.overwrite,
                |f| self.output_dir.join(f).exists(),
            );
            let dest = self.output_dir.join(&file_name);

            match route {
                ResizeRoute::ExternalGif => {
                    tracing::debug!(
                        suffix,
                        bounding_size,
                        file_name,
                        "resizing via external gif encoder"
                    );
                    gifsicle::resize_fit(&scratch.path, *bounding_size, &dest)?;
                }
                ResizeRoute::Raster(format) => {
                    tracing::debug!(
                        suffix,
                        bounding_size,
                        file_name,
                        %format,
                        "resizing"
                    );
                    self.resize_and_encode(&rgba, *bounding_size, format, &dest)?;
                }
            }
            result.push_file_name(suffix, file_name);
        }

        if let Some(extractor) = &self.extractor {
            result.set_colors(extractor.extract(&rgba));
        }

        Ok(result)
    }

    /// Scale the source onto a fresh canvas and encode it to `dest`.
    ///
    /// The canvas starts transparent for PNG output and white otherwise,
    /// so transparency survives exactly when the format can carry it.
    fn resize_and_encode(
        &self,
        source: &RgbaImage,
        bounding_size: u32,
        format: EncodeFormat,
        dest: &Path,
    ) -> Result<(), ProcessorError> {
        let encode_error = |reason: String| ProcessorError::Encode { format, reason };

        let (target_width, target_height) =
            scale::plan(source.width(), source.height(), bounding_size);

        let background = if format == EncodeFormat::Png {
            image::Rgba([255, 255, 255, 0])
        } else {
            image::Rgba([255, 255, 255, 255])
        };
        let mut canvas = RgbaImage::from_pixel(target_width, target_height, background);
        let resized =
            imageops::resize(source, target_width, target_height, FilterType::CatmullRom);
        imageops::overlay(&mut canvas, &resized, 0, 0);

        let file = std::fs::File::create(dest).map_err(|e| encode_error(e.to_string()))?;
        let mut writer = std::io::BufWriter::new(file);

        match format {
            EncodeFormat::Jpeg => {
                let rgb = image::DynamicImage::ImageRgba8(canvas).to_rgb8();
                JpegEncoder::new_with_quality(&mut writer, JPEG_QUALITY)
                    .encode_image(&rgb)
                    .map_err(|e| encode_error(e.to_string()))?;
            }
            EncodeFormat::Png => {
                canvas
                    .write_to(&mut writer, ImageFormat::Png)
                    .map_err(|e| encode_error(e.to_string()))?;
            }
            EncodeFormat::Gif => {
                GifEncoder::new(&mut writer)
                    .encode_frame(Frame::new(canvas))
                    .map_err(|e| encode_error(e.to_string()))?;
            }
        }

        writer.flush().map_err(|e| encode_error(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_sizes_is_rejected_before_fetching() {
        let processor = ImageProcessor::new("/tmp/thumbsmith-test-out");
        let result = processor.process_image("/nonexistent/source.png", "x");
        assert!(matches!(result, Err(ProcessorError::NoSizesConfigured)));
    }

    #[test]
    fn test_zero_size_is_rejected_before_fetching() {
        let processor = ImageProcessor::new("/tmp/thumbsmith-test-out")
            .size("thumb", 300)
            .size("broken", 0);
        let result = processor.process_image("/nonexistent/source.png", "x");
        match result {
            Err(ProcessorError::InvalidSize { suffix }) => assert_eq!(suffix, "broken"),
            other => panic!("expected InvalidSize, got {other:?}"),
        }
    }

    #[test]
    fn test_builder_defaults() {
        let processor = ImageProcessor::new("/out");
        assert_eq!(processor.output_format, OutputFormat::Jpeg);
        assert!(processor.overwrite);
        assert!(processor.extractor.is_none());
        assert!(processor.sizes.is_empty());
    }
}
