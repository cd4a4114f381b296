//! Output format policy and per-variant route resolution.
//!
//! The processor is configured with an [`OutputFormat`] policy; combined
//! with the detected source format this resolves into a concrete
//! [`EncodeFormat`] and a [`ResizeRoute`]: either the generic decode,
//! scale-and-composite, re-encode path, or handing the file to an external
//! animation-preserving GIF resizer.

use crate::error::ProcessorError;

/// Requested output format policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Always encode JPEG.
    #[default]
    Jpeg,
    /// Always encode PNG.
    Png,
    /// Always encode GIF.
    Gif,
    /// Preserve the detected source format.
    Original,
}

/// Source format detected from the raw bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Jpeg,
    Png,
    Gif,
    /// Decodable but not one of the three supported output formats,
    /// or not recognized at all.
    Other,
}

/// Concrete format a size variant is encoded to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeFormat {
    Jpeg,
    Png,
    Gif,
}

impl EncodeFormat {
    /// File extension for this format, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            EncodeFormat::Jpeg => "jpg",
            EncodeFormat::Png => "png",
            EncodeFormat::Gif => "gif",
        }
    }
}

impl std::fmt::Display for EncodeFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EncodeFormat::Jpeg => "jpeg",
            EncodeFormat::Png => "png",
            EncodeFormat::Gif => "gif",
        };
        write!(f, "{name}")
    }
}

/// How a size variant gets produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeRoute {
    /// Decode, scale onto a composited canvas, encode with the given format.
    Raster(EncodeFormat),
    /// Hand the original file to the external GIF resizer, which preserves
    /// animation. Output format is always GIF.
    ExternalGif,
}

impl ResizeRoute {
    /// The concrete format this route encodes to.
    pub fn format(self) -> EncodeFormat {
        match self {
            ResizeRoute::Raster(format) => format,
            ResizeRoute::ExternalGif => EncodeFormat::Gif,
        }
    }
}

/// Detect the source format from raw image bytes.
pub fn detect(bytes: &[u8]) -> SourceFormat {
    match image::guess_format(bytes) {
        Ok(image::ImageFormat::Jpeg) => SourceFormat::Jpeg,
        Ok(image::ImageFormat::Png) => SourceFormat::Png,
        Ok(image::ImageFormat::Gif) => SourceFormat::Gif,
        _ => SourceFormat::Other,
    }
}

/// Resolve the route for one size variant.
///
/// The external GIF path applies only when the resizer is available AND the
/// source is a GIF AND the output stays GIF; everything else takes the
/// raster path. The raster path flattens animated sources to their first
/// decoded frame.
///
/// # Errors
///
/// [`ProcessorError::UnsupportedFormat`] when the policy is
/// [`OutputFormat::Original`] and the detected source format is not one of
/// JPEG, PNG or GIF.
pub fn resolve(
    policy: OutputFormat,
    detected: SourceFormat,
    external_gif_available: bool,
) -> Result<ResizeRoute, ProcessorError> {
    let format = match policy {
        OutputFormat::Jpeg => EncodeFormat::Jpeg,
        OutputFormat::Png => EncodeFormat::Png,
        OutputFormat::Gif => EncodeFormat::Gif,
        OutputFormat::Original => match detected {
            SourceFormat::Jpeg => EncodeFormat::Jpeg,
            SourceFormat::Png => EncodeFormat::Png,
            SourceFormat::Gif => EncodeFormat::Gif,
            SourceFormat::Other => {
                return Err(ProcessorError::UnsupportedFormat { detected })
            }
        },
    };

    if external_gif_available
        && detected == SourceFormat::Gif
        && format == EncodeFormat::Gif
    {
        Ok(ResizeRoute::ExternalGif)
    } else {
        Ok(ResizeRoute::Raster(format))
    }
}
