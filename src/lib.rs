//! Thumbsmith - image resizing and dominant color extraction.
//!
//! Fetches an image from a URL or filesystem path, writes proportionally
//! scaled size variants (never upscaled) in a configurable output format,
//! and optionally extracts a dominant color palette matched against a
//! whitelist.
//!
//! ```no_run
//! use thumbsmith::{ImageProcessor, PaletteExtractor};
//!
//! let processor = ImageProcessor::new("thumbs")
//!     .size("thumb", 300)
//!     .size("large", 500)
//!     .palette_extractor(PaletteExtractor::default());
//!
//! let result = processor.process_image("https://example.com/photo.jpg", "Photo")?;
//! println!("thumb: {:?}", result.file_name("thumb"));
//! println!("palette: {:?}", result.colors());
//! # Ok::<(), thumbsmith::ProcessorError>(())
//! ```

pub mod color;
pub mod error;
pub mod naming;
pub mod output;
pub mod palette;
pub mod processor;
pub mod scale;

mod gifsicle;
mod source;

pub use color::{ParseColorError, Rgba};
pub use error::ProcessorError;
pub use output::{EncodeFormat, OutputFormat, ResizeRoute, SourceFormat};
pub use palette::{PaletteExtractor, SampledPixels, Whitelist, WhitelistError};
pub use processor::{ImageProcessor, ProcessedImage};
