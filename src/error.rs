//! Unified error type for the processing pipeline.

use std::path::PathBuf;

use thiserror::Error;

use crate::output::{EncodeFormat, SourceFormat};

/// Everything that can abort a [`process_image`] call.
///
/// A failed call returns no result object; files written before the
/// failure stay on disk. Variants fall into three groups:
///
/// - configuration (`NoSizesConfigured`, `InvalidSize`,
///   `UnsupportedFormat`): caller-fixable, never worth retrying as-is
/// - input (`SourceUnreadable`, `EmptySource`, `UndecodableImage`,
///   `EmptyImage`): the source is at fault
/// - environment (`Scratch`, `OutputDirectory`, `Encode`,
///   `ExternalEncoder`): the surroundings are at fault; retry policy is
///   the caller's business
///
/// [`process_image`]: crate::ImageProcessor::process_image
#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error("no sizes configured")]
    NoSizesConfigured,

    #[error("size '{suffix}' must be greater than zero")]
    InvalidSize { suffix: String },

    #[error("unsupported output for detected source format {detected:?}")]
    UnsupportedFormat { detected: SourceFormat },

    #[error("could not read source '{location}': {reason}")]
    SourceUnreadable { location: String, reason: String },

    #[error("source '{location}' is empty")]
    EmptySource { location: String },

    #[error("image could not be decoded: {0}")]
    UndecodableImage(String),

    #[error("image has no size")]
    EmptyImage,

    #[error("could not write scratch file '{}': {source}", path.display())]
    Scratch {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not create output directory '{}': {source}", path.display())]
    OutputDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not encode {format} image: {reason}")]
    Encode { format: EncodeFormat, reason: String },

    #[error("external GIF resize failed: {diagnostics}")]
    ExternalEncoder { diagnostics: String },
}
