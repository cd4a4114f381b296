//! External animation-preserving GIF resizer.
//!
//! Animated GIFs lose all frames but the first on the raster path, so
//! when the `gifsicle` binary is on `PATH` the processor delegates
//! GIF-to-GIF resizes to it.

use std::path::Path;
use std::process::Command;

use crate::error::ProcessorError;

/// Check whether `gifsicle` can be executed.
pub(crate) fn probe() -> bool {
    let available = Command::new("gifsicle")
        .arg("--version")
        .output()
        .map(|out| out.status.success())
        .unwrap_or(false);
    tracing::debug!(available, "probed for gifsicle");
    available
}

/// Resize `source` to fit a square bound, writing the result to `dest`.
///
/// Uses `--resize-fit`, which scales proportionally and never upscales,
/// matching the raster path's geometry.
pub(crate) fn resize_fit(
    source: &Path,
    bounding_size: u32,
    dest: &Path,
) -> Result<(), ProcessorError> {
    let output = Command::new("gifsicle")
        .arg("--resize-fit")
        .arg(format!("{bounding_size}x{bounding_size}"))
        .arg("--optimize=2")
        .arg(source)
        .arg("--output")
        .arg(dest)
        .output()
        .map_err(|e| ProcessorError::ExternalEncoder {
            diagnostics: format!("could not run gifsicle: {e}"),
        })?;

    if output.status.success() {
        Ok(())
    } else {
        Err(ProcessorError::ExternalEncoder {
            diagnostics: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}
