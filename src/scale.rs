//! Proportional scale planning.

/// Compute target dimensions for fitting a source image into a square
/// bounding size.
///
/// The scale factor is `min(bound/width, bound/height, 1)`; the cap at 1
/// means images are never upscaled. Both targets round up, so a source
/// already within the bound passes through unchanged.
///
/// Both source dimensions must be greater than zero; the pipeline rejects
/// zero-area images before planning.
///
/// # Example
///
/// ```
/// use thumbsmith::scale;
///
/// assert_eq!(scale::plan(800, 400, 300), (300, 150));
/// assert_eq!(scale::plan(100, 100, 500), (100, 100)); // never upscale
/// ```
pub fn plan(source_width: u32, source_height: u32, bounding_size: u32) -> (u32, u32) {
    debug_assert!(source_width > 0 && source_height > 0);

    let scale = (bounding_size as f64 / source_width as f64)
        .min(bounding_size as f64 / source_height as f64)
        .min(1.0);

    let target_width = (source_width as f64 * scale).ceil() as u32;
    let target_height = (source_height as f64 * scale).ceil() as u32;
    (target_width, target_height)
}
