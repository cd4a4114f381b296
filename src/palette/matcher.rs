//! Nearest-color matching against an ordered reference list.

use crate::color::Rgba;

/// Squared per-channel RGB distance. Alpha does not participate.
#[inline]
fn distance_squared(a: Rgba, b: Rgba) -> u32 {
    let dr = a.r as i32 - b.r as i32;
    let dg = a.g as i32 - b.g as i32;
    let db = a.b as i32 - b.b as i32;
    (dr * dr + dg * dg + db * db) as u32
}

/// Find the reference color nearest to `color`.
///
/// Returns `(index, squared_distance)` of the first entry achieving the
/// minimum distance, so ties break deterministically on list order.
///
/// # Panics
///
/// Panics if `colors` is empty. A non-empty list is a construction
/// invariant of [`Whitelist`](crate::Whitelist), which is the only caller.
#[inline]
pub(crate) fn nearest(color: Rgba, colors: &[Rgba]) -> (usize, u32) {
    assert!(!colors.is_empty(), "reference color list must be non-empty");

    let mut best_index = 0;
    let mut best_distance = u32::MAX;

    for (index, &reference) in colors.iter().enumerate() {
        let distance = distance_squared(color, reference);
        if distance < best_distance {
            best_distance = distance;
            best_index = index;
        }
    }

    (best_index, best_distance)
}
