//! Output filename construction and conflict resolution.

/// Slugify a filename part: lowercase, runs of anything outside `a-z0-9`
/// collapse into a single dash, leading/trailing dashes trimmed.
///
/// # Example
///
/// ```
/// use thumbsmith::naming::sanitize;
///
/// assert_eq!(sanitize("PNG image"), "png-image");
/// assert_eq!(sanitize("  fancy__Name!! "), "fancy-name");
/// ```
pub fn sanitize(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_dash = false;

    for c in input.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// Build the candidate filename for a given disambiguation marker.
///
/// A name whose parts all sanitize away falls back to the stem `image`;
/// without it the result would be a bare dot-extension (a hidden file on
/// Unix).
fn candidate(base_name: &str, marker: Option<u32>, suffix: &str, extension: &str) -> String {
    let mut raw = base_name.to_string();
    if let Some(marker) = marker {
        raw.push_str(&format!("-{marker}"));
    }
    if !suffix.is_empty() {
        raw.push('-');
        raw.push_str(suffix);
    }

    let mut stem = sanitize(&raw);
    if stem.is_empty() {
        stem.push_str("image");
    }
    format!("{stem}.{extension}")
}

/// Find the first non-colliding filename for a size variant.
///
/// With `overwrite` set the undecorated candidate is returned regardless of
/// collisions. Otherwise candidates are probed through `exists` with an
/// incrementing marker inserted between base name and suffix
/// (`name.ext`, `name-2.ext`, `name-3.ext`, ...) until one is free.
///
/// `exists` receives the bare filename; the caller anchors it to the output
/// directory. Keeping the probe a closure keeps this function pure enough
/// to test without a filesystem.
pub fn resolve_file_name(
    base_name: &str,
    suffix: &str,
    extension: &str,
    overwrite: bool,
    exists: impl Fn(&str) -> bool,
) -> String {
    let mut marker: Option<u32> = None;

    loop {
        let file_name = candidate(base_name, marker, suffix, extension);
        if overwrite || !exists(&file_name) {
            return file_name;
        }
        marker = Some(marker.map_or(2, |m| m + 1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sanitize_basic() {
        assert_eq!(sanitize("png image"), "png-image");
        assert_eq!(sanitize("Already-Fine"), "already-fine");
        assert_eq!(sanitize("tabs\tand\nnewlines"), "tabs-and-newlines");
    }

    #[test]
    fn test_sanitize_collapses_and_trims() {
        assert_eq!(sanitize("--a   b--"), "a-b");
        assert_eq!(sanitize("___"), "");
        assert_eq!(sanitize("über café"), "ber-caf");
    }

    #[test]
    fn test_plain_name_with_suffix() {
        let name = resolve_file_name("png image", "thumb", "jpg", true, |_| false);
        assert_eq!(name, "png-image-thumb.jpg");
    }

    #[test]
    fn test_empty_suffix_omitted() {
        let name = resolve_file_name("photo", "", "png", true, |_| false);
        assert_eq!(name, "photo.png");
    }

    #[test]
    fn test_overwrite_ignores_collisions() {
        let name = resolve_file_name("photo", "thumb", "jpg", true, |_| true);
        assert_eq!(name, "photo-thumb.jpg");
    }

    #[test]
    fn test_first_conflict_gets_marker_two() {
        let taken: HashSet<&str> = ["photo-thumb.jpg"].into();
        let name =
            resolve_file_name("photo", "thumb", "jpg", false, |f| taken.contains(f));
        assert_eq!(name, "photo-2-thumb.jpg");
    }

    #[test]
    fn test_markers_increment_until_free() {
        let taken: HashSet<&str> =
            ["photo.png", "photo-2.png", "photo-3.png"].into();
        let name = resolve_file_name("photo", "", "png", false, |f| taken.contains(f));
        assert_eq!(name, "photo-4.png");
    }

    #[test]
    fn test_marker_precedes_suffix() {
        let taken: HashSet<&str> = ["holiday-snap-large.gif"].into();
        let name =
            resolve_file_name("Holiday Snap", "large", "gif", false, |f| taken.contains(f));
        assert_eq!(name, "holiday-snap-2-large.gif");
    }

    #[test]
    fn test_fully_sanitized_away_name_gets_fallback_stem() {
        let name = resolve_file_name("!!!", "", "jpg", true, |_| false);
        assert_eq!(name, "image.jpg");

        // A surviving suffix is stem enough on its own.
        let name = resolve_file_name("!!!", "thumb", "jpg", true, |_| false);
        assert_eq!(name, "thumb.jpg");
    }

    #[test]
    fn test_no_conflict_means_no_marker() {
        let name = resolve_file_name("photo", "thumb", "jpg", false, |_| false);
        assert_eq!(name, "photo-thumb.jpg");
    }
}
