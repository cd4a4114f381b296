//! Result of one processing run.

use crate::color::Rgba;

/// Output of a successful [`process_image`] call: one filename per
/// configured size, plus the dominant color palette when an extractor is
/// configured.
///
/// Filenames keep the order the sizes were configured in.
///
/// [`process_image`]: crate::ImageProcessor::process_image
#[derive(Debug, Clone, Default)]
pub struct ProcessedImage {
    file_names: Vec<(String, String)>,
    colors: Vec<Rgba>,
}

impl ProcessedImage {
    /// All `(suffix, filename)` pairs, in configuration order.
    pub fn file_names(&self) -> &[(String, String)] {
        &self.file_names
    }

    /// Filename written for one size suffix.
    pub fn file_name(&self, suffix: &str) -> Option<&str> {
        self.file_names
            .iter()
            .find(|(s, _)| s == suffix)
            .map(|(_, name)| name.as_str())
    }

    /// Dominant colors, most common first. Empty when no extractor was
    /// configured or nothing cleared the coverage threshold.
    pub fn colors(&self) -> &[Rgba] {
        &self.colors
    }

    pub(crate) fn push_file_name(&mut self, suffix: &str, file_name: String) {
        self.file_names.push((suffix.to_string(), file_name));
    }

    pub(crate) fn set_colors(&mut self, colors: Vec<Rgba>) {
        self.colors = colors;
    }
}
