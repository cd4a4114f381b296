//! Fixed reference color whitelist.

use std::collections::HashSet;
use std::str::FromStr;

use super::error::WhitelistError;
use super::matcher;
use crate::color::Rgba;

/// The built-in reference set: a spread of hues, earth tones and greys that
/// the extractor snaps sampled pixels onto when no custom whitelist is
/// configured.
const DEFAULT_COLORS: [Rgba; 29] = [
    Rgba::new(0x66, 0x00, 0x00),
    Rgba::new(0x99, 0x00, 0x00),
    Rgba::new(0xcc, 0x00, 0x00),
    Rgba::new(0xcc, 0x33, 0x33),
    Rgba::new(0xea, 0x4c, 0x88),
    Rgba::new(0x99, 0x33, 0x99),
    Rgba::new(0x66, 0x33, 0x99),
    Rgba::new(0x33, 0x33, 0x99),
    Rgba::new(0x00, 0x66, 0xcc),
    Rgba::new(0x00, 0x99, 0xcc),
    Rgba::new(0x66, 0xcc, 0xcc),
    Rgba::new(0x77, 0xcc, 0x33),
    Rgba::new(0x66, 0x99, 0x00),
    Rgba::new(0x33, 0x66, 0x00),
    Rgba::new(0x66, 0x66, 0x00),
    Rgba::new(0x99, 0x99, 0x00),
    Rgba::new(0xcc, 0xcc, 0x33),
    Rgba::new(0xff, 0xff, 0x00),
    Rgba::new(0xff, 0xcc, 0x33),
    Rgba::new(0xff, 0x99, 0x00),
    Rgba::new(0xff, 0x66, 0x00),
    Rgba::new(0xcc, 0x66, 0x33),
    Rgba::new(0x99, 0x66, 0x33),
    Rgba::new(0x66, 0x33, 0x00),
    Rgba::new(0x00, 0x00, 0x00),
    Rgba::new(0x99, 0x99, 0x99),
    Rgba::new(0xcc, 0xcc, 0xcc),
    Rgba::new(0xff, 0xff, 0xff),
    Rgba::new(0x42, 0x41, 0x53),
];

/// An ordered, fixed set of reference colors.
///
/// The whitelist defines the only colors a palette extraction can output.
/// Entry order matters twice: it is the deterministic tie-break both for
/// nearest-color matching and for equal occurrence counts in the final
/// palette ordering.
///
/// The set is immutable after construction. Occurrence counters are NOT
/// stored here; each extraction run owns its own histogram, so one
/// `Whitelist` can safely back any number of runs.
///
/// # Example
///
/// ```
/// use thumbsmith::Whitelist;
///
/// let whitelist = Whitelist::from_hex(&["#000000", "#ffffff", "#cc6633"]).unwrap();
/// assert_eq!(whitelist.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Whitelist {
    colors: Vec<Rgba>,
}

impl Whitelist {
    /// Create a whitelist from the given colors, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns [`WhitelistError::Empty`] for an empty slice and
    /// [`WhitelistError::DuplicateColor`] when the same color appears twice;
    /// a duplicate entry could never be reached by nearest-color matching.
    pub fn new(colors: &[Rgba]) -> Result<Self, WhitelistError> {
        if colors.is_empty() {
            return Err(WhitelistError::Empty);
        }

        let mut seen = HashSet::new();
        for (index, color) in colors.iter().enumerate() {
            if !seen.insert(*color) {
                return Err(WhitelistError::DuplicateColor { index });
            }
        }

        Ok(Self {
            colors: colors.to_vec(),
        })
    }

    /// Create a whitelist from hex color strings.
    ///
    /// # Errors
    ///
    /// Returns [`WhitelistError::ParseColor`] for an invalid hex string,
    /// plus the validation errors of [`Whitelist::new`].
    pub fn from_hex(colors: &[&str]) -> Result<Self, WhitelistError> {
        let parsed: Vec<Rgba> = colors
            .iter()
            .map(|s| Rgba::from_str(s).map_err(WhitelistError::ParseColor))
            .collect::<Result<_, _>>()?;
        Self::new(&parsed)
    }

    /// Number of reference colors.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; empty whitelists are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The reference color at the given index.
    #[inline]
    pub fn color(&self, index: usize) -> Rgba {
        self.colors[index]
    }

    /// All reference colors in whitelist order.
    #[inline]
    pub fn colors(&self) -> &[Rgba] {
        &self.colors
    }

    /// Find the entry nearest to `color` by squared RGB distance.
    ///
    /// Returns `(index, squared_distance)`. Ties resolve to the earliest
    /// entry, so results are deterministic for a given whitelist order.
    /// Alpha is ignored; callers filter transparent pixels before matching.
    #[inline]
    pub fn find_nearest(&self, color: Rgba) -> (usize, u32) {
        matcher::nearest(color, &self.colors)
    }
}

impl Default for Whitelist {
    /// The built-in 29-color reference set.
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS.to_vec(),
        }
    }
}
