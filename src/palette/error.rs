//! Error types for whitelist construction.

use thiserror::Error;

use crate::color::ParseColorError;

/// Error type for reference whitelist validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WhitelistError {
    /// No colors provided
    #[error("whitelist cannot be empty")]
    Empty,
    /// Duplicate color found at the specified index
    #[error("duplicate whitelist color at index {index}")]
    DuplicateColor {
        /// Index where the duplicate was found
        index: usize,
    },
    /// Invalid hex color string
    #[error("invalid whitelist color: {0}")]
    ParseColor(#[from] ParseColorError),
}
