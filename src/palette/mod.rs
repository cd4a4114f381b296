//! Dominant-color palette extraction.
//!
//! The extraction pipeline is: sub-sample the pixel grid at a fixed stride
//! ([`SampledPixels`]), snap every visible sample to the nearest entry of a
//! fixed reference [`Whitelist`], build an occurrence histogram, suppress
//! the assumed background color, and threshold the histogram into an
//! ordered palette ([`PaletteExtractor`]).

mod error;
mod extractor;
mod matcher;
mod sampler;
mod whitelist;

pub use error::WhitelistError;
pub use extractor::PaletteExtractor;
pub use sampler::SampledPixels;
pub use whitelist::Whitelist;
