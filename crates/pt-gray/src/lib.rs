//! RGB to single-channel luma reduction.
//!
//! Weights are applied directly in the `[0, 255]` sample domain and the
//! weighted sum is rounded half away from zero. Every weight triple sums to
//! one, so in-range inputs always produce in-range luma without clamping.

mod convert;
mod standard;

pub use convert::{from_normalized_grayscale, grayscale_convert, to_normalized_grayscale};
pub use standard::GrayscaleStandard;
