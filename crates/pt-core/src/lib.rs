//! Foundational primitives for 8-bit pixel transforms.
//!
//! ## Buffer Layout
//! Buffers are flat, row-major and channel-interleaved. Sample `(x, y, c)` of a
//! `width x height x channels` buffer lives at `(y * width + x) * channels + c`.
//! There is no row padding: a buffer always holds exactly
//! `width * height * channels` samples.
//!
//! ## Sample Spaces
//! `Image<u8>` holds samples in `[0, 255]`. `Image<f64>` is the working
//! precision used while a transform accumulates sums or diffuses error; its
//! samples are kept in `[0.0, 1.0]` by [`clamp01`].
//!
//! ## Edge Modes
//! Neighborhood access past the image border is resolved by [`EdgeMode`].
//! The default, [`EdgeMode::Skip`], drops out-of-bounds taps entirely.

mod border;
mod error;
mod image;
mod index;
mod normalize;

pub use border::{EdgeMode, map_index};
pub use error::Error;
pub use image::{Image, ImageView};
pub use index::{coordinates_valid, pixel_index, pixels, taps};
pub use normalize::{clamp01, normalize, to_pixels, to_real, unnormalize};
