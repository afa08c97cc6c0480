//! Umbrella crate for the `pixel-transforms` workspace.
//!
//! Three transforms over raw, interleaved 8-bit buffers, each returning a
//! newly allocated buffer and leaving its input untouched:
//!
//! - [`grayscale_convert`]: RGB to one luma channel.
//! - [`gaussian_blur`]: per-channel Gaussian convolution.
//! - [`dither_to_monochrome`]: Floyd–Steinberg dithering of a grayscale buffer.
//!
//! ```
//! use pixel_transforms::{GrayscaleStandard, ImageView, dither_to_monochrome, grayscale_convert};
//!
//! let rgb = [255u8, 0, 0].repeat(9);
//! let view = ImageView::from_slice(3, 3, 3, &rgb)?;
//! let gray = grayscale_convert(&view, GrayscaleStandard::Bt601)?;
//! assert!(gray.data().iter().all(|&v| v == 76));
//!
//! let mono = dither_to_monochrome(&gray.as_view())?;
//! assert!(mono.data().iter().all(|&v| v == 0 || v == 255));
//! # Ok::<(), pixel_transforms::Error>(())
//! ```

pub use pt_blur::*;
pub use pt_core::*;
pub use pt_dither::*;
pub use pt_gray::*;
