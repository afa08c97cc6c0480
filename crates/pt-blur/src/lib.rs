//! Gaussian blur over interleaved 8-bit buffers.
//!
//! The blur normalizes samples to `[0, 1]`, convolves every channel with a
//! square Gaussian [`Kernel2D`] and converts back. Convolution resolves taps
//! past the border through [`EdgeMode`]; the default [`EdgeMode::Skip`]
//! leaves edge pixels with less kernel mass than interior ones and does not
//! compensate for it.
//!
//! With the `parallel` feature, channels are convolved concurrently on the
//! rayon pool. Results are identical to the sequential path.

pub mod blur;
pub mod conv2d;
pub mod kernel2d;

pub use blur::{GaussianBlurConfig, gaussian_blur, gaussian_blur_with};
pub use conv2d::{convolve, convolve_with};
pub use kernel2d::Kernel2D;
pub use pt_core::EdgeMode;
