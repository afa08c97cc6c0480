//! Floyd–Steinberg error diffusion to a two-level (black/white) image.
//!
//! Pixels are visited in raster order. Each pixel is snapped to the nearer of
//! `0.0` and `1.0` and the rounding error is pushed onto the four neighbors
//! that have not been visited yet:
//!
//! ```text
//!          *    7/16
//!   3/16  5/16  1/16
//! ```
//!
//! Every neighbor update is clamped to `[0, 1]` immediately. The scan is
//! strictly sequential; each pixel depends on error written by its
//! predecessors.

mod floyd_steinberg;

pub use floyd_steinberg::{dither_to_monochrome, floyd_steinberg_in_place};
