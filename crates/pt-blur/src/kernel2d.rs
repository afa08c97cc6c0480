use core::f64::consts::PI;

use pt_core::{Error, Image, pixel_index, pixels};

/// Square, odd-sized convolution kernel stored as a single-channel real image.
///
/// Conventions:
/// - `radius = size / 2`; tap `(sx, sy)` reads weight `(radius + sx, radius + sy)`.
/// - Gaussian kernels are normalized so that `sum(weights) ~= 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel2D {
    radius: usize,
    weights: Image<f64>,
}

impl Kernel2D {
    /// Sampled 2D Gaussian with standard deviation `sigma`, normalized to unit
    /// sum to compensate for truncating the infinite support.
    pub fn gaussian(size: usize, sigma: f64) -> Result<Self, Error> {
        ensure_odd(size)?;
        if !(sigma.is_finite() && sigma > 0.0) {
            return Err(Error::InvalidSigma(sigma));
        }

        let radius = size / 2;
        let two_sigma2 = 2.0 * sigma * sigma;
        let factor = 1.0 / (PI * two_sigma2);
        // 2*sigma^2 underflows to zero (or a subnormal) for tiny sigma.
        if !two_sigma2.is_normal() || !factor.is_finite() {
            return Err(Error::InvalidSigma(sigma));
        }

        let mut weights = Image::new_fill(size, size, 1, 0.0f64)?;
        let mut sum = 0.0;
        for (x, y) in pixels(size, size) {
            let dx = x as f64 - radius as f64;
            let dy = y as f64 - radius as f64;
            let v = factor * (-((dx * dx + dy * dy) / two_sigma2)).exp();
            weights.data_mut()[pixel_index(x, y, size, 1)] = v;
            sum += v;
        }

        for w in weights.data_mut() {
            *w /= sum;
        }

        Ok(Self { radius, weights })
    }

    /// Arbitrary kernel from `size * size` row-major weights, used as given.
    pub fn from_vec(size: usize, weights: Vec<f64>) -> Result<Self, Error> {
        ensure_odd(size)?;
        let weights = Image::from_vec(size, size, 1, weights)?;
        Ok(Self {
            radius: size / 2,
            weights,
        })
    }

    pub fn size(&self) -> usize {
        self.weights.width()
    }

    pub fn radius(&self) -> usize {
        self.radius
    }

    /// Weight at kernel cell `(kx, ky)`, both in `[0, size)`.
    #[inline]
    pub fn weight(&self, kx: usize, ky: usize) -> f64 {
        self.weights.data()[pixel_index(kx, ky, self.size(), 1)]
    }

    /// Weight for tap offset `(sx, sy)` relative to the kernel center.
    #[inline]
    pub fn tap(&self, sx: isize, sy: isize) -> f64 {
        let r = self.radius as isize;
        self.weight((r + sx) as usize, (r + sy) as usize)
    }

    pub fn sum(&self) -> f64 {
        self.weights.data().iter().sum()
    }

    pub fn as_image(&self) -> &Image<f64> {
        &self.weights
    }
}

fn ensure_odd(size: usize) -> Result<(), Error> {
    if size.is_multiple_of(2) {
        return Err(Error::InvalidKernelSize(size));
    }
    Ok(())
}
