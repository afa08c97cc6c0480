use log::debug;
use pt_core::{EdgeMode, Error, Image, ImageView, to_pixels, to_real};

use crate::conv2d::convolve_with;
use crate::kernel2d::Kernel2D;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianBlurConfig {
    /// Side of the square kernel; must be odd.
    pub kernel_size: usize,
    pub sigma: f64,
    pub edge: EdgeMode,
}

impl Default for GaussianBlurConfig {
    fn default() -> Self {
        Self {
            kernel_size: 5,
            sigma: 1.0,
            edge: EdgeMode::Skip,
        }
    }
}

/// Gaussian blur with out-of-bounds taps skipped.
///
/// Returns a new buffer with the same shape as `src`. Fails with
/// [`Error::InvalidKernelSize`] for an even `kernel_size`.
pub fn gaussian_blur(
    src: &ImageView<'_, u8>,
    kernel_size: usize,
    sigma: f64,
) -> Result<Image<u8>, Error> {
    gaussian_blur_with(
        src,
        &GaussianBlurConfig {
            kernel_size,
            sigma,
            edge: EdgeMode::Skip,
        },
    )
}

pub fn gaussian_blur_with(
    src: &ImageView<'_, u8>,
    cfg: &GaussianBlurConfig,
) -> Result<Image<u8>, Error> {
    let kernel = Kernel2D::gaussian(cfg.kernel_size, cfg.sigma)?;
    if log::log_enabled!(log::Level::Debug) {
        debug!(
            "gaussian_blur kernel size={} sigma={}\n{}",
            cfg.kernel_size,
            cfg.sigma,
            kernel.as_image().debug_dump()
        );
    }

    let data = to_real(src);
    let blurred = convolve_with(&data, &kernel, cfg.edge)?;

    debug!(
        "gaussian_blur {}x{}x{} edge={}",
        src.width(),
        src.height(),
        src.channels(),
        cfg.edge
    );
    Ok(to_pixels(&blurred))
}

#[cfg(test)]
mod tests {
    use pt_core::{EdgeMode, Error, Image};

    use crate::blur::{GaussianBlurConfig, gaussian_blur, gaussian_blur_with};

    #[test]
    fn even_kernel_size_fails() {
        let img = Image::new_fill(4, 4, 3, 128u8).expect("valid image");
        for size in [0usize, 2, 4] {
            assert_eq!(
                gaussian_blur(&img.as_view(), size, 1.0).expect_err("even size"),
                Error::InvalidKernelSize(size)
            );
        }
    }

    #[test]
    fn underflowing_sigma_fails_instead_of_blacking_out() {
        let img = Image::new_fill(3, 3, 1, 200u8).expect("valid image");
        assert_eq!(
            gaussian_blur(&img.as_view(), 3, 1e-160).expect_err("degenerate sigma"),
            Error::InvalidSigma(1e-160)
        );
    }

    #[test]
    fn output_keeps_shape() {
        let img = Image::new_fill(7, 3, 4, 10u8).expect("valid image");
        let out = gaussian_blur(&img.as_view(), 3, 1.0).expect("odd size");
        assert_eq!((out.width(), out.height(), out.channels()), (7, 3, 4));
    }

    #[test]
    fn size_one_kernel_leaves_image_unchanged() {
        let data: Vec<u8> = (0..48).map(|i| (i * 5) as u8).collect();
        let img = Image::from_vec(4, 4, 3, data).expect("valid image");
        let out = gaussian_blur(&img.as_view(), 1, 0.7).expect("odd size");
        assert_eq!(out, img);
    }

    #[test]
    fn skipped_taps_darken_corners_of_flat_image() {
        let img = Image::new_fill(9, 9, 1, 200u8).expect("valid image");
        let out = gaussian_blur(&img.as_view(), 3, 1.0).expect("odd size");

        let center = *out.get(4, 4, 0).expect("in bounds");
        let edge = *out.get(4, 0, 0).expect("in bounds");
        let corner = *out.get(0, 0, 0).expect("in bounds");
        assert_eq!(center, 200);
        assert!(corner < edge && edge < center);
    }

    #[test]
    fn renormalized_edges_keep_flat_image_flat() {
        let img = Image::new_fill(6, 5, 3, 77u8).expect("valid image");
        let cfg = GaussianBlurConfig {
            kernel_size: 5,
            sigma: 2.0,
            edge: EdgeMode::Renormalize,
        };
        let out = gaussian_blur_with(&img.as_view(), &cfg).expect("odd size");
        assert_eq!(out, img);
    }

    #[test]
    fn blur_spreads_an_impulse() {
        let mut data = vec![0u8; 25];
        data[12] = 255;
        let img = Image::from_vec(5, 5, 1, data).expect("valid image");

        let out = gaussian_blur(&img.as_view(), 3, 1.0).expect("odd size");
        let c = out.data()[12];
        assert!(c < 255 && c > 0);
        assert_eq!(out.data()[11], out.data()[13]);
        assert_eq!(out.data()[7], out.data()[17]);
        assert_eq!(out.data()[0], 0);
    }
}
