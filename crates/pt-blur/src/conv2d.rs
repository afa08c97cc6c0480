use pt_core::{EdgeMode, Error, Image, clamp01, map_index, pixel_index, pixels, taps};

use crate::kernel2d::Kernel2D;

/// Convolves every channel of `data` with `kernel`, dropping out-of-bounds
/// taps without renormalizing. Each output sample is clamped to `[0, 1]`.
pub fn convolve(data: &Image<f64>, kernel: &Kernel2D) -> Result<Image<f64>, Error> {
    convolve_with(data, kernel, EdgeMode::Skip)
}

pub fn convolve_with(
    data: &Image<f64>,
    kernel: &Kernel2D,
    edge: EdgeMode,
) -> Result<Image<f64>, Error> {
    let planes = convolve_planes(data, kernel, edge);

    let (w, h, n) = (data.width(), data.height(), data.channels());
    let mut out = Image::new_fill(w, h, n, 0.0f64)?;
    let out_data = out.data_mut();
    for (c, plane) in planes.iter().enumerate() {
        for (i, &v) in plane.iter().enumerate() {
            out_data[i * n + c] = v;
        }
    }
    Ok(out)
}

#[cfg(not(feature = "parallel"))]
fn convolve_planes(data: &Image<f64>, kernel: &Kernel2D, edge: EdgeMode) -> Vec<Vec<f64>> {
    (0..data.channels())
        .map(|c| convolve_channel(data, kernel, c, edge))
        .collect()
}

#[cfg(feature = "parallel")]
fn convolve_planes(data: &Image<f64>, kernel: &Kernel2D, edge: EdgeMode) -> Vec<Vec<f64>> {
    use rayon::prelude::*;

    (0..data.channels())
        .into_par_iter()
        .map(|c| convolve_channel(data, kernel, c, edge))
        .collect()
}

/// Convolves channel `c` into a dense `width * height` plane.
fn convolve_channel(data: &Image<f64>, kernel: &Kernel2D, c: usize, edge: EdgeMode) -> Vec<f64> {
    let (w, h, n) = (data.width(), data.height(), data.channels());
    let src = data.data();
    let radius = kernel.radius();

    let mut plane = Vec::with_capacity(w * h);
    for (x, y) in pixels(w, h) {
        let mut sum = 0.0;
        let mut mass = 0.0;
        for (sx, sy) in taps(radius) {
            let (Some(ix), Some(iy)) = (
                map_index(x as isize + sx, w, edge),
                map_index(y as isize + sy, h, edge),
            ) else {
                continue;
            };
            let kv = kernel.tap(sx, sy);
            sum += src[pixel_index(ix, iy, w, n) + c] * kv;
            mass += kv;
        }

        if edge == EdgeMode::Renormalize && mass != 0.0 {
            sum /= mass;
        }
        plane.push(clamp01(sum));
    }
    plane
}
