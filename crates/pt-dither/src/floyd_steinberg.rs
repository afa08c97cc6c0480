use log::debug;
use pt_core::{Error, Image, ImageView, clamp01, coordinates_valid, pixel_index, pixels};
use pt_gray::{from_normalized_grayscale, to_normalized_grayscale};

/// `(dx, dy, weight / 16)` in the order the error is pushed.
const DIFFUSION: [(isize, isize, f64); 4] = [(1, 0, 7.0), (-1, 1, 3.0), (0, 1, 5.0), (1, 1, 1.0)];

/// Dithers a single-channel grayscale buffer to bytes that are either 0 or 255.
///
/// Multi-channel input must be reduced first, e.g. with
/// `pt_gray::grayscale_convert`; otherwise [`Error::ChannelMismatch`].
pub fn dither_to_monochrome(src: &ImageView<'_, u8>) -> Result<Image<u8>, Error> {
    let mut data = to_normalized_grayscale(src)?;
    floyd_steinberg_in_place(&mut data)?;
    let out = from_normalized_grayscale(&data)?;

    debug!(
        "dither_to_monochrome {}x{} white={}",
        out.width(),
        out.height(),
        out.data().iter().filter(|&&v| v == u8::MAX).count()
    );
    Ok(out)
}

/// Quantizes a normalized single-channel buffer to `{0.0, 1.0}` in place.
pub fn floyd_steinberg_in_place(data: &mut Image<f64>) -> Result<(), Error> {
    if data.channels() != 1 {
        return Err(Error::ChannelMismatch {
            expected: 1,
            actual: data.channels(),
        });
    }

    let (w, h) = (data.width(), data.height());
    let buf = data.data_mut();
    for (x, y) in pixels(w, h) {
        let idx = pixel_index(x, y, w, 1);
        let old = buf[idx];
        let new = closest_mono(old);
        buf[idx] = new;
        let err = old - new;

        for (dx, dy, weight) in DIFFUSION {
            let nx = x as isize + dx;
            let ny = y as isize + dy;
            if coordinates_valid(nx, ny, w, h) {
                let n_idx = pixel_index(nx as usize, ny as usize, w, 1);
                buf[n_idx] = clamp01(buf[n_idx] + (err * weight / 16.0));
            }
        }
    }

    Ok(())
}

#[inline]
fn closest_mono(v: f64) -> f64 {
    if v >= 0.5 { 1.0 } else { 0.0 }
}
