use log::debug;
use pt_core::{Error, Image, ImageView, normalize, pixel_index, pixels, unnormalize};

use crate::standard::GrayscaleStandard;

/// Reduces an interleaved RGB buffer to one luma channel.
///
/// Fails with [`Error::ChannelMismatch`] unless `src` has exactly 3 channels.
pub fn grayscale_convert(
    src: &ImageView<'_, u8>,
    standard: GrayscaleStandard,
) -> Result<Image<u8>, Error> {
    ensure_channels(src, 3)?;

    let (w, h) = (src.width(), src.height());
    let data = src.as_slice();
    let mut out = Vec::with_capacity(w * h);
    for (x, y) in pixels(w, h) {
        let idx = pixel_index(x, y, w, 3);
        out.push(standard.luma(data[idx], data[idx + 1], data[idx + 2]));
    }

    debug!("grayscale_convert {w}x{h} standard={standard}");
    Image::from_vec(w, h, 1, out)
}

/// Single-channel bytes to normalized reals.
pub fn to_normalized_grayscale(src: &ImageView<'_, u8>) -> Result<Image<f64>, Error> {
    ensure_channels(src, 1)?;
    let data = src.as_slice().iter().map(|&v| normalize(v)).collect();
    Image::from_vec(src.width(), src.height(), 1, data)
}

/// Normalized single-channel reals back to bytes.
pub fn from_normalized_grayscale(src: &Image<f64>) -> Result<Image<u8>, Error> {
    ensure_channels(&src.as_view(), 1)?;
    let data = src.data().iter().map(|&v| unnormalize(v)).collect();
    Image::from_vec(src.width(), src.height(), 1, data)
}

fn ensure_channels<T>(src: &ImageView<'_, T>, expected: usize) -> Result<(), Error> {
    if src.channels() != expected {
        return Err(Error::ChannelMismatch {
            expected,
            actual: src.channels(),
        });
    }
    Ok(())
}
