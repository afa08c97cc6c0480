use crate::image::{Image, ImageView};

const MAX_SAMPLE: f64 = u8::MAX as f64;

/// Maps `[0, 255]` onto `[0.0, 1.0]`.
#[inline]
pub fn normalize(value: u8) -> f64 {
    f64::from(value) / MAX_SAMPLE
}

/// Maps `[0.0, 1.0]` back onto `[0, 255]`, rounding half away from zero.
///
/// Inputs outside the unit interval saturate; accumulated values should pass
/// through [`clamp01`] first.
#[inline]
pub fn unnormalize(value: f64) -> u8 {
    (value * MAX_SAMPLE).round().clamp(0.0, MAX_SAMPLE) as u8
}

#[inline]
pub fn clamp01(value: f64) -> f64 {
    if value >= 1.0 {
        1.0
    } else if value <= 0.0 {
        0.0
    } else {
        value
    }
}

/// Per-sample [`normalize`] over any channel count.
pub fn to_real(img: &ImageView<'_, u8>) -> Image<f64> {
    let data = img.as_slice().iter().map(|&v| normalize(v)).collect();
    Image::from_shape_of(img, data)
}

/// Per-sample [`unnormalize`] over any channel count.
pub fn to_pixels(img: &Image<f64>) -> Image<u8> {
    let data = img.data().iter().map(|&v| unnormalize(v)).collect();
    Image::from_shape_of(&img.as_view(), data)
}
