use crate::Error;
use crate::index::{pixel_index, pixels};

/// Owned, interleaved `width x height x channels` buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Image<T> {
    width: usize,
    height: usize,
    channels: usize,
    data: Vec<T>,
}

impl<T> Image<T> {
    pub fn from_vec(width: usize, height: usize, channels: usize, data: Vec<T>) -> Result<Self, Error> {
        let expected = checked_len(width, height, channels, data.len())?;

        if data.len() != expected {
            return Err(Error::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn get(&self, x: usize, y: usize, c: usize) -> Option<&T> {
        self.as_view().get(x, y, c)
    }

    pub fn get_mut(&mut self, x: usize, y: usize, c: usize) -> Option<&mut T> {
        if x >= self.width || y >= self.height || c >= self.channels {
            return None;
        }
        let idx = pixel_index(x, y, self.width, self.channels) + c;
        self.data.get_mut(idx)
    }

    /// Builds an image whose shape is already known to be valid, e.g. one
    /// copied from an existing view.
    pub(crate) fn from_shape_of<U>(view: &ImageView<'_, U>, data: Vec<T>) -> Self {
        debug_assert_eq!(data.len(), view.as_slice().len());
        Self {
            width: view.width,
            height: view.height,
            channels: view.channels,
            data,
        }
    }

    pub fn as_view(&self) -> ImageView<'_, T> {
        ImageView {
            width: self.width,
            height: self.height,
            channels: self.channels,
            data: &self.data,
        }
    }
}

impl<T: Clone> Image<T> {
    pub fn new_fill(width: usize, height: usize, channels: usize, value: T) -> Result<Self, Error> {
        let len = checked_len(width, height, channels, 0)?;
        Ok(Self {
            width,
            height,
            channels,
            data: vec![value; len],
        })
    }
}

impl Image<f64> {
    /// Renders channel 0 of every pixel, one image row per line, followed by
    /// the total. Intended for logging small buffers such as kernels.
    pub fn debug_dump(&self) -> String {
        let mut out = String::from("[");
        let mut total = 0.0;
        for (x, y) in pixels(self.width, self.height) {
            if x == 0 {
                out.push('\n');
            }
            let v = self.data[pixel_index(x, y, self.width, self.channels)];
            out.push_str(&format!("{v:.8}, "));
            total += v;
        }
        out.push_str(&format!("\n]\nTOTAL: {total:.8}"));
        out
    }
}

/// Borrowed, interleaved view over a caller-owned buffer.
#[derive(Debug, Clone, Copy)]
pub struct ImageView<'a, T> {
    width: usize,
    height: usize,
    channels: usize,
    data: &'a [T],
}

impl<'a, T> ImageView<'a, T> {
    pub fn from_slice(width: usize, height: usize, channels: usize, data: &'a [T]) -> Result<Self, Error> {
        let expected = checked_len(width, height, channels, data.len())?;

        if data.len() != expected {
            return Err(Error::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }

    /// All channels of pixel `(x, y)`.
    pub fn pixel(&self, x: usize, y: usize) -> Option<&'a [T]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let start = pixel_index(x, y, self.width, self.channels);
        self.data.get(start..start + self.channels)
    }

    pub fn get(&self, x: usize, y: usize, c: usize) -> Option<&'a T> {
        if c >= self.channels {
            return None;
        }
        self.pixel(x, y).and_then(|px| px.get(c))
    }
}

fn checked_len(width: usize, height: usize, channels: usize, actual: usize) -> Result<usize, Error> {
    if width == 0 || height == 0 || channels == 0 {
        return Err(Error::EmptyImage);
    }

    width
        .checked_mul(height)
        .and_then(|v| v.checked_mul(channels))
        .ok_or(Error::SizeMismatch {
            expected: usize::MAX,
            actual,
        })
}
