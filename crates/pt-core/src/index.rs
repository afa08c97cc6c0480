/// Offset of channel 0 of pixel `(x, y)`; channel `c` lives at `+ c`.
#[inline]
pub fn pixel_index(x: usize, y: usize, width: usize, channels: usize) -> usize {
    (y * width + x) * channels
}

#[inline]
pub fn coordinates_valid(x: isize, y: isize, width: usize, height: usize) -> bool {
    x >= 0 && y >= 0 && (x as usize) < width && (y as usize) < height
}

/// Raster-order pixel coordinates: `y` outer, `x` inner, both ascending.
pub fn pixels(width: usize, height: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..height).flat_map(move |y| (0..width).map(move |x| (x, y)))
}

/// Kernel offsets `(sx, sy)` over `[-radius, radius]^2`, `sy` outer.
pub fn taps(radius: usize) -> impl Iterator<Item = (isize, isize)> {
    let r = radius as isize;
    (-r..=r).flat_map(move |sy| (-r..=r).map(move |sx| (sx, sy)))
}

#[cfg(test)]
mod tests {
    use super::{coordinates_valid, pixel_index, pixels, taps};

    #[test]
    fn pixel_index_is_channel_zero_offset() {
        assert_eq!(pixel_index(0, 0, 4, 3), 0);
        assert_eq!(pixel_index(1, 0, 4, 3), 3);
        assert_eq!(pixel_index(0, 1, 4, 3), 12);
        assert_eq!(pixel_index(3, 2, 4, 1), 11);
    }

    #[test]
    fn coordinates_valid_rejects_each_side() {
        assert!(coordinates_valid(0, 0, 3, 2));
        assert!(coordinates_valid(2, 1, 3, 2));
        assert!(!coordinates_valid(-1, 0, 3, 2));
        assert!(!coordinates_valid(0, -1, 3, 2));
        assert!(!coordinates_valid(3, 0, 3, 2));
        assert!(!coordinates_valid(0, 2, 3, 2));
    }

    #[test]
    fn pixels_visit_rows_in_order() {
        let order: Vec<_> = pixels(2, 2).collect();
        assert_eq!(order, vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
        assert_eq!(pixels(0, 3).count(), 0);
    }

    #[test]
    fn taps_cover_square_with_rows_outer() {
        let t: Vec<_> = taps(1).collect();
        assert_eq!(t.len(), 9);
        assert_eq!(t[0], (-1, -1));
        assert_eq!(t[1], (0, -1));
        assert_eq!(t[3], (-1, 0));
        assert_eq!(t[8], (1, 1));
        assert_eq!(taps(0).collect::<Vec<_>>(), vec![(0, 0)]);
    }
}
