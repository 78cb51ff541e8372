use image::{Rgb, RgbImage};

use crate::heightfield::Dimensions;

// One RGB pixel
pub type Color = Rgb<u8>;

pub const WATER: Color = Rgb([0x00, 0x00, 0xFF]);
pub const GRASS: Color = Rgb([0x00, 0xFF, 0x00]);
pub const DIRT: Color = Rgb([0x65, 0x43, 0x21]);
pub const SNOW: Color = Rgb([0xFF, 0xFF, 0xFF]);
pub const FOREST: Color = Rgb([0x00, 0x80, 0x00]);
pub const SETTLEMENT: Color = Rgb([0xFF, 0x00, 0x00]);

// Output surface of a render: width×height RGB cells, row-major.
// Every write is clipped to the buffer, so layers can stamp blocks
// near the edges without bounds checks of their own.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    img: RgbImage,
}

impl PixelBuffer {
    // Allocate a black buffer
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            img: RgbImage::new(width, height),
        }
    }

    // Buffer matching a validated render size
    pub fn for_dimensions(dims: Dimensions) -> Self {
        Self::new(dims.width(), dims.height())
    }

    pub fn width(&self) -> usize {
        self.img.width() as usize
    }

    pub fn height(&self) -> usize {
        self.img.height() as usize
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        if x < self.width() && y < self.height() {
            Some(*self.img.get_pixel(x as u32, y as u32))
        } else {
            None
        }
    }

    // Write a single pixel, ignoring coordinates outside the buffer
    pub fn put(&mut self, x: usize, y: usize, color: Color) {
        if x < self.width() && y < self.height() {
            self.img.put_pixel(x as u32, y as u32, color);
        }
    }

    // Paint a w×h block anchored at its top-left corner (x, y),
    // keeping only the part that overlaps the buffer
    pub fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize, color: Color) {
        let x_end = x.saturating_add(w).min(self.width());
        let y_end = y.saturating_add(h).min(self.height());
        for py in y..y_end {
            for px in x..x_end {
                self.img.put_pixel(px as u32, py as u32, color);
            }
        }
    }

    // Row-major RGB bytes, 3 per pixel
    pub fn as_raw(&self) -> &[u8] {
        self.img.as_raw()
    }

    pub fn into_image(self) -> RgbImage {
        self.img
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffer_is_black() {
        let buf = PixelBuffer::new(4, 3);
        assert_eq!(buf.width(), 4);
        assert_eq!(buf.height(), 3);
        assert_eq!(buf.as_raw().len(), 4 * 3 * 3);
        assert!(buf.as_raw().iter().all(|&b| b == 0));
    }

    #[test]
    fn buffer_matches_dimensions() {
        let dims = Dimensions::new(7, 5).unwrap();
        let buf = PixelBuffer::for_dimensions(dims);
        assert_eq!((buf.width(), buf.height()), (7, 5));
        assert_eq!(buf.as_raw().len(), dims.area() * 3);
    }

    #[test]
    fn put_ignores_out_of_range() {
        let mut buf = PixelBuffer::new(2, 2);
        buf.put(5, 0, SNOW);
        buf.put(0, 2, SNOW);
        assert!(buf.as_raw().iter().all(|&b| b == 0));
        assert_eq!(buf.get(2, 0), None);
    }

    #[test]
    fn fill_rect_clips_at_edges() {
        let mut buf = PixelBuffer::new(6, 6);
        buf.fill_rect(4, 4, 5, 5, SETTLEMENT);
        for y in 0..6 {
            for x in 0..6 {
                let expected = if x >= 4 && y >= 4 { SETTLEMENT } else { Rgb([0, 0, 0]) };
                assert_eq!(buf.get(x, y), Some(expected), "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn into_image_keeps_pixels() {
        let mut buf = PixelBuffer::new(3, 1);
        buf.put(1, 0, DIRT);
        let img = buf.into_image();
        assert_eq!(*img.get_pixel(1, 0), DIRT);
    }
}
