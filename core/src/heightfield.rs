use rand::Rng;

use crate::error::{Result, TerrainError};

// Validated render size. Both sides are at least 1 and fit the u32
// extent of the output image, and the RGB byte count fits in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    width: u32,
    height: u32,
}

impl Dimensions {
    pub fn new(width: i64, height: i64) -> Result<Self> {
        let invalid = TerrainError::InvalidDimensions { width, height };
        if width <= 0 || height <= 0 {
            return Err(invalid);
        }
        let w = u32::try_from(width).map_err(|_| invalid)?;
        let h = u32::try_from(height).map_err(|_| invalid)?;
        Self::byte_len(w, h).ok_or(invalid)?;
        Ok(Self {
            width: w,
            height: h,
        })
    }

    // width * height * 3, if it fits in usize
    fn byte_len(width: u32, height: u32) -> Option<usize> {
        let w = usize::try_from(width).ok()?;
        let h = usize::try_from(height).ok()?;
        w.checked_mul(h)?.checked_mul(3)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn area(&self) -> usize {
        // new() already checked width * height * 3
        Self::byte_len(self.width, self.height).map_or(0, |bytes| bytes / 3)
    }
}

// Grid of elevations in [0, 1), row-major, access as `cells[y * width + x]`.
// Size is fixed at construction and the field is read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct HeightField {
    dims: Dimensions,
    width: usize,
    height: usize,
    cells: Vec<f32>,
}

impl HeightField {
    // Sample every cell independently from a uniform [0, 1) distribution.
    // No smoothing: neighbouring cells are unrelated.
    pub fn generate<R: Rng + ?Sized>(width: i64, height: i64, rng: &mut R) -> Result<Self> {
        Self::from_fn(width, height, |_, _| rng.random::<f32>())
    }

    // Build a field by calling `sample(x, y)` once per cell in row-major order
    pub fn from_fn<F>(width: i64, height: i64, mut sample: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> f32,
    {
        let dims = Dimensions::new(width, height)?;
        let (w, h) = (dims.width() as usize, dims.height() as usize);
        let mut cells = Vec::with_capacity(dims.area());
        for y in 0..h {
            for x in 0..w {
                cells.push(sample(x, y));
            }
        }
        Ok(Self {
            dims,
            width: w,
            height: h,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn get(&self, x: usize, y: usize) -> Option<f32> {
        if x < self.width && y < self.height {
            Some(self.cells[y * self.width + x])
        } else {
            None
        }
    }

    pub fn cells(&self) -> &[f32] {
        &self.cells
    }

    // (x, y, elevation) for every cell, row by row
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, f32)> + '_ {
        let w = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &e)| (i % w, i / w, e))
    }
}
