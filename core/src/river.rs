use rand::Rng;

use crate::FeatureLayer;
use crate::canvas::{Color, PixelBuffer, WATER};
use crate::heightfield::HeightField;

// A one-pixel-wide sinusoidal river across the whole width:
// row(x) = floor(height / 2 + amplitude * sin(x / period)).
// Depends only on the canvas size, never on elevations.
pub struct RiverPath {
    amplitude: f64,
    period: f64,
    color: Color,
}

impl Default for RiverPath {
    fn default() -> Self {
        Self {
            amplitude: 50.0,
            period: 100.0,
            color: WATER,
        }
    }
}

impl RiverPath {
    pub fn new(amplitude: f64, period: f64) -> Self {
        assert!(period != 0.0, "river period must be non-zero");
        Self {
            amplitude,
            period,
            color: WATER,
        }
    }

    // Row the river crosses column `x` at, if it falls inside the canvas
    pub fn row_at(&self, x: usize, height: usize) -> Option<usize> {
        let y = (height as f64 / 2.0 + (x as f64 / self.period).sin() * self.amplitude).floor();
        if y >= 0.0 && y < height as f64 {
            Some(y as usize)
        } else {
            None
        }
    }
}

impl FeatureLayer for RiverPath {
    fn name(&self) -> &'static str {
        "river"
    }

    fn apply<R: Rng + ?Sized>(
        &self,
        field: &HeightField,
        canvas: &mut PixelBuffer,
        _rng: &mut R,
    ) -> usize {
        let mut painted = 0;
        for x in 0..field.width() {
            if let Some(y) = self.row_at(x, field.height()) {
                canvas.put(x, y, self.color);
                painted += 1;
            }
        }
        painted
    }
}
