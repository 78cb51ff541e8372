use rand::Rng;

use crate::FeatureLayer;
use crate::canvas::{Color, PixelBuffer, WATER};
use crate::classify::WATER_THRESHOLD;
use crate::heightfield::HeightField;

// Repaints every low cell as water. Same predicate and color as the
// Water band, so on its own it never changes the picture; it stays a
// separate stage so the layer order matches the documented pipeline.
pub struct LakeFill {
    threshold: f32,
    color: Color,
}

impl Default for LakeFill {
    fn default() -> Self {
        Self {
            threshold: WATER_THRESHOLD,
            color: WATER,
        }
    }
}

impl FeatureLayer for LakeFill {
    fn name(&self) -> &'static str {
        "lakes"
    }

    fn apply<R: Rng + ?Sized>(
        &self,
        field: &HeightField,
        canvas: &mut PixelBuffer,
        _rng: &mut R,
    ) -> usize {
        let mut painted = 0;
        for (x, y, e) in field.iter() {
            if e < self.threshold {
                canvas.put(x, y, self.color);
                painted += 1;
            }
        }
        painted
    }
}
